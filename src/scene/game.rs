use crossterm::event::Event;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::{
    base, DuckUICoalesce, DuckUIFlash, FailureCutScene, FlyAwayDuck, GameOver, Scene,
    SceneContext, SceneSignal, SuccessCutScene,
};
use crate::compute::{
    kill_duck, living_ducks, round_outcome, start_new_round, try_spawn_duck,
};
use crate::duck::{Duck, DuckHatchery, SPAWN_Y};
use crate::entities::{DuckColour, RoundOutcome, SHOTS_PER_SPAWN};
use crate::error::Result;

/// The live game: ducks fly, the player shoots, cut scenes play in between.
/// Finishes on game over.
pub struct SinglePlayerGame {
    ducks: Vec<Duck>,
    hatchery: DuckHatchery,
    rng: StdRng,
    /// Colour of the first duck of a pair to land.
    previous_duck_colour: Option<DuckColour>,
}

impl SinglePlayerGame {
    pub fn new(ctx: &mut SceneContext<'_>) -> Self {
        Self::with_rng(ctx, StdRng::from_entropy())
    }

    /// Sets up the hatchery and releases the first ducks.
    pub fn with_rng(ctx: &mut SceneContext<'_>, rng: StdRng) -> Self {
        let mut game = Self {
            ducks: Vec::new(),
            hatchery: DuckHatchery::new(ctx.textures, ctx.drawer),
            rng,
            previous_duck_colour: None,
        };
        try_spawn_duck(&game.hatchery, &mut game.ducks, ctx.stats, &mut game.rng);
        game
    }

    pub fn ducks(&self) -> &[Duck] {
        &self.ducks
    }

    /// Colour of a pair's first duck once it is on the ground and the
    /// second is still up.
    pub fn pending_pair_colour(&self) -> Option<DuckColour> {
        self.previous_duck_colour
    }

    /// Fires one shot at a world point.  The first living duck under it is
    /// hit.  Running dry with ducks still up sends them away.
    pub fn shoot_at(&mut self, ctx: &mut SceneContext<'_>, (x, y): (i32, i32)) -> Result<SceneSignal> {
        if ctx.stats.shots_left == 0 {
            return Ok(SceneSignal::Continue);
        }
        ctx.stats.shots_left -= 1;

        let (x, y) = (x as f64, y as f64);
        let target = self.ducks.iter_mut().find(|d| {
            d.alive
                && x > d.x
                && x < d.x + d.width() as f64
                && y > d.y
                && y < d.y + d.height() as f64
        });
        if let Some(duck) = target {
            if let Some(points) = kill_duck(duck, ctx.stats) {
                debug!(index = duck.index, points, score = ctx.stats.score, "hit");
            }
        }

        if ctx.stats.shots_left == 0 && living_ducks(&self.ducks) > 0 {
            return self.ducks_escape(ctx);
        }
        Ok(SceneSignal::Continue)
    }

    fn ducks_escape(&mut self, ctx: &mut SceneContext<'_>) -> Result<SceneSignal> {
        debug!(escaping = living_ducks(&self.ducks), "out of shots");
        ctx.stats.ducks_current.clear();

        let mut fly_away = FlyAwayDuck::new(&mut self.ducks, &mut self.rng);
        if ctx.play(&mut fly_away)? == SceneSignal::QuitRequested {
            return Ok(SceneSignal::QuitRequested);
        }
        self.ducks.clear();
        self.previous_duck_colour = None;

        let mut failure = FailureCutScene::new(ctx.textures);
        if ctx.play(&mut failure)? == SceneSignal::QuitRequested {
            return Ok(SceneSignal::QuitRequested);
        }
        self.try_spawn_duck_or_start_new_round(ctx)
    }

    /// Ends the round when every duck has been sent and the sky is empty,
    /// otherwise releases the next group with fresh shots.
    pub fn try_spawn_duck_or_start_new_round(&mut self, ctx: &mut SceneContext<'_>) -> Result<SceneSignal> {
        if let Some(outcome) = round_outcome(ctx.stats, self.ducks.is_empty()) {
            let mut coalesce = DuckUICoalesce::new(ctx.stats);
            if ctx.play(&mut coalesce)? == SceneSignal::QuitRequested {
                return Ok(SceneSignal::QuitRequested);
            }
            match outcome {
                RoundOutcome::Advance => {
                    let mut flash = DuckUIFlash::new(coalesce.stats());
                    if ctx.play(&mut flash)? == SceneSignal::QuitRequested {
                        return Ok(SceneSignal::QuitRequested);
                    }
                    start_new_round(ctx.stats);
                }
                RoundOutcome::GameOver => {
                    info!(round = ctx.stats.round, score = ctx.stats.score, "game over");
                    let mut game_over = GameOver::new(ctx.textures);
                    return match ctx.play(&mut game_over)? {
                        SceneSignal::QuitRequested => Ok(SceneSignal::QuitRequested),
                        _ => Ok(SceneSignal::Finished),
                    };
                }
            }
        }

        if try_spawn_duck(&self.hatchery, &mut self.ducks, ctx.stats, &mut self.rng) {
            ctx.stats.shots_left = SHOTS_PER_SPAWN;
        }
        Ok(SceneSignal::Continue)
    }

    fn duck_landed(&mut self, ctx: &mut SceneContext<'_>, landed: Duck) -> Result<SceneSignal> {
        debug!(index = landed.index, colour = ?landed.colour, "duck landed");
        if !self.ducks.is_empty() {
            self.previous_duck_colour = Some(landed.colour);
            return Ok(SceneSignal::Continue);
        }

        let x = landed.x as i32;
        let mut success = match (ctx.stats.ducks_simultaneous, self.previous_duck_colour.take()) {
            (2, Some(first)) => SuccessCutScene::pair(ctx.textures, x, first, landed.colour),
            _ => SuccessCutScene::single(ctx.textures, x, landed.colour),
        };
        ctx.play(&mut success)
    }
}

impl Scene for SinglePlayerGame {
    fn name(&self) -> &'static str {
        "single player game"
    }

    fn handle_input(&mut self, ctx: &mut SceneContext<'_>, event: &Event) -> Result<SceneSignal> {
        let signal = base::handle_input(ctx, event);
        if !signal.is_continue() {
            return Ok(signal);
        }
        if let Event::Resize(..) = event {
            self.hatchery.refit(ctx.drawer);
            let bounds = self.hatchery.bounds();
            debug!(left = bounds.left, right = bounds.right, "play area refitted");
        }
        match base::left_click(ctx, event) {
            Some(point) => self.shoot_at(ctx, point),
            None => Ok(SceneSignal::Continue),
        }
    }

    fn update(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> Result<SceneSignal> {
        for duck in self.ducks.iter_mut() {
            duck.update(delta_time, &mut self.rng);
        }

        let mut i = 0;
        while i < self.ducks.len() {
            if self.ducks[i].y <= SPAWN_Y {
                i += 1;
                continue;
            }
            let landed = self.ducks.remove(i);
            let signal = self.duck_landed(ctx, landed)?;
            if !signal.is_continue() {
                return Ok(signal);
            }
            let signal = self.try_spawn_duck_or_start_new_round(ctx)?;
            if !signal.is_continue() {
                return Ok(signal);
            }
        }
        Ok(SceneSignal::Continue)
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> SceneSignal {
        base::render_background(ctx);
        for duck in self.ducks.iter_mut() {
            duck.render(ctx.drawer, delta_time);
        }
        SceneSignal::Continue
    }

    fn render_foreground(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f64) -> SceneSignal {
        base::render_foreground(ctx);
        for duck in self.ducks.iter().filter(|d| d.is_falling()) {
            duck.render_score(ctx.drawer);
        }
        SceneSignal::Continue
    }
}
