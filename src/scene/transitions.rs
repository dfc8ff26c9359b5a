//! Short scenes played between duck groups and rounds.
//!
//! The hit-panel transitions animate a private copy of the player stats; the
//! shared stats are never touched by them.

use rand::Rng;

use super::{base, Scene, SceneContext, SceneSignal};
use crate::compute::coalesce_hits_step;
use crate::duck::Duck;
use crate::entities::{PlayerStats, DUCKS_PER_ROUND};
use crate::error::Result;
use crate::timer::Timer;

const FLY_AWAY_MESSAGE_POS: (i32, i32) = (177, 60);
const HIT_PANEL_STEP_MS: f64 = 500.0;
/// Five blinks, on and off.
const MAX_FLASHES: u32 = 5 * 2;

// ── Fly away ──────────────────────────────────────────────────────────────────

/// The player ran out of shots: the surviving ducks escape straight up.
pub struct FlyAwayDuck<'r, R: Rng> {
    ducks: &'r mut [Duck],
    rng: &'r mut R,
}

impl<'r, R: Rng> FlyAwayDuck<'r, R> {
    /// Sends every living duck in `ducks` up.  Shot ducks keep falling.
    pub fn new(ducks: &'r mut [Duck], rng: &'r mut R) -> Self {
        for duck in ducks.iter_mut().filter(|d| d.alive) {
            duck.fly_up();
        }
        Self { ducks, rng }
    }

    fn escaped(&self) -> bool {
        self.ducks.iter().filter(|d| d.alive).all(|d| !d.is_on_screen())
    }
}

impl<R: Rng> Scene for FlyAwayDuck<'_, R> {
    fn name(&self) -> &'static str {
        "fly away"
    }

    fn update(&mut self, _ctx: &mut SceneContext<'_>, delta_time: f64) -> Result<SceneSignal> {
        for duck in self.ducks.iter_mut() {
            duck.update(delta_time, &mut *self.rng);
        }
        if self.escaped() {
            return Ok(SceneSignal::Finished);
        }
        Ok(SceneSignal::Continue)
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> SceneSignal {
        ctx.drawer.blit(&ctx.textures.background_fail, 0, 0);
        for duck in self.ducks.iter_mut() {
            duck.render(ctx.drawer, delta_time);
        }
        SceneSignal::Continue
    }

    fn render_foreground(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f64) -> SceneSignal {
        base::render_foreground(ctx);
        let (x, y) = FLY_AWAY_MESSAGE_POS;
        ctx.drawer.blit(&ctx.textures.ui_message_fly_away, x, y);
        SceneSignal::Continue
    }
}

// ── Hit panel ─────────────────────────────────────────────────────────────────

/// Slides the hit markers left, one slot per step, until they are packed.
pub struct DuckUICoalesce {
    stats: PlayerStats,
    timer: Timer,
    done: bool,
}

impl DuckUICoalesce {
    pub fn new(stats: &PlayerStats) -> Self {
        let mut stats = stats.clone();
        stats.ducks_current.clear();
        Self {
            stats,
            timer: Timer::new(HIT_PANEL_STEP_MS),
            done: false,
        }
    }

    /// The animated copy, packed once the scene has finished.
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }
}

impl Scene for DuckUICoalesce {
    fn name(&self) -> &'static str {
        "coalesce hits"
    }

    fn update(&mut self, _ctx: &mut SceneContext<'_>, _delta_time: f64) -> Result<SceneSignal> {
        if self.done {
            return Ok(SceneSignal::Finished);
        }
        Ok(SceneSignal::Continue)
    }

    fn render_ui(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) {
        if self.timer.tick(delta_time) {
            self.done = !coalesce_hits_step(&mut self.stats.ducks_hit);
        }
        ctx.drawer.render_ui(delta_time, ctx.textures, &self.stats);
    }
}

/// Blinks the hit markers after a won round.
pub struct DuckUIFlash {
    template: PlayerStats,
    shown: PlayerStats,
    timer: Timer,
    show_template: bool,
    flashes: u32,
}

impl DuckUIFlash {
    pub fn new(stats: &PlayerStats) -> Self {
        let mut template = stats.clone();
        template.ducks_current.clear();
        Self {
            shown: template.clone(),
            template,
            timer: Timer::new(HIT_PANEL_STEP_MS),
            show_template: true,
            flashes: 0,
        }
    }

    pub fn flashes(&self) -> u32 {
        self.flashes
    }
}

impl Scene for DuckUIFlash {
    fn name(&self) -> &'static str {
        "flash hits"
    }

    fn update(&mut self, _ctx: &mut SceneContext<'_>, _delta_time: f64) -> Result<SceneSignal> {
        if self.flashes >= MAX_FLASHES {
            return Ok(SceneSignal::Finished);
        }
        Ok(SceneSignal::Continue)
    }

    fn render_ui(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) {
        if self.timer.tick(delta_time) {
            self.shown.ducks_hit = if self.show_template {
                self.template.ducks_hit
            } else {
                [false; DUCKS_PER_ROUND]
            };
            self.show_template = !self.show_template;
            self.flashes += 1;
        }
        ctx.drawer.render_ui(delta_time, ctx.textures, &self.shown);
    }
}
