//! Scenes: self-contained blocking loops (menu, cut scenes, gameplay).
//!
//! A scene runs in [`run_scene`] until one of its hooks reports
//! [`SceneSignal::Finished`] or the player quits.  Scenes start other scenes
//! synchronously through [`SceneContext::play`], which blocks the caller's
//! loop until the nested one completes and then resynchronises the caller's
//! frame clock.  A quit anywhere comes back out of `play` as
//! [`SceneSignal::QuitRequested`] and every caller returns it unchanged, so
//! it reaches the top-level driver.

pub mod base;
mod clock;
mod cutscenes;
mod game;
mod menu;
mod transitions;

use std::collections::VecDeque;
use std::io::Write;
use std::sync::mpsc;

use crossterm::event::Event;
use tracing::debug;

use crate::display::Drawer;
use crate::entities::PlayerStats;
use crate::error::Result;
use crate::textures::Textures;

pub use clock::{FrameClock, MonotonicClock, SteppedClock, FRAME_BUDGET};
pub use cutscenes::{FailureCutScene, GameOver, IntroCutScene, SuccessCutScene};
pub use game::SinglePlayerGame;
pub use menu::MainMenu;
pub use transitions::{DuckUICoalesce, DuckUIFlash, FlyAwayDuck};

/// What a hook wants the loop to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneSignal {
    Continue,
    /// This scene is done; control goes back to whoever started it.
    Finished,
    /// The player asked to quit; every enclosing scene must stop too.
    QuitRequested,
}

impl SceneSignal {
    pub fn is_continue(self) -> bool {
        self == SceneSignal::Continue
    }
}

/// How a scene's loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Finished,
    Quit,
}

/// Where input events come from.
pub trait EventSource {
    /// The next pending event, without blocking.
    fn poll_event(&mut self) -> Option<Event>;
}

impl EventSource for mpsc::Receiver<Event> {
    fn poll_event(&mut self) -> Option<Event> {
        self.try_recv().ok()
    }
}

impl EventSource for VecDeque<Event> {
    fn poll_event(&mut self) -> Option<Event> {
        self.pop_front()
    }
}

/// The state every scene borrows from the driver.  Nothing here is owned by
/// a scene.
pub struct SceneContext<'a> {
    pub drawer: &'a mut Drawer,
    pub stats: &'a mut PlayerStats,
    pub textures: &'a Textures,
    pub events: &'a mut dyn EventSource,
    pub out: &'a mut dyn Write,
    pub clock: &'a mut dyn FrameClock,
    resync: bool,
}

impl<'a> SceneContext<'a> {
    pub fn new(
        drawer: &'a mut Drawer,
        stats: &'a mut PlayerStats,
        textures: &'a Textures,
        events: &'a mut dyn EventSource,
        out: &'a mut dyn Write,
        clock: &'a mut dyn FrameClock,
    ) -> Self {
        Self {
            drawer,
            stats,
            textures,
            events,
            out,
            clock,
            resync: false,
        }
    }

    /// Runs `scene` to completion inside the current one.  A finished scene
    /// maps to `Continue` for the caller; a quit maps to `QuitRequested`.
    pub fn play(&mut self, scene: &mut dyn Scene) -> Result<SceneSignal> {
        let completion = run_scene(scene, self)?;
        self.resync = true;
        Ok(match completion {
            Completion::Finished => SceneSignal::Continue,
            Completion::Quit => SceneSignal::QuitRequested,
        })
    }

    fn take_resync(&mut self) -> bool {
        std::mem::take(&mut self.resync)
    }
}

/// One mode of the game.  Every hook has a default; override the ones the
/// scene needs and call into [`base`] where the default drawing is wanted.
pub trait Scene {
    fn name(&self) -> &'static str;

    fn handle_input(&mut self, ctx: &mut SceneContext<'_>, event: &Event) -> Result<SceneSignal> {
        Ok(base::handle_input(ctx, event))
    }

    fn update(&mut self, _ctx: &mut SceneContext<'_>, _delta_time: f64) -> Result<SceneSignal> {
        Ok(SceneSignal::Continue)
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f64) -> SceneSignal {
        base::render_background(ctx);
        SceneSignal::Continue
    }

    /// Drawn after the background and everything on it, so it can cover them.
    fn render_foreground(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f64) -> SceneSignal {
        base::render_foreground(ctx);
        SceneSignal::Continue
    }

    fn render_ui(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) {
        base::render_ui(ctx, delta_time);
    }
}

fn settle(signal: SceneSignal) -> Option<Completion> {
    match signal {
        SceneSignal::Continue => None,
        SceneSignal::Finished => Some(Completion::Finished),
        SceneSignal::QuitRequested => Some(Completion::Quit),
    }
}

/// The frame loop: input, update, background, foreground, UI, present.
/// Returns as soon as any step ends the scene; that frame is not presented.
pub fn run_scene(scene: &mut dyn Scene, ctx: &mut SceneContext<'_>) -> Result<Completion> {
    debug!(scene = scene.name(), "entering scene");
    let completion = frame_loop(scene, ctx)?;
    debug!(scene = scene.name(), ?completion, "leaving scene");
    Ok(completion)
}

fn frame_loop(scene: &mut dyn Scene, ctx: &mut SceneContext<'_>) -> Result<Completion> {
    let mut last = ctx.clock.now_ms();
    loop {
        let now = ctx.clock.now_ms();
        let delta_time = now - last;
        last = now;

        // ── Input ────────────────────────────────────────────────────────────
        while let Some(event) = ctx.events.poll_event() {
            let signal = scene.handle_input(ctx, &event)?;
            if ctx.take_resync() {
                last = ctx.clock.now_ms();
            }
            if let Some(completion) = settle(signal) {
                return Ok(completion);
            }
        }

        // ── Logic ────────────────────────────────────────────────────────────
        let signal = scene.update(ctx, delta_time)?;
        if ctx.take_resync() {
            last = ctx.clock.now_ms();
        }
        if let Some(completion) = settle(signal) {
            return Ok(completion);
        }

        // ── Rendering ────────────────────────────────────────────────────────
        ctx.drawer.clear();
        if let Some(completion) = settle(scene.render_background(ctx, delta_time)) {
            return Ok(completion);
        }
        if let Some(completion) = settle(scene.render_foreground(ctx, delta_time)) {
            return Ok(completion);
        }
        scene.render_ui(ctx, delta_time);

        ctx.drawer.present(&mut *ctx.out)?;
        ctx.clock.end_frame();
    }
}
