//! Dog cut scenes: the intro, and the pop-ups between duck groups.

use std::rc::Rc;

use crossterm::event::{Event, KeyCode};

use super::{base, Scene, SceneContext, SceneSignal};
use crate::dog::{
    success_dog_x, success_frame_pair, success_frame_single, DogFailure, DogGameOver,
    DogJumping, DogSniffing, DogSuccess,
};
use crate::entities::DuckColour;
use crate::error::Result;
use crate::message::RoundMessage;
use crate::textures::Textures;

const SNIFFING_FPS: f64 = 7.0;
const JUMPING_FPS: f64 = 90.0;
const LAUGH_FPS: f64 = 10.0;

const ROUND_MESSAGE_POS: (i32, i32) = (189, 52);
const ROUND_MESSAGE_MS: f64 = 2500.0;
const GAME_OVER_MESSAGE_POS: (i32, i32) = (173, 44);

// ── Intro ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntroState {
    Sniffing,
    Jumping,
    Falling,
}

/// The dog sniffs its way in and jumps into the bushes.  Esc skips it.
pub struct IntroCutScene {
    state: IntroState,
    sniffing: DogSniffing,
    jumping: DogJumping,
    round_message: RoundMessage,
}

impl IntroCutScene {
    pub fn new(textures: &Textures, round: u32) -> Self {
        let (x, y) = ROUND_MESSAGE_POS;
        Self {
            state: IntroState::Sniffing,
            sniffing: DogSniffing::new(Rc::clone(&textures.dog_sniffing), SNIFFING_FPS),
            jumping: DogJumping::new(Rc::clone(&textures.dog_jumping), JUMPING_FPS),
            round_message: RoundMessage::new(
                x,
                y,
                ROUND_MESSAGE_MS,
                Rc::clone(&textures.ui_message_round),
                round,
                Rc::clone(&textures.ui_numbers_white),
            ),
        }
    }
}

impl Scene for IntroCutScene {
    fn name(&self) -> &'static str {
        "intro"
    }

    fn handle_input(&mut self, ctx: &mut SceneContext<'_>, event: &Event) -> Result<SceneSignal> {
        let signal = base::handle_input(ctx, event);
        if !signal.is_continue() {
            return Ok(signal);
        }
        if base::key_press(event) == Some(KeyCode::Esc) {
            return Ok(SceneSignal::Finished);
        }
        Ok(SceneSignal::Continue)
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> SceneSignal {
        base::render_background(ctx);
        if self.state == IntroState::Falling && self.jumping.render_fall(ctx.drawer, delta_time) {
            return SceneSignal::Finished;
        }
        self.round_message.render(ctx.drawer, delta_time);
        SceneSignal::Continue
    }

    fn render_foreground(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> SceneSignal {
        base::render_foreground(ctx);
        if self.state == IntroState::Sniffing && self.sniffing.render(ctx.drawer, delta_time) {
            self.state = IntroState::Jumping;
            self.jumping.x = self.sniffing.x;
            self.jumping.y = self.sniffing.y;
        }
        if self.state == IntroState::Jumping && self.jumping.render_jump(ctx.drawer, delta_time) {
            self.state = IntroState::Falling;
        }
        SceneSignal::Continue
    }
}

// ── Between duck groups ───────────────────────────────────────────────────────

/// The dog rises holding the duck(s) that just landed.
pub struct SuccessCutScene {
    dog: DogSuccess,
}

impl SuccessCutScene {
    pub fn single(textures: &Textures, duck_x: i32, colour: DuckColour) -> Self {
        Self {
            dog: DogSuccess::new(
                success_dog_x(duck_x),
                Rc::clone(&textures.dog_success),
                success_frame_single(colour),
            ),
        }
    }

    pub fn pair(textures: &Textures, duck_x: i32, first: DuckColour, second: DuckColour) -> Self {
        Self {
            dog: DogSuccess::new(
                success_dog_x(duck_x),
                Rc::clone(&textures.dog_success),
                success_frame_pair(first, second),
            ),
        }
    }

    pub fn dog_x(&self) -> i32 {
        self.dog.x()
    }
}

impl Scene for SuccessCutScene {
    fn name(&self) -> &'static str {
        "success"
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> SceneSignal {
        base::render_background(ctx);
        if self.dog.render(ctx.drawer, delta_time) {
            return SceneSignal::Finished;
        }
        SceneSignal::Continue
    }
}

/// The dog laughs after ducks got away.
pub struct FailureCutScene {
    dog: DogFailure,
}

impl FailureCutScene {
    pub fn new(textures: &Textures) -> Self {
        Self {
            dog: DogFailure::new(Rc::clone(&textures.dog_failure), LAUGH_FPS),
        }
    }
}

impl Scene for FailureCutScene {
    fn name(&self) -> &'static str {
        "failure"
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> SceneSignal {
        base::render_background(ctx);
        if self.dog.render(ctx.drawer, delta_time) {
            return SceneSignal::Finished;
        }
        SceneSignal::Continue
    }
}

/// Round lost: the dog laughs under the game-over sign.
pub struct GameOver {
    dog: DogGameOver,
}

impl GameOver {
    pub fn new(textures: &Textures) -> Self {
        Self {
            dog: DogGameOver::new(Rc::clone(&textures.dog_failure), LAUGH_FPS),
        }
    }
}

impl Scene for GameOver {
    fn name(&self) -> &'static str {
        "game over"
    }

    fn render_background(&mut self, ctx: &mut SceneContext<'_>, delta_time: f64) -> SceneSignal {
        ctx.drawer.blit(&ctx.textures.background_fail, 0, 0);
        if self.dog.render(ctx.drawer, delta_time) {
            return SceneSignal::Finished;
        }
        SceneSignal::Continue
    }

    fn render_foreground(&mut self, ctx: &mut SceneContext<'_>, _delta_time: f64) -> SceneSignal {
        base::render_foreground(ctx);
        let (x, y) = GAME_OVER_MESSAGE_POS;
        ctx.drawer.blit(&ctx.textures.ui_message_game_over, x, y);
        SceneSignal::Continue
    }
}
