//! Timed pop-up messages drawn over a scene.

use std::rc::Rc;

use crate::display::{Drawer, GLYPH_STRIDE};
use crate::textures::Texture;
use crate::timer::Timer;

pub struct Message {
    x: i32,
    y: i32,
    texture: Rc<Texture>,
    timer: Timer,
}

impl Message {
    pub fn new(x: i32, y: i32, duration: f64, texture: Rc<Texture>) -> Self {
        Self {
            x,
            y,
            texture,
            timer: Timer::new(duration),
        }
    }

    /// Draws the message and returns true once its time is up.
    pub fn render(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        drawer.blit(&self.texture, self.x, self.y);
        self.timer.tick(delta_time)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// "ROUND" with the round number underneath.
pub struct RoundMessage {
    message: Message,
    round: String,
    numbers: Rc<Texture>,
}

impl RoundMessage {
    pub fn new(
        x: i32,
        y: i32,
        duration: f64,
        texture: Rc<Texture>,
        round: u32,
        numbers: Rc<Texture>,
    ) -> Self {
        Self {
            message: Message::new(x, y, duration, texture),
            round: round.to_string(),
            numbers,
        }
    }

    pub fn render(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        let expired = self.message.render(drawer, delta_time);
        let x = self.message.x() + 16;
        let y = self.message.y() + 16;
        for (i, digit) in self.round.chars().enumerate() {
            drawer.render_character(&self.numbers, digit, x + i as i32 * GLYPH_STRIDE, y);
        }
        expired
    }

    pub fn round(&self) -> &str {
        &self.round
    }
}
