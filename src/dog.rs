//! The dog, as it appears in cut scenes.
//!
//! Each behaviour is a small scripted animation: `render` draws the current
//! frame, advances the script by `delta_time` and returns true once the
//! script has finished.

use std::rc::Rc;

use crate::animation::Animation;
use crate::display::{Drawer, Flip};
use crate::entities::{DuckColour, Rect};
use crate::textures::{sprite_strip_rects, Texture};
use crate::timer::Timer;

/// Frame of the sniffing strip shown at each step of the walk.
const SNIFFING_ANIMATION: [usize; 87] = [
    0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 0, 4, 4, 0, 0, 4, 4, 0, 0, 4, 4, 0, 1, 2,
    3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 0, 4, 4, 0, 0, 4, 4, 0, 0, 4, 4, 0, 1, 2, 3, 0, 1,
    2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 0, 4, 4, 0, 0, 4, 4, 0, 0, 4, 4, 5, 5, 5,
];

/// Pixels moved right on entering each step of the walk.
const SNIFFING_MOVEMENT: [i32; 87] = [
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

const SNIFFING_FRAMES: usize = 6;
pub const SNIFFING_START: (i32, i32) = (88, 145);

const JUMP_STEPS: u32 = 45;

/// Where the dog pops out of the bushes, and how fast.
pub const RISE_BOTTOM: f64 = 157.0;
pub const RISE_TOP: f64 = 120.0;
pub const RISE_SPEED: f64 = 0.1;

const SUCCESS_HOLD_MS: f64 = 200.0;
const FAILURE_HOLD_MS: f64 = 1000.0;
const GAME_OVER_HOLD_MS: f64 = 3000.0;
const LAUGH_FRAMES: usize = 2;

pub const SUCCESS_X_MIN: i32 = 120;
pub const SUCCESS_X_MAX: i32 = 210;
pub const FAILURE_X: i32 = 213;
const SUCCESS_FRAMES: usize = 12;

// ── Intro ─────────────────────────────────────────────────────────────────────

/// Walks in from the left, sniffing the grass.
pub struct DogSniffing {
    pub x: i32,
    pub y: i32,
    texture: Rc<Texture>,
    frames: Vec<Rect>,
    step: usize,
    timer: Timer,
}

impl DogSniffing {
    pub fn new(texture: Rc<Texture>, frames_per_second: f64) -> Self {
        let frames = sprite_strip_rects(&texture, SNIFFING_FRAMES);
        Self {
            x: SNIFFING_START.0,
            y: SNIFFING_START.1,
            texture,
            frames,
            step: 1,
            timer: Timer::new(1000.0 / frames_per_second),
        }
    }

    pub fn render(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        if self.timer.tick(delta_time) {
            self.step += 1;
            if let Some(dx) = SNIFFING_MOVEMENT.get(self.step) {
                self.x += dx;
            }
        }
        let Some(&frame) = SNIFFING_ANIMATION.get(self.step) else {
            return true;
        };
        if let Some(&clip) = self.frames.get(frame) {
            drawer.render_texture(&self.texture, self.x, self.y, Some(clip), Flip::None);
        }
        false
    }

    pub fn step(&self) -> usize {
        self.step
    }
}

/// Leaps up and over the bushes, then drops behind them.
pub struct DogJumping {
    pub x: i32,
    pub y: i32,
    texture: Rc<Texture>,
    frames: Vec<Rect>,
    step: u32,
    timer: Timer,
}

impl DogJumping {
    pub fn new(texture: Rc<Texture>, frames_per_second: f64) -> Self {
        let frames = sprite_strip_rects(&texture, 2);
        Self {
            x: 0,
            y: 0,
            texture,
            frames,
            step: 1,
            timer: Timer::new(1000.0 / frames_per_second),
        }
    }

    pub fn render_jump(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        if self.timer.tick(delta_time) {
            self.step += 1;
            if self.step >= JUMP_STEPS {
                return true;
            }
            self.x += 1;
            self.y -= 1;
        }
        self.draw(drawer, 0);
        false
    }

    pub fn render_fall(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        if self.timer.tick(delta_time) {
            self.step += 1;
            if self.step >= 2 * JUMP_STEPS {
                return true;
            }
            self.x += 1;
            self.y += 1;
        }
        self.draw(drawer, 1);
        false
    }

    fn draw(&self, drawer: &mut Drawer, frame: usize) {
        if let Some(&clip) = self.frames.get(frame) {
            drawer.render_texture(&self.texture, self.x, self.y, Some(clip), Flip::None);
        }
    }
}

// ── Pop-ups ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RiseState {
    Up,
    Stopped,
    Down,
}

/// Rises out of the bushes, holds, then sinks back (or stays up).
#[derive(Clone, Debug)]
struct Rise {
    y: f64,
    state: RiseState,
    hold: Timer,
    hold_ms: f64,
    sinks: bool,
}

impl Rise {
    fn new(hold_ms: f64, sinks: bool) -> Self {
        Self {
            y: RISE_BOTTOM,
            state: RiseState::Up,
            hold: Timer::new(hold_ms),
            hold_ms,
            sinks,
        }
    }

    fn advance(&mut self, delta_time: f64) -> bool {
        match self.state {
            RiseState::Up => {
                self.y -= RISE_SPEED * delta_time;
                if self.y < RISE_TOP {
                    self.state = RiseState::Stopped;
                    self.hold.reset(self.hold_ms);
                }
            }
            RiseState::Stopped => {
                if self.hold.tick(delta_time) {
                    if !self.sinks {
                        return true;
                    }
                    self.state = RiseState::Down;
                }
            }
            RiseState::Down => {
                self.y += RISE_SPEED * delta_time;
                if self.y > RISE_BOTTOM {
                    return true;
                }
            }
        }
        false
    }
}

/// Success strip frame holding one duck.
pub fn success_frame_single(colour: DuckColour) -> usize {
    colour_slot(colour)
}

/// Success strip frame holding two ducks, first-landed on the left.
pub fn success_frame_pair(first: DuckColour, second: DuckColour) -> usize {
    3 + 3 * colour_slot(first) + colour_slot(second)
}

fn colour_slot(colour: DuckColour) -> usize {
    match colour {
        DuckColour::Brown => 0,
        DuckColour::Blue => 1,
        DuckColour::Red => 2,
    }
}

/// Keeps the success dog inside the bushes below where the duck landed.
pub fn success_dog_x(duck_x: i32) -> i32 {
    duck_x.clamp(SUCCESS_X_MIN, SUCCESS_X_MAX)
}

/// Shows off the ducks the player shot.
pub struct DogSuccess {
    x: i32,
    rise: Rise,
    texture: Rc<Texture>,
    frame: Rect,
}

impl DogSuccess {
    pub fn new(x: i32, texture: Rc<Texture>, frame_index: usize) -> Self {
        let frames = sprite_strip_rects(&texture, SUCCESS_FRAMES);
        let frame = frames.get(frame_index).copied().unwrap_or_default();
        Self {
            x,
            rise: Rise::new(SUCCESS_HOLD_MS, true),
            texture,
            frame,
        }
    }

    pub fn render(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        let done = self.rise.advance(delta_time);
        drawer.render_texture(&self.texture, self.x, self.rise.y as i32, Some(self.frame), Flip::None);
        done
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.rise.y
    }
}

/// Laughs at the player after a miss.
pub struct DogFailure {
    rise: Rise,
    laugh: Animation,
}

impl DogFailure {
    pub fn new(texture: Rc<Texture>, laugh_fps: f64) -> Self {
        Self {
            rise: Rise::new(FAILURE_HOLD_MS, true),
            laugh: Animation::new(texture, LAUGH_FRAMES, laugh_fps),
        }
    }

    pub fn render(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        let done = self.rise.advance(delta_time);
        let frame = self.laugh.advance(delta_time);
        drawer.render_texture(self.laugh.texture(), FAILURE_X, self.rise.y as i32, Some(frame), Flip::None);
        done
    }

    pub fn y(&self) -> f64 {
        self.rise.y
    }
}

/// Laughs at the player for good; stays up until the scene ends.
pub struct DogGameOver {
    rise: Rise,
    laugh: Animation,
}

impl DogGameOver {
    pub fn new(texture: Rc<Texture>, laugh_fps: f64) -> Self {
        Self {
            rise: Rise::new(GAME_OVER_HOLD_MS, false),
            laugh: Animation::new(texture, LAUGH_FRAMES, laugh_fps),
        }
    }

    pub fn render(&mut self, drawer: &mut Drawer, delta_time: f64) -> bool {
        let done = self.rise.advance(delta_time);
        let frame = self.laugh.advance(delta_time);
        drawer.render_texture(self.laugh.texture(), FAILURE_X, self.rise.y as i32, Some(frame), Flip::None);
        done
    }

    pub fn y(&self) -> f64 {
        self.rise.y
    }
}
