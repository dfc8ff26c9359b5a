//! One bird on screen, and the factory that releases them.

use std::f64::consts::PI;
use std::rc::Rc;

use rand::Rng;
use tracing::debug;

use crate::animation::Animation;
use crate::display::{Drawer, Flip};
use crate::entities::DuckColour;
use crate::textures::{DuckTextures, Texture, Textures};
use crate::timer::Timer;

/// Ducks spawn on this line and are removed once they fall below it.
pub const SPAWN_Y: f64 = 155.0;
pub const SPAWN_X_LOW: i32 = 133;
pub const SPAWN_X_HIGH: i32 = 272;

/// Scores that have their own floating sprite, lowest first.
pub const SCORE_SPRITE_TIERS: [u32; 8] = [500, 800, 1000, 1500, 1600, 2000, 2400, 3000];

const DEAD_POSE_MS: f64 = 500.0;
const FALLING_SPEED: f64 = 0.05;
const FALLING_FPS: f64 = 10.0;
const BASE_FLIGHT_FPS: f64 = 10.0;

const FLIGHT_FRAMES: usize = 3;
const DEAD_FRAMES: usize = 1;
const FALLING_FRAMES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuckPose {
    FlyingDiagonal,
    FlyingHorizontal,
    /// Escaping straight up after the player ran out of shots.
    FlyingVertical,
    Dead,
    Falling,
}

/// One animation per pose.  Cloning shares the frame geometry and gives the
/// clone its own playback clock.
#[derive(Clone, Debug)]
pub struct DuckAnimations {
    pub diagonal: Animation,
    pub horizontal: Animation,
    pub vertical: Animation,
    pub dead: Animation,
    pub falling: Animation,
}

impl DuckAnimations {
    pub fn new(textures: &DuckTextures, flight_fps: f64) -> Self {
        Self {
            diagonal: Animation::new(Rc::clone(&textures.diagonal), FLIGHT_FRAMES, flight_fps),
            horizontal: Animation::new(Rc::clone(&textures.horizontal), FLIGHT_FRAMES, flight_fps),
            vertical: Animation::new(Rc::clone(&textures.vertical), FLIGHT_FRAMES, flight_fps),
            dead: Animation::new(Rc::clone(&textures.dead), DEAD_FRAMES, FALLING_FPS),
            falling: Animation::new(Rc::clone(&textures.falling), FALLING_FRAMES, FALLING_FPS),
        }
    }

    pub fn get_mut(&mut self, pose: DuckPose) -> &mut Animation {
        match pose {
            DuckPose::FlyingDiagonal => &mut self.diagonal,
            DuckPose::FlyingHorizontal => &mut self.horizontal,
            DuckPose::FlyingVertical => &mut self.vertical,
            DuckPose::Dead => &mut self.dead,
            DuckPose::Falling => &mut self.falling,
        }
    }

    fn set_flight_fps(&mut self, fps: f64) {
        self.diagonal.reset(fps);
        self.horizontal.reset(fps);
        self.vertical.reset(fps);
    }
}

/// Horizontal world range a duck's left edge may occupy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayBounds {
    pub left: f64,
    pub right: f64,
}

impl PlayBounds {
    /// The visible part of the backdrop, with the right edge pulled in by the
    /// duck's width so the whole sprite stays on screen.
    pub fn for_drawer(drawer: &Drawer, duck_width: i32) -> Self {
        let (left, right) = drawer.visible_world_span();
        Self {
            left,
            right: right - duck_width as f64,
        }
    }
}

fn rand_angle(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    rng.gen_range(min..max)
}

// ── Duck ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Duck {
    /// Slot 0..10 of the current round.
    pub index: usize,
    pub colour: DuckColour,
    pub x: f64,
    pub y: f64,
    pub alive: bool,

    angle: f64,
    speed: f64,
    score: Option<u32>,
    x_died: i32,
    y_died: i32,
    is_free_of_bush: bool,
    stay_on_screen: bool,
    pose: DuckPose,
    animations: DuckAnimations,
    dead_timer: Timer,
    score_texture: Rc<Texture>,
    bounds: PlayBounds,
}

impl Duck {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        index: usize,
        colour: DuckColour,
        x: f64,
        y: f64,
        speed: f64,
        score: u32,
        animations: DuckAnimations,
        score_texture: Rc<Texture>,
        bounds: PlayBounds,
        rng: &mut impl Rng,
    ) -> Self {
        let mut dead_timer = Timer::new(DEAD_POSE_MS);
        dead_timer.disable();
        Self {
            index,
            colour,
            x,
            y,
            alive: true,
            angle: rand_angle(rng, PI / 4.0, 3.0 * PI / 4.0),
            speed,
            score: Some(score),
            x_died: 0,
            y_died: 0,
            is_free_of_bush: false,
            stay_on_screen: true,
            pose: DuckPose::FlyingDiagonal,
            animations,
            dead_timer,
            score_texture,
            bounds,
        }
    }

    /// Moves the duck and bounces it off the play area edges with a new
    /// random heading.  A frame that picks a new heading does not move.
    pub fn update(&mut self, delta_time: f64, rng: &mut impl Rng) {
        let new_x = self.x + self.angle.cos() * self.speed * delta_time;
        let new_y = self.y - self.angle.sin() * self.speed * delta_time;
        let mut new_angle = None;

        if self.alive && self.stay_on_screen {
            if new_y < 0.0 {
                new_angle = Some(rand_angle(rng, 7.0 * PI / 6.0, 11.0 * PI / 6.0));
            }
            if new_y > SPAWN_Y - self.height() as f64 {
                if self.is_free_of_bush {
                    new_angle = Some(rand_angle(rng, PI / 4.0, 3.0 * PI / 4.0));
                }
            } else {
                self.is_free_of_bush = true;
            }
            if new_x < self.bounds.left {
                new_angle = Some(rand_angle(rng, 5.0 * PI / 6.0, 18.0 * PI / 6.0) % (2.0 * PI));
            }
            if new_x > self.bounds.right {
                new_angle = Some(rand_angle(rng, 2.0 * PI / 3.0, 4.0 * PI / 3.0));
            }
        }

        match new_angle {
            Some(angle) => {
                self.angle = angle;
                self.pose = if angle.cos().abs() > angle.sin().abs() {
                    DuckPose::FlyingHorizontal
                } else {
                    DuckPose::FlyingDiagonal
                };
            }
            None => {
                self.x = new_x;
                self.y = new_y;
            }
        }

        if self.dead_timer.tick(delta_time) {
            self.pose = DuckPose::Falling;
            self.animations.falling.reset(FALLING_FPS);
            self.speed = FALLING_SPEED;
            self.dead_timer.disable();
        }
    }

    /// Shoots the duck.  Returns its score the first time only.
    pub fn kill(&mut self) -> Option<u32> {
        if !self.alive {
            return None;
        }
        self.alive = false;
        self.pose = DuckPose::Dead;
        self.speed = 0.0;
        self.angle = 3.0 * PI / 2.0;
        self.x_died = self.x as i32;
        self.y_died = self.y as i32;
        self.dead_timer.reset(DEAD_POSE_MS);
        self.dead_timer.enable();
        debug!(index = self.index, colour = ?self.colour, "duck shot");
        self.score.take()
    }

    /// Sends the duck straight up and off the screen for good.
    pub fn fly_up(&mut self) {
        self.stay_on_screen = false;
        self.angle = PI / 2.0;
        self.pose = DuckPose::FlyingVertical;
    }

    pub fn is_on_screen(&self) -> bool {
        let w = self.width() as f64;
        let h = self.height() as f64;
        self.y + h > 0.0 && self.x + w > self.bounds.left && self.x < self.bounds.right + w
    }

    pub fn is_falling(&self) -> bool {
        !self.alive && self.pose == DuckPose::Falling
    }

    pub fn render(&mut self, drawer: &mut Drawer, delta_time: f64) {
        let flip = if self.angle.cos() < 0.0 {
            Flip::Horizontal
        } else {
            Flip::None
        };
        let animation = self.animations.get_mut(self.pose);
        let frame = animation.advance(delta_time);
        drawer.render_texture(animation.texture(), self.x as i32, self.y as i32, Some(frame), flip);
    }

    /// Floating score at the spot the duck was shot.
    pub fn render_score(&self, drawer: &mut Drawer) {
        drawer.blit(&self.score_texture, self.x_died, self.y_died);
    }

    pub fn width(&self) -> i32 {
        self.animations.diagonal.frame_width()
    }

    pub fn height(&self) -> i32 {
        self.animations.diagonal.frame_height()
    }

    /// Heading in radians, counter-clockwise from east.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn pose(&self) -> DuckPose {
        self.pose
    }

    pub fn animations(&self) -> &DuckAnimations {
        &self.animations
    }
}

// ── Hatchery ──────────────────────────────────────────────────────────────────

/// Releases configured ducks.  Animations are sliced once per colour here and
/// cloned into every duck.
pub struct DuckHatchery {
    blue: DuckAnimations,
    brown: DuckAnimations,
    red: DuckAnimations,
    score_textures: Vec<Rc<Texture>>,
    bounds: PlayBounds,
}

impl DuckHatchery {
    pub fn new(textures: &Textures, drawer: &Drawer) -> Self {
        let slice =
            |colour: DuckColour| DuckAnimations::new(textures.duck(colour), BASE_FLIGHT_FPS);
        let blue = slice(DuckColour::Blue);
        let bounds = PlayBounds::for_drawer(drawer, blue.diagonal.frame_width());
        Self {
            blue,
            brown: slice(DuckColour::Brown),
            red: slice(DuckColour::Red),
            score_textures: textures.duck_scores.clone(),
            bounds,
        }
    }

    /// Recomputes the play area after the terminal was resized.  Ducks
    /// already in the air keep the bounds they were released with.
    pub fn refit(&mut self, drawer: &Drawer) {
        self.bounds = PlayBounds::for_drawer(drawer, self.blue.diagonal.frame_width());
    }

    pub fn bounds(&self) -> PlayBounds {
        self.bounds
    }

    pub fn templates(&self, colour: DuckColour) -> &DuckAnimations {
        match colour {
            DuckColour::Blue => &self.blue,
            DuckColour::Brown => &self.brown,
            DuckColour::Red => &self.red,
        }
    }

    /// The floating sprite for an exact score, or the lowest tier's sprite.
    pub fn score_texture(&self, score: u32) -> Rc<Texture> {
        let tier = SCORE_SPRITE_TIERS.iter().position(|&s| s == score).unwrap_or(0);
        self.score_textures
            .get(tier)
            .or_else(|| self.score_textures.first())
            .cloned()
            .unwrap_or_else(|| Rc::new(Texture::filled(0, 0, None)))
    }

    pub fn new_duck(
        &self,
        colour: DuckColour,
        score: u32,
        round: u32,
        index: usize,
        rng: &mut impl Rng,
    ) -> Duck {
        let speed = 0.05 + 0.01 * round as f64;
        // Spawn inside the play area.
        let x = (rng.gen_range(SPAWN_X_LOW..=SPAWN_X_HIGH) as f64)
            .min(self.bounds.right)
            .max(self.bounds.left);
        let mut animations = self.templates(colour).clone();
        animations.set_flight_fps(BASE_FLIGHT_FPS + round as f64);
        debug!(index, ?colour, x, speed, "releasing duck");
        Duck::new(
            index,
            colour,
            x,
            SPAWN_Y,
            speed,
            score,
            animations,
            self.score_texture(score),
            self.bounds,
            rng,
        )
    }
}
