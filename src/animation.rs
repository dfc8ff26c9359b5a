//! Looping sprite-strip playback.

use std::rc::Rc;

use crate::entities::Rect;
use crate::textures::{sprite_strip_rects, Texture};
use crate::timer::Timer;

/// Plays a strip of equally wide frames in a loop at a fixed rate.
///
/// The texture and frame rectangles are shared between clones; each clone
/// keeps its own timer and current frame, so cloning a template gives an
/// independent playback clock.
#[derive(Clone, Debug)]
pub struct Animation {
    texture: Rc<Texture>,
    frames: Rc<[Rect]>,
    current_frame: usize,
    timer: Timer,
}

fn frame_length(frames_per_second: f64) -> f64 {
    1000.0 / frames_per_second
}

impl Animation {
    pub fn new(texture: Rc<Texture>, frame_count: usize, frames_per_second: f64) -> Self {
        let frames: Rc<[Rect]> = sprite_strip_rects(&texture, frame_count.max(1)).into();
        Self {
            texture,
            frames,
            current_frame: 0,
            timer: Timer::new(frame_length(frames_per_second)),
        }
    }

    /// Moves to the next frame when a frame's worth of time has passed and
    /// returns the rectangle of the frame to draw.
    pub fn advance(&mut self, delta_time: f64) -> Rect {
        if self.timer.tick(delta_time) {
            self.current_frame = (self.current_frame + 1) % self.frames.len();
        }
        self.frames[self.current_frame]
    }

    /// Rebinds the playback rate and rewinds to the first frame.
    pub fn reset(&mut self, frames_per_second: f64) {
        self.timer.reset(frame_length(frames_per_second));
        self.current_frame = 0;
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Milliseconds each frame stays up.
    pub fn frame_length(&self) -> f64 {
        self.timer.target()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_width(&self) -> i32 {
        self.frames[0].w
    }

    pub fn frame_height(&self) -> i32 {
        self.frames[0].h
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// True when both animations cut the same strip.
    pub fn shares_frames_with(&self, other: &Animation) -> bool {
        Rc::ptr_eq(&self.frames, &other.frames) && Rc::ptr_eq(&self.texture, &other.texture)
    }
}
