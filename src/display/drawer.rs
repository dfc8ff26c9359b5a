use std::io::Write;

use super::{present, FrameBuffer};
use crate::entities::{PlayerStats, Rect, DUCKS_PER_ROUND};
use crate::textures::{Rgb, Texture, Textures};
use crate::timer::Timer;

const DIGITS: &str = "0123456789";

/// Width of one glyph in the number fonts, in world pixels.
pub const GLYPH_STRIDE: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flip {
    None,
    Horizontal,
}

/// Aspect-ratio preserving drawing into the frame buffer.
///
/// The backdrop's height is fitted to the screen height; the horizontal
/// offset centres it (negative when the backdrop is wider than the screen).
pub struct Drawer {
    frame: FrameBuffer,
    world_width: i32,
    world_height: i32,
    scale: f64,
    x_offset: i32,
    flicker_timer: Timer,
    is_flickering: bool,
}

impl Drawer {
    /// `background` decides the world size; `cols`×`rows` is the terminal.
    pub fn new(background: &Texture, cols: u16, rows: u16) -> Self {
        let mut drawer = Self {
            frame: FrameBuffer::for_terminal(cols, rows),
            world_width: background.width().max(1),
            world_height: background.height().max(1),
            scale: 1.0,
            x_offset: 0,
            flicker_timer: Timer::new(500.0),
            is_flickering: false,
        };
        drawer.fit();
        drawer
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.frame = FrameBuffer::for_terminal(cols, rows);
        self.fit();
    }

    fn fit(&mut self) {
        self.scale = self.frame.height() as f64 / self.world_height as f64;
        let scaled_width = (self.world_width as f64 * self.scale) as i32;
        self.x_offset = ((self.frame.width() - scaled_width) as f64 / 2.0) as i32;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// The world-space x range currently on screen, clamped to the backdrop.
    pub fn visible_world_span(&self) -> (f64, f64) {
        let left = -self.x_offset as f64 / self.scale;
        let right = self.frame.width() as f64 / self.scale + left;
        (left.max(0.0), right.min(self.world_width as f64))
    }

    pub fn screen_point_to_world_point(&self, x: i32, y: i32) -> (i32, i32) {
        let world_x = (x - self.x_offset) as f64 / self.scale;
        let world_y = y as f64 / self.scale;
        (world_x as i32, world_y as i32)
    }

    pub fn clear(&mut self) {
        self.frame.clear(Rgb::BLACK);
    }

    pub fn present<W: Write + ?Sized>(&mut self, out: &mut W) -> std::io::Result<()> {
        present(out, &self.frame)
    }

    /// Draws `clip` of `texture` (or all of it) with its top-left corner at
    /// world point (x, y).
    pub fn render_texture(&mut self, texture: &Texture, x: i32, y: i32, clip: Option<Rect>, flip: Flip) {
        let src = clip.unwrap_or(Rect::new(0, 0, texture.width(), texture.height()));
        if src.w <= 0 || src.h <= 0 {
            return;
        }
        let dst_x = (x as f64 * self.scale) as i32 + self.x_offset;
        let dst_y = (y as f64 * self.scale) as i32;
        let dst_w = ((src.w as f64 * self.scale) as i32).max(1);
        let dst_h = ((src.h as f64 * self.scale) as i32).max(1);

        for dy in 0..dst_h {
            let sy = src.y + ((dy as f64 / self.scale) as i32).min(src.h - 1);
            for dx in 0..dst_w {
                let offset = ((dx as f64 / self.scale) as i32).min(src.w - 1);
                let sx = match flip {
                    Flip::None => src.x + offset,
                    Flip::Horizontal => src.x + src.w - 1 - offset,
                };
                if let Some(colour) = texture.pixel(sx, sy) {
                    self.frame.put(dst_x + dx, dst_y + dy, colour);
                }
            }
        }

        if let Some(text) = texture.caption() {
            let len = text.chars().count() as i32;
            let col = dst_x + ((dst_w - len) / 2).max(0);
            let row = (dst_y + dst_h / 2) / 2;
            self.frame.add_caption(col, row, text, texture.ink());
        }
    }

    pub fn blit(&mut self, texture: &Texture, x: i32, y: i32) {
        self.render_texture(texture, x, y, None, Flip::None);
    }

    /// Draws one digit from a ten-glyph number font.  Anything that is not a
    /// digit renders as `0`.
    pub fn render_character(&mut self, font: &Texture, character: char, x: i32, y: i32) {
        let pos = DIGITS.find(character).unwrap_or(0);
        let w = font.width() / DIGITS.len() as i32;
        let clip = Rect::new(pos as i32 * w, 0, w, font.height());
        self.render_texture(font, x, y, Some(clip), Flip::None);

        let col = (x as f64 * self.scale) as i32 + self.x_offset;
        let row = ((y as f64 + font.height() as f64 / 2.0) * self.scale) as i32 / 2;
        let glyph = &DIGITS[pos..pos + 1];
        self.frame.add_caption(col, row, glyph, font.ink());
    }

    /// Draws `text` left to right, one glyph per `GLYPH_STRIDE`.
    pub fn render_number(&mut self, font: &Texture, text: &str, x: i32, y: i32) {
        for (i, ch) in text.chars().enumerate() {
            self.render_character(font, ch, x + i as i32 * GLYPH_STRIDE, y);
        }
    }

    // ── HUD ───────────────────────────────────────────────────────────────────

    /// Shots, hit panel, ducks-needed bar, round and score.  Ducks on screen
    /// blink in the hit panel every 500 ms.
    pub fn render_ui(&mut self, delta_time: f64, textures: &Textures, stats: &PlayerStats) {
        self.blit(&textures.ui_shot, 110, 217);
        for (threshold, x) in [(3, 127), (2, 119), (1, 111)] {
            if stats.shots_left >= threshold {
                self.blit(&textures.ui_bullet, x, 208);
            }
        }

        self.blit(&textures.ui_hit, 149, 209);

        let flicker_ticked = self.flicker_timer.tick(delta_time);
        let lit_w = textures.ui_duck_lit.width() / DUCKS_PER_ROUND as i32;
        for i in 0..DUCKS_PER_ROUND {
            let x = 181 + i as i32 * 8;
            let is_current = stats.ducks_current.contains(&i);
            if stats.ducks_hit[i] {
                let clip = Rect::new(i as i32 * lit_w, 0, lit_w, textures.ui_duck_lit.height());
                self.render_texture(&textures.ui_duck_lit, x, 210, Some(clip), Flip::None);
            } else if !is_current || self.is_flickering {
                self.blit(&textures.ui_duck_white, x, 210);
            }
        }
        if flicker_ticked {
            self.is_flickering = !self.is_flickering;
        }

        for i in 0..stats.ducks_needed {
            self.blit(&textures.ui_ducks_needed_bar, 181 + i as i32 * 8, 219);
        }

        self.blit(&textures.ui_round, 109, 192);
        self.render_number(&textures.ui_numbers_green, &stats.round.to_string(), 124, 192);

        self.blit(&textures.ui_score, 285, 216);
        let score = format!("{:06}", stats.score);
        for (i, ch) in score.chars().rev().enumerate() {
            self.render_character(&textures.ui_numbers_white, ch, 317 - i as i32 * GLYPH_STRIDE, 208);
        }
    }
}
