//! Pixel textures and the bundle of every image the game draws.
//!
//! Textures are plain RGB pixel grids (`None` = transparent) with an optional
//! caption, which the terminal presenter prints as real text on top of the
//! pixels.  The bundle is generated procedurally by [`crate::sprites`].

use std::rc::Rc;

use crate::entities::{DuckColour, Rect};
use crate::error::{GameError, Result};
use crate::sprites;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width: i32,
    height: i32,
    pixels: Vec<Option<Rgb>>,
    caption: Option<String>,
    ink: Rgb,
}

impl Texture {
    pub fn filled(width: i32, height: i32, colour: Option<Rgb>) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            pixels: vec![colour; len],
            caption: None,
            ink: Rgb::WHITE,
        }
    }

    /// Builds a texture from ASCII art.  Every character maps through
    /// `palette`; unmapped characters (conventionally `.`) are transparent.
    /// Short rows are padded, and each art pixel becomes an
    /// `upscale`×`upscale` block.
    pub fn from_art(rows: &[&str], palette: &[(char, Rgb)], upscale: i32) -> Self {
        let upscale = upscale.max(1);
        let art_w = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let art_h = rows.len() as i32;
        let mut texture = Texture::filled(art_w * upscale, art_h * upscale, None);
        for (ay, row) in rows.iter().enumerate() {
            for (ax, ch) in row.chars().enumerate() {
                let colour = palette.iter().find(|(c, _)| *c == ch).map(|&(_, rgb)| rgb);
                if colour.is_some() {
                    texture.fill_rect(
                        Rect::new(ax as i32 * upscale, ay as i32 * upscale, upscale, upscale),
                        colour,
                    );
                }
            }
        }
        texture
    }

    /// Lays equally sized frames side by side into one sprite strip.
    pub fn strip(frames: &[Texture]) -> Self {
        let frame_w = frames.iter().map(Texture::width).max().unwrap_or(0);
        let frame_h = frames.iter().map(Texture::height).max().unwrap_or(0);
        let mut texture = Texture::filled(frame_w * frames.len() as i32, frame_h, None);
        for (i, frame) in frames.iter().enumerate() {
            texture.overlay(frame, i as i32 * frame_w, 0);
        }
        texture
    }

    pub fn with_caption(mut self, caption: impl Into<String>, ink: Rgb) -> Self {
        self.caption = Some(caption.into());
        self.ink = ink;
        self
    }

    /// Sets the text colour used by `Drawer::render_character`.
    pub fn with_ink(mut self, ink: Rgb) -> Self {
        self.ink = ink;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn ink(&self) -> Rgb {
        self.ink
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Option<Rgb>) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = colour;
    }

    pub fn fill_rect(&mut self, rect: Rect, colour: Option<Rgb>) {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                self.set_pixel(x, y, colour);
            }
        }
    }

    /// Copies the opaque pixels of `other` onto this texture at (x, y).
    pub fn overlay(&mut self, other: &Texture, x: i32, y: i32) {
        for oy in 0..other.height {
            for ox in 0..other.width {
                if let Some(colour) = other.pixel(ox, oy) {
                    self.set_pixel(x + ox, y + oy, Some(colour));
                }
            }
        }
    }

    pub fn flipped(&self) -> Texture {
        let mut texture = Texture::filled(self.width, self.height, None);
        for y in 0..self.height {
            for x in 0..self.width {
                texture.set_pixel(self.width - 1 - x, y, self.pixel(x, y));
            }
        }
        texture.caption = self.caption.clone();
        texture.ink = self.ink;
        texture
    }
}

/// Cuts a horizontal strip into `frame_count` equally wide frames spanning
/// the full image width.
pub fn sprite_strip_rects(texture: &Texture, frame_count: usize) -> Vec<Rect> {
    if frame_count == 0 {
        return Vec::new();
    }
    let w = texture.width() / frame_count as i32;
    (0..frame_count)
        .map(|i| Rect::new(w * i as i32, 0, w, texture.height()))
        .collect()
}

// ── Bundle ────────────────────────────────────────────────────────────────────

/// Which palette the bundle is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureStyle {
    Remake,
    Classic,
}

/// Per-pose sprite strips for one duck colour.
#[derive(Clone, Debug)]
pub struct DuckTextures {
    pub horizontal: Rc<Texture>,
    pub diagonal: Rc<Texture>,
    pub vertical: Rc<Texture>,
    pub dead: Rc<Texture>,
    pub falling: Rc<Texture>,
}

#[derive(Clone, Debug)]
pub struct Textures {
    pub background: Rc<Texture>,
    pub background_fail: Rc<Texture>,
    pub foreground: Rc<Texture>,
    pub main_menu_background: Rc<Texture>,
    pub menu_title: Rc<Texture>,
    pub menu_single: Rc<Texture>,
    pub menu_double: Rc<Texture>,
    pub menu_top_score: Rc<Texture>,

    pub dog_sniffing: Rc<Texture>,
    pub dog_jumping: Rc<Texture>,
    pub dog_success: Rc<Texture>,
    pub dog_failure: Rc<Texture>,

    pub duck_blue: DuckTextures,
    pub duck_brown: DuckTextures,
    pub duck_red: DuckTextures,
    /// One floating score sprite per score tier, lowest first.
    pub duck_scores: Vec<Rc<Texture>>,

    pub ui_bullet: Rc<Texture>,
    pub ui_duck_lit: Rc<Texture>,
    pub ui_duck_white: Rc<Texture>,
    pub ui_ducks_needed_bar: Rc<Texture>,
    pub ui_hit: Rc<Texture>,
    pub ui_message_fly_away: Rc<Texture>,
    pub ui_message_game_over: Rc<Texture>,
    pub ui_message_round: Rc<Texture>,
    pub ui_numbers_green: Rc<Texture>,
    pub ui_numbers_white: Rc<Texture>,
    pub ui_round: Rc<Texture>,
    pub ui_score: Rc<Texture>,
    pub ui_shot: Rc<Texture>,
}

impl Textures {
    pub fn generate(style: TextureStyle) -> Self {
        let palette = sprites::ScenePalette::for_style(style);
        Self {
            background: Rc::new(sprites::background(&palette)),
            background_fail: Rc::new(sprites::background_fail(&palette)),
            foreground: Rc::new(sprites::foreground(&palette)),
            main_menu_background: Rc::new(sprites::main_menu_background()),
            menu_title: Rc::new(sprites::menu_title()),
            menu_single: Rc::new(sprites::menu_button("GAME A  1 DUCK")),
            menu_double: Rc::new(sprites::menu_button("GAME B  2 DUCKS")),
            menu_top_score: Rc::new(sprites::caption_box(80, 8, "TOP SCORE =", sprites::GREEN_INK)),

            dog_sniffing: Rc::new(sprites::dog_sniffing()),
            dog_jumping: Rc::new(sprites::dog_jumping()),
            dog_success: Rc::new(sprites::dog_success()),
            dog_failure: Rc::new(sprites::dog_failure()),

            duck_blue: sprites::duck_textures(DuckColour::Blue),
            duck_brown: sprites::duck_textures(DuckColour::Brown),
            duck_red: sprites::duck_textures(DuckColour::Red),
            duck_scores: sprites::duck_scores().into_iter().map(Rc::new).collect(),

            ui_bullet: Rc::new(sprites::ui_bullet()),
            ui_duck_lit: Rc::new(sprites::ui_duck_lit()),
            ui_duck_white: Rc::new(sprites::ui_duck_white()),
            ui_ducks_needed_bar: Rc::new(Texture::filled(7, 2, Some(Rgb(60, 100, 240)))),
            ui_hit: Rc::new(sprites::caption_box(30, 10, "HIT", sprites::GREEN_INK)),
            ui_message_fly_away: Rc::new(sprites::caption_box(64, 16, "FLY AWAY", Rgb::WHITE)),
            ui_message_game_over: Rc::new(sprites::caption_box(72, 24, "GAME OVER", Rgb::WHITE)),
            ui_message_round: Rc::new(sprites::caption_box(48, 16, "ROUND", Rgb::WHITE)),
            ui_numbers_green: Rc::new(Texture::filled(80, 8, None).with_ink(sprites::GREEN_INK)),
            ui_numbers_white: Rc::new(Texture::filled(80, 8, None).with_ink(Rgb::WHITE)),
            ui_round: Rc::new(sprites::caption_box(14, 8, "R=", sprites::GREEN_INK)),
            ui_score: Rc::new(sprites::caption_box(30, 8, "SCORE", Rgb::WHITE)),
            ui_shot: Rc::new(sprites::caption_box(26, 8, "SHOT", Rgb::WHITE)),
        }
    }

    pub fn duck(&self, colour: DuckColour) -> &DuckTextures {
        match colour {
            DuckColour::Blue => &self.duck_blue,
            DuckColour::Brown => &self.duck_brown,
            DuckColour::Red => &self.duck_red,
        }
    }

    /// Rejects bundles containing an empty image.
    pub fn validate(&self) -> Result<()> {
        let named: [(&'static str, &Texture); 10] = [
            ("background", &*self.background),
            ("background_fail", &*self.background_fail),
            ("foreground", &*self.foreground),
            ("main_menu_background", &*self.main_menu_background),
            ("dog_sniffing", &*self.dog_sniffing),
            ("dog_jumping", &*self.dog_jumping),
            ("dog_success", &*self.dog_success),
            ("dog_failure", &*self.dog_failure),
            ("ui_numbers_green", &*self.ui_numbers_green),
            ("ui_numbers_white", &*self.ui_numbers_white),
        ];
        for (name, texture) in named {
            if texture.width() == 0 || texture.height() == 0 {
                return Err(GameError::InvalidTexture {
                    name,
                    reason: format!("{}x{} image", texture.width(), texture.height()),
                });
            }
        }
        if self.duck_scores.is_empty() {
            return Err(GameError::InvalidTexture {
                name: "duck_scores",
                reason: "no score sprites".to_string(),
            });
        }
        Ok(())
    }
}
