//! Procedural pixel art for the texture bundle.
//!
//! Sprites are drawn as ASCII art at a third of their world size and
//! upscaled, so every sheet keeps the frame layout the animations expect:
//! ducks 36×30 per frame, dogs 48×36 per frame.

use crate::duck::SCORE_SPRITE_TIERS;
use crate::entities::{DuckColour, Rect};
use crate::textures::{DuckTextures, Rgb, Texture, TextureStyle};

use std::rc::Rc;

pub const BACKGROUND_WIDTH: i32 = 342;
pub const WORLD_HEIGHT: i32 = 224;

/// Top of the ground strip, below the bushes.
const GROUND_Y: i32 = 183;
const BUSH_Y: i32 = 150;
const UPSCALE: i32 = 3;

pub const GREEN_INK: Rgb = Rgb(130, 210, 40);

// ── Scenery ───────────────────────────────────────────────────────────────────

pub struct ScenePalette {
    sky: Rgb,
    sky_fail: Rgb,
    bush: Rgb,
    bush_dark: Rgb,
    ground: Rgb,
    trunk: Rgb,
    leaves: Rgb,
}

impl ScenePalette {
    pub fn for_style(style: TextureStyle) -> Self {
        match style {
            TextureStyle::Remake => Self {
                sky: Rgb(100, 170, 250),
                sky_fail: Rgb(250, 180, 190),
                bush: Rgb(70, 160, 50),
                bush_dark: Rgb(40, 110, 30),
                ground: Rgb(140, 95, 50),
                trunk: Rgb(110, 70, 40),
                leaves: Rgb(60, 140, 40),
            },
            TextureStyle::Classic => Self {
                sky: Rgb(60, 188, 252),
                sky_fail: Rgb(252, 188, 176),
                bush: Rgb(128, 208, 16),
                bush_dark: Rgb(0, 168, 0),
                ground: Rgb(136, 112, 0),
                trunk: Rgb(136, 20, 0),
                leaves: Rgb(0, 168, 0),
            },
        }
    }
}

fn scenery(sky: Rgb, palette: &ScenePalette) -> Texture {
    let mut texture = Texture::filled(BACKGROUND_WIDTH, WORLD_HEIGHT, Some(sky));
    // Tree on the left, drawn behind the bushes.
    texture.fill_rect(Rect::new(36, 70, 14, GROUND_Y - 70), Some(palette.trunk));
    for y in 28..92_i32 {
        let half = 34 - (y - 60).abs() / 2;
        texture.fill_rect(Rect::new(43 - half, y, half * 2, 1), Some(palette.leaves));
    }
    texture.fill_rect(
        Rect::new(0, GROUND_Y, BACKGROUND_WIDTH, WORLD_HEIGHT - GROUND_Y),
        Some(palette.ground),
    );
    texture
}

pub fn background(palette: &ScenePalette) -> Texture {
    scenery(palette.sky, palette)
}

pub fn background_fail(palette: &ScenePalette) -> Texture {
    scenery(palette.sky_fail, palette)
}

/// Bushes and ground; transparent above the bush line so anything drawn
/// before it disappears behind the bushes.
pub fn foreground(palette: &ScenePalette) -> Texture {
    let mut texture = Texture::filled(BACKGROUND_WIDTH, WORLD_HEIGHT, None);
    for x in 0..BACKGROUND_WIDTH {
        let bump = ((x as f64 / 9.0).sin() * 4.0 + (x as f64 / 23.0).cos() * 3.0) as i32;
        let top = BUSH_Y - 6 + bump;
        texture.fill_rect(Rect::new(x, top, 1, GROUND_Y - top), Some(palette.bush));
        if x % 11 < 3 {
            texture.fill_rect(Rect::new(x, top + 8, 1, 10), Some(palette.bush_dark));
        }
    }
    texture.fill_rect(
        Rect::new(0, GROUND_Y, BACKGROUND_WIDTH, WORLD_HEIGHT - GROUND_Y),
        Some(palette.ground),
    );
    texture
}

pub fn main_menu_background() -> Texture {
    Texture::filled(BACKGROUND_WIDTH, WORLD_HEIGHT, Some(Rgb::BLACK))
}

pub fn menu_title() -> Texture {
    caption_box(140, 40, "DUCK HUNT", Rgb(240, 160, 40))
}

pub fn menu_button(label: &str) -> Texture {
    let mut texture = Texture::filled(76, 69, Some(Rgb(20, 20, 60)));
    let border = Some(Rgb(240, 160, 40));
    texture.fill_rect(Rect::new(0, 0, 76, 2), border);
    texture.fill_rect(Rect::new(0, 67, 76, 2), border);
    texture.fill_rect(Rect::new(0, 0, 2, 69), border);
    texture.fill_rect(Rect::new(74, 0, 2, 69), border);
    texture.with_caption(label, Rgb(240, 160, 40))
}

/// A dark panel with centred text.
pub fn caption_box(width: i32, height: i32, text: &str, ink: Rgb) -> Texture {
    Texture::filled(width, height, Some(Rgb(10, 10, 10))).with_caption(text, ink)
}

// ── Ducks ─────────────────────────────────────────────────────────────────────

const DUCK_HORIZONTAL: [[&str; 10]; 3] = [
    [
        "...ww.......",
        "...www......",
        "....www..hh.",
        "....wwwbhhey",
        "..bbbbbbhhyy",
        ".bbbbbbbbb..",
        "..llllbb....",
        "...ll.......",
        "............",
        "............",
    ],
    [
        "............",
        "............",
        ".........hh.",
        ".......bhhey",
        "..bbbbbbhhyy",
        ".bwwwwwbbb..",
        "..llwwwb....",
        "...ll.......",
        "............",
        "............",
    ],
    [
        "............",
        "............",
        ".........hh.",
        ".......bhhey",
        "..bbbbbbhhyy",
        ".bbbbwwwbb..",
        "..lllwwwb...",
        ".....www....",
        "......ww....",
        "............",
    ],
];

const DUCK_DIAGONAL: [[&str; 10]; 3] = [
    [
        ".ww.....hh..",
        ".www...hhey.",
        "..www.bhhyy.",
        "..wwwbbbh...",
        "...bbbbbb...",
        "..bbbbbbb...",
        "..llllbb....",
        "...lll......",
        "....ll......",
        "............",
    ],
    [
        "........hh..",
        ".......hhey.",
        "......bhhyy.",
        "..wwwbbbh...",
        ".wwwbbbbb...",
        "..bbbbbbb...",
        "..llllbb....",
        "...lll......",
        "....ll......",
        "............",
    ],
    [
        "........hh..",
        ".......hhey.",
        "......bhhyy.",
        ".....bbbh...",
        "...bbbbbb...",
        "..bwwwbbb...",
        "..lwwwwb....",
        "..www.......",
        "..ww........",
        "............",
    ],
];

const DUCK_VERTICAL: [[&str; 10]; 3] = [
    [
        "ww...hh...ww",
        "www.hhhh.www",
        ".www.ey.www.",
        "..wwbyybww..",
        "...bbbbbb...",
        "...bbbbbb...",
        "....llll....",
        "....llll....",
        ".....ll.....",
        "............",
    ],
    [
        ".....hh.....",
        "....hhhh....",
        "wwww.ey.wwww",
        ".wwwbyybwww.",
        "...bbbbbb...",
        "...bbbbbb...",
        "....llll....",
        "....llll....",
        ".....ll.....",
        "............",
    ],
    [
        ".....hh.....",
        "....hhhh....",
        ".....ey.....",
        "....byyb....",
        ".wwwbbbbwww.",
        "ww.bbbbbb.ww",
        "w...llll...w",
        "....llll....",
        ".....ll.....",
        "............",
    ],
];

const DUCK_DEAD: [&str; 10] = [
    "..w......w..",
    ".ww.hhhh.ww.",
    ".ww.hkkh.ww.",
    "..wwhhhhww..",
    "...bbyybb...",
    "...bbbbbb...",
    "....llll....",
    "....llll....",
    ".....kk.....",
    ".....kk.....",
];

const DUCK_FALLING: [[&str; 10]; 2] = [
    [
        ".....kk.....",
        "....llll....",
        "...bbbbbb...",
        "..wbbbbbbw..",
        "..w.bbbb.w..",
        ".....hh.....",
        "....hhhh....",
        "....hkeh....",
        ".....yy.....",
        ".....yy.....",
    ],
    [
        ".....kk.....",
        "....llll....",
        "...bbbbbb...",
        "...bbbbbbw..",
        "...wbbbb.w..",
        ".....hh.....",
        "....hhhh....",
        "....hekh....",
        ".....yy.....",
        ".....yy.....",
    ],
];

fn duck_body(colour: DuckColour) -> Rgb {
    match colour {
        DuckColour::Blue => Rgb(40, 60, 170),
        DuckColour::Brown => Rgb(120, 70, 30),
        DuckColour::Red => Rgb(150, 25, 25),
    }
}

fn duck_palette(colour: DuckColour) -> [(char, Rgb); 7] {
    let (wing, head, belly) = match colour {
        DuckColour::Blue => (Rgb(90, 130, 230), Rgb(20, 110, 60), Rgb(200, 200, 220)),
        DuckColour::Brown => (Rgb(180, 120, 60), Rgb(20, 110, 60), Rgb(220, 190, 150)),
        DuckColour::Red => (Rgb(220, 80, 60), Rgb(60, 20, 90), Rgb(230, 180, 170)),
    };
    [
        ('b', duck_body(colour)),
        ('w', wing),
        ('h', head),
        ('l', belly),
        ('k', Rgb::BLACK),
        ('y', Rgb(240, 160, 40)),
        ('e', Rgb::WHITE),
    ]
}

fn art_strip(frames: &[[&str; 10]], palette: &[(char, Rgb)]) -> Texture {
    let frames: Vec<Texture> = frames
        .iter()
        .map(|rows| Texture::from_art(rows, palette, UPSCALE))
        .collect();
    Texture::strip(&frames)
}

pub fn duck_textures(colour: DuckColour) -> DuckTextures {
    let palette = duck_palette(colour);
    let fall_a = Texture::from_art(&DUCK_FALLING[0], &palette, UPSCALE);
    let fall_b = Texture::from_art(&DUCK_FALLING[1], &palette, UPSCALE);
    let falling = Texture::strip(&[fall_a.clone(), fall_b.clone(), fall_a, fall_b.flipped()]);
    DuckTextures {
        horizontal: Rc::new(art_strip(&DUCK_HORIZONTAL, &palette)),
        diagonal: Rc::new(art_strip(&DUCK_DIAGONAL, &palette)),
        vertical: Rc::new(art_strip(&DUCK_VERTICAL, &palette)),
        dead: Rc::new(Texture::from_art(&DUCK_DEAD, &palette, UPSCALE)),
        falling: Rc::new(falling),
    }
}

pub fn duck_scores() -> Vec<Texture> {
    SCORE_SPRITE_TIERS
        .iter()
        .map(|score| Texture::filled(20, 8, None).with_caption(score.to_string(), Rgb::WHITE))
        .collect()
}

// ── Dog ───────────────────────────────────────────────────────────────────────

const DOG_PALETTE: [(char, Rgb); 5] = [
    ('c', Rgb(200, 140, 70)),
    ('s', Rgb(110, 60, 20)),
    ('k', Rgb::BLACK),
    ('w', Rgb(250, 240, 220)),
    ('r', Rgb(220, 60, 60)),
];

const DOG_BODY_WALK: [&str; 8] = [
    "................",
    ".s..........ss..",
    ".ss........sccs.",
    "..ccccccccccccck",
    ".ccssccccccccckk",
    ".cccssccccccccc.",
    "..cccccccccccc..",
    "..cwwccccccwc...",
];

const DOG_BODY_SNIFF: [&str; 8] = [
    "................",
    ".s..............",
    ".ss.............",
    "..ccccccccccss..",
    ".ccssccccccsccs.",
    ".cccssccccccccck",
    "..cccccccccccckk",
    "..cwwccccccwc...",
];

const DOG_BODY_ALERT: [&str; 8] = [
    "............ss..",
    ".s.........sccs.",
    ".ss........sckc.",
    "..cccccccccccccc",
    ".ccssccccccccckk",
    ".cccssccccccc...",
    "..cccccccccccc..",
    "..cwwccccccwc...",
];

const DOG_LEGS: [[&str; 4]; 3] = [
    [
        "..cc.cc...cc.cc.",
        "..cc.cc...cc.cc.",
        ".kk..kk..kk..kk.",
        "................",
    ],
    [
        "...cc.cc.cc.cc..",
        "...cc.cc.cc.cc..",
        "..kk.kk.kk.kk...",
        "................",
    ],
    [
        "..cc..cc.cc..cc.",
        ".cc...cc.cc...cc",
        "kk...kk..kk..kk.",
        "................",
    ],
];

const DOG_FRONT: [&str; 12] = [
    "................",
    "................",
    "..cc..ssss..cc..",
    "..cc.scccccscc..",
    "...ccckcckccc...",
    "....cccccccc....",
    ".....ckkkkc.....",
    ".....cwwwwc.....",
    "....cccccccc....",
    "....cccccccc....",
    "....cccccccc....",
    "....cccccccc....",
];

const DOG_LAUGH: [&str; 12] = [
    "................",
    "................",
    "......ssss......",
    ".....scccccs....",
    "....cckcckcc....",
    "....cccccccc....",
    ".....ckrrkc.....",
    ".....crrrrc.....",
    "....cccccccc....",
    "....cccccccc....",
    "....cccccccc....",
    "....cccccccc....",
];

fn dog_frame(body: &[&str; 8], legs: &[&str; 4]) -> Texture {
    let rows: Vec<&str> = body.iter().chain(legs.iter()).copied().collect();
    Texture::from_art(&rows, &DOG_PALETTE, UPSCALE)
}

/// Six frames: four walking steps, nose down, head up.
pub fn dog_sniffing() -> Texture {
    Texture::strip(&[
        dog_frame(&DOG_BODY_WALK, &DOG_LEGS[0]),
        dog_frame(&DOG_BODY_WALK, &DOG_LEGS[1]),
        dog_frame(&DOG_BODY_WALK, &DOG_LEGS[2]),
        dog_frame(&DOG_BODY_WALK, &DOG_LEGS[1]),
        dog_frame(&DOG_BODY_SNIFF, &DOG_LEGS[0]),
        dog_frame(&DOG_BODY_ALERT, &DOG_LEGS[0]),
    ])
}

/// Two frames: leaping up, dropping into the bushes.
pub fn dog_jumping() -> Texture {
    let leap = dog_frame(&DOG_BODY_ALERT, &DOG_LEGS[2]);
    let drop = Texture::from_art(&DOG_FRONT, &DOG_PALETTE, UPSCALE).flipped();
    Texture::strip(&[leap, drop])
}

/// Twelve frames: one duck (brown, blue, red) then every ordered pair.
pub fn dog_success() -> Texture {
    let colours = [DuckColour::Brown, DuckColour::Blue, DuckColour::Red];
    let holding = |left: Option<DuckColour>, right: DuckColour| {
        let mut frame = Texture::from_art(&DOG_FRONT, &DOG_PALETTE, UPSCALE);
        frame.fill_rect(Rect::new(33, 0, 12, 9), Some(duck_body(right)));
        if let Some(left) = left {
            frame.fill_rect(Rect::new(3, 0, 12, 9), Some(duck_body(left)));
        }
        frame
    };
    let mut frames: Vec<Texture> = colours.iter().map(|&c| holding(None, c)).collect();
    for &first in &colours {
        for &second in &colours {
            frames.push(holding(Some(first), second));
        }
    }
    Texture::strip(&frames)
}

/// Two laughing frames.
pub fn dog_failure() -> Texture {
    Texture::strip(&[
        Texture::from_art(&DOG_LAUGH, &DOG_PALETTE, UPSCALE),
        Texture::from_art(&DOG_FRONT, &DOG_PALETTE, UPSCALE),
    ])
}

// ── HUD ───────────────────────────────────────────────────────────────────────

const UI_DUCK: [&str; 7] = [
    "....kk.",
    "...kkkk",
    "kk.kkk.",
    "kkkkkk.",
    ".kkkkk.",
    "..kkk..",
    ".......",
];

pub fn ui_duck_white() -> Texture {
    Texture::from_art(&UI_DUCK, &[('k', Rgb::WHITE)], 1)
}

pub fn ui_duck_lit() -> Texture {
    let lit = Texture::from_art(&UI_DUCK, &[('k', Rgb(230, 60, 60))], 1);
    let frames = vec![lit; 10];
    Texture::strip(&frames)
}

pub fn ui_bullet() -> Texture {
    let mut bullet = Texture::filled(4, 7, Some(Rgb(240, 160, 40)));
    bullet.fill_rect(Rect::new(0, 0, 4, 2), Some(Rgb(200, 200, 200)));
    bullet
}
