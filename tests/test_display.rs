use std::rc::Rc;

use duck_hunt::compute::single_duck_game;
use duck_hunt::display::{Drawer, Flip};
use duck_hunt::error::GameError;
use duck_hunt::textures::{Rgb, Texture, TextureStyle, Textures};

const RED: Rgb = Rgb(255, 0, 0);

fn textures() -> Textures {
    Textures::generate(TextureStyle::Remake)
}

/// Two pixels: red on the left, transparent on the right.
fn half_red() -> Texture {
    let mut texture = Texture::filled(2, 1, None);
    texture.set_pixel(0, 0, Some(RED));
    texture
}

// ── fitting ───────────────────────────────────────────────────────────────────

#[test]
fn exact_fit_maps_one_to_one() {
    let t = textures();
    let drawer = Drawer::new(&t.background, 342, 112);
    assert_eq!(drawer.scale(), 1.0);
    assert_eq!(drawer.x_offset(), 0);
    assert_eq!(drawer.screen_point_to_world_point(120, 90), (120, 90));
    assert_eq!(drawer.visible_world_span(), (0.0, 342.0));
}

#[test]
fn narrow_terminal_crops_both_sides() {
    let t = textures();
    let drawer = Drawer::new(&t.background, 171, 112);
    assert_eq!(drawer.x_offset(), -85);
    assert_eq!(drawer.screen_point_to_world_point(0, 40), (85, 40));
    assert_eq!(drawer.visible_world_span(), (85.0, 256.0));
}

#[test]
fn wide_terminal_letterboxes() {
    let t = textures();
    let drawer = Drawer::new(&t.background, 442, 112);
    assert_eq!(drawer.x_offset(), 50);
    assert_eq!(drawer.screen_point_to_world_point(50, 0), (0, 0));
    assert_eq!(drawer.visible_world_span(), (0.0, 342.0));
}

#[test]
fn tall_terminal_scales_up() {
    let t = textures();
    let mut drawer = Drawer::new(&t.background, 684, 224);
    assert_eq!(drawer.scale(), 2.0);
    assert_eq!(drawer.screen_point_to_world_point(100, 50), (50, 25));

    drawer.clear();
    drawer.blit(&half_red(), 3, 3);
    for (x, y) in [(6, 6), (7, 6), (6, 7), (7, 7)] {
        assert_eq!(drawer.frame().pixel(x, y), Some(RED));
    }
    assert_eq!(drawer.frame().pixel(8, 6), Some(Rgb::BLACK));
}

// ── drawing ───────────────────────────────────────────────────────────────────

#[test]
fn transparent_pixels_leave_the_frame_alone() {
    let t = textures();
    let mut drawer = Drawer::new(&t.background, 342, 112);
    drawer.clear();
    drawer.blit(&half_red(), 10, 10);
    assert_eq!(drawer.frame().pixel(10, 10), Some(RED));
    assert_eq!(drawer.frame().pixel(11, 10), Some(Rgb::BLACK));
}

#[test]
fn horizontal_flip_mirrors_the_clip() {
    let t = textures();
    let mut drawer = Drawer::new(&t.background, 342, 112);
    drawer.clear();
    drawer.render_texture(&half_red(), 10, 10, None, Flip::Horizontal);
    assert_eq!(drawer.frame().pixel(10, 10), Some(Rgb::BLACK));
    assert_eq!(drawer.frame().pixel(11, 10), Some(RED));
}

#[test]
fn characters_are_printed_as_captions() {
    let t = textures();
    let mut drawer = Drawer::new(&t.background, 342, 112);
    drawer.clear();
    drawer.render_character(&t.ui_numbers_white, '7', 300, 200);
    drawer.render_character(&t.ui_numbers_white, 'x', 40, 200);

    let captions = drawer.frame().captions();
    assert_eq!(captions.len(), 2);
    assert_eq!((captions[0].col, captions[0].row), (300, 102));
    assert_eq!(captions[0].text, "7");
    assert_eq!(captions[0].ink, Rgb::WHITE);
    assert_eq!(captions[1].text, "0");
}

#[test]
fn hud_shows_zero_padded_score() {
    let t = textures();
    let mut drawer = Drawer::new(&t.background, 342, 112);
    let mut stats = single_duck_game();
    stats.score = 1234;
    drawer.clear();
    drawer.render_ui(33.0, &t, &stats);

    let mut digits: Vec<_> = drawer
        .frame()
        .captions()
        .iter()
        .filter(|c| c.text.len() == 1 && c.col >= 270)
        .map(|c| (c.col, c.text.clone()))
        .collect();
    digits.sort();
    let score: String = digits.into_iter().map(|(_, text)| text).collect();
    assert_eq!(score, "001234");
}

#[test]
fn clear_drops_captions() {
    let t = textures();
    let mut drawer = Drawer::new(&t.background, 342, 112);
    drawer.render_character(&t.ui_numbers_green, '3', 10, 10);
    assert!(!drawer.frame().captions().is_empty());
    drawer.clear();
    assert!(drawer.frame().captions().is_empty());
}

#[test]
fn present_writes_half_blocks() {
    let t = textures();
    let mut drawer = Drawer::new(&t.background, 40, 10);
    drawer.clear();
    drawer.blit(&t.background, 0, 0);
    let mut out: Vec<u8> = Vec::new();
    drawer.present(&mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains('▀'));
}

// ── textures ──────────────────────────────────────────────────────────────────

#[test]
fn generated_bundles_are_valid() {
    for style in [TextureStyle::Remake, TextureStyle::Classic] {
        let t = Textures::generate(style);
        assert!(t.validate().is_ok());
        assert_eq!((t.background.width(), t.background.height()), (342, 224));
        assert_eq!(t.duck_scores.len(), 8);
    }
}

#[test]
fn empty_texture_is_rejected() {
    let mut t = textures();
    t.dog_failure = Rc::new(Texture::filled(0, 0, None));
    match t.validate() {
        Err(GameError::InvalidTexture { name, .. }) => assert_eq!(name, "dog_failure"),
        other => panic!("expected invalid texture, got {other:?}"),
    }
}

#[test]
fn sprite_strips_hold_whole_frames() {
    let t = textures();
    let duck = t.duck(duck_hunt::entities::DuckColour::Red);
    assert_eq!(duck.diagonal.width() % 3, 0);
    assert_eq!(duck.falling.width() % 4, 0);
    assert_eq!(t.dog_success.width() % 12, 0);
    assert_eq!(t.dog_sniffing.width() % 6, 0);
}

#[test]
fn tree_canopy_is_widest_across_its_middle() {
    for style in [TextureStyle::Remake, TextureStyle::Classic] {
        let t = Textures::generate(style);
        let sky = t.background.pixel(300, 60);
        let leaves = t.background.pixel(43, 60);
        assert_ne!(leaves, sky);
        // Middle row spans x 9..77, the top row only 25..61.
        assert_eq!(t.background.pixel(10, 60), leaves);
        assert_eq!(t.background.pixel(10, 28), sky);
        assert_eq!(t.background.pixel(30, 28), leaves);
        assert_eq!(t.background.pixel(43, 92), t.background.pixel(43, 100));
    }
}
