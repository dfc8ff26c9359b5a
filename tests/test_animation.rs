use std::rc::Rc;

use approx::assert_relative_eq;

use duck_hunt::animation::Animation;
use duck_hunt::entities::Rect;
use duck_hunt::textures::{sprite_strip_rects, Texture};

fn strip(frames: i32) -> Rc<Texture> {
    Rc::new(Texture::filled(10 * frames, 12, None))
}

// ── sprite_strip_rects ───────────────────────────────────────────────────────

#[test]
fn strip_is_cut_into_equal_frames() {
    let rects = sprite_strip_rects(&Texture::filled(30, 10, None), 3);
    assert_eq!(
        rects,
        vec![
            Rect::new(0, 0, 10, 10),
            Rect::new(10, 0, 10, 10),
            Rect::new(20, 0, 10, 10),
        ]
    );
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_on_after_one_frame_length() {
    let mut a = Animation::new(strip(3), 3, 10.0);
    assert_eq!(a.advance(50.0), Rect::new(0, 0, 10, 12));
    assert_eq!(a.advance(51.0), Rect::new(10, 0, 10, 12));
    assert_eq!(a.current_frame(), 1);
}

#[test]
fn advance_wraps_around() {
    let mut a = Animation::new(strip(3), 3, 10.0);
    let seen: Vec<usize> = (0..7)
        .map(|_| {
            a.advance(101.0);
            a.current_frame()
        })
        .collect();
    assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
}

#[test]
fn advance_never_leaves_the_strip() {
    let mut a = Animation::new(strip(4), 4, 60.0);
    for i in 0..1000 {
        let rect = a.advance((i % 37) as f64);
        assert!(a.current_frame() < 4);
        assert!(rect.x + rect.w <= 40);
    }
}

#[test]
fn reset_rewinds_and_rebinds_rate() {
    let mut a = Animation::new(strip(3), 3, 10.0);
    a.advance(101.0);
    a.reset(20.0);
    assert_eq!(a.current_frame(), 0);
    assert_relative_eq!(a.frame_length(), 50.0);
    a.advance(51.0);
    assert_eq!(a.current_frame(), 1);
}

#[test]
fn frame_size_comes_from_first_frame() {
    let a = Animation::new(strip(5), 5, 10.0);
    assert_eq!(a.frame_width(), 10);
    assert_eq!(a.frame_height(), 12);
    assert_eq!(a.frame_count(), 5);
}

// ── cloning ───────────────────────────────────────────────────────────────────

#[test]
fn clones_share_frames_but_not_playback() {
    let template = Animation::new(strip(3), 3, 10.0);
    let mut a = template.clone();
    let b = template.clone();

    a.advance(101.0);
    assert_eq!(a.current_frame(), 1);
    assert_eq!(b.current_frame(), 0);
    assert_eq!(template.current_frame(), 0);
    assert!(a.shares_frames_with(&b));
}

#[test]
fn separately_built_animations_do_not_share() {
    let a = Animation::new(strip(3), 3, 10.0);
    let b = Animation::new(strip(3), 3, 10.0);
    assert!(!a.shares_frames_with(&b));
}
