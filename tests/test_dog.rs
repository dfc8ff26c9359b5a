use std::rc::Rc;

use duck_hunt::display::Drawer;
use duck_hunt::dog::*;
use duck_hunt::entities::DuckColour;
use duck_hunt::message::{Message, RoundMessage};
use duck_hunt::textures::{TextureStyle, Textures};

fn setup() -> (Textures, Drawer) {
    let textures = Textures::generate(TextureStyle::Remake);
    let drawer = Drawer::new(&textures.background, 342, 112);
    (textures, drawer)
}

// ── intro ─────────────────────────────────────────────────────────────────────

#[test]
fn sniffing_walks_right_then_finishes() {
    let (textures, mut drawer) = setup();
    let mut dog = DogSniffing::new(Rc::clone(&textures.dog_sniffing), 7.0);
    assert_eq!((dog.x, dog.y), SNIFFING_START);

    let mut calls = 0;
    while !dog.render(&mut drawer, 150.0) {
        calls += 1;
        assert!(calls < 200, "sniffing never ended");
    }
    // One tick per call; the walk starts on the second step of the table.
    assert_eq!(calls, 85);
    assert_eq!(dog.step(), 87);
    assert!(dog.x > SNIFFING_START.0);
    assert_eq!(dog.y, SNIFFING_START.1);
}

#[test]
fn sniffing_waits_for_its_frame_time() {
    let (textures, mut drawer) = setup();
    let mut dog = DogSniffing::new(Rc::clone(&textures.dog_sniffing), 7.0);
    assert_eq!(dog.step(), 1);
    dog.render(&mut drawer, 100.0);
    assert_eq!(dog.step(), 1);
    dog.render(&mut drawer, 50.0);
    assert_eq!(dog.step(), 2);
    assert_eq!(dog.x, SNIFFING_START.0 + 2);
}

#[test]
fn jump_rises_then_drops_one_step_further() {
    let (textures, mut drawer) = setup();
    let mut dog = DogJumping::new(Rc::clone(&textures.dog_jumping), 90.0);
    dog.x = 100;
    dog.y = 140;

    let mut calls = 0;
    while !dog.render_jump(&mut drawer, 12.0) {
        calls += 1;
    }
    assert_eq!(calls, 43);
    assert_eq!((dog.x, dog.y), (143, 97));

    while !dog.render_fall(&mut drawer, 12.0) {}
    assert_eq!((dog.x, dog.y), (187, 141));
}

// ── pop-ups ───────────────────────────────────────────────────────────────────

#[test]
fn success_dog_rises_holds_and_sinks() {
    let (textures, mut drawer) = setup();
    let mut dog = DogSuccess::new(150, Rc::clone(&textures.dog_success), 4);
    assert_eq!(dog.x(), 150);

    let mut highest = RISE_BOTTOM;
    let mut calls = 0;
    while !dog.render(&mut drawer, 10.0) {
        highest = highest.min(dog.y());
        calls += 1;
        assert!(calls < 1000);
    }
    assert!(highest < RISE_TOP);
    assert!(dog.y() > RISE_BOTTOM);
}

#[test]
fn failure_dog_holds_longer_than_success_dog() {
    let (textures, mut drawer) = setup();
    let mut success = DogSuccess::new(150, Rc::clone(&textures.dog_success), 0);
    let mut failure = DogFailure::new(Rc::clone(&textures.dog_failure), 10.0);

    let mut success_calls = 0;
    while !success.render(&mut drawer, 10.0) {
        success_calls += 1;
    }
    let mut failure_calls = 0;
    while !failure.render(&mut drawer, 10.0) {
        failure_calls += 1;
    }
    // Same rise and sink; the laugh is held 800 ms longer.
    assert!(failure_calls - success_calls >= 79);
    assert!(failure.y() > RISE_BOTTOM);
}

#[test]
fn game_over_dog_stays_up() {
    let (textures, mut drawer) = setup();
    let mut dog = DogGameOver::new(Rc::clone(&textures.dog_failure), 10.0);
    let mut calls = 0;
    while !dog.render(&mut drawer, 10.0) {
        calls += 1;
    }
    assert!(calls >= 300);
    assert!(dog.y() < RISE_TOP);
}

#[test]
fn success_frames_cover_singles_and_pairs() {
    assert_eq!(success_frame_single(DuckColour::Brown), 0);
    assert_eq!(success_frame_single(DuckColour::Blue), 1);
    assert_eq!(success_frame_single(DuckColour::Red), 2);
    assert_eq!(success_frame_pair(DuckColour::Brown, DuckColour::Brown), 3);
    assert_eq!(success_frame_pair(DuckColour::Blue, DuckColour::Red), 8);
    assert_eq!(success_frame_pair(DuckColour::Red, DuckColour::Red), 11);
}

#[test]
fn success_dog_x_is_clamped() {
    assert_eq!(success_dog_x(0), SUCCESS_X_MIN);
    assert_eq!(success_dog_x(170), 170);
    assert_eq!(success_dog_x(400), SUCCESS_X_MAX);
}

// ── messages ──────────────────────────────────────────────────────────────────

#[test]
fn message_expires_after_its_duration() {
    let (textures, mut drawer) = setup();
    let mut message = Message::new(177, 60, 100.0, Rc::clone(&textures.ui_message_fly_away));
    assert!(!message.render(&mut drawer, 60.0));
    assert!(message.render(&mut drawer, 41.0));
}

#[test]
fn round_message_prints_the_round_number() {
    let (textures, mut drawer) = setup();
    let mut message = RoundMessage::new(
        10,
        10,
        2500.0,
        Rc::clone(&textures.ui_message_round),
        12,
        Rc::clone(&textures.ui_numbers_white),
    );
    assert_eq!(message.round(), "12");
    drawer.clear();
    message.render(&mut drawer, 33.0);

    let digits: Vec<(u16, u16, &str)> = drawer
        .frame()
        .captions()
        .iter()
        .filter(|c| c.text.len() == 1)
        .map(|c| (c.col, c.row, c.text.as_str()))
        .collect();
    assert_eq!(digits, vec![(26, 15, "1"), (34, 15, "2")]);
}
