use duck_hunt::compute::*;
use duck_hunt::display::Drawer;
use duck_hunt::duck::{Duck, DuckHatchery};
use duck_hunt::entities::*;
use duck_hunt::textures::{TextureStyle, Textures};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn hatchery() -> DuckHatchery {
    let textures = Textures::generate(TextureStyle::Remake);
    let drawer = Drawer::new(&textures.background, 342, 112);
    DuckHatchery::new(&textures, &drawer)
}

fn stats_with_hits(hits: usize) -> PlayerStats {
    let mut stats = single_duck_game();
    stats.duck_next = DUCKS_PER_ROUND;
    for slot in stats.ducks_hit.iter_mut().take(hits) {
        *slot = true;
    }
    stats
}

// ── score_for_duck ────────────────────────────────────────────────────────────

#[test]
fn score_base_values() {
    assert_eq!(score_for_duck(1, DuckColour::Brown), 500);
    assert_eq!(score_for_duck(1, DuckColour::Blue), 1000);
    assert_eq!(score_for_duck(1, DuckColour::Red), 1500);
}

#[test]
fn score_multiplier_tiers() {
    assert_eq!(score_for_duck(5, DuckColour::Blue), 1000);
    assert_eq!(score_for_duck(6, DuckColour::Blue), 1600);
    assert_eq!(score_for_duck(10, DuckColour::Brown), 800);
    assert_eq!(score_for_duck(10, DuckColour::Red), 2400);
    assert_eq!(score_for_duck(11, DuckColour::Red), 3000);
    assert_eq!(score_for_duck(40, DuckColour::Brown), 1000);
}

#[test]
fn every_score_has_its_own_sprite() {
    let tiers = duck_hunt::duck::SCORE_SPRITE_TIERS;
    for round in 1..30 {
        for colour in [DuckColour::Blue, DuckColour::Brown, DuckColour::Red] {
            assert!(tiers.contains(&score_for_duck(round, colour)));
        }
    }
}

// ── ducks_needed_for_round ────────────────────────────────────────────────────

#[test]
fn ducks_needed_steps() {
    assert_eq!(ducks_needed_for_round(1), 6);
    assert_eq!(ducks_needed_for_round(10), 6);
    assert_eq!(ducks_needed_for_round(11), 7);
    assert_eq!(ducks_needed_for_round(12), 7);
    assert_eq!(ducks_needed_for_round(13), 8);
    assert_eq!(ducks_needed_for_round(14), 8);
    assert_eq!(ducks_needed_for_round(15), 9);
    assert_eq!(ducks_needed_for_round(19), 9);
    assert_eq!(ducks_needed_for_round(20), 10);
}

#[test]
fn ducks_needed_never_drops() {
    for round in 1..30 {
        assert!(ducks_needed_for_round(round + 1) >= ducks_needed_for_round(round));
        assert!(ducks_needed_for_round(round) <= DUCKS_PER_ROUND);
    }
}

// ── random_duck_colour ────────────────────────────────────────────────────────

#[test]
fn colour_distribution_favours_brown() {
    let mut rng = seeded_rng();
    let (mut red, mut blue, mut brown) = (0, 0, 0);
    for _ in 0..11_000 {
        match random_duck_colour(&mut rng) {
            DuckColour::Red => red += 1,
            DuckColour::Blue => blue += 1,
            DuckColour::Brown => brown += 1,
        }
    }
    // Expected 1000 / 4000 / 6000.
    assert!((700..1300).contains(&red), "red = {red}");
    assert!((3600..4400).contains(&blue), "blue = {blue}");
    assert!((5500..6500).contains(&brown), "brown = {brown}");
}

// ── new_game ──────────────────────────────────────────────────────────────────

#[test]
fn new_game_starts_at_round_one() {
    let s = new_game(GameType::Single);
    assert_eq!(s.round, 1);
    assert_eq!(s.score, 0);
    assert_eq!(s.duck_next, 0);
    assert_eq!(s.ducks_needed, 6);
    assert_eq!(s.shots_left, SHOTS_PER_SPAWN);
    assert!(s.ducks_current.is_empty());
    assert!(s.ducks_hit.iter().all(|&hit| !hit));
    assert_eq!(s.ducks_simultaneous, 1);
}

#[test]
fn double_game_releases_pairs() {
    let s = new_game(GameType::Double);
    assert_eq!(s.ducks_simultaneous, 2);
    assert_eq!(s, PlayerStats { ducks_simultaneous: 2, ..single_duck_game() });
}

// ── spawn_duck / try_spawn_duck ──────────────────────────────────────────────

#[test]
fn spawn_duck_hands_out_consecutive_indices() {
    let hatchery = hatchery();
    let mut rng = seeded_rng();
    let mut ducks: Vec<Duck> = Vec::new();
    let mut stats = double_duck_game();
    stats.round = 4;

    spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng);
    assert_eq!(ducks.len(), 2);
    assert_eq!(stats.duck_next, 2);
    assert_eq!(stats.ducks_current, vec![0, 1]);
    for (i, duck) in ducks.iter().enumerate() {
        assert_eq!(duck.index, i);
        assert!(duck.alive);
    }
}

#[test]
fn spawn_duck_stops_at_the_last_index() {
    let hatchery = hatchery();
    let mut rng = seeded_rng();
    let mut ducks = Vec::new();
    let mut stats = double_duck_game();
    stats.duck_next = 9;

    spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng);
    assert_eq!(ducks.len(), 1);
    assert_eq!(stats.duck_next, DUCKS_PER_ROUND);
    assert_eq!(stats.ducks_current, vec![9]);
}

#[test]
fn try_spawn_waits_for_an_empty_sky() {
    let hatchery = hatchery();
    let mut rng = seeded_rng();
    let mut ducks = Vec::new();
    let mut stats = single_duck_game();

    assert!(try_spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng));
    assert_eq!(ducks.len(), 1);
    assert!(!try_spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng));
    assert_eq!(ducks.len(), 1);
    assert_eq!(stats.duck_next, 1);
}

#[test]
fn try_spawn_refuses_once_round_is_used_up() {
    let hatchery = hatchery();
    let mut rng = seeded_rng();
    let mut ducks = Vec::new();
    let mut stats = single_duck_game();
    stats.duck_next = DUCKS_PER_ROUND;

    assert!(!try_spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng));
    assert!(ducks.is_empty());
}

#[test]
fn spawned_duck_is_worth_its_colour() {
    let hatchery = hatchery();
    let mut rng = seeded_rng();
    for _ in 0..20 {
        let mut ducks = Vec::new();
        let mut stats = single_duck_game();
        stats.round = 7;
        spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng);
        let colour = ducks[0].colour;
        assert_eq!(kill_duck(&mut ducks[0], &mut stats), Some(score_for_duck(7, colour)));
    }
}

// ── kill_duck ─────────────────────────────────────────────────────────────────

#[test]
fn kill_duck_books_the_hit() {
    let hatchery = hatchery();
    let mut rng = seeded_rng();
    let mut ducks = Vec::new();
    let mut stats = double_duck_game();
    spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng);

    let points = kill_duck(&mut ducks[1], &mut stats);
    assert!(points.is_some());
    assert_eq!(stats.score, points.unwrap_or(0));
    assert_eq!(stats.ducks_current, vec![0]);
    assert!(stats.ducks_hit[1]);
    assert!(!stats.ducks_hit[0]);
    assert_eq!(living_ducks(&ducks), 1);
}

#[test]
fn kill_duck_twice_scores_once() {
    let hatchery = hatchery();
    let mut rng = seeded_rng();
    let mut ducks = Vec::new();
    let mut stats = single_duck_game();
    spawn_duck(&hatchery, &mut ducks, &mut stats, &mut rng);

    kill_duck(&mut ducks[0], &mut stats);
    let score = stats.score;
    assert_eq!(kill_duck(&mut ducks[0], &mut stats), None);
    assert_eq!(stats.score, score);
    assert_eq!(ducks_hit_count(&stats), 1);
}

// ── round_outcome ─────────────────────────────────────────────────────────────

#[test]
fn round_still_running() {
    let mut stats = stats_with_hits(8);
    assert_eq!(round_outcome(&stats, false), None);
    stats.duck_next = 9;
    assert_eq!(round_outcome(&stats, true), None);
}

#[test]
fn meeting_the_quota_advances() {
    assert_eq!(round_outcome(&stats_with_hits(6), true), Some(RoundOutcome::Advance));
    assert_eq!(round_outcome(&stats_with_hits(10), true), Some(RoundOutcome::Advance));
}

#[test]
fn missing_the_quota_ends_the_game() {
    assert_eq!(round_outcome(&stats_with_hits(5), true), Some(RoundOutcome::GameOver));
    assert_eq!(round_outcome(&stats_with_hits(0), true), Some(RoundOutcome::GameOver));
}

#[test]
fn finished_round_is_judged_exactly_one_way() {
    for hits in 0..=DUCKS_PER_ROUND {
        for round in [1, 11, 13, 15, 20] {
            let mut stats = stats_with_hits(hits);
            stats.ducks_needed = ducks_needed_for_round(round);
            let outcome = round_outcome(&stats, true);
            let expected = if hits >= stats.ducks_needed {
                RoundOutcome::Advance
            } else {
                RoundOutcome::GameOver
            };
            assert_eq!(outcome, Some(expected));
        }
    }
}

// ── start_new_round ───────────────────────────────────────────────────────────

#[test]
fn new_round_resets_the_hit_panel() {
    let mut stats = stats_with_hits(7);
    stats.round = 10;
    stats.score = 12_345;
    start_new_round(&mut stats);
    assert_eq!(stats.round, 11);
    assert_eq!(stats.duck_next, 0);
    assert_eq!(stats.ducks_needed, 7);
    assert!(stats.ducks_hit.iter().all(|&hit| !hit));
    assert_eq!(stats.score, 12_345);
}

// ── coalesce_hits_step ────────────────────────────────────────────────────────

#[test]
fn coalesce_step_moves_markers_left() {
    let mut hits = [false; DUCKS_PER_ROUND];
    hits[3] = true;
    assert!(coalesce_hits_step(&mut hits));
    assert!(hits[2]);
    assert!(!hits[3]);
}

#[test]
fn coalesce_converges_with_count_preserved() {
    let mut hits = [false, true, false, true, true, false, false, true, false, true];
    let count = hits.iter().filter(|&&h| h).count();
    let mut passes = 0;
    while coalesce_hits_step(&mut hits) {
        passes += 1;
        assert!(passes <= DUCKS_PER_ROUND);
        assert_eq!(hits.iter().filter(|&&h| h).count(), count);
    }
    let expected: Vec<bool> = (0..DUCKS_PER_ROUND).map(|i| i < count).collect();
    assert_eq!(hits.to_vec(), expected);
}

#[test]
fn coalesce_on_packed_panel_is_a_no_op() {
    let mut hits = [true, true, true, false, false, false, false, false, false, false];
    assert!(!coalesce_hits_step(&mut hits));
    assert_eq!(hits, [true, true, true, false, false, false, false, false, false, false]);
}
