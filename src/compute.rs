//! Round bookkeeping.
//!
//! Everything here works on a `PlayerStats` borrowed from the running game
//! and, where needed, an injected RNG.  Scenes call these; nothing in here
//! draws or reads input.

use rand::Rng;
use tracing::{debug, info};

use crate::duck::{Duck, DuckHatchery};
use crate::entities::{
    DuckColour, GameType, PlayerStats, RoundOutcome, DUCKS_PER_ROUND, SHOTS_PER_SPAWN,
};

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Points for shooting a duck of `colour` in `round`.
pub fn score_for_duck(round: u32, colour: DuckColour) -> u32 {
    let multiplier = if round <= 5 {
        1.0
    } else if round <= 10 {
        1.6
    } else {
        2.0
    };
    let base: f64 = match colour {
        DuckColour::Brown => 500.0,
        DuckColour::Blue => 1000.0,
        DuckColour::Red => 1500.0,
    };
    (base * multiplier) as u32
}

/// Hits required to clear `round`.
pub fn ducks_needed_for_round(round: u32) -> usize {
    match round {
        0..=10 => 6,
        11..=12 => 7,
        13..=14 => 8,
        15..=19 => 9,
        _ => 10,
    }
}

/// 1 in 11 red, 4 in 11 blue, the rest brown.
pub fn random_duck_colour(rng: &mut impl Rng) -> DuckColour {
    match rng.gen_range(0..=10) {
        0 => DuckColour::Red,
        1..=4 => DuckColour::Blue,
        _ => DuckColour::Brown,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn single_duck_game() -> PlayerStats {
    PlayerStats {
        ducks_hit: [false; DUCKS_PER_ROUND],
        ducks_current: Vec::new(),
        ducks_needed: ducks_needed_for_round(1),
        duck_next: 0,
        ducks_simultaneous: GameType::Single.ducks_simultaneous(),
        round: 1,
        score: 0,
        shots_left: SHOTS_PER_SPAWN,
    }
}

pub fn double_duck_game() -> PlayerStats {
    PlayerStats {
        ducks_simultaneous: GameType::Double.ducks_simultaneous(),
        ..single_duck_game()
    }
}

pub fn new_game(game_type: GameType) -> PlayerStats {
    match game_type {
        GameType::Single => single_duck_game(),
        GameType::Double => double_duck_game(),
    }
}

// ── Spawning and shooting ────────────────────────────────────────────────────

/// Releases one group of `ducks_simultaneous` ducks, each with the next free
/// index.  Stops early if the round has no indices left.
pub fn spawn_duck(
    hatchery: &DuckHatchery,
    ducks: &mut Vec<Duck>,
    stats: &mut PlayerStats,
    rng: &mut impl Rng,
) {
    for _ in 0..stats.ducks_simultaneous {
        if stats.duck_next >= DUCKS_PER_ROUND {
            break;
        }
        let colour = random_duck_colour(rng);
        let score = score_for_duck(stats.round, colour);
        ducks.push(hatchery.new_duck(colour, score, stats.round, stats.duck_next, rng));
        stats.ducks_current.push(stats.duck_next);
        stats.duck_next += 1;
    }
}

/// Spawns only when the sky is empty and the round still has ducks to send.
/// Returns whether anything was spawned.
pub fn try_spawn_duck(
    hatchery: &DuckHatchery,
    ducks: &mut Vec<Duck>,
    stats: &mut PlayerStats,
    rng: &mut impl Rng,
) -> bool {
    if ducks.is_empty() && stats.duck_next < DUCKS_PER_ROUND {
        spawn_duck(hatchery, ducks, stats, rng);
        return true;
    }
    false
}

/// Shoots `duck` and books the hit.  A duck that is already down scores
/// nothing and changes nothing.
pub fn kill_duck(duck: &mut Duck, stats: &mut PlayerStats) -> Option<u32> {
    let points = duck.kill()?;
    stats.score += points;
    stats.ducks_current.retain(|&i| i != duck.index);
    if let Some(slot) = stats.ducks_hit.get_mut(duck.index) {
        *slot = true;
    }
    Some(points)
}

pub fn living_ducks(ducks: &[Duck]) -> usize {
    ducks.iter().filter(|d| d.alive).count()
}

pub fn ducks_hit_count(stats: &PlayerStats) -> usize {
    stats.ducks_hit.iter().filter(|&&hit| hit).count()
}

// ── Round transitions ────────────────────────────────────────────────────────

/// Judges the round once every duck has been sent and none is left on
/// screen; `None` while the round is still running.
pub fn round_outcome(stats: &PlayerStats, ducks_empty: bool) -> Option<RoundOutcome> {
    if !ducks_empty || stats.duck_next < DUCKS_PER_ROUND {
        return None;
    }
    if ducks_hit_count(stats) >= stats.ducks_needed {
        Some(RoundOutcome::Advance)
    } else {
        Some(RoundOutcome::GameOver)
    }
}

pub fn start_new_round(stats: &mut PlayerStats) {
    stats.round += 1;
    stats.duck_next = 0;
    stats.ducks_needed = ducks_needed_for_round(stats.round);
    stats.ducks_hit = [false; DUCKS_PER_ROUND];
    info!(round = stats.round, needed = stats.ducks_needed, "starting round");
}

/// One pass of the end-of-round hit panel animation: every hit marker with
/// a gap to its left moves one slot left.  Returns whether anything moved.
pub fn coalesce_hits_step(ducks_hit: &mut [bool; DUCKS_PER_ROUND]) -> bool {
    let mut moved = false;
    for i in 1..DUCKS_PER_ROUND {
        if !ducks_hit[i - 1] && ducks_hit[i] {
            ducks_hit[i] = false;
            ducks_hit[i - 1] = true;
            moved = true;
        }
    }
    if moved {
        debug!(?ducks_hit, "coalescing hit markers");
    }
    moved
}
