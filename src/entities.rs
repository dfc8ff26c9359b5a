//! Game data types: pure data, no logic.

/// Ducks released per round; also the number of slots in the hit panel.
pub const DUCKS_PER_ROUND: usize = 10;

/// Shots granted every time a new group of ducks is released.
pub const SHOTS_PER_SPAWN: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DuckColour {
    Blue,
    Brown,
    Red,
}

/// Chosen on the main menu: one or two ducks in the air at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameType {
    Single,
    Double,
}

impl GameType {
    pub fn ducks_simultaneous(self) -> usize {
        match self {
            GameType::Single => 1,
            GameType::Double => 2,
        }
    }
}

/// How a finished round is judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Advance,
    GameOver,
}

/// Axis-aligned rectangle in texture or world pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

// ── Player state ──────────────────────────────────────────────────────────────

/// The player's progress through a session.  Scenes share one instance by
/// mutable borrow; only the UI transitions work on copies.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStats {
    /// One slot per duck index of the current round.
    pub ducks_hit: [bool; DUCKS_PER_ROUND],
    /// Indices of the ducks on screen, in spawn order.
    pub ducks_current: Vec<usize>,
    /// Hits required this round to advance.
    pub ducks_needed: usize,
    /// Next duck index to release (0..=10).
    pub duck_next: usize,
    pub ducks_simultaneous: usize,
    pub round: u32,
    pub score: u32,
    pub shots_left: u32,
}
