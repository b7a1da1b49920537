//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game core.
//! Everything here is plain data: level configuration, palette colors, cell
//! encoding, session status, tap outcomes, and the terminal score record.
//! The serde derives exist so the external level catalog and score sink can
//! persist these records; no wire protocol is defined here.
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BLEED_DISTANCE` | 2 | Per-axis propagation cap for a tap |
//! | `MAX_BLEED_DISTANCE` | 3 | Upper bound any caller may request |
//! | `COMPLETION_THRESHOLD` | 95.0 | Coverage percent that clears a level |
//! | `PERFECT_THRESHOLD` | 100.0 | Coverage percent that earns the perfect bonus |
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SCORE` | 1000 | Awarded to every finished session |
//! | `TAP_BONUS_PER_TAP` | 50 | Per unused tap |
//! | `COMPLETION_BONUS_FACTOR` | 10.0 | Points per completion percent (floored) |
//! | `TIME_BONUS_CAP_SECS` | 300 | Time bonus is `300 - elapsed`, floored at 0 |
//! | `PERFECT_BONUS` | 500 | For 100% coverage |
//!
//! # Cell Encoding
//!
//! In-memory cells are `Option<u8>` palette slots. Snapshots and level
//! definitions use a one-byte code: `0` is uncolored, `k > 0` is palette slot
//! `k - 1`.
//!
//! # Examples
//!
//! ```
//! use colorbleed_types::{decode_cell, encode_cell, Difficulty, PaletteColor};
//!
//! let parsed = Difficulty::from_str("medium").unwrap();
//! assert_eq!(parsed, Difficulty::Medium);
//! assert_eq!(parsed.as_str(), "medium");
//!
//! let color = PaletteColor::from_str("teal").unwrap();
//! assert_eq!(color, PaletteColor::Teal);
//!
//! // Encoded cells round-trip through the wire code.
//! assert_eq!(encode_cell(None), 0);
//! assert_eq!(decode_cell(encode_cell(Some(3))), Some(3));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-axis bleed propagation cap for a tap (cells).
pub const BLEED_DISTANCE: usize = 2;

/// Largest bleed distance any caller may request.
pub const MAX_BLEED_DISTANCE: usize = 3;

/// Coverage percent at which a level counts as cleared.
pub const COMPLETION_THRESHOLD: f64 = 95.0;

/// Coverage percent at which the perfect bonus applies.
pub const PERFECT_THRESHOLD: f64 = 100.0;

/// Base score awarded to every finished session.
pub const BASE_SCORE: u32 = 1000;

/// Bonus points per unused tap.
pub const TAP_BONUS_PER_TAP: u32 = 50;

/// Points per completion percent (product is floored).
pub const COMPLETION_BONUS_FACTOR: f64 = 10.0;

/// Elapsed-seconds ceiling for the time bonus.
pub const TIME_BONUS_CAP_SECS: u32 = 300;

/// Bonus for coloring the entire grid.
pub const PERFECT_BONUS: u32 = 500;

/// Minimum number of palette colors a level may carry.
pub const MIN_PALETTE_COLORS: usize = 2;

/// Maximum number of palette colors a level may carry.
pub const MAX_PALETTE_COLORS: usize = 6;

/// Level difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Semantic colors levels draw their palettes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Teal,
}

impl PaletteColor {
    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(PaletteColor::Red),
            "orange" => Some(PaletteColor::Orange),
            "yellow" => Some(PaletteColor::Yellow),
            "green" => Some(PaletteColor::Green),
            "blue" => Some(PaletteColor::Blue),
            "purple" => Some(PaletteColor::Purple),
            "pink" => Some(PaletteColor::Pink),
            "teal" => Some(PaletteColor::Teal),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
            PaletteColor::Pink => "pink",
            PaletteColor::Teal => "teal",
        }
    }
}

/// Cell on the grid (None = uncolored, Some = 0-based palette slot)
pub type Cell = Option<u8>;

/// Encode a cell as its one-byte wire code (0 = uncolored, k+1 = slot k).
#[inline]
pub fn encode_cell(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(slot) => slot + 1,
    }
}

/// Decode a one-byte wire code back into a cell.
#[inline]
pub fn decode_cell(code: u8) -> Cell {
    if code == 0 {
        None
    } else {
        Some(code - 1)
    }
}

/// Session lifecycle states. `Ended` is terminal and entered exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Ended,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// Coverage reached the completion threshold.
    Cleared,
    /// The tap budget ran out below the threshold.
    OutOfTaps,
}

impl EndReason {
    pub fn code(self) -> &'static str {
        match self {
            EndReason::Cleared => "cleared",
            EndReason::OutOfTaps => "out_of_taps",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EndReason::Cleared => "level cleared",
            EndReason::OutOfTaps => "no taps left",
        }
    }
}

/// Result of a tap, reported to the presentation layer.
///
/// These are advisory notifications, not errors: tapping a colored cell or
/// tapping after the session ended are ordinary game conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap consumed a tap and painted cells; the session is still active.
    Painted,
    /// The cell was already colored; nothing changed and no tap was consumed.
    AlreadyColored,
    /// This tap ended the session (or arrived with the budget already spent).
    Finished(EndReason),
    /// The session had already ended; the tap was dropped.
    Ignored,
}

impl TapOutcome {
    pub fn code(self) -> &'static str {
        match self {
            TapOutcome::Painted => "painted",
            TapOutcome::AlreadyColored => "already_colored",
            TapOutcome::Finished(reason) => reason.code(),
            TapOutcome::Ignored => "ignored",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            TapOutcome::Painted => "color applied",
            TapOutcome::AlreadyColored => "cell is already colored",
            TapOutcome::Finished(reason) => reason.message(),
            TapOutcome::Ignored => "session has ended",
        }
    }
}

/// Level configuration validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("palette must have 2 to 6 colors, got {0}")]
    PaletteSize(usize),
    #[error("palette color {} appears more than once", .0.as_str())]
    DuplicateColor(PaletteColor),
    #[error("tap budget must be at least 1")]
    NoTapBudget,
    #[error("grid size must be at least 1")]
    ZeroGridSize,
    #[error("initial grid has {rows} rows, expected {expected}")]
    GridRowCount { rows: usize, expected: usize },
    #[error("initial grid row {row} has {len} cells, expected {expected}")]
    GridRowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("initial grid cell ({row}, {col}) has code {code}, palette has {palette_len} colors")]
    CellOutOfRange {
        row: usize,
        col: usize,
        code: u8,
        palette_len: usize,
    },
}

/// Immutable level configuration, supplied by the external level catalog.
///
/// The grid is `grid_size` x `grid_size`; `initial_grid` holds encoded cell
/// codes and is all zeros for a normal level start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub difficulty: Difficulty,
    /// Ordered colors available to the player; grid cells store slots into it.
    pub palette: Vec<PaletteColor>,
    pub max_taps: u32,
    pub grid_size: usize,
    pub initial_grid: Vec<Vec<u8>>,
}

impl Level {
    /// Build a level with an all-uncolored starting grid.
    pub fn with_blank_grid(
        id: u32,
        name: &str,
        difficulty: Difficulty,
        palette: Vec<PaletteColor>,
        grid_size: usize,
        max_taps: u32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            difficulty,
            palette,
            max_taps,
            grid_size,
            initial_grid: vec![vec![0; grid_size]; grid_size],
        }
    }

    /// Check every level invariant; untrusted catalog data goes through here.
    pub fn validate(&self) -> Result<(), LevelError> {
        let colors = self.palette.len();
        if !(MIN_PALETTE_COLORS..=MAX_PALETTE_COLORS).contains(&colors) {
            return Err(LevelError::PaletteSize(colors));
        }
        for (i, color) in self.palette.iter().enumerate() {
            if self.palette[..i].contains(color) {
                return Err(LevelError::DuplicateColor(*color));
            }
        }
        if self.max_taps == 0 {
            return Err(LevelError::NoTapBudget);
        }
        if self.grid_size == 0 {
            return Err(LevelError::ZeroGridSize);
        }
        if self.initial_grid.len() != self.grid_size {
            return Err(LevelError::GridRowCount {
                rows: self.initial_grid.len(),
                expected: self.grid_size,
            });
        }
        for (row, cells) in self.initial_grid.iter().enumerate() {
            if cells.len() != self.grid_size {
                return Err(LevelError::GridRowLength {
                    row,
                    len: cells.len(),
                    expected: self.grid_size,
                });
            }
            for (col, &code) in cells.iter().enumerate() {
                if code as usize > colors {
                    return Err(LevelError::CellOutOfRange {
                        row,
                        col,
                        code,
                        palette_len: colors,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Terminal score record, emitted at most once per finished session.
///
/// The external score sink owns persistence and any aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub level_name: String,
    pub points: u32,
    /// Unix milliseconds captured at the terminal transition.
    pub timestamp_ms: u64,
    pub taps_used: u32,
    pub completion: f64,
    pub difficulty: Difficulty,
}
