//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the color-bleed rules, state management, and scoring
//! logic. It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: the same taps on the same level produce the same grid
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run under any front-end (mobile, terminal, headless)
//! - **Fast**: tap handling and snapshots are allocation-free after warm-up
//!
//! # Module Structure
//!
//! - [`grid`]: the N x N cell-color matrix with flat storage
//! - [`bleed`]: bounded breadth-first color propagation from a tapped cell
//! - [`completion`]: coverage percentage and the 95% win bar
//! - [`scoring`]: final score computation from taps, coverage, and time
//! - [`session`]: the per-level state machine composing the above
//! - [`snapshot`]: reusable point-in-time views for rendering
//! - [`levels`]: the built-in level catalog
//!
//! # Game Rules
//!
//! - A tap on an uncolored cell bleeds the selected palette color into a
//!   bounded window (2 cells per axis) via 4-directional propagation,
//!   overwriting any colors already inside the window.
//! - A tap on a colored cell is free: nothing changes, no tap is consumed.
//! - The session ends when coverage reaches 95% or the tap budget is spent;
//!   reaching both on the same tap counts as a clear.
//! - The final score rewards unused taps, coverage, speed, and a perfect
//!   100% board; it is emitted exactly once per finished session.
//!
//! # Example
//!
//! ```
//! use colorbleed_core::{levels, GameSession};
//!
//! let level = levels::level_by_id(1).unwrap();
//! let mut session = GameSession::new(level).unwrap();
//!
//! session.select_color(1);
//! session.tap_cell(2, 2);
//!
//! assert!(session.taps_used() > 0);
//! assert!(session.completion_percent() > 0.0);
//! ```

pub mod bleed;
pub mod completion;
pub mod grid;
pub mod levels;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use colorbleed_types as types;

// Re-export commonly used items for convenience
pub use bleed::{apply_bleed, bleed_region, BleedRegion, BLEED_REGION_CAP};
pub use completion::{completion_percent, is_complete, is_perfect};
pub use grid::Grid;
pub use scoring::{calculate_score, ScoreBreakdown};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
