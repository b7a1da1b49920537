//! Built-in level catalog.
//!
//! The shipped game selects from this fixed list; an external catalog can
//! supply its own `Level` values instead, as long as they validate. Grid
//! sizes and tap budgets are tuned so every level is clearable under the
//! bleed geometry (a tap covers at most a 5x5 window).

use colorbleed_types::PaletteColor::{Blue, Green, Orange, Pink, Purple, Red, Teal, Yellow};
use colorbleed_types::{Difficulty, Level};

/// The levels shipped with the game, ordered by id.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        Level::with_blank_grid(1, "First Splash", Difficulty::Easy, vec![Red, Blue], 6, 6),
        Level::with_blank_grid(
            2,
            "Double Dip",
            Difficulty::Easy,
            vec![Red, Yellow, Blue],
            7,
            7,
        ),
        Level::with_blank_grid(
            3,
            "Spread Thin",
            Difficulty::Medium,
            vec![Red, Orange, Green, Blue],
            8,
            6,
        ),
        Level::with_blank_grid(
            4,
            "Checker Run",
            Difficulty::Medium,
            vec![Yellow, Green, Purple, Pink],
            9,
            6,
        ),
        Level::with_blank_grid(
            5,
            "Full Bleed",
            Difficulty::Hard,
            vec![Red, Orange, Yellow, Green, Blue],
            10,
            5,
        ),
        Level::with_blank_grid(
            6,
            "Last Drop",
            Difficulty::Hard,
            vec![Red, Orange, Yellow, Green, Blue, Teal],
            12,
            8,
        ),
    ]
}

/// Look up a built-in level by id.
pub fn level_by_id(id: u32) -> Option<Level> {
    builtin_levels().into_iter().find(|level| level.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_levels_validate() {
        let levels = builtin_levels();
        assert!(!levels.is_empty());
        for level in &levels {
            assert!(
                level.validate().is_ok(),
                "level {} failed validation",
                level.id
            );
        }
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let levels = builtin_levels();
        for pair in levels.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_every_difficulty_is_represented() {
        let levels = builtin_levels();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(levels.iter().any(|l| l.difficulty == difficulty));
        }
    }

    #[test]
    fn test_level_by_id() {
        let level = level_by_id(3).expect("level 3 exists");
        assert_eq!(level.name, "Spread Thin");
        assert_eq!(level.difficulty, Difficulty::Medium);
        assert_eq!(level_by_id(999), None);
    }

    #[test]
    fn test_every_builtin_level_is_clearable() {
        use crate::session::GameSession;
        use colorbleed_types::EndReason;

        // Tap a lattice of bleed centers; each window covers 5 rows/cols, so
        // centers every 5 cells plus a trailing center reach the whole grid.
        fn tap_centers(size: usize) -> Vec<usize> {
            let mut centers: Vec<usize> =
                (0..).map(|i| 2 + 5 * i).take_while(|&c| c < size).collect();
            if let Some(&last) = centers.last() {
                if last + 2 < size - 1 {
                    centers.push(size - 1);
                }
            }
            centers
        }

        for level in builtin_levels() {
            let id = level.id;
            let centers = tap_centers(level.grid_size);
            let mut session = GameSession::new(level).expect("builtin level validates");
            for &row in &centers {
                for &col in &centers {
                    session.tap_cell(row, col);
                }
            }
            assert!(!session.is_active(), "level {id} not finished");
            assert_eq!(
                session.end_reason(),
                Some(EndReason::Cleared),
                "level {id} ran out of taps"
            );
        }
    }
}
