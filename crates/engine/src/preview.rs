use colorbleed_core::bleed::{bleed_region, BleedRegion};
use colorbleed_core::completion::is_complete;
use colorbleed_core::GameSession;
use colorbleed_types::BLEED_DISTANCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewError {
    NotActive,
    OutOfBounds,
    AlreadyColored,
}

impl PreviewError {
    pub fn code(self) -> &'static str {
        match self {
            PreviewError::NotActive => "not_active",
            PreviewError::OutOfBounds => "out_of_bounds",
            PreviewError::AlreadyColored => "already_colored",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PreviewError::NotActive => "session has ended",
            PreviewError::OutOfBounds => "cell is outside the grid",
            PreviewError::AlreadyColored => "cell is already colored",
        }
    }
}

/// What a tap at some cell would do, without doing it.
#[derive(Debug, Clone, PartialEq)]
pub struct TapPreview {
    /// Cells the bleed would paint, in visit order (origin first).
    pub cells: BleedRegion,
    /// How many of those are currently uncolored.
    pub newly_colored: usize,
    /// Coverage percent after the tap.
    pub completion_after: f64,
    /// Whether the tap would end the session (clear or last tap).
    pub would_finish: bool,
}

/// Simulate a tap on `(row, col)` against the live session state.
///
/// Unlike the grid accessors, probing outside the grid is an expected input
/// here (the UI converts raw touch points), so it reports an error instead
/// of failing fast.
pub fn preview_tap(
    session: &GameSession,
    row: usize,
    col: usize,
) -> Result<TapPreview, PreviewError> {
    if !session.is_active() {
        return Err(PreviewError::NotActive);
    }
    let grid = session.grid();
    if row >= grid.size() || col >= grid.size() {
        return Err(PreviewError::OutOfBounds);
    }
    if grid.get(row, col).is_some() {
        return Err(PreviewError::AlreadyColored);
    }

    let cells = bleed_region(grid, row, col, BLEED_DISTANCE);
    let newly_colored = cells
        .iter()
        .filter(|&&(r, c)| grid.get(r, c).is_none())
        .count();

    let colored_after = grid.colored_count() + newly_colored;
    let completion_after = 100.0 * colored_after as f64 / grid.cell_count() as f64;
    let would_finish =
        is_complete(completion_after) || session.taps_used() + 1 >= session.level().max_taps;

    Ok(TapPreview {
        cells,
        newly_colored,
        completion_after,
        would_finish,
    })
}
