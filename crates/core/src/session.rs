//! Session module - the per-level game state machine
//!
//! A session is created for one play of one level and owns the grid for its
//! lifetime. It accepts tap, color-selection, timer, and reload events,
//! composes the bleed, completion, and scoring modules, and produces the
//! terminal score record exactly once.
//!
//! All operations on one session are serialized by the caller; a once-per-
//! second timer tick is the only background-triggered event and is advisory,
//! so coalescing or skipping ticks under load cannot break invariants.

use std::time::{SystemTime, UNIX_EPOCH};

use colorbleed_types::{
    EndReason, Level, LevelError, Score, SessionStatus, TapOutcome, BLEED_DISTANCE,
};

use crate::bleed::apply_bleed;
use crate::completion::{completion_percent, is_complete};
use crate::grid::Grid;
use crate::scoring::calculate_score;
use crate::snapshot::SessionSnapshot;

/// State machine for one play of one level
#[derive(Debug, Clone)]
pub struct GameSession {
    level: Level,
    grid: Grid,
    selected_color: u8,
    taps_used: u32,
    elapsed_secs: u32,
    completion: f64,
    status: SessionStatus,
    end_reason: Option<EndReason>,
    /// Pending terminal record; consumed at most once via `take_score`.
    final_score: Option<Score>,
}

impl GameSession {
    /// Create a session for a level, validating the configuration first.
    pub fn new(level: Level) -> Result<Self, LevelError> {
        level.validate()?;
        let grid = Grid::from_encoded(&level.initial_grid);
        let completion = completion_percent(&grid);
        Ok(Self {
            level,
            grid,
            selected_color: 0,
            taps_used: 0,
            elapsed_secs: 0,
            completion,
            status: SessionStatus::Active,
            end_reason: None,
            final_score: None,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selected_color(&self) -> u8 {
        self.selected_color
    }

    pub fn taps_used(&self) -> u32 {
        self.taps_used
    }

    pub fn taps_remaining(&self) -> u32 {
        self.level.max_taps - self.taps_used
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn completion_percent(&self) -> f64 {
        self.completion
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Advance the play clock by one second. No-op once the session ended.
    pub fn tick(&mut self) {
        if self.status != SessionStatus::Active {
            return;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
    }

    /// Choose the palette color future taps paint with.
    ///
    /// Only meaningful while active; an out-of-palette index is a caller bug.
    pub fn select_color(&mut self, index: u8) {
        if self.status != SessionStatus::Active {
            return;
        }
        assert!(
            (index as usize) < self.level.palette.len(),
            "color index {index} out of range for palette of {}",
            self.level.palette.len()
        );
        self.selected_color = index;
    }

    /// Handle a tap on `(row, col)` - the central transition.
    ///
    /// An uncolored cell consumes a tap and bleeds the selected color; the
    /// completion check runs before the exhaustion check, so a tap satisfying
    /// both ends the session as cleared. A colored cell is a free no-op.
    pub fn tap_cell(&mut self, row: usize, col: usize) -> TapOutcome {
        if self.status != SessionStatus::Active {
            return TapOutcome::Ignored;
        }

        // Budget already spent: end now without consuming the tap.
        if self.taps_used >= self.level.max_taps {
            self.finish(EndReason::OutOfTaps);
            return TapOutcome::Finished(EndReason::OutOfTaps);
        }

        if self.grid.get(row, col).is_some() {
            return TapOutcome::AlreadyColored;
        }

        apply_bleed(&mut self.grid, row, col, self.selected_color, BLEED_DISTANCE);
        self.taps_used += 1;
        self.completion = completion_percent(&self.grid);

        if is_complete(self.completion) {
            self.finish(EndReason::Cleared);
            TapOutcome::Finished(EndReason::Cleared)
        } else if self.taps_used >= self.level.max_taps {
            self.finish(EndReason::OutOfTaps);
            TapOutcome::Finished(EndReason::OutOfTaps)
        } else {
            TapOutcome::Painted
        }
    }

    /// Restore the fresh-session state for the same level.
    ///
    /// Valid in any state; equivalent to constructing a new session.
    pub fn reload(&mut self) {
        self.grid.reset_from_encoded(&self.level.initial_grid);
        self.selected_color = 0;
        self.taps_used = 0;
        self.elapsed_secs = 0;
        self.completion = completion_percent(&self.grid);
        self.status = SessionStatus::Active;
        self.end_reason = None;
        self.final_score = None;
    }

    /// Abandon the session. No score is emitted for an abandoned play.
    pub fn exit(self) {}

    /// Consume the terminal score record, if one is pending.
    ///
    /// Returns `Some` exactly once per ended session.
    pub fn take_score(&mut self) -> Option<Score> {
        self.final_score.take()
    }

    /// Write the current state into a reusable snapshot.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.grid.write_codes(&mut out.cells);
        out.grid_size = self.grid.size();
        out.selected_color = self.selected_color;
        out.taps_used = self.taps_used;
        out.taps_remaining = self.taps_remaining();
        out.elapsed_secs = self.elapsed_secs;
        out.completion = self.completion;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Terminal transition: enter `Ended` and stage the score record once.
    fn finish(&mut self, reason: EndReason) {
        self.status = SessionStatus::Ended;
        if self.final_score.is_some() {
            return;
        }
        self.end_reason = Some(reason);
        let breakdown = calculate_score(
            self.level.max_taps,
            self.taps_used,
            self.completion,
            self.elapsed_secs,
        );
        self.final_score = Some(Score {
            level_name: self.level.name.clone(),
            points: breakdown.total,
            timestamp_ms: unix_time_ms(),
            taps_used: self.taps_used,
            completion: self.completion,
            difficulty: self.level.difficulty,
        });
    }
}

fn unix_time_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
