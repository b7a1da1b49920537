//! Render snapshots of a running session.
//!
//! The presentation layer polls these instead of reaching into live state.
//! `snapshot_into` reuses the caller's buffers so a per-frame poll stays
//! allocation-free after the first fill.

use colorbleed_types::SessionStatus;

/// Point-in-time view of a session for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Row-major encoded cells (0 = uncolored, k = palette slot k-1).
    pub cells: Vec<u8>,
    pub grid_size: usize,
    pub selected_color: u8,
    pub taps_used: u32,
    pub taps_remaining: u32,
    pub elapsed_secs: u32,
    pub completion: f64,
    pub status: SessionStatus,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.cells.clear();
        self.grid_size = 0;
        self.selected_color = 0;
        self.taps_used = 0;
        self.taps_remaining = 0;
        self.elapsed_secs = 0;
        self.completion = 0.0;
        self.status = SessionStatus::Active;
    }

    pub fn playable(&self) -> bool {
        self.status == SessionStatus::Active
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            grid_size: 0,
            selected_color: 0,
            taps_used: 0,
            taps_remaining: 0,
            elapsed_secs: 0,
            completion: 0.0,
            status: SessionStatus::Active,
        }
    }
}
