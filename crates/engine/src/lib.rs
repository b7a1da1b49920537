//! Planning helpers layered on top of the core session.
//!
//! Nothing here mutates game state; the preview simulates a tap so the
//! presentation layer can highlight its effect before committing it.

pub mod preview;

pub use preview::{preview_tap, PreviewError, TapPreview};
