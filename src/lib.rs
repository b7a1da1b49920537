//! Colorbleed (workspace facade crate).
//!
//! This package keeps the `colorbleed::{core,engine,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use colorbleed_core as core;
pub use colorbleed_engine as engine;
pub use colorbleed_types as types;
