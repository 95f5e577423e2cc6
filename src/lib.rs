//! TUI Cubic (workspace facade crate).
//!
//! This package keeps a single `tui_cubic::{core,engine,adapter,term,input,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_cubic_adapter as adapter;
pub use tui_cubic_core as core;
pub use tui_cubic_engine as engine;
pub use tui_cubic_input as input;
pub use tui_cubic_term as term;
pub use tui_cubic_types as types;
