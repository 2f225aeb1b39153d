//! QuickPlay (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the terminal
//! [`app::App`] shell used by the `quickplay` binary.

pub mod app;

pub use quickplay_core as core;
pub use quickplay_input as input;
pub use quickplay_term as term;
pub use quickplay_types as types;

pub use app::{App, Screen};
