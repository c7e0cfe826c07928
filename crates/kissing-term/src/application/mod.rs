//! Application layer driving the terminal.
//!
//! Command-line definition and the render/event loop live here; both only
//! talk to the domain through `AppState`.

pub mod cli;
pub mod ui;
