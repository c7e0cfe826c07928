//! Terminal interface for looking up kissing numbers.
//!
//! This crate holds the reference table of known kissing numbers, the
//! Kabatiansky–Levenshtein asymptotic estimate, the query engine combining
//! both, and the session state machine that turns raw terminal input into the
//! report shown on screen. The ratatui renderer and crossterm event plumbing
//! sit on top of that core.

pub mod application;
pub mod configuration;
pub mod domain;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    DisplayMode, Event, KissingData, KnownResult, PowerOfTwo, QueryError, Report,
};
pub use domain::services::{
    AppState, AppStateProps, BoundEstimator, KnowledgeTable, QueryEngine, SessionController,
};
