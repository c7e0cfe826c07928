//! Configuration management for the kissing number terminal.
//!
//! Values resolve from built-in defaults, then the TOML config file, then the
//! command line, and are read from a process wide store.

mod config;

pub use config::*;
