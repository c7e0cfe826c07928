//! Core domain logic for the kissing number terminal.
//!
//! The models and services here are independent of the terminal backend, so
//! every state transition can be exercised without a live screen.

pub mod models;
pub mod services;
