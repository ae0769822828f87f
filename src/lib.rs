//! userdeck - browse, search, favorite and export a user directory from
//! the terminal.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod source;
pub mod state;
pub mod stats;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
