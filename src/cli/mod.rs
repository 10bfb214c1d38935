//! Command-line interface for pomoclock.

pub mod args;
pub mod commands;
