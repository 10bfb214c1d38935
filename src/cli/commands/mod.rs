//! Command implementations for pomoclock.

mod completions;
mod config;

pub use completions::completions;
pub use config::config;
