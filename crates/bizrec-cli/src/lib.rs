//! CLI library components for the listing reconciler.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod profile;
pub mod types;
