//! SmileTrack Common Utilities
//!
//! Shared infrastructure for all SmileTrack crates:
//! - Error types and result aliases
//! - Wall clock abstraction for dates and shot timestamps
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
