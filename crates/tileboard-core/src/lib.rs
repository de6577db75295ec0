#![forbid(unsafe_code)]

//! Core: geometry, canonical input events, and logging for the song tile board.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
