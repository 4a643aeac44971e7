//! Contains the machinery for logging statistics about the solving process.

mod statistic_logging;

pub use statistic_logging::*;
