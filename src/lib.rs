//! # fenboard
//!
//! Parses Forsyth–Edwards Notation records into positions and renders them for inspection.
pub mod core;
pub mod position;

pub use crate::core::*;
pub use position::{FenParseError, Position, SAMPLE_FENS, START_FEN};
