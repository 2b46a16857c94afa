//! Integer parsing and puzzle loading shared by the per-day crates.
mod error;
pub mod input;
pub mod scalar;

pub use error::{InputError, ParseError};
