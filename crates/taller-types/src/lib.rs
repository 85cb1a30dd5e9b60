//! Core types for the taller workshop model

mod error;
mod types;

pub use error::*;
pub use types::*;
