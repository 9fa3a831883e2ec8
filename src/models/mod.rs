//! Core data models for basket analytics.

mod field;
mod player;
mod table;

pub use field::*;
pub use player::*;
pub use table::*;
