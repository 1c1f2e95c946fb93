//! Position-level pricing in market-display units.

pub mod position;

pub use position::{leg_value, position_value};
