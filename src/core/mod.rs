//! Core traits, common domain types, and library-wide result/error structures.

pub mod engine;
pub mod serialization;
pub mod types;

pub use engine::*;
pub use serialization::*;
pub use types::*;
