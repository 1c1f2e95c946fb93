//! Canonical strategy and report serialization.
//!
//! Every public value type in the crate derives serde, so strategies,
//! templates, and evaluation reports can be persisted or shipped to a
//! presentation layer as JSON or MessagePack through these helpers.
//!
//! # Examples
//! ```rust
//! use optstrat::core::{OptionType, PositionDirection, from_json, to_json_pretty};
//! use optstrat::instruments::StrategyLeg;
//! use optstrat::strategy::Strategy;
//!
//! let strategy = Strategy::builder()
//!     .spot(100.0)
//!     .rate(0.05)
//!     .dividend_yield(0.0)
//!     .vol(0.20)
//!     .expiry(1.0)
//!     .leg(StrategyLeg::new(
//!         OptionType::Call,
//!         PositionDirection::Long,
//!         100.0,
//!         1.0,
//!     ))
//!     .build()
//!     .unwrap();
//!
//! let json = to_json_pretty(&strategy).expect("json serialization");
//! let decoded: Strategy = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, strategy);
//! ```

use serde::de::DeserializeOwned;

/// Serialize a value to pretty JSON.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserialize a value from JSON.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Serialize a value to MessagePack bytes.
pub fn to_msgpack<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, rmp_serde::encode::Error> {
    rmp_serde::to_vec_named(value)
}

/// Deserialize a value from MessagePack bytes.
pub fn from_msgpack<T: DeserializeOwned>(payload: &[u8]) -> Result<T, rmp_serde::decode::Error> {
    rmp_serde::from_slice(payload)
}
