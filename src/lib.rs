//! optstrat prices European vanilla options under Black-Scholes-Merton with a
//! continuous dividend yield and aggregates multi-leg option strategies into a
//! single payoff report.
//!
//! The crate is split into closed-form kernels, a position-aware pricing
//! primitive in market-display units, and a strategy layer that nets prices
//! and Greeks across legs and samples the expiry payoff curve for charting.
//!
//! References used across modules include:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13, 15, 19.
//! - Abramowitz & Stegun, *Handbook of Mathematical Functions*, eq. 7.1.26.
//! - Haug, *Option Pricing Formulas* (1998) for reference values.
//!
//! Design notes:
//! - Every exported computation is a pure function over immutable value
//!   objects; there is no shared state and no I/O.
//! - The pricing primitive and the strategy evaluator never fail: out-of-domain
//!   numeric inputs degrade to a documented all-zero sentinel, and absent
//!   extrema are `Option`s, never magic numbers.
//! - Validation lives in builders and `validate` methods, which return
//!   [`core::PricingError`] before invalid data reaches the math.
//!
//! # Quick Start
//! Price a single call position:
//! ```rust
//! use optstrat::instruments::VanillaOption;
//! use optstrat::market::Market;
//! use optstrat::pricing::position_value;
//!
//! let market = Market::builder()
//!     .spot(100.0)
//!     .rate(0.05)
//!     .dividend_yield(0.0)
//!     .vol(0.20)
//!     .build()
//!     .unwrap();
//! let option = VanillaOption::long_call(100.0, 1.0);
//! let value = position_value(&option, &market);
//! assert!(value.price > 10.0 && value.price < 11.0);
//! ```
//!
//! Evaluate a strategy:
//! ```rust
//! use optstrat::core::{OptionType, PositionDirection};
//! use optstrat::instruments::StrategyLeg;
//! use optstrat::strategy::{Strategy, evaluate};
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
//! let report = evaluate(&strategy);
//! assert_eq!(report.payoff.len(), 50);
//! assert_eq!(report.break_evens.len(), 1);
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod market;
pub mod math;
pub mod pricing;
pub mod strategy;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::*;
    pub use crate::instruments::*;
    pub use crate::market::*;
    pub use crate::pricing::position_value;
    pub use crate::strategy::*;
}
