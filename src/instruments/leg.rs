//! One option position within a multi-leg strategy.

use crate::core::{BarrierSpec, OptionType, PositionDirection, PricingError};

/// One component of a strategy: side, direction, strike, and a quantity
/// multiplier. Quantities can be fractional to represent partial contracts.
///
/// A leg may carry a [`BarrierSpec`] descriptor. The closed-form engine does
/// not model barriers; such legs are valued as vanilla and the strategy
/// report flags them (see
/// [`crate::strategy::EvaluationWarning::BarrierNotModeled`]).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyLeg {
    /// Call or put.
    pub option_type: OptionType,
    /// Long or short.
    pub position: PositionDirection,
    /// Strike level.
    pub strike: f64,
    /// Position size multiplier, > 0.
    pub quantity: f64,
    /// Optional barrier descriptor, declared but not priced.
    pub barrier: Option<BarrierSpec>,
}

impl StrategyLeg {
    /// Builds a vanilla leg.
    pub fn new(
        option_type: OptionType,
        position: PositionDirection,
        strike: f64,
        quantity: f64,
    ) -> Self {
        Self {
            option_type,
            position,
            strike,
            quantity,
            barrier: None,
        }
    }

    /// Attaches a barrier descriptor to the leg.
    pub fn with_barrier(mut self, barrier: BarrierSpec) -> Self {
        self.barrier = Some(barrier);
        self
    }

    /// Validates leg fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when strike or quantity is
    /// non-positive or non-finite, or when a barrier level is.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "leg strike must be finite and > 0".to_string(),
            ));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(PricingError::InvalidInput(
                "leg quantity must be finite and > 0".to_string(),
            ));
        }
        if let Some(barrier) = &self.barrier {
            if !barrier.level.is_finite() || barrier.level <= 0.0 {
                return Err(PricingError::InvalidInput(
                    "leg barrier level must be finite and > 0".to_string(),
                ));
            }
        }
        Ok(())
    }
}
