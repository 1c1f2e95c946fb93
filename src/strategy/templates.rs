//! Named strategy templates as plain data.
//!
//! A template is a list of leg blueprints with strikes expressed as
//! moneyness ratios; [`StrategyTemplate::instantiate`] turns them into
//! concrete legs around a spot price. Display strings are caller-supplied
//! constructor parameters so the catalog carries no locale or registry
//! coupling; presentation layers pass their own localized labels in.

use crate::core::{OptionType, PositionDirection};
use crate::instruments::StrategyLeg;

/// The standard strategy shapes the catalog knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    LongCall,
    LongPut,
    BullCallSpread,
    BearPutSpread,
    LongStraddle,
    LongStrangle,
    IronCondor,
    ButterflySpread,
}

impl TemplateKind {
    /// Every kind, in catalog order.
    pub const ALL: [TemplateKind; 8] = [
        TemplateKind::LongCall,
        TemplateKind::LongPut,
        TemplateKind::BullCallSpread,
        TemplateKind::BearPutSpread,
        TemplateKind::LongStraddle,
        TemplateKind::LongStrangle,
        TemplateKind::IronCondor,
        TemplateKind::ButterflySpread,
    ];
}

/// One leg of a template, with the strike as a multiple of spot.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LegBlueprint {
    /// Call or put.
    pub option_type: OptionType,
    /// Long or short.
    pub position: PositionDirection,
    /// Strike as a moneyness multiple of spot (1.0 = at the money).
    pub strike_ratio: f64,
    /// Position size multiplier.
    pub quantity: f64,
}

impl LegBlueprint {
    const fn new(
        option_type: OptionType,
        position: PositionDirection,
        strike_ratio: f64,
        quantity: f64,
    ) -> Self {
        Self {
            option_type,
            position,
            strike_ratio,
            quantity,
        }
    }
}

/// An immutable named strategy shape.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyTemplate {
    /// Which standard shape this is.
    pub kind: TemplateKind,
    /// Display name, supplied by the caller.
    pub name: String,
    /// Display description, supplied by the caller.
    pub description: String,
    /// Leg blueprints in execution order.
    pub legs: Vec<LegBlueprint>,
}

impl StrategyTemplate {
    /// Builds the template for `kind` with caller-supplied display strings.
    pub fn new(
        kind: TemplateKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            legs: blueprints(kind),
        }
    }

    /// Maps the blueprints to concrete legs around `spot`.
    pub fn instantiate(&self, spot: f64) -> Vec<StrategyLeg> {
        self.legs
            .iter()
            .map(|blueprint| {
                StrategyLeg::new(
                    blueprint.option_type,
                    blueprint.position,
                    blueprint.strike_ratio * spot,
                    blueprint.quantity,
                )
            })
            .collect()
    }
}

/// Builds all eight standard templates, asking `label` for the display
/// strings of each kind.
///
/// # Examples
/// ```
/// use optstrat::strategy::{TemplateKind, standard_catalog};
///
/// let catalog = standard_catalog(|kind| {
///     let name = format!("{kind:?}");
///     (name.clone(), format!("{name} preset"))
/// });
/// assert_eq!(catalog.len(), 8);
/// assert_eq!(catalog[6].kind, TemplateKind::IronCondor);
/// assert_eq!(catalog[6].legs.len(), 4);
/// ```
pub fn standard_catalog<F>(mut label: F) -> Vec<StrategyTemplate>
where
    F: FnMut(TemplateKind) -> (String, String),
{
    TemplateKind::ALL
        .into_iter()
        .map(|kind| {
            let (name, description) = label(kind);
            StrategyTemplate::new(kind, name, description)
        })
        .collect()
}

fn blueprints(kind: TemplateKind) -> Vec<LegBlueprint> {
    use OptionType::{Call, Put};
    use PositionDirection::{Long, Short};

    match kind {
        TemplateKind::LongCall => vec![LegBlueprint::new(Call, Long, 1.0, 1.0)],
        TemplateKind::LongPut => vec![LegBlueprint::new(Put, Long, 1.0, 1.0)],
        TemplateKind::BullCallSpread => vec![
            LegBlueprint::new(Call, Long, 1.0, 1.0),
            LegBlueprint::new(Call, Short, 1.05, 1.0),
        ],
        TemplateKind::BearPutSpread => vec![
            LegBlueprint::new(Put, Long, 1.0, 1.0),
            LegBlueprint::new(Put, Short, 0.95, 1.0),
        ],
        TemplateKind::LongStraddle => vec![
            LegBlueprint::new(Call, Long, 1.0, 1.0),
            LegBlueprint::new(Put, Long, 1.0, 1.0),
        ],
        TemplateKind::LongStrangle => vec![
            LegBlueprint::new(Call, Long, 1.05, 1.0),
            LegBlueprint::new(Put, Long, 0.95, 1.0),
        ],
        TemplateKind::IronCondor => vec![
            LegBlueprint::new(Put, Long, 0.90, 1.0),
            LegBlueprint::new(Put, Short, 0.95, 1.0),
            LegBlueprint::new(Call, Short, 1.05, 1.0),
            LegBlueprint::new(Call, Long, 1.10, 1.0),
        ],
        TemplateKind::ButterflySpread => vec![
            LegBlueprint::new(Call, Long, 0.95, 1.0),
            LegBlueprint::new(Call, Short, 1.0, 2.0),
            LegBlueprint::new(Call, Long, 1.05, 1.0),
        ],
    }
}
