use thiserror::Error;

use crate::army::UnitName;

/// Errors for domain logic (game rules).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Unknown civilization: {0}")]
    UnknownCivilization(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("No units of type {0} available")]
    NoUnitsOfKind(UnitName),

    #[error("Units of type {0} cannot be transformed")]
    NotTransformable(UnitName),

    #[error("Not enough gold: requires {required}, have {available}")]
    InsufficientGold { required: u32, available: i64 },
}
