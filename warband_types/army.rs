use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Static stats of a unit kind.
#[derive(Debug, Clone)]
pub struct Unit {
    pub name: UnitName,
    /// Strength of a freshly recruited unit.
    pub base_strength: u32,
    /// Strength added to every unit of the group by one training session.
    pub train_strength_gain: u32,
    pub train_cost: u32,
    pub transform: Option<UnitTransform>,
}

/// Upgrade path from one unit kind to the next one in the chain.
#[derive(Debug, Clone)]
pub struct UnitTransform {
    pub to: UnitName,
    pub cost: u32,
}

/// Unit kinds, in declaration order. The order is used to break ties
/// whenever groups are ranked by strength.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum UnitName {
    Pikemen,
    Archers,
    Knights,
}

impl UnitName {
    pub const ALL: [UnitName; 3] = [UnitName::Pikemen, UnitName::Archers, UnitName::Knights];

    /// Returns the static stats for this unit kind.
    pub fn unit(&self) -> &'static Unit {
        match self {
            UnitName::Pikemen => &UNITS[0],
            UnitName::Archers => &UNITS[1],
            UnitName::Knights => &UNITS[2],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitName::Pikemen => "pikemen",
            UnitName::Archers => "archers",
            UnitName::Knights => "knights",
        }
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitName {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownUnit(s.to_string()))
    }
}

static UNITS: [Unit; 3] = [
    Unit {
        name: UnitName::Pikemen,
        base_strength: 5,
        train_strength_gain: 3,
        train_cost: 10,
        transform: Some(UnitTransform {
            to: UnitName::Archers,
            cost: 30,
        }),
    },
    Unit {
        name: UnitName::Archers,
        base_strength: 10,
        train_strength_gain: 7,
        train_cost: 20,
        transform: Some(UnitTransform {
            to: UnitName::Knights,
            cost: 40,
        }),
    },
    Unit {
        name: UnitName::Knights,
        base_strength: 20,
        train_strength_gain: 10,
        train_cost: 30,
        transform: None,
    },
];
