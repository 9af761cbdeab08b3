use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{army::UnitName, errors::GameError};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize)]
pub enum Civilization {
    Chinese,
    English,
    Byzantine,
}

/// Starting roster of a civilization. Kinds not listed start with zero units.
pub type StartingUnits = [(UnitName, u32)];

impl Civilization {
    pub const ALL: [Civilization; 3] = [
        Civilization::Chinese,
        Civilization::English,
        Civilization::Byzantine,
    ];

    pub fn starting_units(&self) -> &'static StartingUnits {
        match self {
            Civilization::Chinese => &CHINESE_UNITS,
            Civilization::English => &ENGLISH_UNITS,
            Civilization::Byzantine => &BYZANTINE_UNITS,
        }
    }

    /// Returns the starting amount of a given unit kind.
    pub fn starting_amount(&self, unit: UnitName) -> u32 {
        self.starting_units()
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, amount)| *amount)
            .unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Civilization::Chinese => "Chinese",
            Civilization::English => "English",
            Civilization::Byzantine => "Byzantine",
        }
    }
}

impl fmt::Display for Civilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Civilization {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Civilization::ALL
            .into_iter()
            .find(|civ| civ.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GameError::UnknownCivilization(s.to_string()))
    }
}

static CHINESE_UNITS: [(UnitName, u32); 3] = [
    (UnitName::Pikemen, 2),
    (UnitName::Archers, 25),
    (UnitName::Knights, 2),
];

static ENGLISH_UNITS: [(UnitName, u32); 3] = [
    (UnitName::Pikemen, 10),
    (UnitName::Archers, 10),
    (UnitName::Knights, 10),
];

static BYZANTINE_UNITS: [(UnitName, u32); 3] = [
    (UnitName::Pikemen, 5),
    (UnitName::Archers, 8),
    (UnitName::Knights, 15),
];
