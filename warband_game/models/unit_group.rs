use serde::{Deserialize, Serialize};

use warband_types::army::UnitName;

/// All the units of one kind held by an army.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitGroup {
    pub count: u32,
    pub strength_per_unit: u32,
}

impl UnitGroup {
    /// Returns a new group of freshly recruited units, at base strength.
    pub fn recruit(name: UnitName, count: u32) -> Self {
        Self {
            count,
            strength_per_unit: name.unit().base_strength,
        }
    }

    /// Returns the combined strength of the whole group.
    pub fn total_strength(&self) -> u64 {
        u64::from(self.count) * u64::from(self.strength_per_unit)
    }
}
