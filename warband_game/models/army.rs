use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use warband_types::{
    army::UnitName,
    battle::{BattleRecord, BattleResult},
    civilization::Civilization,
    errors::GameError,
};

use crate::config::Config;

use super::unit_group::UnitGroup;

pub const DEFAULT_ARMY_NAME: &str = "no name army";

/// Units lost by the losing side of a battle.
pub const DEFAULT_CASUALTIES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Army {
    pub id: Uuid,
    pub name: String,
    pub civilization: Civilization,
    gold: i64,
    // Sparse: only groups with at least one unit are stored.
    units: BTreeMap<UnitName, UnitGroup>,
    battle_history: Vec<BattleRecord>,
}

impl Army {
    /// Creates a new army for a civilization given by name (case-insensitive),
    /// with the default starting gold.
    pub fn new(civilization: &str, name: Option<&str>) -> Result<Self, GameError> {
        let civilization: Civilization = civilization.parse()?;
        Ok(Self::from_config(&Config::default(), civilization, name))
    }

    /// Creates a new army with the starting roster of the given civilization.
    pub fn from_config(config: &Config, civilization: Civilization, name: Option<&str>) -> Self {
        let mut army = Army {
            id: Uuid::new_v4(),
            name: name.unwrap_or(DEFAULT_ARMY_NAME).to_string(),
            civilization,
            gold: config.initial_gold,
            units: BTreeMap::new(),
            battle_history: vec![],
        };

        for unit in UnitName::ALL {
            army.add_units(unit, civilization.starting_amount(unit));
        }

        army
    }

    pub fn gold(&self) -> i64 {
        self.gold
    }

    /// Iterates over the groups held by the army, in unit declaration order.
    pub fn units(&self) -> impl Iterator<Item = (UnitName, &UnitGroup)> {
        self.units.iter().map(|(name, group)| (*name, group))
    }

    pub fn unit_group(&self, name: UnitName) -> Option<&UnitGroup> {
        self.units.get(&name)
    }

    /// Returns the amount of a given unit.
    pub fn unit_count(&self, name: UnitName) -> u32 {
        self.units.get(&name).map(|g| g.count).unwrap_or(0)
    }

    /// Returns the total raw number of troops in the army.
    pub fn immensity(&self) -> u32 {
        self.units
            .values()
            .fold(0, |total: u32, g| total.saturating_add(g.count))
    }

    pub fn battle_history(&self) -> &[BattleRecord] {
        &self.battle_history
    }

    /// Returns the sum of every group's count times its per-unit strength.
    pub fn total_strength(&self) -> u64 {
        self.units.values().map(UnitGroup::total_strength).sum()
    }

    /// Trains all the units of a kind, making each of them stronger.
    pub fn train_unit_type(&mut self, name: UnitName) -> Result<(), GameError> {
        let unit = name.unit();
        let Some(group) = self.units.get_mut(&name) else {
            return Err(GameError::NoUnitsOfKind(name));
        };
        ensure_gold(self.gold, unit.train_cost)?;

        group.strength_per_unit = group
            .strength_per_unit
            .saturating_add(unit.train_strength_gain);
        let strength_per_unit = group.strength_per_unit;
        self.gold -= i64::from(unit.train_cost);

        debug!(army = %self.name, unit = %name, strength_per_unit, "Trained units");
        Ok(())
    }

    /// Upgrades a single unit into the next kind of its chain.
    /// The upgraded unit joins the target group at base strength: training
    /// bonuses are not carried over.
    pub fn transform_unit_type(&mut self, name: UnitName) -> Result<(), GameError> {
        if !self.units.contains_key(&name) {
            return Err(GameError::NoUnitsOfKind(name));
        }
        let Some(transform) = &name.unit().transform else {
            return Err(GameError::NotTransformable(name));
        };
        ensure_gold(self.gold, transform.cost)?;

        self.remove_units(name, 1);
        self.add_units(transform.to, 1);
        self.gold -= i64::from(transform.cost);

        debug!(army = %self.name, from = %name, to = %transform.to, "Transformed unit");
        Ok(())
    }

    /// Removes one unit from each of the `count` strongest groups and
    /// returns the kinds that lost a unit, strongest first.
    ///
    /// Groups are ranked by total strength; ties go to the kind declared
    /// first in [`UnitName`].
    pub fn lose_strongest_units(&mut self, count: usize) -> Vec<UnitName> {
        // BTreeMap yields kinds in declaration order and the sort is stable.
        let mut ranking: Vec<(UnitName, u64)> = self
            .units
            .iter()
            .map(|(name, group)| (*name, group.total_strength()))
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1));

        let lost: Vec<UnitName> = ranking
            .into_iter()
            .take(count)
            .map(|(name, _)| name)
            .collect();

        for name in &lost {
            self.remove_units(*name, 1);
        }

        if !lost.is_empty() {
            debug!(army = %self.name, ?lost, "Lost units");
        }
        lost
    }

    /// Adds gold to the treasury, clamping at the bounds of `i64`.
    pub fn add_gold(&mut self, amount: i64) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Appends a battle to the army's history.
    pub fn log_battle(
        &mut self,
        opponent_id: Uuid,
        opponent_name: &str,
        opponent_civilization: Civilization,
        result: BattleResult,
    ) {
        self.battle_history.push(BattleRecord {
            opponent_id,
            opponent_name: opponent_name.to_string(),
            opponent_civilization,
            result,
        });
    }

    /// Replaces the whole roster. Groups with zero units are skipped.
    #[cfg(any(test, feature = "test-utils"))]
    pub(crate) fn replace_units(&mut self, roster: &[(UnitName, u32)]) {
        self.units.clear();
        for (name, amount) in roster {
            self.add_units(*name, *amount);
        }
    }

    // Adds units to a group, recruiting the group at base strength if missing.
    fn add_units(&mut self, name: UnitName, amount: u32) {
        if amount == 0 {
            return;
        }
        self.units
            .entry(name)
            .and_modify(|group| group.count = group.count.saturating_add(amount))
            .or_insert_with(|| UnitGroup::recruit(name, amount));
    }

    // Removes units from a group, dropping the group once it is empty.
    fn remove_units(&mut self, name: UnitName, amount: u32) {
        if let Some(group) = self.units.get_mut(&name) {
            group.count = group.count.saturating_sub(amount);
            if group.count == 0 {
                self.units.remove(&name);
            }
        }
    }
}

fn ensure_gold(available: i64, required: u32) -> Result<(), GameError> {
    if available < i64::from(required) {
        return Err(GameError::InsufficientGold {
            required,
            available,
        });
    }
    Ok(())
}
