use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::civilization::Civilization;

/// Outcome of a battle, shared by both participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    Victory { winner: String },
    Draw,
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleResult::Victory { winner } => write!(f, "{winner} wins"),
            BattleResult::Draw => f.write_str("Draw"),
        }
    }
}

/// One entry of an army's battle history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub opponent_id: Uuid,
    pub opponent_name: String,
    pub opponent_civilization: Civilization,
    pub result: BattleResult,
}
