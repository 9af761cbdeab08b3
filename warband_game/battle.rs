use tracing::info;

use warband_types::battle::BattleResult;

use crate::{
    config::Config,
    models::army::{Army, DEFAULT_CASUALTIES},
};

/// Units lost by each side when a battle ends in a draw.
pub const DRAW_CASUALTIES: usize = 1;

/// Fights a battle between two armies using the default rules.
pub fn battle(army: &mut Army, opponent: &mut Army) -> BattleResult {
    battle_with_config(&Config::default(), army, opponent)
}

/// Fights a battle between two armies by comparing their total strength.
///
/// The stronger army earns the battle reward and the weaker one loses a unit
/// from each of its two strongest groups. On equal strength both armies lose
/// a unit from their strongest group. Both armies log the same result.
pub fn battle_with_config(config: &Config, army: &mut Army, opponent: &mut Army) -> BattleResult {
    let army_strength = army.total_strength();
    let opponent_strength = opponent.total_strength();

    let result = if army_strength > opponent_strength {
        resolve_victory(config, army, opponent)
    } else if opponent_strength > army_strength {
        resolve_victory(config, opponent, army)
    } else {
        army.lose_strongest_units(DRAW_CASUALTIES);
        opponent.lose_strongest_units(DRAW_CASUALTIES);
        BattleResult::Draw
    };

    info!(
        army = %army.name,
        army_strength,
        opponent = %opponent.name,
        opponent_strength,
        %result,
        "Battle resolved"
    );

    army.log_battle(
        opponent.id,
        &opponent.name,
        opponent.civilization,
        result.clone(),
    );
    opponent.log_battle(army.id, &army.name, army.civilization, result.clone());

    result
}

fn resolve_victory(config: &Config, winner: &mut Army, loser: &mut Army) -> BattleResult {
    winner.add_gold(config.battle_reward);
    loser.lose_strongest_units(DEFAULT_CASUALTIES);
    BattleResult::Victory {
        winner: winner.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use warband_types::{army::UnitName, civilization::Civilization};

    use crate::test_utils::{ArmyFactoryOptions, army_factory};

    use super::*;

    #[test]
    fn test_battle_victory() {
        let mut strong = army_factory(ArmyFactoryOptions {
            name: Some("Strong".to_string()),
            units: Some(vec![(UnitName::Knights, 10)]),
            ..Default::default()
        });
        let mut weak = army_factory(ArmyFactoryOptions {
            name: Some("Weak".to_string()),
            units: Some(vec![(UnitName::Pikemen, 10), (UnitName::Archers, 3)]),
            ..Default::default()
        });

        let result = battle(&mut weak, &mut strong);

        assert_eq!(
            result,
            BattleResult::Victory {
                winner: "Strong".to_string()
            }
        );
        assert_eq!(strong.gold(), 1100);
        assert_eq!(weak.gold(), 1000);
        assert_eq!(strong.unit_count(UnitName::Knights), 10);
        assert_eq!(weak.unit_count(UnitName::Pikemen), 9);
        assert_eq!(weak.unit_count(UnitName::Archers), 2);
    }

    #[test]
    fn test_battle_draw() {
        let roster = vec![(UnitName::Pikemen, 4), (UnitName::Knights, 2)];
        let mut first = army_factory(ArmyFactoryOptions {
            units: Some(roster.clone()),
            ..Default::default()
        });
        let mut second = army_factory(ArmyFactoryOptions {
            civilization: Some(Civilization::Chinese),
            units: Some(roster),
            ..Default::default()
        });

        let result = battle(&mut first, &mut second);

        assert_eq!(result, BattleResult::Draw);
        for army in [&first, &second] {
            assert_eq!(army.gold(), 1000);
            assert_eq!(army.unit_count(UnitName::Knights), 1);
            assert_eq!(army.unit_count(UnitName::Pikemen), 4);
        }
    }

    #[test]
    fn test_battle_logs_both_sides() {
        let mut first = army_factory(ArmyFactoryOptions::default());
        let mut second = army_factory(ArmyFactoryOptions {
            civilization: Some(Civilization::Byzantine),
            units: Some(vec![(UnitName::Pikemen, 1)]),
            ..Default::default()
        });

        let result = battle(&mut first, &mut second);

        assert_eq!(first.battle_history().len(), 1);
        assert_eq!(second.battle_history().len(), 1);

        let first_record = &first.battle_history()[0];
        assert_eq!(first_record.opponent_id, second.id);
        assert_eq!(first_record.opponent_name, second.name);
        assert_eq!(
            first_record.opponent_civilization,
            Civilization::Byzantine
        );

        let second_record = &second.battle_history()[0];
        assert_eq!(second_record.opponent_id, first.id);
        assert_eq!(first_record.result, result);
        assert_eq!(second_record.result, result);
    }

    #[test]
    fn test_battle_with_config_reward() {
        let config = Config {
            battle_reward: 7,
            ..Default::default()
        };
        let mut first = army_factory(ArmyFactoryOptions::default());
        let mut second = army_factory(ArmyFactoryOptions {
            units: Some(vec![]),
            ..Default::default()
        });

        battle_with_config(&config, &mut first, &mut second);

        assert_eq!(first.gold(), 1007);
        assert_eq!(second.total_strength(), 0);
    }

    #[test]
    fn test_battle_with_config_reward_at_gold_limit() {
        let config = Config {
            initial_gold: i64::MAX,
            battle_reward: 100,
        };
        let mut rich = Army::from_config(&config, Civilization::English, Some("Rich"));
        let mut poor = Army::from_config(&config, Civilization::Chinese, Some("Poor"));

        let result = battle_with_config(&config, &mut rich, &mut poor);

        assert_eq!(
            result,
            BattleResult::Victory {
                winner: "Rich".to_string()
            }
        );
        assert_eq!(rich.gold(), i64::MAX);
        assert_eq!(rich.battle_history().len(), 1);
        assert_eq!(poor.battle_history().len(), 1);
    }

    #[test]
    fn test_battle_between_empty_armies_is_draw() {
        let mut first = army_factory(ArmyFactoryOptions {
            units: Some(vec![]),
            ..Default::default()
        });
        let mut second = army_factory(ArmyFactoryOptions {
            units: Some(vec![]),
            ..Default::default()
        });

        assert_eq!(battle(&mut first, &mut second), BattleResult::Draw);
        assert_eq!(first.immensity(), 0);
        assert_eq!(second.immensity(), 0);
    }
}
