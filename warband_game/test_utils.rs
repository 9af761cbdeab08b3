use rand::Rng;

use warband_types::{army::UnitName, civilization::Civilization};

use crate::{config::Config, models::army::Army};

#[derive(Default, Clone)]
pub struct ArmyFactoryOptions {
    pub name: Option<String>,
    pub civilization: Option<Civilization>,
    pub gold: Option<i64>,
    /// Replaces the civilization's starting roster when set.
    pub units: Option<Vec<(UnitName, u32)>>,
}

pub fn army_factory(options: ArmyFactoryOptions) -> Army {
    let default_name: String = format!("army_{}", rand::thread_rng().r#gen::<u32>());
    let config = Config {
        initial_gold: options.gold.unwrap_or(Config::default().initial_gold),
        ..Default::default()
    };

    let mut army = Army::from_config(
        &config,
        options.civilization.unwrap_or(Civilization::English),
        Some(options.name.as_deref().unwrap_or(&default_name)),
    );

    if let Some(units) = options.units {
        army.replace_units(&units);
    }

    army
}
