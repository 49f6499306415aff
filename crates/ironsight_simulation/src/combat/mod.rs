//! Combat: hitscan оружие, урон, смерть
//!
//! ECS ответственность:
//! - Weapon state: cooldown, ammo, tracer timer
//! - Damage rules: Health, DamageDealt, EntityDied, Dead
//!
//! Host ответственность:
//! - Визуал tracer'а (читает `Weapon::tracer`)
//! - Звуки/VFX (читает `WeaponFired`, `DamageDealt`)

use bevy::prelude::*;

use crate::SimulationSet;

pub mod damage;
pub mod systems;
pub mod weapon;

pub use damage::{
    deal_damage, handle_deaths, process_damage_requests, ApplyDamage, DamageAmount, DamageDealt, Dead,
    EntityDied,
};
pub use systems::{resolve_shot, tick_weapons};
pub use weapon::{spawn_weapon, HeldState, Shot, Tracer, Weapon, WeaponFired};

/// Combat Plugin
///
/// Порядок выполнения (FixedUpdate):
/// 1. `SimulationSet::Weapons` — tick cooldown/tracer каждого оружия
/// 2. `SimulationSet::Damage` — внешние ApplyDamage → смерть
///
/// Выстрелы игрока происходят раньше, в `SimulationSet::Player`.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<ApplyDamage>()
            .add_event::<WeaponFired>()
            .register_type::<Weapon>()
            .register_type::<Dead>();

        app.add_systems(FixedUpdate, tick_weapons.in_set(SimulationSet::Weapons));
        app.add_systems(
            FixedUpdate,
            (process_damage_requests, handle_deaths)
                .chain()
                .in_set(SimulationSet::Damage),
        );
    }
}
