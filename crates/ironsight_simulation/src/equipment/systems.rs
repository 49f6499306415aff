//! Equipment systems
//!
//! - `register_starting_loadout` — стартовый набор → inventory (один раз)
//! - `process_drop_intents` — `DropWeaponIntent` от host'а

use bevy::prelude::*;

use crate::components::{Player, StartingLoadout};
use crate::equipment::{Armory, DropWeaponIntent, WeaponInventory};
use crate::logger::{log_info, log_warning};

/// Регистрирует `StartingLoadout`: каждое оружие подбирается ровно один раз,
/// затем выбирается слот 0. Компонент удаляется после регистрации.
pub fn register_starting_loadout(
    mut armory: Armory,
    mut holders: Query<(Entity, &Player, &StartingLoadout, &mut WeaponInventory)>,
) {
    for (entity, player, loadout, mut inventory) in holders.iter_mut() {
        for &weapon in &loadout.0 {
            armory.pickup(entity, player.hand, &mut inventory, weapon);
        }

        armory.select(entity, &mut inventory, 0);
        armory.commands().entity(entity).remove::<StartingLoadout>();

        log_info(&format!(
            "Loadout registered for {:?}: {} weapon(s)",
            entity,
            inventory.len()
        ));
    }
}

/// Обработка `DropWeaponIntent`
pub fn process_drop_intents(
    mut intents: EventReader<DropWeaponIntent>,
    mut armory: Armory,
    mut holders: Query<&mut WeaponInventory>,
) {
    for intent in intents.read() {
        let Ok(mut inventory) = holders.get_mut(intent.holder) else {
            log_warning(&format!("DropWeaponIntent: {:?} has no WeaponInventory", intent.holder));
            continue;
        };

        let Some(weapon) = intent.weapon.or(inventory.active()) else {
            continue;
        };

        armory.drop(intent.holder, &mut inventory, weapon);
    }
}
