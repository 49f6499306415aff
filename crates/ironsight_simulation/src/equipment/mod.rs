//! Equipment — weapon inventory игрока
//!
//! # Architecture
//! - `WeaponInventory` (component) — порядок слотов, текущий индекс
//! - `Armory` (SystemParam) — pickup/drop/select поверх `Weapon` entities
//! - Host видит изменения через events и `Weapon::active` / `ChildOf`

use bevy::prelude::*;

use crate::SimulationSet;

pub mod armory;
pub mod events;
pub mod inventory;
pub mod systems;

pub use armory::Armory;
pub use events::*;
pub use inventory::WeaponInventory;
pub use systems::*;

/// Equipment plugin
pub struct EquipmentPlugin;

impl Plugin for EquipmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DropWeaponIntent>()
            .add_event::<WeaponPickedUp>()
            .add_event::<WeaponDropped>()
            .add_event::<WeaponSlotChanged>()
            .register_type::<WeaponInventory>()
            .add_systems(
                FixedUpdate,
                (register_starting_loadout, process_drop_intents)
                    .chain()
                    .in_set(SimulationSet::Loadout),
            );
    }
}
