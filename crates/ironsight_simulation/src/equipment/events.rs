//! Equipment events
//!
//! **Intents (host → ECS):**
//! - `DropWeaponIntent` — выбросить оружие (активное, если `weapon = None`)
//!
//! **Notifications (ECS → host):**
//! - `WeaponPickedUp` / `WeaponDropped` — attach/detach визуала, звук
//! - `WeaponSlotChanged` — HUD слотов

use bevy::prelude::*;

/// Выбросить оружие из inventory
#[derive(Event, Clone, Debug, PartialEq)]
pub struct DropWeaponIntent {
    pub holder: Entity,
    /// `None` → активное оружие
    pub weapon: Option<Entity>,
}

impl DropWeaponIntent {
    pub fn active(holder: Entity) -> Self {
        Self {
            holder,
            weapon: None,
        }
    }
}

#[derive(Event, Clone, Debug, PartialEq)]
pub struct WeaponPickedUp {
    pub holder: Entity,
    pub weapon: Entity,
}

#[derive(Event, Clone, Debug, PartialEq)]
pub struct WeaponDropped {
    pub holder: Entity,
    pub weapon: Entity,
}

/// Активный слот сменился
#[derive(Event, Clone, Debug, PartialEq)]
pub struct WeaponSlotChanged {
    pub holder: Entity,
    pub index: usize,
    pub weapon: Entity,
}
