//! Armory — weapon-slot операции над ECS
//!
//! # Операции
//! - `pickup` — attach к hand anchor, Held (kinematic body), append, select tail
//! - `drop` — Dropped (dynamic body), detach с сохранением world pose, remove
//! - `select` / `switch` — ровно одно активное оружие
//!
//! SystemParam, чтобы interact/switching/loadout системы делили одну реализацию.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::combat::{HeldState, Weapon};
use crate::components::Player;
use crate::equipment::{WeaponDropped, WeaponInventory, WeaponPickedUp, WeaponSlotChanged};
use crate::logger::{log, log_error, log_warning};

#[derive(SystemParam)]
pub struct Armory<'w, 's> {
    commands: Commands<'w, 's>,
    weapons: Query<'w, 's, (&'static mut Weapon, Option<&'static GlobalTransform>)>,
    players: Query<'w, 's, &'static Player>,
    /// Локальные transform'ы holder'а и hand anchor'а
    frames: Query<'w, 's, &'static Transform>,
    picked_up: EventWriter<'w, WeaponPickedUp>,
    dropped: EventWriter<'w, WeaponDropped>,
    slot_changed: EventWriter<'w, WeaponSlotChanged>,
}

impl<'w, 's> Armory<'w, 's> {
    pub fn commands(&mut self) -> &mut Commands<'w, 's> {
        &mut self.commands
    }

    pub fn weapon_mut(&mut self, entity: Entity) -> Option<Mut<'_, Weapon>> {
        self.weapons.get_mut(entity).ok().map(|(weapon, _)| weapon)
    }

    /// Pickup: attach к `hand` (identity local transform) и выбрать
    pub fn pickup(
        &mut self,
        holder: Entity,
        hand: Entity,
        inventory: &mut WeaponInventory,
        weapon: Entity,
    ) -> bool {
        if inventory.contains(weapon) {
            log_warning(&format!("Pickup: {:?} already in inventory of {:?}", weapon, holder));
            return false;
        }

        let title = {
            let Ok((mut state, _)) = self.weapons.get_mut(weapon) else {
                log_error(&format!("Pickup: {:?} is not a weapon", weapon));
                return false;
            };
            if state.is_held() {
                log_warning(&format!("Pickup: {:?} is already held by someone", weapon));
                return false;
            }
            state.pickup();
            state.title().to_string()
        };

        if let Ok(mut entity) = self.commands.get_entity(weapon) {
            entity.insert((
                ChildOf(hand),
                Transform::IDENTITY,
                HeldState::Held.rigid_body(),
            ));
        }

        let Some(index) = inventory.push(weapon) else {
            return false;
        };
        self.picked_up.write(WeaponPickedUp { holder, weapon });
        log(&format!("🔫 {:?} picked up '{}' (slot {})", holder, title, index));

        self.select(holder, inventory, index)
    }

    /// Drop: detach от руки, world pose руки сохраняется, auto-select нет
    pub fn drop(&mut self, holder: Entity, inventory: &mut WeaponInventory, weapon: Entity) -> bool {
        if inventory.remove(weapon).is_none() {
            log_warning(&format!("Drop: {:?} not in inventory of {:?}", weapon, holder));
            return false;
        }

        // Held оружие висит в руке с identity local transform
        let hand_pose = self.hand_pose(holder);

        let world_pose = match self.weapons.get_mut(weapon) {
            Ok((mut state, global)) => {
                state.drop();
                state.active = false;
                hand_pose.or_else(|| global.map(GlobalTransform::compute_transform))
            }
            Err(_) => {
                log_error(&format!("Drop: inventory of {:?} referenced non-weapon {:?}", holder, weapon));
                None
            }
        };

        if let Ok(mut entity) = self.commands.get_entity(weapon) {
            entity
                .remove::<ChildOf>()
                .insert(HeldState::Dropped.rigid_body());
            if let Some(pose) = world_pose {
                entity.insert(pose);
            }
        }

        self.dropped.write(WeaponDropped { holder, weapon });
        log(&format!("{:?} dropped {:?}", holder, weapon));
        true
    }

    /// Pose руки = holder `Transform` × hand `Transform`
    ///
    /// Не зависит от transform propagation: верна и для оружия,
    /// подобранного в этом же frame.
    fn hand_pose(&self, holder: Entity) -> Option<Transform> {
        let hand = self.players.get(holder).ok()?.hand;
        let holder_frame = self.frames.get(holder).ok()?;
        let hand_frame = self.frames.get(hand).ok()?;
        Some(holder_frame.mul_transform(*hand_frame))
    }

    /// SelectWeapon: out of range → false; иначе активно ровно `weapons[index]`
    pub fn select(&mut self, holder: Entity, inventory: &mut WeaponInventory, index: usize) -> bool {
        if !inventory.select(index) {
            return false;
        }

        let active = inventory.active();
        for &entity in inventory.weapons() {
            match self.weapons.get_mut(entity) {
                Ok((mut weapon, _)) => weapon.active = Some(entity) == active,
                Err(_) => log_warning(&format!("Select: slot entity {:?} has no Weapon", entity)),
            }
        }

        if let Some(weapon) = active {
            self.slot_changed.write(WeaponSlotChanged { holder, index, weapon });
        }
        true
    }

    /// SwitchWeapon: шаг с wrap, затем select
    pub fn switch(&mut self, holder: Entity, inventory: &mut WeaponInventory, direction: i32) -> bool {
        match inventory.switch_target(direction) {
            Some(index) => self.select(holder, inventory, index),
            None => false,
        }
    }
}
