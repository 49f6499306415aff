//! Player frame systems
//!
//! Порядок (chain в `SimulationSet::Player`):
//! Movement → Interact → Shooting → Switching → weapon actions (drop/reload).
//!
//! Все системы пропускают `Dead` игрока.

use bevy::prelude::*;

use crate::combat::{resolve_shot, DamageDealt, Dead, EntityDied, Weapon, WeaponFired};
use crate::components::{HandAnchor, Health, Player};
use crate::config::PlayerConfig;
use crate::equipment::{Armory, WeaponInventory};
use crate::input::PlayerInput;
use crate::logger::log_warning;
use crate::physics::{PhysicsProbe, ProbeFilter, ProbeWorld};
use crate::player::{InteractPrompt, Interacted};

/// System: Interact
///
/// Prompt скрывается каждый frame и показывается снова, если луч из камеры
/// упирается в interactable в пределах `interact_range`.
/// `interact` edge + оружие → pickup.
pub fn player_interact(
    input: Res<PlayerInput>,
    probe: Res<ProbeWorld>,
    mut prompt: ResMut<InteractPrompt>,
    mut armory: Armory,
    mut interacted: EventWriter<Interacted>,
    mut players: Query<(Entity, &Player, &PlayerConfig, &Transform, &mut WeaponInventory), Without<Dead>>,
) {
    prompt.hide();

    for (entity, player, config, transform, mut inventory) in players.iter_mut() {
        let ray = player.view_ray(transform, config.eye_height);
        let Some(hit) = probe.cast(ray, config.interact_range, &ProbeFilter::excluding(entity)) else {
            continue;
        };

        let Some(title) = hit.capability.as_interactable() else {
            continue;
        };
        prompt.show(title);

        if !input.interact.pressed {
            continue;
        }

        interacted.write(Interacted {
            player: entity,
            target: hit.entity,
        });

        if hit.capability.is_weapon() {
            armory.pickup(entity, player.hand, &mut inventory, hit.entity);
        }
    }
}

/// System: Shooting
///
/// `fire` held + активное оружие в руке → `Weapon::shoot`.
/// Muzzle считается от `Transform` игрока × hand anchor, поэтому оружие,
/// подобранное в этом же frame, стреляет из руки (GlobalTransform ещё старый).
pub fn player_shooting(
    input: Res<PlayerInput>,
    probe: Res<ProbeWorld>,
    players: Query<(Entity, &Player, &Transform, &WeaponInventory), Without<Dead>>,
    hands: Query<&Transform, (With<HandAnchor>, Without<Player>)>,
    mut weapons: Query<&mut Weapon>,
    mut targets: Query<&mut Health>,
    mut fired_events: EventWriter<WeaponFired>,
    mut dealt_events: EventWriter<DamageDealt>,
    mut died_events: EventWriter<EntityDied>,
) {
    if !input.fire.held {
        return;
    }

    for (entity, player, transform, inventory) in players.iter() {
        let Some(active) = inventory.active() else {
            continue;
        };

        let Ok(mut weapon) = weapons.get_mut(active) else {
            log_warning(&format!("Shooting: active slot {:?} has no Weapon", active));
            continue;
        };

        if !weapon.is_held() {
            continue;
        }

        let hand = hands.get(player.hand).copied().unwrap_or_default();
        let muzzle = weapon.muzzle_ray(&GlobalTransform::from(transform.mul_transform(hand)));

        // Свой body и всё своё оружие (включая подобранное в этом frame)
        let filter = inventory
            .weapons()
            .iter()
            .fold(ProbeFilter::excluding(entity), |filter, &w| filter.with_excluded(w));

        let Some(shot) = weapon.shoot(muzzle, &*probe, &filter) else {
            continue;
        };

        resolve_shot(
            entity,
            active,
            &shot,
            &mut targets,
            &mut fired_events,
            &mut dealt_events,
            &mut died_events,
        );
    }
}

/// System: Switching
///
/// Только при >1 оружии. Scroll > 0 → `ceil`, < 0 → `floor`.
pub fn player_switching(
    input: Res<PlayerInput>,
    mut armory: Armory,
    mut players: Query<(Entity, &mut WeaponInventory), (With<Player>, Without<Dead>)>,
) {
    let scroll = input.scroll;
    if scroll == 0.0 || !scroll.is_finite() {
        return;
    }

    let step = (if scroll > 0.0 { scroll.ceil() } else { scroll.floor() }) as i32;

    for (entity, mut inventory) in players.iter_mut() {
        if inventory.len() <= 1 {
            continue;
        }
        armory.switch(entity, &mut inventory, step);
    }
}

/// System: reload / drop кнопки (активное оружие)
pub fn player_weapon_actions(
    input: Res<PlayerInput>,
    mut armory: Armory,
    mut players: Query<(Entity, &mut WeaponInventory), (With<Player>, Without<Dead>)>,
) {
    if !input.reload.pressed && !input.drop.pressed {
        return;
    }

    for (entity, mut inventory) in players.iter_mut() {
        let Some(active) = inventory.active() else {
            continue;
        };

        if input.reload.pressed {
            if let Some(mut weapon) = armory.weapon_mut(active) {
                weapon.reload();
            }
        }

        if input.drop.pressed {
            armory.drop(entity, &mut inventory, active);
        }
    }
}
