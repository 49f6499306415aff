//! Player spawn

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody};

use crate::components::{HandAnchor, Health, Locomotion, Player, StartingLoadout};
use crate::config::PlayerConfig;
use crate::equipment::WeaponInventory;
use crate::logger::log_error;
use crate::physics::{HitCapability, ProbeCollider, ProbeShape};

/// Hand anchor относительно позиции игрока (справа, ниже глаз, впереди)
pub const HAND_OFFSET: Vec3 = Vec3::new(0.3, 0.3, -0.4);

/// Spawn игрока + hand anchor
///
/// `loadout` регистрируется в первом FixedUpdate (`register_starting_loadout`).
///
/// Character controller не добавляется: host, запускающий
/// `RapierPhysicsPlugin`, вставляет `KinematicCharacterController` сам,
/// без него movement интегрирует `Transform` headless.
pub fn spawn_player(
    commands: &mut Commands,
    position: Vec3,
    config: PlayerConfig,
    loadout: Vec<Entity>,
) -> Entity {
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log_error(&format!("Invalid player config: {} — using defaults", err));
            PlayerConfig::default()
        }
    };

    let transform = Transform::from_translation(position);
    let player = commands
        .spawn((
            transform,
            GlobalTransform::from(transform),
            Locomotion::default(),
            Health::new(config.max_health),
            WeaponInventory::default(),
            ProbeCollider::new(
                ProbeShape::Box {
                    half_extents: Vec3::new(0.4, config.stand_height, 0.4),
                },
                HitCapability::Damageable,
            ),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(config.stand_height * 0.5, 0.4),
            config,
        ))
        .id();

    let hand = commands
        .spawn((HandAnchor, Transform::from_translation(HAND_OFFSET), ChildOf(player)))
        .id();

    commands.entity(player).insert(Player::new(hand));
    if !loadout.is_empty() {
        commands.entity(player).insert(StartingLoadout(loadout));
    }

    player
}
