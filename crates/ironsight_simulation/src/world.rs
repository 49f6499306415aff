//! World setup helpers: статичная геометрия, мишени, interactables
//!
//! Каждая entity получает `ProbeCollider` (для gameplay probes) и
//! rapier body/collider (для host'а с физикой).

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody};

use crate::components::Health;
use crate::physics::{HitCapability, ProbeCollider, ProbeShape};

/// Статичный box (пол, стены)
pub fn spawn_static_box(commands: &mut Commands, center: Vec3, half_extents: Vec3) -> Entity {
    let transform = Transform::from_translation(center);
    commands
        .spawn((
            transform,
            GlobalTransform::from(transform),
            ProbeCollider::solid_box(half_extents),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
        ))
        .id()
}

/// Мишень с Health (принимает урон от hitscan)
pub fn spawn_target(commands: &mut Commands, position: Vec3, max_health: u32) -> Entity {
    let transform = Transform::from_translation(position);
    commands
        .spawn((
            transform,
            GlobalTransform::from(transform),
            Health::new(max_health),
            ProbeCollider::new(ProbeShape::Sphere { radius: 0.5 }, HitCapability::Damageable),
            RigidBody::Fixed,
            Collider::ball(0.5),
        ))
        .id()
}

/// Interactable с title (кнопки, двери): показывает prompt, шлёт `Interacted`
pub fn spawn_interactable(commands: &mut Commands, position: Vec3, title: impl Into<String>) -> Entity {
    let transform = Transform::from_translation(position);
    commands
        .spawn((
            transform,
            GlobalTransform::from(transform),
            ProbeCollider::new(
                ProbeShape::Box {
                    half_extents: Vec3::splat(0.5),
                },
                HitCapability::Interactable { title: title.into() },
            ),
            RigidBody::Fixed,
            Collider::cuboid(0.5, 0.5, 0.5),
        ))
        .id()
}
