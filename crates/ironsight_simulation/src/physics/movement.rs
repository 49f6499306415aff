//! Player locomotion system
//!
//! Архитектура:
//! - Custom velocity integration (rapier forces не используем)
//! - Ground check через `PhysicsProbe` (луч вниз на `ground_ray_distance`)
//! - С rapier: смещение уходит в `KinematicCharacterController.translation`,
//!   collision resolve делает rapier
//! - Headless (без rapier plugin): интегрируем `Transform` сами,
//!   пол держим тем же probe

use bevy::prelude::*;
use bevy_rapier3d::prelude::KinematicCharacterController;

use crate::combat::Dead;
use crate::components::{Locomotion, Player, SpeedMode};
use crate::config::PlayerConfig;
use crate::input::PlayerInput;
use crate::physics::{PhysicsProbe, ProbeFilter, ProbeWorld};

/// Ground check: луч вниз от позиции игрока
pub fn probe_grounded(
    transform: &Transform,
    distance: f32,
    probe: &impl PhysicsProbe,
    filter: &ProbeFilter,
) -> bool {
    let ray = Ray3d::new(transform.translation, transform.down());
    probe.cast(ray, distance, filter).is_some()
}

/// Headless collision resolve: горизонталь свободно, вниз — не глубже пола
///
/// `stand_height` — расстояние от позиции игрока до подошвы.
pub fn integrate_headless(
    transform: &mut Transform,
    displacement: Vec3,
    probe: &impl PhysicsProbe,
    filter: &ProbeFilter,
    stand_height: f32,
) {
    transform.translation.x += displacement.x;
    transform.translation.z += displacement.z;

    if displacement.y >= 0.0 {
        transform.translation.y += displacement.y;
        return;
    }

    let fall = -displacement.y;
    let ray = Ray3d::new(transform.translation, Dir3::NEG_Y);
    match probe.cast(ray, stand_height + fall, filter) {
        Some(hit) => {
            transform.translation.y = (transform.translation.y - fall).max(hit.point.y + stand_height);
        }
        None => transform.translation.y -= fall,
    }
}

/// System: Movement (первый шаг player frame)
///
/// 1. Move из horizontal/vertical intents
/// 2. Ground probe
/// 3. Jump state machine (edge)
/// 4. Gravity + terminal clamp
/// 5. Смещение через character controller / headless integrate
pub fn player_movement(
    input: Res<PlayerInput>,
    time: Res<Time>,
    probe: Res<ProbeWorld>,
    mut players: Query<
        (
            Entity,
            &PlayerConfig,
            &mut Locomotion,
            &mut Transform,
            Option<&mut KinematicCharacterController>,
        ),
        (With<Player>, Without<Dead>),
    >,
) {
    let delta = time.delta_secs();
    let axes = input.move_axes();

    for (entity, config, mut locomotion, mut transform, controller) in players.iter_mut() {
        let filter = ProbeFilter::excluding(entity);

        locomotion.speed_mode = SpeedMode::from_buttons(input.run.held, input.crouch.held);
        let speed = locomotion.speed_mode.speed(config);
        locomotion.apply_move(transform.rotation, axes.x, axes.y, speed);

        locomotion.grounded = probe_grounded(&transform, config.ground_ray_distance, &*probe, &filter);

        locomotion.resolve_jump(input.jump.pressed, config);
        locomotion.apply_gravity(config.gravity, delta);

        let displacement = locomotion.displacement(delta);
        match controller {
            Some(mut controller) => controller.translation = Some(displacement),
            None => integrate_headless(
                &mut transform,
                displacement,
                &*probe,
                &filter,
                config.stand_height,
            ),
        }
    }
}
