//! Player компоненты
//!
//! Отмечает entity которой управляет `PlayerInput`.

use bevy::prelude::*;

/// Player-controlled персонаж
///
/// # Camera
/// Камерой управляет host: пишет `look_pitch` (радианы, + вверх).
/// Yaw — это вращение самого `Transform` игрока.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Player {
    /// Hand anchor (child entity), к нему крепится оружие
    pub hand: Entity,
    pub look_pitch: f32,
}

impl Player {
    pub fn new(hand: Entity) -> Self {
        Self {
            hand,
            look_pitch: 0.0,
        }
    }

    /// Луч из центра камеры
    pub fn view_ray(&self, transform: &Transform, eye_height: f32) -> Ray3d {
        let origin = transform.translation + transform.up() * eye_height;
        let look = transform.rotation * Quat::from_rotation_x(self.look_pitch);
        Ray3d::new(origin, Dir3::new(look * Vec3::NEG_Z).unwrap_or(Dir3::NEG_Z))
    }
}

/// Marker: точка крепления оружия (child игрока)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct HandAnchor;

/// Стартовый набор оружия (регистрируется один раз, затем компонент удаляется)
///
/// Порядок = порядок в inventory; после регистрации выбирается слот 0.
#[derive(Component, Debug, Clone, Default)]
pub struct StartingLoadout(pub Vec<Entity>);
