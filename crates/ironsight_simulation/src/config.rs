//! Tuning параметры игрока и оружия
//!
//! Default значения = текущий игровой баланс.
//! Serde derive — чтобы host мог грузить их из своих data-файлов (RON/JSON/etc),
//! сам core никаких файлов не читает.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка валидации конфига
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("max_jumps must be at least 1")]
    NoJumps,

    #[error("max_clip must be at least 1")]
    EmptyClip,

    #[error("starting_ammo ({starting}) exceeds max_ammo ({max})")]
    AmmoOverCapacity { starting: i32, max: i32 },
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Параметры движения/взаимодействия игрока
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct PlayerConfig {
    /// Скорость ходьбы (m/s) — активна по умолчанию
    pub walk_speed: f32,
    /// Скорость бега (m/s) — пока зажат `run`
    pub run_speed: f32,
    /// Скорость в приседе (m/s) — пока зажат `crouch`, приоритетнее бега
    pub crouch_speed: f32,
    /// Гравитация (m/s²); она же terminal fall speed (m/s)
    pub gravity: f32,
    /// Вертикальный импульс прыжка (m/s)
    pub jump_height: f32,
    pub max_jumps: u32,
    /// Дальность interaction probe от центра камеры (m)
    pub interact_range: f32,
    /// Длина ground probe вниз от позиции игрока (m)
    pub ground_ray_distance: f32,
    /// Расстояние от позиции игрока до пола в стойке (headless collision resolve)
    pub stand_height: f32,
    /// Высота камеры над позицией игрока (m)
    pub eye_height: f32,
    pub max_health: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 6.0,
            run_speed: 7.5,
            crouch_speed: 4.0,
            gravity: 10.0,
            jump_height: 20.0,
            max_jumps: 2,
            interact_range: 10.0,
            ground_ray_distance: 1.1,
            stand_height: 1.0,
            eye_height: 0.6,
            max_health: 100,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("walk_speed", self.walk_speed)?;
        non_negative("run_speed", self.run_speed)?;
        non_negative("crouch_speed", self.crouch_speed)?;
        positive("gravity", self.gravity)?;
        non_negative("jump_height", self.jump_height)?;
        positive("interact_range", self.interact_range)?;
        positive("ground_ray_distance", self.ground_ray_distance)?;
        non_negative("stand_height", self.stand_height)?;
        if self.max_jumps == 0 {
            return Err(ConfigError::NoJumps);
        }
        if self.max_health == 0 {
            return Err(ConfigError::NonPositive { field: "max_health", value: 0.0 });
        }
        Ok(())
    }
}

/// Формула перезарядки
///
/// `Legacy` воспроизводит старую арифметику (`clip += reserve; reserve -= max_clip`),
/// которая уводит счётчики в минус и за ёмкость магазина. Только для
/// воспроизведения старого поведения, в игре не использовать.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum ReloadMode {
    Legacy,
    #[default]
    Clamped,
}

/// Параметры hitscan оружия
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Текст interaction prompt
    pub title: String,
    pub damage: u32,
    pub max_ammo: i32,
    pub max_clip: i32,
    /// Дальность луча выстрела и длина tracer'а (m)
    pub range: f32,
    /// Минимальный интервал между выстрелами (s)
    pub fire_interval: f32,
    /// Сколько tracer остаётся видимым (s)
    pub line_delay: f32,
    /// Точка вылета в локальных координатах оружия (forward = -Z)
    pub shot_origin: [f32; 3],
    pub reload_mode: ReloadMode,
    pub starting_ammo: i32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            title: "Weapon".to_string(),
            damage: 10,
            max_ammo: 500,
            max_clip: 30,
            range: 10.0,
            fire_interval: 0.2,
            line_delay: 0.1,
            shot_origin: [0.0, 0.0, -0.5],
            reload_mode: ReloadMode::Clamped,
            starting_ammo: 0,
        }
    }
}

impl WeaponConfig {
    pub fn shot_origin(&self) -> Vec3 {
        Vec3::from_array(self.shot_origin)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("range", self.range)?;
        non_negative("fire_interval", self.fire_interval)?;
        non_negative("line_delay", self.line_delay)?;
        if self.max_clip < 1 {
            return Err(ConfigError::EmptyClip);
        }
        if self.starting_ammo > self.max_ammo {
            return Err(ConfigError::AmmoOverCapacity {
                starting: self.starting_ammo,
                max: self.max_ammo,
            });
        }
        non_negative("starting_ammo", self.starting_ammo as f32)
    }
}
