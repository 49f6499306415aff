//! Locomotion: скорость, grounding, jump budget

use bevy::prelude::*;

use crate::config::PlayerConfig;

/// Режим скорости (выбирается из `run` / `crouch` кнопок)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SpeedMode {
    #[default]
    Walk,
    Run,
    Crouch,
}

impl SpeedMode {
    /// Crouch приоритетнее бега
    pub fn from_buttons(run_held: bool, crouch_held: bool) -> Self {
        if crouch_held {
            SpeedMode::Crouch
        } else if run_held {
            SpeedMode::Run
        } else {
            SpeedMode::Walk
        }
    }

    pub fn speed(&self, config: &PlayerConfig) -> f32 {
        match self {
            SpeedMode::Walk => config.walk_speed,
            SpeedMode::Run => config.run_speed,
            SpeedMode::Crouch => config.crouch_speed,
        }
    }
}

/// Состояние locomotion state machine
///
/// Инварианты:
/// - `jump_count` ∈ [0, max_jumps]
/// - после `apply_gravity`: `velocity.y >= -gravity`
///
/// `velocity.x/z` перезаписываются каждый frame из input,
/// `velocity.y` накапливается между frame'ами (gravity integration).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Locomotion {
    pub velocity: Vec3,
    pub grounded: bool,
    /// Сколько прыжков потрачено с последнего касания земли
    pub jump_count: u32,
    pub speed_mode: SpeedMode,
}

impl Locomotion {
    /// Горизонтальная скорость из directional intents
    ///
    /// Local direction `(h, 0, v)`, где `v` — вперёд по взгляду
    /// (Bevy forward = -Z), поворачивается facing'ом игрока.
    /// Вертикаль не трогаем.
    pub fn apply_move(&mut self, facing: Quat, input_h: f32, input_v: f32, speed: f32) {
        let direction = facing * Vec3::new(input_h, 0.0, -input_v);
        self.velocity.x = direction.x * speed;
        self.velocity.z = direction.z * speed;
    }

    /// Jump state machine. Возвращает true если импульс применён.
    ///
    /// Воздушный прыжок умножает `jump_height` на `jump_count` ДО инкремента:
    /// второй прыжок = 1×, третий = 2× и т.д. Эскалация намеренная.
    pub fn resolve_jump(&mut self, jump_pressed: bool, config: &PlayerConfig) -> bool {
        if !jump_pressed {
            return false;
        }

        if self.grounded {
            self.jump_count = 1;
            self.velocity.y = config.jump_height;
            return true;
        }

        if self.jump_count < config.max_jumps {
            self.velocity.y = config.jump_height * self.jump_count as f32;
            self.jump_count += 1;
            return true;
        }

        false
    }

    /// Gravity + terminal fall speed clamp (`-gravity`)
    pub fn apply_gravity(&mut self, gravity: f32, delta: f32) {
        self.velocity.y -= gravity * delta;
        self.velocity.y = self.velocity.y.max(-gravity);
    }

    /// Смещение за frame
    pub fn displacement(&self, delta: f32) -> Vec3 {
        self.velocity * delta
    }

    /// Остановить всё движение (смерть, телепорт)
    pub fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
    }
}
