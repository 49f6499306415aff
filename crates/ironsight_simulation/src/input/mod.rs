//! Player input (per-frame snapshot)
//!
//! Raw device polling — задача host'а. Host каждый frame пишет состояние
//! осей/кнопок в `PlayerInput` до `FixedUpdate`; симуляция только читает.
//!
//! # Edges
//! `ButtonState::update(down)` вычисляет `pressed` из предыдущего `held`.
//! `clear_input_edges` в конце frame гасит `pressed` и `scroll`, поэтому
//! host, который выставляет `pressed` напрямую, тоже получает ровно один edge.

use bevy::prelude::*;

/// Состояние одной кнопки в текущем frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct ButtonState {
    /// Кнопка зажата в этом frame
    pub held: bool,
    /// Кнопка нажата именно в этом frame (edge-triggered)
    pub pressed: bool,
}

impl ButtonState {
    /// Нажатие в этом frame (held + edge)
    pub fn tap() -> Self {
        Self {
            held: true,
            pressed: true,
        }
    }

    /// Зажата без edge (нажата в прошлых frame'ах)
    pub fn hold() -> Self {
        Self {
            held: true,
            pressed: false,
        }
    }

    /// Обновить из raw "кнопка опущена"
    pub fn update(&mut self, down: bool) {
        self.pressed = down && !self.held;
        self.held = down;
    }
}

/// Input snapshot игрока
///
/// # Axes
/// - `horizontal`: -1.0 (left) → +1.0 (right)
/// - `vertical`: -1.0 (back) → +1.0 (forward)
/// - `scroll`: колесо мыши, знак = направление переключения оружия
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct PlayerInput {
    pub horizontal: f32,
    pub vertical: f32,
    pub scroll: f32,

    pub jump: ButtonState,
    pub fire: ButtonState,
    /// Pickup/use (E)
    pub interact: ButtonState,
    pub run: ButtonState,
    pub crouch: ButtonState,
    /// Выбросить активное оружие
    pub drop: ButtonState,
    pub reload: ButtonState,
}

impl PlayerInput {
    /// Directional intents, clamped в [-1, 1] (NaN → 0)
    pub fn move_axes(&self) -> Vec2 {
        let clamp = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Vec2::new(clamp(self.horizontal), clamp(self.vertical))
    }

    pub fn clear_edges(&mut self) {
        for button in [
            &mut self.jump,
            &mut self.fire,
            &mut self.interact,
            &mut self.run,
            &mut self.crouch,
            &mut self.drop,
            &mut self.reload,
        ] {
            button.pressed = false;
        }
        self.scroll = 0.0;
    }
}

/// System: гасит edges в конце frame
pub fn clear_input_edges(mut input: ResMut<PlayerInput>) {
    input.clear_edges();
}
