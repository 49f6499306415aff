//! Health — общий для игрока и любых damageable целей

use bevy::prelude::*;

/// Здоровье
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Наносит урон (saturating). Возвращает true если этот удар убил.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.is_alive();
        self.current = self.current.saturating_sub(amount);
        was_alive && !self.is_alive()
    }

    /// Мгновенная смерть. Возвращает true если entity была жива.
    pub fn kill(&mut self) -> bool {
        let was_alive = self.is_alive();
        self.current = 0;
        was_alive
    }
}
