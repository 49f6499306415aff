//! WeaponInventory — упорядоченный список оружия игрока
//!
//! Чистая логика слотов, без ECS side effects. Активацию самих `Weapon`
//! и attach/detach делает `Armory`.
//!
//! Инварианты:
//! - entity в списке не повторяются
//! - `current_index` — валидный индекс или `None`
//! - `active` (если есть) лежит в списке

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct WeaponInventory {
    weapons: Vec<Entity>,
    current_index: Option<usize>,
    active: Option<Entity>,
}

impl WeaponInventory {
    pub fn weapons(&self) -> &[Entity] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn contains(&self, weapon: Entity) -> bool {
        self.weapons.contains(&weapon)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Активное оружие; `None` после drop активного, пока не выбрали другое
    pub fn active(&self) -> Option<Entity> {
        self.active
    }

    /// Append в конец. Дубликат → `None`, список не меняется.
    pub fn push(&mut self, weapon: Entity) -> Option<usize> {
        if self.contains(weapon) {
            return None;
        }
        self.weapons.push(weapon);
        Some(self.weapons.len() - 1)
    }

    /// Удалить из списка, вернуть бывший индекс
    ///
    /// Auto-select нет: `current_index` сдвигается вслед за списком и clamp'ится,
    /// удалённое активное оружие оставляет `active = None`.
    pub fn remove(&mut self, weapon: Entity) -> Option<usize> {
        let index = self.weapons.iter().position(|&w| w == weapon)?;
        self.weapons.remove(index);

        if self.active == Some(weapon) {
            self.active = None;
        }

        self.current_index = match (self.current_index, self.weapons.len()) {
            (_, 0) => None,
            // Индекс следует за выбранным оружием
            (Some(current), _) if index < current => Some(current - 1),
            (Some(current), len) if current >= len => Some(len - 1),
            (current, _) => current,
        };

        Some(index)
    }

    /// Выбрать слот. Out of range → false, выбор не меняется.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(&weapon) = self.weapons.get(index) else {
            return false;
        };
        self.current_index = Some(index);
        self.active = Some(weapon);
        true
    }

    /// Индекс после `SwitchWeapon(direction)`
    ///
    /// Wrap в обе стороны: `< 0` → последний слот, `>= len` → слот 0
    /// (перескок, не modulo). Без выбора отсчёт идёт от слота 0.
    pub fn switch_target(&self, direction: i32) -> Option<usize> {
        let len = self.weapons.len() as i64;
        if len == 0 {
            return None;
        }

        let base = self.current_index.unwrap_or(0) as i64;
        let next = base + direction as i64;

        let wrapped = if next < 0 {
            len - 1
        } else if next >= len {
            0
        } else {
            next
        };
        Some(wrapped as usize)
    }
}
