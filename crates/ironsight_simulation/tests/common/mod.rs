//! Общие helpers для integration тестов
//!
//! Время двигаем руками: `Time` += DT, затем FixedUpdate и PostUpdate
//! (transform propagation). Никакого wall clock.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use ironsight_simulation::world::spawn_static_box;
use ironsight_simulation::*;

pub const DT: f32 = 1.0 / 60.0;

/// Headless App со всеми подсистемами
pub fn create_player_app() -> App {
    let mut app = create_headless_app(42);
    app.add_plugins(SimulationPlugin);
    app
}

/// Один simulation frame
pub fn step(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(DT));
    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(PostUpdate);
}

pub fn step_n(app: &mut App, frames: usize) {
    for _ in 0..frames {
        step(app);
    }
}

/// Spawn через Commands + немедленный flush
pub fn spawn_with<T>(app: &mut App, spawn: impl FnOnce(&mut Commands) -> T) -> T {
    let out = {
        let mut commands = app.world_mut().commands();
        spawn(&mut commands)
    };
    app.world_mut().flush();
    out
}

/// Пол: верхняя грань на y = 0
pub fn spawn_floor(app: &mut App) -> Entity {
    spawn_with(app, |commands| {
        spawn_static_box(commands, Vec3::new(0.0, -0.5, 0.0), Vec3::new(50.0, 0.5, 50.0))
    })
}

/// Игрок стоит на полу в (0, 1, 0), смотрит в -Z
pub fn spawn_standing_player(app: &mut App, config: PlayerConfig, loadout: Vec<Entity>) -> Entity {
    spawn_with(app, |commands| {
        spawn_player(commands, Vec3::new(0.0, 1.0, 0.0), config, loadout)
    })
}

pub fn spawn_weapon_at(app: &mut App, config: WeaponConfig, position: Vec3) -> Entity {
    spawn_with(app, |commands| {
        spawn_weapon(commands, config, Transform::from_translation(position))
    })
}

pub fn titled(title: &str) -> WeaponConfig {
    WeaponConfig {
        title: title.into(),
        ..default()
    }
}

pub fn input(app: &mut App) -> Mut<'_, PlayerInput> {
    app.world_mut().resource_mut::<PlayerInput>()
}

pub fn locomotion(app: &App, player: Entity) -> Locomotion {
    *app.world().get::<Locomotion>(player).expect("player has Locomotion")
}

pub fn inventory(app: &App, player: Entity) -> WeaponInventory {
    app.world()
        .get::<WeaponInventory>(player)
        .expect("player has WeaponInventory")
        .clone()
}

pub fn weapon(app: &App, entity: Entity) -> &Weapon {
    app.world().get::<Weapon>(entity).expect("weapon entity")
}

pub fn health(app: &App, entity: Entity) -> Health {
    *app.world().get::<Health>(entity).expect("entity has Health")
}

pub fn event_count<E: Event>(app: &App) -> usize {
    app.world().resource::<Events<E>>().len()
}

/// Стартовый набор: стволы лежат в стороне от игрока до регистрации
pub fn spawn_loadout(app: &mut App, titles: &[&str]) -> Vec<Entity> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| spawn_weapon_at(app, titled(title), Vec3::new(20.0 + i as f32 * 2.0, 0.5, 20.0)))
        .collect()
}
