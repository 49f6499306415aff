//! Headless симуляция IRONSIGHT
//!
//! Арена + игрок с двумя стволами, seeded random input script.
//! Один и тот же seed → один и тот же прогон.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;

use ironsight_simulation::logger::set_log_level;
use ironsight_simulation::world::{spawn_static_box, spawn_target};
use ironsight_simulation::{
    create_headless_app, spawn_player, spawn_weapon, DeterministicRng, Health, LogLevel, Locomotion, Player,
    PlayerConfig, PlayerInput, SimulationPlugin, WeaponConfig, WeaponInventory,
};

const TICKS: u32 = 600;

fn main() {
    let seed = 42;
    println!("Starting IRONSIGHT headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    set_log_level(LogLevel::Info);

    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)))
        .add_systems(Startup, setup_arena)
        .add_systems(PreUpdate, scripted_input);

    for tick in 0..TICKS {
        app.update();

        if tick % 60 == 0 {
            print_status(&mut app, tick);
        }
    }

    print_status(&mut app, TICKS);
    println!("Simulation complete!");
}

fn setup_arena(mut commands: Commands) {
    spawn_static_box(&mut commands, Vec3::new(0.0, -0.5, 0.0), Vec3::new(50.0, 0.5, 50.0));
    spawn_target(&mut commands, Vec3::new(0.0, 1.3, -8.0), 200);

    let rifle = spawn_weapon(
        &mut commands,
        WeaponConfig {
            title: "Rifle".into(),
            damage: 12,
            range: 30.0,
            fire_interval: 0.1,
            starting_ammo: 120,
            ..default()
        },
        Transform::from_xyz(5.0, 0.5, 5.0),
    );
    let pistol = spawn_weapon(
        &mut commands,
        WeaponConfig {
            title: "Pistol".into(),
            damage: 25,
            range: 20.0,
            fire_interval: 0.4,
            max_clip: 12,
            starting_ammo: 60,
            ..default()
        },
        Transform::from_xyz(6.0, 0.5, 5.0),
    );

    // Лежит на полу перед игроком
    spawn_weapon(
        &mut commands,
        WeaponConfig {
            title: "Shotgun".into(),
            damage: 40,
            range: 8.0,
            fire_interval: 0.8,
            ..default()
        },
        Transform::from_xyz(0.0, 0.5, -3.0),
    );

    spawn_player(
        &mut commands,
        Vec3::new(0.0, 1.0, 0.0),
        PlayerConfig::default(),
        vec![rifle, pistol],
    );
}

/// Random input script (до FixedUpdate)
fn scripted_input(mut rng: ResMut<DeterministicRng>, mut input: ResMut<PlayerInput>) {
    let rng = &mut rng.rng;

    if rng.gen_bool(0.05) {
        input.horizontal = rng.gen_range(-1.0..=1.0);
        input.vertical = rng.gen_range(-1.0..=1.0);
    }
    input.scroll = if rng.gen_bool(0.01) {
        if rng.gen_bool(0.5) { 1.0 } else { -1.0 }
    } else {
        0.0
    };

    input.jump.update(rng.gen_bool(0.03));
    input.fire.update(rng.gen_bool(0.4));
    input.interact.update(rng.gen_bool(0.05));
    input.run.update(rng.gen_bool(0.3));
    input.crouch.update(rng.gen_bool(0.1));
    input.drop.update(rng.gen_bool(0.005));
    input.reload.update(rng.gen_bool(0.02));
}

fn print_status(app: &mut App, tick: u32) {
    let world = app.world_mut();

    let mut players =
        world.query_filtered::<(&Transform, &Locomotion, &WeaponInventory, &Health), With<Player>>();
    let Ok((transform, locomotion, inventory, health)) = players.single(world) else {
        println!("Tick {}: no player", tick);
        return;
    };

    println!(
        "Tick {}: pos {:.2?} vel {:.2?} grounded {} jumps {} | weapons {} (slot {:?}) | HP {}/{}",
        tick,
        transform.translation,
        locomotion.velocity,
        locomotion.grounded,
        locomotion.jump_count,
        inventory.len(),
        inventory.current_index(),
        health.current,
        health.max,
    );
}
