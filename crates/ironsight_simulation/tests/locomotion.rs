//! Locomotion integration tests: ground, jump budget, gravity, speed modes

mod common;

use bevy::prelude::*;
use common::*;
use ironsight_simulation::*;
use ironsight_simulation::ButtonState;

#[test]
fn test_player_rests_on_floor() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    step_n(&mut app, 120);

    let transform = app.world().get::<Transform>(player).expect("transform");
    assert!((transform.translation.y - 1.0).abs() < 1e-4, "y = {}", transform.translation.y);
    assert!(locomotion(&app, player).grounded);
}

#[test]
fn test_double_jump_scenario() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let config = PlayerConfig {
        max_jumps: 2,
        ..default()
    };
    let player = spawn_standing_player(&mut app, config.clone(), vec![]);
    let after_gravity = |vy: f32| vy - config.gravity * DT;

    // Grounded → первый прыжок
    input(&mut app).jump = ButtonState::tap();
    step(&mut app);
    let state = locomotion(&app, player);
    assert_eq!(state.jump_count, 1);
    assert!((state.velocity.y - after_gravity(config.jump_height)).abs() < 1e-4);

    // В воздухе → второй прыжок: jump_height × 1
    input(&mut app).jump = ButtonState::tap();
    step(&mut app);
    let state = locomotion(&app, player);
    assert!(!state.grounded);
    assert_eq!(state.jump_count, 2);
    assert!((state.velocity.y - after_gravity(config.jump_height)).abs() < 1e-4);

    // Cap: третий прыжок игнорируется
    let before = state.velocity.y;
    input(&mut app).jump = ButtonState::tap();
    step(&mut app);
    let state = locomotion(&app, player);
    assert_eq!(state.jump_count, 2);
    assert!((state.velocity.y - after_gravity(before)).abs() < 1e-4);
}

#[test]
fn test_held_jump_fires_once() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    input(&mut app).jump = ButtonState::tap();
    step(&mut app);

    // Кнопка продолжает быть зажатой: edge погашен в Cleanup
    assert!(input(&mut app).jump.held);
    step_n(&mut app, 5);

    assert_eq!(locomotion(&app, player).jump_count, 1);
}

#[test]
fn test_fall_speed_never_exceeds_gravity() {
    let mut app = create_player_app();
    // Без пола: свободное падение
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    for _ in 0..300 {
        step(&mut app);
        assert!(locomotion(&app, player).velocity.y >= -10.0);
    }

    assert_eq!(locomotion(&app, player).velocity.y, -10.0);
    let transform = app.world().get::<Transform>(player).expect("transform");
    assert!(transform.translation.y < -30.0);
}

#[test]
fn test_speed_modes_move_forward() {
    for (run, crouch, speed) in [(false, false, 6.0), (true, false, 7.5), (true, true, 4.0)] {
        let mut app = create_player_app();
        spawn_floor(&mut app);
        let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

        {
            let mut input = input(&mut app);
            input.vertical = 1.0;
            input.run = if run { ButtonState::hold() } else { ButtonState::default() };
            input.crouch = if crouch { ButtonState::hold() } else { ButtonState::default() };
        }
        step(&mut app);

        let transform = app.world().get::<Transform>(player).expect("transform");
        assert!(
            (transform.translation.z + speed * DT).abs() < 1e-5,
            "run={run} crouch={crouch}: z = {}",
            transform.translation.z
        );
        assert!(transform.translation.x.abs() < 1e-6);
    }
}

#[test]
fn test_dead_player_ignores_movement() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    app.world_mut().send_event(ApplyDamage::lethal(player));
    step(&mut app);
    assert!(app.world().get::<Dead>(player).is_some());

    input(&mut app).vertical = 1.0;
    input(&mut app).jump = ButtonState::tap();
    step_n(&mut app, 10);

    let transform = app.world().get::<Transform>(player).expect("transform");
    assert!((transform.translation - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-4);
    assert_eq!(locomotion(&app, player).velocity, Vec3::ZERO);
}
