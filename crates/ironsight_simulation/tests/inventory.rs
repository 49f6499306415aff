//! Weapon inventory integration tests: loadout, pickup, drop, switching

mod common;

use bevy::prelude::*;
use bevy_rapier3d::prelude::RigidBody;
use common::*;
use ironsight_simulation::player::Interacted;
use ironsight_simulation::world::{spawn_interactable, spawn_target};
use ironsight_simulation::*;
use ironsight_simulation::ButtonState;

fn hand_of(app: &App, player: Entity) -> Entity {
    app.world().get::<Player>(player).expect("player").hand
}

fn parent_of(app: &App, entity: Entity) -> Option<Entity> {
    app.world().get::<ChildOf>(entity).map(|child_of| child_of.parent())
}

fn active_flags(app: &App, weapons: &[Entity]) -> Vec<bool> {
    weapons.iter().map(|&w| weapon(app, w).active).collect()
}

#[test]
fn test_starting_loadout_registered_once() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let loadout = spawn_loadout(&mut app, &["Rifle", "Pistol"]);
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), loadout.clone());

    step_n(&mut app, 3);

    let inventory = inventory(&app, player);
    assert_eq!(inventory.weapons(), loadout.as_slice(), "каждое оружие ровно один раз");
    assert_eq!(inventory.current_index(), Some(0));
    assert_eq!(active_flags(&app, &loadout), vec![true, false]);
    assert!(app.world().get::<StartingLoadout>(player).is_none());

    let hand = hand_of(&app, player);
    for &w in &loadout {
        assert!(weapon(&app, w).is_held());
        assert_eq!(parent_of(&app, w), Some(hand));
        assert!(matches!(
            app.world().get::<RigidBody>(w),
            Some(RigidBody::KinematicPositionBased)
        ));
    }
}

#[test]
fn test_pickup_scenario_appends_and_selects_tail() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let a = spawn_weapon_at(&mut app, titled("A"), Vec3::new(0.0, 1.6, -3.0));
    let b = spawn_weapon_at(&mut app, titled("B"), Vec3::new(0.0, 1.6, -5.0));
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    // Prompt без нажатия
    step(&mut app);
    let prompt = app.world().resource::<InteractPrompt>().clone();
    assert!(prompt.visible);
    assert_eq!(prompt.title, "A");
    assert!(inventory(&app, player).is_empty());

    // A → [A], index 0
    input(&mut app).interact = ButtonState::tap();
    step(&mut app);
    let inv = inventory(&app, player);
    assert_eq!(inv.weapons(), &[a]);
    assert_eq!(inv.current_index(), Some(0));
    assert!(weapon(&app, a).active);

    // A в руке и в probe больше не виден: prompt показывает B
    step(&mut app);
    assert_eq!(app.world().resource::<InteractPrompt>().title, "B");

    // B → [A, B], index 1, A неактивно
    input(&mut app).interact = ButtonState::tap();
    step(&mut app);
    let inv = inventory(&app, player);
    assert_eq!(inv.weapons(), &[a, b]);
    assert_eq!(inv.current_index(), Some(1));
    assert_eq!(active_flags(&app, &[a, b]), vec![false, true]);
    assert_eq!(event_count::<WeaponSlotChanged>(&app), 2);

    // Ничего в прицеле → prompt скрыт
    step(&mut app);
    assert!(!app.world().resource::<InteractPrompt>().visible);
}

#[test]
fn test_pickup_then_drop_restores_inventory() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let a = spawn_weapon_at(&mut app, titled("A"), Vec3::new(0.0, 1.6, -3.0));
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    input(&mut app).interact = ButtonState::tap();
    step(&mut app);
    assert_eq!(inventory(&app, player).len(), 1);

    // Frame для transform propagation: оружие в руке
    step(&mut app);
    let held_at = app
        .world()
        .get::<GlobalTransform>(a)
        .expect("global transform")
        .translation();
    assert!((held_at - Vec3::new(0.0, 1.0, 0.0) - ironsight_simulation::player::HAND_OFFSET).length() < 1e-3);

    input(&mut app).drop = ButtonState::tap();
    step(&mut app);

    let inv = inventory(&app, player);
    assert!(inv.is_empty());
    assert_eq!(inv.active(), None);

    let dropped = weapon(&app, a);
    assert_eq!(dropped.held, HeldState::Dropped);
    assert!(!dropped.active);
    assert_eq!(parent_of(&app, a), None);
    assert!(matches!(app.world().get::<RigidBody>(a), Some(RigidBody::Dynamic)));

    // World pose сохранён при detach
    let transform = app.world().get::<Transform>(a).expect("transform");
    assert!((transform.translation - held_at).length() < 1e-3);
}

#[test]
fn test_drop_has_no_auto_select() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let loadout = spawn_loadout(&mut app, &["A", "B"]);
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), loadout.clone());
    step(&mut app);

    app.world_mut().send_event(DropWeaponIntent::active(player));
    step(&mut app);

    let inv = inventory(&app, player);
    assert_eq!(inv.weapons(), &[loadout[1]]);
    assert_eq!(inv.active(), None);
    assert_eq!(inv.current_index(), Some(0));
    assert_eq!(active_flags(&app, &loadout), vec![false, false]);
}

#[test]
fn test_scroll_switching_wraps_both_ways() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let loadout = spawn_loadout(&mut app, &["A", "B", "C"]);
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), loadout.clone());
    step(&mut app);

    // +1 три раза → снова слот 0
    for expected in [1, 2, 0] {
        input(&mut app).scroll = 1.0;
        step(&mut app);
        assert_eq!(inventory(&app, player).current_index(), Some(expected));
    }

    // -1 из слота 0 → последний
    input(&mut app).scroll = -1.0;
    step(&mut app);
    assert_eq!(inventory(&app, player).current_index(), Some(2));
    assert_eq!(active_flags(&app, &loadout), vec![false, false, true]);

    // Дробный scroll: ceil / floor
    input(&mut app).scroll = 0.3;
    step(&mut app);
    assert_eq!(inventory(&app, player).current_index(), Some(0));

    input(&mut app).scroll = -0.2;
    step(&mut app);
    assert_eq!(inventory(&app, player).current_index(), Some(2));

    // Без scroll выбор не меняется
    step_n(&mut app, 5);
    assert_eq!(inventory(&app, player).current_index(), Some(2));
}

#[test]
fn test_single_weapon_ignores_scroll() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let loadout = spawn_loadout(&mut app, &["Solo"]);
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), loadout.clone());
    step(&mut app);
    let events_before = event_count::<WeaponSlotChanged>(&app);

    input(&mut app).scroll = 1.0;
    step(&mut app);

    assert_eq!(inventory(&app, player).current_index(), Some(0));
    assert!(weapon(&app, loadout[0]).active);
    assert_eq!(event_count::<WeaponSlotChanged>(&app), events_before);
}

#[test]
fn test_plain_interactable_shows_prompt_without_pickup() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let door = spawn_with(&mut app, |commands| {
        spawn_interactable(commands, Vec3::new(0.0, 1.6, -3.0), "Door")
    });
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    input(&mut app).interact = ButtonState::tap();
    step(&mut app);

    let prompt = app.world().resource::<InteractPrompt>().clone();
    assert!(prompt.visible);
    assert_eq!(prompt.title, "Door");
    assert!(inventory(&app, player).is_empty());

    let interacted = app
        .world()
        .resource::<Events<Interacted>>()
        .iter_current_update_events()
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(
        interacted,
        vec![Interacted {
            player,
            target: door,
        }]
    );

    // Без нажатия prompt остаётся, событий больше нет
    step(&mut app);
    assert!(app.world().resource::<InteractPrompt>().visible);
    assert_eq!(event_count::<Interacted>(&app), 1);
}

#[test]
fn test_damageable_in_view_hides_prompt() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    spawn_with(&mut app, |commands| spawn_target(commands, Vec3::new(0.0, 1.6, -3.0), 100));
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    input(&mut app).interact = ButtonState::tap();
    step(&mut app);

    assert!(!app.world().resource::<InteractPrompt>().visible);
    assert!(inventory(&app, player).is_empty());
    assert_eq!(event_count::<Interacted>(&app), 0);
}

#[test]
fn test_same_frame_pickup_then_drop_leaves_weapon_at_hand() {
    let mut app = create_player_app();
    spawn_floor(&mut app);
    let a = spawn_weapon_at(&mut app, titled("A"), Vec3::new(0.0, 1.6, -3.0));
    let player = spawn_standing_player(&mut app, PlayerConfig::default(), vec![]);

    {
        let mut input = input(&mut app);
        input.interact = ButtonState::tap();
        input.drop = ButtonState::tap();
    }
    step(&mut app);

    assert!(inventory(&app, player).is_empty());
    assert_eq!(weapon(&app, a).held, HeldState::Dropped);
    assert_eq!(parent_of(&app, a), None);

    // Pose руки, а не прежнее место на полу (GlobalTransform ещё не обновлён)
    let hand_at = Vec3::new(0.0, 1.0, 0.0) + ironsight_simulation::player::HAND_OFFSET;
    let transform = app.world().get::<Transform>(a).expect("transform");
    assert!(
        (transform.translation - hand_at).length() < 1e-3,
        "dropped at {}",
        transform.translation
    );
}
