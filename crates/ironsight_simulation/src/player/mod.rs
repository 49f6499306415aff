//! Player — input-driven персонаж
//!
//! # Architecture
//! - `PlayerInput` (resource) — пишет host до `FixedUpdate`
//! - Systems читают input и двигают ECS state (locomotion, weapons, prompt)
//! - Host синхронизирует визуал по компонентам и events

use bevy::prelude::*;

use crate::input::{clear_input_edges, PlayerInput};
use crate::physics::player_movement;
use crate::SimulationSet;

pub mod prompt;
pub mod spawn;
pub mod systems;

pub use prompt::{InteractPrompt, Interacted};
pub use spawn::{spawn_player, HAND_OFFSET};
pub use systems::*;

/// Player plugin
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .init_resource::<InteractPrompt>()
            .add_event::<Interacted>()
            .register_type::<PlayerInput>()
            .register_type::<InteractPrompt>()
            .add_systems(
                FixedUpdate,
                (
                    player_movement,
                    player_interact,
                    player_shooting,
                    player_switching,
                    player_weapon_actions,
                )
                    .chain()
                    .in_set(SimulationSet::Player),
            )
            .add_systems(FixedUpdate, clear_input_edges.in_set(SimulationSet::Cleanup));
    }
}
