//! Physics: probe queries + player locomotion
//!
//! Rapier владеет телами (RigidBody/Collider, character controller),
//! gameplay логика видит мир только через `PhysicsProbe`.

use bevy::prelude::*;

use crate::SimulationSet;

pub mod movement;
pub mod probe;

pub use movement::{integrate_headless, player_movement, probe_grounded};
pub use probe::{
    sync_probe_world, HitCapability, PhysicsProbe, ProbeCollider, ProbeFilter, ProbeHit, ProbeShape,
    ProbeWorld,
};

/// Probe Plugin: `ProbeWorld` + пересборка в начале каждого frame
pub struct ProbePlugin;

impl Plugin for ProbePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProbeWorld>()
            .register_type::<ProbeCollider>()
            .add_systems(FixedUpdate, sync_probe_world.in_set(SimulationSet::Sync));
    }
}
