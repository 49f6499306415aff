//! IRONSIGHT Simulation Core
//!
//! ECS-симуляция игрока FPS на Bevy 0.16 (headless)
//!
//! - Locomotion: walk/run/crouch, jump budget, gravity
//! - Interaction probe: prompt + weapon pickup
//! - Weapons: inventory, fire-rate gating, hitscan, tracer timer
//!
//! Host (движок с рендером) пишет `PlayerInput` и рисует по компонентам/events.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod config;
pub mod equipment;
pub mod input;
pub mod logger;
pub mod physics;
pub mod player;
pub mod world;

// Re-exports для удобства host'а
pub use combat::{
    spawn_weapon, ApplyDamage, CombatPlugin, DamageDealt, Dead, EntityDied, HeldState, Tracer, Weapon,
    WeaponFired,
};
pub use components::*;
pub use config::{ConfigError, PlayerConfig, ReloadMode, WeaponConfig};
pub use equipment::{DropWeaponIntent, EquipmentPlugin, WeaponInventory, WeaponSlotChanged};
pub use input::{ButtonState, PlayerInput};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};
pub use physics::{HitCapability, PhysicsProbe, ProbeCollider, ProbePlugin, ProbeShape, ProbeWorld};
pub use player::{spawn_player, InteractPrompt, PlayerPlugin};

/// Порядок фаз внутри одного `FixedUpdate` tick
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// ProbeWorld ← ProbeCollider + GlobalTransform
    Sync,
    /// Стартовый loadout, drop intents
    Loadout,
    /// Movement → Interact → Shooting → Switching
    Player,
    /// Cooldown + tracer всех оружий
    Weapons,
    Damage,
    /// Сброс input edges
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Sync,
                    SimulationSet::Loadout,
                    SimulationSet::Player,
                    SimulationSet::Weapons,
                    SimulationSet::Damage,
                    SimulationSet::Cleanup,
                )
                    .chain(),
            )
            .register_type::<Health>()
            .register_type::<Locomotion>()
            .register_type::<Player>()
            .register_type::<HandAnchor>()
            .register_type::<PlayerConfig>()
            .add_plugins((ProbePlugin, EquipmentPlugin, PlayerPlugin, CombatPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Без `SimulationPlugin`: тесты и runner добавляют его сами.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
