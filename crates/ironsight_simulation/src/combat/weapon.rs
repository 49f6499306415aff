//! Hitscan weapon: cooldown gating, ammo, tracer timer
//!
//! Weapon — самостоятельная entity (лежит в мире или висит на hand anchor).
//! Cooldown и tracer тикают каждый frame для ВСЕХ оружий,
//! независимо от того выбрано оружие или нет.
//!
//! State: {Dropped, Held} × {Cooldown, Ready} — ортогональные оси.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody};

use crate::config::{ReloadMode, WeaponConfig};
use crate::logger::log_error;
use crate::physics::{HitCapability, PhysicsProbe, ProbeCollider, ProbeFilter, ProbeHit, ProbeShape};

/// В руках или в мире
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum HeldState {
    /// Свободное тело: падает, коллайдит (RigidBody::Dynamic)
    #[default]
    Dropped,
    /// В руке: kinematic, физика не применяется
    Held,
}

impl HeldState {
    /// Тип rapier body для этого состояния
    pub fn rigid_body(&self) -> RigidBody {
        match self {
            HeldState::Dropped => RigidBody::Dynamic,
            HeldState::Held => RigidBody::KinematicPositionBased,
        }
    }
}

/// Видимый tracer последнего выстрела
///
/// Один на оружие: новый выстрел перезаписывает отрезок и `visible_until`,
/// поэтому таймер старого выстрела не может спрятать новый tracer.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Tracer {
    pub from: Vec3,
    pub to: Vec3,
    /// Момент скрытия по часам оружия (`Weapon::clock`)
    pub visible_until: f32,
}

/// Результат успешного выстрела
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    pub ray: Ray3d,
    pub hit: Option<ProbeHit>,
    pub damage: u32,
    /// Длина tracer'а
    pub range: f32,
}

impl Shot {
    /// Entity которой положен урон (только damageable попадания)
    pub fn damage_target(&self) -> Option<Entity> {
        self.hit
            .as_ref()
            .filter(|hit| hit.capability.is_damageable())
            .map(|hit| hit.entity)
    }
}

/// Weapon component (config + runtime state)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct Weapon {
    pub config: WeaponConfig,

    pub ammo_reserve: i32,
    pub clip_loaded: i32,

    /// Накопленное время с последнего выстрела (s)
    pub cooldown_elapsed: f32,
    /// Sticky: true после `fire_interval`, сбрасывается выстрелом
    pub ready_to_fire: bool,

    pub held: HeldState,
    /// Выбрано в inventory (видимо/используемо)
    pub active: bool,

    /// Локальные часы оружия (сумма всех tick delta)
    pub clock: f32,
    pub tracer: Option<Tracer>,
}

impl Weapon {
    /// Новое оружие готово к выстрелу сразу
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            ammo_reserve: config.starting_ammo,
            clip_loaded: 0,
            cooldown_elapsed: config.fire_interval,
            ready_to_fire: true,
            held: HeldState::Dropped,
            active: false,
            clock: 0.0,
            tracer: None,
            config,
        }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn is_held(&self) -> bool {
        self.held == HeldState::Held
    }

    pub fn pickup(&mut self) {
        self.held = HeldState::Held;
    }

    pub fn drop(&mut self) {
        self.held = HeldState::Dropped;
    }

    /// Per-frame tick: cooldown + tracer expiry
    pub fn tick(&mut self, delta: f32) {
        self.cooldown_elapsed += delta;
        if self.cooldown_elapsed >= self.config.fire_interval {
            self.ready_to_fire = true;
        }

        self.clock += delta;
        if self
            .tracer
            .is_some_and(|tracer| self.clock >= tracer.visible_until)
        {
            self.tracer = None;
        }
    }

    pub fn tracer_visible(&self) -> bool {
        self.tracer.is_some()
    }

    /// Луч выстрела из мирового transform оружия
    pub fn muzzle_ray(&self, transform: &GlobalTransform) -> Ray3d {
        Ray3d::new(
            transform.transform_point(self.config.shot_origin()),
            transform.forward(),
        )
    }

    /// Shoot: no-op пока не `ready_to_fire`
    ///
    /// Probe до `range`; tracer стартует при любом исходе (попал/промах);
    /// cooldown сбрасывается. Урон применяет вызывающая система
    /// по `Shot::damage_target`.
    pub fn shoot(&mut self, muzzle: Ray3d, probe: &impl PhysicsProbe, filter: &ProbeFilter) -> Option<Shot> {
        if !self.ready_to_fire {
            return None;
        }

        let hit = probe.cast(muzzle, self.config.range, filter);

        self.tracer = Some(Tracer {
            from: muzzle.origin,
            to: muzzle.get_point(self.config.range),
            visible_until: self.clock + self.config.line_delay,
        });

        self.cooldown_elapsed = 0.0;
        self.ready_to_fire = false;

        Some(Shot {
            ray: muzzle,
            hit,
            damage: self.config.damage,
            range: self.config.range,
        })
    }

    /// Перезарядка по `ReloadMode`
    pub fn reload(&mut self) {
        match self.config.reload_mode {
            ReloadMode::Legacy => {
                // Без проверок: clip может уйти за max_clip, reserve — в минус
                self.clip_loaded += self.ammo_reserve;
                self.ammo_reserve -= self.config.max_clip;
            }
            ReloadMode::Clamped => {
                let missing = (self.config.max_clip - self.clip_loaded).max(0);
                let moved = missing.min(self.ammo_reserve.max(0));
                self.clip_loaded += moved;
                self.ammo_reserve -= moved;
            }
        }
    }
}

/// Event: выстрел произведён (для audio/VFX host'а)
#[derive(Event, Debug, Clone)]
pub struct WeaponFired {
    pub shooter: Entity,
    pub weapon: Entity,
    pub origin: Vec3,
    pub direction: Dir3,
    pub range: f32,
    /// В кого попал луч (любая entity, не только damageable)
    pub hit: Option<Entity>,
    pub hit_point: Option<Vec3>,
}

/// Spawn оружия, лежащего в мире
///
/// Невалидный config логируется и заменяется default'ом.
pub fn spawn_weapon(commands: &mut Commands, config: WeaponConfig, transform: Transform) -> Entity {
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log_error(&format!("Invalid weapon config '{}': {} — using defaults", config.title, err));
            WeaponConfig::default()
        }
    };

    let title = config.title.clone();

    commands
        .spawn((
            transform,
            GlobalTransform::from(transform),
            Weapon::new(config),
            ProbeCollider::new(
                ProbeShape::Sphere { radius: 0.5 },
                HitCapability::Weapon { title },
            ),
            // Rapier body: свободное падение пока лежит в мире
            HeldState::Dropped.rigid_body(),
            Collider::cuboid(0.1, 0.15, 0.4),
        ))
        .id()
}
