//! Physics probe — синхронные ray queries по миру
//!
//! Архитектура:
//! - `PhysicsProbe` trait — контракт для gameplay систем (ground check,
//!   interaction, hitscan). Детерминированный, без side effects.
//! - `ProbeWorld` — встроенная реализация: bounding spheres + AABB,
//!   пересобирается каждый frame из `ProbeCollider` + `GlobalTransform`.
//!   Host с полноценным physics backend может подставить свой probe.
//! - `HitCapability` — что умеет entity, в которую попал луч.
//!   Заменяет runtime поиск интерфейсов на hit collider.

use bevy::math::bounding::{Aabb3d, BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::combat::Weapon;

/// Что можно сделать с entity, в которую попал probe
#[derive(Debug, Clone, PartialEq, Eq, Default, Reflect)]
pub enum HitCapability {
    /// Стена, пол, декорация
    #[default]
    Inert,
    /// Можно взаимодействовать (prompt с title)
    Interactable { title: String },
    /// Принимает урон (имеет `Health`)
    Damageable,
    /// Оружие на земле: interactable + можно подобрать
    Weapon { title: String },
}

impl HitCapability {
    /// Title для interaction prompt (Weapon тоже interactable)
    pub fn as_interactable(&self) -> Option<&str> {
        match self {
            HitCapability::Interactable { title } | HitCapability::Weapon { title } => {
                Some(title.as_str())
            }
            _ => None,
        }
    }

    pub fn is_damageable(&self) -> bool {
        matches!(self, HitCapability::Damageable)
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self, HitCapability::Weapon { .. })
    }
}

/// Форма probe collider'а (локальная, без вращения)
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum ProbeShape {
    Sphere { radius: f32 },
    /// Axis-aligned box; вращение entity игнорируется
    Box { half_extents: Vec3 },
}

/// Компонент: entity видна для probe queries
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ProbeCollider {
    pub shape: ProbeShape,
    pub capability: HitCapability,
}

impl ProbeCollider {
    pub fn new(shape: ProbeShape, capability: HitCapability) -> Self {
        Self { shape, capability }
    }

    pub fn solid_box(half_extents: Vec3) -> Self {
        Self::new(ProbeShape::Box { half_extents }, HitCapability::Inert)
    }
}

/// Результат probe
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeHit {
    pub entity: Entity,
    pub point: Vec3,
    pub distance: f32,
    pub capability: HitCapability,
}

/// Фильтр probe: какие entity игнорировать (свой body, оружие в руках)
#[derive(Debug, Clone, Default)]
pub struct ProbeFilter {
    excluded: Vec<Entity>,
}

impl ProbeFilter {
    pub fn excluding(entity: Entity) -> Self {
        Self {
            excluded: vec![entity],
        }
    }

    pub fn with_excluded(mut self, entity: Entity) -> Self {
        self.excluded.push(entity);
        self
    }

    pub fn allows(&self, entity: Entity) -> bool {
        !self.excluded.contains(&entity)
    }
}

/// Контракт physics probe
pub trait PhysicsProbe {
    /// Ближайшее препятствие на луче в пределах `max_distance`
    fn cast(&self, ray: Ray3d, max_distance: f32, filter: &ProbeFilter) -> Option<ProbeHit>;
}

#[derive(Debug, Clone)]
struct ProbeVolume {
    entity: Entity,
    bounds: ProbeBounds,
    capability: HitCapability,
}

#[derive(Debug, Clone, Copy)]
enum ProbeBounds {
    Sphere(BoundingSphere),
    Box(Aabb3d),
}

/// Встроенный probe: world-space snapshot всех `ProbeCollider`
#[derive(Resource, Debug, Default)]
pub struct ProbeWorld {
    volumes: Vec<ProbeVolume>,
}

impl ProbeWorld {
    pub fn clear(&mut self) {
        self.volumes.clear();
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Добавить volume в world space
    pub fn insert(&mut self, entity: Entity, center: Vec3, shape: ProbeShape, capability: HitCapability) {
        let bounds = match shape {
            ProbeShape::Sphere { radius } => ProbeBounds::Sphere(BoundingSphere::new(center, radius)),
            ProbeShape::Box { half_extents } => ProbeBounds::Box(Aabb3d::new(center, half_extents)),
        };

        self.volumes.push(ProbeVolume {
            entity,
            bounds,
            capability,
        });
    }
}

impl PhysicsProbe for ProbeWorld {
    fn cast(&self, ray: Ray3d, max_distance: f32, filter: &ProbeFilter) -> Option<ProbeHit> {
        if max_distance <= 0.0 {
            return None;
        }

        let cast = RayCast3d::from_ray(ray, max_distance);

        // Ничья по дистанции → меньший Entity (volumes отсортированы при sync)
        let mut nearest: Option<(f32, &ProbeVolume)> = None;
        for volume in self.volumes.iter().filter(|v| filter.allows(v.entity)) {
            let distance = match &volume.bounds {
                ProbeBounds::Sphere(sphere) => cast.sphere_intersection_at(sphere),
                ProbeBounds::Box(aabb) => cast.aabb_intersection_at(aabb),
            };

            let Some(distance) = distance else {
                continue;
            };

            if nearest.is_none_or(|(best, _)| distance < best) {
                nearest = Some((distance, volume));
            }
        }

        nearest.map(|(distance, volume)| ProbeHit {
            entity: volume.entity,
            point: ray.get_point(distance),
            distance,
            capability: volume.capability.clone(),
        })
    }
}

/// System: пересборка `ProbeWorld` из ECS
///
/// Оружие в руках (`HeldState::Held`) в probe не участвует — как выключенная
/// коллизия у kinematic body в руке.
pub fn sync_probe_world(
    mut probe: ResMut<ProbeWorld>,
    colliders: Query<(Entity, &ProbeCollider, &GlobalTransform, Option<&Weapon>)>,
) {
    probe.clear();

    let mut sorted: Vec<_> = colliders
        .iter()
        .filter(|(_, _, _, weapon)| !weapon.is_some_and(|w| w.is_held()))
        .collect();
    sorted.sort_by_key(|(entity, ..)| *entity);

    for (entity, collider, transform, _) in sorted {
        probe.insert(
            entity,
            transform.translation(),
            collider.shape,
            collider.capability.clone(),
        );
    }
}
