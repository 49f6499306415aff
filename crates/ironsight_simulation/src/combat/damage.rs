//! Damage и смерть
//!
//! Единый путь урона для hitscan попаданий и внешних источников
//! (`ApplyDamage` event от host'а: ловушки, падение, скрипты).
//! Смерть игрока — обычный переход состояния (`Dead` marker), не abort.

use bevy::prelude::*;

use crate::components::{Health, Locomotion};
use crate::logger::{log, log_info, log_warning};

/// Event: урон нанесён
///
/// Генерируется после применения урона к Health (для UI, звуков, hit markers).
#[derive(Event, Debug, Clone, PartialEq)]
pub struct DamageDealt {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub damage: u32,
    pub target_died: bool,
}

/// Event: entity умерла (Health → 0)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Event: запрос урона извне (TakeDamage / Kill)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ApplyDamage {
    pub target: Entity,
    pub attacker: Option<Entity>,
    pub amount: DamageAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageAmount {
    Points(u32),
    /// Kill: обнуляет health независимо от текущего значения
    Lethal,
}

impl ApplyDamage {
    pub fn points(target: Entity, amount: u32) -> Self {
        Self {
            target,
            attacker: None,
            amount: DamageAmount::Points(amount),
        }
    }

    pub fn lethal(target: Entity) -> Self {
        Self {
            target,
            attacker: None,
            amount: DamageAmount::Lethal,
        }
    }
}

/// Компонент-маркер: entity мертва
///
/// Player systems пропускают `Dead` игрока. Деспавна нет.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Dead;

/// Применяет урон к Health, возвращает событие для DamageDealt
pub fn deal_damage(
    health: &mut Health,
    target: Entity,
    attacker: Option<Entity>,
    amount: DamageAmount,
) -> DamageDealt {
    let before = health.current;
    let target_died = match amount {
        DamageAmount::Points(points) => health.take_damage(points),
        DamageAmount::Lethal => health.kill(),
    };

    DamageDealt {
        attacker,
        target,
        damage: before - health.current,
        target_died,
    }
}

/// System: обработка `ApplyDamage` запросов
pub fn process_damage_requests(
    mut requests: EventReader<ApplyDamage>,
    mut targets: Query<&mut Health>,
    mut dealt_events: EventWriter<DamageDealt>,
    mut died_events: EventWriter<EntityDied>,
) {
    for request in requests.read() {
        let Ok(mut health) = targets.get_mut(request.target) else {
            log_warning(&format!(
                "ApplyDamage: target {:?} has no Health component",
                request.target
            ));
            continue;
        };

        let dealt = deal_damage(&mut health, request.target, request.attacker, request.amount);

        if dealt.target_died {
            died_events.write(EntityDied {
                entity: request.target,
                killer: request.attacker,
            });
        }

        log(&format!(
            "ApplyDamage {:?}: -{} (HP: {})",
            request.target, dealt.damage, health.current
        ));
        dealt_events.write(dealt);
    }
}

/// System: смерть → `Dead` marker, остановка locomotion
pub fn handle_deaths(
    mut commands: Commands,
    mut death_events: EventReader<EntityDied>,
    mut bodies: Query<&mut Locomotion>,
) {
    for event in death_events.read() {
        if let Ok(mut locomotion) = bodies.get_mut(event.entity) {
            locomotion.halt();
        }

        if let Ok(mut entity_commands) = commands.get_entity(event.entity) {
            entity_commands.insert(Dead);
        }

        log_info(&format!("☠️ Entity {:?} died (killer: {:?})", event.entity, event.killer));
    }
}
