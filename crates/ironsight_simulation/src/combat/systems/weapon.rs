//! Weapon systems: per-frame tick + применение результата выстрела

use bevy::prelude::*;

use crate::combat::{deal_damage, DamageAmount, DamageDealt, EntityDied, Shot, Weapon, WeaponFired};
use crate::components::Health;
use crate::logger::{log, log_warning};

/// System: cooldown + tracer для ВСЕХ оружий (выбранных, спрятанных, лежащих)
pub fn tick_weapons(mut weapons: Query<&mut Weapon>, time: Res<Time>) {
    let delta = time.delta_secs();

    for mut weapon in weapons.iter_mut() {
        weapon.tick(delta);
    }
}

/// Применяет урон по выстрелу и пишет события
///
/// Ровно одно применение урона на выстрел, только для damageable попадания.
pub fn resolve_shot(
    shooter: Entity,
    weapon: Entity,
    shot: &Shot,
    targets: &mut Query<&mut Health>,
    fired_events: &mut EventWriter<WeaponFired>,
    dealt_events: &mut EventWriter<DamageDealt>,
    died_events: &mut EventWriter<EntityDied>,
) {
    fired_events.write(WeaponFired {
        shooter,
        weapon,
        origin: shot.ray.origin,
        direction: shot.ray.direction,
        range: shot.range,
        hit: shot.hit.as_ref().map(|hit| hit.entity),
        hit_point: shot.hit.as_ref().map(|hit| hit.point),
    });

    let Some(target) = shot.damage_target() else {
        return;
    };

    let Ok(mut health) = targets.get_mut(target) else {
        log_warning(&format!(
            "Shot hit damageable {:?} without Health component",
            target
        ));
        return;
    };

    let dealt = deal_damage(&mut health, target, Some(shooter), DamageAmount::Points(shot.damage));

    log(&format!(
        "🎯 {:?} hit {:?} for {} (HP: {})",
        shooter, target, dealt.damage, health.current
    ));

    if dealt.target_died {
        died_events.write(EntityDied {
            entity: target,
            killer: Some(shooter),
        });
    }
    dealt_events.write(dealt);
}
