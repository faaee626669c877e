//! Weapon archetypes and projectile fan generation
//!
//! Each archetype is a row in a static data table: pellet count, spread
//! cone, speed and damage multipliers, cooldown, and an optional special
//! effect marker that rides on the projectile.

use glam::Vec2;

use crate::consts::*;
use crate::rotate_vec;
use crate::sim::projectile::{Owner, Projectile, SpecialEffect};
use crate::sim::state::IdCounter;

/// The closed set of player weapon archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeaponKind {
    #[default]
    Basic,
    RapidFire,
    Shotgun,
    Laser,
    Plasma,
    Missile,
}

/// Static tuning for one weapon archetype.
#[derive(Debug, Clone, Copy)]
pub struct WeaponSpec {
    pub name: &'static str,
    /// Seconds between shots
    pub cooldown: f32,
    pub pellets: u32,
    /// Full spread cone in radians (0 = perfectly straight)
    pub spread: f32,
    pub speed_mult: f32,
    pub damage_mult: f32,
    pub effect: Option<SpecialEffect>,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 6] = [
        WeaponKind::Basic,
        WeaponKind::RapidFire,
        WeaponKind::Shotgun,
        WeaponKind::Laser,
        WeaponKind::Plasma,
        WeaponKind::Missile,
    ];

    pub fn spec(self) -> WeaponSpec {
        match self {
            WeaponKind::Basic => WeaponSpec {
                name: "Pulse Cannon",
                cooldown: 0.35,
                pellets: 1,
                spread: 0.0,
                speed_mult: 1.0,
                damage_mult: 1.0,
                effect: None,
            },
            WeaponKind::RapidFire => WeaponSpec {
                name: "Autoblaster",
                cooldown: 0.175,
                pellets: 1,
                spread: 0.0,
                speed_mult: 1.5,
                damage_mult: 1.0,
                effect: None,
            },
            WeaponKind::Shotgun => WeaponSpec {
                name: "Scatter Array",
                cooldown: 0.8,
                pellets: 5,
                spread: std::f32::consts::PI / 6.0,
                speed_mult: 0.9,
                damage_mult: 0.7,
                effect: None,
            },
            WeaponKind::Laser => WeaponSpec {
                name: "Combat Laser",
                cooldown: 0.4,
                pellets: 1,
                spread: 0.0,
                speed_mult: 3.0,
                damage_mult: 1.0,
                effect: Some(SpecialEffect::Laser),
            },
            WeaponKind::Plasma => WeaponSpec {
                name: "Plasma Launcher",
                cooldown: 0.6,
                pellets: 1,
                spread: 0.0,
                speed_mult: 1.0,
                damage_mult: 1.0,
                effect: Some(SpecialEffect::Plasma),
            },
            WeaponKind::Missile => WeaponSpec {
                name: "Missile Rack",
                cooldown: 1.2,
                pellets: 1,
                spread: 0.0,
                speed_mult: 0.8,
                damage_mult: 1.5,
                effect: Some(SpecialEffect::Explosive),
            },
        }
    }
}

/// Produce the projectiles for one trigger pull of `kind`.
///
/// `attack` is the player's effective attack; each pellet carries
/// `round(attack * damage_mult)`.
pub fn fire(
    kind: WeaponKind,
    ids: &mut IdCounter,
    pos: Vec2,
    aim_dir: Vec2,
    attack: i32,
) -> Vec<Projectile> {
    let spec = kind.spec();
    let dir = aim_dir.normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }

    let damage = (attack as f32 * spec.damage_mult).round() as i32;
    let speed = PROJECTILE_SPEED * spec.speed_mult;
    let mut shots = Vec::with_capacity(spec.pellets as usize);

    for i in 0..spec.pellets {
        let offset = if spec.pellets > 1 {
            (i as i32 - (spec.pellets / 2) as i32) as f32 * (spec.spread / spec.pellets as f32)
        } else {
            0.0
        };
        let mut p = Projectile::aimed(
            ids.next(),
            pos,
            rotate_vec(dir, offset),
            speed,
            damage,
            Owner::Player,
        );
        if let Some(effect) = spec.effect {
            p = p.with_effect(effect);
        }
        shots.push(p);
    }

    shots
}

/// The charge-gated super shot: a fixed 5-projectile fan at double damage.
pub fn fire_super(ids: &mut IdCounter, pos: Vec2, aim_dir: Vec2, attack: i32) -> Vec<Projectile> {
    let dir = aim_dir.normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }

    SUPER_FAN_ANGLES
        .iter()
        .map(|&angle| {
            Projectile::aimed(
                ids.next(),
                pos,
                rotate_vec(dir, angle),
                SUPER_SHOT_SPEED,
                attack * 2,
                Owner::Player,
            )
        })
        .collect()
}
