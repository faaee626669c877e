//! Regular enemies: a closed kind enum with per-kind stats and AI
//!
//! Three behavior families: melee chasers steer straight at the player,
//! ranged kiters hold a preferred distance and take aimed shots, artillery
//! barely moves and lobs slow heavy shells from long range.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::rotate_vec;
use crate::sim::levels::stat_multiplier;
use crate::sim::projectile::{Owner, Projectile};
use crate::sim::state::IdCounter;

/// The closed set of regular enemy kinds (the boss is its own type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Ground,
    Flyer,
    Artillery,
    Elite,
    Berserker,
    Guardian,
}

/// How an enemy kind behaves each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    MeleeChase,
    RangedKite { range: f32, cooldown: f32 },
    Artillery { range: f32, cooldown: f32 },
}

/// Base stats for one enemy kind, before level scaling.
#[derive(Debug, Clone, Copy)]
pub struct EnemyStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: f32,
    pub behavior: Behavior,
}

impl EnemyKind {
    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Ground => EnemyStats {
                hp: 60,
                attack: 12,
                defense: 3,
                speed: 80.0,
                behavior: Behavior::MeleeChase,
            },
            EnemyKind::Flyer => EnemyStats {
                hp: 45,
                attack: 10,
                defense: 1,
                speed: 110.0,
                behavior: Behavior::RangedKite {
                    range: 220.0,
                    cooldown: 1.6,
                },
            },
            EnemyKind::Artillery => EnemyStats {
                hp: 70,
                attack: 16,
                defense: 4,
                speed: 40.0,
                behavior: Behavior::Artillery {
                    range: 340.0,
                    cooldown: 2.8,
                },
            },
            EnemyKind::Elite => EnemyStats {
                hp: 90,
                attack: 15,
                defense: 5,
                speed: 95.0,
                behavior: Behavior::RangedKite {
                    range: 260.0,
                    cooldown: 2.0,
                },
            },
            EnemyKind::Berserker => EnemyStats {
                hp: 50,
                attack: 18,
                defense: 0,
                speed: 150.0,
                behavior: Behavior::MeleeChase,
            },
            EnemyKind::Guardian => EnemyStats {
                hp: 120,
                attack: 14,
                defense: 8,
                speed: 55.0,
                behavior: Behavior::RangedKite {
                    range: 180.0,
                    cooldown: 2.2,
                },
            },
        }
    }

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Ground => "ground",
            EnemyKind::Flyer => "flyer",
            EnemyKind::Artillery => "artillery",
            EnemyKind::Elite => "elite",
            EnemyKind::Berserker => "berserker",
            EnemyKind::Guardian => "guardian",
        }
    }
}

/// Weighted kind selection: tougher kinds unlock on later levels.
pub fn pick_kind(level: u32, rng: &mut impl Rng) -> EnemyKind {
    let mut pool: Vec<(EnemyKind, u32)> = vec![(EnemyKind::Ground, 3), (EnemyKind::Flyer, 3)];
    if level >= 3 {
        pool.push((EnemyKind::Artillery, 2));
    }
    if level >= 5 {
        pool.push((EnemyKind::Elite, 2));
    }
    if level >= 6 {
        pool.push((EnemyKind::Berserker, 2));
    }
    if level >= 8 {
        pool.push((EnemyKind::Guardian, 1));
    }

    let total: u32 = pool.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random_range(0..total);
    for (kind, weight) in pool {
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    EnemyKind::Ground
}

/// A hostile ship.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub kind: EnemyKind,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: f32,
    inv_timer: f32,
    shoot_timer: f32,
    /// Cleared once death rewards have been applied
    pub alive: bool,
}

impl Enemy {
    /// Spawn an enemy of `kind` scaled for `level`.
    pub fn new(id: u32, pos: Vec2, kind: EnemyKind, level: u32) -> Self {
        let stats = kind.stats();
        let mult = stat_multiplier(level);
        let hp = (stats.hp as f32 * mult).round() as i32;
        Self {
            id,
            pos,
            radius: ENEMY_RADIUS,
            kind,
            hp,
            max_hp: hp,
            attack: (stats.attack as f32 * mult).round() as i32,
            defense: (stats.defense as f32 * mult).round() as i32,
            speed: stats.speed,
            inv_timer: 0.0,
            shoot_timer: 0.0,
            alive: true,
        }
    }

    /// Advance AI by one tick. Shooter kinds may return a projectile.
    pub fn update(
        &mut self,
        dt: f32,
        player_pos: Vec2,
        ids: &mut IdCounter,
        rng: &mut impl Rng,
    ) -> Option<Projectile> {
        if self.hp <= 0 {
            return None;
        }

        self.inv_timer = (self.inv_timer - dt).max(0.0);
        self.shoot_timer = (self.shoot_timer - dt).max(0.0);

        let to_player = player_pos - self.pos;
        let dist = to_player.length();
        let dir = to_player.normalize_or_zero();

        match self.kind.stats().behavior {
            Behavior::MeleeChase => {
                self.pos += dir * self.speed * dt;
                None
            }
            Behavior::RangedKite { range, cooldown } => {
                // Hold near the preferred range: close in from outside,
                // back off when the player pushes inside 60% of it
                if dist > range {
                    self.pos += dir * self.speed * dt;
                } else if dist < range * 0.6 {
                    self.pos -= dir * self.speed * dt;
                }
                self.try_shoot(dist <= range, cooldown, dir, 320.0, 0.06, ids, rng)
            }
            Behavior::Artillery { range, cooldown } => {
                if dist > range {
                    self.pos += dir * self.speed * dt;
                }
                self.try_shoot(dist <= range, cooldown, dir, 240.0, 0.12, ids, rng)
            }
        }
    }

    fn try_shoot(
        &mut self,
        in_range: bool,
        cooldown: f32,
        dir: Vec2,
        speed: f32,
        aim_error: f32,
        ids: &mut IdCounter,
        rng: &mut impl Rng,
    ) -> Option<Projectile> {
        if !in_range || self.shoot_timer > 0.0 || dir == Vec2::ZERO {
            return None;
        }
        self.shoot_timer = cooldown;
        let jitter = rng.random_range(-aim_error..=aim_error);
        Some(Projectile::aimed(
            ids.next(),
            self.pos,
            rotate_vec(dir, jitter),
            speed,
            self.attack,
            Owner::Enemy,
        ))
    }

    /// Apply damage with flat defense mitigation and a short per-hit
    /// invulnerability window. Returns the damage dealt.
    pub fn receive_damage(&mut self, amount: i32) -> i32 {
        if self.inv_timer > 0.0 {
            return 0;
        }
        let dealt = (amount - self.defense).max(0);
        self.hp -= dealt;
        self.inv_timer = 0.15;
        dealt
    }
}
