//! Boss enemies: orbital movement, a charge-then-fire laser, and four
//! weak points that gate defeat
//!
//! The boss body is invulnerable to direct damage. Only destroying all four
//! weak points defeats it; the `hp` field merely feeds the display bar.

use glam::Vec2;

use crate::consts::*;
use crate::sim::projectile::{Owner, Projectile, SpecialEffect};
use crate::sim::state::IdCounter;
use crate::vec_from_angle;

/// Seconds of charge-up before the laser fires
pub const LASER_CHARGE_TIME: f32 = 2.0;
/// Seconds between laser volleys
pub const LASER_COOLDOWN: f32 = 4.0;
/// Bolts per volley, spaced along the beam direction
const LASER_BOLTS: u32 = 8;
const LASER_SPACING: f32 = 40.0;
const LASER_SPEED: f32 = 400.0;
/// Radius of the slow circular patrol around the spawn point
const ORBIT_RADIUS: f32 = 80.0;

/// One of the four destructible points on the boss hull.
#[derive(Debug, Clone, Copy)]
pub struct WeakPoint {
    /// Offset from the boss center
    pub offset: Vec2,
    pub radius: f32,
    pub hit_points: i32,
    pub destroyed: bool,
}

impl WeakPoint {
    fn new(offset: Vec2) -> Self {
        Self {
            offset,
            radius: WEAK_POINT_RADIUS,
            hit_points: 3,
            destroyed: false,
        }
    }

    /// Absolute position given the current boss center.
    pub fn position(&self, boss_pos: Vec2) -> Vec2 {
        boss_pos + self.offset
    }

    /// Apply one hit. Returns true when this hit destroyed the point.
    fn take_hit(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.hit_points -= 1;
        if self.hit_points <= 0 {
            self.destroyed = true;
            return true;
        }
        false
    }
}

/// Result of testing a projectile against the weak points.
#[derive(Debug, Clone, Copy)]
pub struct WeakPointHit {
    /// The hit reduced a point to zero and destroyed it
    pub point_destroyed: bool,
}

/// The level-gating boss ship.
#[derive(Debug, Clone)]
pub struct Boss {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub level: u32,
    /// Display-only health; defeat is decided by the weak points
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: f32,
    orbit_center: Vec2,
    orbit_timer: f32,
    laser_cooldown: f32,
    laser_charging: bool,
    laser_charge_timer: f32,
    laser_target: Vec2,
    pub weak_points: [WeakPoint; 4],
    pub defeated: bool,
}

impl Boss {
    /// Spawn a boss scaled for `level`. Levels past 10 continue from the
    /// level-10 baseline with much steeper per-level increments.
    pub fn new(id: u32, pos: Vec2, level: u32) -> Self {
        let (hp_bonus, attack_bonus, defense_bonus, speed_bonus) = if level <= 10 {
            (level * 20, level * 5, level * 2, level * 3)
        } else {
            let extra = level - 10;
            (
                10 * 20 + extra * 40,
                10 * 5 + extra * 12,
                10 * 2 + extra * 5,
                10 * 3 + extra * 6,
            )
        };

        let hp = 80 + hp_bonus as i32;
        Self {
            id,
            pos,
            radius: BOSS_RADIUS,
            level,
            hp,
            max_hp: hp,
            attack: 25 + attack_bonus as i32,
            defense: 8 + defense_bonus as i32,
            speed: 30.0 + speed_bonus as f32,
            orbit_center: pos,
            orbit_timer: 0.0,
            laser_cooldown: 0.0,
            laser_charging: false,
            laser_charge_timer: 0.0,
            laser_target: Vec2::ZERO,
            weak_points: [
                WeakPoint::new(Vec2::new(-25.0, -25.0)),
                WeakPoint::new(Vec2::new(25.0, -25.0)),
                WeakPoint::new(Vec2::new(-25.0, 25.0)),
                WeakPoint::new(Vec2::new(25.0, 25.0)),
            ],
            defeated: false,
        }
    }

    /// Advance movement and the laser state machine. Returns the bolts of a
    /// volley on the single tick the charge completes.
    pub fn update(&mut self, dt: f32, player_pos: Vec2, ids: &mut IdCounter) -> Vec<Projectile> {
        if self.defeated {
            return Vec::new();
        }

        self.update_movement(dt);
        self.update_laser(dt, player_pos, ids)
    }

    fn update_movement(&mut self, dt: f32) {
        self.orbit_timer += dt;
        // Slow circular patrol around the spawn point
        let angle = self.orbit_timer * 0.5;
        let target = self.orbit_center + vec_from_angle(angle) * ORBIT_RADIUS;

        let to_target = target - self.pos;
        if to_target.length() > 5.0 {
            self.pos += to_target.normalize_or_zero() * self.speed * 0.5 * dt;
        }
    }

    fn update_laser(&mut self, dt: f32, player_pos: Vec2, ids: &mut IdCounter) -> Vec<Projectile> {
        if self.laser_charging {
            self.laser_charge_timer += dt;
            // The charge crossing the threshold fires the volley exactly once:
            // the charging flag drops in the same branch
            if self.laser_charge_timer >= LASER_CHARGE_TIME {
                self.laser_charging = false;
                self.laser_charge_timer = 0.0;
                self.laser_cooldown = LASER_COOLDOWN;
                return self.fire_laser(ids);
            }
        } else if self.laser_cooldown <= 0.0 {
            // Lock the player's current position and start charging
            self.laser_charging = true;
            self.laser_charge_timer = 0.0;
            self.laser_target = player_pos;
        } else {
            self.laser_cooldown -= dt;
        }
        Vec::new()
    }

    /// Emit the beam as a line of fast bolts toward the locked target.
    fn fire_laser(&self, ids: &mut IdCounter) -> Vec<Projectile> {
        let dir = (self.laser_target - self.pos).normalize_or_zero();
        if dir == Vec2::ZERO {
            return Vec::new();
        }

        (0..LASER_BOLTS)
            .map(|i| {
                let start = self.pos + dir * (i as f32 * LASER_SPACING);
                Projectile::new(ids.next(), start, dir * LASER_SPEED, self.attack, Owner::Enemy)
                    .with_effect(SpecialEffect::Laser)
            })
            .collect()
    }

    /// Test a projectile against the weak-point hitboxes. The body itself is
    /// never a valid target, so a miss here means the shot flies on.
    pub fn try_weak_point_hit(&mut self, pos: Vec2, radius: f32) -> Option<WeakPointHit> {
        if self.defeated {
            return None;
        }
        for wp in &mut self.weak_points {
            if wp.destroyed {
                continue;
            }
            let wp_pos = self.pos + wp.offset;
            if wp_pos.distance_squared(pos) <= (wp.radius + radius) * (wp.radius + radius) {
                let point_destroyed = wp.take_hit();
                return Some(WeakPointHit { point_destroyed });
            }
        }
        None
    }

    pub fn remaining_weak_points(&self) -> usize {
        self.weak_points.iter().filter(|wp| !wp.destroyed).count()
    }

    /// Transition to defeated when every weak point is gone. Returns true
    /// exactly once, on the transition.
    pub fn check_defeat(&mut self) -> bool {
        if !self.defeated && self.remaining_weak_points() == 0 {
            self.defeated = true;
            self.hp = 0;
            return true;
        }
        false
    }

    pub fn is_charging_laser(&self) -> bool {
        self.laser_charging
    }

    /// Charge progress 0..1 for rendering.
    pub fn laser_progress(&self) -> f32 {
        if !self.laser_charging {
            return 0.0;
        }
        (self.laser_charge_timer / LASER_CHARGE_TIME).min(1.0)
    }

    /// Display health: remaining weak-point integrity, not body damage.
    pub fn display_health_fraction(&self) -> f32 {
        let total: i32 = self.weak_points.iter().map(|wp| wp.hit_points.max(0)).sum();
        total as f32 / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss() -> Boss {
        Boss::new(1, Vec2::new(450.0, 200.0), 2)
    }

    #[test]
    fn test_stat_scaling_by_level() {
        let b = Boss::new(1, Vec2::ZERO, 2);
        assert_eq!(b.hp, 80 + 40);
        assert_eq!(b.attack, 25 + 10);

        // Past level 10 the curve steepens: level 12 = level-10 bonus + 2*40
        let late = Boss::new(2, Vec2::ZERO, 12);
        assert_eq!(late.hp, 80 + 200 + 80);
        assert_eq!(late.attack, 25 + 50 + 24);
        assert_eq!(late.defense, 8 + 20 + 10);
    }

    #[test]
    fn test_body_hits_never_defeat() {
        let mut b = boss();
        // No matter what happens to the display hp, defeat needs weak points
        b.hp = -500;
        assert!(!b.check_defeat());
        assert!(!b.defeated);
    }

    #[test]
    fn test_weak_point_destruction_gates_defeat() {
        let mut b = boss();

        // Grind down three of the four points
        for wp_index in 0..3 {
            let target = b.pos + b.weak_points[wp_index].offset;
            for _ in 0..3 {
                b.try_weak_point_hit(target, 4.0).expect("weak point in reach");
            }
            assert!(b.weak_points[wp_index].destroyed);
            assert!(!b.check_defeat());
        }
        assert_eq!(b.remaining_weak_points(), 1);

        // Last point: two hits leave it alive, the third flips defeat
        let target = b.pos + b.weak_points[3].offset;
        b.try_weak_point_hit(target, 4.0);
        b.try_weak_point_hit(target, 4.0);
        assert!(!b.check_defeat());
        b.try_weak_point_hit(target, 4.0);

        assert!(b.check_defeat());
        assert!(b.defeated);
        assert_eq!(b.hp, 0);
        // The transition reports only once
        assert!(!b.check_defeat());
    }

    #[test]
    fn test_laser_fires_exactly_once_per_charge() {
        let mut b = boss();
        let mut ids = IdCounter::default();
        let player = Vec2::new(450.0, 500.0);
        let dt = 1.0 / 60.0;

        let mut volleys = 0;
        let mut ticks_until_first = 0;
        for tick in 0..((LASER_CHARGE_TIME / dt) as u32 + 10) {
            let bolts = b.update(dt, player, &mut ids);
            if !bolts.is_empty() {
                assert_eq!(bolts.len(), 8);
                assert!(bolts.iter().all(|p| p.effect == Some(SpecialEffect::Laser)));
                volleys += 1;
                ticks_until_first = tick;
            }
        }
        assert_eq!(volleys, 1);
        assert!(ticks_until_first as f32 * dt >= LASER_CHARGE_TIME - dt);
        // Cooldown holds the next charge back
        assert!(!b.is_charging_laser() || b.laser_progress() < 0.1);
    }

    #[test]
    fn test_laser_progress_range() {
        let mut b = boss();
        let mut ids = IdCounter::default();
        assert_eq!(b.laser_progress(), 0.0);
        // First update locks the target, the second accumulates charge
        b.update(1.0, Vec2::new(0.0, 500.0), &mut ids);
        b.update(1.0, Vec2::new(0.0, 500.0), &mut ids);
        let p = b.laser_progress();
        assert!(p > 0.0 && p <= 1.0);
        assert!(b.is_charging_laser());
    }

    #[test]
    fn test_display_health_tracks_weak_points() {
        let mut b = boss();
        assert!((b.display_health_fraction() - 1.0).abs() < 1e-6);
        let target = b.pos + b.weak_points[0].offset;
        b.try_weak_point_hit(target, 4.0);
        assert!((b.display_health_fraction() - 11.0 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_defeated_boss_ignores_hits_and_stops_acting() {
        let mut b = boss();
        b.defeated = true;
        let mut ids = IdCounter::default();
        assert!(b.try_weak_point_hit(b.pos + b.weak_points[0].offset, 4.0).is_none());
        assert!(b.update(1.0 / 60.0, Vec2::ZERO, &mut ids).is_empty());
    }
}
