//! Projectiles fired by the player's weapons and by enemies
//!
//! One canonical construction path (position + velocity + damage + owner);
//! call sites that think in direction + speed go through [`Projectile::aimed`].

use glam::Vec2;

use crate::consts::*;

/// Which side fired a projectile. Collision passes filter targets by owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Player,
    Enemy,
}

/// Special behavior markers carried by some weapon archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialEffect {
    /// Passes through targets instead of despawning on hit
    Penetrating,
    /// Explosive payload (missiles)
    Explosive,
    /// High-velocity precision beam (also marks boss laser bolts)
    Laser,
    /// Area shot with an enlarged hitbox
    Plasma,
}

/// A moving, damage-carrying, lifetime-bounded entity.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub damage: i32,
    pub owner: Owner,
    /// Seconds remaining before the projectile expires
    pub lifetime: f32,
    pub effect: Option<SpecialEffect>,
    pub active: bool,
}

impl Projectile {
    /// Canonical constructor: explicit velocity vector.
    pub fn new(id: u32, pos: Vec2, vel: Vec2, damage: i32, owner: Owner) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: PROJECTILE_RADIUS,
            damage,
            owner,
            lifetime: PROJECTILE_LIFETIME,
            effect: None,
            active: true,
        }
    }

    /// Derive velocity from an aim direction and speed at the call site.
    pub fn aimed(id: u32, pos: Vec2, dir: Vec2, speed: f32, damage: i32, owner: Owner) -> Self {
        Self::new(id, pos, dir.normalize_or_zero() * speed, damage, owner)
    }

    pub fn with_effect(mut self, effect: SpecialEffect) -> Self {
        if effect == SpecialEffect::Plasma {
            self.radius *= 1.5;
        }
        self.effect = Some(effect);
        self
    }

    /// Integrate position and burn lifetime. Deactivates on expiry.
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.active = false;
        }
    }

    /// Whether the projectile has left the world plus its culling margin.
    pub fn out_of_bounds(&self, width: f32, height: f32) -> bool {
        let margin = match self.owner {
            Owner::Player => PLAYER_SHOT_MARGIN,
            Owner::Enemy => ENEMY_SHOT_MARGIN,
        };
        self.pos.x < -margin
            || self.pos.x > width + margin
            || self.pos.y < -margin
            || self.pos.y > height + margin
    }

    /// A hit consumes the projectile unless it penetrates.
    pub fn register_hit(&mut self) {
        if self.effect != Some(SpecialEffect::Penetrating) {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_expiry() {
        let mut p = Projectile::new(1, Vec2::ZERO, Vec2::new(100.0, 0.0), 10, Owner::Player);
        for _ in 0..200 {
            p.advance(1.0 / 60.0);
        }
        assert!(!p.active);
        assert!(p.lifetime <= 0.0);
    }

    #[test]
    fn test_aimed_normalizes_direction() {
        let p = Projectile::aimed(1, Vec2::ZERO, Vec2::new(3.0, 4.0), 100.0, 10, Owner::Player);
        assert!((p.vel.length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_aimed_zero_direction_is_stationary() {
        let p = Projectile::aimed(1, Vec2::ZERO, Vec2::ZERO, 100.0, 10, Owner::Player);
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn test_register_hit_consumes_unless_penetrating() {
        let mut normal = Projectile::new(1, Vec2::ZERO, Vec2::X, 10, Owner::Player);
        normal.register_hit();
        assert!(!normal.active);

        let mut piercing = Projectile::new(2, Vec2::ZERO, Vec2::X, 10, Owner::Player)
            .with_effect(SpecialEffect::Penetrating);
        piercing.register_hit();
        assert!(piercing.active);
    }

    #[test]
    fn test_plasma_enlarges_hitbox() {
        let p = Projectile::new(1, Vec2::ZERO, Vec2::X, 10, Owner::Player)
            .with_effect(SpecialEffect::Plasma);
        assert!((p.radius - PROJECTILE_RADIUS * 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_bounds_margins() {
        let mut p = Projectile::new(1, Vec2::new(-20.0, 50.0), Vec2::ZERO, 10, Owner::Player);
        assert!(p.out_of_bounds(900.0, 600.0));
        // Enemy shots get a wider margin before culling
        p.owner = Owner::Enemy;
        assert!(!p.out_of_bounds(900.0, 600.0));
    }
}
