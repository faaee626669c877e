//! World objects: treasure, explosive traps, ground equipment, meteors,
//! and the power-up/hazard pickups
//!
//! Meteors are the only ones with physics: they bounce off the world edges
//! with damping and fragment when shot.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::sim::player::{EffectKind, Player};
use crate::sim::state::IdCounter;

/// Collectable currency. Grants gold and a slice of XP.
#[derive(Debug, Clone)]
pub struct Treasure {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub value: i32,
}

impl Treasure {
    pub fn new(id: u32, pos: Vec2, value: i32) -> Self {
        Self {
            id,
            pos,
            radius: TREASURE_RADIUS,
            value,
        }
    }
}

/// One-shot area-damage trap. Detonates on proximity to any entity.
#[derive(Debug, Clone)]
pub struct ExplosiveTrap {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub blast_radius: f32,
    pub damage: i32,
}

impl ExplosiveTrap {
    pub fn new(id: u32, pos: Vec2, blast_radius: f32, damage: i32) -> Self {
        Self {
            id,
            pos,
            radius: TRAP_RADIUS,
            blast_radius,
            damage,
        }
    }
}

/// Salvageable equipment lying on the ground.
#[derive(Debug, Clone)]
pub struct GroundEquipment {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub bonus_attack: i32,
    pub bonus_defense: i32,
    pub price: i32,
}

impl GroundEquipment {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            radius: EQUIPMENT_RADIUS,
            bonus_attack: 4,
            bonus_defense: 2,
            price: 40,
        }
    }
}

/// A drifting rock hazard. Bounces off the world bounds and fragments when
/// shot (sizes 2-3) or shatters outright (size 1).
#[derive(Debug, Clone)]
pub struct Meteor {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// 1 = small, 2 = medium, 3 = large
    pub size: u8,
    pub damage: i32,
    pub vel: Vec2,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub alive: bool,
}

/// (radius, contact damage, max drift speed px/s) per size class
fn meteor_props(size: u8) -> (f32, i32, f32) {
    match size {
        1 => (15.0, 15, 120.0),
        2 => (25.0, 25, 90.0),
        _ => (35.0, 35, 60.0),
    }
}

impl Meteor {
    pub fn new(id: u32, pos: Vec2, size: u8, rng: &mut impl Rng) -> Self {
        let (radius, damage, max_speed) = meteor_props(size);
        Self {
            id,
            pos,
            radius,
            size,
            damage,
            vel: Vec2::new(
                rng.random_range(-max_speed..=max_speed),
                rng.random_range(-max_speed..=max_speed),
            ),
            rotation: 0.0,
            rotation_speed: rng.random_range(-2.0..=2.0),
            alive: true,
        }
    }

    /// Weighted size roll, biased toward small rocks.
    pub fn random_size(rng: &mut impl Rng) -> u8 {
        const SIZES: [u8; 4] = [1, 1, 2, 3];
        SIZES[rng.random_range(0..SIZES.len())]
    }

    /// Integrate velocity and reflect off each world edge, damping the
    /// reflected axis by 0.8.
    pub fn advance(&mut self, dt: f32, width: f32, height: f32) {
        self.pos += self.vel * dt;
        self.rotation += self.rotation_speed * dt;

        let (min_x, max_x) = (self.radius, width - self.radius);
        if self.pos.x < min_x {
            self.pos.x = 2.0 * min_x - self.pos.x;
            self.vel.x = -self.vel.x * 0.8;
        } else if self.pos.x > max_x {
            self.pos.x = 2.0 * max_x - self.pos.x;
            self.vel.x = -self.vel.x * 0.8;
        }

        let (min_y, max_y) = (self.radius, height - self.radius);
        if self.pos.y < min_y {
            self.pos.y = 2.0 * min_y - self.pos.y;
            self.vel.y = -self.vel.y * 0.8;
        } else if self.pos.y > max_y {
            self.pos.y = 2.0 * max_y - self.pos.y;
            self.vel.y = -self.vel.y * 0.8;
        }

        // Reflection can't rescue a rock that spawned far outside; keep the
        // position finite either way
        self.pos.x = self.pos.x.clamp(min_x.min(max_x), max_x.max(min_x));
        self.pos.y = self.pos.y.clamp(min_y.min(max_y), max_y.max(min_y));
    }

    /// Split into two size-1 fragments at small random offsets.
    pub fn fragment(&self, ids: &mut IdCounter, rng: &mut impl Rng) -> [Meteor; 2] {
        let mut spawn = || {
            let offset = Vec2::new(rng.random_range(-20.0..=20.0), rng.random_range(-20.0..=20.0));
            Meteor::new(ids.next(), self.pos + offset, 1, rng)
        };
        [spawn(), spawn()]
    }
}

/// Beneficial pickups with timed or instant effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// +50 shield points
    EnergyShield,
    /// Move speed x1.5 for 12s
    SpeedBoost,
    /// +10 weapon damage for 20s
    WeaponBoost,
    /// Instant +40 hull repair
    NanoRepair,
    /// Half basic-shot cooldown for 8s
    Overdrive,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 5] = [
        PowerUpKind::EnergyShield,
        PowerUpKind::SpeedBoost,
        PowerUpKind::WeaponBoost,
        PowerUpKind::NanoRepair,
        PowerUpKind::Overdrive,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Apply this pickup's effect to the player.
    pub fn apply(self, player: &mut Player) {
        match self {
            PowerUpKind::EnergyShield => player.shield += 50,
            PowerUpKind::SpeedBoost => player.apply_timed_effect(EffectKind::SpeedBoost, 12.0, 1.5),
            PowerUpKind::WeaponBoost => {
                player.apply_timed_effect(EffectKind::WeaponBoost, 20.0, 10.0)
            }
            PowerUpKind::NanoRepair => {
                player.heal(40);
            }
            PowerUpKind::Overdrive => player.apply_timed_effect(EffectKind::Overdrive, 8.0, 0.5),
        }
    }
}

/// Harmful pickups mirroring the power-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    /// -30 shield points
    ShieldDrain,
    /// Move speed x0.6 for 15s
    EngineVirus,
    /// -8 weapon damage for 12s
    WeaponJam,
    /// Instant 25 damage through the intake pipeline
    CosmicRadiation,
}

impl HazardKind {
    pub const ALL: [HazardKind; 4] = [
        HazardKind::ShieldDrain,
        HazardKind::EngineVirus,
        HazardKind::WeaponJam,
        HazardKind::CosmicRadiation,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Apply this hazard to the player. Returns the damage dealt (nonzero
    /// only for radiation), so the caller can tag the death cause.
    pub fn apply(self, player: &mut Player) -> i32 {
        match self {
            HazardKind::ShieldDrain => {
                player.shield = (player.shield - 30).max(0);
                0
            }
            HazardKind::EngineVirus => {
                player.apply_timed_effect(EffectKind::EngineVirus, 15.0, 0.6);
                0
            }
            HazardKind::WeaponJam => {
                player.apply_timed_effect(EffectKind::WeaponJam, 12.0, 8.0);
                0
            }
            HazardKind::CosmicRadiation => player.receive_damage(25),
        }
    }
}

/// A glowing pickup on the field, either helpful or hostile.
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(id: u32, pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            id,
            pos,
            radius: PICKUP_RADIUS,
            kind,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub kind: HazardKind,
}

impl Hazard {
    pub fn new(id: u32, pos: Vec2, kind: HazardKind) -> Self {
        Self {
            id,
            pos,
            radius: PICKUP_RADIUS,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::CharacterKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_meteor_reflects_with_damping() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut m = Meteor::new(1, Vec2::new(20.0, 300.0), 1, &mut rng);
        m.vel = Vec2::new(-100.0, 0.0);

        // Drive it into the left wall
        for _ in 0..30 {
            m.advance(1.0 / 60.0, WORLD_WIDTH, WORLD_HEIGHT);
        }
        assert!(m.vel.x > 0.0, "velocity should reverse off the wall");
        assert!((m.vel.x - 80.0).abs() < 1.0, "reflected axis damped to ~80%");
        assert!(m.pos.x >= m.radius);
    }

    #[test]
    fn test_meteor_size_properties() {
        let mut rng = Pcg32::seed_from_u64(3);
        let small = Meteor::new(1, Vec2::new(100.0, 100.0), 1, &mut rng);
        let large = Meteor::new(2, Vec2::new(100.0, 100.0), 3, &mut rng);
        assert_eq!((small.radius, small.damage), (15.0, 15));
        assert_eq!((large.radius, large.damage), (35.0, 35));
    }

    #[test]
    fn test_fragments_are_small_and_nearby() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ids = IdCounter::default();
        let m = Meteor::new(1, Vec2::new(300.0, 300.0), 3, &mut rng);
        let frags = m.fragment(&mut ids, &mut rng);
        for f in &frags {
            assert_eq!(f.size, 1);
            assert!(f.pos.distance(m.pos) <= 20.0 * std::f32::consts::SQRT_2 + 1e-3);
        }
        assert_ne!(frags[0].id, frags[1].id);
    }

    #[test]
    fn test_power_up_effects() {
        let mut p = Player::new(Vec2::ZERO, "t", CharacterKind::Fighter);
        PowerUpKind::EnergyShield.apply(&mut p);
        assert_eq!(p.shield, 50);

        p.hp = 50;
        PowerUpKind::NanoRepair.apply(&mut p);
        assert_eq!(p.hp, 90);

        let base_speed = p.move_speed;
        PowerUpKind::SpeedBoost.apply(&mut p);
        assert!(p.effective_move_speed() > base_speed);
    }

    #[test]
    fn test_hazard_effects() {
        let mut p = Player::new(Vec2::ZERO, "t", CharacterKind::Fighter);
        p.shield = 20;
        // Drain floors at zero
        assert_eq!(HazardKind::ShieldDrain.apply(&mut p), 0);
        assert_eq!(p.shield, 0);

        let hp_before = p.hp;
        let dealt = HazardKind::CosmicRadiation.apply(&mut p);
        assert_eq!(dealt, 25 - p.defense);
        assert_eq!(p.hp, hp_before - dealt);
    }

    #[test]
    fn test_weighted_size_distribution_favors_small() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..400 {
            counts[Meteor::random_size(&mut rng) as usize] += 1;
        }
        assert!(counts[1] > counts[2]);
        assert!(counts[1] > counts[3]);
    }
}
