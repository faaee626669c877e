//! Scene: the entity collections for one level, and their generation
//!
//! Placement is uniform random inside a per-kind margin. Minor overlaps are
//! fine for this genre, so there is no rejection sampling. Regeneration
//! replaces every collection; only the player carries over between levels.

use glam::Vec2;
use rand::Rng;

use crate::sim::boss::Boss;
use crate::sim::enemy::{self, Enemy};
use crate::sim::levels::LevelCounts;
use crate::sim::objects::{
    ExplosiveTrap, GroundEquipment, Hazard, HazardKind, Meteor, PowerUp, PowerUpKind, Treasure,
};
use crate::sim::state::IdCounter;

/// All level-owned entities. The player and projectiles live on `GameState`.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub enemies: Vec<Enemy>,
    pub boss: Option<Boss>,
    pub treasures: Vec<Treasure>,
    pub traps: Vec<ExplosiveTrap>,
    pub equipment: Vec<GroundEquipment>,
    pub meteors: Vec<Meteor>,
    pub power_ups: Vec<PowerUp>,
    pub hazards: Vec<Hazard>,
}

fn random_point(rng: &mut impl Rng, margin: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(margin..=(width - margin)),
        rng.random_range(margin..=(height - margin)),
    )
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the scene for `level` from the target `counts`, replacing
    /// all prior collections.
    pub fn generate(
        &mut self,
        level: u32,
        counts: LevelCounts,
        width: f32,
        height: f32,
        ids: &mut IdCounter,
        rng: &mut impl Rng,
    ) {
        self.clear_all();

        for _ in 0..counts.enemies {
            let pos = random_point(rng, 50.0, width, height);
            let kind = enemy::pick_kind(level, rng);
            self.enemies.push(Enemy::new(ids.next(), pos, kind, level));
        }

        if counts.boss {
            let pos = Vec2::new(width / 2.0, height / 2.0 - 100.0);
            self.boss = Some(Boss::new(ids.next(), pos, level));
        }

        for _ in 0..counts.treasures {
            let pos = random_point(rng, 40.0, width, height);
            let value = rng.random_range(10..=120);
            self.treasures.push(Treasure::new(ids.next(), pos, value));
        }

        for _ in 0..counts.traps {
            let pos = random_point(rng, 40.0, width, height);
            let blast_radius = rng.random_range(30.0..=60.0);
            let damage = rng.random_range(12..=36);
            self.traps
                .push(ExplosiveTrap::new(ids.next(), pos, blast_radius, damage));
        }

        // The occasional piece of salvage
        if rng.random_bool(0.6) {
            let pos = random_point(rng, 40.0, width, height);
            self.equipment.push(GroundEquipment::new(ids.next(), pos));
        }

        for _ in 0..counts.meteors {
            let pos = random_point(rng, 60.0, width, height);
            let size = Meteor::random_size(rng);
            self.meteors.push(Meteor::new(ids.next(), pos, size, rng));
        }

        for _ in 0..counts.power_ups {
            let pos = random_point(rng, 80.0, width, height);
            self.power_ups
                .push(PowerUp::new(ids.next(), pos, PowerUpKind::random(rng)));
        }

        for _ in 0..counts.hazards {
            let pos = random_point(rng, 80.0, width, height);
            self.hazards
                .push(Hazard::new(ids.next(), pos, HazardKind::random(rng)));
        }
    }

    pub fn clear_all(&mut self) {
        self.enemies.clear();
        self.boss = None;
        self.treasures.clear();
        self.traps.clear();
        self.equipment.clear();
        self.meteors.clear();
        self.power_ups.clear();
        self.hazards.clear();
    }

    /// The level is cleared once every enemy and the boss are gone.
    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty() && self.boss.is_none()
    }
}
