//! The player's ship
//!
//! Owns the damage intake pipeline, XP/leveling, the two-tier weapon system
//! (basic shot + charge-gated super shot), gold, inventory, and timed
//! power-up/hazard effects. All timers are plain decrementing floats ticked
//! once per frame.

use std::collections::HashMap;

use glam::Vec2;

use crate::characters::CharacterKind;
use crate::consts::*;
use crate::sim::weapons::WeaponKind;

/// Timed stat modifiers applied by power-ups and hazards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Engine boost, speed multiplier
    SpeedBoost,
    /// Bonus flat weapon damage
    WeaponBoost,
    /// Halved basic-shot cooldown
    Overdrive,
    /// Engine contamination, speed multiplier below 1
    EngineVirus,
    /// Weapon interference, flat damage penalty
    WeaponJam,
}

/// One running timed effect.
#[derive(Debug, Clone, Copy)]
pub struct ActiveEffect {
    /// Seconds remaining
    pub remaining: f32,
    /// Multiplier or flat amount depending on the effect kind
    pub magnitude: f32,
}

/// Carryable items picked up from the ground.
#[derive(Debug, Clone, Copy)]
pub enum Item {
    /// A defused explosive trap, sellable for scrap
    Trap { damage: i32, blast_radius: f32 },
    /// Salvaged equipment with a resale price
    Equipment { bonus_attack: i32, bonus_defense: i32, price: i32 },
}

/// The player's ship state.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub character: CharacterKind,
    pub pos: Vec2,
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub move_speed: f32,
    pub shoot_cooldown: f32,
    pub shoot_timer: f32,
    pub level: u32,
    pub xp: i32,
    pub xp_to_next: i32,
    pub gold: i32,
    pub inventory: Vec<Item>,
    /// Energy shield points, drained before hull HP
    pub shield: i32,
    pub effects: HashMap<EffectKind, ActiveEffect>,
    /// Post-hit invulnerability window in seconds (shop-extendable)
    pub invulnerable_window: f32,
    inv_timer: f32,
    pub super_charges: u32,
    pub super_timer: f32,
    pub weapon: WeaponKind,
}

impl Player {
    pub fn new(pos: Vec2, name: impl Into<String>, character: CharacterKind) -> Self {
        let stats = character.stats();
        Self {
            name: name.into(),
            character,
            pos,
            radius: PLAYER_RADIUS,
            hp: stats.hp,
            max_hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            move_speed: stats.move_speed,
            shoot_cooldown: stats.shoot_cooldown,
            shoot_timer: 0.0,
            level: 1,
            xp: 0,
            xp_to_next: 100,
            gold: 0,
            inventory: Vec::new(),
            shield: 0,
            effects: HashMap::new(),
            invulnerable_window: 0.6,
            inv_timer: 0.0,
            super_charges: 0,
            super_timer: 0.0,
            weapon: WeaponKind::default(),
        }
    }

    /// Tick down cooldowns, the invulnerability window, and timed effects.
    pub fn update_timers(&mut self, dt: f32) {
        self.shoot_timer = (self.shoot_timer - dt).max(0.0);
        self.inv_timer = (self.inv_timer - dt).max(0.0);
        self.super_timer = (self.super_timer - dt).max(0.0);

        for effect in self.effects.values_mut() {
            effect.remaining -= dt;
        }
        self.effects.retain(|_, e| e.remaining > 0.0);
    }

    /// Attack after weapon boost and interference modifiers, floored at 1.
    pub fn effective_attack(&self) -> i32 {
        let boost = self.effect_magnitude(EffectKind::WeaponBoost) as i32;
        let jam = self.effect_magnitude(EffectKind::WeaponJam) as i32;
        (self.attack + boost - jam).max(1)
    }

    /// Move speed after engine boost and contamination multipliers.
    pub fn effective_move_speed(&self) -> f32 {
        let mut speed = self.move_speed;
        if let Some(e) = self.effects.get(&EffectKind::SpeedBoost) {
            speed *= e.magnitude;
        }
        if let Some(e) = self.effects.get(&EffectKind::EngineVirus) {
            speed *= e.magnitude;
        }
        speed
    }

    /// Basic-shot cooldown for the equipped weapon, halved under overdrive.
    pub fn effective_cooldown(&self) -> f32 {
        let base = self.weapon.spec().cooldown;
        if self.effects.contains_key(&EffectKind::Overdrive) {
            base * 0.5
        } else {
            base
        }
    }

    fn effect_magnitude(&self, kind: EffectKind) -> f32 {
        self.effects.get(&kind).map_or(0.0, |e| e.magnitude)
    }

    /// Swap the equipped weapon archetype. Takes effect on the next shot.
    pub fn equip_weapon(&mut self, weapon: WeaponKind) {
        self.weapon = weapon;
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_timer <= 0.0
    }

    pub fn start_shoot_cooldown(&mut self) {
        self.shoot_timer = self.effective_cooldown();
    }

    pub fn can_super_shoot(&self) -> bool {
        self.super_charges >= SUPER_CHARGES_REQUIRED && self.super_timer <= 0.0
    }

    /// Spend the accumulated charges and start the super cooldown.
    pub fn consume_super(&mut self) {
        self.super_charges = 0;
        self.super_timer = SUPER_SHOT_COOLDOWN;
    }

    /// Credit one kill toward the super shot. Returns true once fully charged.
    pub fn add_kill(&mut self) -> bool {
        self.super_charges = (self.super_charges + 1).min(SUPER_CHARGES_REQUIRED);
        self.super_charges >= SUPER_CHARGES_REQUIRED
    }

    /// Apply incoming damage through the fixed intake pipeline:
    /// invulnerability window, then defense, then shield, then hull HP.
    ///
    /// Returns the post-defense damage actually absorbed (shield + hull);
    /// 0 when the window swallowed the hit.
    pub fn receive_damage(&mut self, amount: i32) -> i32 {
        if self.inv_timer > 0.0 {
            return 0;
        }
        let dealt = (amount - self.defense).max(0);
        let absorbed = dealt.min(self.shield);
        self.shield -= absorbed;
        self.hp -= dealt - absorbed;
        self.inv_timer = self.invulnerable_window;
        dealt
    }

    pub fn is_invulnerable(&self) -> bool {
        self.inv_timer > 0.0
    }

    /// Restore hull HP, clamped at max.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    /// Grant XP and resolve level-ups. A single large grant can produce
    /// several level-ups; every one of them applies in this call.
    ///
    /// Returns the number of levels gained.
    pub fn gain_xp(&mut self, amount: i32) -> u32 {
        self.xp += amount;
        let mut levels = 0;
        while self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            self.hp += 20;
            self.max_hp += 20;
            self.attack += 4;
            self.defense += 2;
            self.xp_to_next = (self.xp_to_next as f32 * 1.4).round() as i32;
            levels += 1;
        }
        levels
    }

    /// Refresh (or start) a timed effect.
    pub fn apply_timed_effect(&mut self, kind: EffectKind, duration: f32, magnitude: f32) {
        self.effects.insert(
            kind,
            ActiveEffect {
                remaining: duration,
                magnitude,
            },
        );
    }

    /// Sell the first inventory item for gold. No-op on an empty inventory.
    pub fn sell_first_item(&mut self) -> Option<i32> {
        if self.inventory.is_empty() {
            return None;
        }
        let value = match self.inventory.remove(0) {
            Item::Equipment { price, .. } => price / 2,
            Item::Trap { .. } => 10,
        };
        self.gold += value;
        Some(value)
    }

    /// Clamp the ship inside the playfield, leaving room for the HUD bars.
    pub fn clamp_to_bounds(&mut self, width: f32, height: f32) {
        self.pos.x = self.pos.x.clamp(self.radius, width - self.radius);
        self.pos.y = self.pos.y.clamp(
            self.radius + HUD_TOP_MARGIN,
            height - self.radius - HUD_BOTTOM_MARGIN,
        );
    }
}
