//! Selectable ship presets
//!
//! Each ship trades hull, firepower and engine output differently; the
//! preset only seeds the player's starting stats, everything after that
//! comes from leveling and the shop.

use serde::{Deserialize, Serialize};

/// The selectable ship classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterKind {
    #[default]
    Fighter,
    Tank,
    Sniper,
    Scout,
}

/// Base stats granted by a ship class.
#[derive(Debug, Clone, Copy)]
pub struct CharacterStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub move_speed: f32,
    pub shoot_cooldown: f32,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 4] = [
        CharacterKind::Fighter,
        CharacterKind::Tank,
        CharacterKind::Sniper,
        CharacterKind::Scout,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            CharacterKind::Fighter => "Star Fighter",
            CharacterKind::Tank => "Ironclad",
            CharacterKind::Sniper => "Marksman",
            CharacterKind::Scout => "Pathfinder",
        }
    }

    /// Short id used in score records.
    pub fn ship_type(self) -> &'static str {
        match self {
            CharacterKind::Fighter => "fighter",
            CharacterKind::Tank => "tank",
            CharacterKind::Sniper => "sniper",
            CharacterKind::Scout => "scout",
        }
    }

    pub fn stats(self) -> CharacterStats {
        match self {
            // Balanced attack and defense
            CharacterKind::Fighter => CharacterStats {
                hp: 120,
                attack: 20,
                defense: 6,
                move_speed: 180.0,
                shoot_cooldown: 0.30,
            },
            // High resistance, slow
            CharacterKind::Tank => CharacterStats {
                hp: 180,
                attack: 15,
                defense: 12,
                move_speed: 120.0,
                shoot_cooldown: 0.50,
            },
            // High damage, fragile
            CharacterKind::Sniper => CharacterStats {
                hp: 90,
                attack: 35,
                defense: 3,
                move_speed: 160.0,
                shoot_cooldown: 0.70,
            },
            // Fast and agile
            CharacterKind::Scout => CharacterStats {
                hp: 100,
                attack: 12,
                defense: 4,
                move_speed: 250.0,
                shoot_cooldown: 0.25,
            },
        }
    }
}
