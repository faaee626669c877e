//! Level progression data: population tables and difficulty curves
//!
//! Everything here is a pure function of the level number, so the scene
//! generator and the enemy/boss constructors stay data-driven.

use crate::consts::*;

/// Regular enemies per level (index = level - 1), extended tier included.
const ENEMIES_PER_LEVEL: [u32; 18] = [
    6, 8, 10, 12, 15, 18, 20, 22, 25, 30, 32, 34, 36, 38, 40, 40, 40, 40,
];
/// Treasures per level.
const TREASURES_PER_LEVEL: [u32; 18] = [
    5, 6, 7, 8, 10, 12, 14, 16, 18, 20, 21, 22, 23, 24, 24, 24, 24, 24,
];
/// Traps per level.
const TRAPS_PER_LEVEL: [u32; 18] = [
    4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 19, 20, 21, 22, 22, 22, 22, 22,
];

/// Stellar bodies visited per level, for logs and the level banner.
const STELLAR_BODIES: [&str; 18] = [
    "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Neptune", "Pluto", "Betelgeuse", "Sirius",
    "Vega", "Altair", "Rigel", "Antares", "Polaris", "Deneb", "Arcturus", "Castor", "Pollux",
];

/// Every even level is gated by a boss.
#[inline]
pub fn is_boss_level(level: u32) -> bool {
    level % 2 == 0
}

/// Regular-enemy stat multiplier. Linear through level 10, then a steeper
/// late-game slope continuing from the level-10 value.
pub fn stat_multiplier(level: u32) -> f32 {
    if level <= 10 {
        1.0 + (level.max(1) - 1) as f32 * 0.15
    } else {
        (1.0 + 9.0 * 0.15) + (level - 10) as f32 * 0.25
    }
}

pub fn stellar_name(level: u32) -> &'static str {
    let idx = (level.clamp(1, EXTENDED_MAX_LEVELS) - 1) as usize;
    STELLAR_BODIES[idx]
}

/// Target object populations for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCounts {
    pub enemies: u32,
    pub treasures: u32,
    pub traps: u32,
    pub meteors: u32,
    pub power_ups: u32,
    pub hazards: u32,
    pub boss: bool,
}

/// Derive the populations for `level`. Boss levels halve the regular enemy
/// count (floor, minimum 1) to compensate for the boss; the smaller object
/// counts grow smoothly with level and are capped to bound per-frame cost.
pub fn counts_for_level(level: u32) -> LevelCounts {
    let level = level.clamp(1, EXTENDED_MAX_LEVELS);
    let idx = (level - 1) as usize;
    let boss = is_boss_level(level);

    let base_enemies = ENEMIES_PER_LEVEL[idx];
    let enemies = if boss {
        (base_enemies / 2).max(1)
    } else {
        base_enemies
    };

    let (meteors, power_ups, hazards) = if boss {
        (
            (1 + level / 3).min(3),
            (1 + level / 4).min(3),
            (1 + level / 5).min(2),
        )
    } else {
        (
            (2 + level / 2).min(4),
            (2 + level / 3).min(4),
            (1 + level / 4).min(3),
        )
    };

    LevelCounts {
        enemies,
        treasures: TREASURES_PER_LEVEL[idx],
        traps: TRAPS_PER_LEVEL[idx],
        meteors,
        power_ups,
        hazards,
        boss,
    }
}
