//! Stellar Odyssey - a top-down space action game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `characters`: Selectable ship presets
//! - `shop`: Between-level upgrade shop
//! - `highscores`: Top-10 leaderboard with JSON persistence
//!
//! Rendering, audio synthesis and input mapping are external collaborators:
//! the simulation consumes an abstract [`sim::TickInput`], exposes read-only
//! [`sim::RenderSnapshot`]s, and emits named [`sim::GameEvent`] audio cues.

pub mod characters;
pub mod highscores;
pub mod shop;
pub mod sim;

pub use characters::CharacterKind;
pub use highscores::Leaderboard;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 900.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Playfield insets reserved for the HUD bar and the health bar
    pub const HUD_TOP_MARGIN: f32 = 40.0;
    pub const HUD_BOTTOM_MARGIN: f32 = 30.0;

    /// Entity radii
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const PROJECTILE_RADIUS: f32 = 4.0;
    pub const TRAP_RADIUS: f32 = 12.0;
    pub const TREASURE_RADIUS: f32 = 10.0;
    pub const EQUIPMENT_RADIUS: f32 = 12.0;
    pub const PICKUP_RADIUS: f32 = 15.0;
    pub const BOSS_RADIUS: f32 = 30.0;
    pub const WEAK_POINT_RADIUS: f32 = 15.0;

    /// Projectile speeds (pixels/second)
    pub const PROJECTILE_SPEED: f32 = 480.0;
    pub const SUPER_SHOT_SPEED: f32 = 600.0;
    /// Projectile lifetime in seconds
    pub const PROJECTILE_LIFETIME: f32 = 2.5;
    /// Off-screen culling margins
    pub const PLAYER_SHOT_MARGIN: f32 = 10.0;
    pub const ENEMY_SHOT_MARGIN: f32 = 50.0;

    /// Experience system
    pub const XP_PER_KILL: i32 = 40;
    /// XP gained per treasure = value * this factor
    pub const XP_PER_TREASURE_VALUE: f32 = 0.1;
    /// XP multiplier for defeating a boss
    pub const BOSS_XP_MULTIPLIER: i32 = 5;

    /// Score values
    pub const KILL_SCORE: i64 = 30;
    pub const BOSS_SCORE_BONUS: i64 = 200;
    pub const POWERUP_SCORE: i64 = 25;
    pub const METEOR_DESTROY_SCORE: i64 = 15;
    pub const METEOR_FRAGMENT_SCORE: i64 = 10;
    pub const TRAP_SCORE_PENALTY: i64 = 10;
    pub const HAZARD_SCORE_PENALTY: i64 = 15;

    /// Level range (even levels spawn a boss)
    pub const MAX_LEVELS: u32 = 10;
    pub const EXTENDED_MAX_LEVELS: u32 = 18;

    /// Super shot
    pub const SUPER_CHARGES_REQUIRED: u32 = 4;
    pub const SUPER_SHOT_COOLDOWN: f32 = 2.0;
    /// Fan angles in radians around the aim direction
    pub const SUPER_FAN_ANGLES: [f32; 5] = [-0.4, -0.2, 0.0, 0.2, 0.4];
}

/// Unit vector for an angle in radians
#[inline]
pub fn vec_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Rotate a vector by an angle in radians
#[inline]
pub fn rotate_vec(v: Vec2, theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate_vec(Vec2::X, std::f32::consts::FRAC_PI_2);
        assert!((v.x).abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_normalizes_to_zero() {
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn normalize_or_zero_is_unit_or_zero(x in -1e4f32..1e4, y in -1e4f32..1e4) {
            let n = Vec2::new(x, y).normalize_or_zero();
            let len = n.length();
            prop_assert!(len.abs() < 1e-3 || (len - 1.0).abs() < 1e-3);
        }

        #[test]
        fn rotation_preserves_length(x in -1e3f32..1e3, y in -1e3f32..1e3, theta in -10.0f32..10.0) {
            let v = Vec2::new(x, y);
            let r = rotate_vec(v, theta);
            prop_assert!((v.length() - r.length()).abs() < v.length().max(1.0) * 1e-4);
        }
    }
}
