//! Collision helpers shared by every pair pass
//!
//! Everything in this game collides as a circle, so the whole collision
//! vocabulary is one overlap test plus a couple of response helpers.

use glam::Vec2;

/// Two circles collide iff the distance between centers is within the sum of
/// their radii.
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    pos_a.distance_squared(pos_b) <= (radius_a + radius_b) * (radius_a + radius_b)
}

/// Proximity test with an extra reach, used for trap triggers and pickups.
#[inline]
pub fn within_range(pos_a: Vec2, pos_b: Vec2, range: f32) -> bool {
    pos_a.distance_squared(pos_b) <= range * range
}

/// Displacement pushing `target` directly away from `source`.
///
/// Returns zero when the two positions coincide, so a perfectly overlapping
/// pair produces no movement instead of a NaN.
#[inline]
pub fn knockback(target: Vec2, source: Vec2, distance: f32) -> Vec2 {
    (target - source).normalize_or_zero() * distance
}

/// Flat damage reduction: `max(0, raw - defense)`.
#[inline]
pub fn mitigate(raw: i32, defense: i32) -> i32 {
    (raw - defense).max(0)
}
