//! Read-only render snapshots
//!
//! The renderer is an external collaborator: each frame it captures a
//! snapshot of positions, radii and display fractions and draws from that.
//! Nothing here can mutate the simulation.

use glam::Vec2;

use crate::sim::enemy::EnemyKind;
use crate::sim::levels;
use crate::sim::objects::{HazardKind, PowerUpKind};
use crate::sim::projectile::{Owner, SpecialEffect};
use crate::sim::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    /// 0..1 hull fraction
    pub hp_fraction: f32,
    pub shield: i32,
    pub invulnerable: bool,
    pub super_charges: u32,
    pub level: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct EnemyView {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: EnemyKind,
    pub hp_fraction: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct WeakPointView {
    /// Offset from the boss center
    pub offset: Vec2,
    pub radius: f32,
    pub hit_points: i32,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct BossView {
    pub pos: Vec2,
    pub radius: f32,
    pub charging_laser: bool,
    /// Laser charge progress 0..1
    pub laser_progress: f32,
    /// Display-only health fraction derived from weak-point integrity
    pub health_fraction: f32,
    pub weak_points: [WeakPointView; 4],
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub radius: f32,
    pub owner: Owner,
    pub effect: Option<SpecialEffect>,
}

#[derive(Debug, Clone, Copy)]
pub struct MeteorView {
    pub pos: Vec2,
    pub radius: f32,
    pub size: u8,
    pub rotation: f32,
}

/// A minimal marker for static circle-shaped objects.
#[derive(Debug, Clone, Copy)]
pub struct MarkerView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct PickupView {
    pub pos: Vec2,
    pub radius: f32,
    pub power_up: Option<PowerUpKind>,
    pub hazard: Option<HazardKind>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub level: u32,
    pub stellar_name: &'static str,
    pub score: i64,
    pub gold: i32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub projectiles: Vec<ProjectileView>,
    pub meteors: Vec<MeteorView>,
    pub treasures: Vec<MarkerView>,
    pub traps: Vec<MarkerView>,
    pub equipment: Vec<MarkerView>,
    pub pickups: Vec<PickupView>,
}

fn fraction(current: i32, max: i32) -> f32 {
    (current.max(0) as f32 / max.max(1) as f32).min(1.0)
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        let scene = &state.scene;

        let boss = scene.boss.as_ref().map(|b| BossView {
            pos: b.pos,
            radius: b.radius,
            charging_laser: b.is_charging_laser(),
            laser_progress: b.laser_progress(),
            health_fraction: b.display_health_fraction(),
            weak_points: std::array::from_fn(|i| {
                let wp = &b.weak_points[i];
                WeakPointView {
                    offset: wp.offset,
                    radius: wp.radius,
                    hit_points: wp.hit_points.max(0),
                    destroyed: wp.destroyed,
                }
            }),
        });

        let projectiles = state
            .player_projectiles
            .iter()
            .chain(state.enemy_projectiles.iter())
            .map(|p| ProjectileView {
                pos: p.pos,
                radius: p.radius,
                owner: p.owner,
                effect: p.effect,
            })
            .collect();

        let pickups = scene
            .power_ups
            .iter()
            .map(|pu| PickupView {
                pos: pu.pos,
                radius: pu.radius,
                power_up: Some(pu.kind),
                hazard: None,
            })
            .chain(scene.hazards.iter().map(|hz| PickupView {
                pos: hz.pos,
                radius: hz.radius,
                power_up: None,
                hazard: Some(hz.kind),
            }))
            .collect();

        Self {
            phase: state.phase,
            level: state.level,
            stellar_name: levels::stellar_name(state.level),
            score: state.score,
            gold: player.gold,
            player: PlayerView {
                pos: player.pos,
                radius: player.radius,
                hp_fraction: fraction(player.hp, player.max_hp),
                shield: player.shield,
                invulnerable: player.is_invulnerable(),
                super_charges: player.super_charges,
                level: player.level,
            },
            enemies: scene
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    radius: e.radius,
                    kind: e.kind,
                    hp_fraction: fraction(e.hp, e.max_hp),
                })
                .collect(),
            boss,
            projectiles,
            meteors: scene
                .meteors
                .iter()
                .map(|m| MeteorView {
                    pos: m.pos,
                    radius: m.radius,
                    size: m.size,
                    rotation: m.rotation,
                })
                .collect(),
            treasures: scene
                .treasures
                .iter()
                .map(|t| MarkerView {
                    pos: t.pos,
                    radius: t.radius,
                })
                .collect(),
            traps: scene
                .traps
                .iter()
                .map(|t| MarkerView {
                    pos: t.pos,
                    radius: t.radius,
                })
                .collect(),
            equipment: scene
                .equipment
                .iter()
                .map(|e| MarkerView {
                    pos: e.pos,
                    radius: e.radius,
                })
                .collect(),
            pickups,
        }
    }
}
