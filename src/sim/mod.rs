//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module is pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (`GameState::rng`)
//! - Stable iteration order (entity vectors, ids allocated in order)
//! - No rendering, audio, or platform dependencies

pub mod boss;
pub mod collision;
pub mod enemy;
pub mod levels;
pub mod objects;
pub mod player;
pub mod projectile;
pub mod scene;
pub mod state;
pub mod tick;
pub mod view;
pub mod weapons;

pub use boss::{Boss, WeakPoint};
pub use collision::circles_overlap;
pub use enemy::{Enemy, EnemyKind};
pub use levels::{counts_for_level, is_boss_level, stat_multiplier};
pub use objects::{ExplosiveTrap, Hazard, HazardKind, Meteor, PowerUp, PowerUpKind, Treasure};
pub use player::{EffectKind, Item, Player};
pub use projectile::{Owner, Projectile, SpecialEffect};
pub use scene::Scene;
pub use state::{DeathCause, GameConfig, GameEvent, GamePhase, GameState, IdCounter};
pub use tick::{TickInput, tick};
pub use view::RenderSnapshot;
pub use weapons::WeaponKind;
