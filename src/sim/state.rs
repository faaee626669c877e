//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here: the player, the scene's
//! entity collections, both projectile lists, the seeded RNG, and the event
//! queue the shell drains for audio cues.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::characters::CharacterKind;
use crate::consts::*;
use crate::sim::levels::{self, counts_for_level};
use crate::sim::player::Player;
use crate::sim::projectile::Projectile;
use crate::sim::scene::Scene;

/// Monotonic entity-id allocator. Ids keep iteration deterministic and make
/// removal idempotent.
#[derive(Debug, Clone)]
pub struct IdCounter(u32);

impl Default for IdCounter {
    fn default() -> Self {
        Self(1)
    }
}

impl IdCounter {
    pub fn next(&mut self) -> u32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All enemies down; the shop opens before the next level
    LevelComplete,
    /// Run ended in defeat
    GameOver,
    /// Final level cleared
    Victory,
}

/// Named audio cues emitted by the simulation. The shell drains these each
/// frame; sound synthesis is not this crate's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LaserShot,
    SuperShot,
    Explosion,
    Damage,
    EnemyDeath,
    BossLaser,
    BossDefeat,
    LevelVictory,
    GameOver,
    Pickup,
    LevelUp,
}

/// What finally destroyed the player's ship, for the game-over report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    EnemyContact,
    BossContact,
    BossLaser,
    EnemyShot,
    TrapExplosion,
    MeteorCrash,
    CosmicRadiation,
}

impl DeathCause {
    pub fn message(self) -> &'static str {
        match self {
            DeathCause::EnemyContact => "Destroyed in a collision with an enemy ship",
            DeathCause::BossContact => "Crushed against the boss hull",
            DeathCause::BossLaser => "Vaporized by the boss laser",
            DeathCause::EnemyShot => "Shot down by enemy fire",
            DeathCause::TrapExplosion => "Caught in an explosive trap",
            DeathCause::MeteorCrash => "Hull breached by a meteor strike",
            DeathCause::CosmicRadiation => "Lethal dose of cosmic radiation",
        }
    }
}

/// Explicit world/run configuration; passed in rather than read from
/// globals.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    /// Unlocks levels 11-18 with the steeper late-game curves
    pub extended_levels: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            extended_levels: false,
        }
    }
}

impl GameConfig {
    pub fn max_level(&self) -> u32 {
        if self.extended_levels {
            EXTENDED_MAX_LEVELS
        } else {
            MAX_LEVELS
        }
    }
}

/// Complete simulation state for one run.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed, kept for reproducing a run
    pub seed: u64,
    pub rng: Pcg32,
    pub ids: IdCounter,
    pub phase: GamePhase,
    pub level: u32,
    pub score: i64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    pub scene: Scene,
    pub player_projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub events: Vec<GameEvent>,
    pub death_cause: Option<DeathCause>,
}

impl GameState {
    /// Start a fresh run at level 1.
    pub fn new(seed: u64, name: impl Into<String>, character: CharacterKind, config: GameConfig) -> Self {
        Self::with_start_level(seed, name, character, config, 1)
    }

    /// Start at an arbitrary level (arcade mode).
    pub fn with_start_level(
        seed: u64,
        name: impl Into<String>,
        character: CharacterKind,
        config: GameConfig,
        start_level: u32,
    ) -> Self {
        let center = Vec2::new(config.width / 2.0, config.height / 2.0);
        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ids: IdCounter::default(),
            phase: GamePhase::Playing,
            level: start_level.clamp(1, config.max_level()),
            score: 0,
            time_ticks: 0,
            player: Player::new(center, name, character),
            scene: Scene::new(),
            player_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            events: Vec::new(),
            death_cause: None,
        };
        state.load_level();
        state
    }

    /// Populate the scene for the current level and reset the projectiles.
    pub fn load_level(&mut self) {
        let counts = counts_for_level(self.level);
        let (w, h) = (self.config.width, self.config.height);
        self.scene
            .generate(self.level, counts, w, h, &mut self.ids, &mut self.rng);
        self.player_projectiles.clear();
        self.enemy_projectiles.clear();

        if counts.boss {
            log::info!(
                "Level {} ({}): BOSS + {} escorts",
                self.level,
                levels::stellar_name(self.level),
                counts.enemies
            );
        } else {
            log::info!(
                "Level {} ({}): {} enemies",
                self.level,
                levels::stellar_name(self.level),
                counts.enemies
            );
        }
    }

    /// Move on from a completed level. Ends the run in Victory past the
    /// final level.
    pub fn advance_level(&mut self) {
        self.level += 1;
        if self.level > self.config.max_level() {
            self.phase = GamePhase::Victory;
            log::info!("Run complete, final score {}", self.score);
        } else {
            self.load_level();
            self.phase = GamePhase::Playing;
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the queued audio cues to the shell.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::levels::counts_for_level;

    fn new_state(seed: u64) -> GameState {
        GameState::new(seed, "Test", CharacterKind::Fighter, GameConfig::default())
    }

    #[test]
    fn test_new_run_starts_populated() {
        let state = new_state(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(
            state.scene.enemies.len(),
            counts_for_level(1).enemies as usize
        );
        assert!(state.player_projectiles.is_empty());
    }

    #[test]
    fn test_advance_past_final_level_is_victory() {
        let mut state = new_state(42);
        state.level = state.config.max_level();
        state.advance_level();
        assert_eq!(state.phase, GamePhase::Victory);
    }

    #[test]
    fn test_extended_config_raises_cap() {
        let config = GameConfig {
            extended_levels: true,
            ..GameConfig::default()
        };
        assert_eq!(config.max_level(), EXTENDED_MAX_LEVELS);
    }

    #[test]
    fn test_event_queue_drains() {
        let mut state = new_state(42);
        state.push_event(GameEvent::Explosion);
        state.push_event(GameEvent::Pickup);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Explosion, GameEvent::Pickup]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_id_counter_monotonic() {
        let mut ids = IdCounter::default();
        let a = ids.next();
        let b = ids.next();
        assert!(b > a);
    }
}
