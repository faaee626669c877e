//! Stellar Odyssey entry point
//!
//! Headless demo shell: a simple autopilot flies a full run and the result
//! lands on the leaderboard. Rendering clients consume `RenderSnapshot`
//! instead; this binary only exercises the simulation core.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use stellar_odyssey::consts::SIM_DT;
use stellar_odyssey::shop::Shop;
use stellar_odyssey::sim::{GameConfig, GamePhase, GameState, TickInput, tick};
use stellar_odyssey::{CharacterKind, Leaderboard};
use stellar_odyssey::highscores::ScoreEntry;

/// Thirty minutes of simulated time before the demo gives up.
const MAX_TICKS: u64 = 60 * 60 * 30;

/// A minimal autopilot: aim at the nearest target, kite crowding enemies,
/// drift toward treasure when safe, and fire everything on cooldown.
fn bot_input(state: &GameState) -> TickInput {
    let player = &state.player;

    let nearest_enemy = state
        .scene
        .enemies
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .partial_cmp(&b.pos.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    // Boss weak points outrank everything as a target
    let aim_point = if let Some(boss) = &state.scene.boss {
        boss.weak_points
            .iter()
            .filter(|wp| !wp.destroyed)
            .map(|wp| wp.position(boss.pos))
            .min_by(|a, b| {
                a.distance_squared(player.pos)
                    .partial_cmp(&b.distance_squared(player.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(boss.pos)
    } else if let Some(e) = nearest_enemy {
        e.pos
    } else {
        Vec2::new(state.config.width / 2.0, state.config.height / 2.0)
    };

    // Back off when crowded, otherwise go shopping for treasure
    let mut move_vector = Vec2::ZERO;
    if let Some(e) = nearest_enemy {
        if e.pos.distance(player.pos) < 160.0 {
            move_vector = (player.pos - e.pos).normalize_or_zero();
        }
    }
    if move_vector == Vec2::ZERO {
        if let Some(t) = state.scene.treasures.iter().min_by(|a, b| {
            a.pos
                .distance_squared(player.pos)
                .partial_cmp(&b.pos.distance_squared(player.pos))
                .unwrap_or(std::cmp::Ordering::Equal)
        }) {
            move_vector = (t.pos - player.pos).normalize_or_zero();
        }
    }

    TickInput {
        move_vector,
        aim_point,
        fire_basic: true,
        fire_super: true,
        ..TickInput::default()
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);

    let mut state = GameState::new(seed, "Autopilot", CharacterKind::Fighter, GameConfig::default());
    let mut shop = Shop::new();
    log::info!("Demo run starting with seed {}", seed);

    for _ in 0..MAX_TICKS {
        match state.phase {
            GamePhase::Playing => {
                let input = bot_input(&state);
                tick(&mut state, &input, SIM_DT);
                // A real shell would route these to the audio backend
                let _cues = state.drain_events();
            }
            GamePhase::LevelComplete => {
                // Patch the hull up at the station before flying on
                if state.player.hp * 2 < state.player.max_hp {
                    shop.purchase(0, &mut state.player);
                }
                shop.reset_repairs();
                state.advance_level();
            }
            GamePhase::GameOver | GamePhase::Victory => break,
        }
    }

    let outcome = match state.phase {
        GamePhase::Victory => "VICTORY".to_string(),
        GamePhase::GameOver => state
            .death_cause
            .map_or("GAME OVER".to_string(), |c| format!("GAME OVER - {}", c.message())),
        _ => "TIMED OUT".to_string(),
    };

    println!("{}", outcome);
    println!(
        "score {} | level {} | ship level {} | gold {}",
        state.score, state.level, state.player.level, state.player.gold
    );

    let mut board = Leaderboard::load();
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let made_it = board.add_score(ScoreEntry {
        player_name: state.player.name.clone(),
        character_name: state.player.character.display_name().to_string(),
        character_type: state.player.character.ship_type().to_string(),
        score: state.score,
        level_reached: state.level,
        timestamp,
    });
    board.save();

    if made_it {
        println!("New top-10 score!");
    }
    println!("--- leaderboard ---");
    for (i, entry) in board.get_top(10).iter().enumerate() {
        println!(
            "{:2}. {:<12} {:>8}  (level {}, {})",
            i + 1,
            entry.player_name,
            entry.score,
            entry.level_reached,
            entry.character_name
        );
    }
}
