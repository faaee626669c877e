//! Fixed timestep simulation tick
//!
//! One tick = input application, entity updates, then every pair-wise
//! collision pass in a fixed order. The order decides tie-breaks when
//! several passes could remove the same entity in the same tick, so it
//! never changes:
//!
//! 1. player input (move / fire / interact / sell)
//! 2. advance movables (projectiles, enemies, boss, meteors)
//! 3. player projectiles vs boss weak points, then vs enemies
//! 4. enemy bodies vs player (contact damage + knockback)
//! 5. enemy projectiles vs player
//! 6. trap proximity triggers and area damage
//! 7. meteors vs player and vs player projectiles
//! 8. pickups (treasure, power-ups, hazards)
//! 9. terminal conditions

use glam::Vec2;

use crate::consts::*;
use crate::sim::collision::{circles_overlap, knockback, mitigate, within_range};
use crate::sim::player::Item;
use crate::sim::projectile::SpecialEffect;
use crate::sim::state::{DeathCause, GameEvent, GamePhase, GameState};
use crate::sim::weapons;

/// Abstract input state for a single tick. Key/button mapping is the
/// shell's business.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Normalized movement intent
    pub move_vector: Vec2,
    /// World-space point the ship is aiming at
    pub aim_point: Vec2,
    pub fire_basic: bool,
    pub fire_super: bool,
    /// Pick up nearby traps/equipment into the inventory
    pub interact: bool,
    pub sell_first_item: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    update_player(state, input, dt);
    advance_projectiles(state, dt);
    update_enemies(state, dt);
    update_meteors(state, dt);

    resolve_player_shots(state);
    resolve_enemy_contact(state);
    resolve_enemy_shots(state);
    resolve_traps(state);
    resolve_meteors(state);
    resolve_pickups(state);

    check_terminal(state);
}

/// Grant XP and surface any level-ups as events.
fn award_xp(state: &mut GameState, amount: i32) {
    let levels = state.player.gain_xp(amount);
    for _ in 0..levels {
        state.events.push(GameEvent::LevelUp);
    }
    if levels > 0 {
        log::debug!("Level up -> {}", state.player.level);
    }
}

fn update_player(state: &mut GameState, input: &TickInput, dt: f32) {
    state.player.update_timers(dt);

    // Movement
    let dir = input.move_vector.normalize_or_zero();
    if dir != Vec2::ZERO {
        let speed = state.player.effective_move_speed();
        state.player.pos += dir * speed * dt;
        state
            .player
            .clamp_to_bounds(state.config.width, state.config.height);
    }

    // Basic shot
    if input.fire_basic && state.player.can_shoot() {
        let attack = state.player.effective_attack();
        let origin = state.player.pos;
        let aim = input.aim_point - origin;
        let shots = weapons::fire(state.player.weapon, &mut state.ids, origin, aim, attack);
        if !shots.is_empty() {
            state.player.start_shoot_cooldown();
            state.player_projectiles.extend(shots);
            state.events.push(GameEvent::LaserShot);
        }
    }

    // Super shot
    if input.fire_super && state.player.can_super_shoot() {
        let attack = state.player.effective_attack();
        let origin = state.player.pos;
        let aim = input.aim_point - origin;
        let shots = weapons::fire_super(&mut state.ids, origin, aim, attack);
        if !shots.is_empty() {
            state.player.consume_super();
            state.player_projectiles.extend(shots);
            state.events.push(GameEvent::SuperShot);
        }
    }

    // Pick up nearby carryables
    if input.interact {
        let pos = state.player.pos;
        let reach = state.player.radius + 5.0;

        if let Some(i) = state
            .scene
            .traps
            .iter()
            .position(|t| within_range(t.pos, pos, t.radius + reach))
        {
            let trap = state.scene.traps.remove(i);
            state.player.inventory.push(Item::Trap {
                damage: trap.damage,
                blast_radius: trap.blast_radius,
            });
            state.events.push(GameEvent::Pickup);
        }

        if let Some(i) = state
            .scene
            .equipment
            .iter()
            .position(|e| within_range(e.pos, pos, e.radius + reach))
        {
            let eq = state.scene.equipment.remove(i);
            state.player.inventory.push(Item::Equipment {
                bonus_attack: eq.bonus_attack,
                bonus_defense: eq.bonus_defense,
                price: eq.price,
            });
            state.events.push(GameEvent::Pickup);
        }
    }

    if input.sell_first_item {
        if let Some(value) = state.player.sell_first_item() {
            log::debug!("Sold item for {} gold", value);
        }
    }
}

fn advance_projectiles(state: &mut GameState, dt: f32) {
    let (w, h) = (state.config.width, state.config.height);
    for p in state.player_projectiles.iter_mut() {
        p.advance(dt);
    }
    state
        .player_projectiles
        .retain(|p| p.active && !p.out_of_bounds(w, h));

    for p in state.enemy_projectiles.iter_mut() {
        p.advance(dt);
    }
    state
        .enemy_projectiles
        .retain(|p| p.active && !p.out_of_bounds(w, h));
}

fn update_enemies(state: &mut GameState, dt: f32) {
    let player_pos = state.player.pos;

    for e in state.scene.enemies.iter_mut() {
        if let Some(shot) = e.update(dt, player_pos, &mut state.ids, &mut state.rng) {
            state.enemy_projectiles.push(shot);
        }
    }

    if let Some(boss) = state.scene.boss.as_mut() {
        let bolts = boss.update(dt, player_pos, &mut state.ids);
        if !bolts.is_empty() {
            state.events.push(GameEvent::BossLaser);
            state.enemy_projectiles.extend(bolts);
        }
    }
}

fn update_meteors(state: &mut GameState, dt: f32) {
    let (w, h) = (state.config.width, state.config.height);
    for m in state.scene.meteors.iter_mut() {
        m.advance(dt, w, h);
    }
}

/// Player projectiles against the boss's weak points, then regular enemies.
fn resolve_player_shots(state: &mut GameState) {
    // Weak points eat projectiles before any body collision is considered;
    // the boss body itself is never a valid hit target
    if let Some(boss) = state.scene.boss.as_mut() {
        for p in state.player_projectiles.iter_mut() {
            if !p.active {
                continue;
            }
            if let Some(hit) = boss.try_weak_point_hit(p.pos, p.radius) {
                p.register_hit();
                if hit.point_destroyed {
                    state.events.push(GameEvent::Explosion);
                    log::info!(
                        "Weak point destroyed, {} remaining",
                        boss.remaining_weak_points()
                    );
                }
            }
        }

        if boss.check_defeat() {
            state.score += BOSS_SCORE_BONUS;
            state.events.push(GameEvent::BossDefeat);
            state.events.push(GameEvent::Explosion);
            log::info!("Boss defeated on level {}", state.level);
        }
    }
    let boss_down = state.scene.boss.as_ref().is_some_and(|b| b.defeated);
    if boss_down {
        state.scene.boss = None;
        award_xp(state, XP_PER_KILL * BOSS_XP_MULTIPLIER);
    }

    // Regular enemies
    for e in state.scene.enemies.iter_mut() {
        for p in state.player_projectiles.iter_mut() {
            if !p.active || e.hp <= 0 {
                continue;
            }
            if circles_overlap(e.pos, e.radius, p.pos, p.radius) {
                let dealt = e.receive_damage(p.damage);
                p.register_hit();
                if dealt > 0 {
                    log::debug!("Hit {} for {} ({} hp left)", e.kind.name(), dealt, e.hp);
                }
                if e.hp <= 0 {
                    break;
                }
            }
        }
    }

    // Apply kills once per enemy: XP, score, super charge
    let mut kills = 0;
    for e in state.scene.enemies.iter_mut() {
        if e.hp <= 0 && e.alive {
            e.alive = false;
            kills += 1;
            state.events.push(GameEvent::EnemyDeath);
            state.events.push(GameEvent::Explosion);
        }
    }
    for _ in 0..kills {
        award_xp(state, XP_PER_KILL);
        state.score += KILL_SCORE;
        if state.player.add_kill() {
            log::debug!("Super shot charged");
        }
    }

    state.scene.enemies.retain(|e| e.alive);
    state.player_projectiles.retain(|p| p.active);
}

/// Body-to-body contact damage plus a small knockback on the player.
fn resolve_enemy_contact(state: &mut GameState) {
    let mut pushed = false;

    for e in state.scene.enemies.iter() {
        if circles_overlap(e.pos, e.radius, state.player.pos, state.player.radius) {
            let raw = mitigate(e.attack, state.player.defense);
            let dealt = state.player.receive_damage(raw);
            if dealt > 0 {
                state.events.push(GameEvent::Damage);
                if state.player.hp <= 0 {
                    state.death_cause = Some(DeathCause::EnemyContact);
                }
            }
            let push = knockback(state.player.pos, e.pos, 8.0);
            state.player.pos += push;
            pushed = true;
        }
    }

    if let Some(boss) = state.scene.boss.as_ref() {
        if circles_overlap(boss.pos, boss.radius, state.player.pos, state.player.radius) {
            let raw = mitigate(boss.attack, state.player.defense);
            let dealt = state.player.receive_damage(raw);
            if dealt > 0 {
                state.events.push(GameEvent::Damage);
                if state.player.hp <= 0 {
                    state.death_cause = Some(DeathCause::BossContact);
                }
            }
            let push = knockback(state.player.pos, boss.pos, 8.0);
            state.player.pos += push;
            pushed = true;
        }
    }

    if pushed {
        state
            .player
            .clamp_to_bounds(state.config.width, state.config.height);
    }
}

fn resolve_enemy_shots(state: &mut GameState) {
    for p in state.enemy_projectiles.iter_mut() {
        if !p.active {
            continue;
        }
        if circles_overlap(p.pos, p.radius, state.player.pos, state.player.radius) {
            let raw = mitigate(p.damage, state.player.defense);
            let dealt = state.player.receive_damage(raw);
            p.active = false;
            if dealt > 0 {
                state.events.push(GameEvent::Damage);
                if state.player.hp <= 0 {
                    state.death_cause = Some(if p.effect == Some(SpecialEffect::Laser) {
                        DeathCause::BossLaser
                    } else {
                        DeathCause::EnemyShot
                    });
                }
            }
        }
    }
    state.enemy_projectiles.retain(|p| p.active);
}

/// Traps detonate when anything gets close, and the blast hits everything in
/// range, not just the entity that tripped it.
fn resolve_traps(state: &mut GameState) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    // Snapshot which traps fire this tick before mutating anything
    let mut detonating = Vec::new();
    state.scene.traps.retain(|trap| {
        let tripped = within_range(trap.pos, player_pos, trap.radius + player_radius)
            || state
                .scene
                .enemies
                .iter()
                .any(|e| within_range(trap.pos, e.pos, trap.radius + e.radius));
        if tripped {
            detonating.push(trap.clone());
        }
        !tripped
    });

    if detonating.is_empty() {
        return;
    }

    let mut kills = 0;
    for trap in &detonating {
        state.events.push(GameEvent::Explosion);
        state.score -= TRAP_SCORE_PENALTY;

        if within_range(trap.pos, state.player.pos, trap.blast_radius + state.player.radius) {
            let dealt = state.player.receive_damage(trap.damage);
            if dealt > 0 {
                state.events.push(GameEvent::Damage);
                if state.player.hp <= 0 {
                    state.death_cause = Some(DeathCause::TrapExplosion);
                }
            }
        }

        for e in state.scene.enemies.iter_mut() {
            if e.alive && within_range(trap.pos, e.pos, trap.blast_radius + e.radius) {
                e.receive_damage(trap.damage);
                if e.hp <= 0 && e.alive {
                    e.alive = false;
                    kills += 1;
                    state.events.push(GameEvent::EnemyDeath);
                }
            }
        }
    }

    // Trap kills grant XP but neither score nor super charge
    for _ in 0..kills {
        award_xp(state, XP_PER_KILL);
    }
    state.scene.enemies.retain(|e| e.alive);
}

fn resolve_meteors(state: &mut GameState) {
    // Meteor vs player: the rock shatters on the hull
    for m in state.scene.meteors.iter_mut() {
        if !m.alive {
            continue;
        }
        if circles_overlap(m.pos, m.radius, state.player.pos, state.player.radius) {
            let raw = mitigate(m.damage, state.player.defense);
            let dealt = state.player.receive_damage(raw);
            m.alive = false;
            state.events.push(GameEvent::Explosion);
            if dealt > 0 {
                state.events.push(GameEvent::Damage);
                if state.player.hp <= 0 {
                    state.death_cause = Some(DeathCause::MeteorCrash);
                }
            }
        }
    }

    // Meteor vs player projectiles: small rocks shatter, big ones split
    let mut fragments = Vec::new();
    for m in state.scene.meteors.iter_mut() {
        if !m.alive {
            continue;
        }
        for p in state.player_projectiles.iter_mut() {
            if !p.active {
                continue;
            }
            if circles_overlap(m.pos, m.radius, p.pos, p.radius) {
                p.active = false;
                m.alive = false;
                if m.size == 1 {
                    state.score += METEOR_DESTROY_SCORE;
                } else {
                    fragments.extend(m.fragment(&mut state.ids, &mut state.rng));
                    state.score += METEOR_FRAGMENT_SCORE;
                }
                state.events.push(GameEvent::Explosion);
                break; // one projectile per meteor
            }
        }
    }

    state.scene.meteors.retain(|m| m.alive);
    state.scene.meteors.extend(fragments);
    state.player_projectiles.retain(|p| p.active);
}

fn resolve_pickups(state: &mut GameState) {
    let pos = state.player.pos;
    let radius = state.player.radius;

    // Treasure auto-collects on proximity
    let mut collected = Vec::new();
    state.scene.treasures.retain(|t| {
        if circles_overlap(t.pos, t.radius, pos, radius) {
            collected.push(t.value);
            false
        } else {
            true
        }
    });
    for value in collected {
        state.player.gold += value;
        award_xp(state, (value as f32 * XP_PER_TREASURE_VALUE) as i32);
        state.events.push(GameEvent::Pickup);
        log::debug!("Treasure worth {} collected", value);
    }

    // Power-ups
    let mut applied = Vec::new();
    state.scene.power_ups.retain(|pu| {
        if circles_overlap(pu.pos, pu.radius, pos, radius) {
            applied.push(pu.kind);
            false
        } else {
            true
        }
    });
    for kind in applied {
        kind.apply(&mut state.player);
        state.score += POWERUP_SCORE;
        state.events.push(GameEvent::Pickup);
    }

    // Hazards
    let mut tripped = Vec::new();
    state.scene.hazards.retain(|hz| {
        if circles_overlap(hz.pos, hz.radius, pos, radius) {
            tripped.push(hz.kind);
            false
        } else {
            true
        }
    });
    for kind in tripped {
        let dealt = kind.apply(&mut state.player);
        state.score = (state.score - HAZARD_SCORE_PENALTY).max(0);
        state.events.push(GameEvent::Damage);
        if dealt > 0 && state.player.hp <= 0 {
            state.death_cause = Some(DeathCause::CosmicRadiation);
        }
    }
}

fn check_terminal(state: &mut GameState) {
    if state.player.hp <= 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
        let cause = state
            .death_cause
            .map_or("Ship lost", |c| c.message());
        log::info!("Game over on level {}: {}", state.level, cause);
    } else if state.scene.is_cleared() {
        state.phase = GamePhase::LevelComplete;
        state.events.push(GameEvent::LevelVictory);
        log::info!("Level {} complete, score {}", state.level, state.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::CharacterKind;
    use crate::consts::SIM_DT;
    use crate::sim::enemy::{Enemy, EnemyKind};
    use crate::sim::objects::{ExplosiveTrap, Hazard, HazardKind, Meteor, PowerUp, PowerUpKind, Treasure};
    use crate::sim::projectile::{Owner, Projectile};
    use crate::sim::state::GameConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// A state with an empty scene, for building precise scenarios.
    fn blank_state() -> GameState {
        let mut state = GameState::new(1234, "Test", CharacterKind::Fighter, GameConfig::default());
        state.scene.clear_all();
        state
    }

    fn spawn_enemy(state: &mut GameState, pos: Vec2) -> u32 {
        let id = state.ids.next();
        state.scene.enemies.push(Enemy::new(id, pos, EnemyKind::Ground, 1));
        id
    }

    fn shot_at(state: &mut GameState, pos: Vec2, damage: i32) {
        let id = state.ids.next();
        state
            .player_projectiles
            .push(Projectile::new(id, pos, Vec2::ZERO, damage, Owner::Player));
    }

    #[test]
    fn test_projectile_kill_awards_rewards() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(200.0, 200.0));
        // A second survivor keeps the level from completing this tick
        spawn_enemy(&mut state, Vec2::new(700.0, 500.0));
        shot_at(&mut state, Vec2::new(200.0, 200.0), 500);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.scene.enemies.len(), 1);
        assert_eq!(state.player.xp, XP_PER_KILL);
        assert_eq!(state.score, KILL_SCORE);
        assert_eq!(state.player.super_charges, 1);
        assert!(state.events.contains(&GameEvent::EnemyDeath));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_kill_is_not_double_awarded() {
        let mut state = blank_state();
        let pos = Vec2::new(200.0, 200.0);
        spawn_enemy(&mut state, pos);
        spawn_enemy(&mut state, Vec2::new(700.0, 500.0));
        // Two overkill projectiles land on the same enemy in the same tick
        shot_at(&mut state, pos, 500);
        shot_at(&mut state, pos, 500);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.player.xp, XP_PER_KILL);
        assert_eq!(state.score, KILL_SCORE);
        assert_eq!(state.player.super_charges, 1);
    }

    #[test]
    fn test_clearing_the_level_transitions() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(200.0, 200.0));
        shot_at(&mut state, Vec2::new(200.0, 200.0), 500);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.scene.is_cleared());
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert!(state.events.contains(&GameEvent::LevelVictory));
    }

    #[test]
    fn test_penetrating_shot_passes_through() {
        let mut state = blank_state();
        let pos = Vec2::new(200.0, 200.0);
        spawn_enemy(&mut state, pos);
        spawn_enemy(&mut state, Vec2::new(700.0, 500.0));
        let id = state.ids.next();
        state.player_projectiles.push(
            Projectile::new(id, pos, Vec2::ZERO, 500, Owner::Player)
                .with_effect(SpecialEffect::Penetrating),
        );

        tick(&mut state, &TickInput::default(), SIM_DT);

        // The pellet survives its kill
        assert_eq!(state.player_projectiles.len(), 1);
        assert_eq!(state.scene.enemies.len(), 1);
    }

    #[test]
    fn test_enemy_contact_damages_and_knocks_back() {
        let mut state = blank_state();
        // Defense is applied both at the contact site and in the intake
        // pipeline; zero it so the hit definitely lands
        state.player.defense = 0;
        let player_pos = state.player.pos;
        spawn_enemy(&mut state, player_pos + Vec2::new(5.0, 0.0));
        let hp_before = state.player.hp;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.player.hp < hp_before);
        // Knocked away from the enemy (enemy sits to the right)
        assert!(state.player.pos.x < player_pos.x);
        assert!(state.events.contains(&GameEvent::Damage));
    }

    #[test]
    fn test_high_defense_shrugs_off_contact() {
        let mut state = blank_state();
        state.player.defense = 50;
        let spawn_pos = state.player.pos + Vec2::new(5.0, 0.0);
        spawn_enemy(&mut state, spawn_pos);
        let hp_before = state.player.hp;

        tick(&mut state, &TickInput::default(), SIM_DT);

        // No damage, but the knockback still separates the ships
        assert_eq!(state.player.hp, hp_before);
        assert!(!state.events.contains(&GameEvent::Damage));
    }

    #[test]
    fn test_trap_blast_hits_everyone_in_radius_once() {
        let mut state = blank_state();
        let trap_pos = Vec2::new(300.0, 300.0);
        state
            .scene
            .traps
            .push(ExplosiveTrap::new(state.ids.next(), trap_pos, 60.0, 1000));

        // Trigger by enemy proximity; the player is far away and unhurt
        let near = spawn_enemy(&mut state, trap_pos + Vec2::new(10.0, 0.0));
        let also_near = spawn_enemy(&mut state, trap_pos + Vec2::new(0.0, 40.0));
        let far = spawn_enemy(&mut state, Vec2::new(800.0, 550.0));
        state.player.pos = Vec2::new(800.0, 100.0);
        let player_hp = state.player.hp;

        tick(&mut state, &TickInput::default(), SIM_DT);

        // Both nearby enemies died to one detonation; the far one survived
        let survivors: Vec<u32> = state.scene.enemies.iter().map(|e| e.id).collect();
        assert!(!survivors.contains(&near));
        assert!(!survivors.contains(&also_near));
        assert!(survivors.contains(&far));
        assert!(state.scene.traps.is_empty());
        assert_eq!(state.player.hp, player_hp);
        // Trap kills pay XP but no score; the penalty still applies
        assert_eq!(state.player.xp, 2 * XP_PER_KILL);
        assert_eq!(state.score, -TRAP_SCORE_PENALTY);
        assert_eq!(state.player.super_charges, 0);
    }

    #[test]
    fn test_trap_triggered_by_player_damages_player() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(800.0, 550.0));
        let trap_pos = state.player.pos + Vec2::new(10.0, 0.0);
        state
            .scene
            .traps
            .push(ExplosiveTrap::new(state.ids.next(), trap_pos, 50.0, 30));
        let hp_before = state.player.hp;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.player.hp < hp_before);
        assert!(state.scene.traps.is_empty());
    }

    #[test]
    fn test_meteor_fragmentation_chain() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(800.0, 550.0));
        state.player.pos = Vec2::new(100.0, 100.0);

        let mut rng = Pcg32::seed_from_u64(9);
        let mut m = Meteor::new(state.ids.next(), Vec2::new(500.0, 300.0), 2, &mut rng);
        m.vel = Vec2::ZERO;
        state.scene.meteors.push(m);
        shot_at(&mut state, Vec2::new(500.0, 300.0), 10);

        tick(&mut state, &TickInput::default(), SIM_DT);

        // Size 2 splits into exactly two size-1 fragments
        assert_eq!(state.scene.meteors.len(), 2);
        assert!(state.scene.meteors.iter().all(|m| m.size == 1));
        assert_eq!(state.score, METEOR_FRAGMENT_SCORE);

        // Shooting a fragment removes it with no further splitting
        let target = state.scene.meteors[0].pos;
        shot_at(&mut state, target, 10);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.scene.meteors.len(), 1);
        assert_eq!(state.score, METEOR_FRAGMENT_SCORE + METEOR_DESTROY_SCORE);
    }

    #[test]
    fn test_meteor_contact_destroys_meteor_and_hurts_player() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(800.0, 550.0));
        let mut rng = Pcg32::seed_from_u64(9);
        let mut m = Meteor::new(state.ids.next(), state.player.pos, 3, &mut rng);
        m.vel = Vec2::ZERO;
        state.scene.meteors.push(m);
        let hp_before = state.player.hp;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert!(state.scene.meteors.is_empty());
        assert!(state.player.hp < hp_before);
    }

    #[test]
    fn test_treasure_and_powerup_and_hazard_pickup() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(800.0, 550.0));
        let pos = state.player.pos;
        state
            .scene
            .treasures
            .push(Treasure::new(state.ids.next(), pos, 100));
        state
            .scene
            .power_ups
            .push(PowerUp::new(state.ids.next(), pos, PowerUpKind::EnergyShield));
        state
            .scene
            .hazards
            .push(Hazard::new(state.ids.next(), pos, HazardKind::ShieldDrain));

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.player.gold, 100);
        assert_eq!(state.player.xp, 10); // 100 * 0.1
        // Shield picked up (+50) then drained (-30)
        assert_eq!(state.player.shield, 20);
        // +25 power-up, -15 hazard
        assert_eq!(state.score, POWERUP_SCORE - HAZARD_SCORE_PENALTY);
        assert!(state.scene.treasures.is_empty());
        assert!(state.scene.power_ups.is_empty());
        assert!(state.scene.hazards.is_empty());
    }

    #[test]
    fn test_basic_fire_spawns_projectiles_and_cooldown() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(800.0, 550.0));
        let input = TickInput {
            fire_basic: true,
            aim_point: state.player.pos + Vec2::new(100.0, 0.0),
            ..TickInput::default()
        };

        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.player_projectiles.len(), 1);
        assert!(state.events.contains(&GameEvent::LaserShot));

        // Still cooling down: no second shot
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.player_projectiles.len(), 1);
    }

    #[test]
    fn test_super_shot_requires_full_charge() {
        let mut state = blank_state();
        spawn_enemy(&mut state, Vec2::new(800.0, 550.0));
        let input = TickInput {
            fire_super: true,
            aim_point: state.player.pos + Vec2::new(100.0, 0.0),
            ..TickInput::default()
        };

        tick(&mut state, &input, SIM_DT);
        assert!(state.player_projectiles.is_empty());

        state.player.super_charges = 4;
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.player_projectiles.len(), 5);
        assert_eq!(state.player.super_charges, 0);
        assert!(state.events.contains(&GameEvent::SuperShot));
    }

    #[test]
    fn test_boss_level_defeat_via_weak_points() {
        let mut state = GameState::with_start_level(
            77,
            "Test",
            CharacterKind::Fighter,
            GameConfig::default(),
            2,
        );
        // Isolate the boss
        state.scene.enemies.clear();
        state.scene.traps.clear();
        state.scene.meteors.clear();
        state.scene.treasures.clear();
        state.scene.power_ups.clear();
        state.scene.hazards.clear();
        state.player.pos = Vec2::new(100.0, 500.0);
        assert!(state.scene.boss.is_some());

        // Chip away every weak point: one stationary shot per tick, aimed at
        // the point's current position
        for wp_index in 0..4 {
            for _ in 0..3 {
                let boss = state.scene.boss.as_ref().expect("boss alive");
                let target = boss.weak_points[wp_index].position(boss.pos);
                shot_at(&mut state, target, 10);
                tick(&mut state, &TickInput::default(), SIM_DT);
            }
        }

        assert!(state.scene.boss.is_none());
        assert!(state.events.contains(&GameEvent::BossDefeat)
            || state.phase != GamePhase::Playing);
        // 5x kill XP: 200 XP crosses the first level-up threshold
        assert_eq!(state.player.level, 2);
        assert_eq!(state.player.xp, 100);
        assert_eq!(state.score, BOSS_SCORE_BONUS);
        assert_eq!(state.phase, GamePhase::LevelComplete);
    }

    #[test]
    fn test_player_death_sets_game_over_with_cause() {
        let mut state = blank_state();
        state.player.hp = 1;
        state.player.defense = 0;
        let spawn_pos = state.player.pos;
        spawn_enemy(&mut state, spawn_pos);

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.death_cause, Some(DeathCause::EnemyContact));
        assert!(state.events.contains(&GameEvent::GameOver));

        // Ticking a finished game is a no-op
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_determinism_same_seed_same_outcome() {
        let config = GameConfig::default();
        let mut a = GameState::new(555, "Test", CharacterKind::Scout, config);
        let mut b = GameState::new(555, "Test", CharacterKind::Scout, config);

        let input = TickInput {
            move_vector: Vec2::new(1.0, 0.3),
            aim_point: Vec2::new(800.0, 300.0),
            fire_basic: true,
            ..TickInput::default()
        };
        for _ in 0..300 {
            tick(&mut a, &input, SIM_DT);
            tick(&mut b, &input, SIM_DT);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.player.hp, b.player.hp);
        assert_eq!(a.scene.enemies.len(), b.scene.enemies.len());
        assert_eq!(a.player_projectiles.len(), b.player_projectiles.len());
    }
}
