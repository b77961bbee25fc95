/// Collision and damage resolution for one tick.
///
/// Each projectile is handled in two phases: its overlaps are collected
/// against the groups as they stand, then the outcome is applied before the
/// next projectile is examined.  Later projectiles therefore see the blocks
/// and dinosaurs removed by earlier ones, and no group is mutated while it is
/// being scanned.

use log::debug;

use crate::config::*;
use crate::entities::{GameState, GameStatus, Laser};
use crate::sprite::{any_colliding, colliding, remove_indices};

/// What a single laser ran into this tick.
#[derive(Clone, Debug, PartialEq)]
pub enum LaserHit {
    /// Indices of every block the laser overlaps.
    Blocks(Vec<usize>),
    /// Indices of every dinosaur the laser overlaps.
    Dinosaurs(Vec<usize>),
    Monster,
    Robot,
    Nothing,
}

/// Classify a robot laser.  Blocks shield everything behind them.
pub fn robot_laser_hit(state: &GameState, laser: &Laser) -> LaserHit {
    let blocks = colliding(laser, &state.blocks);
    if !blocks.is_empty() {
        return LaserHit::Blocks(blocks);
    }
    let dinosaurs = colliding(laser, &state.dinosaurs);
    if !dinosaurs.is_empty() {
        return LaserHit::Dinosaurs(dinosaurs);
    }
    match &state.monster {
        Some(monster) if any_colliding(laser, std::slice::from_ref(monster)) => LaserHit::Monster,
        _ => LaserHit::Nothing,
    }
}

/// Classify a dinosaur laser.
pub fn dinosaur_laser_hit(state: &GameState, laser: &Laser) -> LaserHit {
    let blocks = colliding(laser, &state.blocks);
    if !blocks.is_empty() {
        return LaserHit::Blocks(blocks);
    }
    if any_colliding(laser, std::slice::from_ref(&state.robot)) {
        return LaserHit::Robot;
    }
    LaserHit::Nothing
}

/// Robot lasers against blocks, dinosaurs and the monster.
pub fn resolve_robot_lasers(state: &mut GameState) {
    let lasers = std::mem::take(&mut state.robot.lasers);
    let mut survivors = Vec::with_capacity(lasers.len());

    for laser in lasers {
        match robot_laser_hit(state, &laser) {
            LaserHit::Blocks(hits) => remove_indices(&mut state.blocks, &hits),
            LaserHit::Dinosaurs(hits) => {
                for &i in &hits {
                    let dinosaur = &mut state.dinosaurs[i];
                    state.score += dinosaur.value;
                    dinosaur.get_damage(LASER_DAMAGE);
                }
                let dead: Vec<usize> = hits
                    .into_iter()
                    .filter(|&i| state.dinosaurs[i].is_dead())
                    .collect();
                remove_indices(&mut state.dinosaurs, &dead);
            }
            LaserHit::Monster => {
                if let Some(monster) = state.monster.as_mut() {
                    monster.get_damage(MONSTER_LASER_DAMAGE);
                    if monster.is_dead() {
                        state.monster = None;
                        state.score += MONSTER_KILL_BONUS;
                    }
                }
            }
            LaserHit::Robot | LaserHit::Nothing => survivors.push(laser),
        }
    }

    state.robot.lasers = survivors;
}

/// Dinosaur lasers against blocks and the robot.  Returns `Lost` as soon as
/// the last life goes; the remaining lasers are left where they are.
pub fn resolve_dinosaur_lasers(state: &mut GameState) -> GameStatus {
    let lasers = std::mem::take(&mut state.dinosaur_lasers);
    let mut survivors = Vec::with_capacity(lasers.len());
    let mut remaining = lasers.into_iter();

    while let Some(laser) = remaining.next() {
        match dinosaur_laser_hit(state, &laser) {
            LaserHit::Blocks(hits) => remove_indices(&mut state.blocks, &hits),
            LaserHit::Robot => {
                state.robot.get_damage(LASER_DAMAGE);
                if state.robot.current_health <= 0 {
                    state.lives = state.lives.saturating_sub(1);
                    state.robot.current_health = ROBOT_MAX_HEALTH;
                    debug!("robot destroyed, {} lives left", state.lives);
                }
                if state.lives == 0 {
                    survivors.extend(remaining);
                    state.dinosaur_lasers = survivors;
                    return GameStatus::Lost { score: state.score };
                }
            }
            _ => survivors.push(laser),
        }
    }

    state.dinosaur_lasers = survivors;
    GameStatus::Ongoing
}

/// Dinosaurs crush the blocks they touch.  Touching the robot costs the
/// dinosaur `CONTACT_DAMAGE` and nothing else: the robot is unharmed and the
/// dinosaur is never removed on this path.
pub fn resolve_dinosaur_contact(state: &mut GameState) {
    for i in 0..state.dinosaurs.len() {
        let crushed = colliding(&state.dinosaurs[i], &state.blocks);
        remove_indices(&mut state.blocks, &crushed);
        if state.dinosaurs[i].rect.overlaps(&state.robot.rect) {
            state.dinosaurs[i].get_damage(CONTACT_DAMAGE);
        }
    }
}

/// Run every collision group in order and report the resulting status.
pub fn collision_checks(state: &mut GameState) -> GameStatus {
    resolve_robot_lasers(state);

    if let GameStatus::Lost { score } = resolve_dinosaur_lasers(state) {
        return GameStatus::Lost { score };
    }

    resolve_dinosaur_contact(state);

    if state.dinosaurs.is_empty() {
        return GameStatus::Cleared { score: state.score };
    }
    GameStatus::Ongoing
}
