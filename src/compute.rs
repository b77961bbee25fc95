/// Game-logic functions.
///
/// The host-facing functions (`init_state`, the robot actions and `tick`)
/// take an immutable reference to the current `GameState` and return a
/// brand-new one.  The individual tick phases are exposed as `&mut` steps so
/// they can be exercised one at a time.  Randomness only comes through the
/// injected RNG.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::collision::collision_checks;
use crate::config::*;
use crate::entities::{Direction, GameState, GameStatus, Laser, Monster, Robot, Side};
use crate::formation::{create_multiple_obstacles, dinosaur_setup, obstacle_offsets};
use crate::GameResult;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the starting state for `config`.  The first monster countdown is
/// drawn from `rng`.
pub fn init_state(config: GameConfig, rng: &mut impl Rng) -> GameResult<GameState> {
    config.validate()?;

    let robot = Robot::new(
        config.screen_width / 2.0,
        config.screen_height,
        config.screen_width,
    );

    let mut blocks = Vec::new();
    let offsets = obstacle_offsets(config.screen_width, config.obstacle_amount);
    create_multiple_obstacles(
        &mut blocks,
        &offsets,
        config.screen_width / 15.0,
        OBSTACLE_Y_START,
    );

    let formation = dinosaur_setup(
        config.dinosaur_rows,
        config.dinosaur_cols,
        &config.layout,
    );

    Ok(GameState {
        robot,
        dinosaurs: formation.dinosaurs,
        dinosaur_lasers: Vec::new(),
        blocks,
        dinosaur_direction: config.dinosaur_direction,
        monster: None,
        monster_spawn_countdown: rng.gen_range(MONSTER_FIRST_SPAWN),
        dinosaur_shot_countdown: DINOSAUR_SHOT_INTERVAL,
        lives: STARTING_LIVES,
        score: 0,
        frame: 0,
        status: GameStatus::Ongoing,
        config,
    })
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_robot_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.robot.shift(-ROBOT_SPEED);
    next
}

pub fn move_robot_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.robot.shift(ROBOT_SPEED);
    next
}

/// Fire from the robot's centre if its laser has recharged.
pub fn robot_shoot(state: &GameState) -> GameState {
    if !state.robot.ready() || state.status.is_terminal() {
        return state.clone();
    }
    let mut next = state.clone();
    let (cx, cy) = next.robot.rect.center();
    next.robot.lasers.push(Laser::from_robot(cx, cy));
    next.robot.recharge = ROBOT_LASER_RECHARGE;
    next
}

// ── Tick phases ──────────────────────────────────────────────────────────────

/// Step the recharge timer and move every robot laser, dropping the ones
/// that left the screen.
pub fn update_robot(state: &mut GameState) {
    let height = state.config.screen_height;
    let robot = &mut state.robot;
    robot.recharge = robot.recharge.saturating_sub(1);
    robot.lasers.retain_mut(|laser| laser.update(height));
}

pub fn update_dinosaurs(state: &mut GameState) {
    let direction = state.dinosaur_direction;
    for dinosaur in &mut state.dinosaurs {
        dinosaur.update(direction);
    }
}

/// Flip the formation at the screen edges.  Touching the right edge also
/// moves every dinosaur down by `DINOSAUR_DESCENT`.
pub fn dinosaur_position_checker(state: &mut GameState) {
    let width = state.config.screen_width;
    if state.dinosaurs.iter().any(|d| d.rect.right() >= width) {
        state.dinosaur_direction = Direction::Left;
        for dinosaur in &mut state.dinosaurs {
            dinosaur.rect.y += DINOSAUR_DESCENT;
        }
    } else if state.dinosaurs.iter().any(|d| d.rect.left() <= 0.0) {
        state.dinosaur_direction = Direction::Right;
    }
}

pub fn update_dinosaur_lasers(state: &mut GameState) {
    let height = state.config.screen_height;
    state.dinosaur_lasers.retain_mut(|laser| laser.update(height));
}

/// Count down to the next monster.  On expiry the countdown is redrawn and a
/// monster enters from a random side, unless one is already on screen.
pub fn monster_dinosaur_timer(state: &mut GameState, rng: &mut impl Rng) {
    state.monster_spawn_countdown -= 1;
    if state.monster_spawn_countdown > 0 {
        return;
    }
    let side = if rng.gen_bool(0.5) { Side::Right } else { Side::Left };
    state.monster_spawn_countdown = rng.gen_range(MONSTER_RESPAWN);
    if state.monster.is_some() {
        debug!("monster spawn suppressed, slot occupied (frame {})", state.frame);
        return;
    }
    debug!("monster spawned from {:?} (frame {})", side, state.frame);
    state.monster = Some(Monster::new(side, state.config.screen_width));
}

pub fn update_monster(state: &mut GameState) {
    let width = state.config.screen_width;
    if let Some(monster) = state.monster.as_mut() {
        if !monster.update(width) {
            state.monster = None;
        }
    }
}

/// One dinosaur, picked uniformly, fires downward from its centre.
/// Returns `false` when no dinosaur is left to shoot.
pub fn dinosaur_shoot(state: &mut GameState, rng: &mut impl Rng) -> bool {
    let Some(shooter) = state.dinosaurs.choose(rng) else {
        return false;
    };
    let (cx, cy) = shooter.rect.center();
    state.dinosaur_lasers.push(Laser::from_dinosaur(cx, cy));
    true
}

/// Fire on a fixed cadence.
pub fn dinosaur_shot_timer(state: &mut GameState, rng: &mut impl Rng) {
    state.dinosaur_shot_countdown = state.dinosaur_shot_countdown.saturating_sub(1);
    if state.dinosaur_shot_countdown == 0 {
        dinosaur_shoot(state, rng);
        state.dinosaur_shot_countdown = DINOSAUR_SHOT_INTERVAL;
    }
}

// ── Per-frame tick (nearly pure, RNG is injected) ────────────────────────────

/// Advance the simulation by one frame.  A finished run is returned as-is;
/// otherwise the result's `status` says whether the run is still going.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status.is_terminal() {
        return state.clone();
    }
    let mut next = state.clone();
    next.frame += 1;

    update_robot(&mut next);
    update_dinosaurs(&mut next);
    dinosaur_position_checker(&mut next);
    update_dinosaur_lasers(&mut next);
    monster_dinosaur_timer(&mut next, rng);
    update_monster(&mut next);
    dinosaur_shot_timer(&mut next, rng);

    next.status = collision_checks(&mut next);
    match next.status {
        GameStatus::Lost { score } => {
            info!("GAME OVER! Final score: {score}");
        }
        GameStatus::Cleared { score } => {
            info!("Formation cleared! Final score: {score}");
        }
        GameStatus::Ongoing => {}
    }
    next
}
