//! Tuning constants and the per-run configuration.

use crate::entities::Direction;
use crate::{GameError, GameResult};

// ── Screen & formation ───────────────────────────────────────────────────────

pub const DEFAULT_SCREEN_WIDTH: f32 = 600.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 600.0;
pub const DEFAULT_DINOSAUR_ROWS: usize = 3;
pub const DEFAULT_DINOSAUR_COLS: usize = 4;
pub const DEFAULT_OBSTACLE_AMOUNT: usize = 4;

/// Simulation rate the tick-based timers below are tuned for.
pub const TICKS_PER_SECOND: u64 = 60;

// ── Robot ────────────────────────────────────────────────────────────────────

pub const ROBOT_WIDTH: f32 = 48.0;
pub const ROBOT_HEIGHT: f32 = 28.0;
pub const ROBOT_SPEED: f32 = 5.0;
pub const ROBOT_MAX_HEALTH: i32 = 150;
pub const ROBOT_LASER_SPEED: f32 = 8.0;
/// Ticks between two robot shots (600 ms).
pub const ROBOT_LASER_RECHARGE: u32 = 36;
pub const STARTING_LIVES: u32 = 3;

// ── Dinosaurs ────────────────────────────────────────────────────────────────

pub const DINOSAUR_WIDTH: f32 = 40.0;
pub const DINOSAUR_HEIGHT: f32 = 30.0;
pub const DINOSAUR_X_DISTANCE: f32 = 150.0;
pub const DINOSAUR_Y_DISTANCE: f32 = 90.0;
pub const DINOSAUR_X_OFFSET: f32 = 70.0;
pub const DINOSAUR_Y_OFFSET: f32 = 150.0;
/// Downward step applied when the formation touches the right edge.
pub const DINOSAUR_DESCENT: f32 = 2.0;
pub const DINOSAUR_LASER_SPEED: f32 = 6.0;
/// Ticks between two dinosaur shots (800 ms).
pub const DINOSAUR_SHOT_INTERVAL: u32 = 48;

// ── Monster ──────────────────────────────────────────────────────────────────

pub const MONSTER_WIDTH: f32 = 56.0;
pub const MONSTER_HEIGHT: f32 = 28.0;
pub const MONSTER_Y: f32 = 80.0;
pub const MONSTER_SPEED: f32 = 3.0;
pub const MONSTER_MAX_HEALTH: i32 = 100;
pub const MONSTER_KILL_BONUS: u32 = 100;
/// How far outside the screen the monster enters and leaves.
pub const MONSTER_SPAWN_MARGIN: f32 = 50.0;
pub const MONSTER_FIRST_SPAWN: std::ops::Range<i32> = 40..80;
pub const MONSTER_RESPAWN: std::ops::Range<i32> = 400..800;

// ── Lasers, obstacles & damage ───────────────────────────────────────────────

pub const LASER_WIDTH: f32 = 4.0;
pub const LASER_HEIGHT: f32 = 20.0;
/// Lasers are discarded once this far beyond the top or bottom edge.
pub const LASER_OFFSCREEN_MARGIN: f32 = 50.0;

pub const BLOCK_SIZE: f32 = 6.0;
pub const OBSTACLE_Y_START: f32 = 480.0;

pub const LASER_DAMAGE: i32 = 50;
pub const MONSTER_LASER_DAMAGE: i32 = 100;
pub const CONTACT_DAMAGE: i32 = 5;

// ── Per-run configuration ────────────────────────────────────────────────────

/// Spacing and origin of the dinosaur grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub x_distance: f32,
    pub y_distance: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        GridLayout {
            x_distance: DINOSAUR_X_DISTANCE,
            y_distance: DINOSAUR_Y_DISTANCE,
            x_offset: DINOSAUR_X_OFFSET,
            y_offset: DINOSAUR_Y_OFFSET,
        }
    }
}

impl GridLayout {
    /// Right edge of the last column.
    pub fn right(&self, cols: usize) -> f32 {
        self.x_offset + cols.saturating_sub(1) as f32 * self.x_distance + DINOSAUR_WIDTH
    }

    /// Bottom edge of the last row.
    pub fn bottom(&self, rows: usize) -> f32 {
        self.y_offset + rows.saturating_sub(1) as f32 * self.y_distance + DINOSAUR_HEIGHT
    }
}

/// Everything a host chooses before a run starts.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub dinosaur_rows: usize,
    pub dinosaur_cols: usize,
    pub obstacle_amount: usize,
    /// Initial formation direction; `Direction::Static` keeps it in place.
    pub dinosaur_direction: Direction,
    pub layout: GridLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            dinosaur_rows: DEFAULT_DINOSAUR_ROWS,
            dinosaur_cols: DEFAULT_DINOSAUR_COLS,
            obstacle_amount: DEFAULT_OBSTACLE_AMOUNT,
            dinosaur_direction: Direction::Right,
            layout: GridLayout::default(),
        }
    }
}

impl GameConfig {
    /// Reject configurations that cannot lay out a field.
    pub fn validate(&self) -> GameResult<()> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "screen must have a positive size, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.obstacle_amount == 0 {
            return Err(GameError::InvalidConfig(
                "at least one obstacle is required".to_string(),
            ));
        }
        if self.dinosaur_cols > 0 {
            let right = self.layout.right(self.dinosaur_cols);
            if right >= self.screen_width {
                return Err(GameError::InvalidConfig(format!(
                    "{} dinosaur columns do not fit a screen {} wide",
                    self.dinosaur_cols, self.screen_width
                )));
            }
        }
        if self.dinosaur_rows > 0 {
            let bottom = self.layout.bottom(self.dinosaur_rows);
            if bottom >= self.screen_height {
                return Err(GameError::InvalidConfig(format!(
                    "{} dinosaur rows do not fit a screen {} high",
                    self.dinosaur_rows, self.screen_height
                )));
            }
        }
        Ok(())
    }
}
