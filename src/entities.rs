/// All game entity types, plus the single update rule each one owns.

use crate::config::*;
use crate::sprite::{Rect, Sprite};

// ── Enums ─────────────────────────────────────────────────────────────────────

/// Row-derived category of a dinosaur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Green,
    Yellow,
    Red,
}

impl Tier {
    /// Row 0 is green, row 1 yellow, everything below red.
    pub fn for_row(row: usize) -> Tier {
        match row {
            0 => Tier::Green,
            1 => Tier::Yellow,
            _ => Tier::Red,
        }
    }

    pub fn starting_health(&self) -> i32 {
        match self {
            Tier::Green => 50,
            Tier::Yellow => 100,
            Tier::Red => 150,
        }
    }

    /// Score awarded for every hit, lethal or not.
    pub fn value(&self) -> u32 {
        match self {
            Tier::Green => 300,
            Tier::Yellow => 200,
            Tier::Red => 100,
        }
    }
}

/// Horizontal direction of the dinosaur formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Static,
    Right,
}

impl Direction {
    /// Horizontal displacement per tick: -1, 0 or 1.
    pub fn step(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Static => 0.0,
            Direction::Right => 1.0,
        }
    }
}

/// Side of the screen a monster enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaserOwner {
    Robot,
    Dinosaur,
}

/// Result of a run so far.  Terminal variants carry the final score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Lost { score: u32 },
    Cleared { score: u32 },
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

// ── Projectiles & cover ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub rect: Rect,
    /// Signed vertical velocity, negative is upward.
    pub speed: f32,
    pub owner: LaserOwner,
}

impl Laser {
    /// Laser fired by the robot from `(cx, cy)`, travelling up.
    pub fn from_robot(cx: f32, cy: f32) -> Self {
        Laser {
            rect: Rect::from_center(cx, cy, LASER_WIDTH, LASER_HEIGHT),
            speed: -ROBOT_LASER_SPEED,
            owner: LaserOwner::Robot,
        }
    }

    /// Laser fired by a dinosaur from `(cx, cy)`, travelling down.
    pub fn from_dinosaur(cx: f32, cy: f32) -> Self {
        Laser {
            rect: Rect::from_center(cx, cy, LASER_WIDTH, LASER_HEIGHT),
            speed: DINOSAUR_LASER_SPEED,
            owner: LaserOwner::Dinosaur,
        }
    }

    /// Move one tick.  Returns `false` once the laser has left the screen.
    pub fn update(&mut self, screen_height: f32) -> bool {
        self.rect.y += self.speed;
        self.rect.y > -LASER_OFFSCREEN_MARGIN
            && self.rect.y < screen_height + LASER_OFFSCREEN_MARGIN
    }
}

impl Sprite for Laser {
    fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub rect: Rect,
}

impl Block {
    pub fn new(x: f32, y: f32) -> Self {
        Block {
            rect: Rect::new(x, y, BLOCK_SIZE, BLOCK_SIZE),
        }
    }
}

impl Sprite for Block {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Robot, dinosaurs & monster ────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Robot {
    pub rect: Rect,
    pub current_health: i32,
    /// Ticks left before the robot may fire again.
    pub recharge: u32,
    pub lasers: Vec<Laser>,
    /// Right bound of horizontal movement.
    pub max_x: f32,
}

impl Robot {
    /// Robot standing with its mid-bottom at `(cx, bottom)`.
    pub fn new(cx: f32, bottom: f32, max_x: f32) -> Self {
        Robot {
            rect: Rect::from_midbottom(cx, bottom, ROBOT_WIDTH, ROBOT_HEIGHT),
            current_health: ROBOT_MAX_HEALTH,
            recharge: 0,
            lasers: Vec::new(),
            max_x,
        }
    }

    /// Shift horizontally by `dx`, staying inside `[0, max_x]`.
    pub fn shift(&mut self, dx: f32) {
        let max_left = (self.max_x - self.rect.w).max(0.0);
        self.rect.x = (self.rect.x + dx).clamp(0.0, max_left);
    }

    pub fn get_damage(&mut self, amount: i32) {
        self.current_health -= amount;
    }

    pub fn ready(&self) -> bool {
        self.recharge == 0
    }
}

impl Sprite for Robot {
    fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dinosaur {
    pub rect: Rect,
    pub tier: Tier,
    pub current_health: i32,
    pub value: u32,
}

impl Dinosaur {
    pub fn new(tier: Tier, x: f32, y: f32) -> Self {
        Dinosaur {
            rect: Rect::new(x, y, DINOSAUR_WIDTH, DINOSAUR_HEIGHT),
            tier,
            current_health: tier.starting_health(),
            value: tier.value(),
        }
    }

    pub fn update(&mut self, direction: Direction) {
        self.rect.x += direction.step();
    }

    pub fn get_damage(&mut self, amount: i32) {
        self.current_health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }
}

impl Sprite for Dinosaur {
    fn rect(&self) -> Rect {
        self.rect
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub rect: Rect,
    pub side: Side,
    /// Signed horizontal velocity.
    pub speed: f32,
    pub current_health: i32,
}

impl Monster {
    /// A monster just outside the given side of the screen, heading inward.
    pub fn new(side: Side, screen_width: f32) -> Self {
        let (x, speed) = match side {
            Side::Left => (-MONSTER_SPAWN_MARGIN - MONSTER_WIDTH, MONSTER_SPEED),
            Side::Right => (screen_width + MONSTER_SPAWN_MARGIN, -MONSTER_SPEED),
        };
        Monster {
            rect: Rect::new(x, MONSTER_Y, MONSTER_WIDTH, MONSTER_HEIGHT),
            side,
            speed,
            current_health: MONSTER_MAX_HEALTH,
        }
    }

    /// Move one tick.  Returns `false` once it has crossed the whole screen.
    pub fn update(&mut self, screen_width: f32) -> bool {
        self.rect.x += self.speed;
        match self.side {
            Side::Left => self.rect.left() <= screen_width + MONSTER_SPAWN_MARGIN,
            Side::Right => self.rect.right() >= -MONSTER_SPAWN_MARGIN,
        }
    }

    pub fn get_damage(&mut self, amount: i32) {
        self.current_health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }
}

impl Sprite for Monster {
    fn rect(&self) -> Rect {
        self.rect
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The aggregate root: everything one run owns.  Cloneable so `tick` can
/// hand back a fresh snapshot without touching the caller's copy.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub robot: Robot,
    pub dinosaurs: Vec<Dinosaur>,
    pub dinosaur_lasers: Vec<Laser>,
    pub blocks: Vec<Block>,
    pub dinosaur_direction: Direction,
    /// Single slot; a spawn while occupied is suppressed.
    pub monster: Option<Monster>,
    pub monster_spawn_countdown: i32,
    /// Ticks until the formation fires again.
    pub dinosaur_shot_countdown: u32,
    pub lives: u32,
    pub score: u32,
    pub frame: u64,
    pub status: GameStatus,
}
