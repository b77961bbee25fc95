//! # Robots vs Dinosaurs
//!
//! Simulation core for a small arcade shooter: a robot at the bottom of the
//! screen defends against a sweeping formation of dinosaurs and a monster
//! that crosses the top of the screen now and then.
//!
//! The crate is split the same way the game loop is:
//!
//! - [`entities`]: pure data plus the one-line update rule each entity owns
//! - [`formation`]: obstacle and dinosaur grid setup
//! - [`compute`]: the per-frame `tick` and the host-driven robot actions
//! - [`collision`]: collision and damage resolution for one tick
//! - [`sprite`]: rectangles and group overlap queries
//!
//! Nothing in here exits the process. A finished run is reported through
//! [`entities::GameStatus`] and the caller decides what happens next.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod formation;
pub mod sprite;

pub use config::GameConfig;
pub use entities::{GameState, GameStatus};

/// Errors raised while setting up or hosting a game.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// The configuration cannot produce a playable field.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Terminal I/O failed in the host.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
