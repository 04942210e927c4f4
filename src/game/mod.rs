//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Everything here is deterministic given the RNG seed.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod rng;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{FOOD_SPRITE_SLOT, GameConfig, INITIAL_SNAKE_LENGTH, MAX_SNAKE, MAX_SPRITES};
pub use engine::{GameEngine, StepInfo};
pub use food::FoodPlacer;
pub use grid::{Grid, GridMapper};
pub use rng::{DEFAULT_SEED, Rng};
pub use state::{GameState, Position, Snake};
