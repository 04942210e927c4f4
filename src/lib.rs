//! Sprite Snake - a fixed-timestep grid snake for sprite-budgeted hardware
//!
//! This library provides:
//! - Core game logic: snake buffer, wrap-around movement, food and growth (game module)
//! - The platform seam the game draws and reads input through (platform module)
//! - Terminal input and rendering for the terminal platform (input, render modules)
//! - The frame-locked game loop and its execution modes (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod platform;
pub mod render;
