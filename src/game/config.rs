use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::grid::{Grid, GridMapper};

/// Total hardware sprite slots
pub const MAX_SPRITES: usize = 40;
/// Slot reserved for the food marker
pub const FOOD_SPRITE_SLOT: u8 = 39;
/// Segment capacity, one less than the sprite budget
pub const MAX_SNAKE: usize = FOOD_SPRITE_SLOT as usize;
/// Length of a freshly initialized snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: u8,
    /// Height of the game grid in cells
    pub grid_height: u8,
    /// Edge length of one cell in pixels
    pub cell_size: u16,
    /// Horizontal pixel offset of cell (0, 0)
    pub offset_x: u16,
    /// Vertical pixel offset of cell (0, 0)
    pub offset_y: u16,
    /// Frames between movement ticks
    pub frame_delay: u16,
    /// Fixed RNG seed; the platform entropy source is used when unset
    pub seed: Option<u16>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 18,
            cell_size: 8,
            offset_x: 8,
            offset_y: 16,
            frame_delay: 6,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn mapper(&self) -> GridMapper {
        GridMapper::new(self.cell_size, self.offset_x, self.offset_y)
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are valid, `Err(String)` with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if (self.grid_width as usize) < INITIAL_SNAKE_LENGTH + 1 {
            return Err(format!(
                "grid_width must be at least {}, got {}",
                INITIAL_SNAKE_LENGTH + 1,
                self.grid_width
            ));
        }

        if self.grid_height == 0 {
            return Err("grid_height must be at least 1".to_string());
        }

        if self.cell_size == 0 {
            return Err("cell_size must be at least 1".to_string());
        }

        if self.frame_delay == 0 {
            return Err("frame_delay must be at least 1".to_string());
        }

        let far_x = (self.grid_width as u16 - 1)
            .checked_mul(self.cell_size)
            .and_then(|px| px.checked_add(self.offset_x));
        let far_y = (self.grid_height as u16 - 1)
            .checked_mul(self.cell_size)
            .and_then(|py| py.checked_add(self.offset_y));
        if far_x.is_none() || far_y.is_none() {
            return Err(format!(
                "a {}x{} grid of {}px cells does not fit in 16-bit pixel space",
                self.grid_width, self.grid_height, self.cell_size
            ));
        }

        // unused sprites are parked at (0, 0) and must stay off-screen
        if self.mapper().to_grid_position(0, 0).is_some() {
            return Err(
                "offset_x or offset_y must be nonzero; (0, 0) is the parked sprite position"
                    .to_string(),
            );
        }

        Ok(())
    }
}
