use anyhow::Result;

use super::play::GameLoop;
use crate::game::{DEFAULT_SEED, GameConfig, GameState};
use crate::platform::HeadlessPlatform;

/// Run a fixed number of frames without input or display
pub struct HeadlessMode {
    config: GameConfig,
    frames: u64,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, frames: u64) -> Self {
        Self { config, frames }
    }

    /// Final state after all frames. Deterministic for a given seed; the
    /// platform entropy word is [`DEFAULT_SEED`] when no seed is configured.
    pub fn run(&self) -> Result<GameState> {
        let platform = HeadlessPlatform::new(DEFAULT_SEED);
        let mut game_loop = GameLoop::new(&self.config, platform)?;
        game_loop.run_frames(self.frames)?;

        let (_, state) = game_loop.into_parts();
        Ok(state)
    }
}
