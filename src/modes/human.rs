use anyhow::Result;

use super::play::GameLoop;
use crate::game::GameConfig;
use crate::platform::TerminalPlatform;
use crate::render::Viewport;

/// Play in the terminal until Q, Esc or Ctrl+C
pub struct HumanMode {
    config: GameConfig,
    fps: u32,
}

impl HumanMode {
    pub fn new(config: GameConfig, fps: u32) -> Self {
        Self { config, fps }
    }

    pub fn run(&mut self) -> Result<()> {
        let viewport = Viewport {
            grid: self.config.grid(),
            mapper: self.config.mapper(),
        };
        let platform = TerminalPlatform::new(viewport, self.fps)?;
        let mut game_loop = GameLoop::new(&self.config, platform)?;

        // Run game loop with cleanup
        let result = game_loop.run();

        let (mut platform, _) = game_loop.into_parts();
        platform.restore()?;

        result
    }
}
