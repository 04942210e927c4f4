//! Frame-locked game loop
//!
//! Every display frame the loop samples input and latches a direction. Every
//! `frame_delay` frames it moves the snake, resolves food and rewrites the
//! sprite table. There is no game-over; the loop only stops when the
//! platform is halted from outside.

use anyhow::{Result, anyhow};
use tracing::info;

use crate::game::{
    Action, FOOD_SPRITE_SLOT, GameConfig, GameEngine, GameState, GridMapper, MAX_SPRITES, Rng,
    StepInfo,
};
use crate::platform::{Platform, Tile};

pub const SEGMENT_TILE: u8 = 0;
pub const FOOD_TILE: u8 = 1;

/// Solid 8x8 block
const SEGMENT_TILE_DATA: Tile = [
    0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00,
];

/// 8x8 diamond
const FOOD_TILE_DATA: Tile = [
    0x18, 0x00, 0x3C, 0x00, 0x7E, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x7E, 0x00, 0x3C, 0x00, 0x18, 0x00,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WaitingForTick,
    Stepping,
}

/// Owns the game state and drives it from a [`Platform`]
pub struct GameLoop<P: Platform> {
    platform: P,
    engine: GameEngine,
    state: GameState,
    mapper: GridMapper,
    frame_delay: u16,
    phase: Phase,
}

impl<P: Platform> GameLoop<P> {
    /// Seed the RNG, bring up video and draw the opening position.
    ///
    /// `config.seed` wins over the platform entropy source. Fails without
    /// touching the platform when `config` does not validate.
    pub fn new(config: &GameConfig, mut platform: P) -> Result<Self> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

        let seed = config.seed.unwrap_or_else(|| platform.read_entropy());
        info!(
            seed,
            width = config.grid_width,
            height = config.grid_height,
            frame_delay = config.frame_delay,
            "starting game"
        );

        platform.upload_tiles(SEGMENT_TILE, &[SEGMENT_TILE_DATA, FOOD_TILE_DATA]);
        for slot in 0..MAX_SPRITES as u8 {
            platform.set_sprite_tile(slot, SEGMENT_TILE);
            platform.move_sprite(slot, 0, 0);
        }
        platform.enable_sprites();
        platform.enable_display();

        let mut engine = GameEngine::new(config, Rng::new(seed));
        let state = engine.reset();

        let mut game_loop = Self {
            platform,
            engine,
            state,
            mapper: config.mapper(),
            frame_delay: config.frame_delay,
            phase: Phase::WaitingForTick,
        };
        game_loop.draw();
        Ok(game_loop)
    }

    /// Run until the platform is halted
    pub fn run(&mut self) -> Result<()> {
        while !self.platform.halted() {
            self.frame()?;
        }
        info!(
            steps = self.state.steps,
            length = self.state.snake.len(),
            "platform halted"
        );
        Ok(())
    }

    /// Run exactly `frames` frames, ignoring the halt signal
    pub fn run_frames(&mut self, frames: u64) -> Result<()> {
        for _ in 0..frames {
            self.frame()?;
        }
        Ok(())
    }

    /// One display frame. Returns the step outcome on movement frames.
    pub fn frame(&mut self) -> Result<Option<StepInfo>> {
        self.platform.wait_next_frame()?;
        self.state.frame_counter = self.state.frame_counter.wrapping_add(1);

        let action = Action::from_buttons(self.platform.read_input());
        self.engine.apply(&mut self.state, action);

        if self.state.frame_counter % self.frame_delay == 0 {
            self.phase = Phase::Stepping;
        }

        match self.phase {
            Phase::WaitingForTick => Ok(None),
            Phase::Stepping => {
                let info = self.engine.step(&mut self.state);
                self.draw();
                self.phase = Phase::WaitingForTick;
                Ok(Some(info))
            }
        }
    }

    /// Segments take slots from 0 in buffer order; food has its own slot
    fn draw(&mut self) {
        for (slot, segment) in self.state.snake.segments().iter().enumerate() {
            let (px, py) = self.mapper.to_render_position(segment.x, segment.y);
            self.platform.set_sprite_tile(slot as u8, SEGMENT_TILE);
            self.platform.move_sprite(slot as u8, px, py);
        }

        let food = self.state.food;
        let (px, py) = self.mapper.to_render_position(food.x, food.y);
        self.platform.set_sprite_tile(FOOD_SPRITE_SLOT, FOOD_TILE);
        self.platform.move_sprite(FOOD_SPRITE_SLOT, px, py);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn into_parts(self) -> (P, GameState) {
        (self.platform, self.state)
    }
}
