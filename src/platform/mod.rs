//! Hardware-facing collaborators of the game loop
//!
//! The game core only talks to the display and controller through the
//! [`Platform`] trait. Two implementations ship with the crate: a headless
//! one that records sprite writes in memory, and a terminal one that draws
//! the sprite table with ratatui.

pub mod headless;
pub mod terminal;
pub mod video;

use anyhow::Result;
use bitflags::bitflags;

pub use headless::HeadlessPlatform;
pub use terminal::TerminalPlatform;
pub use video::{Sprite, SpriteTable, TILE_BYTES, Tile, TileBank, Video};

bitflags! {
    /// Pressed controller buttons, one bit each
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u8 {
        const RIGHT = 0x01;
        const LEFT = 0x02;
        const UP = 0x04;
        const DOWN = 0x08;
        const A = 0x10;
        const B = 0x20;
        const SELECT = 0x40;
        const START = 0x80;
    }
}

/// Display, controller and timing services the game loop runs on.
///
/// Sprite slots are in `0..MAX_SPRITES`; writes to other slots are ignored.
pub trait Platform {
    /// Block until the next display frame. The only suspension point.
    fn wait_next_frame(&mut self) -> Result<()>;

    /// Buttons currently pressed
    fn read_input(&mut self) -> Buttons;

    fn set_sprite_tile(&mut self, slot: u8, tile: u8);

    fn move_sprite(&mut self, slot: u8, px: u16, py: u16);

    /// Load tile bitmaps starting at tile index `first_tile`
    fn upload_tiles(&mut self, first_tile: u8, tiles: &[Tile]);

    fn enable_sprites(&mut self);

    fn enable_display(&mut self);

    /// Free-running counter used once to seed the RNG
    fn read_entropy(&mut self) -> u16;

    /// True once the platform has been stopped from outside the game
    fn halted(&self) -> bool {
        false
    }
}
