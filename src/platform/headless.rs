use anyhow::Result;
use std::collections::VecDeque;

use super::{Buttons, Platform, Tile, Video};

/// In-memory platform with scripted input.
///
/// Frames complete immediately. Each frame consumes one entry of the input
/// script; once it runs out no buttons are pressed.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPlatform {
    pub video: Video,
    input: VecDeque<Buttons>,
    entropy: u16,
    frames: u64,
    halt_after: Option<u64>,
}

impl HeadlessPlatform {
    pub fn new(entropy: u16) -> Self {
        Self {
            entropy,
            ..Default::default()
        }
    }

    /// Queue one input sample per upcoming frame
    pub fn with_input(mut self, script: impl IntoIterator<Item = Buttons>) -> Self {
        self.input.extend(script);
        self
    }

    /// Report [`Platform::halted`] once `frames` frames have elapsed
    pub fn halt_after(mut self, frames: u64) -> Self {
        self.halt_after = Some(frames);
        self
    }

    pub fn push_input(&mut self, buttons: Buttons) {
        self.input.push_back(buttons);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Platform for HeadlessPlatform {
    fn wait_next_frame(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn read_input(&mut self) -> Buttons {
        self.input.pop_front().unwrap_or_default()
    }

    fn set_sprite_tile(&mut self, slot: u8, tile: u8) {
        self.video.sprites.set_tile(slot, tile);
    }

    fn move_sprite(&mut self, slot: u8, px: u16, py: u16) {
        self.video.sprites.move_to(slot, px, py);
    }

    fn upload_tiles(&mut self, first_tile: u8, tiles: &[Tile]) {
        self.video.tiles.load(first_tile, tiles);
    }

    fn enable_sprites(&mut self) {
        self.video.sprites_enabled = true;
    }

    fn enable_display(&mut self) {
        self.video.display_enabled = true;
    }

    fn read_entropy(&mut self) -> u16 {
        self.entropy
    }

    fn halted(&self) -> bool {
        self.halt_after.is_some_and(|limit| self.frames >= limit)
    }
}
