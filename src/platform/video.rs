use tracing::warn;

use crate::game::MAX_SPRITES;

/// Bytes in one 8x8 2bpp tile
pub const TILE_BYTES: usize = 16;

pub type Tile = [u8; TILE_BYTES];

/// One hardware sprite: a tile index placed at a pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sprite {
    pub tile: u8,
    pub x: u16,
    pub y: u16,
}

/// Fixed table of [`MAX_SPRITES`] sprites addressed by slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTable {
    sprites: [Sprite; MAX_SPRITES],
}

impl SpriteTable {
    pub fn new() -> Self {
        Self {
            sprites: [Sprite::default(); MAX_SPRITES],
        }
    }

    pub fn get(&self, slot: u8) -> Option<&Sprite> {
        self.sprites.get(slot as usize)
    }

    fn get_mut(&mut self, slot: u8) -> Option<&mut Sprite> {
        let sprite = self.sprites.get_mut(slot as usize);
        if sprite.is_none() {
            warn!(slot, "sprite slot out of range");
        }
        sprite
    }

    pub fn set_tile(&mut self, slot: u8, tile: u8) {
        if let Some(sprite) = self.get_mut(slot) {
            sprite.tile = tile;
        }
    }

    pub fn move_to(&mut self, slot: u8, x: u16, y: u16) {
        if let Some(sprite) = self.get_mut(slot) {
            sprite.x = x;
            sprite.y = y;
        }
    }

    /// Slots in ascending order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u8, &Sprite)> {
        self.sprites
            .iter()
            .enumerate()
            .map(|(slot, sprite)| (slot as u8, sprite))
    }
}

impl Default for SpriteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Uploaded tile bitmaps, indexed by tile id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileBank {
    tiles: Vec<Tile>,
}

impl TileBank {
    /// Store `tiles` at `first..`, growing the bank with blank tiles as needed
    pub fn load(&mut self, first: u8, tiles: &[Tile]) {
        let first = first as usize;
        let end = first + tiles.len();
        if self.tiles.len() < end {
            self.tiles.resize(end, [0; TILE_BYTES]);
        }
        self.tiles[first..end].copy_from_slice(tiles);
    }

    pub fn get(&self, id: u8) -> Option<&Tile> {
        self.tiles.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether tile `id` would draw anything. Missing tiles are blank.
    pub fn is_visible(&self, id: u8) -> bool {
        self.get(id).is_some_and(|tile| tile.iter().any(|&b| b != 0))
    }
}

/// Sprite memory plus the display switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Video {
    pub sprites: SpriteTable,
    pub tiles: TileBank,
    pub sprites_enabled: bool,
    pub display_enabled: bool,
}

impl Video {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything can appear on screen at all
    pub fn is_showing_sprites(&self) -> bool {
        self.sprites_enabled && self.display_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLID: Tile = [0xFF; TILE_BYTES];

    #[test]
    fn test_new_table_is_parked() {
        let table = SpriteTable::new();
        assert_eq!(table.iter().count(), MAX_SPRITES);
        assert!(table.iter().all(|(_, s)| *s == Sprite::default()));
    }

    #[test]
    fn test_sprite_writes() {
        let mut table = SpriteTable::new();
        table.set_tile(4, 2);
        table.move_to(4, 24, 40);
        assert_eq!(
            table.get(4),
            Some(&Sprite {
                tile: 2,
                x: 24,
                y: 40
            })
        );
    }

    #[test]
    fn test_out_of_range_slot_ignored() {
        let mut table = SpriteTable::new();
        table.set_tile(MAX_SPRITES as u8, 1);
        table.move_to(200, 1, 1);
        assert_eq!(table, SpriteTable::new());
        assert!(table.get(MAX_SPRITES as u8).is_none());
    }

    #[test]
    fn test_tile_bank_load_with_gap() {
        let mut bank = TileBank::default();
        bank.load(2, &[SOLID]);
        assert_eq!(bank.len(), 3);
        assert!(!bank.is_visible(0));
        assert!(bank.is_visible(2));
        assert!(!bank.is_visible(9));

        bank.load(0, &[SOLID, [0; TILE_BYTES]]);
        assert_eq!(bank.len(), 3);
        assert!(bank.is_visible(0));
        assert!(!bank.is_visible(1));
    }

    #[test]
    fn test_video_switches() {
        let mut video = Video::new();
        assert!(!video.is_showing_sprites());
        video.sprites_enabled = true;
        assert!(!video.is_showing_sprites());
        video.display_enabled = true;
        assert!(video.is_showing_sprites());
    }
}
