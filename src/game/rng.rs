/// Seed used when no entropy source is available.
pub const DEFAULT_SEED: u16 = 0xACE1;

const MULTIPLIER: u16 = 1_103_515_245u32 as u16;
const INCREMENT: u16 = 12_345;

/// 16-bit linear congruential byte generator.
///
/// The recurrence is `state = state * 1103515245 + 12345` truncated to 16
/// bits; each draw yields the high byte of the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng {
    state: u16,
}

impl Rng {
    pub fn new(seed: u16) -> Self {
        Self { state: seed }
    }

    pub fn next_byte(&mut self) -> u8 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 8) as u8
    }

    pub fn state(&self) -> u16 {
        self.state
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
