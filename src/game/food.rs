use super::grid::Grid;
use super::rng::Rng;
use super::state::Position;

/// Chooses food cells from the game RNG.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: Rng,
}

impl FoodPlacer {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }

    /// Draw x then y. The cell may lie under the snake body.
    pub fn place_random(&mut self, grid: &Grid) -> Position {
        let x = self.rng.next_byte() % grid.width;
        let y = self.rng.next_byte() % grid.height;
        Position::new(x, y)
    }

    pub fn rng(&self) -> &Rng {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_placement_from_default_seed() {
        let mut placer = FoodPlacer::new(Rng::default());
        let grid = Grid::new(20, 18);

        assert_eq!(placer.place_random(&grid), Position::new(10, 16));
        assert_eq!(placer.place_random(&grid), Position::new(18, 0));
    }

    #[test]
    fn test_placement_stays_on_grid() {
        let mut placer = FoodPlacer::new(Rng::new(99));
        let grid = Grid::new(7, 3);
        for _ in 0..500 {
            assert!(grid.contains(placer.place_random(&grid)));
        }
    }

    #[test]
    fn test_placement_consumes_two_bytes() {
        let mut placer = FoodPlacer::new(Rng::new(5));
        let mut reference = Rng::new(5);

        placer.place_random(&Grid::new(20, 18));
        reference.next_byte();
        reference.next_byte();

        assert_eq!(placer.rng(), &reference);
    }
}
