use super::action::Direction;
use super::state::Position;

/// Fixed play-field with toroidal edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: u8,
    pub height: u8,
}

impl Grid {
    pub fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Step one cell from `pos`, re-entering at the opposite edge when the
    /// move leaves the grid.
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(
            wrap(pos.x as i16 + dx, self.width),
            wrap(pos.y as i16 + dy, self.height),
        )
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }
}

fn wrap(value: i16, bound: u8) -> u8 {
    if value < 0 {
        bound - 1
    } else if value >= bound as i16 {
        0
    } else {
        value as u8
    }
}

/// Maps grid cells to sprite pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMapper {
    pub cell_size: u16,
    pub offset_x: u16,
    pub offset_y: u16,
}

impl GridMapper {
    pub fn new(cell_size: u16, offset_x: u16, offset_y: u16) -> Self {
        Self {
            cell_size,
            offset_x,
            offset_y,
        }
    }

    pub fn to_render_position(&self, gx: u8, gy: u8) -> (u16, u16) {
        (
            gx as u16 * self.cell_size + self.offset_x,
            gy as u16 * self.cell_size + self.offset_y,
        )
    }

    /// Inverse of [`GridMapper::to_render_position`]. Pixels above or left of
    /// the offsets, or beyond `u8` cell range, have no cell.
    pub fn to_grid_position(&self, px: u16, py: u16) -> Option<(u8, u8)> {
        let gx = px.checked_sub(self.offset_x)? / self.cell_size;
        let gy = py.checked_sub(self.offset_y)? / self.cell_size;
        Some((u8::try_from(gx).ok()?, u8::try_from(gy).ok()?))
    }
}

impl Default for GridMapper {
    fn default() -> Self {
        Self::new(8, 8, 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 18);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 17)));
        assert!(!grid.contains(Position::new(20, 0)));
        assert!(!grid.contains(Position::new(0, 18)));
    }

    #[test]
    fn test_step_inside_grid() {
        let grid = Grid::new(20, 18);
        let pos = Position::new(5, 5);
        assert_eq!(grid.step(pos, Direction::Up), Position::new(5, 4));
        assert_eq!(grid.step(pos, Direction::Down), Position::new(5, 6));
        assert_eq!(grid.step(pos, Direction::Left), Position::new(4, 5));
        assert_eq!(grid.step(pos, Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_step_wraps_every_edge() {
        let grid = Grid::new(20, 18);
        assert_eq!(
            grid.step(Position::new(19, 5), Direction::Right),
            Position::new(0, 5)
        );
        assert_eq!(
            grid.step(Position::new(0, 5), Direction::Left),
            Position::new(19, 5)
        );
        assert_eq!(
            grid.step(Position::new(7, 0), Direction::Up),
            Position::new(7, 17)
        );
        assert_eq!(
            grid.step(Position::new(7, 17), Direction::Down),
            Position::new(7, 0)
        );
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(20, 18).center(), Position::new(10, 9));
        assert_eq!(Grid::new(5, 1).center(), Position::new(2, 0));
    }

    #[test]
    fn test_render_position() {
        let mapper = GridMapper::default();
        assert_eq!(mapper.to_render_position(0, 0), (8, 16));
        assert_eq!(mapper.to_render_position(19, 17), (160, 152));
        assert_eq!(mapper.to_render_position(3, 2), (32, 32));
    }

    #[test]
    fn test_grid_position_inverts_render_position() {
        let mapper = GridMapper::default();
        for gx in 0..20 {
            for gy in 0..18 {
                let (px, py) = mapper.to_render_position(gx, gy);
                assert_eq!(mapper.to_grid_position(px, py), Some((gx, gy)));
            }
        }
    }

    #[test]
    fn test_parked_sprite_has_no_cell() {
        let mapper = GridMapper::default();
        assert_eq!(mapper.to_grid_position(0, 0), None);
        assert_eq!(mapper.to_grid_position(8, 15), None);
    }
}
