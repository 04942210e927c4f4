use heapless::Vec;
use serde::Serialize;

use super::action::Direction;
use super::config::{INITIAL_SNAKE_LENGTH, MAX_SNAKE};
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snake {
    /// Body segments, tail at index 0 and head last. Never empty.
    segments: Vec<Position, MAX_SNAKE>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Three segments in a row ending at the grid center, facing right.
    pub fn new(grid: &Grid) -> Self {
        let center = grid.center();
        let mut segments = Vec::new();
        for i in 0..INITIAL_SNAKE_LENGTH as u8 {
            let x = center.x + 1 + i - INITIAL_SNAKE_LENGTH as u8;
            // capacity is well above the initial length
            let _ = segments.push(Position::new(x, center.y));
        }

        Self {
            segments,
            direction: Direction::Right,
        }
    }

    /// Build a snake from explicit segments, tail first. Returns `None` when
    /// `segments` is empty or longer than [`MAX_SNAKE`].
    pub fn from_segments(segments: &[Position], direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: Vec::from_slice(segments).ok()?,
            direction,
        })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Get the tail position
    pub fn tail(&self) -> Position {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake keeps at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.segments.is_full()
    }

    /// Overwrite the direction; no reversal check.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Move one cell in the current direction. Every segment takes the cell
    /// of the one ahead of it, then the head steps with wrap-around.
    pub fn advance(&mut self, grid: &Grid) {
        let head = self.head();
        let len = self.segments.len();
        self.segments.copy_within(1..len, 0);
        self.segments[len - 1] = grid.step(head, self.direction);
    }

    /// Duplicate the tail so the body is one segment longer next tick.
    /// Returns false, leaving every segment untouched, at [`MAX_SNAKE`].
    pub fn grow(&mut self) -> bool {
        let tail = self.tail();
        self.segments.insert(0, tail).is_ok()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Display frames seen, wrapping
    pub frame_counter: u16,
    /// Movement ticks performed
    pub steps: u32,
    /// Food consumed, including consumption at the growth ceiling
    pub foods_eaten: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position) -> Self {
        Self {
            snake,
            food,
            frame_counter: 0,
            steps: 0,
            foods_eaten: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(y: u8, xs: &[u8]) -> std::vec::Vec<Position> {
        xs.iter().map(|&x| Position::new(x, y)).collect()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(&Grid::new(20, 18));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.direction, Direction::Right);
        assert_eq!(snake.segments(), row(9, &[8, 9, 10]).as_slice());
        assert_eq!(snake.head(), Position::new(10, 9));
        assert_eq!(snake.tail(), Position::new(8, 9));
    }

    #[test]
    fn test_snake_creation_on_narrowest_grid() {
        let snake = Snake::new(&Grid::new(4, 1));
        assert_eq!(snake.segments(), row(0, &[0, 1, 2]).as_slice());
    }

    #[test]
    fn test_from_segments_limits() {
        assert!(Snake::from_segments(&[], Direction::Up).is_none());

        let too_long = vec![Position::new(0, 0); MAX_SNAKE + 1];
        assert!(Snake::from_segments(&too_long, Direction::Up).is_none());

        let full = vec![Position::new(0, 0); MAX_SNAKE];
        assert!(Snake::from_segments(&full, Direction::Up).unwrap().is_full());
    }

    #[test]
    fn test_advance_shifts_body() {
        let grid = Grid::new(20, 18);
        let mut snake = Snake::from_segments(&row(5, &[1, 2, 3]), Direction::Right).unwrap();

        snake.advance(&grid);

        assert_eq!(snake.segments(), row(5, &[2, 3, 4]).as_slice());
    }

    #[test]
    fn test_advance_turning_body_follows_path() {
        let grid = Grid::new(20, 18);
        let mut snake = Snake::from_segments(&row(5, &[1, 2, 3]), Direction::Right).unwrap();

        snake.set_direction(Direction::Down);
        snake.advance(&grid);
        snake.advance(&grid);

        assert_eq!(
            snake.segments(),
            &[Position::new(3, 5), Position::new(3, 6), Position::new(3, 7)]
        );
    }

    #[test]
    fn test_advance_wraps_head() {
        let grid = Grid::new(20, 18);
        let mut snake = Snake::from_segments(&row(5, &[17, 18, 19]), Direction::Right).unwrap();

        snake.advance(&grid);

        assert_eq!(snake.head(), Position::new(0, 5));
        assert_eq!(snake.segments(), row(5, &[18, 19, 0]).as_slice());
    }

    #[test]
    fn test_advance_stays_in_bounds() {
        let grid = Grid::new(6, 4);
        let mut snake = Snake::new(&grid);
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

        for tick in 0..200 {
            if tick % 7 == 0 {
                snake.set_direction(turns[(tick / 7) % turns.len()]);
            }
            snake.advance(&grid);
            assert!(snake.segments().iter().all(|&pos| grid.contains(pos)));
        }
    }

    #[test]
    fn test_reversal_is_not_prevented() {
        let grid = Grid::new(20, 18);
        let mut snake = Snake::from_segments(&row(5, &[1, 2, 3]), Direction::Right).unwrap();

        snake.set_direction(Direction::Left);
        snake.advance(&grid);

        assert_eq!(snake.direction, Direction::Left);
        assert_eq!(snake.segments(), row(5, &[2, 3, 2]).as_slice());
    }

    #[test]
    fn test_direction_latch_last_wins() {
        let grid = Grid::new(20, 18);
        let mut snake = Snake::from_segments(&row(5, &[1, 2, 3]), Direction::Right).unwrap();

        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left);
        snake.advance(&grid);

        assert_eq!(snake.head(), Position::new(2, 5));
    }

    #[test]
    fn test_grow_duplicates_tail() {
        let mut snake = Snake::from_segments(&row(5, &[1, 2, 3]), Direction::Right).unwrap();

        assert!(snake.grow());

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments(), row(5, &[1, 1, 2, 3]).as_slice());
        assert_eq!(snake.head(), Position::new(3, 5));
    }

    #[test]
    fn test_grown_tail_unfolds_on_next_advance() {
        let grid = Grid::new(20, 18);
        let mut snake = Snake::from_segments(&row(5, &[1, 2, 3]), Direction::Right).unwrap();

        snake.grow();
        snake.advance(&grid);

        assert_eq!(snake.segments(), row(5, &[1, 2, 3, 4]).as_slice());
    }

    #[test]
    fn test_grow_saturates_at_capacity() {
        let mut snake = Snake::new(&Grid::new(20, 18));
        for _ in 0..100 {
            snake.grow();
            assert!(snake.len() <= MAX_SNAKE);
        }
        assert_eq!(snake.len(), MAX_SNAKE);

        let before = snake.clone();
        assert!(!snake.grow());
        assert_eq!(snake, before);
    }
}
