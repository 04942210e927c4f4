use tracing::{debug, trace};

use super::{
    action::Action,
    config::GameConfig,
    food::FoodPlacer,
    grid::Grid,
    rng::Rng,
    state::{GameState, Snake},
};

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the head landed on the food this step
    pub ate_food: bool,
    /// Whether the snake actually got longer; false at the growth ceiling
    pub grew: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    grid: Grid,
    food_placer: FoodPlacer,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig, rng: Rng) -> Self {
        Self {
            grid: config.grid(),
            food_placer: FoodPlacer::new(rng),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fresh snake and first food cell
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(&self.grid);
        let food = self.food_placer.place_random(&self.grid);
        debug!(x = food.x, y = food.y, "food placed");

        GameState::new(snake, food)
    }

    /// Latch the direction carried by `action`, if any
    pub fn apply(&self, state: &mut GameState, action: Action) {
        if let Action::Move(direction) = action {
            state.snake.set_direction(direction);
        }
    }

    /// Move the snake one cell
    pub fn advance(&self, state: &mut GameState) {
        state.snake.advance(&self.grid);
        state.steps += 1;

        let head = state.snake.head();
        trace!(step = state.steps, x = head.x, y = head.y, "advanced");
    }

    /// Grow and re-place the food when the head sits on it
    pub fn check_and_resolve(&mut self, state: &mut GameState) -> StepInfo {
        if state.snake.head() != state.food {
            return StepInfo::default();
        }

        state.foods_eaten += 1;
        let grew = state.snake.grow();
        if !grew {
            debug!(length = state.snake.len(), "growth ceiling reached");
        }

        state.food = self.food_placer.place_random(&self.grid);
        debug!(
            length = state.snake.len(),
            x = state.food.x,
            y = state.food.y,
            "food eaten"
        );

        StepInfo {
            ate_food: true,
            grew,
        }
    }

    /// One movement tick: advance, then resolve food
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        self.advance(state);
        self.check_and_resolve(state)
    }
}
