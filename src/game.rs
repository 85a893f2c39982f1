use log::{debug, info, warn};
use rand::Rng;

use crate::collision::check_collisions;
use crate::config::GameConfig;
use crate::food::Food;
use crate::input::DirectionState;
use crate::snake::{Direction, Snake};
use crate::Coords;

const START: Coords = (0, 0);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver,
}

/// What a tick changed, for the renderer to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved { new_head: Coords, old_tail: Option<Coords>, new_food: Option<Coords> },
    Crashed,
}

/// Headless game state. Nothing in here touches the terminal.
pub struct Game {
    config: GameConfig,
    snake: Snake,
    food: Food,
    score: u64,
    direction: DirectionState,
    state: GameState,
}

impl Game {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let snake = Snake::new(START, config.initial_body_length);
        let food = Food::spawn(rng, &config);
        Game::with_state(config, snake, food, Direction::Down)
    }

    pub fn with_state(config: GameConfig, snake: Snake, food: Food, direction: Direction) -> Self {
        Game {
            config,
            snake,
            food,
            score: 0,
            direction: DirectionState::new(direction),
            state: GameState::Running,
        }
    }

    pub fn change_direction(&mut self, new_direction: Direction) {
        if self.is_over() {
            return;
        }
        if self.direction.set(new_direction) {
            debug!("direction -> {:?}", new_direction);
        }
    }

    /// Moves the snake one cell. Once the game is over this does nothing.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Crashed;
        }

        let (x, y) = self.snake.head();
        let (dx, dy) = self.direction.get().offset(self.config.cell_size);
        let new_head = (x + dx, y + dy);

        self.snake.push_head(new_head);

        let (old_tail, new_food) = if new_head == self.food.position() {
            self.score += 1;
            self.food = Food::spawn(rng, &self.config);
            info!("food eaten, score {}", self.score);

            if self.snake.contains(self.food.position()) {
                warn!("food respawned under the snake at {:?}", self.food.position());
            }
            (None, Some(self.food.position()))
        } else {
            (self.snake.pop_tail(), None)
        };

        if check_collisions(&self.snake, &self.config) {
            self.state = GameState::GameOver;
            info!("game over at {:?}: score {}, length {}", new_head, self.score, self.snake.len());
            return TickOutcome::Crashed;
        }

        TickOutcome::Moved { new_head, old_tail, new_food }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food.position()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction.get()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
