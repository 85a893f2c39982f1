use crate::config::GameConfig;
use crate::snake::Snake;

/// True when the head is off the board or sits on another segment.
pub fn check_collisions(snake: &Snake, config: &GameConfig) -> bool {
    let head = snake.head();

    if !config.contains(head) {
        return true;
    }

    snake.rest().any(|&part| part == head)
}
