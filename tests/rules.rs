use rand::rngs::StdRng;
use rand::SeedableRng;

use snake::collision::check_collisions;
use snake::config::GameConfig;
use snake::food::Food;
use snake::game::{Game, GameState, TickOutcome};
use snake::snake::{Direction, Snake};
use snake::Coords;

fn setup(body: &[Coords], food: Coords, direction: Direction) -> Game {
    let snake = Snake::from_body(body).unwrap();
    Game::with_state(GameConfig::default(), snake, Food::at(food), direction)
}

#[test]
fn first_tick_moves_stacked_snake_down() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut game = setup(&[(0, 0), (0, 0), (0, 0)], (75, 675), Direction::Down);

    let out = game.tick(&mut rng);

    assert_eq!(game.snake().head(), (0, 25));
    assert_eq!(game.snake().len(), 3);
    assert_eq!(game.state(), GameState::Running);
    assert!(matches!(out, TickOutcome::Moved { new_head: (0, 25), old_tail: Some((0, 0)), new_food: None }));
}

#[test]
fn bottom_wall_ends_the_game() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut game = setup(&[(0, 675), (0, 650), (0, 625)], (75, 0), Direction::Down);

    assert_eq!(game.tick(&mut rng), TickOutcome::Crashed);
    assert_eq!(game.snake().head(), (0, 700));
    assert_eq!(game.state(), GameState::GameOver);
}

#[test]
fn eating_food_grows_and_scores() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = setup(&[(25, 100), (25, 75), (25, 50)], (25, 125), Direction::Down);

    let out = game.tick(&mut rng);

    assert_eq!(game.score(), 1);
    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.snake().head(), (25, 125));
    match out {
        TickOutcome::Moved { old_tail, new_food, .. } => {
            assert_eq!(old_tail, None);
            assert_eq!(new_food, Some(game.food()));
        }
        TickOutcome::Crashed => panic!("eating must not end the game"),
    }
    assert!(GameConfig::default().contains(game.food()));
}

#[test]
fn revisiting_a_cell_is_a_collision() {
    let snake = Snake::from_body(&[(50, 50), (50, 75), (50, 50)]).unwrap();
    assert!(check_collisions(&snake, &GameConfig::default()));
}

#[test]
fn running_into_own_body_ends_the_game() {
    let mut rng = StdRng::seed_from_u64(4);
    // Head at (50,50) heading left into (25,50), which is part of the body
    let body = [(50, 50), (50, 75), (25, 75), (25, 50), (25, 25)];
    let mut game = setup(&body, (75, 675), Direction::Left);

    assert_eq!(game.tick(&mut rng), TickOutcome::Crashed);
    assert!(game.is_over());
}

#[test]
fn reversing_is_accepted_and_is_fatal() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = setup(&[(50, 100), (50, 75), (50, 50)], (75, 675), Direction::Down);

    game.change_direction(Direction::Up);
    assert_eq!(game.direction(), Direction::Up);
    assert_eq!(game.tick(&mut rng), TickOutcome::Crashed);
}

#[test]
fn length_is_constant_until_food_is_reached() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut game = setup(&[(0, 50), (0, 25), (0, 0)], (0, 200), Direction::Down);

    for _ in 0..5 {
        game.tick(&mut rng);
        assert_eq!(game.snake().len(), 3);
        assert_eq!(game.score(), 0);
    }

    // Sixth step lands on the food
    game.tick(&mut rng);
    assert_eq!(game.snake().head(), (0, 200));
    assert_eq!(game.snake().len(), 4);
    assert_eq!(game.score(), 1);
}

#[test]
fn default_game_survives_its_opening_moves() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut game = Game::new(GameConfig::default(), &mut rng);
    let food = game.food();

    for step in 1..=3 {
        let out = game.tick(&mut rng);
        assert_ne!(out, TickOutcome::Crashed, "crashed on step {}", step);
        assert_eq!(game.snake().head(), (0, 25 * step));
    }

    if !(1..=3).any(|step| food == (0, 25 * step)) {
        assert_eq!(game.snake().len(), 3);
        let cells: Vec<Coords> = game.snake().body().copied().collect();
        assert_eq!(cells, vec![(0, 75), (0, 50), (0, 25)]);
    }
}

#[test]
fn turning_changes_the_axis_of_travel() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut game = setup(&[(0, 100), (0, 75), (0, 50)], (75, 675), Direction::Down);

    game.change_direction(Direction::Right);
    game.tick(&mut rng);
    assert_eq!(game.snake().head(), (25, 100));

    game.change_direction(Direction::Right);
    game.tick(&mut rng);
    assert_eq!(game.snake().head(), (50, 100));
}

#[test]
fn head_may_enter_the_cell_the_tail_leaves() {
    let mut rng = StdRng::seed_from_u64(9);
    // Closed square: heading down puts the head where the tail was
    let mut game = setup(&[(25, 25), (50, 25), (50, 50), (25, 50)], (75, 675), Direction::Down);

    let out = game.tick(&mut rng);

    assert_eq!(out, TickOutcome::Moved { new_head: (25, 50), old_tail: Some((25, 50)), new_food: None });
    assert_eq!(game.state(), GameState::Running);
    assert_eq!(game.snake().len(), 4);
}
