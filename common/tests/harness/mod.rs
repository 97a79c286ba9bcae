#![allow(dead_code)]

use ::common::{
    Direction, GameEngine, GameState, KeyValueHighScore, MemoryStore, Position, PseudoRandom,
    HIGH_SCORE_KEY,
};

pub type TestEngine = GameEngine<KeyValueHighScore<MemoryStore>, PseudoRandom>;

pub fn pos(x: i16, y: i16) -> Position {
    Position::new(x, y)
}

pub fn body(cells: &[(i16, i16)]) -> Vec<Position> {
    cells.iter().map(|&(x, y)| pos(x, y)).collect()
}

/// Engine over a hand-built board with an empty in-memory store.
pub fn engine_with(
    size: u16,
    cells: &[(i16, i16)],
    direction: Direction,
    food: (i16, i16),
) -> TestEngine {
    engine_with_store(size, cells, direction, food, MemoryStore::new())
}

pub fn engine_with_store(
    size: u16,
    cells: &[(i16, i16)],
    direction: Direction,
    food: (i16, i16),
    store: MemoryStore,
) -> TestEngine {
    let state = GameState::from_parts(size, body(cells), direction, pos(food.0, food.1))
        .expect("test board should be valid");
    GameEngine::with_state(
        state,
        KeyValueHighScore::new(store, HIGH_SCORE_KEY),
        PseudoRandom::new(12345),
    )
}

/// Same as `engine_with`, already running.
pub fn running(
    size: u16,
    cells: &[(i16, i16)],
    direction: Direction,
    food: (i16, i16),
) -> TestEngine {
    let mut engine = engine_with(size, cells, direction, food);
    engine.start();
    engine
}

pub fn snake_cells(engine: &TestEngine) -> Vec<Position> {
    engine.state().snake().iter().copied().collect()
}

/// Invariants that must hold after every operation.
pub fn assert_invariants(engine: &TestEngine) {
    let state = engine.state();
    let snake = state.snake();
    assert!(snake.len() >= 1, "snake must never be empty");
    assert_eq!(state.score() as usize, snake.len() - 1, "score tracks length");

    let cells = snake_cells(engine);
    for (i, a) in cells.iter().enumerate() {
        assert!(a.is_within(state.size()), "segment {:?} off the grid", a);
        assert!(!cells[i + 1..].contains(a), "segment {:?} duplicated", a);
    }

    if let Some(food) = state.food() {
        assert!(food.is_within(state.size()));
        assert!(!snake.contains_point(&food), "food {:?} under the snake", food);
    }
}
