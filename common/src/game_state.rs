use std::collections::{HashSet, VecDeque};
use log::debug;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use crate::util::RandomGenerator;
use crate::{Direction, Position, Snake, StateError, FOOD_ATTEMPTS_PER_CELL, MIN_GRID_SIZE};

#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    BoardFull,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Tick,
    Turn { direction: Direction },
    Start,
    Pause,
    Reset,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Moved { head: Position, vacated: Position },
    FoodEaten { position: Position, score: u32 },
    FoodSpawned { position: Position },
    CollisionWall { position: Position },
    CollisionSelf { position: Position },
    BoardFull,
    HighScoreUpdated { high_score: u32 },
    RunStateChanged { status: RunState },
    DirectionQueued { direction: Direction },
    Reset,
}

/// Complete state of one board. Only `exec_command` mutates it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    size: u16,
    tick: u32,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// `None` only once the snake covers the whole board.
    food: Option<Position>,
    score: u32,
    status: RunState,
    game_over_reason: Option<GameOverReason>,
}

impl GameState {
    /// A fresh idle board: one segment in the centre heading right, food somewhere else.
    pub fn new(size: u16, rng: &mut dyn RandomGenerator) -> Result<Self, StateError> {
        check_size(size)?;
        let snake = Snake::new(Self::spawn_point(size));
        let food = place_food(size, &snake, rng);
        Ok(GameState {
            size,
            tick: 0,
            snake,
            direction: Direction::Right,
            pending_direction: None,
            food,
            score: 0,
            status: RunState::Idle,
            game_over_reason: None,
        })
    }

    /// Build an idle board from an explicit layout. Body is head first.
    pub fn from_parts(
        size: u16,
        body: Vec<Position>,
        direction: Direction,
        food: Position,
    ) -> Result<Self, StateError> {
        check_size(size)?;
        if body.is_empty() {
            return Err(StateError::EmptySnake);
        }

        let mut seen = HashSet::with_capacity(body.len());
        for segment in &body {
            if !segment.is_within(size) {
                return Err(StateError::SegmentOutOfBounds(*segment));
            }
            if !seen.insert(*segment) {
                return Err(StateError::DuplicateSegment(*segment));
            }
        }
        if !food.is_within(size) {
            return Err(StateError::FoodOutOfBounds(food));
        }
        if seen.contains(&food) {
            return Err(StateError::FoodOnSnake(food));
        }

        let score = (body.len() - 1) as u32;
        Ok(GameState {
            size,
            tick: 0,
            snake: Snake::from_body(VecDeque::from(body)),
            direction,
            pending_direction: None,
            food: Some(food),
            score,
            status: RunState::Idle,
            game_over_reason: None,
        })
    }

    pub fn spawn_point(size: u16) -> Position {
        let center = (size / 2) as i16;
        Position::new(center, center)
    }

    pub fn size(&self) -> u16 { self.size }
    pub fn current_tick(&self) -> u32 { self.tick }
    pub fn snake(&self) -> &Snake { &self.snake }
    pub fn direction(&self) -> Direction { self.direction }
    pub fn pending_direction(&self) -> Option<Direction> { self.pending_direction }
    pub fn food(&self) -> Option<Position> { self.food }
    pub fn score(&self) -> u32 { self.score }
    pub fn status(&self) -> RunState { self.status }
    pub fn game_over_reason(&self) -> Option<GameOverReason> { self.game_over_reason }

    pub fn is_running(&self) -> bool {
        self.status == RunState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.status == RunState::GameOver
    }

    pub fn exec_command(
        &mut self,
        command: GameCommand,
        rng: &mut dyn RandomGenerator,
    ) -> Vec<GameEvent> {
        let mut out: Vec<GameEvent> = Vec::new();
        match command {
            GameCommand::Tick => {
                if self.status != RunState::Running {
                    return out;
                }

                if let Some(direction) = self.pending_direction.take() {
                    self.direction = direction;
                }

                let head = self.snake.head();
                let candidate = head.step(self.direction);

                if !candidate.is_within(self.size) {
                    out.push(GameEvent::CollisionWall { position: candidate });
                    self.finish(GameOverReason::Wall, &mut out);
                    return out;
                }

                // Checked against the pre-move body: the tail still blocks even though it
                // would vacate this tick.
                if self.snake.contains_point(&candidate) {
                    out.push(GameEvent::CollisionSelf { position: candidate });
                    self.finish(GameOverReason::SelfCollision, &mut out);
                    return out;
                }

                self.snake.push_head(candidate);
                self.tick += 1;

                if self.food == Some(candidate) {
                    self.score += 1;
                    out.push(GameEvent::FoodEaten { position: candidate, score: self.score });

                    self.food = place_food(self.size, &self.snake, rng);
                    match self.food {
                        Some(position) => out.push(GameEvent::FoodSpawned { position }),
                        None => {
                            out.push(GameEvent::BoardFull);
                            self.finish(GameOverReason::BoardFull, &mut out);
                        }
                    }
                } else if let Some(vacated) = self.snake.drop_tail() {
                    out.push(GameEvent::Moved { head: candidate, vacated });
                }
            }

            GameCommand::Turn { direction } => {
                if !self.direction.is_opposite(&direction) {
                    self.pending_direction = Some(direction);
                    out.push(GameEvent::DirectionQueued { direction });
                }
            }

            GameCommand::Start => {
                if self.status == RunState::Idle {
                    self.set_status(RunState::Running, &mut out);
                }
            }

            GameCommand::Pause => {
                if self.status == RunState::Running {
                    self.set_status(RunState::Idle, &mut out);
                }
            }

            GameCommand::Reset => {
                let previous = self.status;
                self.snake = Snake::new(Self::spawn_point(self.size));
                self.direction = Direction::Right;
                self.pending_direction = None;
                self.score = 0;
                self.tick = 0;
                self.game_over_reason = None;
                self.status = RunState::Idle;
                out.push(GameEvent::Reset);
                if previous != RunState::Idle {
                    out.push(GameEvent::RunStateChanged { status: RunState::Idle });
                }

                // A single segment on a grid of at least 3x3 always leaves room
                self.food = place_food(self.size, &self.snake, rng);
                match self.food {
                    Some(position) => out.push(GameEvent::FoodSpawned { position }),
                    None => {
                        out.push(GameEvent::BoardFull);
                        self.finish(GameOverReason::BoardFull, &mut out);
                    }
                }
            }
        }

        out
    }

    fn set_status(&mut self, status: RunState, out: &mut Vec<GameEvent>) {
        self.status = status;
        out.push(GameEvent::RunStateChanged { status });
    }

    fn finish(&mut self, reason: GameOverReason, out: &mut Vec<GameEvent>) {
        debug!("game over after {} ticks: {:?}, score {}", self.tick, reason, self.score);
        self.game_over_reason = Some(reason);
        self.set_status(RunState::GameOver, out);
    }
}

fn check_size(size: u16) -> Result<(), StateError> {
    if size < MIN_GRID_SIZE {
        return Err(StateError::GridTooSmall(size));
    }
    if size > i16::MAX as u16 {
        return Err(StateError::GridTooLarge(size));
    }
    Ok(())
}

/// Pick a uniformly random cell not covered by `snake`, or `None` when the board is full.
///
/// Rejection sampling is fast while the board is mostly empty. After a bounded number of
/// misses the empty cells are enumerated instead so a crowded board cannot stall a frame.
pub fn place_food(size: u16, snake: &Snake, rng: &mut dyn RandomGenerator) -> Option<Position> {
    let cells = size as u32 * size as u32;
    if snake.len() as u32 >= cells {
        return None;
    }

    let attempts = cells.saturating_mul(FOOD_ATTEMPTS_PER_CELL);
    for _ in 0..attempts {
        let candidate = Position::new(
            rng.next_below(size as u32) as i16,
            rng.next_below(size as u32) as i16,
        );
        if !snake.contains_point(&candidate) {
            return Some(candidate);
        }
    }

    debug!("food sampling missed {} times, scanning free cells", attempts);
    let occupied: HashSet<&Position> = snake.iter().collect();
    let free: Vec<Position> = (0..size as i16)
        .flat_map(|y| (0..size as i16).map(move |x| Position::new(x, y)))
        .filter(|p| !occupied.contains(p))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.next_below(free.len() as u32) as usize])
}
