use thiserror::Error;
use crate::Position;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Rejected attempts to build a `GameState` that breaks its invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("grid size {0} is below the minimum of {min}", min = crate::MIN_GRID_SIZE)]
    GridTooSmall(u16),
    #[error("grid size {0} does not fit in signed 16-bit coordinates")]
    GridTooLarge(u16),
    #[error("snake body must not be empty")]
    EmptySnake,
    #[error("snake segment {0:?} lies outside the grid")]
    SegmentOutOfBounds(Position),
    #[error("snake occupies {0:?} twice")]
    DuplicateSegment(Position),
    #[error("food at {0:?} is outside the grid")]
    FoodOutOfBounds(Position),
    #[error("food at {0:?} overlaps the snake")]
    FoodOnSnake(Position),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {0} is below the minimum of {min}", min = crate::MIN_GRID_SIZE)]
    GridTooSmall(u16),
    #[error("grid size {0} does not fit in signed 16-bit coordinates")]
    GridTooLarge(u16),
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,
    #[error(
        "tick rate {rate} is outside {min}..={max}",
        min = crate::MIN_TICK_RATE,
        max = crate::MAX_TICK_RATE
    )]
    TickRateOutOfRange { rate: u32 },
    #[error("high score key must not be empty")]
    EmptyHighScoreKey,
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}
