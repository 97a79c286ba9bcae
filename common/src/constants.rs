/// Cells per side of the default square grid.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest grid that still fits a snake, the wall ring and a food cell.
pub const MIN_GRID_SIZE: u16 = 3;

/// Pixel size of one grid cell on the canvas (20 cells => 400x400).
pub const DEFAULT_CELL_PX: u16 = 20;

/// Ticks per second bounds for the speed slider.
pub const MIN_TICK_RATE: u32 = 2;
pub const MAX_TICK_RATE: u32 = 20;
pub const DEFAULT_TICK_RATE: u32 = 8;

/// Storage key holding the serialized high score.
pub const HIGH_SCORE_KEY: &str = "snake-high";

/// Inset of the snake head inside its cell, in pixels
pub const HEAD_PADDING_PX: f64 = 2.0;
/// Inset of body segments inside their cell, in pixels
pub const BODY_PADDING_PX: f64 = 4.0;

/// Random draws per grid cell before food placement scans for empty cells.
pub const FOOD_ATTEMPTS_PER_CELL: u32 = 4;
