use serde::{Deserialize, Serialize};
use crate::{
    ConfigError, DEFAULT_CELL_PX, DEFAULT_GRID_SIZE, DEFAULT_TICK_RATE, HIGH_SCORE_KEY,
    MAX_TICK_RATE, MIN_GRID_SIZE, MIN_TICK_RATE,
};

/// Settings the page shell may override. Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_size: u16,
    pub cell_px: u16,
    pub tick_rate: u32,
    pub high_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: DEFAULT_GRID_SIZE,
            cell_px: DEFAULT_CELL_PX,
            tick_rate: DEFAULT_TICK_RATE,
            high_score_key: HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > i16::MAX as u16 {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.cell_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if !(MIN_TICK_RATE..=MAX_TICK_RATE).contains(&self.tick_rate) {
            return Err(ConfigError::TickRateOutOfRange { rate: self.tick_rate });
        }
        if self.high_score_key.is_empty() {
            return Err(ConfigError::EmptyHighScoreKey);
        }
        Ok(())
    }

    /// Canvas edge length in pixels.
    pub fn canvas_px(&self) -> u32 {
        self.grid_size as u32 * self.cell_px as u32
    }
}
