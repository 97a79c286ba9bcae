use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Serialize;
use crate::util::RandomGenerator;
use crate::{
    Direction, GameCommand, GameConfig, GameEvent, GameOverReason, GameState, HighScoreStore,
    InputCommand, RunState, MAX_TICK_RATE, MIN_TICK_RATE,
};

/// Throttles a fast frame callback down to the configured tick rate.
#[derive(Debug, Clone)]
pub struct TickClock {
    tick_rate: u32,
    last_tick_ms: Option<f64>,
}

impl TickClock {
    pub fn new(tick_rate: u32) -> Self {
        TickClock { tick_rate: clamp_tick_rate(tick_rate), last_tick_ms: None }
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.tick_rate = clamp_tick_rate(tick_rate);
    }

    pub fn interval_ms(&self) -> f64 {
        1000.0 / self.tick_rate as f64
    }

    /// True when a tick is due at `now_ms`. The first frame only anchors the clock.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.last_tick_ms {
            None => {
                self.last_tick_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms - last >= self.interval_ms() => {
                self.last_tick_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.last_tick_ms = None;
    }
}

pub fn clamp_tick_rate(tick_rate: u32) -> u32 {
    tick_rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE)
}

/// What the page chrome shows next to the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub status: RunState,
    pub game_over: bool,
    pub game_over_reason: Option<GameOverReason>,
    pub tick_rate: u32,
    pub run_label: &'static str,
}

pub struct GameEngine<H: HighScoreStore, R: RandomGenerator> {
    state: GameState,
    rng: R,
    store: H,
    high_score: u32,
    clock: TickClock,
}

impl<H: HighScoreStore, R: RandomGenerator> GameEngine<H, R> {
    pub fn new(config: &GameConfig, store: H, mut rng: R) -> Result<Self> {
        config.validate().context("Invalid game config")?;
        let state = GameState::new(config.grid_size, &mut rng).context("Failed to create board")?;
        let mut engine = Self::with_state(state, store, rng);
        engine.clock.set_tick_rate(config.tick_rate);
        Ok(engine)
    }

    /// Wrap an existing board. The high score is read from `store` once, here.
    pub fn with_state(state: GameState, store: H, rng: R) -> Self {
        let high_score = store.load();
        debug!("loaded high score {}", high_score);
        GameEngine {
            state,
            rng,
            store,
            high_score,
            clock: TickClock::new(crate::DEFAULT_TICK_RATE),
        }
    }

    /// Frame-driven entry point. Advances at most once, and only when a full tick
    /// interval has elapsed since the last committed tick.
    pub fn tick(&mut self, now_ms: f64) -> Option<Vec<GameEvent>> {
        if !self.state.is_running() {
            self.clock.clear();
            return None;
        }
        if !self.clock.poll(now_ms) {
            return None;
        }
        Some(self.advance())
    }

    /// One simulation step, ignoring the clock.
    pub fn advance(&mut self) -> Vec<GameEvent> {
        self.exec(GameCommand::Tick)
    }

    pub fn set_direction(&mut self, direction: Direction) -> Vec<GameEvent> {
        self.exec(GameCommand::Turn { direction })
    }

    pub fn start(&mut self) -> Vec<GameEvent> {
        self.exec(GameCommand::Start)
    }

    pub fn pause(&mut self) -> Vec<GameEvent> {
        self.exec(GameCommand::Pause)
    }

    pub fn toggle_run(&mut self) -> Vec<GameEvent> {
        match self.state.status() {
            RunState::Idle => self.start(),
            RunState::Running => self.pause(),
            RunState::GameOver => Vec::new(),
        }
    }

    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.clock.clear();
        debug!("resetting board");
        self.exec(GameCommand::Reset)
    }

    pub fn apply_input(&mut self, input: InputCommand) -> Vec<GameEvent> {
        match input {
            InputCommand::Turn(direction) => self.set_direction(direction),
            InputCommand::ToggleRun => self.toggle_run(),
            InputCommand::Reset => self.reset(),
        }
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.clock.set_tick_rate(tick_rate);
    }

    pub fn tick_rate(&self) -> u32 {
        self.clock.tick_rate()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    pub fn hud(&self) -> Hud {
        let status = self.state.status();
        Hud {
            score: self.state.score(),
            high_score: self.high_score,
            status,
            game_over: status == RunState::GameOver,
            game_over_reason: self.state.game_over_reason(),
            tick_rate: self.clock.tick_rate(),
            run_label: if status == RunState::Running { "Pause" } else { "Start" },
        }
    }

    // --- JSON Getters for WASM ---
    pub fn get_state_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.state)?)
    }

    pub fn get_hud_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.hud())?)
    }

    fn exec(&mut self, command: GameCommand) -> Vec<GameEvent> {
        let mut events = self.state.exec_command(command, &mut self.rng);
        let mut ended = false;
        for event in &events {
            if let GameEvent::RunStateChanged { status } = event {
                // A resumed run measures its first tick from the next frame
                self.clock.clear();
                ended |= *status == RunState::GameOver;
            }
        }
        if ended {
            self.record_high_score(&mut events);
        }
        events
    }

    fn record_high_score(&mut self, events: &mut Vec<GameEvent>) {
        let score = self.state.score();
        info!("game over with score {} (best {})", score, self.high_score);
        if score <= self.high_score {
            return;
        }

        self.high_score = score;
        if let Err(e) = self.store.save(score) {
            warn!("could not persist high score {}: {}", score, e);
        }
        events.push(GameEvent::HighScoreUpdated { high_score: score });
    }
}
