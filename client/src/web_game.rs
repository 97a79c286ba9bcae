use common::{
    map_key, render_game, GameConfig, GameEngine, KeyValueHighScore, Palette, PseudoRandom,
    RunState,
};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::{CanvasSurface, LocalStorage};

type BrowserEngine = GameEngine<KeyValueHighScore<LocalStorage>, PseudoRandom>;

/// One game bound to one canvas. The page drives it from `requestAnimationFrame`
/// through `frame` and forwards `keydown` keys to `handle_key`.
#[wasm_bindgen]
pub struct WebGame {
    engine: BrowserEngine,
    surface: CanvasSurface,
    cell_px: f64,
    palette: Palette,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<WebGame, JsValue> {
        Self::build(canvas, GameConfig::default())
    }

    /// Like `new`, with a JSON object overriding any of `grid_size`, `cell_px`,
    /// `tick_rate` and `high_score_key`.
    pub fn with_config(canvas: HtmlCanvasElement, config_json: &str) -> Result<WebGame, JsValue> {
        let config = GameConfig::from_json(config_json).map_err(to_js)?;
        Self::build(canvas, config)
    }

    /// Call once per animation frame with its timestamp. Returns true when the board
    /// changed so the page can refresh its score badges.
    pub fn frame(&mut self, now: f64) -> bool {
        match self.engine.tick(now) {
            Some(events) => {
                log::debug!("tick {}: {:?}", self.engine.state().current_tick(), events);
                self.render();
                true
            }
            None => false,
        }
    }

    /// Returns true when the key was bound, so the page can `preventDefault` it.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(input) = map_key(key) else {
            return false;
        };
        self.engine.apply_input(input);
        self.render();
        true
    }

    pub fn toggle_run(&mut self) {
        self.engine.toggle_run();
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.render();
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.engine.set_tick_rate(tick_rate);
    }

    #[wasm_bindgen(getter)]
    pub fn tick_rate(&self) -> u32 {
        self.engine.tick_rate()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.engine.state().score()
    }

    #[wasm_bindgen(getter)]
    pub fn high_score(&self) -> u32 {
        self.engine.high_score()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> RunState {
        self.engine.state().status()
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.engine.state().is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn is_game_over(&self) -> bool {
        self.engine.state().is_game_over()
    }

    pub fn hud_json(&self) -> Result<String, JsValue> {
        self.engine.get_hud_json().map_err(to_js)
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        self.engine.get_state_json().map_err(to_js)
    }

    pub fn render(&mut self) {
        render_game(self.engine.state(), self.cell_px, &self.palette, &mut self.surface);
    }
}

impl WebGame {
    fn build(canvas: HtmlCanvasElement, config: GameConfig) -> Result<WebGame, JsValue> {
        canvas.set_width(config.canvas_px());
        canvas.set_height(config.canvas_px());

        let store = KeyValueHighScore::new(LocalStorage::open(), config.high_score_key.clone());
        let engine = GameEngine::new(&config, store, PseudoRandom::new(browser_seed()))
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;

        log::info!(
            "snake ready: {0}x{0} grid, {1} ticks/s, best {2}",
            config.grid_size,
            engine.tick_rate(),
            engine.high_score()
        );

        let mut game = WebGame {
            engine,
            surface: CanvasSurface::new(&canvas)?,
            cell_px: config.cell_px as f64,
            palette: Palette::default(),
        };
        game.render();
        Ok(game)
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn browser_seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (noise << 32) ^ js_sys::Date::now() as u64
}
