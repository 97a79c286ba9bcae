mod render;
mod storage;
mod web_game;

pub use render::*;
pub use storage::*;
pub use web_game::*;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}
