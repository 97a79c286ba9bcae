mod config;
mod constants;
mod error;
mod game_engine;
mod game_state;
mod high_score;
mod input;
mod render;
mod snake;

pub mod util;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use game_engine::*;
pub use game_state::*;
pub use high_score::*;
pub use input::*;
pub use render::*;
pub use snake::*;
pub use util::{PseudoRandom, RandomGenerator};
