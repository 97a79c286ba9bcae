use serde::{Deserialize, Serialize};
use crate::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    Turn(Direction),
    ToggleRun,
    Reset,
}

/// Translate a `KeyboardEvent.key` value. Arrow keys and WASD steer, space starts or
/// pauses, `r` resets. Matching ignores case so caps lock does not break WASD.
pub fn map_key(key: &str) -> Option<InputCommand> {
    let key = key.to_ascii_lowercase();
    let command = match key.as_str() {
        "arrowup" | "w" => InputCommand::Turn(Direction::Up),
        "arrowdown" | "s" => InputCommand::Turn(Direction::Down),
        "arrowleft" | "a" => InputCommand::Turn(Direction::Left),
        "arrowright" | "d" => InputCommand::Turn(Direction::Right),
        " " | "spacebar" => InputCommand::ToggleRun,
        "r" => InputCommand::Reset,
        _ => return None,
    };
    Some(command)
}
