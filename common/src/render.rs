use crate::{GameState, Position, BODY_PADDING_PX, HEAD_PADDING_PX};

/// The one primitive the renderer needs from a canvas.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub wall: String,
    pub food: String,
    pub snake: String,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: "#0f172a".to_string(),
            wall: "#64748b".to_string(),
            food: "#ef4444".to_string(),
            snake: "#22c55e".to_string(),
        }
    }
}

/// Draws `state` onto `surface`. Later layers cover earlier ones:
/// background, wall ring, food, then the snake with the head inset less than the body.
pub fn render_game(
    state: &GameState,
    cell_px: f64,
    palette: &Palette,
    surface: &mut dyn DrawSurface,
) {
    let size = state.size() as usize;
    let extent = size as f64 * cell_px;

    surface.fill_rect(0.0, 0.0, extent, extent, &palette.background);

    let last = (size - 1) as f64 * cell_px;
    for i in 0..size {
        let offset = i as f64 * cell_px;
        surface.fill_rect(offset, 0.0, cell_px, cell_px, &palette.wall);
        surface.fill_rect(offset, last, cell_px, cell_px, &palette.wall);
        surface.fill_rect(0.0, offset, cell_px, cell_px, &palette.wall);
        surface.fill_rect(last, offset, cell_px, cell_px, &palette.wall);
    }

    if let Some(food) = state.food() {
        fill_cell(surface, food, cell_px, 0.0, &palette.food);
    }

    for (i, segment) in state.snake().iter().enumerate() {
        let padding = if i == 0 { HEAD_PADDING_PX } else { BODY_PADDING_PX };
        fill_cell(surface, *segment, cell_px, padding, &palette.snake);
    }
}

fn fill_cell(
    surface: &mut dyn DrawSurface,
    cell: Position,
    cell_px: f64,
    padding: f64,
    color: &str,
) {
    // Tiny cells would otherwise get a negative extent
    let padding = padding.min(cell_px / 4.0);
    surface.fill_rect(
        cell.x as f64 * cell_px + padding,
        cell.y as f64 * cell_px + padding,
        cell_px - padding * 2.0,
        cell_px - padding * 2.0,
        color,
    );
}
