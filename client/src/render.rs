use common::DrawSurface;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `DrawSurface` over a canvas 2d context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    // Skips redundant fill style changes within a frame
    current_color: Option<String>,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2d context"))?
            .ok_or_else(|| JsValue::from_str("2d context is null"))?;

        let ctx = context
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2d context"))?;

        Ok(Self { ctx, current_color: None })
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        if self.current_color.as_deref() != Some(color) {
            self.ctx.set_fill_style(&JsValue::from_str(color));
            self.current_color = Some(color.to_string());
        }
        self.ctx.fill_rect(x, y, width, height);
    }
}
