//! Canvas 2D implementation of the draw surface

use web_sys::CanvasRenderingContext2d;

use super::DrawSurface;
use crate::consts::*;

/// Every shape and the score text share the page's ink color
const FILL: &str = "#333";
const SCORE_FONT: &str = "bold 16px sans-serif";

/// A `DrawSurface` over the browser's 2D canvas context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            PLAYFIELD_WIDTH as f64,
            PLAYFIELD_HEIGHT as f64,
        );
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, width: f32, height: f32, corner: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.round_rect_with_f64(
            x as f64,
            y as f64,
            width as f64,
            height as f64,
            corner as f64,
        );
        self.ctx.set_fill_style_str(FILL);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, std::f64::consts::TAU);
        self.ctx.set_fill_style_str(FILL);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.set_font(SCORE_FONT);
        self.ctx.set_fill_style_str(FILL);
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
