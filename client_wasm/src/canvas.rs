//! Canvas 2D render sink

use game_core::{Circle, Color, LineStyle, Rect, RenderSink};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const FONT: &str = "50px Courier New";

/// Draws into a `<canvas>` element's 2D context
pub struct CanvasSink {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSink {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Context is not a CanvasRenderingContext2d"))?;
        Ok(Self { ctx })
    }
}

fn css(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.r,
        color.g,
        color.b,
        color.a as f32 / 255.0
    )
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Canvas {} failed: {:?}", what, e);
    }
}

impl RenderSink for CanvasSink {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        // Resizing a canvas resets its context state, so restate text style every frame
        self.ctx.set_font(FONT);
        self.ctx.set_text_align("center");
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.begin_path();
        warn_on_err(
            "arc",
            self.ctx.arc(
                circle.center.x as f64,
                circle.center.y as f64,
                circle.radius as f64,
                0.0,
                std::f64::consts::TAU,
            ),
        );
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&css(color));
        warn_on_err("fill_text", self.ctx.fill_text(text, at.x as f64, at.y as f64));
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, style: LineStyle) {
        let dash = JsValue::from_f64(style.dash as f64);
        self.ctx.set_stroke_style_str(&css(style.color));
        self.ctx.set_line_width(style.width as f64);
        warn_on_err("set_line_dash", self.ctx.set_line_dash(&js_sys::Array::of2(&dash, &dash)));

        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();

        warn_on_err("set_line_dash", self.ctx.set_line_dash(&js_sys::Array::new()));
    }
}
