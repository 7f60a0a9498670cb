//! Render sink abstraction and per-frame draw list
//!
//! The core never talks to a drawing API directly. Hosts implement
//! [`RenderSink`] and hand it to [`draw_frame`] once per frame.

use glam::Vec2;

use crate::geometry::{Circle, Rect};
use crate::{Params, Side};

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Stroke style for dashed lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub dash: f32, // Dash and gap length
}

/// Drawing primitives the host must provide
pub trait RenderSink {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, circle: Circle, color: Color);
    /// Draw `text` centred horizontally on `at`
    fn fill_text(&mut self, text: &str, at: Vec2, color: Color);
    fn dashed_line(&mut self, from: Vec2, to: Vec2, style: LineStyle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleView {
    pub side: Side,
    pub rect: Rect,
    pub color: Color,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub circle: Circle,
    pub color: Color,
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub paddles: Vec<PaddleView>,
    pub ball: Option<BallView>,
}

impl Frame {
    /// (left, right) scores; a missing paddle counts as 0
    pub fn scores(&self) -> (u32, u32) {
        let score = |side| {
            self.paddles
                .iter()
                .find(|p| p.side == side)
                .map_or(0, |p| p.score)
        };
        (score(Side::Left), score(Side::Right))
    }
}

/// Draw the court, scores, paddles and ball in back-to-front order
pub fn draw_frame(frame: &Frame, sink: &mut dyn RenderSink) {
    let (w, h) = (frame.width, frame.height);

    sink.clear(w, h);

    sink.dashed_line(
        Vec2::new(w * 0.5, 0.0),
        Vec2::new(w * 0.5, h),
        LineStyle {
            color: Params::FOREGROUND,
            width: Params::BOUNDARY_LINE_WIDTH,
            dash: Params::BOUNDARY_DASH,
        },
    );

    let (left_score, right_score) = frame.scores();
    sink.fill_text(
        &left_score.to_string(),
        Vec2::new(w * 0.25, h * 0.5),
        Params::FOREGROUND,
    );
    sink.fill_text(
        &right_score.to_string(),
        Vec2::new(w * 0.75, h * 0.5),
        Params::FOREGROUND,
    );

    for paddle in &frame.paddles {
        sink.fill_rect(paddle.rect, paddle.color);
    }

    if let Some(ball) = &frame.ball {
        sink.fill_circle(ball.circle, ball.color);
    }
}
