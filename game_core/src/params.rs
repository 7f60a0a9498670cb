use crate::render::Color;

/// Game tuning parameters for Pong (surface units are pixels)
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Distance from the side edge to the paddle's x
    pub const PADDLE_START_Y: f32 = 450.0;
    pub const HUMAN_PADDLE_SPEED: f32 = 300.0; // pixels per second

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 100.0;
    pub const SERVE_OFFSET: f32 = 10.0; // Serve target sits this far outside the side edge

    // The computer paddle is only as fast as a freshly served ball
    pub const COMPUTER_PADDLE_SPEED: f32 = Self::BALL_SPEED;

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    /// Longest frame simulated. Elapsed time beyond it is dropped, so a
    /// stalled host resumes in slow motion rather than jumping ahead.
    pub const MAX_DT: f32 = 0.1;

    // Presentation
    pub const FOREGROUND: Color = Color::WHITE;
    pub const BOUNDARY_LINE_WIDTH: f32 = 5.0;
    pub const BOUNDARY_DASH: f32 = 20.0;
}
