use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_start_y: f32,
    pub human_paddle_speed: f32,
    pub computer_paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub serve_offset: f32,
    pub fixed_dt: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_start_y: Params::PADDLE_START_Y,
            human_paddle_speed: Params::HUMAN_PADDLE_SPEED,
            computer_paddle_speed: Params::COMPUTER_PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            serve_offset: Params::SERVE_OFFSET,
            fixed_dt: Params::FIXED_DT,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the X position (left edge) of a paddle for a surface of the given width
    pub fn paddle_x(&self, side: Side, surface_width: f32) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => surface_width - self.paddle_margin,
        }
    }

    /// Sanitise a frame delta: non-finite or negative becomes zero, large jumps are capped
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            dt.min(self.max_dt)
        } else {
            0.0
        }
    }
}
