use glam::Vec2;
use rand::Rng;

use crate::geometry::{check_collision, Circle, Rect};
use crate::resources::Surface;

/// Which half of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Who drives a paddle's velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

/// Discrete movement command for the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleCommand {
    MoveUp,
    MoveDown,
    Stop,
}

/// Paddle component - a vertically moving rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed after construction
    pub y: f32, // Top edge (clamped to surface)
    pub width: f32,
    pub height: f32,
    pub velocity: f32, // Vertical, negative = up
    pub max_speed: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32, max_speed: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            velocity: 0.0,
            max_speed,
            score: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height * 0.5
    }

    /// Set velocity to full speed in the commanded direction, or stop
    pub fn set_command(&mut self, command: PaddleCommand) {
        self.velocity = match command {
            PaddleCommand::MoveUp => -self.max_speed,
            PaddleCommand::MoveDown => self.max_speed,
            PaddleCommand::Stop => 0.0,
        };
    }

    /// Integrate and hard-stop at the top and bottom edges.
    ///
    /// Velocity survives the clamp so the paddle can reverse immediately.
    pub fn update(&mut self, dt: f32, surface_height: f32) {
        self.y += self.velocity * dt;

        if self.y < 0.0 {
            self.y = 0.0;
        } else if self.y + self.height > surface_height {
            self.y = surface_height - self.height;
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub dir: Vec2, // Unit length
    pub speed: f32,
    pub home: Vec2, // Serve origin
}

impl Ball {
    /// A ball resting at `home`, moving right; call `reset` to serve it
    pub fn new(home: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos: home,
            radius,
            dir: Vec2::X,
            speed,
            home,
        }
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Advance position along the current direction
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.dir * self.speed * dt;
    }

    /// Bounce off the top and bottom edges. Returns true on contact.
    pub fn reflect_off_walls(&mut self, surface_height: f32) -> bool {
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.dir.y = -self.dir.y;
            true
        } else if self.pos.y + self.radius > surface_height {
            self.pos.y = surface_height - self.radius;
            self.dir.y = -self.dir.y;
            true
        } else {
            false
        }
    }

    /// The side whose paddle let the ball fully past its edge, if any
    pub fn missed_side(&self, surface_width: f32) -> Option<Side> {
        if self.pos.x + self.radius < 0.0 {
            Some(Side::Left)
        } else if self.pos.x - self.radius > surface_width {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Reverse horizontally off `paddle` and sit flush against its far face.
    /// Returns true on contact.
    pub fn bounce_off(&mut self, paddle: &Paddle) -> bool {
        if !check_collision(paddle.rect(), self.circle()) {
            return false;
        }

        self.dir.x = -self.dir.x;
        // Moving the ball clear of the paddle keeps it from sticking
        self.pos.x = match paddle.side {
            Side::Left => paddle.x + paddle.width + self.radius,
            Side::Right => paddle.x - self.radius,
        };
        true
    }

    /// Serve: recentre at home and aim at a random point just outside the left or right edge
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        surface: &Surface,
        speed: f32,
        serve_offset: f32,
        rng: &mut R,
    ) {
        self.pos = self.home;

        let target = Vec2::new(
            if rng.gen_bool(0.5) {
                -serve_offset
            } else {
                surface.width + serve_offset
            },
            rng.gen::<f32>() * surface.height,
        );
        let to_target = target - self.pos;
        let angle = to_target.y.atan2(to_target.x);

        self.dir = Vec2::from_angle(angle);
        self.speed = speed;
    }
}
