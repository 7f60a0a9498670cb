use glam::Vec2;

/// Axis-aligned rectangle with a top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Closest point of the rectangle to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let (min, max) = (self.min(), self.max());
        Vec2::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Check if a circle touches or overlaps a rectangle.
///
/// The circle centre is clamped into the rectangle to find the nearest point;
/// the shapes collide when that point lies within `radius` of the centre.
/// Touching counts as colliding.
pub fn check_collision(rect: Rect, circle: Circle) -> bool {
    let closest = rect.closest_point(circle.center);
    (circle.center - closest).length() <= circle.radius
}
