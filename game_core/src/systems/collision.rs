use crate::{Ball, Events, Paddle, Side, Surface};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn reflect_off_walls(world: &mut World, surface: &Surface, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.reflect_off_walls(surface.height) {
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off whichever paddle it touches.
///
/// The left paddle is checked first and at most one paddle responds per
/// frame; see [`paddles_separated`] for when that is safe.
pub fn resolve_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut left = None;
    let mut right = None;
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = left.is_some_and(|l| ball.bounce_off(&l))
            || right.is_some_and(|r| ball.bounce_off(&r));

        if hit {
            events.ball_hit_paddle = true;
        }
    }
}

/// Whether a ball of `radius` fits between the two paddles' inner faces.
///
/// When it does not, the ball could touch both paddles in one frame and only
/// the left one would respond.
pub fn paddles_separated(left: &Paddle, right: &Paddle, radius: f32) -> bool {
    right.x - (left.x + left.width) > 2.0 * radius
}
