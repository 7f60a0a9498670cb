use crate::{Ball, Paddle, Surface, Time};
use hecs::World;

/// Move paddles by their velocity, hard-stopping at the surface edges
pub fn move_paddles(world: &mut World, time: &Time, surface: &Surface) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.update(time.dt, surface.height);
    }
}

/// Move ball based on direction and speed
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.integrate(time.dt);
    }
}
