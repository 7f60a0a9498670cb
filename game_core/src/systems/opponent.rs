use hecs::World;

use crate::components::*;

/// Chase the ball vertically at full speed, but only once it leaves the
/// paddle's dead zone (half the paddle height either side of its centre).
/// Inside the dead zone the current velocity is kept, which stops the
/// paddle from jittering around a centred ball.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32) {
    let offset = ball_y - paddle.center_y();

    if offset.abs() > paddle.height * 0.5 {
        paddle.velocity = offset.signum() * paddle.max_speed;
    }
}

/// Steer computer-controlled paddles toward the ball
pub fn steer_computer_paddles(world: &mut World) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return; // No ball in world
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Computer {
            track_ball(paddle, ball_y);
        }
    }
}
