use crate::{Ball, Config, Events, GameRng, Paddle, Side, Surface};
use hecs::World;

/// Check if the ball fully left the court past a paddle.
///
/// On a miss the opposing paddle scores once and the ball is served again.
/// Returns true when a point was scored this frame.
pub fn check_misses(
    world: &mut World,
    surface: &Surface,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(missed) = ball.missed_side(surface.width) {
            scorer = Some(missed.opponent());
            serve(ball, surface, config, events, rng);
        }
    }

    let Some(scorer) = scorer else {
        return false;
    };

    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
            log::debug!("{:?} scored, now {}", scorer, paddle.score);
        }
    }

    true
}

/// Recentre the ball and launch it in a fresh random direction
pub fn serve(ball: &mut Ball, surface: &Surface, config: &Config, events: &mut Events, rng: &mut GameRng) {
    ball.reset(surface, config.ball_speed, config.serve_offset, &mut rng.0);
    events.served = true;
    log::trace!("Served toward {:?}", ball.dir);
}
