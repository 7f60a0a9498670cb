pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run the deterministic Pong game simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    surface: &Surface,
    config: &Config,
    events: &mut Events,
    input: &mut InputState,
    rng: &mut GameRng,
) {
    // Bad or huge deltas must not corrupt state
    let clamped_dt = config.clamp_dt(time.dt);

    // Clear events at start of frame
    events.clear();

    // Apply the human command at the frame boundary
    ingest_inputs(world, input);

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    let mut served = false;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(config.fixed_dt);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Let the computer react to the ball
        steer_computer_paddles(world);

        // 2. Move paddles
        move_paddles(world, &step_time, surface);

        // A served ball waits at home until the next frame
        if served {
            continue;
        }

        // 3. Move ball and bounce off top/bottom walls
        move_ball(world, &step_time);
        reflect_off_walls(world, surface, events);

        // 4. Check scoring; a serve ends the frame's ball processing
        if check_misses(world, surface, config, events, rng) {
            served = true;
            continue;
        }

        // 5. Bounce off paddles
        resolve_paddle_collisions(world, events);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle, controller: Controller) -> hecs::Entity {
    world.spawn((paddle, controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
