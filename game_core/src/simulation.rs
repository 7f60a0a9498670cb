use hecs::World;

use crate::systems::{paddles_separated, serve};
use crate::*;

/// One human-vs-computer match and everything `step` needs to advance it.
///
/// The host owns it, feeds it commands and timestamps, and draws
/// [`Simulation::frame`].
pub struct Simulation {
    pub world: World,
    pub time: Time,
    pub surface: Surface,
    pub config: Config,
    pub events: Events,
    pub input: InputState,
    pub rng: GameRng,
    last_tick_ms: Option<f64>,
}

impl Simulation {
    pub fn new(surface: Surface, config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);
        let mut events = Events::new();

        // Human on the left, computer on the right
        create_paddle(
            &mut world,
            Paddle::new(
                Side::Left,
                config.paddle_x(Side::Left, surface.width),
                config.paddle_start_y,
                config.paddle_width,
                config.paddle_height,
                config.human_paddle_speed,
            ),
            Controller::Human,
        );
        create_paddle(
            &mut world,
            Paddle::new(
                Side::Right,
                config.paddle_x(Side::Right, surface.width),
                config.paddle_start_y,
                config.paddle_width,
                config.paddle_height,
                config.computer_paddle_speed,
            ),
            Controller::Computer,
        );

        // Ball serves from the centre of the starting surface
        let mut ball = Ball::new(surface.center(), config.ball_radius, config.ball_speed);
        serve(&mut ball, &surface, &config, &mut events, &mut rng);
        create_ball(&mut world, ball);

        log::info!(
            "Simulation started on {}x{} surface (seed {})",
            surface.width,
            surface.height,
            seed
        );

        let sim = Self {
            world,
            time: Time::new(0.0, 0.0),
            surface,
            config,
            events,
            input: InputState::new(),
            rng,
            last_tick_ms: None,
        };
        sim.check_court();
        sim
    }

    /// Queue a command for the human paddle; applied at the next frame
    pub fn set_human_command(&mut self, command: PaddleCommand) {
        self.input.push(command);
    }

    /// Track a new surface size. Paddle x and ball home keep their
    /// construction-time values.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
        log::debug!("Surface resized to {}x{}", width, height);
        self.check_court();
    }

    /// Advance by the time elapsed since the previous tick.
    ///
    /// The first tick only records the timestamp. A clock that goes
    /// backwards yields a zero-length step.
    pub fn tick(&mut self, now_ms: f64) {
        let dt = match self.last_tick_ms {
            Some(last) => ((now_ms - last) * 0.001) as f32,
            None => 0.0,
        };
        self.last_tick_ms = Some(now_ms);
        self.advance(dt);
    }

    /// Run one simulation step of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.surface,
            &self.config,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// (left, right) scores
    pub fn scores(&self) -> (u32, u32) {
        self.frame().scores()
    }

    /// Events raised by the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Snapshot of everything the render sink needs
    pub fn frame(&self) -> Frame {
        let mut paddles: Vec<PaddleView> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| PaddleView {
                side: p.side,
                rect: p.rect(),
                color: Params::FOREGROUND,
                score: p.score,
            })
            .collect();
        paddles.sort_by_key(|p| p.side == Side::Right);

        Frame {
            width: self.surface.width,
            height: self.surface.height,
            paddles,
            ball: self.ball().map(|ball| BallView {
                circle: ball.circle(),
                color: Params::FOREGROUND,
            }),
        }
    }

    /// Draw the current state into `sink`
    pub fn render(&self, sink: &mut dyn RenderSink) {
        draw_frame(&self.frame(), sink);
    }

    /// Warn when the ball could touch both paddles at once
    fn check_court(&self) {
        if let (Some(left), Some(right)) = (self.paddle(Side::Left), self.paddle(Side::Right)) {
            if !paddles_separated(&left, &right, self.config.ball_radius) {
                log::warn!(
                    "Court too narrow: paddle gap {} fits no ball of radius {}",
                    right.x - (left.x + left.width),
                    self.config.ball_radius
                );
            }
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Surface::new(1600.0, 900.0), Config::default(), 12345)
    }
}
