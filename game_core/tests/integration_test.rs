use game_core::*;
use glam::Vec2;
use hecs::World;

struct Game {
    world: World,
    time: Time,
    surface: Surface,
    config: Config,
    events: Events,
    input: InputState,
    rng: GameRng,
    left: hecs::Entity,
    right: hecs::Entity,
    ball: hecs::Entity,
}

impl Game {
    /// Standard court with the ball placed by hand
    fn new(ball: Ball) -> Self {
        let mut world = World::new();
        let left = create_paddle(
            &mut world,
            Paddle::new(Side::Left, 20.0, 450.0, 10.0, 100.0, 300.0),
            Controller::Human,
        );
        let right = create_paddle(
            &mut world,
            Paddle::new(Side::Right, 1580.0, 450.0, 10.0, 100.0, 100.0),
            Controller::Computer,
        );
        let ball = create_ball(&mut world, ball);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            surface: Surface::new(1600.0, 900.0),
            config: Config::new(),
            events: Events::new(),
            input: InputState::new(),
            rng: GameRng::new(12345),
            left,
            right,
            ball,
        }
    }

    fn step(&mut self, dt: f32) {
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

    fn paddle(&self, entity: hecs::Entity) -> Paddle {
        *self.world.get::<&Paddle>(entity).unwrap()
    }

    fn ball(&self) -> Ball {
        *self.world.get::<&Ball>(self.ball).unwrap()
    }
}

fn ball(pos: Vec2, dir: Vec2) -> Ball {
    let mut ball = Ball::new(Vec2::new(800.0, 450.0), 10.0, 100.0);
    ball.pos = pos;
    ball.dir = dir;
    ball
}

#[test]
fn test_paddle_clamped_at_bottom() {
    let mut paddle = Paddle::new(Side::Left, 20.0, 450.0, 10.0, 100.0, 300.0);
    paddle.set_command(PaddleCommand::MoveDown);

    paddle.update(2.0, 900.0);

    assert_eq!(paddle.y, 800.0);
}

#[test]
fn test_ball_missed_on_left_scores_for_right() {
    let mut game = Game::new(ball(Vec2::new(5.0, 100.0), Vec2::new(-1.0, 0.0)));

    // 0.1s carries the ball to x = -5: still partly on the surface
    game.step(0.1);
    assert_eq!(game.paddle(game.right).score, 0);

    // Another 0.1s puts its leading edge past the boundary
    game.step(0.1);

    assert_eq!(game.paddle(game.right).score, 1);
    assert_eq!(game.paddle(game.left).score, 0);
    assert!(game.events.right_scored);
    assert!(game.events.served);
    let ball = game.ball();
    assert_eq!(ball.pos, ball.home);
}

#[test]
fn test_served_ball_stays_home_for_rest_of_frame() {
    let mut game = Game::new(ball(Vec2::new(-9.0, 100.0), Vec2::new(-1.0, 0.0)));
    game.input.push(PaddleCommand::MoveUp);

    // The miss lands in the first micro-step of a 0.1s frame
    game.step(0.1);

    assert_eq!(game.paddle(game.right).score, 1);
    assert!(game.events.served);
    let ball = game.ball();
    assert_eq!(ball.pos, ball.home);
    assert!(!game.events.ball_hit_paddle);

    // Paddles keep moving for the whole frame
    assert!((game.paddle(game.left).y - 420.0).abs() < 1e-3);

    // The next frame moves the served ball again
    game.step(0.05);
    assert_ne!(game.ball().pos, ball.home);
}

#[test]
fn test_ball_bounces_flush_off_left_paddle() {
    let mut game = Game::new(ball(Vec2::new(30.0, 500.0), Vec2::new(-1.0, 0.0)));

    game.step(0.01);

    let ball = game.ball();
    assert_eq!(ball.dir.x, 1.0);
    assert_eq!(ball.pos.x, 40.0);
    assert!(game.events.ball_hit_paddle);
}

#[test]
fn test_computer_dead_zone_holds_velocity() {
    let mut game = Game::new(ball(Vec2::new(800.0, 560.0), Vec2::new(0.0, 1.0)));
    {
        let mut paddle = game.world.get::<&mut Paddle>(game.right).unwrap();
        paddle.y = 500.0;
        paddle.velocity = -100.0;
    }

    systems::steer_computer_paddles(&mut game.world);

    assert_eq!(game.paddle(game.right).velocity, -100.0);
}

#[test]
fn test_computer_paddle_follows_ball() {
    let mut game = Game::new(ball(Vec2::new(800.0, 100.0), Vec2::new(1.0, 0.0)));

    for _ in 0..100 {
        game.step(0.05);
    }

    let paddle = game.paddle(game.right);
    assert!(
        (paddle.center_y() - 100.0).abs() <= paddle.height * 0.5 + 1.0,
        "Paddle centre {} should be within the dead zone of the ball",
        paddle.center_y()
    );
}

#[test]
fn test_zero_and_negative_dt_are_harmless() {
    let mut game = Game::new(ball(Vec2::new(800.0, 450.0), Vec2::new(0.6, 0.8)));
    let before = game.ball();

    game.step(0.0);
    game.step(-0.5);
    game.step(f32::NAN);

    let after = game.ball();
    assert_eq!(after.pos, before.pos);
    assert!(after.pos.x.is_finite() && after.pos.y.is_finite());
    assert_eq!(game.time.now, 0.0);
}

#[test]
fn test_long_frame_is_capped() {
    let mut game = Game::new(ball(Vec2::new(800.0, 450.0), Vec2::new(1.0, 0.0)));

    game.step(10.0);

    assert!((game.ball().pos.x - (800.0 + 100.0 * game.config.max_dt)).abs() < 1e-3);
}

#[test]
fn test_human_command_moves_left_paddle() {
    let mut game = Game::new(ball(Vec2::new(800.0, 450.0), Vec2::new(1.0, 0.0)));
    game.input.push(PaddleCommand::MoveUp);

    game.step(0.1);
    assert!((game.paddle(game.left).y - 420.0).abs() < 1e-3);

    game.input.push(PaddleCommand::Stop);
    game.step(0.1);
    assert!((game.paddle(game.left).y - 420.0).abs() < 1e-3);
}

#[test]
fn test_invariants_hold_over_long_play() {
    let mut sim = Simulation::new(Surface::new(1600.0, 900.0), Config::new(), 99);
    let mut last_scores = sim.scores();

    for frame in 0..20_000 {
        // Wiggle the human paddle so both ends of its range are exercised
        let command = match (frame / 300) % 3 {
            0 => PaddleCommand::MoveUp,
            1 => PaddleCommand::MoveDown,
            _ => PaddleCommand::Stop,
        };
        sim.set_human_command(command);
        sim.advance(0.016);

        for side in [Side::Left, Side::Right] {
            let paddle = sim.paddle(side).unwrap();
            assert!(
                paddle.y >= 0.0 && paddle.y <= sim.surface.height - paddle.height,
                "{:?} paddle out of bounds at frame {}: {}",
                side,
                frame,
                paddle.y
            );
        }

        let ball = sim.ball().unwrap();
        assert!((ball.dir.length() - 1.0).abs() < 1e-4);

        let scores = sim.scores();
        let gained = (scores.0 - last_scores.0) + (scores.1 - last_scores.1);
        if sim.events().served {
            assert_eq!(gained, 1, "One point per serve at frame {}", frame);
        } else {
            assert_eq!(gained, 0);
            assert!(ball.pos.y - ball.radius >= -1e-3);
            assert!(ball.pos.y + ball.radius <= sim.surface.height + 1e-3);
        }
        last_scores = scores;
    }

    assert!(sim.scores().0 + sim.scores().1 > 0, "Someone should have scored");
}

#[test]
fn test_surface_resize_is_read_each_frame() {
    let mut game = Game::new(ball(Vec2::new(800.0, 385.0), Vec2::new(0.0, 1.0)));
    game.surface = Surface::new(1600.0, 400.0);

    game.step(0.1);

    let ball = game.ball();
    assert!(ball.pos.y + ball.radius <= 400.0);
    assert!(ball.dir.y < 0.0, "Ball should have bounced off the new bottom edge");
    assert!(game.events.ball_hit_wall);
    assert!(game.paddle(game.left).y <= 300.0);
}

#[test]
fn test_rendered_frame_reports_scores() {
    struct Texts(Vec<String>);

    impl RenderSink for Texts {
        fn clear(&mut self, _width: f32, _height: f32) {}
        fn fill_rect(&mut self, _rect: Rect, _color: Color) {}
        fn fill_circle(&mut self, _circle: Circle, _color: Color) {}
        fn fill_text(&mut self, text: &str, _at: Vec2, _color: Color) {
            self.0.push(text.to_string());
        }
        fn dashed_line(&mut self, _from: Vec2, _to: Vec2, _style: LineStyle) {}
    }

    let mut sim = Simulation::default();
    for (_e, paddle) in sim.world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Right {
            paddle.score = 4;
        }
    }

    let mut sink = Texts(Vec::new());
    sim.render(&mut sink);

    assert_eq!(sink.0, vec!["0".to_string(), "4".to_string()]);
}
