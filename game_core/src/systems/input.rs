use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Apply the pending human command to human-controlled paddles
pub fn ingest_inputs(world: &mut World, input: &mut InputState) {
    let Some(command) = input.take() else {
        return;
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Human {
            paddle.set_command(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn setup_world() -> (World, hecs::Entity, hecs::Entity) {
        let mut world = World::new();
        let human = create_paddle(
            &mut world,
            Paddle::new(Side::Left, 20.0, 450.0, 10.0, 100.0, 300.0),
            Controller::Human,
        );
        let computer = create_paddle(
            &mut world,
            Paddle::new(Side::Right, 1580.0, 450.0, 10.0, 100.0, 100.0),
            Controller::Computer,
        );
        (world, human, computer)
    }

    #[test]
    fn test_command_reaches_only_human_paddle() {
        let (mut world, human, computer) = setup_world();
        let mut input = InputState::new();
        input.push(PaddleCommand::MoveDown);

        ingest_inputs(&mut world, &mut input);

        assert_eq!(world.get::<&Paddle>(human).unwrap().velocity, 300.0);
        assert_eq!(world.get::<&Paddle>(computer).unwrap().velocity, 0.0);
        assert!(input.pending.is_none(), "Command should be consumed");
    }

    #[test]
    fn test_no_pending_command_keeps_velocity() {
        let (mut world, human, _computer) = setup_world();
        world.get::<&mut Paddle>(human).unwrap().velocity = -300.0;

        ingest_inputs(&mut world, &mut InputState::new());

        assert_eq!(world.get::<&Paddle>(human).unwrap().velocity, -300.0);
    }
}
