//! Keyboard and touch input mapping

use game_core::PaddleCommand;

/// Map a key press to a paddle command; unrelated keys are ignored
pub fn key_down_command(key: &str) -> Option<PaddleCommand> {
    match key {
        "ArrowUp" | "w" | "W" => Some(PaddleCommand::MoveUp),
        "ArrowDown" | "s" | "S" => Some(PaddleCommand::MoveDown),
        _ => None,
    }
}

/// Releasing any key stops the paddle
pub fn key_up_command(_key: &str) -> PaddleCommand {
    PaddleCommand::Stop
}

/// A touch above the surface's vertical midpoint moves up, otherwise down
pub fn touch_command(touch_y: f32, surface_height: f32) -> PaddleCommand {
    if touch_y < surface_height * 0.5 {
        PaddleCommand::MoveUp
    } else {
        PaddleCommand::MoveDown
    }
}

/// Lifting the finger stops the paddle
pub fn touch_end_command() -> PaddleCommand {
    PaddleCommand::Stop
}
