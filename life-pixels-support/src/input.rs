use life_grid::Command;
use winit::keyboard::KeyCode;

pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::KeyS => Some(Command::Pause),
        KeyCode::KeyR => Some(Command::Randomize),
        KeyCode::KeyQ | KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_control_keys() {
        assert_eq!(command_for_key(KeyCode::KeyS), Some(Command::Pause));
        assert_eq!(command_for_key(KeyCode::KeyR), Some(Command::Randomize));
        assert_eq!(command_for_key(KeyCode::KeyQ), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Escape), Some(Command::Quit));
    }

    #[test]
    fn ignores_other_keys() {
        for code in [KeyCode::KeyA, KeyCode::Space, KeyCode::Enter, KeyCode::KeyX] {
            assert_eq!(command_for_key(code), None);
        }
    }
}
