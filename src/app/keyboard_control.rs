use ggez::input::keyboard::KeyCode;

use crate::basic::Dir;

/// Everything the player can ask for
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Input {
    Turn(Dir),
    Restart,
    Quit,
}

impl Input {
    /// Keys without a binding map to None
    pub fn from_key(key: KeyCode) -> Option<Self> {
        use KeyCode::*;

        match key {
            Up => Some(Self::Turn(Dir::U)),
            Down => Some(Self::Turn(Dir::D)),
            Left => Some(Self::Turn(Dir::L)),
            Right => Some(Self::Turn(Dir::R)),
            Space => Some(Self::Restart),
            Escape => Some(Self::Quit),
            _ => None,
        }
    }
}

#[test]
fn test_key_bindings() {
    for (key, input) in [
        (KeyCode::Up, Input::Turn(Dir::U)),
        (KeyCode::Down, Input::Turn(Dir::D)),
        (KeyCode::Left, Input::Turn(Dir::L)),
        (KeyCode::Right, Input::Turn(Dir::R)),
        (KeyCode::Space, Input::Restart),
        (KeyCode::Escape, Input::Quit),
    ] {
        assert_eq!(Input::from_key(key), Some(input), "{:?}", key);
    }

    for key in [KeyCode::W, KeyCode::Return, KeyCode::Q, KeyCode::Key1] {
        assert_eq!(Input::from_key(key), None, "{:?}", key);
    }
}
