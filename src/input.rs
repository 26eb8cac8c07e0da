use crate::levelgen::direction::Direction;
use ggez::input::keyboard::KeyCode;

/// Everything the player can ask of the game.
#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash)]
pub enum Command {
  MoveUp,
  MoveDown,
  MoveLeft,
  MoveRight,
  Restart,
  Quit,
}

impl Command {
  /// Arrow keys or WASD move, R restarts, Escape quits. Anything else is
  /// ignored.
  pub fn from_keycode(key: KeyCode) -> Option<Command> {
    let cmd = match key {
      KeyCode::Up | KeyCode::W => Command::MoveUp,
      KeyCode::Down | KeyCode::S => Command::MoveDown,
      KeyCode::Left | KeyCode::A => Command::MoveLeft,
      KeyCode::Right | KeyCode::D => Command::MoveRight,
      KeyCode::R => Command::Restart,
      KeyCode::Escape => Command::Quit,
      _ => return None,
    };
    Some(cmd)
  }

  pub fn direction(&self) -> Option<Direction> {
    match *self {
      Command::MoveUp => Some(Direction::North),
      Command::MoveDown => Some(Direction::South),
      Command::MoveLeft => Some(Direction::West),
      Command::MoveRight => Some(Direction::East),
      Command::Restart | Command::Quit => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn arrows_and_wasd_agree() {
    let pairs = [
      (KeyCode::Up, KeyCode::W),
      (KeyCode::Down, KeyCode::S),
      (KeyCode::Left, KeyCode::A),
      (KeyCode::Right, KeyCode::D),
    ];
    for (arrow, letter) in pairs.iter() {
      let cmd = Command::from_keycode(*arrow);
      assert!(cmd.is_some());
      assert_eq!(cmd, Command::from_keycode(*letter));
    }
  }

  #[test]
  fn control_keys() {
    assert_eq!(Command::from_keycode(KeyCode::R), Some(Command::Restart));
    assert_eq!(Command::from_keycode(KeyCode::Escape), Some(Command::Quit));
    assert_eq!(Command::from_keycode(KeyCode::Space), None);
  }

  #[test]
  fn moves_map_to_screen_directions() {
    assert_eq!(Command::MoveUp.direction().map(|d| d.to_tup()), Some((0, -1)));
    assert_eq!(Command::MoveRight.direction().map(|d| d.to_tup()), Some((1, 0)));
    assert_eq!(Command::Restart.direction(), None);
    assert_eq!(Command::Quit.direction(), None);
  }
}
