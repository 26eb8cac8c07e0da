use crate::util::Vector;
use std::fmt;

/// A cell coordinate on the level grid. Signed so that candidate moves off the
/// edge can be represented and rejected by the bounds check.
#[derive(new, Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Position {
  pub x: i32,
  pub y: i32,
}

impl Position {
  pub fn offset(&self, (dx, dy): Vector) -> Position {
    Position::new(self.x + dx, self.y + dy)
  }

  /// `(x, y)` as grid indexes, or `None` if either coordinate is negative
  pub fn to_index(&self) -> Option<(usize, usize)> {
    if self.x < 0 || self.y < 0 {
      None
    } else {
      Some((self.x as usize, self.y as usize))
    }
  }
}

impl From<(i32, i32)> for Position {
  fn from((x, y): (i32, i32)) -> Self {
    Position::new(x, y)
  }
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// Flips a step to point the other way along the same axis
pub fn negate(v: Vector) -> Vector {
  (-v.0, -v.1)
}
