use crate::util::Vector;

#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash)]
pub enum Direction {
  North,
  East,
  South,
  West,
}

impl Direction {
  pub fn compass() -> &'static [Direction; 4] {
    static DIRECTIONS: [Direction; 4] = [
      Direction::North,
      Direction::East,
      Direction::South,
      Direction::West,
    ];
    &DIRECTIONS
  }

  /// Grid step for this direction. Y grows downward, so north is `-1`.
  pub fn to_tup(&self) -> Vector {
    match *self {
      Direction::North => (0, -1),
      Direction::East => (1, 0),
      Direction::South => (0, 1),
      Direction::West => (-1, 0),
    }
  }

  pub fn from_tup(v: Vector) -> Option<Direction> {
    Direction::compass().iter().cloned().find(|d| d.to_tup() == v)
  }

  pub fn opposite(&self) -> Direction {
    match *self {
      Direction::North => Direction::South,
      Direction::East => Direction::West,
      Direction::South => Direction::North,
      Direction::West => Direction::East,
    }
  }
}
