use crate::levelgen::Grid;
use crate::util::{Position, Vector};

pub mod twin;

pub use self::twin::{Role, Twin};

pub trait Agent {
  fn pos(&self) -> Position;
  /// Attempts one grid step. Returns whether the agent actually moved.
  fn trans(&mut self, by: Vector, grid: &Grid) -> bool;
}

/// Where `pos` ends up after stepping by `v` on `grid`. The step is only
/// taken when the destination is on the grid and is floor, otherwise `pos`
/// is returned as-is.
pub fn try_move(pos: Position, v: Vector, grid: &Grid) -> Position {
  let candidate = pos.offset(v);
  if grid.is_floor(candidate) {
    candidate
  } else {
    pos
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn corridor() -> Grid {
    Grid::from_ascii(
      "
      #####
      #...#
      #.#.#
      #####
      ",
    )
    .unwrap()
  }

  #[test]
  fn steps_onto_floor() {
    let grid = corridor();
    assert_eq!(try_move(Position::new(1, 1), (1, 0), &grid), Position::new(2, 1));
    assert_eq!(try_move(Position::new(1, 1), (0, 1), &grid), Position::new(1, 2));
  }

  #[test]
  fn walls_block() {
    let grid = corridor();
    assert_eq!(try_move(Position::new(2, 1), (0, 1), &grid), Position::new(2, 1));
    assert_eq!(try_move(Position::new(1, 1), (-1, 0), &grid), Position::new(1, 1));
  }

  #[test]
  fn off_grid_blocks() {
    let grid = corridor();
    // Not reachable through play, but the bounds check alone must hold
    assert_eq!(try_move(Position::new(0, 0), (-1, 0), &grid), Position::new(0, 0));
    assert_eq!(try_move(Position::new(4, 3), (0, 1), &grid), Position::new(4, 3));
  }
}
