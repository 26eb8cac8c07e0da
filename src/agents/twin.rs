use super::{try_move, Agent};
use crate::levelgen::Grid;
use crate::util::geom::negate;
use crate::util::{Position, Vector};

/// Which side of the pair a twin is on. The mirror twin takes every input
/// step with the opposite sign.
#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash)]
pub enum Role {
  Primary,
  Mirror,
}

impl Role {
  /// The step this role takes when the player inputs `v`
  pub fn step_for(&self, v: Vector) -> Vector {
    match *self {
      Role::Primary => v,
      Role::Mirror => negate(v),
    }
  }

  pub fn name(&self) -> &'static str {
    match *self {
      Role::Primary => "primary",
      Role::Mirror => "mirror",
    }
  }
}

#[derive(new, Debug, PartialEq, Eq, Copy, Clone)]
pub struct Twin {
  pub role: Role,
  pos: Position,
}

impl Twin {
  /// Candidate cell for input step `v`, whether or not it's enterable
  pub fn candidate(&self, v: Vector) -> Position {
    self.pos.offset(self.role.step_for(v))
  }
}

impl Agent for Twin {
  fn pos(&self) -> Position {
    self.pos
  }

  fn trans(&mut self, by: Vector, grid: &Grid) -> bool {
    let step = self.role.step_for(by);
    let next = try_move(self.pos, step, grid);
    if next == self.pos {
      trace!("{} twin blocked at {} going {:?}", self.role.name(), self.pos, step);
      false
    } else {
      debug!("{} twin {} -> {}", self.role.name(), self.pos, next);
      self.pos = next;
      true
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::levelgen::direction::Direction;

  #[test]
  fn mirror_candidate_is_always_the_negated_step() {
    let primary = Twin::new(Role::Primary, Position::new(5, 5));
    let mirror = Twin::new(Role::Mirror, Position::new(2, 7));
    for d in Direction::compass() {
      let v = d.to_tup();
      let pd = (primary.candidate(v).x - 5, primary.candidate(v).y - 5);
      let md = (mirror.candidate(v).x - 2, mirror.candidate(v).y - 7);
      assert_eq!(pd, v);
      assert_eq!(md, negate(v));
      assert_eq!(md, d.opposite().to_tup());
    }
  }

  #[test]
  fn trans_reports_movement() {
    let grid = Grid::from_ascii("####\n#..#\n####").unwrap();
    let mut mirror = Twin::new(Role::Mirror, Position::new(2, 1));
    assert!(mirror.trans((1, 0), &grid));
    assert_eq!(mirror.pos(), Position::new(1, 1));
    assert!(!mirror.trans((1, 0), &grid));
    assert_eq!(mirror.pos(), Position::new(1, 1));
  }
}
