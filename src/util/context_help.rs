use crate::util::Position;
use ggez::graphics::Rect;

/// Conversions from grid cells to screen pixels, given the side length of a
/// cell in pixels.
pub trait CellSpace {
  fn cell_rect(&self, cell: f32) -> Rect;
  fn cell_center(&self, cell: f32) -> [f32; 2];
}

impl CellSpace for Position {
  fn cell_rect(&self, cell: f32) -> Rect {
    Rect::new(self.x as f32 * cell, self.y as f32 * cell, cell, cell)
  }

  fn cell_center(&self, cell: f32) -> [f32; 2] {
    let r = self.cell_rect(cell);
    [r.x + cell / 2.0, r.y + cell / 2.0]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cells_map_to_pixels() {
    let p = Position::new(2, 1);
    assert_eq!(p.cell_rect(32.0), Rect::new(64.0, 32.0, 32.0, 32.0));
    assert_eq!(p.cell_center(32.0), [80.0, 48.0]);
  }
}
