use crate::config::LevelConfig;
use crate::util::Position;
use rand::Rng;
use std::error::Error;
use std::fmt;

pub mod direction;

/// Smallest grid that still has an interior cell inside the border ring
pub const MIN_SIDE: usize = 3;

#[derive(PartialEq, Debug, Clone, Copy, Eq, Hash)]
pub enum Cell {
  Floor,
  Wall,
}

impl Cell {
  fn from_glyph(c: char) -> Option<Cell> {
    match c {
      '.' => Some(Cell::Floor),
      '#' => Some(Cell::Wall),
      _ => None,
    }
  }

  fn glyph(&self) -> char {
    match *self {
      Cell::Floor => '.',
      Cell::Wall => '#',
    }
  }
}

/// The four fixed cells one step inside each corner of the border ring.
#[derive(new, Debug, PartialEq, Eq, Copy, Clone)]
pub struct Corners {
  pub primary_start: Position,
  pub mirror_start: Position,
  pub primary_target: Position,
  pub mirror_target: Position,
}

impl Corners {
  pub fn all(&self) -> [Position; 4] {
    [self.primary_start, self.mirror_start, self.primary_target, self.mirror_target]
  }
}

/// A walled level, stored row-major as `cells[y][x]`. The outer ring is always
/// wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
  cells: Vec<Vec<Cell>>,
  width: usize,
  height: usize,
}

impl Grid {
  /// Builds a fresh level: border ring forced to wall, every interior cell
  /// independently wall with `config.wall_chance`. Corner cells are cleared
  /// afterwards so both twins start and finish on floor. Nothing checks that
  /// the targets are actually reachable.
  pub fn generate<R: Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> Grid {
    let width = config.cols.max(MIN_SIDE);
    let height = config.rows.max(MIN_SIDE);
    if (width, height) != (config.cols, config.rows) {
      warn!("Level of {}x{} is too small, using {}x{}", config.cols, config.rows, width, height);
    }
    let chance = config.wall_chance.max(0.0).min(1.0);

    let mut cells = vec![vec![Cell::Floor; width]; height];
    for (y, row) in cells.iter_mut().enumerate() {
      for (x, cell) in row.iter_mut().enumerate() {
        let border = y == 0 || y == height - 1 || x == 0 || x == width - 1;
        if border || rng.gen_bool(chance) {
          *cell = Cell::Wall;
        }
      }
    }
    let mut grid = Grid { cells, width, height };
    for corner in grid.corners().all().iter() {
      grid.set(*corner, Cell::Floor);
    }
    debug!("Generated {}x{} grid with {} walls", width, height, grid.wall_count());
    grid
  }

  /// Parses a layout of `#` (wall) and `.` (floor) rows. Blank lines and
  /// surrounding whitespace are skipped, so indented literals work.
  pub fn from_ascii(layout: &str) -> Result<Grid, LayoutError> {
    let rows: Vec<&str> = layout.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    if rows.is_empty() {
      return Err(LayoutError::Empty);
    }
    let width = rows[0].chars().count();
    let mut cells = Vec::with_capacity(rows.len());
    for (y, line) in rows.iter().enumerate() {
      let row = line
        .chars()
        .enumerate()
        .map(|(x, c)| Cell::from_glyph(c).ok_or(LayoutError::UnknownGlyph { x, y, glyph: c }))
        .collect::<Result<Vec<Cell>, LayoutError>>()?;
      if row.len() != width {
        return Err(LayoutError::Ragged { y, expected: width, found: row.len() });
      }
      cells.push(row);
    }
    let height = cells.len();
    if width < MIN_SIDE || height < MIN_SIDE {
      return Err(LayoutError::TooSmall { width, height });
    }

    let grid = Grid { cells, width, height };
    if let Some(p) = grid.border().find(|p| grid.get(*p) != Some(Cell::Wall)) {
      return Err(LayoutError::OpenBorder(p));
    }
    Ok(grid)
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  /// Cell at `p`, or `None` when `p` is off the grid
  pub fn get(&self, p: Position) -> Option<Cell> {
    let (x, y) = p.to_index()?;
    self.cells.get(y).and_then(|row| row.get(x)).cloned()
  }

  pub fn is_floor(&self, p: Position) -> bool {
    self.get(p) == Some(Cell::Floor)
  }

  pub fn in_bounds(&self, p: Position) -> bool {
    self.get(p).is_some()
  }

  /// Overwrites a cell. Border cells and positions off the grid are left
  /// alone so the wall ring can't be opened.
  pub fn set(&mut self, p: Position, cell: Cell) {
    if self.is_border(p) {
      return;
    }
    if let Some((x, y)) = p.to_index() {
      if let Some(c) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
        *c = cell;
      }
    }
  }

  pub fn is_border(&self, p: Position) -> bool {
    let (w, h) = (self.width as i32, self.height as i32);
    self.in_bounds(p) && (p.x == 0 || p.y == 0 || p.x == w - 1 || p.y == h - 1)
  }

  /// Every border cell, walking each row top to bottom
  pub fn border<'a>(&'a self) -> impl Iterator<Item = Position> + 'a {
    self.positions().filter(move |p| self.is_border(*p))
  }

  pub fn positions(&self) -> impl Iterator<Item = Position> {
    let (w, h) = (self.width as i32, self.height as i32);
    (0..h).flat_map(move |y| (0..w).map(move |x| Position::new(x, y)))
  }

  pub fn rows(&self) -> &[Vec<Cell>] {
    &self.cells
  }

  pub fn wall_count(&self) -> usize {
    self.cells.iter().flatten().filter(|c| **c == Cell::Wall).count()
  }

  pub fn corners(&self) -> Corners {
    let (w, h) = (self.width as i32, self.height as i32);
    Corners::new(
      Position::new(1, 1),
      Position::new(w - 2, h - 2),
      Position::new(w - 2, 1),
      Position::new(1, h - 2),
    )
  }
}

impl fmt::Display for Grid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for row in &self.cells {
      let line: String = row.iter().map(Cell::glyph).collect();
      writeln!(f, "{}", line)?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
  Empty,
  UnknownGlyph { x: usize, y: usize, glyph: char },
  Ragged { y: usize, expected: usize, found: usize },
  TooSmall { width: usize, height: usize },
  OpenBorder(Position),
}

impl fmt::Display for LayoutError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      LayoutError::Empty => write!(f, "layout has no rows"),
      LayoutError::UnknownGlyph { x, y, glyph } => {
        write!(f, "unknown glyph {:?} at ({}, {})", glyph, x, y)
      }
      LayoutError::Ragged { y, expected, found } => {
        write!(f, "row {} is {} cells wide, expected {}", y, found, expected)
      }
      LayoutError::TooSmall { width, height } => {
        write!(f, "layout is {}x{}, needs at least {}x{}", width, height, MIN_SIDE, MIN_SIDE)
      }
      LayoutError::OpenBorder(p) => write!(f, "border cell {} is not a wall", p),
    }
  }
}

impl Error for LayoutError {}
