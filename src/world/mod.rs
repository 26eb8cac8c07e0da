use crate::agents::{Agent, Role, Twin};
use crate::config::{LevelConfig, WALL_CHANCE};
use crate::input::Command;
use crate::levelgen::direction::Direction;
use crate::levelgen::{Cell, Corners, Grid};
use crate::util::Position;
use rand::Rng;

pub mod render;

#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum Status {
  Playing,
  Won,
}

/// What the frontend should do after a command has been handled
#[derive(PartialEq, Debug, Clone, Copy, Eq)]
pub enum Flow {
  Continue,
  Quit,
}

/// The entire level state: the grid, both twins, their targets and whether
/// the level has been won. Single owner; the frontend only reads it between
/// commands.
#[derive(Debug, Clone)]
pub struct World {
  config: LevelConfig,
  grid: Grid,
  corners: Corners,
  primary: Twin,
  mirror: Twin,
  won: bool,
}

impl World {
  pub fn new<R: Rng + ?Sized>(config: LevelConfig, rng: &mut R) -> World {
    let mut world = World::from_grid(Grid::generate(&config, rng));
    world.config = config;
    info!("New {}x{} level with {} walls", world.grid.width(), world.grid.height(), world.grid.wall_count());
    world
  }

  /// Starts a level on an existing grid, twins and targets in their fixed
  /// corners. A later `regenerate` keeps the grid's dimensions.
  pub fn from_grid(grid: Grid) -> World {
    let corners = grid.corners();
    let config = LevelConfig::new(grid.width(), grid.height(), WALL_CHANCE);
    World {
      config,
      grid,
      corners,
      primary: Twin::new(Role::Primary, corners.primary_start),
      mirror: Twin::new(Role::Mirror, corners.mirror_start),
      won: false,
    }
  }

  /// Throws the current level away: new grid, twins and targets back in their
  /// corners, win flag cleared.
  pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    *self = World::new(self.config, rng);
  }

  /// Steps the primary twin by `(dx, dy)` and the mirror twin by
  /// `(-dx, -dy)`. Each twin is checked against its own destination only, so
  /// one can move while the other bumps a wall. Blocked steps are no-ops.
  pub fn apply_move(&mut self, dx: i32, dy: i32) {
    self.primary.trans((dx, dy), &self.grid);
    self.mirror.trans((dx, dy), &self.grid);

    if !self.won && self.at_targets() {
      info!("Both twins reached their targets");
      self.won = true;
    }
  }

  pub fn apply_direction(&mut self, d: Direction) {
    let (dx, dy) = d.to_tup();
    self.apply_move(dx, dy);
  }

  /// Routes one input command. Moves are dropped once the level is won; only
  /// a restart brings it back into play.
  pub fn handle<R: Rng + ?Sized>(&mut self, cmd: Command, rng: &mut R) -> Flow {
    match cmd {
      Command::Quit => return Flow::Quit,
      Command::Restart => {
        info!("Restarting level");
        self.regenerate(rng);
      }
      _ => match (self.status(), cmd.direction()) {
        (Status::Playing, Some(d)) => self.apply_direction(d),
        (Status::Won, _) => trace!("Ignoring {:?}, level already won", cmd),
        (_, None) => (),
      },
    }
    Flow::Continue
  }

  fn at_targets(&self) -> bool {
    self.primary.pos() == self.corners.primary_target && self.mirror.pos() == self.corners.mirror_target
  }

  /// Moves the twins directly, bypassing the mirror rule. A twin whose cell
  /// isn't floor stays put; returns whether both were placed. Doesn't touch
  /// the win flag.
  pub fn place(&mut self, primary: Position, mirror: Position) -> bool {
    let primary_placed = self.place_twin(Role::Primary, primary);
    let mirror_placed = self.place_twin(Role::Mirror, mirror);
    primary_placed && mirror_placed
  }

  fn place_twin(&mut self, role: Role, at: Position) -> bool {
    if !self.grid.is_floor(at) {
      warn!("Can't place {} twin on {}", role.name(), at);
      return false;
    }
    let twin = match role {
      Role::Primary => &mut self.primary,
      Role::Mirror => &mut self.mirror,
    };
    *twin = Twin::new(role, at);
    true
  }

  /// Changes one cell of the current grid. Refused for border cells and for
  /// walls on top of a twin.
  pub fn set_cell(&mut self, p: Position, cell: Cell) -> bool {
    let occupied = p == self.primary.pos() || p == self.mirror.pos();
    if self.grid.is_border(p) || !self.grid.in_bounds(p) || (occupied && cell == Cell::Wall) {
      return false;
    }
    self.grid.set(p, cell);
    true
  }

  pub fn status(&self) -> Status {
    if self.won {
      Status::Won
    } else {
      Status::Playing
    }
  }

  pub fn is_won(&self) -> bool {
    self.won
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn config(&self) -> &LevelConfig {
    &self.config
  }

  pub fn primary(&self) -> Position {
    self.primary.pos()
  }

  pub fn mirror(&self) -> Position {
    self.mirror.pos()
  }

  pub fn primary_target(&self) -> Position {
    self.corners.primary_target
  }

  pub fn mirror_target(&self) -> Position {
    self.corners.mirror_target
  }
}
