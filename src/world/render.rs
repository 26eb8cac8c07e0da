use crate::input::Command;
use crate::levelgen::{Cell, Grid};
use crate::util::context_help::CellSpace;
use crate::world::{Flow, World};
use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Text};
use ggez::input::keyboard::KeyInput;
use ggez::{event, timer, Context, GameError, GameResult};
use rand::rngs::StdRng;

pub static TITLE: &'static str = "Quantum Twins";
/// Side of one grid cell in pixels
pub const CELL: f32 = 32.0;
/// Strip under the grid for the status caption
pub const HUD_HEIGHT: f32 = 40.0;
pub const DESIRED_FPS: u32 = 30;

static HINT: &'static str = "R: restart | ESC: quit";
static WIN_MESSAGE: &'static str = "YOU WIN! Press R to restart";

lazy_static! {
  static ref WALL_COLOR: Color = Color::from_rgb(40, 40, 40);
  static ref FLOOR_COLOR: Color = Color::from_rgb(15, 15, 20);
  static ref PRIMARY_COLOR: Color = Color::from_rgb(60, 180, 255);
  static ref MIRROR_COLOR: Color = Color::from_rgb(255, 80, 80);
  static ref PRIMARY_TARGET_COLOR: Color = Color::from_rgb(120, 255, 120);
  static ref MIRROR_TARGET_COLOR: Color = Color::from_rgb(255, 255, 100);
  static ref HUD_COLOR: Color = Color::from_rgb(220, 220, 220);
}

/// Window dimensions needed to show `grid` plus the caption strip
pub fn window_size(grid: &Grid) -> (f32, f32) {
  (grid.width() as f32 * CELL, grid.height() as f32 * CELL + HUD_HEIGHT)
}

pub fn caption(world: &World) -> &'static str {
  if world.is_won() {
    WIN_MESSAGE
  } else {
    HINT
  }
}

/// Owns the level for the lifetime of the window. Key presses go through
/// `World::handle`, and every frame redraws from the world's current state.
pub struct WorldRender {
  world: World,
  rng: StdRng,
}

impl WorldRender {
  pub fn new(world: World, rng: StdRng) -> WorldRender {
    WorldRender { world, rng }
  }

  pub fn world(&self) -> &World {
    &self.world
  }

  fn level_mesh(&self, ctx: &mut Context) -> GameResult<Mesh> {
    let mut mb = MeshBuilder::new();
    let grid = self.world.grid();
    for p in grid.positions() {
      let color = match grid.get(p) {
        Some(Cell::Wall) => *WALL_COLOR,
        _ => *FLOOR_COLOR,
      };
      mb.rectangle(DrawMode::fill(), p.cell_rect(CELL), color)?;
    }

    // Targets go under the twins so a twin standing on one stays visible
    mb.rectangle(DrawMode::fill(), self.world.primary_target().cell_rect(CELL), *PRIMARY_TARGET_COLOR)?;
    mb.rectangle(DrawMode::fill(), self.world.mirror_target().cell_rect(CELL), *MIRROR_TARGET_COLOR)?;

    let radius = CELL / 2.0 - 4.0;
    mb.circle(DrawMode::fill(), self.world.primary().cell_center(CELL), radius, 0.5, *PRIMARY_COLOR)?;
    mb.circle(DrawMode::fill(), self.world.mirror().cell_center(CELL), radius, 0.5, *MIRROR_COLOR)?;
    Ok(Mesh::from_data(ctx, mb.build()))
  }
}

impl event::EventHandler<GameError> for WorldRender {
  fn update(&mut self, ctx: &mut Context) -> GameResult {
    // Nothing moves between key presses; this only paces the frame loop
    while ctx.time.check_update_time(DESIRED_FPS) {}
    Ok(())
  }

  fn draw(&mut self, ctx: &mut Context) -> GameResult {
    let mut canvas = Canvas::from_frame(ctx, Color::BLACK);
    let level = self.level_mesh(ctx)?;
    canvas.draw(&level, DrawParam::default());

    let mut hud = Text::new(caption(&self.world));
    hud.set_scale(20.0);
    let (_, height) = window_size(self.world.grid());
    canvas.draw(&hud, DrawParam::default().dest([10.0, height - 30.0]).color(*HUD_COLOR));

    canvas.finish(ctx)?;
    timer::yield_now();
    Ok(())
  }

  fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
    if repeated {
      return Ok(());
    }
    let cmd = match input.keycode.and_then(Command::from_keycode) {
      Some(cmd) => cmd,
      None => return Ok(()),
    };
    if self.world.handle(cmd, &mut self.rng) == Flow::Quit {
      info!("Quitting");
      ctx.request_quit();
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::LevelConfig;
  use rand::SeedableRng;

  #[test]
  fn window_fits_grid_and_caption() {
    let world = World::new(LevelConfig::default(), &mut StdRng::seed_from_u64(5));
    assert_eq!(window_size(world.grid()), (480.0, 424.0));
  }

  #[test]
  fn caption_follows_win_flag() {
    let grid = Grid::from_ascii("####\n#..#\n#..#\n####").unwrap();
    let mut world = World::from_grid(grid);
    assert_eq!(caption(&world), HINT);
    // On a 4x4 grid one step right puts both twins on their targets
    world.apply_move(1, 0);
    assert!(world.is_won());
    assert_eq!(caption(&world), WIN_MESSAGE);
  }
}
