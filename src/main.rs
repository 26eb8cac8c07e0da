#[macro_use]
extern crate log;

use env_logger::{Builder, Env};
use ggez::{conf, event, ContextBuilder, GameResult};
use quantum_twins::config::{self, LevelConfig};
use quantum_twins::world::render::{self, WorldRender};
use quantum_twins::world::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> GameResult {
  // Set default log level to warn for everything, and info for our code
  Builder::from_env(Env::default().default_filter_or("warn,quantum_twins=info")).init();

  // Always seed explicitly so a level can be replayed from the logged seed
  let seed = config::seed_from_env().unwrap_or_else(rand::random);
  info!("Level seed {}", seed);
  let mut rng = StdRng::seed_from_u64(seed);
  let world = World::new(LevelConfig::default(), &mut rng);

  let (width, height) = render::window_size(world.grid());
  let (ctx, events_loop) = ContextBuilder::new("quantum-twins", "Spencer Judge")
    .window_setup(conf::WindowSetup::default().title(render::TITLE))
    .window_mode(conf::WindowMode::default().dimensions(width, height))
    .build()?;
  event::run(ctx, events_loop, WorldRender::new(world, rng))
}
