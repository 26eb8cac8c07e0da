use std::env;

pub const COLS: usize = 15;
pub const ROWS: usize = 12;
/// Chance that any interior cell becomes a wall
pub const WALL_CHANCE: f64 = 0.15;

static SEED_VAR: &'static str = "QUANTUM_TWINS_SEED";

/// Knobs for level generation. Start and target corners are derived from the
/// dimensions, so they aren't configurable separately.
#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
  pub cols: usize,
  pub rows: usize,
  pub wall_chance: f64,
}

impl Default for LevelConfig {
  fn default() -> Self {
    LevelConfig::new(COLS, ROWS, WALL_CHANCE)
  }
}

impl LevelConfig {
  /// Same dimensions, but every interior cell is floor
  pub fn open(cols: usize, rows: usize) -> Self {
    LevelConfig::new(cols, rows, 0.0)
  }
}

/// Reads the RNG seed from the environment, if one was given.
pub fn seed_from_env() -> Option<u64> {
  let raw = env::var(SEED_VAR).ok()?;
  parse_seed(&raw)
}

fn parse_seed(raw: &str) -> Option<u64> {
  match raw.trim().parse::<u64>() {
    Ok(seed) => Some(seed),
    Err(e) => {
      warn!("Ignoring {}={:?}: {}", SEED_VAR, raw, e);
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_matches_prototype_dimensions() {
    let c = LevelConfig::default();
    assert_eq!((c.cols, c.rows), (15, 12));
    assert_eq!(c.wall_chance, 0.15);
  }

  #[test]
  fn open_config_has_no_walls() {
    assert_eq!(LevelConfig::open(7, 5).wall_chance, 0.0);
  }

  #[test]
  fn seeds_parse_or_get_ignored() {
    assert_eq!(parse_seed(" 42 "), Some(42));
    assert_eq!(parse_seed("banana"), None);
    assert_eq!(parse_seed("-1"), None);
  }
}
