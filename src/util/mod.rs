pub mod context_help;
pub mod geom;

pub use self::geom::Position;

/// A grid step, `(dx, dy)`
pub type Vector = (i32, i32);
