#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod agents;
pub mod config;
pub mod input;
pub mod levelgen;
pub mod util;
pub mod world;
