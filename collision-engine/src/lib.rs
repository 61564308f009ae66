mod error;
pub use error::*;
mod body;
pub use body::*;
mod physics_utils;
pub use physics_utils::*;
mod resolver;
pub use resolver::*;
mod overlap;
pub use overlap::*;
mod config;
pub use config::*;
mod world_state;
pub use world_state::*;
mod simulation;
pub use simulation::*;

pub(crate) fn default<T: Default>() -> T {
    T::default()
}

#[cfg(test)]
#[track_caller]
pub(crate) fn assert_close(a: f32, b: f32) {
    let tolerance = 1e-4 * a.abs().max(b.abs()).max(1.);
    assert!((a - b).abs() <= tolerance, "{a} != {b} (tolerance {tolerance})");
}
