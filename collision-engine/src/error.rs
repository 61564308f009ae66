use std::path::PathBuf;

use snafu::Snafu;

/// Failure to resolve a single body pair
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CollisionError {
    /// The centers are (almost) at the same spot, so there is no collision normal
    #[snafu(display("bodies have coincident centers ({distance} apart), the collision normal is undefined"))]
    CoincidentCenters {
        distance: f32,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EngineError {
    #[snafu(display("invalid body {field}: {value}"))]
    InvalidBody {
        field: &'static str,
        value: String,
    },

    #[snafu(display("invalid config: {message}"))]
    InvalidConfig {
        message: String,
    },

    #[snafu(display("could not read config file {}", path.display()))]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("could not parse config file {}", path.display()))]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub type EngineResult<T, E = EngineError> = Result<T, E>;
