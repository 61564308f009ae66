//! User facing simulation settings, loaded from TOML.
//!
//! Every key is optional, missing ones fall back to [`SimulationConfig::default`]:
//!
//! ```toml
//! width = 800.0
//! height = 800.0
//! walls = true
//! restitution = 0.8
//! drag = 0.9999
//! gravity = [0.0, 20.0]
//! ```

use crate::{ EngineResult, InvalidConfigSnafu, ParseConfigSnafu, ReadConfigSnafu };

use std::path::Path;

use glam::Vec2;
use snafu::{ ensure, ResultExt as _ };

/// The valid log levels, mirrors `tracing`'s levels
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::Off => "off",
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub width: f32,
    pub height: f32,
    /// Whether bodies bounce off the world bounds
    pub walls: bool,
    /// Speed factor applied to both bodies after they collide, 1 is elastic
    pub restitution: f32,
    /// Speed factor applied to a body bouncing off a wall
    pub wall_restitution: f32,
    /// Velocity factor applied every step
    pub drag: f32,
    pub gravity: Vec2,
    /// Push overlapping bodies apart after resolving their velocities
    pub position_correction: bool,
    /// Centers closer than this are moved apart before resolving
    pub min_separation: f32,
    /// Gap left between bodies by the position correction
    pub separation_slop: f32,
    pub frame_rate: u32,
    pub log_level: LogLevel,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 800.,
            height: 800.,
            walls: true,
            restitution: 1.,
            wall_restitution: 1.,
            drag: 1.,
            gravity: Vec2::ZERO,
            position_correction: true,
            min_separation: 1e-4,
            separation_slop: 0.,
            frame_rate: 60,
            log_level: LogLevel::Info,
        }
    }
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).context(ReadConfigSnafu { path })?;
        let config: Self = toml::from_str(&content).context(ParseConfigSnafu { path })?;
        config.validate()?;
        tracing::debug!(?config, "loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> EngineResult<Self> {
        let config: Self = toml::from_str(content).context(ParseConfigSnafu { path: "<inline>" })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        ensure!(
            self.width.is_finite() && self.width > 0. && self.height.is_finite() && self.height > 0.,
            InvalidConfigSnafu { message: format!("world size must be positive, got {}x{}", self.width, self.height) }
        );
        ensure!(
            (0. ..=1.).contains(&self.restitution),
            InvalidConfigSnafu { message: format!("restitution must be in [0, 1], got {}", self.restitution) }
        );
        ensure!(
            (0. ..=1.).contains(&self.wall_restitution),
            InvalidConfigSnafu { message: format!("wall_restitution must be in [0, 1], got {}", self.wall_restitution) }
        );
        ensure!(
            self.drag > 0. && self.drag <= 1.,
            InvalidConfigSnafu { message: format!("drag must be in (0, 1], got {}", self.drag) }
        );
        ensure!(
            self.gravity.is_finite(),
            InvalidConfigSnafu { message: format!("gravity must be finite, got {}", self.gravity) }
        );
        ensure!(
            self.min_separation.is_finite() && self.min_separation > 0.,
            InvalidConfigSnafu { message: format!("min_separation must be positive, got {}", self.min_separation) }
        );
        ensure!(
            self.separation_slop.is_finite() && self.separation_slop >= 0.,
            InvalidConfigSnafu { message: format!("separation_slop must not be negative, got {}", self.separation_slop) }
        );
        ensure!(
            self.frame_rate > 0,
            InvalidConfigSnafu { message: "frame_rate must be at least 1" }
        );
        Ok(())
    }

    /// Time step of a single frame
    pub fn dt(&self) -> f32 {
        1. / self.frame_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;

    use std::io::Write as _;

    #[test]
    fn test_empty_file_is_default() {
        let config = SimulationConfig::from_toml("").unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SimulationConfig::from_toml(r#"
            restitution = 0.8
            drag = 0.9999
            gravity = [0.0, 20.0]
            log_level = "debug"
        "#).unwrap();

        assert_eq!(config.restitution, 0.8);
        assert_eq!(config.drag, 0.9999);
        assert_eq!(config.gravity, Vec2::new(0., 20.));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.width, 800.);
        assert!(config.walls);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for content in [
            "restitution = 1.5",
            "wall_restitution = -0.1",
            "drag = 0.0",
            "width = -10.0",
            "min_separation = 0.0",
            "separation_slop = -1.0",
            "frame_rate = 0",
        ] {
            let err = SimulationConfig::from_toml(content).unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfig { .. }), "{content}: {err}");
        }
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = SimulationConfig::from_toml("bounciness = 2.0").unwrap_err();
        assert!(matches!(err, EngineError::ParseConfig { .. }));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "width = 320.0\nwalls = false\nframe_rate = 30").unwrap();

        let config = SimulationConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 320.);
        assert!(!config.walls);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.height, 800.);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "drag = 2.0").unwrap();

        let err = SimulationConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = SimulationConfig::load("/this/path/does/not/exist.toml").unwrap_err();
        assert!(matches!(err, EngineError::ReadConfig { .. }));
    }

    #[test]
    fn test_dt() {
        let config = SimulationConfig { frame_rate: 50, ..Default::default() };
        assert_eq!(config.dt(), 0.02);
    }
}
