//! All the CLI arguments for the visualisation

use std::path::PathBuf;

/// Elastic collisions between disks
#[derive(clap::Parser, Debug, Clone)]
#[command(version, about)]
pub struct CliArgs {
    /// Id of the scene to run, see `--list-scenes`
    #[arg(short, long, default_value = "random")]
    pub scene: String,

    /// Path to a TOML file overriding the simulation settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter (eg `debug` or `collision_engine=trace`), overrides the config's `log_level`
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the available scenes and exit
    #[arg(long)]
    pub list_scenes: bool,

    /// Run without a window, logging the totals instead
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    pub frames: u64,
}
