use color_eyre::eyre::Result;

/// Logs to stderr. `RUST_LOG` takes precedence over the given default directive.
pub fn setup_logging(default_directive: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_directive.parse()?)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
