use tracing::error;
use zerospam_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;

    // Logging is not up yet, so report straight to stderr as well.
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    Ok(config)
}
