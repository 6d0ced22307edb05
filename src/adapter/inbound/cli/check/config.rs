use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate configuration file without scanning.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Catalog", &config.catalog.api_url);
    output::field("Products", &config.catalog.products_path);
    output::field("Timeout", format!("{}ms", config.catalog.timeout_ms));
    output::field("Retries", config.catalog.retry_max_attempts);
    output::field("Step size", config.scan.step_size);
    output::field(
        "Domain",
        format!("[{}, {}]", config.scan.domain_min, config.scan.domain_max),
    );
    output::field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );

    output::success("Configuration check complete");

    Ok(())
}
