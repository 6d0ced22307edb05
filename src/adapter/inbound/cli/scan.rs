//! Handler for the `scan` command.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use tracing::info;

use crate::adapter::inbound::cli::command::ScanArgs;
use crate::adapter::outbound::catalog::CatalogClient;
use crate::application::scan::{InitOptions, ScanOrchestrator, ScanStrategy};
use crate::domain::Item;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute the scan command.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    if let Some(ref url) = args.api_url {
        config.catalog.api_url = url.clone();
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    config.validate()?;

    config.init_logging();

    let strategy = ScanStrategy::from(args.strategy);
    info!(
        catalog = %config.catalog.api_url,
        strategy = %strategy,
        "pricesweep starting"
    );

    let client = CatalogClient::from_config(&config.catalog)?;
    let mut orchestrator = ScanOrchestrator::new(client, config.scan.clone())?;
    orchestrator.initialize(InitOptions {
        step_size: args.step_size,
    })?;

    match strategy {
        ScanStrategy::Ascending => orchestrator.scan_ascending().await?,
        ScanStrategy::Descending => orchestrator.scan_descending().await?,
    };

    let items = orchestrator.into_items();
    write_items(&items, args.output.as_deref())?;
    info!(items = items.len(), "pricesweep finished");

    Ok(())
}

fn write_items(items: &[Item], path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer(&mut writer, items)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            serde_json::to_writer(&mut writer, items)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
