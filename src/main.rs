use clap::Parser;
use pricesweep::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use pricesweep::adapter::inbound::cli::{check, output, scan};
use tokio::signal;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(ref args) => {
            tokio::select! {
                result = scan::execute(args) => result,
                _ = signal::ctrl_c() => {
                    output::error("Scan interrupted; no items written");
                    std::process::exit(130);
                }
            }
        }
        Commands::Check(CheckCommand::Config(ref arg)) => check::execute_config(&arg.config),
    };

    if let Err(e) = result {
        output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
