use clap::Parser;
use tracing_subscriber::EnvFilter;

use okra_client::ClientError;

mod commands;
mod config;
mod output;

use commands::Commands;

#[derive(Parser)]
#[command(name = "okra", version, about = "Year-scoped objective tracking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = cli.command.run().await {
        eprintln!("error: {err:#}");
        if err
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_retryable)
        {
            eprintln!("the server may be unreachable; check it is running and retry");
        }
        std::process::exit(1);
    }
}
