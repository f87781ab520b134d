use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symptom_infer::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "symptom_infer=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            model,
            config,
            port,
            host,
        } => {
            symptom_infer::cli::serve(model, config, port, host).await?;
        }
        Commands::Predict { model, input } => {
            symptom_infer::cli::predict(model, input).await?;
        }
        Commands::Info { model } => {
            symptom_infer::cli::info(model).await?;
        }
        Commands::Features => {
            symptom_infer::cli::features().await?;
        }
    }

    Ok(())
}
