//! CLI commands

mod features;
mod info;
mod predict;
mod serve;

pub use features::features;
pub use info::info;
pub use predict::predict;
pub use serve::serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// symptom-infer - COVID-19 symptom classifier inference server
#[derive(Parser)]
#[command(name = "symptom-infer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start inference server
    Serve {
        /// Model file or directory. Precedence: this flag, then $SYMPTOM_MODEL_PATH,
        /// then model.path from --config, then ./model.onnx
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// YAML or JSON config file. Its model.path is used only when neither
        /// --model nor $SYMPTOM_MODEL_PATH is set
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Run a single prediction and print the response JSON
    Predict {
        /// Model file or directory (defaults to $SYMPTOM_MODEL_PATH, then ./model.onnx)
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// Payload JSON file (reads stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
    },

    /// Show model information
    Info {
        /// Model file or directory (defaults to $SYMPTOM_MODEL_PATH, then ./model.onnx)
        #[arg(long, short)]
        model: Option<PathBuf>,
    },

    /// Print the feature schema in model column order
    Features,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "symptom-infer",
            "serve",
            "--model",
            "models/covid.onnx",
            "--port",
            "8080",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                model,
                config,
                port,
                host,
            } => {
                assert_eq!(model, Some(PathBuf::from("models/covid.onnx")));
                assert_eq!(port, Some(8080));
                assert!(host.is_none());
                assert!(config.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_features() {
        let cli = Cli::try_parse_from(["symptom-infer", "features"]).unwrap();
        assert!(matches!(cli.command, Commands::Features));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
