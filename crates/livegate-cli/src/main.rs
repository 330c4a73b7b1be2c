use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod score;
mod setup;

#[derive(Parser)]
#[command(
    name = "livegate",
    version,
    about = "Face liveness gating — model setup and diagnostics"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and verify the liveness model
    Setup {
        /// Target directory for model files
        #[arg(long)]
        model_dir: Option<String>,
    },
    /// Run the liveness classifier over a still image and print the decision
    Score {
        /// Path to the image file
        image: String,
        /// Path to the liveness model (defaults to the model directory)
        #[arg(long)]
        model: Option<String>,
        /// Minimum live-class probability for a LIVE decision
        #[arg(long)]
        threshold: Option<f32>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Setup { model_dir } => setup::run(model_dir),
        Commands::Score {
            image,
            model,
            threshold,
            json,
        } => score::run(&image, model, threshold, json),
    }
}
