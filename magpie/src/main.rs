use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magpie::{ExtractionConfig, ExtractionPipeline};

#[derive(Parser)]
#[command(name = "magpie")]
#[command(about = "Resilient text extraction for uploaded resume PDFs")]
struct Args {
    /// Document to extract text from
    file: PathBuf,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "magpie=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ExtractionConfig::from_env();
    let pipeline = ExtractionPipeline::new(config);

    let result = pipeline.extract_path(&args.file).await?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}
