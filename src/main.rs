use clap::Parser;
use formbook::{dataset, pipeline, report};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error};

/// Find participants with multiple first-past-the-post wins
#[derive(Parser)]
#[command(name = "formbook")]
#[command(about = "Analyze historical events for multiple winners", long_about = None)]
struct Cli {
    /// Path to the newline-delimited JSON events dataset
    #[arg(default_value = dataset::DEFAULT_DATASET)]
    dataset: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(e) = analyze(&cli.dataset).await {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn analyze(path: &PathBuf) -> anyhow::Result<()> {
    // Phase barrier: the store is fully populated before the pipeline runs.
    let store = dataset::load(path).await?;

    let start = Instant::now();
    let results = pipeline::run(&store);
    debug!("pipeline finished in {} ms", start.elapsed().as_millis());

    print!("{}", report::format_results(&results));
    println!("done in {} milliseconds.", start.elapsed().as_millis());
    Ok(())
}
