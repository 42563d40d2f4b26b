use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker_rs::config::{Config, OutputFormat};
use workout_tracker_rs::error::AppError;
use workout_tracker_rs::pipeline::{self, report};
use workout_tracker_rs::types::package::Package;

fn main() {
    let config = Config::from_env();

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&config) {
        tracing::error!("Aborting: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let summaries = pipeline::process_batch(&Package::samples())?;

    for summary in &summaries {
        let line = match config.output {
            OutputFormat::Text => report::message(summary),
            OutputFormat::Json => report::to_json(summary)?,
        };
        println!("{}", line);
    }
    Ok(())
}
