use cbr_bic::{pipeline, PipelineConfig};
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = PipelineConfig::default();

    // Failures are logged and the process exits normally; no partial
    // output is emitted once a stage has failed.
    match pipeline::run(&config).await {
        Ok(records) => match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to serialize records: {e}"),
        },
        Err(e) => error!("pipeline failed: {e}"),
    }
}
