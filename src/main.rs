use gallery_stats::{Settings, StatsResult, app::RunSummary};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match generate().await {
        Ok(summary) => {
            info!(
                "processed {} galleries into {}",
                summary.gallery_count,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("error generating stats: {err}");
            eprintln!("error generating stats: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn generate() -> StatsResult<RunSummary> {
    let settings = Settings::from_env()?;
    gallery_stats::run(&settings).await
}
