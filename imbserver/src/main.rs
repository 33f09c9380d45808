use std::fs::File;

use imb_axum::{router, start_server};
use imb_bmrs::BmrsFetcher;
use imbserver::{AppConfig, Cli, impls::ImbalanceApp};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Events are filtered through RUST_LOG and written to stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;

    // Defaults, then the optional config file, then APP_ environment overrides
    let AppConfig { server, provider } = AppConfig::load(&cli)?;

    let fetcher = BmrsFetcher::open(&provider)?;
    let app = ImbalanceApp::new(fetcher);

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let schema = router(app).1;
        serde_json::to_writer_pretty(File::create(path)?, &schema)?;
        return Ok(());
    }

    start_server(server, app).await?;

    Ok(())
}
