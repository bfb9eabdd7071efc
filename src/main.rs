use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod report;
mod settings;
mod transport;

#[cfg(test)]
mod test_utils;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = settings::load_settings(cli.config.as_deref())?.with_endpoint(cli.endpoint.clone());

    init_tracing(&settings.log_level);
    tracing::debug!("Settings: {:?}", settings);

    cli.run(settings).await?;

    Ok(())
}

/// Logs go to stderr so that command output on stdout stays clean.
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
