use tinylink::config::{self, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    tinylink::server::run(config).await
}

/// Initializes the tracing subscriber according to the configured
/// log level and format.
fn init_tracing(config: &Config) {
    // RUST_LOG is already folded into config.log_level with its default.
    let filter = EnvFilter::new(&config.log_level);

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
