use tracing_subscriber::EnvFilter;

mod command;
mod config;
mod fs;
mod util;

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    command::run()
}
