//! fibseq — interactive Fibonacci sequence generator.

use anyhow::Result;
use fibseq_lib::{app, config};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only program output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    app::run(&config)
}
