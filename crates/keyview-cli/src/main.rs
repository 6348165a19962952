//! keyview - command-line entry point
//!
//! Logs go to stderr so that stdout carries only the rendered key.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keyview_cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keyview_cli=warn,keyview_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let rendered = keyview_cli::run(&cli)?;
    println!("{}", rendered);
    Ok(())
}
