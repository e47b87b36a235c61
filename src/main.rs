mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // stdout carries the fragment; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispatch_ops=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let registry = cli::load_registry(cli.config.as_deref())?;

    if cli.list_profiles {
        return cli::list_profiles(&registry);
    }

    cli::extract(
        &registry,
        &cli.input,
        cli.profile.as_deref(),
        &cli.format,
        cli.output.as_deref(),
    )
}
