use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use neurogenesis_cli::{
    cli::{Cli, Commands},
    commands, config,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries command output only
    let env_filter = match cli.requested_log_level() {
        Some(level) => EnvFilter::default().add_directive(level.into()),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::CliConfig::load(cli.config, cli.notes_dir)?;

    match cli.command {
        Commands::New { title } => commands::new::execute(&config, title)?,
        Commands::Refresh => commands::refresh::execute(&config)?,
        Commands::GetNodes => commands::get_nodes::execute(&config)?,
        Commands::Config => commands::config::execute(&config)?,
    }

    Ok(())
}
