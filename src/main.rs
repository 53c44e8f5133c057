// src/main.rs — cupdash entry point

use clap::Parser;

use cupdash::cli::{Cli, Commands};
use cupdash::core::InputEvent;
use cupdash::infra::config::Config;
use cupdash::infra::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    logger::init_logging(logger::level_for(cli.verbose));

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config (falls back to defaults if no config.toml)
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    cli.apply_overrides(&mut config)?;

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            cupdash::cli::serve::run_serve(&config, host, port).await
        }
        Commands::Country { name } => {
            cupdash::cli::lookup::run_lookup(&config, InputEvent::Country(name))
        }
        Commands::Year { year } => cupdash::cli::lookup::run_lookup(&config, InputEvent::Year(year)),
        Commands::Export { format, output } => {
            cupdash::cli::export::run_export(&config, &format, output.as_deref())
        }
    }
}
