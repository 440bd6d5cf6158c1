//! metalint CLI - quality inspection for archival and museum metadata.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(verbose: bool) {
    let default = if verbose { "metalint=debug" } else { "metalint=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect {
            file,
            standard,
            config,
            format,
            lang,
            flat,
            output,
            today,
            delimiter,
        } => commands::inspect::run(commands::inspect::InspectArgs {
            file,
            standard,
            config,
            format,
            lang,
            flat,
            output,
            today,
            delimiter,
        }),

        Commands::Config { standard, config } => commands::config::run(standard, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
