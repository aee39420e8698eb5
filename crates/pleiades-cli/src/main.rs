//! CLI entry point - the composition root.
//!
//! Parses arguments, builds the index via bootstrap and dispatches to a
//! handler. Errors are printed to stderr and mapped to an exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use pleiades_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_logging};

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Get { pid } => handlers::get::execute(&ctx, &pid, &mut out)?,
        Commands::Path { pid } => handlers::path::execute(&ctx, &pid, &mut out)?,
        Commands::List => handlers::list::execute(&ctx, &mut out)?,
        Commands::Count => handlers::count::execute(&ctx, &mut out)?,
        Commands::Verify => handlers::verify::execute(&ctx, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // Load environment variables (PLEIADES_ROOT, PLEIADES_CATALOG, RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
