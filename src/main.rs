use anyhow::Result;
use batchlint::cli::{init_logging, parse_args, Cli};
use batchlint::commands::{handle_check, init_config, list_files};
use batchlint::formatting::FormattingConfig;
use batchlint::ConsoleReporter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_args();
    init_logging(cli.verbosity);
    let formatting = create_formatting_config(cli.plain);
    formatting.apply();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Single exit point for every fatal condition
            eprintln!();
            eprintln!("{} {:#}", formatting.error_label("ERROR:"), e);
            eprintln!("Exiting");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.init {
        let path = init_config(&cli.iteration_dir, cli.force)?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let options = cli.check_options();
    if cli.list {
        for file in &list_files(&options)? {
            println!("{}", file);
        }
        return Ok(());
    }

    let summary = handle_check(&options, &ConsoleReporter)?;
    log::debug!("Run finished after {} invocation(s)", summary.checked);
    Ok(())
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
