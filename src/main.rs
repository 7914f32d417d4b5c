use anyhow::{Context, Result};
use clap::Parser;
use greeter::{cli, logging, OutputFormatter};
use tracing::debug;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(args.verbosity());

    let greeting = args.greeting();
    debug!(
        language = greeting.language.as_str(),
        name = %greeting.name,
        format = args.format.as_str(),
        "resolved greeting"
    );

    let mut stdout = std::io::stdout().lock();
    OutputFormatter::write_to(&mut stdout, &greeting, args.format)
        .context("Failed to print greeting")?;

    Ok(())
}
