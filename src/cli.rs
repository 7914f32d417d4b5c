use clap::Parser;

use crate::greeting::{Greeting, DEFAULT_NAME};
use crate::logging::Verbosity;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(about = "Greeter - say hello in English, Spanish, French or Portuguese", long_about = None)]
pub struct Args {
    /// Name to greet (an empty name greets the World)
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_NAME)]
    pub name: String,

    /// Language tag: Spanish, French or Portuguese. Anything else means English.
    #[arg(short, long, value_name = "TAG", default_value = "")]
    pub language: String,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    pub fn greeting(&self) -> Greeting {
        Greeting::new(&self.name, &self.language)
    }
}
