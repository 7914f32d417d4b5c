//! Greeter
//!
//! Language-specific greetings for a given name, plus the command-line
//! front end that prints them.

pub mod cli;
pub mod error;
pub mod greeting;
pub mod logging;
pub mod output;

pub use greeting::{greet, greet_in, resolve_name, Greeting, Language, DEFAULT_NAME};
pub use output::{OutputFormat, OutputFormatter};
