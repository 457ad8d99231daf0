//! Everything needed to parse the `lox` binary's command line.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    pub verbosity: LogLevel,
}

impl Cli {
    pub fn init() -> Self {
        Cli::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a source file and print one token per line.
    Tokenize(FileArgs),
    /// Parse a source file and print its syntax tree.
    Parse(FileArgs),
    /// Parse and evaluate a single expression.
    Evaluate(FileArgs),
    /// Parse and run a full program.
    Run(FileArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FileArgs {
    /// The path to the Lox source file.
    #[arg(index = 1)]
    pub file: PathBuf,
}

/// The interpreter's log level. Only critical errors are logged by
/// default; raising this never changes the tokenize/parse/evaluate/run
/// stdout or stderr contract, since the logger writes to its own stream.
#[derive(ValueEnum, Clone, Default, Debug)]
pub enum LogLevel {
    #[default]
    #[value(alias("0"))]
    Error,
    #[value(alias("1"))]
    Warn,
    #[value(alias("2"))]
    Info,
    #[value(alias("3"))]
    Debug,
    #[value(alias("4"))]
    Trace,
}

impl From<&LogLevel> for log::Level {
    fn from(value: &LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
