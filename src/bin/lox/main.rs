//! # Lox
//!
//! The `lox` binary exposes the crate's tokenizer, parser and evaluator
//! as four subcommands: `tokenize`, `parse`, `evaluate` and `run`.

mod cli;

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use cli::{Cli, Command, FileArgs};
use log::{debug, error};

use lox::{evaluate, parse_expression, printer::AstPrinter, run, tokenize, EvalError};

/// `sysexits.h`-style exit codes: 65 (`EX_DATAERR`) for lexical/syntax
/// errors, 70 (`EX_SOFTWARE`) for runtime errors, 74 (`EX_IOERR`) when the
/// source file itself could not be read.
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;
const EX_IOERR: u8 = 74;

fn main() -> ExitCode {
    let args = Cli::init();
    simple_logger::init_with_level((&args.verbosity).into())
        .expect("the logger is only ever initialized once, at startup");

    match args.command {
        Command::Tokenize(file_args) => tokenize_command(file_args),
        Command::Parse(file_args) => parse_command(file_args),
        Command::Evaluate(file_args) => evaluate_command(file_args),
        Command::Run(file_args) => run_command(file_args),
    }
}

fn open(file_args: &FileArgs) -> File {
    File::open(&file_args.file).unwrap_or_else(|e| {
        error!("Failed to read file '{}': {e}", file_args.file.display());
        std::process::exit(EX_IOERR as i32);
    })
}

fn io_fatal<T>(e: io::Error) -> T {
    error!("{e}");
    std::process::exit(EX_IOERR as i32);
}

fn tokenize_command(file_args: FileArgs) -> ExitCode {
    let file = open(&file_args);
    let (tokens, errors) = tokenize(file).unwrap_or_else(io_fatal);

    for token in &tokens {
        println!("{token}");
    }
    for error in &errors {
        eprintln!("{error}");
    }

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EX_DATAERR)
    }
}

fn parse_command(file_args: FileArgs) -> ExitCode {
    let file = open(&file_args);
    match parse_expression(file).unwrap_or_else(io_fatal) {
        Ok(expr) => {
            debug!("parsed {:#?}", expr);
            print!("{}", AstPrinter::print_expr(&expr));
            ExitCode::SUCCESS
        }
        Err(syntax_error) => {
            eprintln!("{syntax_error}");
            ExitCode::from(EX_DATAERR)
        }
    }
}

fn evaluate_command(file_args: FileArgs) -> ExitCode {
    let file = open(&file_args);
    match evaluate(file).unwrap_or_else(io_fatal) {
        Ok(value) => {
            print!("{}", value.display());
            ExitCode::SUCCESS
        }
        Err(EvalError::Syntax(e)) => {
            eprintln!("{e}");
            ExitCode::from(EX_DATAERR)
        }
        Err(EvalError::Runtime(e)) => {
            eprintln!("{e}");
            ExitCode::from(EX_SOFTWARE)
        }
    }
}

fn run_command(file_args: FileArgs) -> ExitCode {
    let file = open(&file_args);
    let mut output = Vec::new();
    let result = run(file, &mut output).unwrap_or_else(io_fatal);

    io::stdout()
        .write_all(&output)
        .expect("writing to stdout should not fail");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(EvalError::Syntax(e)) => {
            eprintln!("{e}");
            ExitCode::from(EX_DATAERR)
        }
        Err(EvalError::Runtime(e)) => {
            eprintln!("{e}");
            ExitCode::from(EX_SOFTWARE)
        }
    }
}
