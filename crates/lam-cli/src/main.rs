//! Lam CLI
//!
//! Command-line interface for the Lam expression language.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use lam_core::{eval, read, standard_primitives, Environment};

#[derive(Parser)]
#[command(name = "lam")]
#[command(author, version, about = "A tiny expression language with lexically scoped lambdas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive read-eval-print loop (the default)
    Repl,

    /// Evaluate a single expression and print its value
    Eval {
        /// The expression, e.g. "add(3, 4)"
        expr: String,

        /// Verbose mode - echo the parsed expression before evaluating
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse an expression and print the AST as JSON (for debugging)
    Parse {
        /// The expression to parse
        expr: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Repl) => cmd_repl(),
        Some(Commands::Eval { expr, verbose }) => cmd_eval(&expr, verbose),
        Some(Commands::Parse { expr }) => cmd_parse(&expr),
    }
}

fn cmd_repl() -> ExitCode {
    let env = Environment::global(standard_primitives());
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::from(2);
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("{} {}", "error:".red().bold(), e);
                return ExitCode::from(2);
            }
        }

        let input = line.trim();
        if input == "exit" || input == "quit" {
            break;
        }

        // A language error never ends the session; report it and read on.
        match read(input) {
            Ok(None) => {}
            Ok(Some(expr)) => match eval(&expr, &env) {
                Ok(value) => println!("{value}"),
                Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
            },
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
    }

    ExitCode::SUCCESS
}

fn cmd_eval(source: &str, verbose: bool) -> ExitCode {
    let expr = match read(source) {
        Ok(Some(expr)) => expr,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::from(1);
        }
    };

    if verbose {
        eprintln!("[verbose] parsed: {expr}");
    }

    let env = Environment::global(standard_primitives());
    match eval(&expr, &env) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn cmd_parse(source: &str) -> ExitCode {
    match read(source) {
        Ok(Some(expr)) => {
            println!("{}", serde_json::to_string_pretty(&expr).unwrap());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
