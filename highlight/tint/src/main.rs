//! tint CLI
//!
//! Prints the style runs or fold records a lexer produces for a file.

mod commands;
mod error;
mod language;

use commands::{fold_file, lex_file};
use error::CliError;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => lex_file(&args[2..]),
        "fold" => fold_file(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("tint {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::UnknownCommand(command.clone())),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if err.is_usage() {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

/// Install a `fmt` subscriber filtered by `RUST_LOG`, only when it is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_usage() {
    println!("tint: syntax highlighting and folding inspector");
    println!();
    println!("Usage: tint <command> <file> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>          Print style runs: byte range, style, text");
    println!("  fold <file>         Print fold records: line, depths, header mark");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Options:");
    println!("  --lang=<name>       java or vim (default: from the file name)");
    println!();
    println!("Files ending in .java, .bsh or .aidl are Java; .vim files and");
    println!("vimrc, _vimrc, .vimrc are Vim script.");
    println!();
    println!("Set RUST_LOG=tint_lexers=debug to trace lexer passes.");
}
