//! `shl`: inspect how the incremental shell lexer sees a file.

mod commands;

use std::sync::Once;

use commands::{check_file, fold_file, lex_file, parse_options, runs_file};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return;
    }
    if !matches!(command, "lex" | "runs" | "fold" | "check") {
        eprintln!("Unknown command: {command}");
        eprintln!();
        print_usage();
        std::process::exit(1);
    }

    let invocation = match parse_options(&args[2..]) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Usage: shl {command} <file> [--props=<file>] [--keywords=<list>]");
            std::process::exit(1);
        }
    };

    match command {
        "lex" => lex_file(&invocation),
        "runs" => runs_file(&invocation),
        "fold" => fold_file(&invocation),
        _ => check_file(&invocation),
    }
}

fn print_usage() {
    println!("shl - incremental shell lexer");
    println!();
    println!("Usage: shl <command> <file> [options]");
    println!();
    println!("Commands:");
    println!("  lex      Show every line with its command state and style runs");
    println!("  runs     List style runs as byte ranges");
    println!("  fold     Show fold depth and flags per line");
    println!("  check    Report bytes styled as errors (exit code 1 if any)");
    println!();
    println!("Options:");
    println!("  --props=<file>      Read lexer properties (fold.comment, fold.compact, ...)");
    println!("  --keywords=<list>   Replace the primary keyword list");
    println!();
    println!("Set RUST_LOG=shl_lexer=debug to trace lexing passes.");
}
