//! Lox command-line interface.

use loxc::commands::{lex_file, parse_file, run_file, run_prompt};
use loxc::{exit, init_tracing, parse_args, CliError, Command, RunOutcome};

fn main() {
    init_tracing();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: lox [script] | lox <run|lex|parse> <file> | lox repl");
            std::process::exit(err.exit_code());
        }
    };

    let result: Result<RunOutcome, CliError> = match &options.command {
        Command::Help => {
            print_usage();
            Ok(RunOutcome::Success)
        }
        Command::Repl => run_prompt(options.color).map(|()| RunOutcome::Success),
        Command::Run(path) => run_file(path, options.color),
        Command::Lex(path) => lex_file(path, options.color),
        Command::Parse(path) => parse_file(path, options.color),
    };

    match result {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn print_usage() {
    println!("Lox interpreter");
    println!();
    println!("Usage:");
    println!("  lox                  Start the interactive prompt");
    println!("  lox <file>           Run a script");
    println!("  lox run <file>       Run a script");
    println!("  lox repl             Start the interactive prompt");
    println!("  lox lex <file>       Print the token stream");
    println!("  lox parse <file>     Print the parsed statements");
    println!();
    println!("Options:");
    println!("  --color=<mode>       auto, always or never (default: auto)");
    println!("  -h, --help           Show this message");
    println!();
    println!("Exit status:");
    println!("  {}   success", exit::SUCCESS);
    println!("  {}  usage error", exit::USAGE);
    println!("  {}  lexical or parse error", exit::DATA_ERR);
    println!("  {}  input file unreadable", exit::NO_INPUT);
    println!("  {}  runtime error", exit::SOFTWARE);
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to enable tracing on stderr.");
}
