//! Command-line parsing for the `lox` binary.

use lox_diagnostic::ColorMode;

use crate::CliError;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive prompt.
    Repl,
    /// Execute a script.
    Run(String),
    /// Dump the token stream of a script.
    Lex(String),
    /// Dump the statements parsed from a script.
    Parse(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub command: Command,
    pub color: ColorMode,
}

/// Parse arguments, excluding the program name.
///
/// `lox` alone starts the REPL and `lox <file>` runs a file; the explicit
/// subcommands are `run`, `repl`, `lex` and `parse`. `--color=` may appear
/// anywhere.
pub fn parse_args<I>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut color = ColorMode::Auto;
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::parse(value).ok_or_else(|| {
                CliError::Usage(format!(
                    "invalid --color value '{value}' (expected auto, always or never)"
                ))
            })?;
        } else if arg == "-h" || arg == "--help" {
            return Ok(CliOptions {
                command: Command::Help,
                color,
            });
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let command = match (positional.next(), positional.next()) {
        (None, _) => Command::Repl,
        (Some(cmd), None) if cmd == "repl" => Command::Repl,
        (Some(cmd), None) if cmd == "help" => Command::Help,
        (Some(cmd), file) if matches!(cmd.as_str(), "run" | "lex" | "parse") => {
            let Some(file) = file else {
                return Err(CliError::Usage(format!("'{cmd}' needs a file path")));
            };
            match cmd.as_str() {
                "lex" => Command::Lex(file),
                "parse" => Command::Parse(file),
                _ => Command::Run(file),
            }
        }
        (Some(file), None) => Command::Run(file),
        (Some(_), Some(extra)) => {
            return Err(CliError::Usage(format!("unexpected argument '{extra}'")));
        }
    };

    if let Some(extra) = positional.next() {
        return Err(CliError::Usage(format!("unexpected argument '{extra}'")));
    }

    Ok(CliOptions { command, color })
}
