use std::{fs, io, process::ExitCode};

use clap::{ArgAction, Parser};
use minipy::{interpreter::lexer::tokenize, parse_program, run};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive, e.g. `minipy=debug`.
const LOG_ENV: &str = "MINIPY_LOG";

/// minipy runs tiny Python-flavoured integer scripts made of `print(...)`
/// calls and `name = expr` assignments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minipy to read `contents` as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Print the tokens of every line instead of running the script.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed program in canonical form instead of running it.
    #[arg(long)]
    ast: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let outcome = if args.tokens {
        dump_tokens(&script)
    } else if args.ast {
        parse_program(&script).map(|program| print!("{program}"))
    } else {
        run_script(&script)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "script failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run_script(script: &str) -> Result<(), minipy::Error> {
    info!(bytes = script.len(), "running script");
    let env = run(script, &mut io::stdout().lock())?;
    info!(variables = env.len(), "script finished");
    Ok(())
}

fn dump_tokens(script: &str) -> Result<(), minipy::Error> {
    for (index, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let tokens = tokenize(line).map_err(|source| minipy::Error::Lex { line: index + 1,
                                                                          source })?;
        let rendered = tokens.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("{}: {}", index + 1, rendered.join(" "));
    }
    Ok(())
}

/// Logs go to stderr so program output on stdout stays clean.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
}
