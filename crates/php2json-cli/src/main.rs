use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use php2json::{convert, Outcome};

/// Converts a PHP source file into a JSON syntax tree written next to it,
/// with the extension replaced by `.json`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// PHP file to convert. With no file given the program exits silently.
    file: Option<PathBuf>,

    /// Exit non-zero and report each failed parse attempt when no strategy
    /// accepts the input, instead of the fixed line and a success exit.
    #[arg(long)]
    strict: bool,

    /// Suppress the diagnostic printed when every strategy fails.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let Some(file) = args.file else {
        return Ok(ExitCode::SUCCESS);
    };

    match convert(&file).into_diagnostic()? {
        Outcome::Written { .. } => Ok(ExitCode::SUCCESS),
        Outcome::Unparsable { failures } => {
            if args.strict {
                if !args.quiet {
                    for failure in &failures {
                        eprintln!("{}: {failure}", file.display());
                    }
                }
                Ok(ExitCode::FAILURE)
            } else {
                if !args.quiet {
                    println!("nothing parses this");
                }
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
