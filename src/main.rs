#![warn(missing_debug_implementations)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use strawberry_fields::error::CliError;
use strawberry_fields::io::{input, output};
use strawberry_fields::solver;

/// Solves the Strawberry Fields greenhouse covering problem for every
/// puzzle in the input file, writing the covering(s) to the output file.
#[derive(Parser, Debug)]
#[command(name = "strawberry-fields", version, about)]
struct Cli {
    /// input puzzle file (overrides --file if given)
    #[arg(value_name = "PATH")]
    path: Option<String>,

    /// input puzzle file
    #[arg(short = 'f', long = "file", default_value = "strawberries.txt")]
    file: String,

    /// output file for the computed covering(s)
    #[arg(short = 'o', long = "output", default_value = "optimal_covering.txt")]
    output: String,

    /// suppress the per-puzzle timing line
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input_path = cli.path.unwrap_or(cli.file);

    let text = std::fs::read_to_string(&input_path).map_err(CliError::InputIo)?;
    let puzzles = input::parse_puzzles(&text)?;

    let mut solved = Vec::with_capacity(puzzles.len());
    for puzzle in puzzles {
        let time_init = Instant::now();
        let result = solver::solve(puzzle.k, puzzle.grid);
        if !cli.quiet {
            println!(
                "solved puzzle in {:.3} seconds. Cardinality: {}, Cost: {}",
                time_init.elapsed().as_secs_f32(),
                result.labels.len(),
                result.total_cost,
            );
        }
        solved.push(result);
    }

    let rendered = output::render_all(&solved);
    std::fs::write(&cli.output, rendered).map_err(CliError::OutputIo)?;
    Ok(())
}

/// Parses CLI arguments from any iterator, mapping an unrecognized flag or
/// bad option value into `CliError::InvalidOption`. Split out from `main`
/// so the mapping is directly testable.
fn try_parse_cli<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| CliError::InvalidOption(err.to_string()))
}

pub fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.exit_code() == 0 => {
            // --help / --version: clap already formatted the message.
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let cli_err = CliError::InvalidOption(err.to_string());
            eprintln!("error: {cli_err}");
            return ExitCode::from(cli_err.exit_code() as u8);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
