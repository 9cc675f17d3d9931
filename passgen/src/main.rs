use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use passgen::{Alphabet, Error, generate_password, parse_length};

#[derive(Parser, Debug)]
#[command(name = "passgen", version)]
#[command(about = "Generate a cryptographically secure random password")]
struct Args {
    /// Length of the generated password
    #[arg(
        value_name = "passwordLength",
        allow_negative_numbers = true,
        value_parser = length_arg
    )]
    length: usize,

    /// Add 18 special characters to the alphanumeric alphabet
    #[arg(short, long)]
    extended: bool,

    /// Number of passwords to generate, one per line
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    count: u32,
}

fn length_arg(s: &str) -> Result<usize, String> {
    parse_length(s).map_err(|e| e.to_string())
}

fn run(args: &Args) -> Result<(), Error> {
    let alphabet = Alphabet::from_extended(args.extended);

    let mut out = io::stdout().lock();
    for _ in 0..args.count {
        let password = generate_password(args.length, alphabet)?;
        writeln!(out, "{password}")?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Usage errors go to stderr with exit code 1, not clap's default of 2.
                let _ = e.print();
                return ExitCode::FAILURE;
            }
        },
    };

    passgen::logging::init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
