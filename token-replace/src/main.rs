use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use token_replace::{Error, ReplaceOrder, SubstitutionMap, replace_in_file};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "token-replace", version)]
#[command(about = "Replace literal tokens in a file with the given values")]
struct Args {
    /// File in which tokens are replaced
    file: PathBuf,

    /// Replacements such as PATH_TO_FILE=/real/path or GREETING="some value".
    /// Tokens may start with '-'; options must come before FILE.
    #[arg(
        value_name = "TOKEN=VALUE",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true
    )]
    substitutions: Vec<String>,

    /// Apply longer tokens before shorter ones instead of argument order
    #[arg(long)]
    longest_first: bool,
}

fn run(args: &Args) -> Result<(), Error> {
    let order = if args.longest_first {
        ReplaceOrder::LongestFirst
    } else {
        ReplaceOrder::Arguments
    };
    let map = SubstitutionMap::from_args(&args.substitutions)?;
    let map = map.ordered(order);
    debug!(substitutions = map.len(), ?order, "parsed substitutions");

    replace_in_file(&args.file, &map)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument => {
                println!("{}", Args::command().render_usage());
                return ExitCode::FAILURE;
            }
            _ => {
                let _ = e.print();
                return ExitCode::FAILURE;
            }
        },
    };

    token_replace::logging::init_tracing();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
