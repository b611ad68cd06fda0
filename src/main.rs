//! patch-credits' main application entry point.
//! Parses the command line, resolves the configuration and runs the generator.

use log::warn;
use patch_credits::{
    cli::{get_args, Args},
    config::Config,
    error::{default_error_handler, Result},
    generator::{generate, Outcome},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// Missing inputs are reported as warnings and leave the exit status at 0.
/// Only configuration and output errors are returned.
fn run(args: Args) -> Result<()> {
    let config = Config::resolve(&args)?;
    let renderer = MiniJinjaRenderer::new();

    match generate(&config, &renderer)? {
        Outcome::Generated { output, patches, failures } => {
            if !failures.is_empty() {
                warn!("{} patch file(s) could not be parsed and were left out", failures.len());
            }
            println!("Credits for {} patches written to '{}'.", patches, output.display());
        }
        Outcome::Skipped(reason) => warn!("{reason}"),
    }
    Ok(())
}
