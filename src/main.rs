mod app;

use clap::{CommandFactory, Parser};
use env_logger::{Env, Target};
use std::process::ExitCode;
use std::time::Instant;

use app::cli::Cli;
use app::error::BundleError;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "file_bundle=debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let started = Instant::now();
    let args = Cli::parse();
    init_logging(args.verbose);

    match app::run(args, started) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Fatal errors bypass the logger so RUST_LOG can't hide them.
            match err.downcast_ref::<BundleError>() {
                Some(bundle_err) => {
                    println!("Error: {}", bundle_err);
                    if bundle_err.wants_usage() {
                        println!();
                        if let Err(help_err) = Cli::command().print_help() {
                            log::warn!("Could not print usage: {}", help_err);
                        }
                    }
                }
                None => println!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
