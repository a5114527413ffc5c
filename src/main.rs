//! yamljson: JSON/YAML Conversion CLI Tool
//!
//! Converts a file between JSON and YAML:
//! `yamljson --from:<json|yaml> --in:<path> --out:<path>`

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;

use yamljson::cli::{dispatch, Cli, Route};
use yamljson::convert::{convert, ConvertError};
use yamljson::utils::{print_help, print_success};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let switches = cli.switch_map();
    let version = env!("CARGO_PKG_VERSION");

    let request = match dispatch(&switches) {
        Route::Convert(request) => request,
        Route::Help => {
            debug!("Showing help for switches {:?}", switches.names());
            print_help(version);
            return Ok(());
        }
    };

    match convert(&request) {
        Ok(report) => {
            print_success(&format!(
                "Wrote {} bytes to {}",
                report.bytes_written,
                report.output.display()
            ));
            Ok(())
        }
        Err(err @ ConvertError::UnrecognizedFormat { .. }) => {
            print_help(version);
            Err(err.into())
        }
        Err(err) => Err(err).with_context(|| {
            format!(
                "Conversion of {} to {} failed",
                request.input.display(),
                request.output.display()
            )
        }),
    }
}
