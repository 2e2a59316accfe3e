#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::process::ExitCode;

use console::style;
use log::LevelFilter;
use rollcall_common::roll::roll_call;

use crate::args::Arguments;

/// Run the roll call, writing the names to `out` and any failure to `err`.
pub fn run<W: Write, E: Write>(args: &Arguments, out: &mut W, err: &mut E) -> ExitCode {
    if !args.slop.is_empty() {
        log::debug!("ignoring {} argument(s)", args.slop.len());
    }

    match roll_call(out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if let Err(write_error) = report(err, &error) {
                log::error!("could not report the failure: {write_error}");
            }

            ExitCode::FAILURE
        }
    }
}

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}

/// Write a failed run's error chain to `out`.
pub fn report<W: Write>(out: &mut W, error: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "{}: {error:#}", style("error").for_stderr().red().bold())
}
