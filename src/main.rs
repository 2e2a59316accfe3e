mod args;
mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::args::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();
    cli::init_logger();

    let stdout = io::stdout();
    cli::run(&args, &mut stdout.lock(), &mut io::stderr())
}
