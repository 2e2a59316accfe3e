use std::ffi::OsString;

use clap::Parser;

/// Call out the names on the list.
///
/// The program takes no options. Anything passed on the command line is
/// accepted and ignored.
#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Arguments {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub slop: Vec<OsString>,
}
