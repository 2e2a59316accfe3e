use std::process::ExitCode;

use clap::Parser;
use rollcall_common::stream::{Operation, StreamError};

use super::{report, run};
use crate::args::Arguments;

#[test]
fn no_arguments_parse() {
    let args = Arguments::try_parse_from(["rollcall"]).unwrap();
    assert!(args.slop.is_empty());
}

#[test]
fn any_arguments_are_ignored() {
    let args =
        Arguments::try_parse_from(["rollcall", "--help", "-V", "--version", "names.txt"]).unwrap();

    let expected = ["--help", "-V", "--version", "names.txt"];
    assert_eq!(expected.len(), args.slop.len());
    for (arg, expected) in args.slop.iter().zip(expected) {
        assert_eq!(arg, expected);
    }
}

#[test]
fn report_prints_whole_chain() {
    console::set_colors_enabled_stderr(false);
    console::set_colors_enabled(false);

    let error = anyhow::Error::new(StreamError::AlreadyConsumed {
        operation: Operation::Filter,
    })
    .context("while filtering the names");

    let mut out = Vec::new();
    report(&mut out, &error).unwrap();

    assert_eq!(
        "error: while filtering the names: stream has already been operated upon or closed (filter)\n",
        String::from_utf8(out).unwrap()
    );
}

fn run_with(argv: &[&str]) -> (ExitCode, String, String) {
    console::set_colors_enabled_stderr(false);
    console::set_colors_enabled(false);

    let args = Arguments::try_parse_from(argv.iter().copied()).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(&args, &mut out, &mut err);

    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn run_prints_three_names_then_fails() {
    let (code, out, err) = run_with(&["rollcall", "--help", "x"]);

    assert_eq!(ExitCode::FAILURE, code);
    assert_eq!("Рома\nИгорь\nВася\n", out);
    assert_eq!(
        "error: while filtering the names: stream has already been operated upon or closed (filter)\n",
        err
    );
}

#[test]
fn run_ignores_arguments() {
    let expected = run_with(&["rollcall"]);

    for argv in [
        &["rollcall", "-h"][..],
        &["rollcall", "-V", "x", "--", "--foo"][..],
        &["rollcall", "--version"][..],
    ] {
        assert_eq!(expected, run_with(argv));
    }
}
