//! The roll call: print everyone on the list, then try to filter and print
//! them again through the very same stream.


use std::fmt::Display;
use std::io::Write;

use anyhow::Context;

use crate::names::names;
use crate::stream::Stream;

/// The text no name on the list contains.
pub const NEEDLE: &str = "Stream API";

pub fn mentions_stream_api(name: &str) -> bool {
    name.contains(NEEDLE)
}

pub fn print_line<W: Write, T: Display>(out: &mut W, value: T) -> anyhow::Result<()> {
    writeln!(out, "{value}")?;
    Ok(())
}

/// Print every name once, then filter and print the same stream again.
///
/// The first pass spends the stream, so the filter fails with
/// [`StreamError::AlreadyConsumed`](crate::StreamError::AlreadyConsumed)
/// after the three names have been written and flushed. The second pass never
/// runs.
pub fn roll_call<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let list = names();
    let mut stream = Stream::new(list.iter());

    log::info!("printing {} names", list.len());
    print_all(out, &mut stream).context("while printing the names")?;
    out.flush()?;

    log::info!("filtering for {NEEDLE:?}");
    let _discarded = stream
        .filter(|name| mentions_stream_api(name))
        .context("while filtering the names")?;

    log::info!("printing the names again");
    print_all(out, &mut stream).context("while printing the names again")?;
    out.flush()?;

    Ok(())
}

/// Like [`roll_call`], but every step gets a stream of its own.
///
/// This is not what [`roll_call`] does: here the filtered stream is printed
/// (nothing matches, so it adds no lines) and the second unfiltered pass runs,
/// for six lines in total.
pub fn roll_call_independent<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let list = names();

    log::info!("printing {} names", list.len());
    print_all(out, &mut Stream::new(list.iter()))?;

    log::info!("printing the names matching {NEEDLE:?}");
    let mut filtered = Stream::new(list.iter()).filter(|name| mentions_stream_api(name))?;
    print_all(out, &mut filtered)?;

    log::info!("printing the names again");
    print_all(out, &mut Stream::new(list.iter()))?;
    out.flush()?;

    Ok(())
}

fn print_all<'a, W: Write, T: Display + 'a>(
    out: &mut W,
    stream: &mut Stream<'a, T>,
) -> anyhow::Result<()> {
    stream.try_for_each(|value| {
        log::trace!("printing {value}");
        print_line(&mut *out, value)
    })
}
