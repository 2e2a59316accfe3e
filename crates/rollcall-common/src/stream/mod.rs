//! A lazy, single-pass view over a sequence.
//!
//! Unlike a plain iterator, a [`Stream`] is operated on through `&mut self`,
//! so the handle remains usable as a name after it has been consumed. Every
//! operation on such a spent handle fails with
//! [`StreamError::AlreadyConsumed`] instead of silently yielding nothing.

mod error;


use std::fmt;

pub use self::error::{Operation, StreamError};

#[must_use = "streams are lazy and do nothing unless consumed"]
pub struct Stream<'a, T> {
    source: Option<Box<dyn Iterator<Item = T> + 'a>>,
}

impl<'a, T: 'a> Stream<'a, T> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self {
            source: Some(Box::new(items.into_iter())),
        }
    }

    /// Whether some earlier operation has taken this stream's source.
    pub fn is_spent(&self) -> bool {
        self.source.is_none()
    }

    /// Visit every element in order. Terminal.
    pub fn for_each<F>(&mut self, f: F) -> Result<(), StreamError>
    where
        F: FnMut(T),
    {
        self.take(Operation::ForEach)?.for_each(f);
        Ok(())
    }

    /// Visit every element in order, stopping at the first error returned by
    /// `f`. Terminal, even when `f` fails part way through.
    pub fn try_for_each<E, F>(&mut self, f: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<(), E>,
        E: From<StreamError>,
    {
        self.take(Operation::ForEach)?.try_for_each(f)
    }

    /// Lazily keep only the elements matching `predicate`. The returned stream
    /// is a new handle; this one is spent afterwards.
    pub fn filter<P>(&mut self, predicate: P) -> Result<Stream<'a, T>, StreamError>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        let source = self.take(Operation::Filter)?;
        Ok(Stream {
            source: Some(Box::new(source.filter(predicate))),
        })
    }

    /// Terminal.
    pub fn collect(&mut self) -> Result<Vec<T>, StreamError> {
        Ok(self.take(Operation::Collect)?.collect())
    }

    /// Terminal.
    pub fn count(&mut self) -> Result<usize, StreamError> {
        Ok(self.take(Operation::Count)?.count())
    }

    fn take(
        &mut self,
        operation: Operation,
    ) -> Result<Box<dyn Iterator<Item = T> + 'a>, StreamError> {
        match self.source.take() {
            Some(source) => {
                if operation.is_terminal() {
                    log::debug!("stream consumed by `{operation}`");
                } else {
                    log::debug!("stream linked into a new stream by `{operation}`");
                }

                Ok(source)
            }

            None => {
                log::debug!("`{operation}` attempted on a spent stream");
                Err(StreamError::AlreadyConsumed { operation })
            }
        }
    }
}

impl<T> fmt::Debug for Stream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("spent", &self.source.is_none())
            .finish_non_exhaustive()
    }
}
