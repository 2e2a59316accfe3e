use std::error::Error;
use std::fmt::{self, Display};

/// The operations a [`Stream`](super::Stream) supports, as named in errors
/// and logs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    ForEach,
    Filter,
    Collect,
    Count,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ForEach => "for_each",
            Self::Filter => "filter",
            Self::Collect => "collect",
            Self::Count => "count",
        }
    }

    /// Terminal operations force evaluation of the stream. The others only
    /// wrap it in a new one.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Filter)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StreamError {
    /// An operation was attempted on a stream whose source was already
    /// handed off to an earlier operation.
    AlreadyConsumed { operation: Operation },
}

impl Error for StreamError {}
impl Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyConsumed { operation } => write!(
                f,
                "stream has already been operated upon or closed ({operation})"
            ),
        }
    }
}
