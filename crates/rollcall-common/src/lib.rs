pub mod names;
pub mod roll;
pub mod stream;

pub use stream::{Stream, StreamError};
