//! Bulk conversion of a stream into a stream of another element type.

use tracing::debug;

use crate::converter::Converter;
use crate::error::StreamResult;
use crate::storage::OwnedStream;
use crate::stream::Stream;

/// Applies a [`Converter`] to every element of a stream.
///
/// # Example
///
/// ```rust
/// use streamable::{of, Converter, Mapper, Stream, StreamError};
///
/// let parse = Mapper::new(Converter::new(|v: &&str| {
///     v.parse::<i32>().map_err(|e| StreamError::conversion(e.to_string()))
/// }));
///
/// let numbers = parse.map(&of(["1", "2", "3"])).unwrap();
/// assert_eq!(numbers.to_vec(), vec![1, 2, 3]);
///
/// assert!(parse.map(&of(["1", "two"])).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Mapper<T, R> {
    converter: Converter<T, R>,
}

impl<T: Clone, R> Mapper<T, R> {
    /// Create a mapper that uses `converter`.
    pub fn new(converter: Converter<T, R>) -> Self {
        Self { converter }
    }

    /// Convert every element of `input`, in order.
    ///
    /// The first conversion failure aborts the mapping and is returned;
    /// no partial output is produced.
    pub fn map(&self, input: &dyn Stream<T>) -> StreamResult<OwnedStream<R>> {
        let elements = input.elements();
        let mut out = Vec::with_capacity(elements.len());
        for (index, v) in elements.iter().enumerate() {
            match self.converter.convert(v) {
                Ok(converted) => out.push(converted),
                Err(err) => {
                    debug!(index, error = %err, "conversion failed; map aborted");
                    return Err(err);
                }
            }
        }
        Ok(OwnedStream::new(out))
    }
}
