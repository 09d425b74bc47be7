//! Per-element conversion from one value type to another.

use std::fmt;
use std::sync::Arc;

use crate::error::StreamResult;

type ConvertFn<T, R> = dyn Fn(&T) -> StreamResult<R> + Send + Sync;

/// A pure conversion of a `T` into an `R` that may fail.
///
/// Used by [`Mapper`](crate::Mapper); a failure for any element aborts the
/// whole mapping.
pub struct Converter<T, R> {
    f: Arc<ConvertFn<T, R>>,
}

impl<T, R> Converter<T, R> {
    /// Create a converter from a conversion function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> StreamResult<R> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Convert a single value.
    pub fn convert(&self, v: &T) -> StreamResult<R> {
        (self.f)(v)
    }
}

impl<T, R> Clone for Converter<T, R> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T, R> fmt::Debug for Converter<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Converter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;

    #[test]
    fn test_convert() {
        let parse = Converter::new(|v: &&str| {
            v.parse::<i32>()
                .map_err(|e| StreamError::conversion(e.to_string()))
        });
        assert_eq!(parse.convert(&"42"), Ok(42));
        assert!(matches!(
            parse.convert(&"x"),
            Err(StreamError::Conversion(_))
        ));
    }
}
