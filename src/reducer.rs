//! Folding a stream into a single result.

use crate::accumulator::Accumulator;
use crate::stream::Stream;

/// Applies an [`Accumulator`] across a stream, left to right.
///
/// # Example
///
/// ```rust
/// use streamable::{of, Accumulator, Reducer};
///
/// let sum = Reducer::new(Accumulator::new(|v: &i32, acc: i64| acc + i64::from(*v)));
/// assert_eq!(sum.reduce(&of([1, 2, 3])), 6);
/// assert_eq!(sum.reduce(&of(Vec::<i32>::new())), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Reducer<T, R> {
    accumulator: Accumulator<T, R>,
}

impl<T: Clone, R> Reducer<T, R> {
    /// Create a reducer that uses `accumulator`.
    pub fn new(accumulator: Accumulator<T, R>) -> Self {
        Self { accumulator }
    }

    /// Fold `input` starting from `R::default()`.
    pub fn reduce(&self, input: &dyn Stream<T>) -> R
    where
        R: Default,
    {
        self.reduce_from(input, R::default())
    }

    /// Fold `input` starting from `initial`.
    pub fn reduce_from(&self, input: &dyn Stream<T>, initial: R) -> R {
        input
            .elements()
            .iter()
            .fold(initial, |acc, v| self.accumulator.apply(v, acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::of;

    #[test]
    fn test_reduce() {
        let joined = Reducer::new(Accumulator::new(|v: &&str, acc: String| acc + *v));
        assert_eq!(joined.reduce(&of(["a", "b", "c"])), "abc");
    }

    #[test]
    fn test_reduce_from() {
        let product = Reducer::new(Accumulator::new(|v: &u32, acc: u32| acc * v));
        assert_eq!(product.reduce_from(&of([2, 3, 4]), 1), 24);
        assert_eq!(product.reduce(&of([2, 3, 4])), 0);
    }
}
