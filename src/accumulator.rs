//! Fold steps used by [`Reducer`](crate::Reducer).

use std::fmt;
use std::sync::Arc;

type ApplyFn<T, R> = dyn Fn(&T, R) -> R + Send + Sync;

/// Combines an element into a running result. Accumulation cannot fail.
pub struct Accumulator<T, R> {
    f: Arc<ApplyFn<T, R>>,
}

impl<T, R> Accumulator<T, R> {
    /// Create an accumulator from a fold function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T, R) -> R + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Fold `v` into `acc`, returning the new running result.
    pub fn apply(&self, v: &T, acc: R) -> R {
        (self.f)(v, acc)
    }
}

impl<T, R> Clone for Accumulator<T, R> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T, R> fmt::Debug for Accumulator<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accumulator")
    }
}

impl<T, R, F> From<F> for Accumulator<T, R>
where
    F: Fn(&T, R) -> R + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        let concat = Accumulator::new(|v: &&str, acc: String| acc + *v);
        assert_eq!(concat.apply(&"b", "a".to_string()), "ab");
    }

    #[test]
    fn test_from_closure() {
        let longest: Accumulator<&str, usize> = (|v: &&str, acc: usize| acc.max(v.len())).into();
        assert_eq!(longest.apply(&"abc", 2), 3);
        assert_eq!(longest.apply(&"a", 2), 2);
    }
}
