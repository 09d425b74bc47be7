//! Small helpers shared by the stream operations.

use crate::predicate::Predicate;

/// OR-combine predicates; `None` when there are none.
pub(crate) fn join_predicates<T>(predicates: &[Predicate<T>]) -> Option<Predicate<T>> {
    let (first, rest) = predicates.split_first()?;
    Some(rest.iter().fold(first.clone(), |joined, p| joined.or(p)))
}

/// Negative values clamp to zero.
pub(crate) fn non_negative(n: isize) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Resolve `slice(start, count)` arguments to a `start..end` range within `len`.
pub(crate) fn slice_bounds(len: usize, start: isize, count: isize) -> (usize, usize) {
    let start = start.max(0);
    let end = start.saturating_add(count);
    let (lo, hi) = if count < 0 { (end, start) } else { (start, end) };
    let hi = non_negative(hi).min(len);
    let lo = non_negative(lo).min(hi);
    (lo, hi)
}
