//! The stream abstraction.
//!
//! A [`Stream`] is an ordered, finite, immutable view over elements of one
//! type. Every storage variant only has to expose its current elements
//! through [`Stream::elements`]; the query, transformation and set
//! operations are provided on top of that and always return a fresh
//! [`OwnedStream`], leaving the source untouched.
//!
//! Operations that take an `Option<&Predicate<T>>` or
//! `Option<&Comparator<T>>` treat `None` as a policy, never as an error:
//!
//! | Operation | `None` | Empty stream |
//! |---|---|---|
//! | `all_match` | `false` | `false` |
//! | `any_match` / `none_match` | `false` / `true` | `false` / `true` |
//! | `filter` | keeps every element | |
//! | `first_match` / `last_match` | first / last element | `None` |
//! | `count` | counts every element | |
//! | `has` | `false` | |
//! | `max` / `min` / `min_max` | `None` | `None` |
//! | `sorted` | original order | |
//! | set operations | empty stream | |

use std::cell::Ref;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::comparator::Comparator;
use crate::consumer::Consumer;
use crate::error::StreamResult;
use crate::identity::Identity;
use crate::predicate::Predicate;
use crate::storage::{OwnedStream, SharedStream, SliceStream};
use crate::util::{join_predicates, non_negative, slice_bounds};

/// Read access to the elements currently backing a stream.
pub enum Elements<'a, T> {
    /// Elements borrowed from a slice or an owned vector
    Borrowed(&'a [T]),
    /// Elements behind a live `RefCell` borrow
    Shared(Ref<'a, Vec<T>>),
    /// Elements materialised by the stream implementation
    Collected(Vec<T>),
}

impl<T> Deref for Elements<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Elements::Borrowed(elements) => *elements,
            Elements::Shared(elements) => elements.as_slice(),
            Elements::Collected(elements) => elements.as_slice(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

fn collect_where<T: Clone>(elements: &[T], keep: impl Fn(&T) -> bool) -> OwnedStream<T> {
    elements.iter().filter(|v| keep(*v)).cloned().collect()
}

/// An ordered, finite, immutable sequence of elements.
///
/// Implementors provide [`elements`](Stream::elements); every other
/// operation has a default built on it. All operations leave `self`
/// unchanged.
///
/// # Example
///
/// ```rust
/// use streamable::prelude::*;
///
/// let letters = of(["d", "j", "f", "g", "h", "i", "e", "a", "b", "c"]);
/// let sorted = letters.sorted(Some(&*STR_COMPARATOR));
///
/// assert_eq!(sorted.first_match(None), Some("a"));
/// assert_eq!(letters.first_match(None), Some("d"));
/// ```
pub trait Stream<T: Clone> {
    /// The elements currently backing this stream.
    fn elements(&self) -> Elements<'_, T>;

    /// Number of elements in this stream.
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Whether this stream has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the elements of this stream into a vector.
    fn to_vec(&self) -> Vec<T> {
        self.elements().to_vec()
    }

    /// Whether every element matches `p`.
    ///
    /// Always false when `p` is `None` or the stream is empty.
    fn all_match(&self, p: Option<&Predicate<T>>) -> bool {
        let Some(p) = p else {
            return false;
        };
        let elements = self.elements();
        !elements.is_empty() && elements.iter().all(|v| p.test(v))
    }

    /// Whether any element matches `p`.
    ///
    /// Always false when `p` is `None` or the stream is empty.
    fn any_match(&self, p: Option<&Predicate<T>>) -> bool {
        p.is_some_and(|p| self.elements().iter().any(|v| p.test(v)))
    }

    /// Whether no element matches `p`.
    ///
    /// Always true when `p` is `None` or the stream is empty.
    fn none_match(&self, p: Option<&Predicate<T>>) -> bool {
        !self.any_match(p)
    }

    /// A new stream of this stream's elements followed by `items`.
    fn append(&self, items: &[T]) -> OwnedStream<T> {
        self.elements().iter().chain(items).cloned().collect()
    }

    /// A new stream of this stream's elements followed by `other`'s.
    fn concat(&self, other: &dyn Stream<T>) -> OwnedStream<T> {
        let elements = self.elements();
        let added = other.elements();
        let mut out = Vec::with_capacity(elements.len() + added.len());
        out.extend_from_slice(&elements);
        out.extend_from_slice(&added);
        OwnedStream::new(out)
    }

    /// Number of elements matching `p`, or of all elements when `p` is `None`.
    fn count(&self, p: Option<&Predicate<T>>) -> usize {
        match p {
            Some(p) => self.elements().iter().filter(|v| p.test(v)).count(),
            None => self.len(),
        }
    }

    /// Elements of this stream that `other` does not have under `c`.
    ///
    /// Empty when `c` is `None`.
    fn difference(&self, other: &dyn Stream<T>, c: Option<&Comparator<T>>) -> OwnedStream<T> {
        let Some(c) = c else {
            trace!("difference without comparator; result is empty");
            return OwnedStream::empty();
        };
        collect_where(&self.elements(), |v| !other.has(v, Some(c)))
    }

    /// Elements of this stream with duplicates removed by [`Identity`].
    ///
    /// Value types dedupe by value, `Rc`/`Arc` elements by address.
    fn distinct(&self) -> OwnedStream<T>
    where
        T: Identity,
    {
        let mut seen = HashSet::new();
        self.elements()
            .iter()
            .filter(|v| seen.insert(T::identity(v)))
            .cloned()
            .collect()
    }

    /// Elements matching `p`; all elements when `p` is `None`.
    fn filter(&self, p: Option<&Predicate<T>>) -> OwnedStream<T> {
        match p {
            Some(p) => collect_where(&self.elements(), |v| p.test(v)),
            None => OwnedStream::new(self.to_vec()),
        }
    }

    /// First element matching `p`; the first element when `p` is `None`.
    fn first_match(&self, p: Option<&Predicate<T>>) -> Option<T> {
        self.elements()
            .iter()
            .find(|v| p.map_or(true, |p| p.test(v)))
            .cloned()
    }

    /// Run `c` on every element in order, stopping at the first failure.
    ///
    /// A `None` consumer does nothing. On a [`SharedStream`] the backing
    /// vector stays borrowed while the consumer runs.
    fn for_each(&self, c: Option<&Consumer<'_, T>>) -> StreamResult<()> {
        let Some(c) = c else {
            return Ok(());
        };
        for (index, v) in self.elements().iter().enumerate() {
            if let Err(err) = c.accept(v) {
                debug!(index, error = %err, "consumer failed; for_each aborted");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Whether this stream has an element comparing equal to `v` under `c`.
    ///
    /// Always false when `c` is `None`.
    fn has(&self, v: &T, c: Option<&Comparator<T>>) -> bool {
        let Some(c) = c else {
            trace!("has without comparator");
            return false;
        };
        self.elements()
            .iter()
            .any(|e| c.compare(v, e) == Ordering::Equal)
    }

    /// Elements of this stream that `other` also has under `c`.
    ///
    /// Empty when `c` is `None`.
    fn intersection(&self, other: &dyn Stream<T>, c: Option<&Comparator<T>>) -> OwnedStream<T> {
        let Some(c) = c else {
            trace!("intersection without comparator; result is empty");
            return OwnedStream::empty();
        };
        collect_where(&self.elements(), |v| other.has(v, Some(c)))
    }

    /// A pull iterator over this stream.
    ///
    /// When predicates are given, only elements matching at least one of
    /// them are yielded.
    fn iterator(&self, predicates: &[Predicate<T>]) -> StreamIter<'_, T> {
        StreamIter::new(self.elements(), join_predicates(predicates))
    }

    /// Last element matching `p`; the last element when `p` is `None`.
    fn last_match(&self, p: Option<&Predicate<T>>) -> Option<T> {
        self.elements()
            .iter()
            .rev()
            .find(|v| p.map_or(true, |p| p.test(v)))
            .cloned()
    }

    /// At most the first `max_size` elements. Negative sizes count as zero.
    fn limit(&self, max_size: isize) -> OwnedStream<T> {
        let elements = self.elements();
        let end = non_negative(max_size).min(elements.len());
        OwnedStream::new(elements[..end].to_vec())
    }

    /// The greatest element under `c`; the first one on ties.
    fn max(&self, c: Option<&Comparator<T>>) -> Option<T> {
        let Some(c) = c else {
            trace!("max without comparator");
            return None;
        };
        let elements = self.elements();
        let (first, rest) = elements.split_first()?;
        let best = rest
            .iter()
            .fold(first, |best, v| if c.greater(v, best) { v } else { best });
        Some(best.clone())
    }

    /// The least element under `c`; the first one on ties.
    fn min(&self, c: Option<&Comparator<T>>) -> Option<T> {
        let Some(c) = c else {
            trace!("min without comparator");
            return None;
        };
        let elements = self.elements();
        let (first, rest) = elements.split_first()?;
        let best = rest
            .iter()
            .fold(first, |best, v| if c.less(v, best) { v } else { best });
        Some(best.clone())
    }

    /// The least and greatest elements under `c`, found in one pass.
    fn min_max(&self, c: Option<&Comparator<T>>) -> (Option<T>, Option<T>) {
        let Some(c) = c else {
            trace!("min_max without comparator");
            return (None, None);
        };
        let elements = self.elements();
        let Some((first, rest)) = elements.split_first() else {
            return (None, None);
        };
        let (mut lo, mut hi) = (first, first);
        for v in rest {
            if c.less(v, lo) {
                lo = v;
            } else if c.greater(v, hi) {
                hi = v;
            }
        }
        (Some(lo.clone()), Some(hi.clone()))
    }

    /// The `nth` (1 based) element matching `p`.
    ///
    /// A negative `nth` counts back from the last element. With `p` as `None`
    /// every element matches. `nth == 0`, or `|nth|` beyond the stream
    /// length, yields `None`.
    fn nth_match(&self, p: Option<&Predicate<T>>, nth: isize) -> Option<T> {
        let elements = self.elements();
        let n = nth.unsigned_abs();
        if n == 0 || n > elements.len() {
            return None;
        }
        match p {
            None if nth > 0 => Some(elements[n - 1].clone()),
            None => Some(elements[elements.len() - n].clone()),
            Some(p) if nth > 0 => elements.iter().filter(|v| p.test(v)).nth(n - 1).cloned(),
            Some(p) => elements
                .iter()
                .rev()
                .filter(|v| p.test(v))
                .nth(n - 1)
                .cloned(),
        }
    }

    /// Elements of this stream in reverse order.
    fn reverse(&self) -> OwnedStream<T> {
        self.elements().iter().rev().cloned().collect()
    }

    /// Elements after discarding the first `n`. Negative `n` counts as zero.
    fn skip(&self, n: isize) -> OwnedStream<T> {
        let elements = self.elements();
        let start = non_negative(n).min(elements.len());
        OwnedStream::new(elements[start..].to_vec())
    }

    /// `count` elements starting at the zero based `start`.
    ///
    /// A negative `start` counts as zero. A negative `count` selects
    /// backwards from `start`. Out of range bounds are clamped.
    fn slice(&self, start: isize, count: isize) -> OwnedStream<T> {
        let elements = self.elements();
        let (lo, hi) = slice_bounds(elements.len(), start, count);
        OwnedStream::new(elements[lo..hi].to_vec())
    }

    /// Elements stably sorted by `c`; original order when `c` is `None`.
    fn sorted(&self, c: Option<&Comparator<T>>) -> OwnedStream<T> {
        let mut out = self.to_vec();
        match c {
            Some(c) => out.sort_by(|v1, v2| c.compare(v1, v2)),
            None => trace!("sorted without comparator; order preserved"),
        }
        OwnedStream::new(out)
    }

    /// Elements in exactly one of this stream and `other` under `c`:
    /// this stream's in order, then `other`'s.
    ///
    /// Empty when `c` is `None`.
    fn symmetric_difference(
        &self,
        other: &dyn Stream<T>,
        c: Option<&Comparator<T>>,
    ) -> OwnedStream<T> {
        let Some(c) = c else {
            trace!("symmetric_difference without comparator; result is empty");
            return OwnedStream::empty();
        };
        let overlap = self.intersection(other, Some(c));
        let outside = |v: &T| !overlap.has(v, Some(c));
        let mut out = collect_where(&self.elements(), outside).into_vec();
        out.extend(collect_where(&other.elements(), outside));
        OwnedStream::new(out)
    }

    /// This stream followed by the elements of `other` it does not share
    /// under `c`.
    ///
    /// Empty when `c` is `None`.
    fn union(&self, other: &dyn Stream<T>, c: Option<&Comparator<T>>) -> OwnedStream<T> {
        let Some(c) = c else {
            trace!("union without comparator; result is empty");
            return OwnedStream::empty();
        };
        let overlap = self.intersection(other, Some(c));
        let mut out = self.to_vec();
        out.extend(collect_where(&other.elements(), |v| !overlap.has(v, Some(c))));
        OwnedStream::new(out)
    }

    /// Elements with duplicates removed.
    ///
    /// With a comparator this is [`unique_by`](Stream::unique_by). Without
    /// one, value types fall back to [`distinct`](Stream::distinct) and
    /// pointer types yield an empty stream.
    fn unique(&self, c: Option<&Comparator<T>>) -> OwnedStream<T>
    where
        T: Identity,
    {
        match c {
            Some(c) => self.unique_by(c),
            None if T::BY_VALUE => {
                trace!("unique without comparator; using distinct");
                self.distinct()
            }
            None => {
                trace!("unique without comparator on pointer elements; result is empty");
                OwnedStream::empty()
            }
        }
    }

    /// Elements with duplicates under `c` removed, keeping the first of
    /// each group. Quadratic in the stream length.
    fn unique_by(&self, c: &Comparator<T>) -> OwnedStream<T> {
        let elements = self.elements();
        let mut taken = vec![false; elements.len()];
        let mut out = Vec::new();
        for (i, v) in elements.iter().enumerate() {
            if taken[i] {
                continue;
            }
            for (j, later) in elements.iter().enumerate().skip(i + 1) {
                if !taken[j] && c.compare(v, later) == Ordering::Equal {
                    taken[j] = true;
                }
            }
            out.push(v.clone());
        }
        OwnedStream::new(out)
    }
}

/// Single-use pull iterator returned by [`Stream::iterator`].
///
/// Holds a cursor into the stream's elements; it is forward only and cannot
/// be restarted. Once exhausted it keeps returning `None`.
pub struct StreamIter<'a, T> {
    elements: Elements<'a, T>,
    cursor: usize,
    predicate: Option<Predicate<T>>,
}

impl<'a, T> StreamIter<'a, T> {
    fn new(elements: Elements<'a, T>, predicate: Option<Predicate<T>>) -> Self {
        Self {
            elements,
            cursor: 0,
            predicate,
        }
    }
}

impl<T: Clone> Iterator for StreamIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while let Some(v) = self.elements.get(self.cursor) {
            self.cursor += 1;
            if self.predicate.as_ref().map_or(true, |p| p.test(v)) {
                return Some(v.clone());
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.cursor);
        match self.predicate {
            Some(_) => (0, Some(remaining)),
            None => (remaining, Some(remaining)),
        }
    }
}

impl<T: Clone> FusedIterator for StreamIter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for StreamIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamIter")
            .field("elements", &self.elements)
            .field("cursor", &self.cursor)
            .field("predicate", &self.predicate)
            .finish()
    }
}

/// Builder for owned streams.
///
/// # Example
///
/// ```rust
/// use streamable::{Stream, StreamBuilder};
///
/// let stream = StreamBuilder::new()
///     .capacity(4)
///     .add(1)
///     .add_all([2, 3])
///     .build();
///
/// assert_eq!(stream.to_vec(), vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct StreamBuilder<T> {
    elements: Vec<T>,
}

impl<T> StreamBuilder<T> {
    /// Create a new, empty stream builder.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Reserve room for at least `additional` more elements.
    pub fn capacity(mut self, additional: usize) -> Self {
        self.elements.reserve(additional);
        self
    }

    /// Add one element.
    pub fn add(mut self, v: T) -> Self {
        self.elements.push(v);
        self
    }

    /// Add every element of `items`.
    pub fn add_all(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.elements.extend(items);
        self
    }

    /// Build the stream.
    pub fn build(self) -> OwnedStream<T> {
        OwnedStream::new(self.elements)
    }
}

impl<T> Default for StreamBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an owned stream of the values provided.
pub fn of<T>(values: impl IntoIterator<Item = T>) -> OwnedStream<T> {
    values.into_iter().collect()
}

/// Conversion into the stream variant matching a sequence's ownership.
///
/// - `Vec<T>` becomes an [`OwnedStream`]
/// - `&[T]` and `&Vec<T>` become a [`SliceStream`] (snapshot view)
/// - `Rc<RefCell<Vec<T>>>` becomes a [`SharedStream`] (live view)
pub trait IntoStream<T: Clone> {
    /// The stream variant produced.
    type Stream: Stream<T>;

    /// Convert into a stream.
    fn into_stream(self) -> Self::Stream;
}

impl<T: Clone> IntoStream<T> for Vec<T> {
    type Stream = OwnedStream<T>;

    fn into_stream(self) -> Self::Stream {
        OwnedStream::new(self)
    }
}

impl<'a, T: Clone> IntoStream<T> for &'a [T] {
    type Stream = SliceStream<'a, T>;

    fn into_stream(self) -> Self::Stream {
        SliceStream::new(self)
    }
}

impl<'a, T: Clone> IntoStream<T> for &'a Vec<T> {
    type Stream = SliceStream<'a, T>;

    fn into_stream(self) -> Self::Stream {
        SliceStream::new(self)
    }
}

impl<T: Clone> IntoStream<T> for Rc<RefCell<Vec<T>>> {
    type Stream = SharedStream<T>;

    fn into_stream(self) -> Self::Stream {
        SharedStream::new(self)
    }
}
