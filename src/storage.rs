//! Storage variants behind the [`Stream`] trait.
//!
//! All three behave identically to callers; they differ only in who owns
//! the backing sequence:
//!
//! - [`OwnedStream`] owns its elements. Every derived stream is one of these.
//! - [`SliceStream`] borrows a slice. The borrow checker keeps the slice
//!   unchanged for as long as the stream exists, so it is a snapshot.
//! - [`SharedStream`] wraps an `Rc<RefCell<Vec<T>>>` that other code may keep
//!   mutating. Changes made between operations are visible to later ones.
//!   It is `!Send`; the live view is for single-threaded use only.

use std::cell::RefCell;
use std::rc::Rc;

use crate::stream::{Elements, Stream};

/// A stream that owns its elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedStream<T> {
    elements: Vec<T>,
}

impl<T> OwnedStream<T> {
    /// Create a stream owning `elements`.
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Create an empty stream.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Unwrap into the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> Stream<T> for OwnedStream<T> {
    fn elements(&self) -> Elements<'_, T> {
        Elements::Borrowed(&self.elements)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Default for OwnedStream<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for OwnedStream<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> FromIterator<T> for OwnedStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for OwnedStream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// A snapshot view over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceStream<'a, T> {
    elements: &'a [T],
}

impl<'a, T> SliceStream<'a, T> {
    /// Create a view over `elements`.
    pub fn new(elements: &'a [T]) -> Self {
        Self { elements }
    }
}

impl<T: Clone> Stream<T> for SliceStream<'_, T> {
    fn elements(&self) -> Elements<'_, T> {
        Elements::Borrowed(self.elements)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

/// A live view over a vector shared with other owners.
///
/// The vector is borrowed for the duration of each operation (and for the
/// lifetime of an iterator); mutating it through another handle at that
/// moment panics like any conflicting `RefCell` borrow.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use streamable::{SharedStream, Stream};
///
/// let source = Rc::new(RefCell::new(vec![1, 2]));
/// let stream = SharedStream::new(Rc::clone(&source));
/// assert_eq!(stream.len(), 2);
///
/// source.borrow_mut().push(3);
/// assert_eq!(stream.len(), 3);
/// assert_eq!(stream.last_match(None), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct SharedStream<T> {
    elements: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedStream<T> {
    /// Create a live view over `elements`.
    pub fn new(elements: Rc<RefCell<Vec<T>>>) -> Self {
        Self { elements }
    }

    /// A handle to the shared backing vector.
    pub fn source(&self) -> Rc<RefCell<Vec<T>>> {
        Rc::clone(&self.elements)
    }
}

impl<T: Clone> Stream<T> for SharedStream<T> {
    fn elements(&self) -> Elements<'_, T> {
        Elements::Shared(self.elements.borrow())
    }
}
