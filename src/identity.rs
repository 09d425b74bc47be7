//! Element identity used by [`Stream::distinct`](crate::Stream::distinct).
//!
//! Value types are identified by their contents. Shared pointers (`Rc`,
//! `Arc`) are identified by address, so two pointers to equal contents are
//! still distinct. Comparator-based deduplication
//! ([`Stream::unique_by`](crate::Stream::unique_by)) is the way to compare
//! pointer contents.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Hashable identity of a stream element.
pub trait Identity {
    /// The hashable key identifying an element.
    type Key: Hash + Eq;

    /// True when identity is the element's value, false when it is an address.
    const BY_VALUE: bool;

    /// Returns the identity key of this element.
    fn identity(&self) -> Self::Key;
}

/// Implements [`Identity`] by value for `Clone + Hash + Eq` types.
///
/// ```rust
/// use streamable::{value_identity, Identity};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Point(i32, i32);
///
/// value_identity!(Point);
///
/// assert!(<Point as Identity>::BY_VALUE);
/// assert_eq!(Point(1, 2).identity(), Point(1, 2));
/// ```
#[macro_export]
macro_rules! value_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::Identity for $t {
                type Key = $t;
                const BY_VALUE: bool = true;

                fn identity(&self) -> Self::Key {
                    ::std::clone::Clone::clone(self)
                }
            }
        )*
    };
}

value_identity!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String
);

impl<'a> Identity for &'a str {
    type Key = &'a str;
    const BY_VALUE: bool = true;

    fn identity(&self) -> Self::Key {
        *self
    }
}

impl Identity for f32 {
    type Key = u32;
    const BY_VALUE: bool = true;

    fn identity(&self) -> Self::Key {
        // +0.0 and -0.0 are the same value
        if *self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }
}

impl Identity for f64 {
    type Key = u64;
    const BY_VALUE: bool = true;

    fn identity(&self) -> Self::Key {
        if *self == 0.0 {
            0
        } else {
            self.to_bits()
        }
    }
}

impl<X: ?Sized> Identity for Rc<X> {
    type Key = usize;
    const BY_VALUE: bool = false;

    fn identity(&self) -> Self::Key {
        Rc::as_ptr(self) as *const () as usize
    }
}

impl<X: ?Sized> Identity for Arc<X> {
    type Key = usize;
    const BY_VALUE: bool = false;

    fn identity(&self) -> Self::Key {
        Arc::as_ptr(self) as *const () as usize
    }
}
