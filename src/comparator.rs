//! Composable three-way orderings.
//!
//! A [`Comparator`] orders two values of the same type. Comparators are used
//! for sorting, for min/max searches and as the equality test of the set
//! operations on [`Stream`](crate::Stream).

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

enum Node<T> {
    Compare(Box<CompareFn<T>>),
    Reversed(Comparator<T>),
    // `reversed` flips equality only; the primary carries the reversed order.
    Then {
        primary: Comparator<T>,
        tie: Comparator<T>,
        reversed: bool,
    },
}

/// A three-way ordering over two values, composable via
/// [`reversed`](Comparator::reversed) and [`then`](Comparator::then).
///
/// Reversal applies to equality as well as to ordering: on a reversed
/// comparator [`equal`](Comparator::equal) holds for values that compare
/// unequal, and vice versa.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use streamable::Comparator;
///
/// let by_len = Comparator::by_key(|s: &String| s.len());
/// let ordered = by_len.then(&Comparator::natural());
///
/// let (a, b) = ("ab".to_string(), "b".to_string());
/// assert_eq!(ordered.compare(&a, &b), Ordering::Greater);
/// assert_eq!(ordered.reversed().compare(&a, &b), Ordering::Less);
/// ```
pub struct Comparator<T> {
    node: Arc<Node<T>>,
}

impl<T> Comparator<T> {
    /// Create a comparator from a compare function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::from_node(Node::Compare(Box::new(f)))
    }

    /// Create a comparator ordering values by an extracted key.
    pub fn by_key<K, F>(key: F) -> Self
    where
        T: 'static,
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self::new(move |v1, v2| key(v1).cmp(&key(v2)))
    }

    fn from_node(node: Node<T>) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Compare two values.
    pub fn compare(&self, v1: &T, v2: &T) -> Ordering {
        match self.node.as_ref() {
            Node::Compare(f) => f(v1, v2),
            Node::Reversed(inner) => inner.compare(v1, v2).reverse(),
            Node::Then { primary, tie, .. } => primary
                .compare(v1, v2)
                .then_with(|| tie.compare(v1, v2)),
        }
    }

    /// Returns true if `v1 < v2`.
    pub fn less(&self, v1: &T, v2: &T) -> bool {
        self.compare(v1, v2) == Ordering::Less
    }

    /// Returns true if `v1 <= v2`.
    pub fn less_or_equal(&self, v1: &T, v2: &T) -> bool {
        self.compare(v1, v2) != Ordering::Greater
    }

    /// Returns true if `v1 > v2`.
    pub fn greater(&self, v1: &T, v2: &T) -> bool {
        self.compare(v1, v2) == Ordering::Greater
    }

    /// Returns true if `v1 >= v2`.
    pub fn greater_or_equal(&self, v1: &T, v2: &T) -> bool {
        self.compare(v1, v2) != Ordering::Less
    }

    /// Returns true if `v1 == v2`, inverted when this comparator is reversed.
    pub fn equal(&self, v1: &T, v2: &T) -> bool {
        (self.compare(v1, v2) == Ordering::Equal) != self.is_reversed()
    }

    /// Returns true if `v1 != v2`, inverted when this comparator is reversed.
    pub fn not_equal(&self, v1: &T, v2: &T) -> bool {
        !self.equal(v1, v2)
    }

    /// Whether [`reversed`](Comparator::reversed) was applied to this
    /// comparator an odd number of times.
    ///
    /// A [`then`](Comparator::then) composition starts out unreversed, even
    /// when its primary is reversed.
    pub fn is_reversed(&self) -> bool {
        match self.node.as_ref() {
            Node::Compare(_) => false,
            Node::Reversed(inner) => !inner.is_reversed(),
            Node::Then { reversed, .. } => *reversed,
        }
    }

    /// A new comparator imposing the reverse ordering of this one.
    ///
    /// For a [`then`](Comparator::then) composition only the primary
    /// comparison is reversed; the tie-breaker keeps its own direction.
    pub fn reversed(&self) -> Comparator<T> {
        match self.node.as_ref() {
            Node::Then {
                primary,
                tie,
                reversed,
            } => Self::from_node(Node::Then {
                primary: primary.reversed(),
                tie: tie.clone(),
                reversed: !reversed,
            }),
            _ => Self::from_node(Node::Reversed(self.clone())),
        }
    }

    /// A new comparator that falls back to `other` when this one yields
    /// [`Ordering::Equal`].
    pub fn then(&self, other: &Comparator<T>) -> Comparator<T> {
        Self::from_node(Node::Then {
            primary: self.clone(),
            tie: other.clone(),
            reversed: false,
        })
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// Comparator using the natural [`Ord`] ordering of `T`.
    pub fn natural() -> Self {
        Self::new(|v1: &T, v2: &T| v1.cmp(v2))
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.as_ref() {
            Node::Compare(_) => f.write_str("Compare"),
            Node::Reversed(inner) => f.debug_tuple("Reversed").field(inner).finish(),
            Node::Then {
                primary,
                tie,
                reversed,
            } => f
                .debug_struct("Then")
                .field("primary", primary)
                .field("tie", tie)
                .field("reversed", reversed)
                .finish(),
        }
    }
}

fn partial<T: PartialOrd>(v1: &T, v2: &T) -> Ordering {
    v1.partial_cmp(v2).unwrap_or(Ordering::Equal)
}

/// Pre-made comparator for `String` values.
pub static STRING_COMPARATOR: Lazy<Comparator<String>> = Lazy::new(Comparator::natural);

/// Pre-made case-insensitive comparator for `String` values.
pub static STRING_INSENSITIVE_COMPARATOR: Lazy<Comparator<String>> = Lazy::new(|| {
    Comparator::new(|v1: &String, v2: &String| v1.to_uppercase().cmp(&v2.to_uppercase()))
});

/// Pre-made comparator for `&'static str` values.
pub static STR_COMPARATOR: Lazy<Comparator<&'static str>> = Lazy::new(Comparator::natural);

macro_rules! numeric_comparators {
    ($($name:ident => $t:ty),* $(,)?) => {
        $(
            #[doc = concat!("Pre-made comparator for `", stringify!($t), "` values.")]
            pub static $name: Lazy<Comparator<$t>> = Lazy::new(|| Comparator::new(partial::<$t>));
        )*
    };
}

numeric_comparators! {
    I8_COMPARATOR => i8,
    I16_COMPARATOR => i16,
    I32_COMPARATOR => i32,
    I64_COMPARATOR => i64,
    ISIZE_COMPARATOR => isize,
    U8_COMPARATOR => u8,
    U16_COMPARATOR => u16,
    U32_COMPARATOR => u32,
    U64_COMPARATOR => u64,
    USIZE_COMPARATOR => usize,
    F32_COMPARATOR => f32,
    F64_COMPARATOR => f64,
}
