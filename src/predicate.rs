//! Composable boolean tests.
//!
//! A [`Predicate`] is an immutable tree: leaves wrap a test function, inner
//! nodes combine children with AND, OR or NOT. Composing never touches the
//! operands, so one base predicate can be shared by any number of trees.

use std::fmt;
use std::sync::Arc;

type TestFn<T> = dyn Fn(&T) -> bool + Send + Sync;

enum Node<T> {
    Test(Box<TestFn<T>>),
    And(Predicate<T>, Predicate<T>),
    Or(Predicate<T>, Predicate<T>),
    Not(Predicate<T>),
}

/// A boolean test over a value, composable via [`and`](Predicate::and),
/// [`or`](Predicate::or) and [`negate`](Predicate::negate).
///
/// Used by the filtering and matching operations of [`Stream`](crate::Stream).
///
/// # Example
///
/// ```rust
/// use streamable::Predicate;
///
/// let even = Predicate::new(|v: &i32| v % 2 == 0);
/// let big = Predicate::new(|v: &i32| *v > 10);
///
/// let small_even = even.and(&big.negate());
/// assert!(small_even.test(&4));
/// assert!(!small_even.test(&12));
/// assert!(!small_even.test(&3));
/// ```
pub struct Predicate<T> {
    node: Arc<Node<T>>,
}

impl<T> Predicate<T> {
    /// Create a predicate from a test function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::from_node(Node::Test(Box::new(f)))
    }

    fn from_node(node: Node<T>) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Evaluate this predicate against the supplied value.
    pub fn test(&self, v: &T) -> bool {
        match self.node.as_ref() {
            Node::Test(f) => f(v),
            Node::And(first, second) => first.test(v) && second.test(v),
            Node::Or(first, second) => first.test(v) || second.test(v),
            Node::Not(inner) => !inner.test(v),
        }
    }

    /// Short-circuiting logical AND: `other` is only evaluated when this
    /// predicate passes.
    pub fn and(&self, other: &Predicate<T>) -> Predicate<T> {
        Self::from_node(Node::And(self.clone(), other.clone()))
    }

    /// Short-circuiting logical OR: `other` is only evaluated when this
    /// predicate fails.
    pub fn or(&self, other: &Predicate<T>) -> Predicate<T> {
        Self::from_node(Node::Or(self.clone(), other.clone()))
    }

    /// Logical NOT of this predicate's combined result.
    ///
    /// `a.and(&b).negate()` is `!(a && b)`.
    pub fn negate(&self) -> Predicate<T> {
        Self::from_node(Node::Not(self.clone()))
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.as_ref() {
            Node::Test(_) => f.write_str("Test"),
            Node::And(a, b) => f.debug_tuple("And").field(a).field(b).finish(),
            Node::Or(a, b) => f.debug_tuple("Or").field(a).field(b).finish(),
            Node::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
        }
    }
}

impl<T, F> From<F> for Predicate<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
