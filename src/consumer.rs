//! Side-effecting actions over stream elements.

use std::fmt;
use std::rc::Rc;

use crate::error::StreamResult;

type AcceptFn<'a, T> = dyn Fn(&T) -> StreamResult<()> + 'a;

enum Node<'a, T> {
    Accept(Box<AcceptFn<'a, T>>),
    AndThen(Consumer<'a, T>, Consumer<'a, T>),
}

/// An action performed on a value that may fail.
///
/// Consumers may borrow caller state for `'a`, which is how
/// [`Stream::for_each`](crate::Stream::for_each) feeds elements into local
/// collections. Chaining with [`and_then`](Consumer::and_then) is fail-fast:
/// once a step fails, the rest of the chain is skipped and that error is
/// returned.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use streamable::{Consumer, StreamError};
///
/// let seen = RefCell::new(Vec::new());
/// let record = Consumer::new(|v: &i32| {
///     seen.borrow_mut().push(*v);
///     Ok(())
/// });
/// let reject_negative = Consumer::new(|v: &i32| {
///     if *v < 0 {
///         Err(StreamError::rejected("negative"))
///     } else {
///         Ok(())
///     }
/// });
///
/// let checked = reject_negative.and_then(&record);
/// assert!(checked.accept(&1).is_ok());
/// assert!(checked.accept(&-1).is_err());
/// assert_eq!(*seen.borrow(), vec![1]);
/// ```
pub struct Consumer<'a, T> {
    node: Rc<Node<'a, T>>,
}

impl<'a, T> Consumer<'a, T> {
    /// Create a consumer from an accept function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> StreamResult<()> + 'a,
    {
        Self {
            node: Rc::new(Node::Accept(Box::new(f))),
        }
    }

    /// Supply a value to this consumer.
    pub fn accept(&self, v: &T) -> StreamResult<()> {
        match self.node.as_ref() {
            Node::Accept(f) => f(v),
            Node::AndThen(first, after) => {
                first.accept(v)?;
                after.accept(v)
            }
        }
    }

    /// A new consumer that runs this consumer, then `after` if this one succeeded.
    pub fn and_then(&self, after: &Consumer<'a, T>) -> Consumer<'a, T> {
        Self {
            node: Rc::new(Node::AndThen(self.clone(), after.clone())),
        }
    }
}

impl<T> Clone for Consumer<'_, T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T> fmt::Debug for Consumer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node.as_ref() {
            Node::Accept(_) => f.write_str("Accept"),
            Node::AndThen(first, after) => {
                f.debug_tuple("AndThen").field(first).field(after).finish()
            }
        }
    }
}

impl<'a, T, F> From<F> for Consumer<'a, T>
where
    F: Fn(&T) -> StreamResult<()> + 'a,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_accept() {
        let collected = RefCell::new(Vec::new());
        let c = Consumer::new(|v: &&str| {
            collected.borrow_mut().push(v.to_string());
            Ok(())
        });
        assert!(c.accept(&"a").is_ok());
        assert!(c.accept(&"b").is_ok());
        assert_eq!(*collected.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_and_then_runs_in_order() {
        let order = RefCell::new(Vec::new());
        let first = Consumer::new(|_: &i32| {
            order.borrow_mut().push("first");
            Ok(())
        });
        let second = Consumer::new(|_: &i32| {
            order.borrow_mut().push("second");
            Ok(())
        });

        assert!(first.and_then(&second).accept(&1).is_ok());
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_and_then_fails_fast() {
        let after_calls = Cell::new(0);
        let failing = Consumer::new(|_: &i32| Err(StreamError::rejected("no")));
        let after = Consumer::new(|_: &i32| {
            after_calls.set(after_calls.get() + 1);
            Ok(())
        });

        let chain = failing.and_then(&after);
        assert_eq!(chain.accept(&1), Err(StreamError::rejected("no")));
        assert_eq!(after_calls.get(), 0);
    }

    #[test]
    fn test_and_then_propagates_second_failure() {
        let ok = Consumer::new(|_: &i32| Ok(()));
        let failing = Consumer::new(|v: &i32| Err(StreamError::rejected(v.to_string())));

        let chain = ok.and_then(&failing).and_then(&ok);
        assert_eq!(chain.accept(&7), Err(StreamError::rejected("7")));
    }

    #[test]
    fn test_from_closure() {
        let total = Cell::new(0);
        let add: Consumer<'_, i32> = (|v: &i32| -> StreamResult<()> {
            total.set(total.get() + v);
            Ok(())
        })
        .into();
        assert!(add.and_then(&add).accept(&3).is_ok());
        assert_eq!(total.get(), 6);
    }
}
