//! # Streamable
//!
//! **Streamable** provides immutable, composable streams over in-memory
//! sequences, together with the functional building blocks used to query
//! and transform them.
//!
//! ## Overview
//!
//! A [`Stream`] never changes: filtering, sorting, slicing and the set
//! operations all return a fresh [`OwnedStream`]. Behavior is customised
//! through small composable values:
//!
//! - [`Predicate`]: boolean test, composable with `and`, `or` and `negate`
//! - [`Comparator`]: three-way ordering, composable with `reversed` and `then`
//! - [`Consumer`]: fallible per-element action, chained with `and_then`
//! - [`Converter`] and [`Mapper`]: per-element and bulk type conversion
//! - [`Accumulator`] and [`Reducer`]: left folds into a single result
//!
//! ## Storage
//!
//! ```text
//! OwnedStream   - owns a Vec<T>; every derived stream is one of these
//! SliceStream   - borrows a &[T]; a snapshot for as long as it lives
//! SharedStream  - wraps Rc<RefCell<Vec<T>>>; sees later mutations
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use streamable::prelude::*;
//!
//! let words = of(["pear", "fig", "apple", "fig", "kiwi"]);
//!
//! let short = Predicate::new(|w: &&str| w.len() <= 4);
//! let by_length = Comparator::by_key(|w: &&str| w.len()).then(&*STR_COMPARATOR);
//!
//! let picked = words.filter(Some(&short)).distinct().sorted(Some(&by_length));
//! assert_eq!(picked.to_vec(), vec!["fig", "kiwi", "pear"]);
//!
//! let total = Reducer::new(Accumulator::new(|w: &&str, n: usize| n + w.len()));
//! assert_eq!(total.reduce(&words), 19);
//! ```
//!
//! ## Features
//!
//! - `None` predicates and comparators follow a fixed per-operation policy
//!   instead of failing
//! - Set algebra (`union`, `intersection`, `difference`,
//!   `symmetric_difference`) driven by a comparator
//! - Identity-based `distinct` through the [`Identity`] trait
//! - A filtered pull iterator via [`Stream::iterator`]
//! - Error types for aborted consumers and conversions

mod accumulator;
mod comparator;
mod consumer;
mod converter;
mod error;
mod identity;
mod mapper;
mod predicate;
mod reducer;
mod storage;
pub mod stream;
mod util;

pub mod prelude;

// Re-export core types
pub use accumulator::Accumulator;
pub use comparator::{
    Comparator, F32_COMPARATOR, F64_COMPARATOR, I16_COMPARATOR, I32_COMPARATOR, I64_COMPARATOR,
    I8_COMPARATOR, ISIZE_COMPARATOR, STRING_COMPARATOR, STRING_INSENSITIVE_COMPARATOR,
    STR_COMPARATOR, U16_COMPARATOR, U32_COMPARATOR, U64_COMPARATOR, U8_COMPARATOR,
    USIZE_COMPARATOR,
};
pub use consumer::Consumer;
pub use converter::Converter;
pub use error::{StreamError, StreamResult};
pub use identity::Identity;
pub use mapper::Mapper;
pub use predicate::Predicate;
pub use reducer::Reducer;
pub use storage::{OwnedStream, SharedStream, SliceStream};
pub use stream::{of, Elements, IntoStream, Stream, StreamBuilder, StreamIter};
