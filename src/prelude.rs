//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! from Streamable for convenient glob imports.
//!
//! # Example
//!
//! ```rust
//! use streamable::prelude::*;
//!
//! let evens = of(1..=6).filter(Some(&Predicate::new(|v: &i32| v % 2 == 0)));
//! assert_eq!(evens.len(), 3);
//! ```

// Streams
pub use crate::storage::{OwnedStream, SharedStream, SliceStream};
pub use crate::stream::{of, IntoStream, Stream, StreamBuilder};

// Building blocks
pub use crate::accumulator::Accumulator;
pub use crate::comparator::{
    Comparator, F32_COMPARATOR, F64_COMPARATOR, I16_COMPARATOR, I32_COMPARATOR, I64_COMPARATOR,
    I8_COMPARATOR, ISIZE_COMPARATOR, STRING_COMPARATOR, STRING_INSENSITIVE_COMPARATOR,
    STR_COMPARATOR, U16_COMPARATOR, U32_COMPARATOR, U64_COMPARATOR, U8_COMPARATOR,
    USIZE_COMPARATOR,
};
pub use crate::consumer::Consumer;
pub use crate::converter::Converter;
pub use crate::identity::Identity;
pub use crate::mapper::Mapper;
pub use crate::predicate::Predicate;
pub use crate::reducer::Reducer;

// Errors
pub use crate::error::{StreamError, StreamResult};
