//! Twofold provides two small, immutable, generic container types for
//! expressing "a value or nothing" and "one of two outcomes" without null
//! references or error types used for control flow. This library just
//! implements the two containers and their combinators. It provides light
//! weight value types and no I/O, executor or locking of any kind.
//!
//! # Concepts
//!
//! [`Maybe`] holds zero or one values of a type; [`Either`] holds exactly one
//! of a `Left` or a `Right` value, with `Right` conventionally the success
//! side. Both are plain enums: the variant set is closed, and consumers
//! pattern-match or fold rather than downcast. Every combinator consumes its
//! container and returns a new one; nothing is ever mutated in place.
//!
//! Each combinator comes in two forms. The synchronous form invokes the
//! caller-supplied transform directly. The `_async` sibling accepts a
//! transform returning a future and awaits it before wrapping the result,
//! with identical branching: a transform is invoked at most once, and never
//! for the side it does not match. The containers spawn no tasks and hold at
//! most one pending await at a time; they suspend inside whatever cooperative
//! scheduler the caller's transform runs under.
//!
//! The only error these types raise is [`ContainerError::NullValue`], from
//! the fail-fast `try_*` constructors on the nullable boundary. Absence, or
//! landing on the `Left` side, is ordinary inspectable state. Failures raised
//! inside caller-supplied transforms unwind through the combinators
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use twofold::{Either, Maybe};
//!
//! let doubled = Maybe::of(5).map(|n| n * 2);
//! assert_eq!(doubled.or_null(), Some(10));
//!
//! let recovered: Either<String, usize> = Either::left("oops".to_string())
//!     .switch_to_right(|message| message.len());
//! assert_eq!(recovered.right_value(), Maybe::of(4));
//! ```

pub mod either;
pub mod error;
pub mod maybe;

pub use either::Either;
pub use error::{ContainerError, Result};
pub use maybe::Maybe;
