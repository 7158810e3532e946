//! Immutable option types in two families.
//!
//! * [`NonNull`]: empty, or present with a value.
//! * [`Nullable`]: empty, present with a value, or present with an explicit null.
//!
//! Shared behaviour (unwrapping, fallbacks) lives on the [`Optional`] trait.
//! Options are built directly or through the [`Opt`] factory.
//!
//! ```
//! use opt::*;
//!
//! let value = Opt::non_null(5).filter(|x| *x > 10);
//! assert!(value.is_empty());
//!
//! let value = Opt::nullable(Some(5)).map(|x| x.map(|x| x + 1));
//! assert_eq!(value.unwrap(), Ok(Some(6)));
//! ```
pub use crate::error::{Error, Result, UnwrapError};
pub use crate::factory::{NullPolicy, Opt};
pub use crate::nonnull::NonNull;
pub use crate::nullable::Nullable;
pub use crate::optional::Optional;

mod error;
mod factory;
mod nonnull;
mod nullable;
mod optional;
