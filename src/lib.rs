/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! An immutable optional value that can't be used without handling the empty case.
//!
//! [`Option`] either holds exactly one value or nothing at all. Every way to get the value out
//! of it requires the caller to decide what happens when there is none:
//! a fallback ([`Option::unwrap_or`], [`Option::unwrap_or_else`]),
//! an error ([`Option::unwrap_or_throw`], [`Option::try_unwrap`]),
//! two branches ([`Option::matches`]),
//! or an explicit panic ([`Option::unwrap`]).
//!
//! Which of the two states an option is in can be inspected with [`Option::is`] that returns a [`Maybe`].
//!
//! # Null values
//!
//! A populated option never wraps "nothing". Since Rust has no universal null, what counts as null
//! is defined per type by the [`Nullable`] trait, e.g. [`None`](core::option::Option::None) for the standard option
//! or a null raw pointer. [`Option::from_nullable`] turns a null into an empty option
//! while [`Option::try_some`] refuses it with [`OptionError::NullValue`].
//! [`Option::some`] only accepts types that can't be null at all, i.e. that implement [`NotNull`].
//!
//! # Features
//!
//! - `json`: treat [`serde_json::Value::Null`](https://docs.rs/serde_json/latest/serde_json/enum.Value.html) as null,
//!   see the `json` module
//!
//! # Example
//!
//! ```
//! use maybe_option::{Maybe, Option};
//!
//! let some = Option::some(1);
//! let none = Option::<i32>::none();
//!
//! assert_eq!(some.is(), Maybe::Some);
//! assert_eq!(none.is(), Maybe::None);
//!
//! assert_eq!(some.unwrap_or(0), 1);
//! assert_eq!(none.unwrap_or(1), 1);
//!
//! // null is never a value
//! assert_eq!(Option::<i32>::from_nullable(None::<i32>), Option::none());
//! assert!(Option::<i32>::try_some(None::<i32>).is_err());
//! ```

pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod maybe;
pub mod nullable;
pub mod option;

pub use self::{
	error::OptionError,
	maybe::Maybe,
	nullable::{NotNull, Nullable},
	option::Option,
};
