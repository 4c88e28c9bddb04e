/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Option`], an immutable container that either holds a value or is empty

use std::{any::type_name, fmt::Debug};

use crate::{Maybe, NotNull, Nullable, OptionError};

/// An immutable value that may or may not be present.
///
/// The only ways to create an [`Option`] are the factories [`Option::none`], [`Option::some`],
/// [`Option::try_some`], [`Option::from_nullable`] and the conversion from a standard [`Option`](`core::option::Option`).
/// None of them ever put a null value inside, see [`NotNull`] and [`Nullable`].
/// Once created, the option never changes.
///
/// Getting the value out always requires deciding what to do if it's not there.
/// Everything is built on top of [`Option::matches`].
///
/// # Examples
///
/// ```
/// use maybe_option::{Maybe, Option};
///
/// let name = Option::some("Ferris");
/// let greeting = name.matches(|name| format!("Hello, {name}!"), || "Hello, stranger!".to_owned());
/// assert_eq!(greeting, "Hello, Ferris!");
///
/// let nobody = Option::<&str>::none();
/// assert!(nobody.is_a(Maybe::None));
/// assert_eq!(nobody.unwrap_or("stranger"), "stranger");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Option<T> {
	raw: core::option::Option<T>,
}

impl<T> Option<T> {
	/// Creates an empty option
	pub const fn none() -> Self {
		Self { raw: None }
	}

	/// Creates an option that holds `value`
	///
	/// Only accepts types that can never be null.
	/// Use [`Option::try_some`] or [`Option::from_nullable`] for [`Nullable`] types
	pub const fn some(value: T) -> Self
	where
		T: NotNull,
	{
		Self { raw: Some(value) }
	}

	/// Creates an option that holds the value of a [`Nullable`], refusing null.
	///
	/// # Errors
	/// [`OptionError::NullValue`] if `value` is null
	pub fn try_some<N>(value: N) -> Result<Self, OptionError>
	where
		N: Nullable<Value = T>,
	{
		match value.into_value() {
			Some(value) => Ok(Self { raw: Some(value) }),
			None => {
				tracing::debug!(
					"Refusing to create a populated option from a null {}",
					type_name::<N>()
				);
				Err(OptionError::NullValue)
			}
		}
	}

	/// Creates an empty option if `value` is null, or an option that holds its value otherwise
	pub fn from_nullable<N>(value: N) -> Self
	where
		N: Nullable<Value = T>,
	{
		let option = Self {
			raw: value.into_value(),
		};

		tracing::trace!(
			"Created a {} option from a {}",
			option.is(),
			type_name::<N>()
		);
		option
	}

	/// Checks whether the option holds a value
	#[must_use]
	pub fn is(&self) -> Maybe {
		match self.raw {
			Some(_) => Maybe::Some,
			None => Maybe::None,
		}
	}

	/// Returns `true` if the option is empty
	#[must_use]
	pub fn is_none(&self) -> bool {
		self.is() == Maybe::None
	}

	/// Returns `true` if the option holds a value
	#[must_use]
	pub fn is_some(&self) -> bool {
		self.is() == Maybe::Some
	}

	/// Returns `true` if the state of the option is `maybe`
	#[must_use]
	pub fn is_a(&self, maybe: Maybe) -> bool {
		match maybe {
			Maybe::Some => self.is_some(),
			Maybe::None => self.is_none(),
		}
	}

	/// Borrows the value, if any, without consuming the option
	pub fn as_ref(&self) -> Option<&T> {
		Option {
			raw: self.raw.as_ref(),
		}
	}

	/// Calls `on_some` with the value if there's one, or `on_none` otherwise, and returns what they return.
	///
	/// Only one of the two is ever called
	pub fn matches<U, S, N>(self, on_some: S, on_none: N) -> U
	where
		S: FnOnce(T) -> U,
		N: FnOnce() -> U,
	{
		match self.raw {
			Some(value) => on_some(value),
			None => on_none(),
		}
	}

	/// Returns the value or the result of `on_none` if the option is empty.
	///
	/// `on_none` is only called if the option is empty
	pub fn unwrap_or_else<F>(self, on_none: F) -> T
	where
		F: FnOnce() -> T,
	{
		self.matches(|value| value, on_none)
	}

	/// Returns the value or `default` if the option is empty.
	///
	/// `default` is evaluated before the call even if the option holds a value,
	/// prefer [`Option::unwrap_or_else`] if it's expensive to compute
	pub fn unwrap_or(self, default: T) -> T {
		self.unwrap_or_else(|| default)
	}

	/// Returns the value or `err` as is if the option is empty
	///
	/// # Errors
	/// `err` if the option is empty
	pub fn unwrap_or_throw<E>(self, err: E) -> Result<T, E> {
		self.unwrap_or_throw_with(|| err)
	}

	/// Returns the value or the error created by `make_err` if the option is empty
	///
	/// # Errors
	/// The result of `make_err` if the option is empty. `make_err` isn't called otherwise
	pub fn unwrap_or_throw_with<E, F>(self, make_err: F) -> Result<T, E>
	where
		F: FnOnce() -> E,
	{
		self.matches(Ok, || {
			tracing::trace!("Unwrapped an empty option, returning the provided error");
			Err(make_err())
		})
	}

	/// Returns the value if there's one
	///
	/// # Errors
	/// [`OptionError::UnwrapNone`] if the option is empty
	pub fn try_unwrap(self) -> Result<T, OptionError> {
		self.unwrap_or_throw(OptionError::UnwrapNone)
	}

	/// Returns the value.
	///
	/// Should only be used when the option being empty is a bug,
	/// see [`Option::unwrap_or`], [`Option::unwrap_or_else`] and [`Option::unwrap_or_throw`] otherwise.
	///
	/// # Panics
	/// If the option is empty
	pub fn unwrap(self) -> T {
		self.unwrap_or_else(|| panic!("{}", OptionError::UnwrapNone))
	}
}

impl<T: Debug> Debug for Option<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.raw {
			Some(value) => f.debug_tuple("Some").field(value).finish(),
			None => f.write_str("None"),
		}
	}
}

impl<T: NotNull> From<core::option::Option<T>> for Option<T> {
	fn from(raw: core::option::Option<T>) -> Self {
		Self { raw }
	}
}

impl<T> From<Option<T>> for core::option::Option<T> {
	fn from(option: Option<T>) -> Self {
		option.raw
	}
}
