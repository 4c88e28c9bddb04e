/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`Nullable`] and [`NotNull`] traits that define which values count as null
//!
//! A value that may be null implements [`Nullable`] and can only be put into an [`Option`](`crate::Option`)
//! with [`Option::from_nullable`](`crate::Option::from_nullable`) or [`Option::try_some`](`crate::Option::try_some`).
//! A value that can never be null implements [`NotNull`] and can be put into an option directly
//! with [`Option::some`](`crate::Option::some`).

use std::{
	borrow::Cow,
	collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
	ffi::{OsStr, OsString},
	path::{Path, PathBuf},
	ptr::NonNull,
	rc::Rc,
	sync::Arc,
	time::Duration,
};

/// A type that has a value that means "nothing", i.e. a null sentinel
///
/// Null values are never stored inside an [`Option`](`crate::Option`).
/// [`Option::from_nullable`](`crate::Option::from_nullable`) turns them into an empty option
/// and [`Option::try_some`](`crate::Option::try_some`) refuses them altogether.
pub trait Nullable {
	/// The type of the non-null value
	type Value: NotNull;

	/// Returns the non-null value or [`None`] if `self` is null
	fn into_value(self) -> Option<Self::Value>;
}

/// A type that can never hold a null value.
///
/// Only these types can be put into an [`Option`](`crate::Option`) with [`Option::some`](`crate::Option::some`).
/// Implement it for your own types if none of their values mean "nothing".
///
/// Types that implement [`Nullable`] (raw pointers, the standard [`Option`], JSON values) don't implement this trait:
///
/// ```compile_fail
/// let _ = maybe_option::Option::some(std::ptr::null::<u8>());
/// ```
///
/// ```compile_fail
/// let _ = maybe_option::Option::some(None::<i32>);
/// ```
///
/// ```compile_fail
/// let _ = maybe_option::Option::from(Some(std::ptr::null_mut::<u8>()));
/// ```
pub trait NotNull {}

macro_rules! impl_not_null {
	($($type:ty),+ $(,)?) => {
		$(impl NotNull for $type {})+
	};
}

impl_not_null!(
	(),
	bool,
	char,
	u8,
	u16,
	u32,
	u64,
	u128,
	usize,
	i8,
	i16,
	i32,
	i64,
	i128,
	isize,
	f32,
	f64,
	str,
	String,
	OsStr,
	OsString,
	Path,
	PathBuf,
	Duration,
);

// a pointer to a single value is null if its pointee is
impl<T: NotNull + ?Sized> NotNull for &T {}
impl<T: NotNull + ?Sized> NotNull for &mut T {}
impl<T: NotNull + ?Sized> NotNull for Box<T> {}
impl<T: NotNull + ?Sized> NotNull for Rc<T> {}
impl<T: NotNull + ?Sized> NotNull for Arc<T> {}
impl<T: NotNull + ToOwned + ?Sized> NotNull for Cow<'_, T> {}

impl<T: ?Sized> NotNull for NonNull<T> {}

// a collection is never null itself, even if it contains nulls
impl<T> NotNull for [T] {}
impl<T, const N: usize> NotNull for [T; N] {}
impl<T> NotNull for Vec<T> {}
impl<T> NotNull for VecDeque<T> {}
impl<T, S> NotNull for HashSet<T, S> {}
impl<T> NotNull for BTreeSet<T> {}
impl<K, V, S> NotNull for HashMap<K, V, S> {}
impl<K, V> NotNull for BTreeMap<K, V> {}
impl<T, E> NotNull for Result<T, E> {}

macro_rules! impl_not_null_for_tuples {
	($($type_name:ident)+) => {
		impl<$($type_name),+> NotNull for ($($type_name,)+) {}
	};
}

impl_not_null_for_tuples!(A1);
impl_not_null_for_tuples!(A1 A2);
impl_not_null_for_tuples!(A1 A2 A3);
impl_not_null_for_tuples!(A1 A2 A3 A4);
impl_not_null_for_tuples!(A1 A2 A3 A4 A5);
impl_not_null_for_tuples!(A1 A2 A3 A4 A5 A6);

impl<T: NotNull> Nullable for Option<T> {
	type Value = T;

	fn into_value(self) -> Option<Self::Value> {
		self
	}
}

impl<T> Nullable for *const T {
	type Value = NonNull<T>;

	fn into_value(self) -> Option<Self::Value> {
		NonNull::new(self.cast_mut())
	}
}

impl<T> Nullable for *mut T {
	type Value = NonNull<T>;

	fn into_value(self) -> Option<Self::Value> {
		NonNull::new(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_not_null<T: NotNull + ?Sized>() {}

	#[test]
	fn std_option() {
		assert_eq!(Some(5).into_value(), Some(5));
		assert_eq!(None::<i32>.into_value(), None);
	}

	#[test]
	fn null_pointers() {
		assert!(std::ptr::null::<u8>().into_value().is_none());
		assert!(std::ptr::null_mut::<u8>().into_value().is_none());
	}

	#[test]
	fn non_null_pointers() {
		let mut value = 42_u8;
		let ptr: *mut u8 = &mut value;

		assert_eq!(ptr.into_value().map(NonNull::as_ptr), Some(ptr));
		assert_eq!(
			ptr.cast_const().into_value().map(NonNull::as_ptr),
			Some(ptr)
		);
	}

	#[test]
	fn common_types_are_not_null() {
		assert_not_null::<i32>();
		assert_not_null::<&str>();
		assert_not_null::<String>();
		assert_not_null::<Box<str>>();
		assert_not_null::<Arc<Path>>();
		assert_not_null::<Cow<'static, str>>();
		assert_not_null::<NonNull<u8>>();
		assert_not_null::<Vec<Option<i32>>>();
		assert_not_null::<(i32, &str)>();
		assert_not_null::<Result<i32, String>>();
	}
}
