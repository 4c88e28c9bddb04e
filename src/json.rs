/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! JSON `null` as the null value of [`serde_json::Value`]
//!
//! A [`Value`] may be `null`, so it can't be put into an [`Option`](`crate::Option`) directly:
//!
//! ```compile_fail
//! let _ = maybe_option::Option::some(serde_json::Value::Null);
//! ```
//!
//! Use [`Option::from_nullable`](`crate::Option::from_nullable`) instead. It holds a [`NonNullJson`] if the value wasn't `null`:
//!
//! ```
//! use maybe_option::{Option, json::NonNullJson};
//! use serde_json::json;
//!
//! let option: Option<NonNullJson> = Option::from_nullable(json!({ "id": 1 }));
//! assert_eq!(option.unwrap().into_inner(), json!({ "id": 1 }));
//!
//! assert!(Option::from_nullable(json!(null)).is_none());
//! ```

use std::ops::Deref;

use serde_json::{Map, Number, Value};

use crate::{NotNull, Nullable};

/// A JSON value that is guaranteed not to be `null`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonNullJson(Value);

impl NonNullJson {
	/// Creates a new [`NonNullJson`] from a [`Value`].
	///
	/// Returns None if the value is `null`
	#[must_use]
	pub fn new(value: Value) -> Option<Self> {
		if value.is_null() {
			None
		} else {
			Some(Self(value))
		}
	}

	/// Gets a reference to the underlying [`Value`]
	#[must_use]
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// Converts the [`NonNullJson`] back into a [`Value`], consuming self
	#[must_use]
	pub fn into_inner(self) -> Value {
		self.0
	}
}

impl Deref for NonNullJson {
	type Target = Value;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<NonNullJson> for Value {
	fn from(value: NonNullJson) -> Self {
		value.0
	}
}

impl NotNull for NonNullJson {}
impl NotNull for Number {}
impl NotNull for Map<String, Value> {}

impl Nullable for Value {
	type Value = NonNullJson;

	fn into_value(self) -> Option<Self::Value> {
		NonNullJson::new(self)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn new_with_null() {
		assert!(NonNullJson::new(Value::Null).is_none());
	}

	#[test]
	fn new_with_falsy_values() {
		for value in [json!(0), json!(false), json!(""), json!([]), json!({})] {
			let non_null = NonNullJson::new(value.clone()).unwrap();
			assert_eq!(non_null.as_value(), &value);
		}
	}

	#[test]
	fn nested_null_is_not_null() {
		let array = NonNullJson::new(json!([null])).unwrap();
		assert_eq!(array[0], Value::Null);
	}

	#[test]
	fn into_value() {
		assert!(Value::Null.into_value().is_none());
		assert_eq!(
			json!("a").into_value().map(NonNullJson::into_inner),
			Some(json!("a"))
		);
	}
}
