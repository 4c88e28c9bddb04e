/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`OptionError`]

/// Errors that may happen when creating or unwrapping an [`Option`](`crate::Option`)
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OptionError {
	/// A populated option was requested from a null value
	#[error("cannot create a populated option from a null value")]
	NullValue,

	/// An empty option was unwrapped without a fallback
	#[error("called `unwrap()` on an empty option")]
	UnwrapNone,
}
