/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Maybe`], the presence tag of an [`Option`](crate::Option)

use std::fmt::{self, Display};

/// Whether an [`Option`](`crate::Option`) holds a value or not
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maybe {
	/// The option holds a value
	Some,

	/// The option is empty
	None,
}

impl Display for Maybe {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Maybe::Some => "Some",
			Maybe::None => "None",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		assert_eq!(Maybe::Some.to_string(), "Some");
		assert_eq!(Maybe::None.to_string(), "None");
	}

	#[test]
	fn variants_are_distinct() {
		assert_ne!(Maybe::Some, Maybe::None);
	}
}
