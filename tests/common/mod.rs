/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Installs a tracing subscriber that writes through the test harness' captured output.
///
/// Defaults to INFO, set `RUST_LOG=maybe_option=trace` to see the events of the crate.
/// Does nothing if another subscriber has already been registered by a different test.
pub fn set_up_logging() {
	let env_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::INFO.into())
		.from_env_lossy();

	if tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_test_writer()
		.try_init()
		.is_err()
	{
		tracing::debug!("A tracing subscriber has already been set up");
	}
}
