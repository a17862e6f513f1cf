//! Diagnostics for the explorer.
//!
//! Library code only emits `tracing` events. The binary decides where they go:
//! the interactive UI owns the terminal, so it logs to a file under the cache
//! directory, while one-shot commands log to stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "COUNTRY_EXPLORER_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "country-explorer.log";

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

/// Default log file inside the cache directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed or the log file cannot be
/// opened. A file target only holds the current session.
pub fn initialize(target: LogTarget) -> Result<()> {
	let builder = tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_target(false);

	let installed = match target {
		LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
		LogTarget::File(path) => builder
			.with_ansi(false)
			.with_writer(Mutex::new(open_log_file(&path)?))
			.try_init(),
	};

	installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Open the log file, discarding whatever an earlier session wrote.
fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.write(true)
		.truncate(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn log_file_starts_empty_each_session() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("logs").join(LOG_FILE_NAME);

		let mut first = open_log_file(&path).expect("first open");
		writeln!(first, "previous session").expect("write");
		drop(first);
		assert!(fs::metadata(&path).expect("metadata").len() > 0);

		let _second = open_log_file(&path).expect("second open");
		assert_eq!(fs::read_to_string(&path).expect("read"), "");
	}
}
