//! Layered configuration for the binary.
//!
//! Sources, lowest priority first: built-in defaults, the default config files,
//! `--config` files, `COUNTRY_EXPLORER__*` environment variables, then CLI
//! flags.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use country_explorer::ui::style;
use country_explorer::{DEFAULT_ENDPOINT, UiLabels, app_dirs};
use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	provider: ProviderSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProviderSection {
	endpoint: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	initial_query: Option<String>,
	theme: Option<String>,
	input_title: Option<String>,
	placeholder: Option<String>,
	sentinel: Option<String>,
	missing_value: Option<String>,
}

pub struct ResolvedConfig {
	pub endpoint: String,
	pub timeout: Option<Duration>,
	pub initial_query: String,
	pub theme: Option<String>,
	pub labels: UiLabels,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Endpoint: {}", self.endpoint);
		match self.timeout {
			Some(timeout) => println!("  Timeout: {}s", timeout.as_secs()),
			None => println!("  Timeout: none"),
		}
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Prompt title: {}", self.labels.input_title);
		println!("  Placeholder: {}", self.labels.placeholder);
		println!("  No-selection entry: {}", self.labels.sentinel);
		println!("  Missing value: {}", self.labels.missing_value);
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("country_explorer")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".country-explorer.toml"));
		files.push(current_dir.join("country-explorer.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.provider.endpoint = Some(endpoint);
		}
		if let Some(timeout) = cli.timeout_secs {
			self.provider.timeout_secs = Some(timeout);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let endpoint = self
			.provider
			.endpoint
			.map(|endpoint| endpoint.trim().to_string())
			.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
		ensure!(
			endpoint.starts_with("http://") || endpoint.starts_with("https://"),
			"endpoint must be an http(s) URL, got '{endpoint}'"
		);

		let timeout = match self.provider.timeout_secs {
			Some(0) => bail!("timeout must be greater than zero"),
			Some(secs) => Some(Duration::from_secs(secs)),
			None => None,
		};

		let theme = self.ui.theme.filter(|name| !name.trim().is_empty());
		if let Some(name) = &theme
			&& style::by_name(name).is_none()
		{
			let known: Vec<_> = style::names().collect();
			bail!("unknown theme '{name}' (available: {})", known.join(", "));
		}

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.input_title {
			labels.input_title = title;
		}
		if let Some(placeholder) = self.ui.placeholder {
			labels = labels.with_placeholder(placeholder);
		}
		if let Some(sentinel) = self.ui.sentinel {
			labels = labels.with_sentinel(sentinel);
		}
		if let Some(missing) = self.ui.missing_value {
			labels = labels.with_missing_value(missing);
		}

		Ok(ResolvedConfig {
			endpoint,
			timeout,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme,
			labels,
		})
	}
}
