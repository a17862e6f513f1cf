use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use country_explorer::app_dirs;

/// Produce the full version banner including the config and log directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let cache_dir = match app_dirs::get_cache_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("country-explorer {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "log directory: {cache_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "country-explorer",
	version,
	long_version = long_version(),
	about = "Browse the public country list: filter by name, pick a country, read its facts",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `country-explorer` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "COUNTRY_EXPLORER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Country list endpoint (default: restcountries.com v3.1 /all)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Give up on the initial request after this many seconds (default: wait indefinitely)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Initial search term (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List the bundled themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(long = "print-config", help = "Print the effective configuration and exit")]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list",
		help = "Fetch, filter by --query and print matches without starting the UI"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn command_definition_is_consistent() {
		let command = cli_command();
		assert!(command.get_about().is_some());
		command.debug_assert();
	}

	#[test]
	fn defaults_without_arguments() {
		let parsed = CliArgs::try_parse_from(["country-explorer"]).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.endpoint.is_none());
		assert!(!parsed.list);
	}

	#[test]
	fn accepts_list_mode_with_query_and_json() {
		let parsed =
			CliArgs::try_parse_from(["country-explorer", "-l", "-q", "peru", "-o", "json", "--timeout", "5"])
				.expect("parses");
		assert!(parsed.list);
		assert_eq!(parsed.initial_query.as_deref(), Some("peru"));
		assert_eq!(parsed.output, OutputFormat::Json);
		assert_eq!(parsed.timeout_secs, Some(5));
	}
}
