mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_listing, print_plain};
use country_explorer::logging::{self, LogTarget};
use country_explorer::{Explorer, ExplorerUi, HttpProvider};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in country_explorer::ui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(());
	}

	if cli.list {
		if let Err(err) = logging::initialize(LogTarget::Stderr) {
			eprintln!("warning: {err:#}");
		}
		return list_countries(cli.output, &resolved);
	}

	let log_file = logging::default_log_file()?;
	if let Err(err) = logging::initialize(LogTarget::File(log_file)) {
		eprintln!("warning: logging disabled: {err:#}");
	}
	run_explorer(cli.output, resolved)
}

fn provider_for(settings: &ResolvedConfig) -> Result<HttpProvider> {
	Ok(HttpProvider::new(settings.endpoint.clone(), settings.timeout)?)
}

/// Load once, apply the query and print the matches.
fn list_countries(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let provider = provider_for(settings)?;
	let mut explorer = Explorer::initialize(&provider);
	explorer.update_search(settings.initial_query.clone());
	print_listing(&explorer, format == OutputFormat::Json)
}

/// Run the interactive explorer and print the outcome in the chosen format.
fn run_explorer(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let provider = provider_for(&settings)?;
	let missing = settings.labels.missing_value.clone();

	let mut ui = ExplorerUi::new(provider)
		.with_labels(settings.labels)
		.with_initial_query(settings.initial_query);
	if let Some(theme) = &settings.theme {
		ui = ui.with_theme_name(theme);
	}
	let outcome = ui.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome, &missing),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
