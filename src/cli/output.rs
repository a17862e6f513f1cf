use anyhow::Result;
use country_explorer::{CountryRecord, Explorer, ExplorerOutcome};
use serde_json::json;

/// Plain-text rendering of the explorer outcome.
pub(crate) fn format_plain(outcome: &ExplorerOutcome, missing: &str) -> String {
	if !outcome.accepted {
		return format!("Exploration cancelled (query: '{}')", outcome.query);
	}

	match &outcome.selection {
		Some(record) => format!(
			"{}\nCapital: {}\nPopulation: {}\nContinent: {}\nFlag: {}",
			record.common_name(),
			record.capital().unwrap_or(missing),
			record.population,
			record.continent().unwrap_or(missing),
			record.flag_url(),
		),
		None => "No selection".to_string(),
	}
}

/// Print a plain-text representation of the explorer outcome.
pub(crate) fn print_plain(outcome: &ExplorerOutcome, missing: &str) {
	println!("{}", format_plain(outcome, missing));
}

/// Format the explorer outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &ExplorerOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(record) => json!({
			"name": record.common_name(),
			"capital": record.capital(),
			"population": record.population,
			"continent": record.continent(),
			"flag": {
				"png": record.flag_url(),
				"alt": record.flag_alt(),
			},
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the explorer outcome.
pub(crate) fn print_json(outcome: &ExplorerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Print the explorer's filtered view: names one per line, or the full
/// provider records as a JSON array.
pub(crate) fn print_listing(explorer: &Explorer, json: bool) -> Result<()> {
	if json {
		let records: Vec<&CountryRecord> = explorer.filtered().collect();
		println!("{}", serde_json::to_string_pretty(&records)?);
	} else {
		for record in explorer.filtered() {
			println!("{}", record.common_name());
		}
	}
	Ok(())
}
