/// Text shown by the UI: prompts, titles, field labels and fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub input_title: String,
	pub placeholder: String,
	/// Leading list entry that stands for "no selection".
	pub sentinel: String,
	pub list_title: String,
	pub detail_title: String,
	pub flag_label: String,
	pub capital_label: String,
	pub population_label: String,
	pub continent_label: String,
	/// Rendered in place of an absent capital or continent.
	pub missing_value: String,
	pub loading_label: String,
	pub count_label: String,
	pub empty_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			input_title: "Country".to_string(),
			placeholder: "Search a country...".to_string(),
			sentinel: "Select a country".to_string(),
			list_title: "Countries".to_string(),
			detail_title: "Details".to_string(),
			flag_label: "Flag".to_string(),
			capital_label: "Capital".to_string(),
			population_label: "Population".to_string(),
			continent_label: "Continent".to_string(),
			missing_value: "—".to_string(),
			loading_label: "Loading countries".to_string(),
			count_label: "Countries".to_string(),
			empty_label: "No results".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
		self.sentinel = sentinel.into();
		self
	}

	#[must_use]
	pub fn with_missing_value(mut self, missing: impl Into<String>) -> Self {
		self.missing_value = missing.into();
		self
	}

	/// Fallback-aware text for an optional field.
	#[must_use]
	pub fn or_missing<'a>(&'a self, value: Option<&'a str>) -> &'a str {
		match value {
			Some(value) if !value.trim().is_empty() => value,
			_ => &self.missing_value,
		}
	}
}
