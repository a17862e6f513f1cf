use anyhow::Result;

use super::App;
use super::config::UiLabels;
use super::state::ExplorerOutcome;
use super::style::{self, Theme};
use crate::countries::DataProvider;

/// Builder for configuring the interactive explorer before launching it.
pub struct ExplorerUi {
	provider: Box<dyn DataProvider + Send>,
	labels: UiLabels,
	theme: Option<Theme>,
	initial_query: Option<String>,
}

impl ExplorerUi {
	/// Create an explorer that will load its dataset from `provider`.
	pub fn new(provider: impl DataProvider + Send + 'static) -> Self {
		Self {
			provider: Box::new(provider),
			labels: UiLabels::default(),
			theme: None,
			initial_query: None,
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a bundled theme by name. Unknown names keep the default.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Build the [`App`] without starting the terminal.
	pub fn into_app<'a>(self) -> (App<'a>, Box<dyn DataProvider + Send>) {
		let mut app = App::new(self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query.filter(|query| !query.is_empty()) {
			app.set_initial_query(query);
		}
		(app, self.provider)
	}

	/// Run the interactive explorer until the user exits.
	pub fn run(self) -> Result<ExplorerOutcome> {
		let (mut app, provider) = self.into_app();
		app.run(provider)
	}
}
