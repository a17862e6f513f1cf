//! The explorer state machine.
//!
//! [`Explorer`] has exactly four mutators: [`Explorer::initialize`] (or
//! [`Explorer::try_initialize`]), [`Explorer::update_search`],
//! [`Explorer::select_by_name`] and [`Explorer::confirm_on_enter`]. The
//! selection is owned by the [`FilteredView`], and a new view is built for
//! every search, so changing the term can never leave a stale selection behind.

use std::sync::Arc;

use anyhow::Error;
use tracing::{debug, error, info};

use super::{CountryRecord, DataProvider, FetchError};

/// Dataset plus the view derived from the current search term.
#[derive(Debug, Clone)]
pub struct Explorer {
	dataset: Arc<[CountryRecord]>,
	view: FilteredView,
}

/// Records matching a search term, stored as dataset positions, and the
/// selection made among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
	term: String,
	matches: Vec<usize>,
	selected: Option<usize>,
}

impl FilteredView {
	fn compute(dataset: &[CountryRecord], term: String) -> Self {
		let needle = term.to_lowercase();
		let matches = dataset
			.iter()
			.enumerate()
			.filter(|(_, record)| record.name_contains_lowercase(&needle))
			.map(|(idx, _)| idx)
			.collect();
		Self {
			term,
			matches,
			selected: None,
		}
	}

	/// Raw search term as typed.
	#[must_use]
	pub fn term(&self) -> &str {
		&self.term
	}

	/// Dataset positions of the matching records, in dataset order.
	#[must_use]
	pub fn positions(&self) -> &[usize] {
		&self.matches
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.matches.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.matches.is_empty()
	}

	/// Dataset position of the selected record.
	#[must_use]
	pub fn selected_position(&self) -> Option<usize> {
		self.selected
	}
}

impl Default for Explorer {
	fn default() -> Self {
		Self::empty()
	}
}

impl Explorer {
	/// Explorer with no data. Searching and selecting are accepted but have
	/// nothing to act on.
	#[must_use]
	pub fn empty() -> Self {
		Self::from_dataset(Vec::new())
	}

	/// Explorer over an already loaded dataset, with an empty search term.
	#[must_use]
	pub fn from_dataset(records: Vec<CountryRecord>) -> Self {
		let dataset: Arc<[CountryRecord]> = records.into();
		let view = FilteredView::compute(&dataset, String::new());
		Self { dataset, view }
	}

	/// Load the dataset with a single provider call.
	pub fn try_initialize(provider: &dyn DataProvider) -> Result<Self, FetchError> {
		let records = provider.fetch_all()?;
		info!(
			provider = %provider.describe(),
			count = records.len(),
			"countries: dataset loaded"
		);
		Ok(Self::from_dataset(records))
	}

	/// Load the dataset, logging and swallowing any failure.
	///
	/// On failure the explorer is left empty. There is no retry.
	#[must_use]
	pub fn initialize(provider: &dyn DataProvider) -> Self {
		match Self::try_initialize(provider) {
			Ok(explorer) => explorer,
			Err(err) => {
				error!(
					provider = %provider.describe(),
					"countries: failed to load dataset: {:#}",
					Error::new(err)
				);
				Self::empty()
			}
		}
	}

	/// Replace the search term, recompute the filtered view and clear the
	/// selection.
	pub fn update_search(&mut self, term: impl Into<String>) {
		self.view = FilteredView::compute(&self.dataset, term.into());
		debug!(
			term = %self.view.term,
			matches = self.view.len(),
			"countries: search updated"
		);
	}

	/// Select the first filtered record whose common name equals `name`
	/// exactly. Anything else, the empty sentinel included, clears the
	/// selection.
	pub fn select_by_name(&mut self, name: &str) {
		self.view.selected = self
			.view
			.matches
			.iter()
			.copied()
			.find(|&idx| self.dataset[idx].common_name() == name);
	}

	/// Commit the only remaining match, if there is exactly one.
	///
	/// Returns whether a selection was made. With zero or several matches the
	/// selection is left untouched.
	pub fn confirm_on_enter(&mut self) -> bool {
		match self.view.matches.as_slice() {
			[only] => {
				self.view.selected = Some(*only);
				true
			}
			_ => false,
		}
	}

	/// Full dataset in provider order.
	#[must_use]
	pub fn dataset(&self) -> &[CountryRecord] {
		&self.dataset
	}

	#[must_use]
	pub fn view(&self) -> &FilteredView {
		&self.view
	}

	#[must_use]
	pub fn search_term(&self) -> &str {
		self.view.term()
	}

	/// Records in the filtered view, in dataset order.
	pub fn filtered(&self) -> impl ExactSizeIterator<Item = &CountryRecord> + '_ {
		self.view.matches.iter().map(|&idx| &self.dataset[idx])
	}

	#[must_use]
	pub fn filtered_len(&self) -> usize {
		self.view.len()
	}

	#[must_use]
	pub fn selection(&self) -> Option<&CountryRecord> {
		self.view.selected.map(|idx| &self.dataset[idx])
	}
}

#[cfg(test)]
mod tests;
