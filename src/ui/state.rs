//! State container for the terminal front-end.
//!
//! [`App`] pairs the [`Explorer`] state machine with the widgets that drive it:
//! the search field, the list highlight and the focus marker. The explorer is
//! the single source of truth for the filtered list and the selection; the
//! widgets only mirror it.

use std::sync::mpsc::Receiver;

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiLabels;
use super::input::SearchInput;
use super::style::Theme;
use crate::countries::{CountryRecord, Explorer};

/// Which control receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Search,
	List,
}

impl Focus {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Search => Self::List,
			Self::List => Self::Search,
		}
	}
}

/// Result handed back when the UI exits.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerOutcome {
	pub accepted: bool,
	pub query: String,
	pub selection: Option<CountryRecord>,
}

pub struct App<'a> {
	pub explorer: Explorer,
	pub search_input: SearchInput<'a>,
	/// Highlighted list row. Row 0 is the "no selection" sentinel.
	pub list_state: ListState,
	pub focus: Focus,
	pub theme: Theme,
	pub(crate) labels: UiLabels,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) load_updates: Option<Receiver<Explorer>>,
	pub(crate) loading: bool,
}

impl<'a> App<'a> {
	/// Construct an [`App`] with no data loaded yet.
	#[must_use]
	pub fn new(labels: UiLabels) -> Self {
		let mut search_input = SearchInput::new(String::new());
		let theme = Theme::default();
		search_input.set_placeholder(labels.placeholder.clone(), theme.empty_style());
		Self {
			explorer: Explorer::empty(),
			search_input,
			list_state: ListState::default().with_selected(Some(0)),
			focus: Focus::Search,
			theme,
			labels,
			throbber_state: ThrobberState::default(),
			load_updates: None,
			loading: false,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_placeholder(self.labels.placeholder.clone(), theme.empty_style());
	}

	/// Pre-fill the search field. The term is applied to the explorer now and
	/// again once the dataset arrives.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		let mut search_input = SearchInput::new(query);
		search_input.set_placeholder(self.labels.placeholder.clone(), self.theme.empty_style());
		self.search_input = search_input;
		self.apply_search();
	}

	#[must_use]
	pub fn labels(&self) -> &UiLabels {
		&self.labels
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Push the current field text into the explorer and park the list
	/// highlight on the sentinel, since the search cleared the selection.
	pub(crate) fn apply_search(&mut self) {
		let term = self.search_input.text().to_owned();
		self.explorer.update_search(term);
		self.list_state.select(Some(0));
	}

	/// Number of rows in the list, sentinel included.
	pub(crate) fn list_len(&self) -> usize {
		self.explorer.filtered_len() + 1
	}

	/// Mirror the list highlight into the explorer selection, like a
	/// dropdown's change event.
	pub(crate) fn sync_selection_from_list(&mut self) {
		let row = self.list_state.selected().unwrap_or(0);
		let name = match row {
			0 => String::new(),
			row => self
				.explorer
				.filtered()
				.nth(row - 1)
				.map(|record| record.common_name().to_owned())
				.unwrap_or_default(),
		};
		self.explorer.select_by_name(&name);
	}

	/// Move the list highlight to the row of the current selection.
	pub(crate) fn sync_list_from_selection(&mut self) {
		let position = self.explorer.view().selected_position();
		let row = position
			.and_then(|selected| {
				self.explorer
					.view()
					.positions()
					.iter()
					.position(|&idx| idx == selected)
			})
			.map_or(0, |row| row + 1);
		self.list_state.select(Some(row));
	}

	pub(crate) fn outcome(&self, accepted: bool) -> ExplorerOutcome {
		ExplorerOutcome {
			accepted,
			query: self.search_input.text().to_owned(),
			selection: self.explorer.selection().cloned(),
		}
	}
}
