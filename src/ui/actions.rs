use std::collections::VecDeque;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use super::state::{ExplorerOutcome, Focus};

impl<'a> App<'a> {
	/// Apply queued terminal events in order until one ends the session.
	///
	/// Only key presses are handled. Events after the exiting key stay queued.
	pub(crate) fn drain_events(&mut self, pending: &mut VecDeque<Event>) -> Option<ExplorerOutcome> {
		while let Some(event) = pending.pop_front() {
			if let Event::Key(key) = event
				&& key.kind == KeyEventKind::Press
				&& let Some(outcome) = self.handle_key(key)
			{
				return Some(outcome);
			}
		}
		None
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<ExplorerOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Char('c') if ctrl => return Some(self.outcome(false)),
			KeyCode::Char('s') if ctrl => return Some(self.outcome(true)),
			KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
				return Some(self.outcome(true));
			}
			KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggled(),
			_ => match self.focus {
				Focus::Search => self.handle_search_key(key),
				Focus::List => self.handle_list_key(key),
			},
		}
		None
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => {
				if self.explorer.confirm_on_enter() {
					self.sync_list_from_selection();
				}
			}
			KeyCode::Down => self.focus = Focus::List,
			_ => {
				if self.search_input.input(key) {
					self.apply_search();
				}
			}
		}
	}

	fn handle_list_key(&mut self, key: KeyEvent) {
		let len = self.list_len();
		let current = self.list_state.selected().unwrap_or(0);
		let target = match key.code {
			KeyCode::Up if current == 0 => {
				self.focus = Focus::Search;
				return;
			}
			KeyCode::Up => current - 1,
			KeyCode::Down => (current + 1).min(len - 1),
			KeyCode::PageUp => current.saturating_sub(10),
			KeyCode::PageDown => (current + 10).min(len - 1),
			KeyCode::Home => 0,
			KeyCode::End => len - 1,
			KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete
				if !key.modifiers.contains(KeyModifiers::CONTROL) =>
			{
				self.focus = Focus::Search;
				self.handle_search_key(key);
				return;
			}
			_ => return,
		};

		if target != current {
			self.list_state.select(Some(target));
			self.sync_selection_from_list();
		}
	}
}
