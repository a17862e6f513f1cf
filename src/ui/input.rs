//! Single-line search field built on `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>, style: Style) {
		let text: String = text.into();
		self.textarea.set_placeholder_text(text);
		self.textarea.set_placeholder_style(style);
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the field. Returns `true` when the text changed.
	///
	/// Keys that would split the line are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(key) {
			return false;
		}
		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, style: Style) {
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		self.textarea.set_style(style);
		frame.render_widget(&self.textarea, area);
	}
}

fn is_line_break(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
