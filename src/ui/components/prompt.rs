use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::config::UiLabels;
use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

pub struct PromptContext<'a, 'b> {
	pub search_input: &'a mut SearchInput<'b>,
	pub labels: &'a UiLabels,
	pub focused: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

pub struct StatusState<'a> {
	pub text: &'a str,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render `title > [input]` followed by the right-aligned status text.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_, '_>, status: StatusState<'_>) {
	let PromptContext {
		search_input,
		labels,
		focused,
		area,
		theme,
	} = prompt;

	let prompt_text = format!("{} > ", labels.input_title);
	let status_spans = status_line(&status, theme);
	let status_width = status_spans.width() as u16;

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_text.width() as u16),
			Constraint::Min(1),
			Constraint::Length(status_width.saturating_add(1)),
		])
		.split(area);

	frame.render_widget(
		Paragraph::new(prompt_text).style(theme.prompt_style()),
		columns[0],
	);
	search_input.render(frame, columns[1], focused, Style::default());
	frame.render_widget(
		Paragraph::new(status_spans).alignment(Alignment::Right),
		columns[2],
	);
}

fn status_line<'a>(status: &StatusState<'a>, theme: &Theme) -> Line<'a> {
	let muted = theme.empty_style();
	let mut line = Line::default();
	if status.loading {
		let spinner = Throbber::default().style(muted).throbber_style(muted);
		line.spans.push(spinner.to_symbol_span(status.throbber_state));
	}
	line.spans.push(Span::styled(status.text, muted));
	line
}
