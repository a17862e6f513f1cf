use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::App;
use super::components::{
	DetailContext, ListContext, PromptContext, StatusState, render_country_list, render_detail,
	render_prompt,
};
use super::state::Focus;

impl<'a> App<'a> {
	/// Draw the whole screen from current state.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1)])
			.split(area);

		let status_text = self.status_text();
		render_prompt(
			frame,
			PromptContext {
				search_input: &mut self.search_input,
				labels: &self.labels,
				focused: self.focus == Focus::Search,
				area: rows[0],
				theme: &self.theme,
			},
			StatusState {
				text: &status_text,
				loading: self.loading,
				throbber_state: &self.throbber_state,
			},
		);

		self.render_body(frame, rows[1]);
	}

	fn render_body(&mut self, frame: &mut Frame, area: Rect) {
		let (list_area, detail_area) = if self.explorer.selection().is_some() {
			let columns = Layout::default()
				.direction(Direction::Horizontal)
				.constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
				.split(area);
			(columns[0], Some(columns[1]))
		} else {
			(area, None)
		};

		render_country_list(
			frame,
			list_area,
			&mut self.list_state,
			ListContext {
				explorer: &self.explorer,
				labels: &self.labels,
				focused: self.focus == Focus::List,
				loading: self.loading,
				theme: &self.theme,
			},
		);

		if let (Some(area), Some(record)) = (detail_area, self.explorer.selection()) {
			render_detail(
				frame,
				area,
				DetailContext {
					record,
					labels: &self.labels,
					theme: &self.theme,
				},
			);
		}
	}

	fn status_text(&self) -> String {
		if self.loading {
			return format!(" {}", self.labels.loading_label);
		}
		format!(
			"{}: {}/{}",
			self.labels.count_label,
			self.explorer.filtered_len(),
			self.explorer.dataset().len()
		)
	}
}
