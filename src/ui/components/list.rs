use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::countries::Explorer;
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

pub struct ListContext<'a> {
	pub explorer: &'a Explorer,
	pub labels: &'a UiLabels,
	pub focused: bool,
	pub loading: bool,
	pub theme: &'a Theme,
}

/// Render the sentinel row followed by the filtered country names.
pub fn render_country_list(
	frame: &mut Frame,
	area: Rect,
	state: &mut ListState,
	ctx: ListContext<'_>,
) {
	let ListContext {
		explorer,
		labels,
		focused,
		loading,
		theme,
	} = ctx;

	let sentinel = ListItem::new(Line::styled(labels.sentinel.as_str(), theme.empty_style()));
	let items: Vec<ListItem> = std::iter::once(sentinel)
		.chain(
			explorer
				.filtered()
				.map(|record| ListItem::new(record.common_name())),
		)
		.collect();

	let highlight = if focused {
		theme.row_highlight_style()
	} else {
		theme.inactive_highlight_style()
	};
	let block = Block::bordered()
		.title(format!(" {} ", labels.list_title))
		.border_style(theme.border_style(focused));
	let inner = block.inner(area);
	let list = List::new(items)
		.block(block)
		.highlight_style(highlight)
		.highlight_symbol("> ");
	frame.render_stateful_widget(list, area, state);

	if explorer.filtered_len() == 0 && !loading && inner.height > 2 {
		let message_area = Rect {
			y: inner.y + 2,
			height: inner.height - 2,
			..inner
		};
		let empty = Paragraph::new(labels.empty_label.as_str())
			.alignment(Alignment::Center)
			.style(theme.empty_style());
		frame.render_widget(empty, message_area);
	}
}
