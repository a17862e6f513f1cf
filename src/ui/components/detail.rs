use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::countries::CountryRecord;
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

pub struct DetailContext<'a> {
	pub record: &'a CountryRecord,
	pub labels: &'a UiLabels,
	pub theme: &'a Theme,
}

/// Render the facts panel for the selected country.
///
/// Terminals cannot show the flag image itself, so the panel lists its URL and
/// alt text instead.
pub fn render_detail(frame: &mut Frame, area: Rect, ctx: DetailContext<'_>) {
	let DetailContext {
		record,
		labels,
		theme,
	} = ctx;

	let mut lines = vec![
		Line::styled(record.common_name(), theme.header_style()),
		Line::default(),
		field(&labels.flag_label, labels.or_missing(Some(record.flag_url())), theme),
	];
	if let Some(alt) = record.flag_alt() {
		lines.push(Line::styled(
			alt,
			theme.empty_style().add_modifier(Modifier::ITALIC),
		));
	}
	lines.push(field(&labels.capital_label, labels.or_missing(record.capital()), theme));
	lines.push(field(
		&labels.population_label,
		record.population.to_string(),
		theme,
	));
	lines.push(field(
		&labels.continent_label,
		labels.or_missing(record.continent()),
		theme,
	));

	let block = Block::bordered()
		.title(format!(" {} ", labels.detail_title))
		.border_style(theme.border_style(false));
	let paragraph = Paragraph::new(lines)
		.block(block)
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}

fn field(label: &str, value: impl Into<String>, theme: &Theme) -> Line<'static> {
	Line::from(vec![
		Span::styled(format!("{label}: "), theme.highlight_style()),
		Span::raw(value.into()),
	])
}
