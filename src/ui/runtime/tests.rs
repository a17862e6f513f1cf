use std::collections::VecDeque;
use std::sync::mpsc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::countries::{CountryRecord, Explorer};
use crate::ui::{App, Focus, UiLabels};

fn andes() -> Vec<CountryRecord> {
	vec![
		CountryRecord::new("Peru")
			.with_capital("Lima")
			.with_population(32_971_846)
			.with_continent("South America")
			.with_flag("https://flagcdn.com/w320/pe.png", Some("Red white red")),
		CountryRecord::new("Chile")
			.with_capital("Santiago")
			.with_population(19_116_209)
			.with_continent("South America"),
		CountryRecord::new("Peru Norte").with_population(1),
	]
}

fn loaded_app<'a>(records: Vec<CountryRecord>) -> App<'a> {
	let mut app = App::new(UiLabels::default());
	let (tx, rx) = mpsc::channel();
	app.set_load_updates(rx);
	tx.send(Explorer::from_dataset(records)).unwrap();
	app.pump_load_updates();
	app
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		assert!(app.handle_key(key(KeyCode::Char(ch))).is_none());
	}
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn selected_name(app: &App<'_>) -> Option<String> {
	app.explorer
		.selection()
		.map(|record| record.common_name().to_owned())
}

#[test]
fn loaded_list_starts_with_sentinel_and_shows_no_detail() {
	let mut app = loaded_app(andes());
	assert!(!app.is_loading());

	let view = render(&mut app);
	let sentinel = view.find("Select a country").expect("sentinel row");
	let peru = view.find("Peru").expect("peru row");
	assert!(sentinel < peru, "sentinel must come first\n{view}");
	assert!(view.contains("Chile"));
	assert!(view.contains("Countries: 3/3"));
	assert!(!view.contains("Details"), "no detail panel without selection\n{view}");
}

#[test]
fn pending_load_shows_spinner_label_and_typed_term_survives_hydration() {
	let mut app = App::new(UiLabels::default());
	let (tx, rx) = mpsc::channel();
	app.set_load_updates(rx);
	app.pump_load_updates();
	assert!(app.is_loading());
	assert!(render(&mut app).contains("Loading countries"));

	type_text(&mut app, "chi");
	assert_eq!(app.explorer.filtered_len(), 0);

	tx.send(Explorer::from_dataset(andes())).unwrap();
	app.pump_load_updates();
	assert!(!app.is_loading());
	assert_eq!(app.explorer.search_term(), "chi");
	assert_eq!(app.explorer.filtered_len(), 1);
}

#[test]
fn failed_load_renders_empty_list_without_error() {
	let mut app = loaded_app(Vec::new());
	let view = render(&mut app);
	assert!(view.contains("Select a country"));
	assert!(view.contains("No results"));
	assert!(view.contains("Countries: 0/0"));
	assert!(!view.contains("Details"));
}

#[test]
fn dropped_loader_stops_the_spinner() {
	let mut app = App::new(UiLabels::default());
	let (tx, rx) = mpsc::channel::<Explorer>();
	app.set_load_updates(rx);
	drop(tx);
	app.pump_load_updates();
	assert!(!app.is_loading());
	assert!(app.explorer.dataset().is_empty());
}

#[test]
fn typing_filters_and_enter_confirms_a_unique_match() {
	let mut app = loaded_app(andes());
	type_text(&mut app, "peru");
	assert_eq!(app.explorer.filtered_len(), 2);

	assert!(app.handle_key(key(KeyCode::Enter)).is_none());
	assert_eq!(selected_name(&app), None, "two matches leave selection alone");

	type_text(&mut app, " norte");
	assert!(app.handle_key(key(KeyCode::Enter)).is_none());
	assert_eq!(selected_name(&app).as_deref(), Some("Peru Norte"));
	assert_eq!(app.list_state.selected(), Some(1));

	let view = render(&mut app);
	assert!(view.contains("Details"));
	assert!(view.contains("Capital: —"), "absent capital falls back\n{view}");
	assert!(view.contains("Population: 1"));
	assert!(view.contains("Continent: —"));
}

#[test]
fn editing_the_search_clears_the_selection() {
	let mut app = loaded_app(andes());
	type_text(&mut app, "chile");
	app.handle_key(key(KeyCode::Enter));
	assert_eq!(selected_name(&app).as_deref(), Some("Chile"));

	app.handle_key(key(KeyCode::Backspace));
	assert_eq!(selected_name(&app), None);
	assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn moving_through_the_list_selects_like_a_dropdown() {
	let mut app = loaded_app(andes());
	app.handle_key(key(KeyCode::Tab));
	assert_eq!(app.focus, Focus::List);

	app.handle_key(key(KeyCode::Down));
	assert_eq!(selected_name(&app).as_deref(), Some("Peru"));

	app.handle_key(key(KeyCode::Down));
	assert_eq!(selected_name(&app).as_deref(), Some("Chile"));

	let view = render(&mut app);
	assert!(view.contains("Capital: Santiago"));
	assert!(view.contains("Population: 19116209"));
	assert!(view.contains("Continent: South America"));

	app.handle_key(key(KeyCode::Home));
	assert_eq!(selected_name(&app), None, "sentinel clears the selection");
}

#[test]
fn enter_in_the_list_is_passed_through() {
	let mut app = loaded_app(vec![CountryRecord::new("Chile")]);
	app.handle_key(key(KeyCode::Tab));
	assert!(app.handle_key(key(KeyCode::Enter)).is_none());
	assert_eq!(selected_name(&app), None);
}

#[test]
fn typing_in_the_list_returns_focus_to_search() {
	let mut app = loaded_app(andes());
	app.handle_key(key(KeyCode::Down));
	assert_eq!(app.focus, Focus::List);

	app.handle_key(key(KeyCode::Char('c')));
	assert_eq!(app.focus, Focus::Search);
	assert_eq!(app.search_input.text(), "c");
	assert_eq!(app.explorer.search_term(), "c");
}

#[test]
fn flag_details_render_url_and_alt_text() {
	let mut app = loaded_app(andes());
	app.handle_key(key(KeyCode::Down));
	app.handle_key(key(KeyCode::Down));
	let view = render(&mut app);
	assert!(view.contains("pe.png"), "{view}");
	assert!(view.contains("Red white red"));
}

#[test]
fn exit_keys_report_the_outcome() {
	let mut app = loaded_app(andes());
	type_text(&mut app, "chile");
	app.handle_key(key(KeyCode::Enter));

	let accepted = app
		.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
		.expect("accept outcome");
	assert!(accepted.accepted);
	assert_eq!(accepted.query, "chile");
	assert_eq!(
		accepted.selection.as_ref().map(CountryRecord::common_name),
		Some("Chile")
	);

	let cancelled = app.handle_key(key(KeyCode::Esc)).expect("cancel outcome");
	assert!(!cancelled.accepted);
}

#[test]
fn initial_query_is_applied_after_load() {
	let (mut app, _provider) = crate::ui::ExplorerUi::new(crate::countries::StaticProvider::default())
		.with_initial_query("PERU")
		.into_app();
	let (tx, rx) = mpsc::channel();
	app.set_load_updates(rx);
	tx.send(Explorer::from_dataset(andes())).unwrap();
	app.pump_load_updates();
	assert_eq!(app.search_input.text(), "PERU");
	assert_eq!(app.explorer.filtered_len(), 2);
}

#[test]
fn queued_events_apply_presses_until_exit() {
	let mut app = loaded_app(andes());
	let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
	release.kind = KeyEventKind::Release;

	let mut pending: VecDeque<Event> = [
		Event::Key(key(KeyCode::Char('c'))),
		Event::Key(release),
		Event::FocusGained,
		Event::Key(key(KeyCode::Char('h'))),
		Event::Key(key(KeyCode::Enter)),
	]
	.into_iter()
	.collect();
	assert!(app.drain_events(&mut pending).is_none());
	assert!(pending.is_empty());
	assert_eq!(app.search_input.text(), "ch");
	assert_eq!(selected_name(&app).as_deref(), Some("Chile"));

	pending.extend([
		Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
		Event::Key(key(KeyCode::Char('z'))),
	]);
	let outcome = app.drain_events(&mut pending).expect("accept outcome");
	assert!(outcome.accepted);
	assert_eq!(pending.len(), 1, "events after the exit key stay queued");
	assert_eq!(app.search_input.text(), "ch");
}
