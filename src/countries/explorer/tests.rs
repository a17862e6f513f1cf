use super::*;
use crate::countries::StaticProvider;

struct FailingProvider;

impl DataProvider for FailingProvider {
	fn describe(&self) -> String {
		"failing".into()
	}

	fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
		Err(crate::countries::parse_records("failing", "not json").expect_err("invalid payload"))
	}
}

struct PayloadProvider(&'static str);

impl DataProvider for PayloadProvider {
	fn describe(&self) -> String {
		"payload".into()
	}

	fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
		crate::countries::parse_records("payload", self.0)
	}
}

fn andes() -> Vec<CountryRecord> {
	vec![
		CountryRecord::new("Peru")
			.with_capital("Lima")
			.with_population(32_971_846)
			.with_continent("South America"),
		CountryRecord::new("Chile")
			.with_capital("Santiago")
			.with_population(19_116_209)
			.with_continent("South America"),
		CountryRecord::new("Peru Norte").with_population(1),
	]
}

fn names(explorer: &Explorer) -> Vec<&str> {
	explorer.filtered().map(CountryRecord::common_name).collect()
}

#[test]
fn initialize_populates_dataset_and_view_in_provider_order() {
	let explorer = Explorer::initialize(&StaticProvider::new(andes()));
	assert_eq!(explorer.dataset().len(), 3);
	assert_eq!(names(&explorer), ["Peru", "Chile", "Peru Norte"]);
	assert_eq!(explorer.search_term(), "");
	assert!(explorer.selection().is_none());
}

#[test]
fn failed_initialize_leaves_explorer_empty_and_inert() {
	let mut explorer = Explorer::initialize(&FailingProvider);
	assert!(explorer.dataset().is_empty());
	assert_eq!(explorer.filtered_len(), 0);

	explorer.update_search("peru");
	explorer.select_by_name("Peru");
	assert!(!explorer.confirm_on_enter());
	assert_eq!(explorer.filtered_len(), 0);
	assert!(explorer.selection().is_none());
}

#[test]
fn one_bad_record_does_not_empty_the_dataset() {
	let mut explorer = Explorer::initialize(&PayloadProvider(
		r#"[{"name":{"common":"Peru"}},{"name":{"official":"Unnamed"}},{"name":{"common":"Chile"}}]"#,
	));
	assert_eq!(names(&explorer), ["Peru", "Chile"]);

	explorer.update_search("chi");
	assert!(explorer.confirm_on_enter());
	assert_eq!(explorer.selection().map(CountryRecord::common_name), Some("Chile"));
}

#[test]
fn try_initialize_surfaces_the_error() {
	let err = Explorer::try_initialize(&FailingProvider).expect_err("fetch should fail");
	assert!(err.is_parse());
}

#[test]
fn search_is_case_insensitive_and_preserves_order() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.update_search("peru");
	assert_eq!(names(&explorer), ["Peru", "Peru Norte"]);

	explorer.update_search("PERU");
	assert_eq!(names(&explorer), ["Peru", "Peru Norte"]);
	assert_eq!(explorer.search_term(), "PERU");
}

#[test]
fn every_match_contains_the_term_and_view_is_a_subsequence() {
	let dataset = andes();
	let mut explorer = Explorer::from_dataset(dataset.clone());
	for term in ["", "e", "ER", "chi", " ", "zz", "peru norte"] {
		explorer.update_search(term);
		let needle = term.to_lowercase();
		assert!(explorer.filtered_len() <= dataset.len());
		assert!(
			explorer
				.filtered()
				.all(|record| record.common_name().to_lowercase().contains(&needle))
		);
		let positions = explorer.view().positions();
		assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
	}
}

#[test]
fn empty_term_restores_full_dataset() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.update_search("chile");
	explorer.update_search("");
	assert_eq!(names(&explorer), ["Peru", "Chile", "Peru Norte"]);
}

#[test]
fn repeated_search_is_idempotent() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.update_search("er");
	let once = explorer.view().clone();
	explorer.update_search("er");
	assert_eq!(explorer.view(), &once);
}

#[test]
fn search_always_clears_selection() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.select_by_name("Chile");
	assert_eq!(explorer.selection().map(CountryRecord::common_name), Some("Chile"));

	explorer.update_search("");
	assert!(explorer.selection().is_none());

	explorer.update_search("chile");
	assert!(explorer.confirm_on_enter());
	explorer.update_search("chile");
	assert!(explorer.selection().is_none());
}

#[test]
fn select_by_name_is_exact_and_scoped_to_the_view() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.update_search("peru");

	explorer.select_by_name("peru");
	assert!(explorer.selection().is_none(), "match is case-sensitive");

	explorer.select_by_name("Chile");
	assert!(explorer.selection().is_none(), "Chile is filtered out");

	explorer.select_by_name("Peru Norte");
	assert_eq!(explorer.selection().map(CountryRecord::common_name), Some("Peru Norte"));
	assert_eq!(names(&explorer), ["Peru", "Peru Norte"]);
}

#[test]
fn sentinel_clears_selection() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.select_by_name("Peru");
	assert!(explorer.selection().is_some());
	explorer.select_by_name("");
	assert!(explorer.selection().is_none());
}

#[test]
fn duplicate_names_select_the_first_match() {
	let mut explorer = Explorer::from_dataset(vec![
		CountryRecord::new("Congo").with_population(1),
		CountryRecord::new("Congo").with_population(2),
	]);
	explorer.select_by_name("Congo");
	assert_eq!(explorer.selection().map(|record| record.population), Some(1));
}

#[test]
fn confirm_requires_exactly_one_match() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.update_search("peru");
	assert!(!explorer.confirm_on_enter());
	assert!(explorer.selection().is_none());

	explorer.update_search("peru norte");
	assert_eq!(names(&explorer), ["Peru Norte"]);
	assert!(explorer.confirm_on_enter());
	assert_eq!(explorer.selection().map(CountryRecord::common_name), Some("Peru Norte"));
}

#[test]
fn confirm_with_no_matches_keeps_prior_selection() {
	let mut explorer = Explorer::from_dataset(andes());
	explorer.update_search("peru");
	explorer.select_by_name("Peru");
	assert!(!explorer.confirm_on_enter());
	assert_eq!(explorer.selection().map(CountryRecord::common_name), Some("Peru"));

	explorer.update_search("atlantis");
	assert!(!explorer.confirm_on_enter());
	assert!(explorer.selection().is_none());
}
