//! Core crate exports for the `country-explorer` terminal browser.
//!
//! The [`countries`] module holds the data model and the search/select state
//! machine, which has no terminal dependencies. The [`ui`] module wraps it in a
//! ratatui front-end. The root re-exports the types most embedders need.

pub mod app_dirs;
pub mod countries;
pub mod logging;
pub mod ui;

pub use countries::{
	CountryRecord, DEFAULT_ENDPOINT, DataProvider, Explorer, FetchError, HttpProvider,
	StaticProvider,
};
pub use ui::{ExplorerOutcome, ExplorerUi, Theme, UiLabels, run};
