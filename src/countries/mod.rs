//! Country data and the search/select state machine.
//!
//! [`Explorer`] holds the dataset fetched once from a [`DataProvider`] together
//! with the current filter and selection. The terminal UI in [`crate::ui`] is a
//! thin adapter that turns key events into calls on the explorer.

mod error;
mod explorer;
mod provider;
mod record;

pub use error::FetchError;
pub use explorer::{Explorer, FilteredView};
pub use provider::{DEFAULT_ENDPOINT, DataProvider, HttpProvider, StaticProvider, parse_records};
pub use record::{CountryName, CountryRecord, Flags};
