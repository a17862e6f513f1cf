use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};

use super::{CountryRecord, FetchError};

/// Endpoint queried when no override is configured.
pub const DEFAULT_ENDPOINT: &str =
	"https://restcountries.com/v3.1/all?fields=name,capital,population,continents,flags";

/// Read-only source of the complete country collection.
pub trait DataProvider {
	/// Short label used in diagnostics.
	fn describe(&self) -> String;

	/// Fetch every record in provider order.
	fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError>;
}

impl<P: DataProvider + ?Sized> DataProvider for Box<P> {
	fn describe(&self) -> String {
		(**self).describe()
	}

	fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
		(**self).fetch_all()
	}
}

/// Provider backed by a single GET against a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpProvider {
	endpoint: String,
	client: Client,
}

impl HttpProvider {
	/// Build a provider for `endpoint`. `timeout` of `None` waits indefinitely.
	pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
		let client = Client::builder()
			.user_agent(concat!("country-explorer/", env!("CARGO_PKG_VERSION")))
			.timeout(timeout)
			.build()
			.map_err(FetchError::Client)?;
		Ok(Self {
			endpoint: endpoint.into(),
			client,
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl DataProvider for HttpProvider {
	fn describe(&self) -> String {
		self.endpoint.clone()
	}

	fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
		debug!(endpoint = %self.endpoint, "countries: requesting collection");
		let network = |source| FetchError::Network {
			endpoint: self.endpoint.clone(),
			source,
		};

		let response = self.client.get(&self.endpoint).send().map_err(network)?;
		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				endpoint: self.endpoint.clone(),
				status,
			});
		}

		let body = response.text().map_err(network)?;
		parse_records(&self.endpoint, &body)
	}
}

/// Decode a provider payload: a JSON array of country objects.
///
/// Only a body that is not a JSON array fails. Elements that do not decode as
/// a [`CountryRecord`] are logged and skipped, and the rest keep their order.
pub fn parse_records(endpoint: &str, body: &str) -> Result<Vec<CountryRecord>, FetchError> {
	let elements: Vec<Value> = serde_json::from_str(body).map_err(|source| FetchError::Parse {
		endpoint: endpoint.to_owned(),
		source,
	})?;

	let total = elements.len();
	let records: Vec<CountryRecord> = elements
		.into_iter()
		.enumerate()
		.filter_map(|(index, element)| match serde_json::from_value(element) {
			Ok(record) => Some(record),
			Err(err) => {
				warn!(%endpoint, index, "countries: skipping malformed record: {err}");
				None
			}
		})
		.collect();

	if records.len() < total {
		debug!(%endpoint, kept = records.len(), total, "countries: dropped malformed records");
	}
	Ok(records)
}

/// In-memory provider, mostly useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
	records: Vec<CountryRecord>,
}

impl StaticProvider {
	#[must_use]
	pub fn new(records: Vec<CountryRecord>) -> Self {
		Self { records }
	}
}

impl DataProvider for StaticProvider {
	fn describe(&self) -> String {
		format!("static ({} records)", self.records.len())
	}

	fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
		Ok(self.records.clone())
	}
}
