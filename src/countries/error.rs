use reqwest::StatusCode;
use thiserror::Error;

/// Failure while loading the country list from a provider.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("failed to build HTTP client")]
	Client(#[source] reqwest::Error),
	#[error("request to {endpoint} failed")]
	Network {
		endpoint: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{endpoint} responded with status {status}")]
	Status { endpoint: String, status: StatusCode },
	#[error("failed to parse country list from {endpoint}")]
	Parse {
		endpoint: String,
		#[source]
		source: serde_json::Error,
	},
}

impl FetchError {
	/// Whether the provider answered but the payload could not be decoded.
	#[must_use]
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}
}
