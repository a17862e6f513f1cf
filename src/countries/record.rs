//! Country records as delivered by the provider.
//!
//! Only the handful of fields the explorer displays are typed. Everything else
//! the provider sends is kept in the `extra` maps so a record can be written
//! back out unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One country from the provider's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
	pub name: CountryName,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub capital: Option<Vec<String>>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub population: u64,
	#[serde(default, deserialize_with = "null_as_default")]
	pub continents: Vec<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub flags: Flags,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
	pub common: String,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
	#[serde(default, deserialize_with = "null_as_default")]
	pub png: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alt: Option<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: &str) -> Option<&str> {
	(!value.trim().is_empty()).then_some(value)
}

impl CountryRecord {
	/// Create a record with only a common name set.
	#[must_use]
	pub fn new(common: impl Into<String>) -> Self {
		Self {
			name: CountryName {
				common: common.into(),
				extra: Map::new(),
			},
			capital: None,
			population: 0,
			continents: Vec::new(),
			flags: Flags::default(),
			extra: Map::new(),
		}
	}

	#[must_use]
	pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
		self.capital
			.get_or_insert_with(Vec::new)
			.push(capital.into());
		self
	}

	#[must_use]
	pub fn with_population(mut self, population: u64) -> Self {
		self.population = population;
		self
	}

	#[must_use]
	pub fn with_continent(mut self, continent: impl Into<String>) -> Self {
		self.continents.push(continent.into());
		self
	}

	#[must_use]
	pub fn with_flag(mut self, png: impl Into<String>, alt: Option<&str>) -> Self {
		self.flags.png = png.into();
		self.flags.alt = alt.map(str::to_owned);
		self
	}

	/// The display and search key.
	#[must_use]
	pub fn common_name(&self) -> &str {
		&self.name.common
	}

	/// First listed capital. Blank entries count as absent.
	#[must_use]
	pub fn capital(&self) -> Option<&str> {
		self.capital
			.as_deref()
			.and_then(<[String]>::first)
			.map(String::as_str)
			.and_then(non_blank)
	}

	/// First listed continent. Blank entries count as absent.
	#[must_use]
	pub fn continent(&self) -> Option<&str> {
		self.continents.first().map(String::as_str).and_then(non_blank)
	}

	#[must_use]
	pub fn flag_url(&self) -> &str {
		&self.flags.png
	}

	#[must_use]
	pub fn flag_alt(&self) -> Option<&str> {
		self.flags.alt.as_deref()
	}

	/// Case-insensitive substring match of the common name against a needle
	/// that the caller has already lowercased.
	#[must_use]
	pub fn name_contains_lowercase(&self, needle: &str) -> bool {
		needle.is_empty() || self.name.common.to_lowercase().contains(needle)
	}
}
