use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Listing order shared by the list endpoint and the storage layer's `ORDER BY`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
	/// Verified entries first, then most recent.
	#[default]
	Verified,
	/// Most recent first.
	Newest,
	/// Lexicographic by name.
	Name,
}
impl SortMode {
	pub const ALL: [SortMode; 3] = [SortMode::Verified, SortMode::Newest, SortMode::Name];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Verified => "verified",
			Self::Newest => "newest",
			Self::Name => "name",
		}
	}

	/// Exact, case-sensitive match against the wire names.
	pub fn parse(raw: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|mode| mode.as_str() == raw)
	}
}
impl fmt::Display for SortMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for SortMode {
	type Err = UnknownSortMode;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		Self::parse(raw).ok_or_else(|| UnknownSortMode { value: raw.to_string() })
	}
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown sort mode {value:?}.")]
pub struct UnknownSortMode {
	pub value: String,
}
