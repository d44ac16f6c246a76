use serde::Deserialize;

pub const SORT_MODES: [&str; 3] = ["verified", "newest", "name"];

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub pagination: Pagination,
}

/// Bounds and defaults applied to the `limit` and `sort` list parameters.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
	pub default_limit: u32,
	pub min_limit: u32,
	pub max_limit: u32,
	/// One of "verified", "newest", or "name".
	pub default_sort: String,
}
impl Default for Pagination {
	fn default() -> Self {
		Self { default_limit: 20, min_limit: 1, max_limit: 50, default_sort: default_sort() }
	}
}

fn default_sort() -> String {
	"verified".to_string()
}
