pub mod list;

mod error;

pub use error::{Error, Result};
pub use list::{ListRequest, ListResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use serde::{Deserialize, Serialize};

use servdir_config::Config;
use servdir_domain::SortMode;
use servdir_pagination::{Cursor, ListingRow};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read side of the directory's storage layer.
///
/// Implementations order rows by [`servdir_pagination::ordering`] for the query's sort mode
/// and, when `after` is set, return only rows strictly past [`Cursor::keyset`].
pub trait ListingStore
where
	Self: Send + Sync,
{
	fn fetch_page<'a>(&'a self, query: PageQuery<'a>) -> BoxFuture<'a, Result<Vec<Listing>>>;
}

#[derive(Clone, Copy, Debug)]
pub struct PageQuery<'a> {
	pub sort: SortMode,
	/// Trimmed, non-empty search text. Rows must then carry a rank.
	pub search: Option<&'a str>,
	pub after: Option<&'a Cursor>,
	/// Page size plus one; the extra row only signals that another page exists.
	pub limit: u32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Listing {
	#[serde(flatten)]
	pub row: ListingRow,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rank: Option<f64>,
}

pub struct DirectoryService {
	pub cfg: Config,
	pub store: Arc<dyn ListingStore>,
}
impl DirectoryService {
	pub fn new(cfg: Config, store: Arc<dyn ListingStore>) -> Self {
		Self { cfg, store }
	}
}
