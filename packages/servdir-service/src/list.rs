use serde_json::Value;

use servdir_domain::SortMode;
use servdir_pagination::{
	RankedListingRow, create_cursor_from_row, create_ranked_cursor_from_row, decode_cursor,
	normalize_limit, normalize_sort,
};

use crate::{DirectoryService, Error, Listing, PageQuery, Result};

/// Raw list parameters as they arrive from the request layer.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ListRequest {
	pub cursor: Option<String>,
	pub sort: Option<Value>,
	pub limit: Option<Value>,
	#[serde(rename = "q")]
	pub query: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ListResponse {
	pub items: Vec<Listing>,
	pub next_cursor: Option<String>,
	pub has_more: bool,
	pub sort: SortMode,
	pub limit: u32,
}

impl DirectoryService {
	pub async fn list(&self, req: ListRequest) -> Result<ListResponse> {
		let pagination = &self.cfg.pagination;
		let limit = normalize_limit(req.limit.as_ref(), pagination);
		let sort = normalize_sort(req.sort.as_ref(), pagination);
		let search = req.query.as_deref().map(str::trim).filter(|query| !query.is_empty());
		let ranked = search.is_some();
		let after = req
			.cursor
			.as_deref()
			.filter(|token| !token.is_empty())
			.and_then(|token| decode_cursor(token, sort, ranked));

		let query = PageQuery {
			sort,
			search,
			after: after.as_ref(),
			limit: limit.saturating_add(1),
		};
		let mut items = self.store.fetch_page(query).await.inspect_err(|err| {
			tracing::warn!(error = %err, %sort, ranked, "Listing store failed to fetch a page.");
		})?;
		let page_len = usize::try_from(limit).unwrap_or(usize::MAX);
		let has_more = items.len() > page_len;

		items.truncate(page_len);

		tracing::debug!(%sort, ranked, limit, returned = items.len(), has_more, "Listed page.");

		let next_cursor = match items.last() {
			Some(last) if has_more => Some(next_cursor(last, sort, ranked)?),
			_ => None,
		};

		Ok(ListResponse { items, next_cursor, has_more, sort, limit })
	}
}

fn next_cursor(last: &Listing, sort: SortMode, ranked: bool) -> Result<String> {
	if !ranked {
		return Ok(create_cursor_from_row(&last.row, sort)?);
	}

	let Some(rank) = last.rank else {
		return Err(Error::Storage {
			message: format!("Ranked listing {} is missing its rank.", last.row.id),
		});
	};

	Ok(create_ranked_cursor_from_row(&RankedListingRow { row: last.row.clone(), rank }, sort)?)
}
