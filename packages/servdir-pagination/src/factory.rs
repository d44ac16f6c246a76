use serde::{Deserialize, Serialize};

use servdir_domain::SortMode;

use crate::{
	Cursor, Result, codec,
	cursor::{
		NameCursor, NewestCursor, RankedNameCursor, RankedNewestCursor, RankedVerifiedCursor,
		VerifiedCursor,
	},
};

/// The ordering columns of a listing row as the storage layer returns them.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct ListingRow {
	pub id: String,
	pub name: String,
	pub verified: bool,
	pub created_at: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RankedListingRow {
	#[serde(flatten)]
	pub row: ListingRow,
	pub rank: f64,
}

/// Builds the plain cursor positioned at `row` under `sort`.
pub fn cursor_for_row(row: &ListingRow, sort: SortMode) -> Cursor {
	let id = row.id.clone();

	match sort {
		SortMode::Verified => Cursor::Verified(VerifiedCursor {
			verified: row.verified,
			created_at: row.created_at.clone(),
			id,
		}),
		SortMode::Newest => Cursor::Newest(NewestCursor { created_at: row.created_at.clone(), id }),
		SortMode::Name => Cursor::Name(NameCursor { name: row.name.clone(), id }),
	}
}

pub fn ranked_cursor_for_row(ranked: &RankedListingRow, sort: SortMode) -> Cursor {
	let RankedListingRow { row, rank } = ranked;
	let (rank, id) = (*rank, row.id.clone());

	match sort {
		SortMode::Verified => Cursor::RankedVerified(RankedVerifiedCursor {
			verified: row.verified,
			rank,
			created_at: row.created_at.clone(),
			id,
		}),
		SortMode::Newest => Cursor::RankedNewest(RankedNewestCursor {
			rank,
			created_at: row.created_at.clone(),
			id,
		}),
		SortMode::Name => Cursor::RankedName(RankedNameCursor { rank, name: row.name.clone(), id }),
	}
}

/// Mints the token for the page after `row`.
///
/// Rows come from storage and are trusted; nothing beyond serialization is checked.
pub fn create_cursor_from_row(row: &ListingRow, sort: SortMode) -> Result<String> {
	codec::encode(&cursor_for_row(row, sort))
}

pub fn create_ranked_cursor_from_row(row: &RankedListingRow, sort: SortMode) -> Result<String> {
	codec::encode(&ranked_cursor_for_row(row, sort))
}
