use serde_json::{Map, Value};

use servdir_domain::SortMode;

use crate::{
	Cursor, Error, Result,
	codec::{self, keys},
	validate::{
		validate_name, validate_newest, validate_ranked_name, validate_ranked_newest,
		validate_ranked_verified, validate_verified,
	},
};

/// Decodes `token` for a request sorted by `expected_sort`.
///
/// Every rejection yields `None`; callers treat that exactly like an absent cursor and
/// serve the first page.
pub fn decode_cursor(
	token: &str,
	expected_sort: SortMode,
	has_search_query: bool,
) -> Option<Cursor> {
	match try_decode_cursor(token, expected_sort, has_search_query) {
		Ok(cursor) => Some(cursor),
		Err(err) => {
			tracing::debug!(
				error = %err,
				sort = %expected_sort,
				ranked = has_search_query,
				"Discarding pagination cursor."
			);

			None
		},
	}
}

/// Same as [`decode_cursor`] but reports why a token was rejected.
pub fn try_decode_cursor(
	token: &str,
	expected_sort: SortMode,
	has_search_query: bool,
) -> Result<Cursor> {
	let object = codec::decode(token)?;
	let Some(sort) = object.get(keys::SORT) else {
		return decode_legacy(&object, expected_sort, has_search_query);
	};
	let sort = sort.as_str().and_then(SortMode::parse).ok_or(Error::UnknownSort)?;

	if sort != expected_sort {
		return Err(Error::SortMismatch { expected: expected_sort, found: sort });
	}

	let ranked = ranked_marker(&object)?;

	if ranked != has_search_query {
		return Err(Error::RankedMismatch { expected: has_search_query, found: ranked });
	}

	match (sort, ranked) {
		(SortMode::Verified, false) => validate_verified(&object).map(Cursor::Verified),
		(SortMode::Newest, false) => validate_newest(&object).map(Cursor::Newest),
		(SortMode::Name, false) => validate_name(&object).map(Cursor::Name),
		(SortMode::Verified, true) => validate_ranked_verified(&object).map(Cursor::RankedVerified),
		(SortMode::Newest, true) => validate_ranked_newest(&object).map(Cursor::RankedNewest),
		(SortMode::Name, true) => validate_ranked_name(&object).map(Cursor::RankedName),
	}
}

// Tokens minted before the sort discriminator existed: exactly `{v, c, i}`.
fn decode_legacy(
	object: &Map<String, Value>,
	expected_sort: SortMode,
	has_search_query: bool,
) -> Result<Cursor> {
	if !is_legacy_shape(object) {
		return Err(Error::MissingSort);
	}
	if expected_sort != SortMode::Verified || has_search_query {
		return Err(Error::LegacyNotAllowed);
	}

	validate_verified(object).map(Cursor::Verified)
}

fn is_legacy_shape(object: &Map<String, Value>) -> bool {
	object.len() == 3
		&& object.get(keys::VERIFIED).is_some_and(Value::is_boolean)
		&& object.get(keys::CREATED_AT).is_some_and(Value::is_string)
		&& object.get(keys::ID).is_some_and(Value::is_string)
}

// `q` must be literally `true` and appears together with `r` or not at all.
fn ranked_marker(object: &Map<String, Value>) -> Result<bool> {
	let marker = match object.get(keys::RANKED) {
		None => false,
		Some(Value::Bool(true)) => true,
		Some(_) => return Err(Error::InvalidRankedMarker),
	};

	if marker != object.contains_key(keys::RANK) {
		return Err(Error::InvalidRankedMarker);
	}

	Ok(marker)
}
