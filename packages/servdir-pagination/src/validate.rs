//! Per-variant validators turning a raw cursor object into a typed cursor.
//!
//! Fields unrelated to a variant are ignored. The ranked marker and rank coupling is
//! checked by the dispatcher before a validator runs.

use serde_json::{Map, Value};

use servdir_domain::{is_valid_identifier, is_valid_timestamp};

use crate::{
	Error, Result,
	codec::keys,
	cursor::{
		NameCursor, NewestCursor, RankedNameCursor, RankedNewestCursor, RankedVerifiedCursor,
		VerifiedCursor,
	},
};

type Object = Map<String, Value>;

pub fn validate_verified(object: &Object) -> Result<VerifiedCursor> {
	Ok(VerifiedCursor {
		verified: require_bool(object, keys::VERIFIED)?,
		created_at: require_timestamp(object, keys::CREATED_AT)?,
		id: require_identifier(object, keys::ID)?,
	})
}

pub fn validate_newest(object: &Object) -> Result<NewestCursor> {
	Ok(NewestCursor {
		created_at: require_timestamp(object, keys::CREATED_AT)?,
		id: require_identifier(object, keys::ID)?,
	})
}

pub fn validate_name(object: &Object) -> Result<NameCursor> {
	Ok(NameCursor {
		name: require_str(object, keys::NAME)?.to_string(),
		id: require_identifier(object, keys::ID)?,
	})
}

pub fn validate_ranked_verified(object: &Object) -> Result<RankedVerifiedCursor> {
	let VerifiedCursor { verified, created_at, id } = validate_verified(object)?;

	Ok(RankedVerifiedCursor { verified, rank: require_f64(object, keys::RANK)?, created_at, id })
}

pub fn validate_ranked_newest(object: &Object) -> Result<RankedNewestCursor> {
	let NewestCursor { created_at, id } = validate_newest(object)?;

	Ok(RankedNewestCursor { rank: require_f64(object, keys::RANK)?, created_at, id })
}

pub fn validate_ranked_name(object: &Object) -> Result<RankedNameCursor> {
	let NameCursor { name, id } = validate_name(object)?;

	Ok(RankedNameCursor { rank: require_f64(object, keys::RANK)?, name, id })
}

fn require<'a>(object: &'a Object, field: &'static str) -> Result<&'a Value> {
	object.get(field).ok_or(Error::MissingField { field })
}

fn require_bool(object: &Object, field: &'static str) -> Result<bool> {
	require(object, field)?.as_bool().ok_or(Error::WrongType { field, expected: "boolean" })
}

// Any JSON number is accepted; non-finite ranks cannot be expressed in JSON.
fn require_f64(object: &Object, field: &'static str) -> Result<f64> {
	require(object, field)?.as_f64().ok_or(Error::WrongType { field, expected: "number" })
}

fn require_str<'a>(object: &'a Object, field: &'static str) -> Result<&'a str> {
	require(object, field)?.as_str().ok_or(Error::WrongType { field, expected: "string" })
}

fn require_timestamp(object: &Object, field: &'static str) -> Result<String> {
	let raw = require_str(object, field)?;

	if !is_valid_timestamp(raw) {
		return Err(Error::InvalidTimestamp { field });
	}

	Ok(raw.to_string())
}

fn require_identifier(object: &Object, field: &'static str) -> Result<String> {
	let raw = require_str(object, field)?;

	if !is_valid_identifier(raw) {
		return Err(Error::InvalidIdentifier { field });
	}

	Ok(raw.to_string())
}
