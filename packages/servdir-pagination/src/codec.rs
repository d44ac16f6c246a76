use base64::{
	Engine as _, alphabet,
	engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde::Serialize;
use serde_json::{Map, Value};

use servdir_domain::SortMode;

use crate::{Cursor, Error, Result};

/// Short wire keys; tokens travel in query strings so every byte counts.
pub mod keys {
	pub const SORT: &str = "s";
	pub const RANKED: &str = "q";
	pub const VERIFIED: &str = "v";
	pub const RANK: &str = "r";
	pub const CREATED_AT: &str = "c";
	pub const NAME: &str = "n";
	pub const ID: &str = "i";
}

// Emits unpadded output; accepts tokens with or without padding.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
	&alphabet::URL_SAFE,
	GeneralPurposeConfig::new()
		.with_encode_padding(false)
		.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// Field order here is the serialized key order.
#[derive(Serialize)]
struct WireCursor<'a> {
	s: SortMode,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	q: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	v: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	r: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	c: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	n: Option<&'a str>,
	i: &'a str,
}
impl<'a> From<&'a Cursor> for WireCursor<'a> {
	fn from(cursor: &'a Cursor) -> Self {
		let mut wire = WireCursor {
			s: cursor.sort(),
			q: cursor.is_ranked(),
			v: None,
			r: cursor.rank(),
			c: None,
			n: None,
			i: cursor.id(),
		};

		match cursor {
			Cursor::Verified(inner) => {
				wire.v = Some(inner.verified);
				wire.c = Some(inner.created_at.as_str());
			},
			Cursor::RankedVerified(inner) => {
				wire.v = Some(inner.verified);
				wire.c = Some(inner.created_at.as_str());
			},
			Cursor::Newest(inner) => wire.c = Some(inner.created_at.as_str()),
			Cursor::RankedNewest(inner) => wire.c = Some(inner.created_at.as_str()),
			Cursor::Name(inner) => wire.n = Some(inner.name.as_str()),
			Cursor::RankedName(inner) => wire.n = Some(inner.name.as_str()),
		}

		wire
	}
}

/// Serializes `cursor` to compact JSON and wraps it in unpadded base64url.
pub fn encode(cursor: &Cursor) -> Result<String> {
	let payload = serde_json::to_vec(&WireCursor::from(cursor)).map_err(Error::Encode)?;

	Ok(TOKEN_ENGINE.encode(payload))
}

/// Unwraps a token into its raw JSON object without interpreting any field.
pub fn decode(token: &str) -> Result<Map<String, Value>> {
	let payload = TOKEN_ENGINE.decode(token)?;

	match serde_json::from_slice(&payload).map_err(Error::Payload)? {
		Value::Object(object) => Ok(object),
		_ => Err(Error::NotAnObject),
	}
}

#[cfg(test)]
mod tests {
	use base64::Engine as _;
	use serde_json::json;

	use crate::{
		Cursor, Error,
		codec::{self, TOKEN_ENGINE},
		cursor::{NameCursor, RankedVerifiedCursor},
	};

	#[test]
	fn ranked_payload_keeps_wire_key_order() {
		let cursor = Cursor::RankedVerified(RankedVerifiedCursor {
			verified: false,
			rank: 0.5,
			created_at: "2026-02-06T12:00:00.000Z".to_string(),
			id: "3f2504e0-4f89-41d3-9a0c-0305e82c3301".to_string(),
		});
		let token = codec::encode(&cursor).expect("Encode must succeed.");
		let payload = TOKEN_ENGINE.decode(&token).expect("Token must be base64url.");

		assert_eq!(
			String::from_utf8(payload).expect("Payload must be UTF-8."),
			concat!(
				r#"{"s":"verified","q":true,"v":false,"r":0.5,"#,
				r#""c":"2026-02-06T12:00:00.000Z","i":"3f2504e0-4f89-41d3-9a0c-0305e82c3301"}"#,
			)
		);
	}

	#[test]
	fn plain_payload_omits_rank_fields() {
		let cursor = Cursor::Name(NameCursor {
			name: "Alpha".to_string(),
			id: "3f2504e0-4f89-41d3-9a0c-0305e82c3301".to_string(),
		});
		let object = codec::decode(&codec::encode(&cursor).expect("Encode must succeed."))
			.expect("Decode must succeed.");

		assert_eq!(
			serde_json::Value::Object(object),
			json!({ "s": "name", "n": "Alpha", "i": "3f2504e0-4f89-41d3-9a0c-0305e82c3301" })
		);
	}

	#[test]
	fn decode_accepts_padded_tokens() {
		let padded = base64::engine::general_purpose::URL_SAFE.encode(br#"{"i":"xy"}"#);

		assert!(padded.ends_with('='));
		assert!(codec::decode(&padded).is_ok());
	}

	#[test]
	fn decode_reports_each_failure_stage() {
		assert!(matches!(codec::decode("***"), Err(Error::Encoding(_))));
		assert!(matches!(codec::decode(&TOKEN_ENGINE.encode("not json")), Err(Error::Payload(_))));
		assert!(matches!(codec::decode(&TOKEN_ENGINE.encode("[1,2]")), Err(Error::NotAnObject)));
		assert!(matches!(codec::decode(&TOKEN_ENGINE.encode("null")), Err(Error::NotAnObject)));
	}
}
