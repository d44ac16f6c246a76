use servdir_domain::SortMode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to serialize cursor.")]
	Encode(#[source] serde_json::Error),
	#[error("Cursor token is not valid base64url.")]
	Encoding(#[from] base64::DecodeError),
	#[error("Cursor payload is not valid JSON.")]
	Payload(#[source] serde_json::Error),
	#[error("Cursor payload is not an object.")]
	NotAnObject,
	#[error("Cursor has no sort discriminator and is not a legacy cursor.")]
	MissingSort,
	#[error("Cursor sort discriminator is not a known sort mode.")]
	UnknownSort,
	#[error("Cursor was issued for sort {found} but the request sorts by {expected}.")]
	SortMismatch { expected: SortMode, found: SortMode },
	#[error("Legacy cursors are only accepted for the unranked verified sort.")]
	LegacyNotAllowed,
	#[error("Cursor ranked marker and rank field disagree.")]
	InvalidRankedMarker,
	#[error("Cursor ranked={found} does not match request ranked={expected}.")]
	RankedMismatch { expected: bool, found: bool },
	#[error("Cursor field {field} is missing.")]
	MissingField { field: &'static str },
	#[error("Cursor field {field} must be a {expected}.")]
	WrongType { field: &'static str, expected: &'static str },
	#[error("Cursor field {field} is not a valid timestamp.")]
	InvalidTimestamp { field: &'static str },
	#[error("Cursor field {field} is not a valid identifier.")]
	InvalidIdentifier { field: &'static str },
}
