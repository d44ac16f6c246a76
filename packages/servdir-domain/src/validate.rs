use std::sync::LazyLock;

use regex::Regex;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

static IDENTIFIER: LazyLock<Option<Regex>> = LazyLock::new(|| {
	Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").ok()
});

/// Accepts RFC 3339 timestamps, the shape storage emits for `created_at`.
pub fn is_valid_timestamp(raw: &str) -> bool {
	OffsetDateTime::parse(raw, &Rfc3339).is_ok()
}

/// Accepts hyphenated 36-character UUIDs of any version, in either case.
pub fn is_valid_identifier(raw: &str) -> bool {
	IDENTIFIER.as_ref().map(|re| re.is_match(raw)).unwrap_or(false)
}
