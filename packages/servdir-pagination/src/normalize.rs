use serde_json::{Number, Value};

use servdir_config::Pagination;
use servdir_domain::SortMode;

/// Resolves the `limit` parameter to a page size within the configured bounds.
///
/// Accepts a JSON number or a numeric string. Anything absent or unparseable yields the
/// configured default; parsed values are clamped to `[min_limit, max_limit]`.
pub fn normalize_limit(value: Option<&Value>, cfg: &Pagination) -> u32 {
	let parsed = match value {
		Some(Value::Number(number)) => number_to_i64(number),
		Some(Value::String(raw)) => parse_limit(raw),
		_ => None,
	};
	let Some(limit) = parsed else {
		return cfg.default_limit;
	};
	let clamped = limit.clamp(i64::from(cfg.min_limit), i64::from(cfg.max_limit));

	u32::try_from(clamped).unwrap_or(cfg.max_limit)
}

/// Resolves the `sort` parameter; only the exact sort mode names are recognized.
pub fn normalize_sort(value: Option<&Value>, cfg: &Pagination) -> SortMode {
	value
		.and_then(Value::as_str)
		.and_then(SortMode::parse)
		.or_else(|| SortMode::parse(&cfg.default_sort))
		.unwrap_or_default()
}

fn number_to_i64(number: &Number) -> Option<i64> {
	if let Some(value) = number.as_i64() {
		return Some(value);
	}
	if number.is_u64() {
		return Some(i64::MAX);
	}

	number.as_f64().and_then(truncate)
}

fn parse_limit(raw: &str) -> Option<i64> {
	let raw = raw.trim();

	raw.parse::<i64>().ok().or_else(|| raw.parse::<f64>().ok().and_then(truncate))
}

// Saturating cast; fractional page sizes round toward zero.
fn truncate(value: f64) -> Option<i64> {
	value.is_finite().then(|| value.trunc() as i64)
}
