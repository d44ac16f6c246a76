use time::{
	OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};

const MILLIS_UTC: &[BorrowedFormatItem<'static>] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Renders `value` in UTC with millisecond precision, e.g. `2026-02-06T12:00:00.000Z`.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, time::error::Format> {
	value.to_offset(UtcOffset::UTC).format(MILLIS_UTC)
}
