//! The keyset contract handed to the storage layer.
//!
//! [`ordering`] is the `ORDER BY` of a listing; [`Cursor::keyset`] pairs the same columns
//! with the values of the last row seen. A row belongs to the next page when it sorts
//! strictly after that tuple, compared column by column in the listed directions.

use servdir_domain::SortMode;

use crate::Cursor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyColumn {
	Verified,
	Rank,
	CreatedAt,
	Name,
	Id,
}
impl KeyColumn {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Verified => "verified",
			Self::Rank => "rank",
			Self::CreatedAt => "created_at",
			Self::Name => "name",
			Self::Id => "id",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	Asc,
	Desc,
}
impl Direction {
	pub fn as_sql(self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyValue<'a> {
	Bool(bool),
	Float(f64),
	/// RFC 3339 text, bound as a timestamp.
	Timestamp(&'a str),
	Text(&'a str),
	/// Hyphenated UUID text, bound as a row id.
	Identifier(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyPart<'a> {
	pub column: KeyColumn,
	pub direction: Direction,
	pub value: KeyValue<'a>,
}

const VERIFIED: &[(KeyColumn, Direction)] = &[
	(KeyColumn::Verified, Direction::Desc),
	(KeyColumn::CreatedAt, Direction::Desc),
	(KeyColumn::Id, Direction::Desc),
];
const NEWEST: &[(KeyColumn, Direction)] =
	&[(KeyColumn::CreatedAt, Direction::Desc), (KeyColumn::Id, Direction::Desc)];
const NAME: &[(KeyColumn, Direction)] =
	&[(KeyColumn::Name, Direction::Asc), (KeyColumn::Id, Direction::Asc)];
const RANKED_VERIFIED: &[(KeyColumn, Direction)] = &[
	(KeyColumn::Verified, Direction::Desc),
	(KeyColumn::Rank, Direction::Desc),
	(KeyColumn::CreatedAt, Direction::Desc),
	(KeyColumn::Id, Direction::Desc),
];
const RANKED_NEWEST: &[(KeyColumn, Direction)] = &[
	(KeyColumn::Rank, Direction::Desc),
	(KeyColumn::CreatedAt, Direction::Desc),
	(KeyColumn::Id, Direction::Desc),
];
const RANKED_NAME: &[(KeyColumn, Direction)] = &[
	(KeyColumn::Rank, Direction::Desc),
	(KeyColumn::Name, Direction::Asc),
	(KeyColumn::Id, Direction::Asc),
];

/// `ORDER BY` columns, in precedence order, for a listing sorted by `sort`.
pub fn ordering(sort: SortMode, ranked: bool) -> &'static [(KeyColumn, Direction)] {
	match (sort, ranked) {
		(SortMode::Verified, false) => VERIFIED,
		(SortMode::Newest, false) => NEWEST,
		(SortMode::Name, false) => NAME,
		(SortMode::Verified, true) => RANKED_VERIFIED,
		(SortMode::Newest, true) => RANKED_NEWEST,
		(SortMode::Name, true) => RANKED_NAME,
	}
}

/// Renders [`ordering`] as the body of an SQL `ORDER BY` clause.
pub fn order_by(sort: SortMode, ranked: bool) -> String {
	ordering(sort, ranked)
		.iter()
		.map(|(column, direction)| format!("{} {}", column.as_str(), direction.as_sql()))
		.collect::<Vec<_>>()
		.join(", ")
}

impl Cursor {
	/// Lower bound for the next page, aligned with [`ordering`] for this cursor's mode.
	pub fn keyset(&self) -> Vec<KeyPart<'_>> {
		let values = match self {
			Self::Verified(c) => vec![
				KeyValue::Bool(c.verified),
				KeyValue::Timestamp(&c.created_at),
				KeyValue::Identifier(&c.id),
			],
			Self::Newest(c) => {
				vec![KeyValue::Timestamp(&c.created_at), KeyValue::Identifier(&c.id)]
			},
			Self::Name(c) => vec![KeyValue::Text(&c.name), KeyValue::Identifier(&c.id)],
			Self::RankedVerified(c) => vec![
				KeyValue::Bool(c.verified),
				KeyValue::Float(c.rank),
				KeyValue::Timestamp(&c.created_at),
				KeyValue::Identifier(&c.id),
			],
			Self::RankedNewest(c) => vec![
				KeyValue::Float(c.rank),
				KeyValue::Timestamp(&c.created_at),
				KeyValue::Identifier(&c.id),
			],
			Self::RankedName(c) => vec![
				KeyValue::Float(c.rank),
				KeyValue::Text(&c.name),
				KeyValue::Identifier(&c.id),
			],
		};

		ordering(self.sort(), self.is_ranked())
			.iter()
			.zip(values)
			.map(|(&(column, direction), value)| KeyPart { column, direction, value })
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use servdir_domain::SortMode;

	use crate::{
		Cursor, Direction, KeyColumn, KeyValue,
		cursor::{RankedNameCursor, VerifiedCursor},
		keyset::{order_by, ordering},
	};

	const ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";

	#[test]
	fn id_breaks_ties_last_in_every_ordering() {
		for sort in SortMode::ALL {
			for ranked in [false, true] {
				let columns = ordering(sort, ranked);

				assert_eq!(columns.last().map(|(column, _)| *column), Some(KeyColumn::Id));
				assert_eq!(
					columns.iter().any(|(column, _)| *column == KeyColumn::Rank),
					ranked,
					"{sort} ranked={ranked}"
				);
			}
		}
	}

	#[test]
	fn renders_order_by_clauses() {
		assert_eq!(order_by(SortMode::Verified, false), "verified DESC, created_at DESC, id DESC");
		assert_eq!(order_by(SortMode::Newest, false), "created_at DESC, id DESC");
		assert_eq!(order_by(SortMode::Name, false), "name ASC, id ASC");
		assert_eq!(
			order_by(SortMode::Verified, true),
			"verified DESC, rank DESC, created_at DESC, id DESC"
		);
		assert_eq!(order_by(SortMode::Newest, true), "rank DESC, created_at DESC, id DESC");
		assert_eq!(order_by(SortMode::Name, true), "rank DESC, name ASC, id ASC");
	}

	#[test]
	fn verified_keyset_follows_order_by() {
		let cursor = Cursor::Verified(VerifiedCursor {
			verified: true,
			created_at: "2026-02-06T12:00:00.000Z".to_string(),
			id: ID.to_string(),
		});
		let parts = cursor.keyset();

		assert_eq!(
			parts.iter().map(|part| (part.column, part.direction)).collect::<Vec<_>>(),
			ordering(SortMode::Verified, false).to_vec()
		);
		assert_eq!(parts[0].value, KeyValue::Bool(true));
		assert_eq!(parts[1].value, KeyValue::Timestamp("2026-02-06T12:00:00.000Z"));
		assert_eq!(parts[2].value, KeyValue::Identifier(ID));
	}

	#[test]
	fn ranked_name_orders_rank_before_name() {
		let cursor = Cursor::RankedName(RankedNameCursor {
			rank: 0.4,
			name: "Beta".to_string(),
			id: ID.to_string(),
		});
		let parts = cursor.keyset();

		assert_eq!(parts.len(), 3);
		assert_eq!((parts[0].column, parts[0].direction), (KeyColumn::Rank, Direction::Desc));
		assert_eq!(parts[1].value, KeyValue::Text("Beta"));
		assert_eq!((parts[2].column, parts[2].direction), (KeyColumn::Id, Direction::Asc));
	}
}
