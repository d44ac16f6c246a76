//! Opaque keyset pagination cursors for directory listings.
//!
//! A cursor records the ordering fields of the last row on a page. It is minted by the
//! factory after a page is fetched, travels to the client as a base64url token, and is
//! decoded and checked against the next request's sort mode and search state before the
//! storage layer uses it as a keyset bound.

pub mod codec;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod factory;
pub mod keyset;
pub mod normalize;
pub mod validate;

pub use cursor::{
	Cursor, NameCursor, NewestCursor, RankedNameCursor, RankedNewestCursor, RankedVerifiedCursor,
	VerifiedCursor,
};
pub use decode::{decode_cursor, try_decode_cursor};
pub use error::{Error, Result};
pub use factory::{
	ListingRow, RankedListingRow, create_cursor_from_row, create_ranked_cursor_from_row,
	cursor_for_row, ranked_cursor_for_row,
};
pub use keyset::{Direction, KeyColumn, KeyPart, KeyValue, order_by, ordering};
pub use normalize::{normalize_limit, normalize_sort};
pub use servdir_domain::SortMode;
