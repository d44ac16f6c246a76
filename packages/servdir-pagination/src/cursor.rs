use servdir_domain::SortMode;

/// A decoded pagination position.
///
/// Each variant carries exactly the ordering fields of its sort mode, in `ORDER BY`
/// precedence, with `id` as the final tie-breaker. Ranked variants add the relevance rank
/// used when a search query is active.
#[derive(Clone, Debug, PartialEq)]
pub enum Cursor {
	Verified(VerifiedCursor),
	Newest(NewestCursor),
	Name(NameCursor),
	RankedVerified(RankedVerifiedCursor),
	RankedNewest(RankedNewestCursor),
	RankedName(RankedNameCursor),
}
impl Cursor {
	pub fn sort(&self) -> SortMode {
		match self {
			Self::Verified(_) | Self::RankedVerified(_) => SortMode::Verified,
			Self::Newest(_) | Self::RankedNewest(_) => SortMode::Newest,
			Self::Name(_) | Self::RankedName(_) => SortMode::Name,
		}
	}

	pub fn is_ranked(&self) -> bool {
		matches!(self, Self::RankedVerified(_) | Self::RankedNewest(_) | Self::RankedName(_))
	}

	pub fn rank(&self) -> Option<f64> {
		match self {
			Self::RankedVerified(cursor) => Some(cursor.rank),
			Self::RankedNewest(cursor) => Some(cursor.rank),
			Self::RankedName(cursor) => Some(cursor.rank),
			Self::Verified(_) | Self::Newest(_) | Self::Name(_) => None,
		}
	}

	pub fn id(&self) -> &str {
		match self {
			Self::Verified(cursor) => &cursor.id,
			Self::Newest(cursor) => &cursor.id,
			Self::Name(cursor) => &cursor.id,
			Self::RankedVerified(cursor) => &cursor.id,
			Self::RankedNewest(cursor) => &cursor.id,
			Self::RankedName(cursor) => &cursor.id,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedCursor {
	pub verified: bool,
	pub created_at: String,
	pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewestCursor {
	pub created_at: String,
	pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCursor {
	pub name: String,
	pub id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedVerifiedCursor {
	pub verified: bool,
	pub rank: f64,
	pub created_at: String,
	pub id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedNewestCursor {
	pub rank: f64,
	pub created_at: String,
	pub id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedNameCursor {
	pub rank: f64,
	pub name: String,
	pub id: String,
}
