pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Storage error: {message}")]
	Storage { message: String },
	#[error("Cursor error: {message}")]
	Cursor { message: String },
}
impl From<servdir_pagination::Error> for Error {
	fn from(err: servdir_pagination::Error) -> Self {
		Self::Cursor { message: err.to_string() }
	}
}
