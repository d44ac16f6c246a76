mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Pagination, SORT_MODES};

use std::{fs, path::Path};

use error::invalid;

/// Reads, normalizes, and validates the TOML file at `path`.
pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|source| Error::ReadConfig { path: path.to_path_buf(), source })?;
	let mut cfg = toml::from_str::<Config>(&raw)
		.map_err(|source| Error::ParseConfig { path: path.to_path_buf(), source })?;

	normalize(&mut cfg);
	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	let pagination = &cfg.pagination;

	if pagination.min_limit == 0 {
		return Err(invalid("pagination.min_limit", "must be greater than zero."));
	}
	if pagination.min_limit > pagination.max_limit {
		return Err(invalid("pagination.min_limit", "must not exceed pagination.max_limit."));
	}
	if !(pagination.min_limit..=pagination.max_limit).contains(&pagination.default_limit) {
		return Err(invalid(
			"pagination.default_limit",
			"must be within pagination.min_limit and pagination.max_limit.",
		));
	}
	if !SORT_MODES.contains(&pagination.default_sort.as_str()) {
		return Err(invalid("pagination.default_sort", "must be one of verified, newest, or name."));
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let sort = cfg.pagination.default_sort.trim().to_ascii_lowercase();

	cfg.pagination.default_sort = if sort.is_empty() { "verified".to_string() } else { sort };
}
