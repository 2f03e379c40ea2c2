use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read config file at {path:?}.")]
	ReadConfig { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse config file at {path:?}.")]
	ParseConfig { path: PathBuf, source: toml::de::Error },
	/// `key` is the dotted TOML path of the rejected value, e.g. `generator.lookback_days`.
	#[error("{key} {reason}")]
	Validation { key: &'static str, reason: String },
}
impl Error {
	pub(crate) fn validation(key: &'static str, reason: impl Into<String>) -> Self {
		Self::Validation { key, reason: reason.into() }
	}
}
