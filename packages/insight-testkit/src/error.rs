pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to parse sample config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error(transparent)]
	Config(#[from] insight_config::Error),
}
