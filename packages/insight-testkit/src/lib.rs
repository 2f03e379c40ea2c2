mod error;

pub use error::{Error, Result};

use rand::{SeedableRng, rngs::StdRng};
use time::{OffsetDateTime, macros::datetime};

use insight_config::Config;
use insight_domain::{Category, Channel, FeedbackMetadata, FeedbackRecord, Priority};

pub const SAMPLE_CONFIG: &str = include_str!("../../../insight.example.toml");

/// The shipped example config, parsed and validated.
pub fn sample_config() -> Result<Config> {
	let cfg: Config = toml::from_str(SAMPLE_CONFIG)?;

	insight_config::validate(&cfg)?;

	Ok(cfg)
}

pub fn seeded_rng(seed: u64) -> StdRng {
	StdRng::seed_from_u64(seed)
}

/// A fixed clock reading for tests that compare timestamps.
pub fn fixed_now() -> OffsetDateTime {
	datetime!(2025-09-20 12:00 UTC)
}

/// An unprocessed record with placeholder customer and metadata.
pub fn record(
	feedback_id: &str,
	raw_text: &str,
	channel: Channel,
	timestamp: OffsetDateTime,
) -> FeedbackRecord {
	FeedbackRecord {
		feedback_id: feedback_id.to_string(),
		customer_id: "customer_001".to_string(),
		channel,
		timestamp,
		raw_text: raw_text.to_string(),
		category: Category::Technical,
		processed: false,
		metadata: FeedbackMetadata { rating: None, priority: Priority::Medium },
	}
}
