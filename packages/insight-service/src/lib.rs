pub mod analytics;
pub mod date_serde;
pub mod engine;
pub mod insight;
pub mod similarity;
pub mod summary;

mod error;

pub use analytics::{ChannelPerformance, Dashboard, SentimentTrendPoint, UrgencyCount};
pub use engine::InMemoryEngine;
pub use error::{Error, Result};
pub use insight::{CriticalIssue, FeedbackInsight};
pub use similarity::SimilarIssue;
pub use summary::DailySummary;

use time::{Date, OffsetDateTime};

use insight_domain::FeedbackRecord;

/// Storage and query surface for processed feedback.
///
/// [`InMemoryEngine`] backs tests and the demo binary. A warehouse-backed implementation would
/// translate the same calls into table reads and writes.
pub trait InsightEngine {
	/// Stores a batch. A batch containing an id that is already stored, or the same id twice, is
	/// rejected as a whole with [`Error::Conflict`]. Returns the number of records stored.
	fn ingest(&mut self, records: Vec<FeedbackRecord>) -> Result<usize>;

	/// Labels every unprocessed record, marks it processed, and returns the new insights in
	/// ingestion order.
	fn process_new_feedback(&mut self, now: OffsetDateTime) -> Result<Vec<FeedbackInsight>>;

	/// Critical insights whose feedback arrived within `hours` before `now`, newest first.
	fn critical_issues(&self, hours: u32, now: OffsetDateTime) -> Vec<CriticalIssue>;

	fn daily_summary(&self, date: Date) -> DailySummary;

	/// Stored feedback ranked by token overlap with `text`. `limit` must be non-zero.
	fn similar_issues(&self, text: &str, limit: usize) -> Result<Vec<SimilarIssue>>;
}
