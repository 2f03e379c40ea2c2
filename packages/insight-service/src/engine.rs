use std::collections::{HashMap, HashSet};

use time::{Date, Duration, OffsetDateTime};

use insight_domain::{FeedbackRecord, UrgencyLevel};

use crate::{
	Error, InsightEngine, Result,
	analytics::Labeled,
	insight::{CriticalIssue, DEFAULT_SUMMARY_CHARS, FeedbackInsight},
	similarity::{self, SimilarIssue},
	summary::{self, DailySummary},
};

/// Keeps feedback and insights in insertion order in process memory.
#[derive(Debug)]
pub struct InMemoryEngine {
	summary_chars: usize,
	records: Vec<FeedbackRecord>,
	positions: HashMap<String, usize>,
	insights: Vec<FeedbackInsight>,
}
impl InMemoryEngine {
	pub fn new(summary_chars: usize) -> Self {
		Self {
			summary_chars: summary_chars.max(1),
			records: Vec::new(),
			positions: HashMap::new(),
			insights: Vec::new(),
		}
	}

	pub fn from_config(cfg: &insight_config::Config) -> Self {
		Self::new(cfg.processing.summary_chars)
	}

	pub fn records(&self) -> &[FeedbackRecord] {
		&self.records
	}

	pub fn insights(&self) -> &[FeedbackInsight] {
		&self.insights
	}

	pub fn record(&self, feedback_id: &str) -> Option<&FeedbackRecord> {
		self.positions.get(feedback_id).map(|&position| &self.records[position])
	}

	/// Processed feedback paired with its label, in processing order.
	pub fn labeled(&self) -> Vec<Labeled<'_>> {
		self.insights
			.iter()
			.filter_map(|insight| {
				self.record(&insight.feedback_id).map(|record| (record, insight.label()))
			})
			.collect()
	}
}
impl Default for InMemoryEngine {
	fn default() -> Self {
		Self::new(DEFAULT_SUMMARY_CHARS)
	}
}
impl InsightEngine for InMemoryEngine {
	fn ingest(&mut self, records: Vec<FeedbackRecord>) -> Result<usize> {
		let mut batch_ids = HashSet::with_capacity(records.len());

		for record in &records {
			if self.positions.contains_key(&record.feedback_id)
				|| !batch_ids.insert(record.feedback_id.as_str())
			{
				tracing::warn!(
					feedback_id = %record.feedback_id,
					"Rejected feedback batch with duplicate id."
				);

				return Err(Error::Conflict {
					message: format!("Duplicate feedback id {}.", record.feedback_id),
				});
			}
		}

		let stored = records.len();

		for record in records {
			self.positions.insert(record.feedback_id.clone(), self.records.len());
			self.records.push(record);
		}

		tracing::info!(stored, total = self.records.len(), "Ingested feedback batch.");

		Ok(stored)
	}

	fn process_new_feedback(&mut self, now: OffsetDateTime) -> Result<Vec<FeedbackInsight>> {
		let mut created = Vec::new();

		for record in self.records.iter_mut().filter(|record| !record.processed) {
			created.push(FeedbackInsight::derive(record, self.summary_chars, now));
			record.processed = true;
		}

		self.insights.extend(created.iter().cloned());

		tracing::info!(processed = created.len(), "Processed new feedback.");

		Ok(created)
	}

	fn critical_issues(&self, hours: u32, now: OffsetDateTime) -> Vec<CriticalIssue> {
		// No lower bound when the window reaches past the earliest representable instant.
		let cutoff = now.checked_sub(Duration::hours(i64::from(hours)));
		let mut issues: Vec<_> = self
			.insights
			.iter()
			.filter(|insight| insight.urgency_level == UrgencyLevel::Critical)
			.filter_map(|insight| {
				self.record(&insight.feedback_id).map(|record| CriticalIssue::new(record, insight))
			})
			.filter(|issue| {
				cutoff.is_none_or(|cutoff| issue.timestamp >= cutoff) && issue.timestamp <= now
			})
			.collect();

		issues.sort_by(|a, b| {
			b.timestamp.cmp(&a.timestamp).then_with(|| a.feedback_id.cmp(&b.feedback_id))
		});

		issues
	}

	fn daily_summary(&self, date: Date) -> DailySummary {
		summary::summarize_day(&self.labeled(), date)
	}

	fn similar_issues(&self, text: &str, limit: usize) -> Result<Vec<SimilarIssue>> {
		if limit == 0 {
			return Err(Error::InvalidRequest {
				message: "limit must be greater than zero.".to_string(),
			});
		}

		Ok(similarity::rank(text, &self.records, limit))
	}
}
