use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use insight_domain::{CategoryGuess, Channel, DerivedLabel, FeedbackRecord, UrgencyLevel, label};

pub const DEFAULT_SUMMARY_CHARS: usize = 100;
pub const SUMMARY_PREFIX: &str = "Customer reported: ";
pub const KEY_THEMES: [&str; 2] = ["customer_experience", "technical_issue"];
pub const ACTION_ITEMS: [&str; 3] = ["investigate_issue", "contact_customer", "escalate_to_team"];

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FeedbackInsight {
	pub feedback_id: String,
	pub sentiment_score: f64,
	pub urgency_level: UrgencyLevel,
	pub category: CategoryGuess,
	pub key_themes: Vec<String>,
	pub summary: String,
	pub action_items: Vec<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub processed_at: OffsetDateTime,
}
impl FeedbackInsight {
	pub fn derive(record: &FeedbackRecord, summary_chars: usize, now: OffsetDateTime) -> Self {
		let DerivedLabel { sentiment_score, urgency_level, category_guess } =
			label(&record.raw_text);

		Self {
			feedback_id: record.feedback_id.clone(),
			sentiment_score,
			urgency_level,
			category: category_guess,
			key_themes: KEY_THEMES.iter().map(|theme| theme.to_string()).collect(),
			summary: summarize(&record.raw_text, summary_chars),
			action_items: ACTION_ITEMS.iter().map(|item| item.to_string()).collect(),
			processed_at: now,
		}
	}

	pub fn label(&self) -> DerivedLabel {
		DerivedLabel {
			sentiment_score: self.sentiment_score,
			urgency_level: self.urgency_level,
			category_guess: self.category,
		}
	}
}

/// A critical insight joined with the feedback it was derived from.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CriticalIssue {
	pub feedback_id: String,
	pub customer_id: String,
	pub channel: Channel,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp: OffsetDateTime,
	pub raw_text: String,
	pub sentiment_score: f64,
	pub category: CategoryGuess,
}
impl CriticalIssue {
	pub fn new(record: &FeedbackRecord, insight: &FeedbackInsight) -> Self {
		Self {
			feedback_id: record.feedback_id.clone(),
			customer_id: record.customer_id.clone(),
			channel: record.channel,
			timestamp: record.timestamp,
			raw_text: record.raw_text.clone(),
			sentiment_score: insight.sentiment_score,
			category: insight.category,
		}
	}
}

/// Truncates on character boundaries, never inside a multi-byte character.
pub fn summarize(text: &str, max_chars: usize) -> String {
	let head: String = text.chars().take(max_chars).collect();

	format!("{SUMMARY_PREFIX}{head}")
}
