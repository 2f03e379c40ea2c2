use std::collections::BTreeMap;

use serde::Serialize;
use time::{Date, UtcOffset};

use insight_domain::{CategoryGuess, UrgencyLevel};

use crate::{Error, Result, analytics::Labeled, date_serde};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailySummary {
	#[serde(with = "crate::date_serde")]
	pub date: Date,
	pub total_feedback: usize,
	pub average_sentiment: f64,
	pub urgency_counts: BTreeMap<UrgencyLevel, usize>,
	pub category_counts: BTreeMap<CategoryGuess, usize>,
	pub critical_feedback_ids: Vec<String>,
}

/// Summarizes labeled feedback whose UTC timestamp falls on `date`.
pub fn summarize_day(labeled: &[Labeled<'_>], date: Date) -> DailySummary {
	let mut total_feedback = 0;
	let mut sentiment_sum = 0.0;
	let mut urgency_counts = BTreeMap::new();
	let mut category_counts = BTreeMap::new();
	let mut critical_feedback_ids = Vec::new();

	for (record, label) in labeled {
		if record.timestamp.to_offset(UtcOffset::UTC).date() != date {
			continue;
		}

		total_feedback += 1;
		sentiment_sum += label.sentiment_score;

		*urgency_counts.entry(label.urgency_level).or_insert(0) += 1;
		*category_counts.entry(label.category_guess).or_insert(0) += 1;

		if label.urgency_level == UrgencyLevel::Critical {
			critical_feedback_ids.push(record.feedback_id.clone());
		}
	}

	let average_sentiment =
		if total_feedback == 0 { 0.0 } else { sentiment_sum / total_feedback as f64 };

	DailySummary {
		date,
		total_feedback,
		average_sentiment,
		urgency_counts,
		category_counts,
		critical_feedback_ids,
	}
}

pub fn parse_date(raw: &str) -> Result<Date> {
	Date::parse(raw.trim(), date_serde::ISO_DATE).map_err(|err| Error::InvalidRequest {
		message: format!("Date {raw:?} is not YYYY-MM-DD: {err}."),
	})
}

#[cfg(test)]
mod tests {
	use time::macros::date;

	use super::*;

	#[test]
	fn parses_iso_dates() {
		assert_eq!(parse_date("2025-09-20").expect("Date must parse."), date!(2025 - 09 - 20));
		assert_eq!(parse_date(" 2025-01-02 ").expect("Date must parse."), date!(2025 - 01 - 02));
	}

	#[test]
	fn rejects_malformed_dates() {
		for raw in ["", "2025-13-01", "20/09/2025", "yesterday"] {
			assert!(matches!(parse_date(raw), Err(Error::InvalidRequest { .. })), "{raw}");
		}
	}
}
