//! Dashboard aggregates over labeled feedback.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use time::{Date, Duration, UtcOffset};

use insight_domain::{Channel, DerivedLabel, FeedbackRecord, UrgencyLevel};

pub type Labeled<'a> = (&'a FeedbackRecord, DerivedLabel);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SentimentTrendPoint {
	#[serde(with = "crate::date_serde")]
	pub date: Date,
	pub avg_sentiment: f64,
	pub feedback_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UrgencyCount {
	pub urgency_level: UrgencyLevel,
	pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChannelPerformance {
	pub channel: Channel,
	pub total_feedback: usize,
	pub avg_sentiment: f64,
	pub critical_issues: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
	pub sentiment_trends: Vec<SentimentTrendPoint>,
	pub urgency_distribution: Vec<UrgencyCount>,
	pub channel_performance: Vec<ChannelPerformance>,
}

#[derive(Default)]
struct Accumulator {
	count: usize,
	sentiment_sum: f64,
	critical: usize,
}
impl Accumulator {
	fn add(&mut self, label: &DerivedLabel) {
		self.count += 1;
		self.sentiment_sum += label.sentiment_score;

		if label.urgency_level == UrgencyLevel::Critical {
			self.critical += 1;
		}
	}

	fn mean(&self) -> f64 {
		if self.count == 0 { 0.0 } else { self.sentiment_sum / self.count as f64 }
	}
}

pub fn dashboard(labeled: &[Labeled<'_>], today: Date, window_days: u32) -> Dashboard {
	Dashboard {
		sentiment_trends: sentiment_trends(labeled, today, window_days),
		urgency_distribution: urgency_distribution(labeled),
		channel_performance: channel_performance(labeled),
	}
}

/// Daily mean sentiment for UTC dates in `today - window_days ..= today`, newest first.
pub fn sentiment_trends(
	labeled: &[Labeled<'_>],
	today: Date,
	window_days: u32,
) -> Vec<SentimentTrendPoint> {
	let earliest =
		today.checked_sub(Duration::days(i64::from(window_days))).unwrap_or(Date::MIN);
	let mut by_date: BTreeMap<Date, Accumulator> = BTreeMap::new();

	for (record, label) in labeled {
		let date = record.timestamp.to_offset(UtcOffset::UTC).date();

		if date < earliest || date > today {
			continue;
		}

		by_date.entry(date).or_default().add(label);
	}

	by_date
		.into_iter()
		.rev()
		.map(|(date, acc)| SentimentTrendPoint {
			date,
			avg_sentiment: acc.mean(),
			feedback_count: acc.count,
		})
		.collect()
}

/// Levels with at least one item, most frequent first. Equal counts list the more severe level
/// first.
pub fn urgency_distribution(labeled: &[Labeled<'_>]) -> Vec<UrgencyCount> {
	let mut counts: HashMap<UrgencyLevel, usize> = HashMap::new();

	for (_, label) in labeled {
		*counts.entry(label.urgency_level).or_default() += 1;
	}

	let mut out: Vec<_> = counts
		.into_iter()
		.map(|(urgency_level, count)| UrgencyCount { urgency_level, count })
		.collect();

	out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| b.urgency_level.cmp(&a.urgency_level)));

	out
}

pub fn channel_performance(labeled: &[Labeled<'_>]) -> Vec<ChannelPerformance> {
	let mut by_channel: HashMap<Channel, Accumulator> = HashMap::new();

	for (record, label) in labeled {
		by_channel.entry(record.channel).or_default().add(label);
	}

	let mut out: Vec<_> = by_channel
		.into_iter()
		.map(|(channel, acc)| ChannelPerformance {
			channel,
			total_feedback: acc.count,
			avg_sentiment: acc.mean(),
			critical_issues: acc.critical,
		})
		.collect();

	out.sort_by(|a, b| {
		b.total_feedback
			.cmp(&a.total_feedback)
			.then_with(|| a.channel.as_str().cmp(b.channel.as_str()))
	});

	out
}
