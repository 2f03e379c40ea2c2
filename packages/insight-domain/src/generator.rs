//! Synthetic customer feedback.
//!
//! Texts come from fixed per-category template pools with placeholder substitution. A share of
//! them get an urgency marker prefix so the labeler's critical rule has something to find.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use insight_config::{MAX_CUSTOMER_POOL, MAX_LOOKBACK_DAYS};

use crate::feedback::{Category, Channel, FeedbackMetadata, FeedbackRecord, Priority};

pub const DEFAULT_CUSTOMER_POOL: u32 = 50;
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;
pub const DEFAULT_URGENT_MARKER_RATE: f64 = 0.15;

pub const URGENCY_MARKERS: [&str; 5] = ["URGENT", "ASAP", "immediately", "critical", "emergency"];

const TECHNICAL_TEMPLATES: [&str; 5] = [
	"The app keeps crashing when I try to {action}. This is really frustrating!",
	"I can't access my {feature} after the latest update. Need help ASAP.",
	"The {feature} is not working properly. Getting error messages constantly.",
	"Very slow performance when {action}. Takes forever to load.",
	"Login issues persist. Can't authenticate properly.",
];
const BILLING_TEMPLATES: [&str; 5] = [
	"I was charged twice for my subscription this month. Please refund immediately.",
	"My billing shows incorrect amounts. Need clarification on charges.",
	"Automatic renewal didn't work. Please update my payment method.",
	"Discount code wasn't applied to my order. Can you fix this?",
	"Subscription cancellation didn't go through. Still being charged.",
];
const PRODUCT_TEMPLATES: [&str; 5] = [
	"Love the new {feature}! Makes everything so much easier.",
	"The {feature} could be improved. Here's my suggestion: {suggestion}",
	"Missing feature: {suggestion}. Would be great to have this.",
	"Great product overall but {feature} needs work.",
	"Excellent customer service and product quality!",
];
const SHIPPING_TEMPLATES: [&str; 5] = [
	"My order is late. Expected delivery was {date}. Where is it?",
	"Package arrived damaged. Need replacement urgently.",
	"Wrong item shipped. Ordered {item} but received {wrong_item}.",
	"Fast shipping! Arrived earlier than expected. Very pleased.",
	"Tracking information isn't updating. Is my package lost?",
];

const ACTIONS: [&str; 5] =
	["upload files", "sync data", "export reports", "share links", "update profile"];
const FEATURES: [&str; 6] =
	["dashboard", "mobile app", "reporting", "integrations", "API", "search"];
const SUGGESTIONS: [&str; 4] =
	["bulk operations", "better filters", "dark mode", "mobile optimization"];

const PLACEHOLDERS: [(&str, &[&str]); 6] = [
	("{action}", &ACTIONS),
	("{feature}", &FEATURES),
	("{suggestion}", &SUGGESTIONS),
	("{date}", &["yesterday"]),
	("{item}", &["premium plan"]),
	("{wrong_item}", &["basic plan"]),
];

/// Produces batches of [`FeedbackRecord`].
///
/// The generator holds no RNG. Callers pass their own, so independent call sites never share a
/// stream and a seeded RNG reproduces a batch exactly.
#[derive(Clone, Debug)]
pub struct FeedbackGenerator {
	customer_pool: u32,
	lookback_days: u32,
	urgent_marker_rate: f64,
}
impl FeedbackGenerator {
	pub fn new() -> Self {
		Self {
			customer_pool: DEFAULT_CUSTOMER_POOL,
			lookback_days: DEFAULT_LOOKBACK_DAYS,
			urgent_marker_rate: DEFAULT_URGENT_MARKER_RATE,
		}
	}

	pub fn from_config(cfg: &insight_config::Generator) -> Self {
		Self::new()
			.with_customer_pool(cfg.customer_pool)
			.with_lookback_days(cfg.lookback_days)
			.with_urgent_marker_rate(cfg.urgent_marker_rate)
	}

	pub fn with_customer_pool(mut self, pool: u32) -> Self {
		self.customer_pool = pool.clamp(1, MAX_CUSTOMER_POOL);

		self
	}

	pub fn with_lookback_days(mut self, days: u32) -> Self {
		self.lookback_days = days.clamp(1, MAX_LOOKBACK_DAYS);

		self
	}

	/// Non-finite rates fall back to the default; others are clamped to `0.0..=1.0`.
	pub fn with_urgent_marker_rate(mut self, rate: f64) -> Self {
		self.urgent_marker_rate =
			if rate.is_finite() { rate.clamp(0.0, 1.0) } else { DEFAULT_URGENT_MARKER_RATE };

		self
	}

	pub fn generate<R>(&self, count: usize, rng: &mut R) -> Vec<FeedbackRecord>
	where
		R: Rng + ?Sized,
	{
		self.generate_at(count, OffsetDateTime::now_utc(), rng)
	}

	/// Same as [`generate`](Self::generate) with timestamps measured back from `now`.
	pub fn generate_at<R>(
		&self,
		count: usize,
		now: OffsetDateTime,
		rng: &mut R,
	) -> Vec<FeedbackRecord>
	where
		R: Rng + ?Sized,
	{
		let records: Vec<_> = (0..count).map(|index| self.record(index, now, rng)).collect();

		tracing::debug!(count = records.len(), "Generated synthetic feedback batch.");

		records
	}

	fn record<R>(&self, index: usize, now: OffsetDateTime, rng: &mut R) -> FeedbackRecord
	where
		R: Rng + ?Sized,
	{
		let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
		let template = pick(rng, templates(category));
		let channel = Channel::ALL[rng.random_range(0..Channel::ALL.len())];
		let mut raw_text = fill_template(template, rng);

		if rng.random_bool(self.urgent_marker_rate) {
			raw_text = format!("{}: {raw_text}", pick(rng, &URGENCY_MARKERS));
		}

		let customer = rng.random_range(1..=self.customer_pool);
		let days = rng.random_range(0..i64::from(self.lookback_days));
		let hours = rng.random_range(0..24_i64);
		let rating = (channel == Channel::Review).then(|| rng.random_range(1..=5_u8));
		let priority = Priority::ALL[rng.random_range(0..Priority::ALL.len())];

		FeedbackRecord {
			feedback_id: format!("feedback_{:03}", index + 1),
			customer_id: format!("customer_{customer:03}"),
			channel,
			timestamp: now - Duration::days(days) - Duration::hours(hours),
			raw_text,
			category,
			processed: false,
			metadata: FeedbackMetadata { rating, priority },
		}
	}
}
impl Default for FeedbackGenerator {
	fn default() -> Self {
		Self::new()
	}
}

pub fn templates(category: Category) -> &'static [&'static str] {
	match category {
		Category::Technical => &TECHNICAL_TEMPLATES,
		Category::Billing => &BILLING_TEMPLATES,
		Category::Product => &PRODUCT_TEMPLATES,
		Category::Shipping => &SHIPPING_TEMPLATES,
	}
}

/// One value is drawn per placeholder name; repeated occurrences share it.
fn fill_template<R>(template: &str, rng: &mut R) -> String
where
	R: Rng + ?Sized,
{
	let mut text = template.to_string();

	for (placeholder, pool) in PLACEHOLDERS {
		if text.contains(placeholder) {
			text = text.replace(placeholder, pick(rng, pool));
		}
	}

	text
}

// Pools are non-empty constants.
fn pick<'a, R>(rng: &mut R, pool: &[&'a str]) -> &'a str
where
	R: Rng + ?Sized,
{
	pool[rng.random_range(0..pool.len())]
}
