use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub warehouse: Warehouse,
	pub generator: Generator,
	pub processing: Processing,
	pub roi: Roi,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	/// A `tracing_subscriber::EnvFilter` directive such as `info` or `insight_service=debug`.
	pub log_level: String,
}

/// Identifies the analytics warehouse the feedback tables would live in. Nothing in the
/// workspace connects to it; the values are carried for labeling output.
#[derive(Debug, Deserialize)]
pub struct Warehouse {
	pub project_id: String,
	pub dataset_id: String,
	pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct Generator {
	pub default_count: usize,
	/// Customer ids are drawn from `1..=customer_pool`.
	pub customer_pool: u32,
	pub lookback_days: u32,
	/// Probability that a generated text gets an urgency marker prefix.
	pub urgent_marker_rate: f64,
	pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Processing {
	pub summary_chars: usize,
}

#[derive(Debug, Deserialize)]
pub struct Roi {
	pub hours_saved_per_week: u32,
	pub analyst_hourly_rate: f64,
	pub response_time_improvement: f64,
	pub satisfaction_increase: f64,
	pub churn_prevention_per_quarter: f64,
	pub implementation_cost: f64,
	pub ongoing_cost_per_month: f64,
}
