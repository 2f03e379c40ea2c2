use serde::Serialize;

const WEEKS_PER_YEAR: f64 = 52.0;
const QUARTERS_PER_YEAR: f64 = 4.0;
const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RoiInputs {
	pub hours_saved_per_week: u32,
	pub analyst_hourly_rate: f64,
	pub response_time_improvement: f64,
	pub satisfaction_increase: f64,
	pub churn_prevention_per_quarter: f64,
	pub implementation_cost: f64,
	pub ongoing_cost_per_month: f64,
}
impl RoiInputs {
	pub fn from_config(cfg: &insight_config::Roi) -> Self {
		Self {
			hours_saved_per_week: cfg.hours_saved_per_week,
			analyst_hourly_rate: cfg.analyst_hourly_rate,
			response_time_improvement: cfg.response_time_improvement,
			satisfaction_increase: cfg.satisfaction_increase,
			churn_prevention_per_quarter: cfg.churn_prevention_per_quarter,
			implementation_cost: cfg.implementation_cost,
			ongoing_cost_per_month: cfg.ongoing_cost_per_month,
		}
	}
}
impl Default for RoiInputs {
	fn default() -> Self {
		Self {
			hours_saved_per_week: 16,
			analyst_hourly_rate: 45.0,
			response_time_improvement: 0.6,
			satisfaction_increase: 0.23,
			churn_prevention_per_quarter: 50_000.0,
			implementation_cost: 25_000.0,
			ongoing_cost_per_month: 2_000.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoiReport {
	pub annual_labor_savings: f64,
	pub annual_churn_prevention: f64,
	pub implementation_cost: f64,
	pub annual_ongoing_costs: f64,
	pub net_annual_benefit: f64,
	pub roi_percent: f64,
	/// `None` when the net annual benefit is not positive; the cost is never paid back.
	pub payback_months: Option<f64>,
	pub response_time_improvement: f64,
	pub satisfaction_increase: f64,
	pub hours_saved_per_week: u32,
}

pub fn calculate(inputs: &RoiInputs) -> RoiReport {
	let annual_labor_savings =
		f64::from(inputs.hours_saved_per_week) * WEEKS_PER_YEAR * inputs.analyst_hourly_rate;
	let annual_churn_prevention = inputs.churn_prevention_per_quarter * QUARTERS_PER_YEAR;
	let annual_ongoing_costs = inputs.ongoing_cost_per_month * MONTHS_PER_YEAR;
	let net_annual_benefit = annual_labor_savings + annual_churn_prevention - annual_ongoing_costs;
	let roi_percent =
		(net_annual_benefit - inputs.implementation_cost) / inputs.implementation_cost * 100.0;
	let payback_months = (net_annual_benefit > 0.0)
		.then(|| inputs.implementation_cost / (net_annual_benefit / MONTHS_PER_YEAR));

	RoiReport {
		annual_labor_savings,
		annual_churn_prevention,
		implementation_cost: inputs.implementation_cost,
		annual_ongoing_costs,
		net_annual_benefit,
		roi_percent,
		payback_months,
		response_time_improvement: inputs.response_time_improvement,
		satisfaction_increase: inputs.satisfaction_increase,
		hours_saved_per_week: inputs.hours_saved_per_week,
	}
}
