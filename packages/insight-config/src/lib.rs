mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Generator, Processing, Roi, Service, Warehouse};

use std::{fs, path::Path};

/// Customer numbers are rendered with three digits.
pub const MAX_CUSTOMER_POOL: u32 = 999;
/// Upper bound for the generator's timestamp spread.
pub const MAX_LOOKBACK_DAYS: u32 = 3_650;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	for (key, value) in [
		("service.log_level", &cfg.service.log_level),
		("warehouse.project_id", &cfg.warehouse.project_id),
		("warehouse.dataset_id", &cfg.warehouse.dataset_id),
		("warehouse.location", &cfg.warehouse.location),
	] {
		if value.trim().is_empty() {
			return Err(Error::validation(key, "must be non-empty."));
		}
	}

	if cfg.generator.default_count == 0 {
		return Err(Error::validation("generator.default_count", "must be greater than zero."));
	}
	if cfg.generator.customer_pool == 0 {
		return Err(Error::validation("generator.customer_pool", "must be greater than zero."));
	}
	if cfg.generator.customer_pool > MAX_CUSTOMER_POOL {
		return Err(Error::validation(
			"generator.customer_pool",
			format!("must be {MAX_CUSTOMER_POOL} or less."),
		));
	}
	if cfg.generator.lookback_days == 0 {
		return Err(Error::validation("generator.lookback_days", "must be greater than zero."));
	}
	if cfg.generator.lookback_days > MAX_LOOKBACK_DAYS {
		return Err(Error::validation(
			"generator.lookback_days",
			format!("must be {MAX_LOOKBACK_DAYS} or less."),
		));
	}
	if !cfg.generator.urgent_marker_rate.is_finite() {
		return Err(Error::validation("generator.urgent_marker_rate", "must be a finite number."));
	}
	if !(0.0..=1.0).contains(&cfg.generator.urgent_marker_rate) {
		return Err(Error::validation(
			"generator.urgent_marker_rate",
			"must be in the range 0.0-1.0.",
		));
	}
	if cfg.processing.summary_chars == 0 {
		return Err(Error::validation("processing.summary_chars", "must be greater than zero."));
	}

	for (key, value) in [
		("roi.analyst_hourly_rate", cfg.roi.analyst_hourly_rate),
		("roi.response_time_improvement", cfg.roi.response_time_improvement),
		("roi.satisfaction_increase", cfg.roi.satisfaction_increase),
		("roi.churn_prevention_per_quarter", cfg.roi.churn_prevention_per_quarter),
		("roi.implementation_cost", cfg.roi.implementation_cost),
		("roi.ongoing_cost_per_month", cfg.roi.ongoing_cost_per_month),
	] {
		if !value.is_finite() {
			return Err(Error::validation(key, "must be a finite number."));
		}
		if value < 0.0 {
			return Err(Error::validation(key, "must be zero or greater."));
		}
	}

	if cfg.roi.implementation_cost == 0.0 {
		return Err(Error::validation("roi.implementation_cost", "must be greater than zero."));
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for value in [
		&mut cfg.service.log_level,
		&mut cfg.warehouse.project_id,
		&mut cfg.warehouse.dataset_id,
		&mut cfg.warehouse.location,
	] {
		let trimmed = value.trim();

		if trimmed.len() != value.len() {
			*value = trimmed.to_string();
		}
	}
}
