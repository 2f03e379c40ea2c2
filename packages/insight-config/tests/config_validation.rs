use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use insight_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("../../../insight.example.toml");

fn sample_toml_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let table = root
		.as_table_mut()
		.expect("Sample config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.unwrap_or_else(|| panic!("Sample config must include [{section}]."));

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("insight_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.")
}

#[test]
fn sample_config_loads() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML.to_string());
	let result = insight_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Sample config must load.");

	assert_eq!(cfg.generator.default_count, 100);
	assert_eq!(cfg.generator.customer_pool, 50);
	assert_eq!(cfg.generator.seed, Some(42));
	assert_eq!(cfg.warehouse.dataset_id, "customer_insights");
	assert_eq!(cfg.processing.summary_chars, 100);
}

#[test]
fn load_trims_string_values() {
	let payload = sample_toml_with("warehouse", "location", Value::String("  EU \n".to_string()));
	let path = write_temp_config(payload);
	let result = insight_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert_eq!(result.expect("Config must load.").warehouse.location, "EU");
}

#[test]
fn missing_file_reports_read_error() {
	let mut path = env::temp_dir();

	path.push("insight_config_test_does_not_exist.toml");

	let err = insight_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn malformed_toml_reports_parse_error() {
	let path = write_temp_config("[service\nlog_level = ".to_string());
	let result = insight_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn urgent_marker_rate_must_be_a_probability() {
	let payload = sample_toml_with("generator", "urgent_marker_rate", Value::Float(1.5));
	let path = write_temp_config(payload);
	let result = insight_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected urgent_marker_rate validation error.");
	let message = err.to_string();

	assert!(
		message.contains("generator.urgent_marker_rate must be in the range 0.0-1.0."),
		"Unexpected error message: {message}"
	);
}

#[test]
fn blank_project_id_is_rejected() {
	let mut cfg = base_config();

	cfg.warehouse.project_id = "   ".to_string();

	let err = insight_config::validate(&cfg).expect_err("Expected project_id validation error.");

	assert!(
		matches!(err, Error::Validation { key: "warehouse.project_id", .. }),
		"Unexpected error: {err}"
	);
}

#[test]
fn generator_bounds_are_enforced() {
	let mut cfg = base_config();

	cfg.generator.customer_pool = 1_000;

	let err = insight_config::validate(&cfg).expect_err("Expected customer_pool validation error.");

	assert_eq!(err.to_string(), "generator.customer_pool must be 999 or less.");

	cfg = base_config();
	cfg.generator.lookback_days = 0;

	let err = insight_config::validate(&cfg).expect_err("Expected lookback_days validation error.");

	assert_eq!(err.to_string(), "generator.lookback_days must be greater than zero.");

	cfg = base_config();
	cfg.generator.lookback_days = u32::MAX;

	let err = insight_config::validate(&cfg).expect_err("Expected lookback_days validation error.");

	assert_eq!(err.to_string(), "generator.lookback_days must be 3650 or less.");

	cfg.generator.lookback_days = insight_config::MAX_LOOKBACK_DAYS;

	assert!(insight_config::validate(&cfg).is_ok());

	cfg = base_config();
	cfg.generator.default_count = 0;

	assert!(insight_config::validate(&cfg).is_err());
}

#[test]
fn roi_values_must_be_finite_and_non_negative() {
	let mut cfg = base_config();

	cfg.roi.ongoing_cost_per_month = -1.0;

	let err = insight_config::validate(&cfg).expect_err("Expected negative cost validation error.");

	assert_eq!(err.to_string(), "roi.ongoing_cost_per_month must be zero or greater.");

	cfg = base_config();
	cfg.roi.analyst_hourly_rate = f64::NAN;

	let err = insight_config::validate(&cfg).expect_err("Expected NaN validation error.");

	assert_eq!(err.to_string(), "roi.analyst_hourly_rate must be a finite number.");

	cfg = base_config();
	cfg.roi.implementation_cost = 0.0;

	let err =
		insight_config::validate(&cfg).expect_err("Expected implementation_cost validation error.");

	assert_eq!(err.to_string(), "roi.implementation_cost must be greater than zero.");
}

#[test]
fn seed_is_optional() {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");

	root.as_table_mut()
		.and_then(|table| table.get_mut("generator"))
		.and_then(Value::as_table_mut)
		.expect("Sample config must include [generator].")
		.remove("seed");

	let cfg: Config = toml::from_str(&toml::to_string(&root).expect("Failed to render config."))
		.expect("Config without a seed must parse.");

	assert_eq!(cfg.generator.seed, None);
	assert!(insight_config::validate(&cfg).is_ok());
}
