use std::{
	io::{self, Write},
	path::PathBuf,
};

use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use insight_config::Config;
use insight_domain::{
	FeedbackGenerator,
	roi::{self, RoiInputs},
};
use insight_service::{InMemoryEngine, InsightEngine, analytics, summary};

const DEFAULT_CRITICAL_HOURS: u32 = 24;
const DEFAULT_SIMILAR_LIMIT: usize = 5;
const DEFAULT_TREND_DAYS: u32 = 30;

#[derive(Debug, Parser)]
#[command(
	version = insight_cli::VERSION,
	rename_all = "kebab",
	styles = insight_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Overrides `generator.seed` from the config.
	#[arg(long, value_name = "N")]
	pub seed: Option<u64>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Print a batch of synthetic feedback records.
	Generate {
		#[arg(long, value_name = "N")]
		count: Option<usize>,
		/// Print one JSON object per line instead of a pretty array.
		#[arg(long)]
		jsonl: bool,
	},
	/// Print the derived label of one text.
	Label { text: String },
	/// Generate, ingest and process a batch, then print the insights.
	Process {
		#[arg(long, value_name = "N")]
		count: Option<usize>,
	},
	/// Print sentiment trends, urgency distribution and channel performance.
	Analytics {
		#[arg(long, value_name = "N")]
		count: Option<usize>,
		#[arg(long, value_name = "DAYS", default_value_t = DEFAULT_TREND_DAYS)]
		days: u32,
	},
	/// Print critical issues from the last H hours.
	Critical {
		#[arg(long, value_name = "N")]
		count: Option<usize>,
		#[arg(long, value_name = "H", default_value_t = DEFAULT_CRITICAL_HOURS)]
		hours: u32,
	},
	/// Print generated records most similar to TEXT.
	Similar {
		text: String,
		#[arg(long, value_name = "N")]
		count: Option<usize>,
		#[arg(long, value_name = "K", default_value_t = DEFAULT_SIMILAR_LIMIT)]
		limit: usize,
	},
	/// Print the summary of one UTC day, today by default.
	Summary {
		#[arg(long, value_name = "N")]
		count: Option<usize>,
		#[arg(long, value_name = "YYYY-MM-DD")]
		date: Option<String>,
	},
	/// Print the ROI projection from the `[roi]` config section.
	Roi,
}
impl Command {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Generate { .. } => "generate",
			Self::Label { .. } => "label",
			Self::Process { .. } => "process",
			Self::Analytics { .. } => "analytics",
			Self::Critical { .. } => "critical",
			Self::Similar { .. } => "similar",
			Self::Summary { .. } => "summary",
			Self::Roi => "roi",
		}
	}
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = insight_config::load(&args.config)?;

	init_tracing(&config);

	let seed = args.seed.or(config.generator.seed);

	tracing::info!(command = args.command.name(), ?seed, "Running insight demo.");

	let mut rng = match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};
	let mut out = io::stdout().lock();

	execute(args.command, &config, &mut rng, OffsetDateTime::now_utc(), &mut out)
}

/// Runs one subcommand and writes its JSON output to `out`.
pub fn execute<R, W>(
	command: Command,
	config: &Config,
	rng: &mut R,
	now: OffsetDateTime,
	out: &mut W,
) -> color_eyre::Result<()>
where
	R: Rng + ?Sized,
	W: Write,
{
	match command {
		Command::Generate { count, jsonl } => {
			let records = generate(config, count, rng, now);

			if jsonl {
				for record in &records {
					serde_json::to_writer(&mut *out, record)?;
					writeln!(out)?;
				}

				return Ok(());
			}

			write_json(out, &records)
		},
		Command::Label { text } => write_json(out, &insight_domain::label(&text)),
		Command::Process { count } => {
			let mut engine = ingest(config, count, rng, now)?;
			let insights = engine.process_new_feedback(now)?;

			write_json(out, &insights)
		},
		Command::Analytics { count, days } => {
			let engine = processed(config, count, rng, now)?;
			let dashboard = analytics::dashboard(&engine.labeled(), now.date(), days);

			write_json(out, &dashboard)
		},
		Command::Critical { count, hours } => {
			let engine = processed(config, count, rng, now)?;

			write_json(out, &engine.critical_issues(hours, now))
		},
		Command::Similar { text, count, limit } => {
			let engine = ingest(config, count, rng, now)?;

			write_json(out, &engine.similar_issues(&text, limit)?)
		},
		Command::Summary { count, date } => {
			let date = match date {
				Some(raw) => summary::parse_date(&raw)?,
				None => now.date(),
			};
			let engine = processed(config, count, rng, now)?;

			write_json(out, &engine.daily_summary(date))
		},
		Command::Roi => write_json(out, &roi::calculate(&RoiInputs::from_config(&config.roi))),
	}
}

fn init_tracing(config: &Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn generate<R>(
	config: &Config,
	count: Option<usize>,
	rng: &mut R,
	now: OffsetDateTime,
) -> Vec<insight_domain::FeedbackRecord>
where
	R: Rng + ?Sized,
{
	let count = count.unwrap_or(config.generator.default_count);

	FeedbackGenerator::from_config(&config.generator).generate_at(count, now, rng)
}

fn ingest<R>(
	config: &Config,
	count: Option<usize>,
	rng: &mut R,
	now: OffsetDateTime,
) -> color_eyre::Result<InMemoryEngine>
where
	R: Rng + ?Sized,
{
	let mut engine = InMemoryEngine::from_config(config);

	engine.ingest(generate(config, count, rng, now))?;

	Ok(engine)
}

fn processed<R>(
	config: &Config,
	count: Option<usize>,
	rng: &mut R,
	now: OffsetDateTime,
) -> color_eyre::Result<InMemoryEngine>
where
	R: Rng + ?Sized,
{
	let mut engine = ingest(config, count, rng, now)?;

	engine.process_new_feedback(now)?;

	Ok(engine)
}

fn write_json<W, T>(out: &mut W, value: &T) -> color_eyre::Result<()>
where
	W: Write,
	T: Serialize + ?Sized,
{
	serde_json::to_writer_pretty(&mut *out, value)?;
	writeln!(out)?;

	Ok(())
}
