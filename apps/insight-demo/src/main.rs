use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = insight_demo::Args::parse();

	insight_demo::run(args)
}
