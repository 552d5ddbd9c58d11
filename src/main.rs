use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::prelude::*;
use rand_pcg::Pcg32;
use rand_seeder::Seeder;
use sectorgen::{ConfigError, GenerationConfig, Strategy, TileKind, TileSet};

/// Generates a level and prints it, one character per tile.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
	/// TOML file with generation settings. Flags take precedence.
	#[arg(long)]
	config: Option<PathBuf>,
	#[arg(long)]
	width: Option<i32>,
	#[arg(long)]
	height: Option<i32>,
	#[arg(long)]
	min_sector_width: Option<i32>,
	#[arg(long)]
	min_sector_height: Option<i32>,
	/// Number of split attempts.
	#[arg(long)]
	tries: Option<u32>,
	#[arg(long, value_enum)]
	strategy: Option<Strategy>,
	/// Any string. The same seed always produces the same level.
	#[arg(long)]
	seed: Option<String>,
}

fn main() -> Result<(), ConfigError> {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.init();
	let args = Args::parse();

	let mut config = match &args.config {
		Some(path) => GenerationConfig::load(path)?,
		None => GenerationConfig::default(),
	};
	config.width = args.width.unwrap_or(config.width);
	config.height = args.height.unwrap_or(config.height);
	config.min_sector_width =
		args.min_sector_width.unwrap_or(config.min_sector_width);
	config.min_sector_height =
		args.min_sector_height.unwrap_or(config.min_sector_height);
	config.max_split_tries = args.tries.unwrap_or(config.max_split_tries);
	config.strategy = args.strategy.unwrap_or(config.strategy);
	config.validate()?;

	let mut rng: Pcg32 = match &args.seed {
		Some(seed) => Seeder::from(seed.as_str()).make_rng(),
		None => Pcg32::from_entropy(),
	};
	let tile_set = TileSet {
		wall: '#',
		ground: '.',
	};
	let world = config.generate(&tile_set, &mut rng)?;
	info!(
		"generated {}x{} {:?} level with {} ground tiles",
		world.width(),
		world.height(),
		config.strategy,
		world.count(TileKind::Ground),
	);
	print!("{world}");
	Ok(())
}
