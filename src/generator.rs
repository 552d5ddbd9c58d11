use clap::ValueEnum;
use log::debug;
use rand_pcg::Pcg32;
use serde::Deserialize;

use crate::{
	config::{ConfigError, GenerationConfig},
	partition::Partition,
	tile::{TileKind, TileSet},
	world::World,
};

/// A way of turning a blank grid into a [`World`].
pub trait Generator {
	fn generate<H: Clone>(
		&self,
		tile_set: &TileSet<H>,
		rng: &mut Pcg32,
	) -> World<H>;
}

/// Surrounds a single open room with walls.
#[derive(Clone, Copy, Debug)]
pub struct SimpleGenerator {
	pub width: i32,
	pub height: i32,
}

impl Generator for SimpleGenerator {
	fn generate<H: Clone>(
		&self,
		tile_set: &TileSet<H>,
		_rng: &mut Pcg32,
	) -> World<H> {
		let (width, height) = (self.width, self.height);
		World::from_fn(width, height, tile_set, |coords| {
			if coords.x == 0
				|| coords.x == width - 1
				|| coords.y == 0
				|| coords.y == height - 1
			{
				TileKind::Wall
			} else {
				TileKind::Ground
			}
		})
	}
}

/// Opens up the sectors of a random [`Partition`], leaving one-tile walls
/// between them.
#[derive(Clone, Debug)]
pub struct PartitionGenerator {
	config: GenerationConfig,
}

impl PartitionGenerator {
	pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
		config.validate_for(Strategy::Partitioned)?;
		Ok(PartitionGenerator { config })
	}

	pub fn config(&self) -> &GenerationConfig {
		&self.config
	}

	/// Builds a world with ground over every active sector of `partition`
	/// and walls everywhere else.
	pub fn rasterize<H: Clone>(
		&self,
		partition: &Partition,
		tile_set: &TileSet<H>,
	) -> World<H> {
		let (width, height) = (self.config.width, self.config.height);
		let mut kinds = vec![TileKind::Wall; (width * height) as usize];
		for sector in partition.active_sectors() {
			for y in sector.vertical.min()..=sector.vertical.max() {
				for x in sector.horizontal.min()..=sector.horizontal.max() {
					kinds[(y * width + x) as usize] = TileKind::Ground;
				}
			}
		}
		World::from_fn(width, height, tile_set, |coords| {
			kinds[(coords.y * width + coords.x) as usize]
		})
	}
}

impl Generator for PartitionGenerator {
	fn generate<H: Clone>(
		&self,
		tile_set: &TileSet<H>,
		rng: &mut Pcg32,
	) -> World<H> {
		let partition = Partition::generate(&self.config, rng);
		let world = self.rasterize(&partition, tile_set);
		debug!(
			"rasterized {} sectors into {} ground tiles",
			partition.active().len(),
			world.count(TileKind::Ground),
		);
		world
	}
}

/// Which generator to build a level with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
	/// One open room inside the outer wall.
	Simple,
	/// Randomly partitioned sectors separated by walls.
	Partitioned,
}

impl Strategy {
	/// Smallest width and height the strategy can build. Partitioning needs
	/// at least one tile inside the outer wall for its root sector.
	pub fn min_level_size(self) -> i32 {
		match self {
			Strategy::Simple => 0,
			Strategy::Partitioned => 3,
		}
	}
}
