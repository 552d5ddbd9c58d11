use std::{fs, path::Path};

use rand_pcg::Pcg32;
use serde::Deserialize;
use thiserror::Error;

use crate::{
	generator::{Generator, PartitionGenerator, SimpleGenerator, Strategy},
	tile::TileSet,
	world::World,
};

/// Number of random split attempts made while partitioning a level.
pub const MAX_SPLIT_TRIES: u32 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("level must be at least {min}x{min} tiles, got {width}x{height}")]
	TooSmall { width: i32, height: i32, min: i32 },
	#[error("minimum sector size must be positive, got {width}x{height}")]
	NonPositiveSectorSize { width: i32, height: i32 },
	#[error("failed to read config file: {0}")]
	Io(#[from] std::io::Error),
	#[error("failed to parse config file: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Configuration settings for level generation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
	/// Level width in tiles, including the outer wall.
	pub width: i32,
	/// Level height in tiles, including the outer wall.
	pub height: i32,
	/// Minimum width of a sector's floor.
	pub min_sector_width: i32,
	/// Minimum height of a sector's floor.
	pub min_sector_height: i32,
	/// Number of split attempts. Each attempt picks a random sector, so a
	/// small budget can leave splittable sectors behind.
	pub max_split_tries: u32,
	pub strategy: Strategy,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		GenerationConfig {
			width: 48,
			height: 32,
			min_sector_width: 2,
			min_sector_height: 2,
			max_split_tries: MAX_SPLIT_TRIES,
			strategy: Strategy::Partitioned,
		}
	}
}

impl GenerationConfig {
	/// Reads and validates a TOML config file. Missing keys take their
	/// default values.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		Self::from_toml(&fs::read_to_string(path)?)
	}

	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		let config: GenerationConfig = toml::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the settings the configured strategy depends on.
	pub fn validate(&self) -> Result<(), ConfigError> {
		self.validate_for(self.strategy)
	}

	/// Checks the settings `strategy` depends on. Sector sizes only matter
	/// when partitioning.
	pub fn validate_for(&self, strategy: Strategy) -> Result<(), ConfigError> {
		let min = strategy.min_level_size();
		if self.width < min || self.height < min {
			return Err(ConfigError::TooSmall {
				width: self.width,
				height: self.height,
				min,
			});
		}
		if strategy == Strategy::Partitioned
			&& (self.min_sector_width < 1 || self.min_sector_height < 1)
		{
			return Err(ConfigError::NonPositiveSectorSize {
				width: self.min_sector_width,
				height: self.min_sector_height,
			});
		}
		Ok(())
	}

	/// Builds a level with the configured strategy.
	pub fn generate<H: Clone>(
		&self,
		tile_set: &TileSet<H>,
		rng: &mut Pcg32,
	) -> Result<World<H>, ConfigError> {
		Ok(match self.strategy {
			Strategy::Simple => {
				self.validate_for(Strategy::Simple)?;
				SimpleGenerator {
					width: self.width,
					height: self.height,
				}
				.generate(tile_set, rng)
			}
			Strategy::Partitioned => {
				PartitionGenerator::new(self.clone())?.generate(tile_set, rng)
			}
		})
	}
}
