//! Procedural level generation by random recursive partitioning.
//!
//! A level's interior is split into rectangular [`Sector`]s separated by
//! one-tile walls, which are then rasterized into a [`World`] of tiles. The
//! caller supplies the random number generator, so a seed fully determines
//! the level.

pub mod config;
pub mod generator;
pub mod geometry;
pub mod interval;
pub mod partition;
pub mod room_type;
pub mod sector;
pub mod tile;
pub mod world;

pub use config::{ConfigError, GenerationConfig};
pub use generator::{Generator, PartitionGenerator, SimpleGenerator, Strategy};
pub use interval::{Interval, TileInterval};
pub use partition::Partition;
pub use room_type::RoomType;
pub use sector::{Sector, SectorId, Side};
pub use tile::{Tile, TileKind, TileSet};
pub use world::World;
