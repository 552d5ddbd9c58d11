use std::ops::Index;

use log::{debug, trace};
use rand::Rng;
use rand_pcg::Pcg32;

use crate::{
	config::GenerationConfig,
	generator::Strategy,
	interval::TileInterval,
	sector::{Sector, SectorId, Split},
};

/// A decomposition of a level's interior into sectors.
///
/// Every sector ever created lives in an arena and is addressed by
/// [`SectorId`]. Splitting retires a sector from the active set without
/// removing it, so neighbour ids held by other sectors never dangle.
#[derive(Debug)]
pub struct Partition {
	sectors: Vec<Sector>,
	/// The two sectors each retired sector was split into.
	children: Vec<Option<[SectorId; 2]>>,
	active: Vec<SectorId>,
}

impl Partition {
	/// A partition containing only `root`.
	pub fn new(root: Sector) -> Partition {
		Partition {
			sectors: vec![root],
			children: vec![None],
			active: vec![SectorId(0)],
		}
	}

	/// Partitions the interior of a level, leaving a one-tile border for the
	/// outer walls. `config` must be valid.
	///
	/// Each of the `config.max_split_tries` attempts picks a random active
	/// sector and splits it if it's large enough. There is no guarantee every
	/// sector ends up at minimum size.
	pub fn generate(config: &GenerationConfig, rng: &mut Pcg32) -> Partition {
		debug_assert!(config.validate_for(Strategy::Partitioned).is_ok());
		let mut partition = Partition::new(Sector::new(
			TileInterval::new(1, config.width - 2),
			TileInterval::new(1, config.height - 2),
		));
		for _ in 0..config.max_split_tries {
			let index = rng.gen_range(0..partition.active.len());
			partition.try_split(
				index,
				config.min_sector_width,
				config.min_sector_height,
				rng,
			);
		}
		debug!(
			"partitioned {}x{} level into {} sectors after {} tries",
			config.width,
			config.height,
			partition.active.len(),
			config.max_split_tries,
		);
		partition
	}

	/// Attempts to split the active sector at `index`, replacing it with its
	/// two children. Returns whether a split happened.
	pub fn try_split(
		&mut self,
		index: usize,
		min_width: i32,
		min_height: i32,
		rng: &mut Pcg32,
	) -> bool {
		let id = self.active[index];
		let next = self.sectors.len();
		let ids = [SectorId(next), SectorId(next + 1)];
		match self.sectors[id.0].split(
			min_width,
			min_height,
			ids,
			&self.sectors,
			rng,
		) {
			Split::Terminal => false,
			Split::Divided(axis, children) => {
				trace!("split {id:?} {axis:?} into {ids:?}");
				// Removing in place keeps the active order, and with it the
				// random index choices, reproducible.
				self.active.remove(index);
				self.sectors.extend(children);
				self.children.extend([None, None]);
				self.children[id.0] = Some(ids);
				self.active.extend(ids);
				true
			}
		}
	}

	/// Ids of the sectors making up the partition.
	pub fn active(&self) -> &[SectorId] {
		&self.active
	}

	pub fn active_sectors(&self) -> impl Iterator<Item = &Sector> + '_ {
		self.active.iter().map(|id| &self.sectors[id.0])
	}

	pub fn is_active(&self, id: SectorId) -> bool {
		self.children[id.0].is_none()
	}

	/// Number of successful splits.
	pub fn splits(&self) -> usize {
		self.active.len() - 1
	}

	/// Total number of sectors ever created, active or retired.
	pub fn arena_len(&self) -> usize {
		self.sectors.len()
	}

	/// The active sectors that `id` was eventually split into, or just `id`
	/// if it's still active.
	pub fn resolve(&self, id: SectorId) -> Vec<SectorId> {
		let mut resolved = Vec::new();
		let mut stack = vec![id];
		while let Some(id) = stack.pop() {
			match self.children[id.0] {
				Some([first, second]) => {
					stack.push(second);
					stack.push(first);
				}
				None => resolved.push(id),
			}
		}
		resolved
	}
}

impl Index<SectorId> for Partition {
	type Output = Sector;

	fn index(&self, id: SectorId) -> &Sector {
		&self.sectors[id.0]
	}
}
