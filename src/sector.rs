use rand::Rng;
use rand_pcg::Pcg32;

use crate::{
	geometry::{TilePoint, TileRectangle, TileVector},
	interval::TileInterval,
};

/// Index of a [`Sector`] within a [`Partition`](crate::partition::Partition)'s
/// arena. Ids stay valid for the life of the partition, even after the sector
/// they name has been split.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SectorId(pub(crate) usize);

impl SectorId {
	pub fn index(self) -> usize {
		self.0
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
	Top,
	Bottom,
	Left,
	Right,
}

impl Side {
	pub const ALL: [Side; 4] =
		[Side::Top, Side::Bottom, Side::Left, Side::Right];

	pub fn opposite(self) -> Side {
		match self {
			Side::Top => Side::Bottom,
			Side::Bottom => Side::Top,
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
	/// Cuts along the x-axis, producing a left and a right sector.
	Horizontal,
	/// Cuts along the y-axis, producing a top and a bottom sector.
	Vertical,
}

/// Directional adjacency lists. Entries do not own the sectors they refer to.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Neighbours {
	pub top: Vec<SectorId>,
	pub bottom: Vec<SectorId>,
	pub left: Vec<SectorId>,
	pub right: Vec<SectorId>,
}

impl Neighbours {
	pub fn on(&self, side: Side) -> &[SectorId] {
		match side {
			Side::Top => &self.top,
			Side::Bottom => &self.bottom,
			Side::Left => &self.left,
			Side::Right => &self.right,
		}
	}

	/// All neighbours: top, then bottom, left and right.
	pub fn iter(&self) -> impl Iterator<Item = SectorId> + '_ {
		Side::ALL
			.into_iter()
			.flat_map(move |side| self.on(side).iter().copied())
	}
}

/// The outcome of [`Sector::split`].
#[derive(Debug)]
pub enum Split {
	/// The sector is too small to split and stays as it is.
	Terminal,
	/// The two sectors replacing the split sector, left before right or top
	/// before bottom.
	Divided(Axis, [Sector; 2]),
}

/// Smallest size that fits two `min_size` sectors and a wall. Saturates, so
/// absurd minimums just make a sector unsplittable.
fn split_threshold(min_size: i32) -> i32 {
	min_size.saturating_mul(2).saturating_add(1)
}

/// A rectangular region of the level, in tile coordinates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sector {
	pub horizontal: TileInterval,
	pub vertical: TileInterval,
	pub neighbours: Neighbours,
}

impl Sector {
	pub fn new(horizontal: TileInterval, vertical: TileInterval) -> Sector {
		Sector {
			horizontal,
			vertical,
			neighbours: Neighbours::default(),
		}
	}

	pub fn width(&self) -> i32 {
		self.horizontal.size()
	}

	pub fn height(&self) -> i32 {
		self.vertical.size()
	}

	pub fn rectangle(&self) -> TileRectangle {
		TileRectangle {
			pos: TilePoint::new(self.horizontal.min(), self.vertical.min()),
			size: TileVector::new(self.width(), self.height()),
		}
	}

	/// Whether the sector is wide enough for two sectors of at least
	/// `min_width` plus the one-tile wall between them.
	pub fn can_split_horizontally(&self, min_width: i32) -> bool {
		self.width() >= split_threshold(min_width)
	}

	pub fn can_split_vertically(&self, min_height: i32) -> bool {
		self.height() >= split_threshold(min_height)
	}

	pub fn can_split(&self, min_width: i32, min_height: i32) -> bool {
		self.can_split_horizontally(min_width)
			|| self.can_split_vertically(min_height)
	}

	/// All neighbours, in top, bottom, left, right order.
	pub fn neighbours(&self) -> Vec<SectorId> {
		self.neighbours.iter().collect()
	}

	/// Splits the sector in two along a randomly chosen axis. When both axes
	/// are possible, a fair coin decides.
	///
	/// `ids` are the ids the two resulting sectors will be stored under, and
	/// `sectors` is the arena the sector's neighbour ids index into.
	pub fn split(
		&self,
		min_width: i32,
		min_height: i32,
		ids: [SectorId; 2],
		sectors: &[Sector],
		rng: &mut Pcg32,
	) -> Split {
		if !self.can_split(min_width, min_height) {
			return Split::Terminal;
		}
		// The coin is only flipped when a horizontal split is possible.
		if (self.can_split_horizontally(min_width) && rng.gen_bool(0.5))
			|| !self.can_split_vertically(min_height)
		{
			Split::Divided(
				Axis::Horizontal,
				self.split_horizontally(min_width, ids, sectors, rng),
			)
		} else {
			Split::Divided(
				Axis::Vertical,
				self.split_vertically(min_height, ids, sectors, rng),
			)
		}
	}

	/// Splits into a left and a right sector separated by a one-tile wall.
	/// The sector must satisfy [`Sector::can_split_horizontally`].
	pub fn split_horizontally(
		&self,
		min_width: i32,
		[left_id, right_id]: [SectorId; 2],
		sectors: &[Sector],
		rng: &mut Pcg32,
	) -> [Sector; 2] {
		debug_assert!(self.can_split_horizontally(min_width));
		let space = self.width() - 1;
		let right_size =
			TileInterval::new(min_width, space - min_width).sample(rng);
		let left_size = space - right_size;

		let (h_min, h_max) = (self.horizontal.min(), self.horizontal.max());
		let left_bounds = TileInterval::new(h_min, h_min + left_size - 1);
		let right_bounds = TileInterval::new(h_max - right_size + 1, h_max);

		// Top and bottom neighbours must share x-coordinates with the child.
		let overlapping = |side: Side, bounds: &TileInterval| {
			self.neighbours
				.on(side)
				.iter()
				.copied()
				.filter(|id| sectors[id.0].horizontal.intersects(bounds))
				.collect::<Vec<_>>()
		};

		let left = Sector {
			horizontal: left_bounds,
			vertical: self.vertical,
			neighbours: Neighbours {
				top: overlapping(Side::Top, &left_bounds),
				bottom: overlapping(Side::Bottom, &left_bounds),
				left: self.neighbours.left.clone(),
				right: vec![right_id],
			},
		};
		let right = Sector {
			horizontal: right_bounds,
			vertical: self.vertical,
			neighbours: Neighbours {
				top: overlapping(Side::Top, &right_bounds),
				bottom: overlapping(Side::Bottom, &right_bounds),
				left: vec![left_id],
				right: self.neighbours.right.clone(),
			},
		};
		[left, right]
	}

	/// Splits into a top and a bottom sector separated by a one-tile wall.
	/// The sector must satisfy [`Sector::can_split_vertically`].
	pub fn split_vertically(
		&self,
		min_height: i32,
		[top_id, bottom_id]: [SectorId; 2],
		sectors: &[Sector],
		rng: &mut Pcg32,
	) -> [Sector; 2] {
		debug_assert!(self.can_split_vertically(min_height));
		let space = self.height() - 1;
		let top_size =
			TileInterval::new(min_height, space - min_height).sample(rng);
		let bottom_size = space - top_size;

		let (v_min, v_max) = (self.vertical.min(), self.vertical.max());
		let top_bounds = TileInterval::new(v_min, v_min + top_size - 1);
		let bottom_bounds = TileInterval::new(v_max - bottom_size + 1, v_max);

		// Left and right neighbours must share y-coordinates with the child.
		let overlapping = |side: Side, bounds: &TileInterval| {
			self.neighbours
				.on(side)
				.iter()
				.copied()
				.filter(|id| sectors[id.0].vertical.intersects(bounds))
				.collect::<Vec<_>>()
		};

		let top = Sector {
			horizontal: self.horizontal,
			vertical: top_bounds,
			neighbours: Neighbours {
				top: self.neighbours.top.clone(),
				bottom: vec![bottom_id],
				left: overlapping(Side::Left, &top_bounds),
				right: overlapping(Side::Right, &top_bounds),
			},
		};
		let bottom = Sector {
			horizontal: self.horizontal,
			vertical: bottom_bounds,
			neighbours: Neighbours {
				top: vec![top_id],
				bottom: self.neighbours.bottom.clone(),
				left: overlapping(Side::Left, &bottom_bounds),
				right: overlapping(Side::Right, &bottom_bounds),
			},
		};
		[top, bottom]
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::SeedableRng;

	use super::*;

	fn sector(x: (i32, i32), y: (i32, i32)) -> Sector {
		Sector::new(TileInterval::new(x.0, x.1), TileInterval::new(y.0, y.1))
	}

	const IDS: [SectorId; 2] = [SectorId(1), SectorId(2)];

	#[test]
	fn four_wide_sector_cannot_split_at_min_width_two() {
		let mut rng = Pcg32::seed_from_u64(0);
		let root = sector((1, 4), (1, 1));
		assert_eq!(root.width(), 4);
		assert!(!root.can_split_horizontally(2));
		assert!(!root.can_split(2, 2));
		assert!(matches!(
			root.split(2, 2, IDS, &[], &mut rng),
			Split::Terminal
		));
	}

	#[test]
	fn huge_minimum_size_never_splits() {
		let mut rng = Pcg32::seed_from_u64(0);
		let root = sector((1, 18), (1, 14));
		assert!(!root.can_split_horizontally(1_100_000_000));
		assert!(!root.can_split_vertically(i32::MAX));
		assert!(matches!(
			root.split(i32::MAX, 1_100_000_000, IDS, &[], &mut rng),
			Split::Terminal
		));
	}

	#[test]
	fn five_wide_sector_splits_into_two_by_two() {
		let mut rng = Pcg32::seed_from_u64(0);
		let root = sector((1, 5), (1, 1));
		let Split::Divided(axis, [left, right]) =
			root.split(2, 2, IDS, &[], &mut rng)
		else {
			panic!("expected a split");
		};
		assert_eq!(axis, Axis::Horizontal);
		assert_eq!(left.horizontal, TileInterval::new(1, 2));
		assert_eq!(right.horizontal, TileInterval::new(4, 5));
	}

	#[test]
	fn siblings_reference_each_other() {
		let mut rng = Pcg32::seed_from_u64(3);
		let root = sector((1, 10), (1, 10));
		let [left, right] = root.split_horizontally(2, IDS, &[], &mut rng);
		assert_eq!(left.neighbours.right, vec![IDS[1]]);
		assert_eq!(right.neighbours.left, vec![IDS[0]]);
		assert!(left.neighbours.left.is_empty());
		assert!(right.neighbours.right.is_empty());

		let [top, bottom] = root.split_vertically(2, IDS, &[], &mut rng);
		assert_eq!(top.neighbours.bottom, vec![IDS[1]]);
		assert_eq!(bottom.neighbours.top, vec![IDS[0]]);
		assert_eq!(top.neighbours(), vec![IDS[1]]);
	}

	#[test]
	fn children_inherit_far_side_neighbours() {
		let mut rng = Pcg32::seed_from_u64(11);
		// Arena: 0 = left of parent, 1 = right of parent, 2 = parent.
		let mut parent = sector((4, 12), (1, 9));
		parent.neighbours.left = vec![SectorId(0)];
		parent.neighbours.right = vec![SectorId(1)];
		let arena =
			vec![sector((1, 2), (1, 9)), sector((14, 16), (1, 3)), parent];
		let ids = [SectorId(3), SectorId(4)];

		let [left, right] =
			arena[2].split_horizontally(2, ids, &arena, &mut rng);
		assert_eq!(left.neighbours.left, vec![SectorId(0)]);
		assert_eq!(right.neighbours.right, vec![SectorId(1)]);

		// Vertical splits filter the left and right lists by y-overlap. The
		// right neighbour only spans y = 1..=3, above any bottom child.
		let [top, bottom] = arena[2].split_vertically(2, ids, &arena, &mut rng);
		assert_eq!(top.neighbours.left, vec![SectorId(0)]);
		assert_eq!(top.neighbours.right, vec![SectorId(1)]);
		assert_eq!(bottom.neighbours.left, vec![SectorId(0)]);
		assert!(bottom.neighbours.right.is_empty());
	}

	/// A horizontally split child takes its bottom neighbours from the
	/// parent's bottom list. (Copying them from the top list would be the
	/// alternative; it is deliberately not what this generator does.)
	#[test]
	fn horizontal_split_filters_bottom_neighbours_from_parent_bottom() {
		let mut rng = Pcg32::seed_from_u64(5);
		// Arena: 0 = above parent (x = 1..=2 only), 1 = below parent,
		// 2 = parent.
		let mut parent = sector((1, 8), (4, 6));
		parent.neighbours.top = vec![SectorId(0)];
		parent.neighbours.bottom = vec![SectorId(1)];
		let arena =
			vec![sector((1, 2), (1, 2)), sector((1, 8), (8, 9)), parent];

		let [left, right] = arena[2].split_horizontally(
			2,
			[SectorId(3), SectorId(4)],
			&arena,
			&mut rng,
		);
		assert_eq!(left.neighbours.top, vec![SectorId(0)]);
		assert_eq!(left.neighbours.bottom, vec![SectorId(1)]);
		// The right child starts at x >= 4, clear of the top neighbour.
		assert!(right.neighbours.top.is_empty());
		assert_eq!(right.neighbours.bottom, vec![SectorId(1)]);
	}

	#[test]
	fn rectangle_matches_bounds() {
		let rect = sector((2, 5), (3, 4)).rectangle();
		assert_eq!(rect.pos, TilePoint::new(2, 3));
		assert_eq!(rect.size, TileVector::new(4, 2));
	}

	#[test]
	fn opposite_sides_pair_up() {
		for side in Side::ALL {
			assert_eq!(side.opposite().opposite(), side);
			assert_ne!(side.opposite(), side);
		}
	}

	proptest! {
		#[test]
		fn split_sizes_sum_to_parent_minus_wall(
			width in 1i32..40,
			height in 1i32..40,
			min_width in 1i32..6,
			min_height in 1i32..6,
			seed in any::<u64>(),
		) {
			let mut rng = Pcg32::seed_from_u64(seed);
			let parent = sector((1, width), (1, height));
			match parent.split(min_width, min_height, IDS, &[], &mut rng) {
				Split::Terminal => {
					prop_assert!(!parent.can_split(min_width, min_height));
				}
				Split::Divided(Axis::Horizontal, [a, b]) => {
					prop_assert_eq!(a.width() + b.width(), width - 1);
					prop_assert!(a.width() >= min_width);
					prop_assert!(b.width() >= min_width);
					prop_assert_eq!(a.vertical, parent.vertical);
					prop_assert_eq!(b.vertical, parent.vertical);
					prop_assert_eq!(a.horizontal.max() + 2, b.horizontal.min());
				}
				Split::Divided(Axis::Vertical, [a, b]) => {
					prop_assert_eq!(a.height() + b.height(), height - 1);
					prop_assert!(a.height() >= min_height);
					prop_assert!(b.height() >= min_height);
					prop_assert_eq!(a.horizontal, parent.horizontal);
					prop_assert_eq!(b.horizontal, parent.horizontal);
					prop_assert_eq!(a.vertical.max() + 2, b.vertical.min());
				}
			}
		}
	}
}
