use std::fmt;

use crate::{
	geometry::TilePoint,
	tile::{Tile, TileKind, TileSet},
};

/// A dense grid of tiles. Every coordinate in `0..width` by `0..height` holds
/// exactly one tile.
#[derive(Debug)]
pub struct World<H> {
	width: i32,
	height: i32,
	/// Row-major: the tile at `(x, y)` is at `y * width + x`.
	tiles: Vec<Tile<H>>,
	/// Indices of the tiles that need per-tick updates.
	dynamic: Vec<usize>,
}

impl<H: Clone> World<H> {
	/// Builds a world by asking `kind_at` for the kind of every tile.
	pub fn from_fn(
		width: i32,
		height: i32,
		tile_set: &TileSet<H>,
		kind_at: impl Fn(TilePoint) -> TileKind,
	) -> World<H> {
		let mut tiles = Vec::with_capacity((width * height).max(0) as usize);
		for y in 0..height {
			for x in 0..width {
				let coords = TilePoint::new(x, y);
				let kind = kind_at(coords);
				let visual = tile_set.visual(kind).clone();
				tiles.push(Tile::new(kind, coords, visual));
			}
		}
		let dynamic = tiles
			.iter()
			.enumerate()
			.filter(|(_, tile)| !tile.is_static())
			.map(|(index, _)| index)
			.collect();
		World {
			width,
			height,
			tiles,
			dynamic,
		}
	}
}

impl<H> World<H> {
	pub fn width(&self) -> i32 {
		self.width
	}

	pub fn height(&self) -> i32 {
		self.height
	}

	/// The tile at `(x, y)`. Panics if the coordinates are out of bounds.
	pub fn at(&self, x: i32, y: i32) -> &Tile<H> {
		&self.tiles[self.index(x, y)]
	}

	/// All tiles in row-major order.
	pub fn tiles(&self) -> impl Iterator<Item = &Tile<H>> + '_ {
		self.tiles.iter()
	}

	/// Number of tiles of the given kind.
	pub fn count(&self, kind: TileKind) -> usize {
		self.tiles.iter().filter(|tile| tile.kind() == kind).count()
	}

	/// Number of tiles that receive per-tick updates.
	pub fn dynamic_count(&self) -> usize {
		self.dynamic.len()
	}

	/// Whether `(x, y)` lies on the outermost ring of tiles.
	pub fn on_border(&self, x: i32, y: i32) -> bool {
		x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
	}

	/// Advances every non-static tile by `dt` seconds.
	pub fn update(&mut self, dt: f32) {
		for &index in &self.dynamic {
			self.tiles[index].update(dt);
		}
	}

	fn index(&self, x: i32, y: i32) -> usize {
		assert!(
			(0..self.width).contains(&x) && (0..self.height).contains(&y),
			"tile ({x}, {y}) is outside the {}x{} world",
			self.width,
			self.height,
		);
		(y * self.width + x) as usize
	}
}

/// Draws each tile's visual handle, one row per line.
impl<H: fmt::Display> fmt::Display for World<H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for row in self.tiles.chunks(self.width.max(1) as usize) {
			for tile in row {
				write!(f, "{}", tile.visual())?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}
