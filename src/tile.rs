use crate::geometry::TilePoint;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TileKind {
	Wall,
	Ground,
}

impl TileKind {
	pub fn is_walkable(self) -> bool {
		match self {
			TileKind::Wall => false,
			TileKind::Ground => true,
		}
	}

	/// Static tiles never change, so the world skips them when updating.
	pub fn is_static(self) -> bool {
		match self {
			TileKind::Wall | TileKind::Ground => true,
		}
	}
}

/// The visual handles the renderer wants attached to each kind of tile. The
/// generator never looks inside them.
#[derive(Clone, Debug)]
pub struct TileSet<H> {
	pub wall: H,
	pub ground: H,
}

impl<H> TileSet<H> {
	pub fn visual(&self, kind: TileKind) -> &H {
		match kind {
			TileKind::Wall => &self.wall,
			TileKind::Ground => &self.ground,
		}
	}
}

/// A single cell of a [`World`](crate::world::World), tagged with the visual
/// handle of type `H` it should be drawn with.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tile<H> {
	kind: TileKind,
	coords: TilePoint,
	visual: H,
}

impl<H> Tile<H> {
	pub fn new(kind: TileKind, coords: TilePoint, visual: H) -> Tile<H> {
		Tile {
			kind,
			coords,
			visual,
		}
	}

	pub fn kind(&self) -> TileKind {
		self.kind
	}

	pub fn coords(&self) -> TilePoint {
		self.coords
	}

	pub fn visual(&self) -> &H {
		&self.visual
	}

	pub fn is_walkable(&self) -> bool {
		self.kind.is_walkable()
	}

	pub fn is_static(&self) -> bool {
		self.kind.is_static()
	}

	/// Advances the tile by `dt` seconds.
	pub fn update(&mut self, _dt: f32) {
		match self.kind {
			// Neither kind has any state to advance.
			TileKind::Wall | TileKind::Ground => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_ground_is_walkable() {
		assert!(!TileKind::Wall.is_walkable());
		assert!(TileKind::Ground.is_walkable());
		assert!(TileKind::Wall.is_static());
		assert!(TileKind::Ground.is_static());
	}

	#[test]
	fn tile_set_maps_kinds_to_visuals() {
		let tiles = TileSet {
			wall: "wall.png",
			ground: "ground.png",
		};
		assert_eq!(*tiles.visual(TileKind::Wall), "wall.png");
		assert_eq!(*tiles.visual(TileKind::Ground), "ground.png");
	}

	#[test]
	fn update_leaves_static_tiles_unchanged() {
		let mut tile = Tile::new(TileKind::Ground, TilePoint::new(2, 3), 7u32);
		let before = tile.clone();
		tile.update(0.016);
		assert_eq!(tile, before);
		assert!(tile.is_walkable());
		assert_eq!(tile.coords(), TilePoint::new(2, 3));
	}
}
