use crate::{interval::TileInterval, sector::Side};

/// Describes a kind of room: the sizes it can take and where along each wall
/// it may have door openings.
///
/// Nothing in level generation consumes room types yet.
pub trait RoomType {
	fn width(&self) -> TileInterval;
	fn height(&self) -> TileInterval;

	fn top_doors(&self) -> &[TileInterval];
	fn bottom_doors(&self) -> &[TileInterval];
	fn left_doors(&self) -> &[TileInterval];
	fn right_doors(&self) -> &[TileInterval];

	/// Door openings along the given wall.
	fn doors(&self, side: Side) -> &[TileInterval] {
		match side {
			Side::Top => self.top_doors(),
			Side::Bottom => self.bottom_doors(),
			Side::Left => self.left_doors(),
			Side::Right => self.right_doors(),
		}
	}
}
