use std::ops::{Add, Mul, Sub};

pub type TileVector = Vector<i32>;
pub type TilePoint = Point<i32>;
pub type TileRectangle = Rectangle<i32>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vector<T> {
	pub x: T,
	pub y: T,
}

impl<T> Vector<T> {
	pub const fn new(x: T, y: T) -> Self {
		Vector { x, y }
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point<T> {
	pub x: T,
	pub y: T,
}

impl<T> Point<T> {
	pub const fn new(x: T, y: T) -> Self {
		Point { x, y }
	}
}

impl<T: Add<Output = T>> Add<Vector<T>> for Point<T> {
	type Output = Self;

	fn add(self, rhs: Vector<T>) -> Self {
		Self {
			x: self.x + rhs.x,
			y: self.y + rhs.y,
		}
	}
}

impl<T: Sub<Output = T>> Sub for Point<T> {
	type Output = Vector<T>;

	fn sub(self, rhs: Self) -> Self::Output {
		Self::Output {
			x: self.x - rhs.x,
			y: self.y - rhs.y,
		}
	}
}

/// An axis-aligned rectangle. `pos` is the top-left corner; `size` is
/// exclusive, so a rectangle covers `pos.x..pos.x + size.x`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rectangle<T> {
	pub pos: Point<T>,
	pub size: Vector<T>,
}

impl<T> Rectangle<T> {
	/// Whether `coords` lies within the rectangle.
	pub fn contains(self, coords: Point<T>) -> bool
	where
		T: Copy + Ord + Add<Output = T>,
	{
		let end = self.pos + self.size;
		self.pos.x <= coords.x
			&& coords.x < end.x
			&& self.pos.y <= coords.y
			&& coords.y < end.y
	}

	/// Whether `self` and `other` share at least one point.
	pub fn overlaps(self, other: Self) -> bool
	where
		T: Copy + Ord + Add<Output = T>,
	{
		let start_x = self.pos.x.max(other.pos.x);
		let start_y = self.pos.y.max(other.pos.y);
		let end_x = (self.pos.x + self.size.x).min(other.pos.x + other.size.x);
		let end_y = (self.pos.y + self.size.y).min(other.pos.y + other.size.y);
		start_x < end_x && start_y < end_y
	}

	/// The rectangle's width times height.
	pub fn area(self) -> T
	where
		T: Mul<Output = T>,
	{
		self.size.x * self.size.y
	}
}
