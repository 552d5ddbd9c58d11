use num_traits::PrimInt;
use rand::{distributions::uniform::SampleUniform, Rng};
use rand_pcg::Pcg32;

pub type TileInterval = Interval<i32>;

/// A closed range of integers. Both ends are inclusive, and `min <= max`
/// always holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Interval<T> {
	min: T,
	max: T,
}

impl<T: PrimInt> Interval<T> {
	/// Creates the interval spanning `begin` and `end`, in either order.
	pub fn new(begin: T, end: T) -> Self {
		Interval {
			min: begin.min(end),
			max: begin.max(end),
		}
	}

	pub fn min(&self) -> T {
		self.min
	}

	pub fn max(&self) -> T {
		self.max
	}

	/// The number of integers in the interval.
	pub fn size(&self) -> T {
		self.max - self.min + T::one()
	}

	pub fn contains(&self, value: T) -> bool {
		self.min <= value && value <= self.max
	}

	/// Whether `self` and `other` share at least one integer.
	pub fn intersects(&self, other: &Self) -> bool {
		self.max.min(other.max) >= self.min.max(other.min)
	}

	/// The smallest interval covering both `self` and `other`.
	pub fn hull(&self, other: &Self) -> Self {
		Interval {
			min: self.min.min(other.min),
			max: self.max.max(other.max),
		}
	}

	/// A uniformly random integer within the interval.
	pub fn sample(&self, rng: &mut Pcg32) -> T
	where
		T: SampleUniform,
	{
		rng.gen_range(self.min..=self.max)
	}
}
