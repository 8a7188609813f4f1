/// A position in the plane, in model coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(self, other: Point) -> f64 {
		distance(self, other)
	}
}

impl From<(f64, f64)> for Point {
	fn from((x, y): (f64, f64)) -> Self {
		Self { x, y }
	}
}

/// Euclidean distance between two points. Symmetric bit for bit, since `hypot`
/// only sees the magnitudes of the deltas.
pub fn distance(a: Point, b: Point) -> f64 {
	(b.x - a.x).hypot(b.y - a.y)
}
