use std::fmt::{Debug, Formatter};

use cgmath::{BaseNum, Point2, Vector2};

//////////
// RECT //
//////////

/// An axis-aligned rectangular region of a grid, including both corners.  A straight line
/// segment along one axis is a `Rect` with zero width or height.
// Invariant: max.x >= min.x && max.y >= min.y
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect<S> {
    min: Point2<S>,
    max: Point2<S>,
}

impl<S: BaseNum> Rect<S> {
    /// Creates the smallest [`Rect`] which contains both `a` and `b`
    pub fn from_corners(a: Point2<S>, b: Point2<S>) -> Self {
        Self {
            min: Point2::new(partial_min(a.x, b.x), partial_min(a.y, b.y)),
            max: Point2::new(partial_max(a.x, b.x), partial_max(a.y, b.y)),
        }
    }

    /// Computes the region covered by both `self` and `other`, or `None` if they don't touch
    pub fn intersection(self, other: Self) -> Option<Self> {
        let min_x = partial_max(self.min.x, other.min.x);
        let min_y = partial_max(self.min.y, other.min.y);
        let max_x = partial_min(self.max.x, other.max.x);
        let max_y = partial_min(self.max.y, other.max.y);
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        })
    }
}

impl Rect<i32> {
    /// Every grid point covered by this `Rect`, row by row
    pub fn points(self) -> impl Iterator<Item = Point2<i32>> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Point2::new(x, y)))
    }
}

impl<S: Debug> Debug for Rect<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect(({:?}, {:?}) - ({:?}, {:?}))",
            self.min.x, self.min.y, self.max.x, self.max.y
        )
    }
}

/// The 'taxicab' length of a vector along the grid lines
pub fn manhattan(v: Vector2<i32>) -> u64 {
    u64::from(v.x.unsigned_abs()) + u64::from(v.y.unsigned_abs())
}

fn partial_max<S: PartialOrd>(x: S, y: S) -> S {
    if x < y {
        y
    } else {
        x
    }
}

fn partial_min<S: PartialOrd>(x: S, y: S) -> S {
    if x < y {
        x
    } else {
        y
    }
}
