//! Lines, half-planes and the polygons built from them. Every shape here is
//! a [HexConvexPolygon] underneath (or a union of them, for [HexPolygon]), so
//! they all share the [HexShape] interface.

mod convex;
mod hexagon;
mod line;
mod polygon;
mod quadrangle;
mod triangle;
mod vertex;

pub use convex::*;
pub use hexagon::*;
pub use line::*;
pub use polygon::*;
pub use quadrangle::*;
pub use triangle::*;
pub use vertex::*;

use crate::hex::{CubeCoordinate, HexAxis};
use serde::{Deserialize, Serialize};

/// Something that occupies a convex region of the grid
pub trait HexShape {
    /// The polygon that defines this shape's region
    fn polygon(&self) -> &HexConvexPolygon;

    /// Is the cell inside the shape (edges included)?
    fn contains(&self, coord: CubeCoordinate) -> bool {
        self.polygon().contains(coord)
    }

    /// Number of cells in the shape
    fn area(&self) -> usize {
        self.polygon().area()
    }

    /// Iterate over every cell in the shape
    fn range(&self) -> Box<dyn Iterator<Item = CubeCoordinate>> {
        Box::new(self.polygon().range())
    }

    /// The distinct corner cells of the shape
    fn vertices(&self) -> &[CubeCoordinate] {
        self.polygon().vertices()
    }

    fn bounds(&self) -> AxisBounds {
        self.polygon().bounds()
    }
}

/// Inclusive range of values on a single axis
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

impl AxisRange {
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Inclusive min/max values on all three axes, i.e. the tightest axis-aligned
/// hexagon around some cells
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisBounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl AxisBounds {
    /// Get the bounds of a group of cells. `None` if there are no cells.
    pub fn from_coords<'a>(
        coords: impl IntoIterator<Item = &'a CubeCoordinate>,
    ) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let point = |value| AxisRange {
            min: value,
            max: value,
        };
        let init = Self {
            x: point(first.x()),
            y: point(first.y()),
            z: point(first.z()),
        };
        Some(iter.fold(init, |acc, coord| {
            let grow = |range: AxisRange, value| AxisRange {
                min: range.min.min(value),
                max: range.max.max(value),
            };
            Self {
                x: grow(acc.x, coord.x()),
                y: grow(acc.y, coord.y()),
                z: grow(acc.z, coord.z()),
            }
        }))
    }

    pub fn get(&self, axis: HexAxis) -> AxisRange {
        match axis {
            HexAxis::X => self.x,
            HexAxis::Y => self.y,
            HexAxis::Z => self.z,
        }
    }

    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        self.x.contains(coord.x())
            && self.y.contains(coord.y())
            && self.z.contains(coord.z())
    }

    /// Bounds of the overlap between two regions. The result may be empty
    /// (`min > max` on some axis); it's up to the caller to check.
    pub fn intersect(&self, other: &Self) -> Self {
        let overlap = |a: AxisRange, b: AxisRange| AxisRange {
            min: a.min.max(b.min),
            max: a.max.min(b.max),
        };
        Self {
            x: overlap(self.x, other.x),
            y: overlap(self.y, other.y),
            z: overlap(self.z, other.z),
        }
    }
}
