//! Mapping between cube coordinates, offset (col/row) coordinates and
//! continuous 2D world positions. World space is y-up: positive y is north.

use crate::{
    error::{HexError, HexResult},
    hex::{CubeCoordinate, HexDirection, Orientation},
};
use derive_more::Display;
use nalgebra::{Point2, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// √3 / 2, the ratio of a regular hexagon's inner radius to its outer radius
const INNER_RATIO: f64 = 0.866_025_403_784_438_6;

/// Physical dimensions of a single cell
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexMetrics {
    outer_radius: f64,
    inner_radius: f64,
    pointy_corners: [Vector2<f64>; 6],
    flat_corners: [Vector2<f64>; 6],
}

impl HexMetrics {
    /// Build metrics for cells with the given center-to-vertex distance
    pub fn new(outer_radius: f64) -> HexResult<Self> {
        if !outer_radius.is_finite() || outer_radius <= 0.0 {
            return Err(HexError::InvalidMetrics(outer_radius));
        }
        let r = outer_radius;
        let inner = r * INNER_RATIO;
        Ok(Self {
            outer_radius: r,
            inner_radius: inner,
            // Clockwise from north
            pointy_corners: [
                Vector2::new(0.0, r),
                Vector2::new(inner, r / 2.0),
                Vector2::new(inner, -r / 2.0),
                Vector2::new(0.0, -r),
                Vector2::new(-inner, -r / 2.0),
                Vector2::new(-inner, r / 2.0),
            ],
            // Clockwise from 120 degrees
            flat_corners: [
                Vector2::new(-r / 2.0, inner),
                Vector2::new(r / 2.0, inner),
                Vector2::new(r, 0.0),
                Vector2::new(r / 2.0, -inner),
                Vector2::new(-r / 2.0, -inner),
                Vector2::new(-r, 0.0),
            ],
        })
    }

    /// Distance from the center of a cell to any of its vertices
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Distance from the center of a cell to the middle of any of its sides
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Offsets from a cell's center to its six corners, clockwise. For both
    /// orientations, corners `i` and `i + 1` bound the side that faces
    /// direction `i`.
    pub fn corners(&self, orientation: Orientation) -> &[Vector2<f64>; 6] {
        match orientation {
            Orientation::Pointy => &self.pointy_corners,
            Orientation::Flat => &self.flat_corners,
        }
    }
}

/// Which rows (pointy) or columns (flat) get shoved over by half a cell in an
/// offset layout
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OffsetType {
    Odd,
    Even,
}

impl Default for OffsetType {
    fn default() -> Self {
        Self::Odd
    }
}

impl OffsetType {
    /// Is the given row (pointy) or column (flat) one of the shifted ones?
    pub fn is_shifted(self, line: i32) -> bool {
        match self {
            Self::Odd => line & 1 != 0,
            Self::Even => line & 1 == 0,
        }
    }

    /// Convert a cube coordinate to its offset form
    pub fn from_cube(
        self,
        orientation: Orientation,
        coord: CubeCoordinate,
    ) -> OffsetCoordinate {
        let (x, z) = (coord.x(), coord.z());
        // All the numerators here are even, so the divisions are exact
        match (orientation, self) {
            (Orientation::Pointy, Self::Odd) => {
                OffsetCoordinate::new(x + (z - (z & 1)) / 2, z)
            }
            (Orientation::Pointy, Self::Even) => {
                OffsetCoordinate::new(x + (z + (z & 1)) / 2, z)
            }
            (Orientation::Flat, Self::Odd) => {
                OffsetCoordinate::new(x, z + (x - (x & 1)) / 2)
            }
            (Orientation::Flat, Self::Even) => {
                OffsetCoordinate::new(x, z + (x + (x & 1)) / 2)
            }
        }
    }

    /// Convert an offset coordinate to its cube form
    pub fn to_cube(
        self,
        orientation: Orientation,
        offset: OffsetCoordinate,
    ) -> CubeCoordinate {
        let OffsetCoordinate { col, row } = offset;
        match (orientation, self) {
            (Orientation::Pointy, Self::Odd) => {
                CubeCoordinate::from_xz(col - (row - (row & 1)) / 2, row)
            }
            (Orientation::Pointy, Self::Even) => {
                CubeCoordinate::from_xz(col - (row + (row & 1)) / 2, row)
            }
            (Orientation::Flat, Self::Odd) => {
                CubeCoordinate::from_xz(col, row - (col - (col & 1)) / 2)
            }
            (Orientation::Flat, Self::Even) => {
                CubeCoordinate::from_xz(col, row - (col + (col & 1)) / 2)
            }
        }
    }
}

/// A cell position in a rectangular col/row layout. Only meaningful together
/// with an [Orientation] and an [OffsetType].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", col, row)]
pub struct OffsetCoordinate {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoordinate {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// Everything needed to place cells in world space: cell size, orientation
/// and stagger parity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    pub metrics: HexMetrics,
    pub orientation: Orientation,
    pub offset_type: OffsetType,
}

impl HexLayout {
    pub fn new(
        outer_radius: f64,
        orientation: Orientation,
        offset_type: OffsetType,
    ) -> HexResult<Self> {
        Ok(Self {
            metrics: HexMetrics::new(outer_radius)?,
            orientation,
            offset_type,
        })
    }

    /// World position of the origin cell's center. With even offsets, line
    /// zero is a shifted line, so the origin sits half a cell over.
    fn stagger(&self) -> Vector2<f64> {
        match (self.offset_type, self.orientation) {
            (OffsetType::Odd, _) => Vector2::zeros(),
            (OffsetType::Even, Orientation::Pointy) => {
                Vector2::new(self.metrics.inner_radius(), 0.0)
            }
            (OffsetType::Even, Orientation::Flat) => {
                Vector2::new(0.0, self.metrics.inner_radius())
            }
        }
    }

    /// Convert a cube coordinate to its offset form under this layout
    pub fn to_offset(&self, coord: CubeCoordinate) -> OffsetCoordinate {
        self.offset_type.from_cube(self.orientation, coord)
    }

    /// Convert an offset coordinate to its cube form under this layout
    pub fn from_offset(&self, offset: OffsetCoordinate) -> CubeCoordinate {
        self.offset_type.to_cube(self.orientation, offset)
    }

    /// Get the world position of a cell's center
    pub fn to_position(&self, coord: CubeCoordinate) -> Point2<f64> {
        let OffsetCoordinate { col, row } = self.to_offset(coord);
        let outer = self.metrics.outer_radius();
        let width = 2.0 * self.metrics.inner_radius();
        let half = |shifted: bool| if shifted { 0.5 } else { 0.0 };
        match self.orientation {
            Orientation::Pointy => Point2::new(
                (col as f64 + half(self.offset_type.is_shifted(row))) * width,
                row as f64 * 1.5 * outer,
            ),
            Orientation::Flat => Point2::new(
                col as f64 * 1.5 * outer,
                (row as f64 + half(self.offset_type.is_shifted(col))) * width,
            ),
        }
    }

    /// Get the cell that contains a world position
    pub fn from_position(&self, position: Point2<f64>) -> CubeCoordinate {
        let p = position - self.stagger();
        let outer = self.metrics.outer_radius();
        let width = 2.0 * self.metrics.inner_radius();
        let (x, z) = match self.orientation {
            Orientation::Pointy => {
                let z = p.y / (1.5 * outer);
                (p.x / width - z / 2.0, z)
            }
            Orientation::Flat => {
                let x = p.x / (1.5 * outer);
                (x, p.y / width - x / 2.0)
            }
        };
        CubeCoordinate::round(Vector3::new(x, -x - z, z))
    }

    /// Get the direction of the mesh triangle within `coord` that `point`
    /// falls in, i.e. the bearing from the cell's center to the point
    pub fn relative_triangle_direction(
        &self,
        coord: CubeCoordinate,
        point: Point2<f64>,
    ) -> HexResult<HexDirection> {
        HexDirection::from_points(self.orientation, self.to_position(coord), point)
    }
}

impl CubeCoordinate {
    /// Shorthand for [HexLayout::to_position]
    pub fn to_position(self, layout: &HexLayout) -> Point2<f64> {
        layout.to_position(self)
    }

    /// Shorthand for [HexLayout::from_position]
    pub fn from_position(position: Point2<f64>, layout: &HexLayout) -> Self {
        layout.from_position(position)
    }
}
