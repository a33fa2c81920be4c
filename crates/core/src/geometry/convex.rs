use crate::{
    error::{HexError, HexResult},
    geometry::{AxisBounds, AxisRange, HexHalfPlane, HexShape},
    hex::{CubeCoordinate, HexAxis},
};
use log::debug;

/// The most half-planes a polygon can have: a low and a high one per axis
const MAX_HALF_PLANES: usize = 6;

/// A convex region cut out of the grid by up to six half-planes. Every edge
/// of the region runs along one of the three axes.
///
/// Construction validates that the half-planes enclose a bounded area at
/// least two cells wide on every axis, and precomputes the corner cells and
/// per-axis extents. Everything else (containment, iteration, area) works off
/// those extents.
#[derive(Clone, Debug, PartialEq)]
pub struct HexConvexPolygon {
    half_planes: Vec<HexHalfPlane>,
    vertices: Vec<CubeCoordinate>,
    bounds: AxisBounds,
}

impl HexConvexPolygon {
    pub fn new(half_planes: Vec<HexHalfPlane>) -> HexResult<Self> {
        if half_planes.is_empty() || half_planes.len() > MAX_HALF_PLANES {
            return Err(HexError::InvalidConvexPolygon(format!(
                "expected 1 to {} half-planes, got {}",
                MAX_HALF_PLANES,
                half_planes.len()
            )));
        }
        for (i, a) in half_planes.iter().enumerate() {
            if half_planes[i + 1..].iter().any(|b| {
                a.axis() == b.axis() && a.half_plane_type() == b.half_plane_type()
            }) {
                return Err(HexError::InvalidConvexPolygon(format!(
                    "more than one {:?} half-plane on axis {}",
                    a.half_plane_type(),
                    a.axis()
                )));
            }
        }

        // Corners are where two boundary lines cross, as long as the crossing
        // is inside every half-plane. Three lines can meet at one corner, so
        // the same cell can come up more than once. Duplicates count towards
        // the total but only get stored once.
        let mut vertex_count = 0;
        let mut vertices: Vec<CubeCoordinate> = Vec::new();
        for (i, a) in half_planes.iter().enumerate() {
            for b in &half_planes[i + 1..] {
                if let Some(vertex) = a.line().intersection(&b.line()) {
                    if half_planes.iter().all(|hp| hp.contains(vertex)) {
                        vertex_count += 1;
                        if !vertices.contains(&vertex) {
                            vertices.push(vertex);
                        }
                    }
                }
            }
        }
        if vertex_count < half_planes.len() {
            return Err(HexError::InvalidConvexPolygon(format!(
                "{} half-planes only produced {} valid vertices; the region is \
                unbounded or one of the half-planes is redundant",
                half_planes.len(),
                vertex_count
            )));
        }

        let bounds = AxisBounds::from_coords(&vertices).ok_or_else(|| {
            HexError::InvalidConvexPolygon("polygon has no vertices".into())
        })?;
        for axis in HexAxis::ALL.iter().copied() {
            if bounds.get(axis).is_degenerate() {
                return Err(HexError::InvalidConvexPolygon(format!(
                    "polygon has zero width on axis {}",
                    axis
                )));
            }
        }

        Ok(Self {
            half_planes,
            vertices,
            bounds,
        })
    }

    /// Build a polygon from inclusive per-axis bounds. Each `high_*` is the
    /// largest allowed value on that axis, and each `low_*` the smallest.
    pub fn from_bounds(
        high_x: i32,
        low_x: i32,
        high_y: i32,
        low_y: i32,
        high_z: i32,
        low_z: i32,
    ) -> HexResult<Self> {
        Self::new(vec![
            HexHalfPlane::low(HexAxis::X, high_x),
            HexHalfPlane::high(HexAxis::X, low_x),
            HexHalfPlane::low(HexAxis::Y, high_y),
            HexHalfPlane::high(HexAxis::Y, low_y),
            HexHalfPlane::low(HexAxis::Z, high_z),
            HexHalfPlane::high(HexAxis::Z, low_z),
        ])
    }

    /// Same as [Self::from_bounds]
    pub fn from_axis_bounds(bounds: AxisBounds) -> HexResult<Self> {
        Self::from_bounds(
            bounds.x.max,
            bounds.x.min,
            bounds.y.max,
            bounds.y.min,
            bounds.z.max,
            bounds.z.min,
        )
    }

    pub fn half_planes(&self) -> &[HexHalfPlane] {
        &self.half_planes
    }

    /// The distinct corner cells
    pub fn vertices(&self) -> &[CubeCoordinate] {
        &self.vertices
    }

    pub fn bounds(&self) -> AxisBounds {
        self.bounds
    }

    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        self.bounds.contains(coord)
    }

    /// Iterate over every cell in the polygon, by ascending x then ascending
    /// y
    pub fn range(&self) -> impl Iterator<Item = CubeCoordinate> {
        let bounds = self.bounds;
        (bounds.x.min..=bounds.x.max).flat_map(move |x| {
            let (min_y, max_y) = bounds.y_span(x);
            (min_y..=max_y).map(move |y| CubeCoordinate::from_xy(x, y))
        })
    }

    /// Number of cells in the polygon
    pub fn area(&self) -> usize {
        let bounds = self.bounds;
        (bounds.x.min..=bounds.x.max)
            .map(|x| {
                let (min_y, max_y) = bounds.y_span(x);
                (max_y - min_y + 1).max(0) as usize
            })
            .sum()
    }

    /// Get the region shared by all the given polygons, or `None` if they
    /// don't overlap (or the overlap is too thin to be a polygon)
    pub fn intersection(polygons: &[&HexConvexPolygon]) -> Option<Self> {
        let (first, rest) = polygons.split_first()?;
        let bounds = rest
            .iter()
            .fold(first.bounds, |acc, polygon| acc.intersect(&polygon.bounds));
        match Self::from_axis_bounds(bounds) {
            Ok(polygon) => Some(polygon),
            Err(err) => {
                debug!("No polygon intersection: {}", err);
                None
            }
        }
    }

    /// Iterate over the cells shared by all the given polygons. Empty if they
    /// don't overlap (or the overlap is too thin to be a polygon).
    pub fn intersection_range(
        polygons: &[&HexConvexPolygon],
    ) -> impl Iterator<Item = CubeCoordinate> {
        Self::intersection(polygons)
            .into_iter()
            .flat_map(|polygon| polygon.range())
    }

    /// Do the two polygons share at least one cell? Unlike
    /// [Self::intersection], this counts overlaps of any thickness.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.bounds.intersect(&other.bounds).is_empty()
    }
}

impl HexShape for HexConvexPolygon {
    fn polygon(&self) -> &HexConvexPolygon {
        self
    }
}

impl AxisBounds {
    /// Range of y values in the column `x`, given the y and z bounds.
    /// `min > max` if the column is empty.
    fn y_span(&self, x: i32) -> (i32, i32) {
        (
            self.y.min.max(-x - self.z.max),
            self.y.max.min(-x - self.z.min),
        )
    }

    /// Are there no cells inside the bounds?
    fn is_empty(&self) -> bool {
        [self.x, self.y, self.z].iter().any(|range| range.min > range.max)
            || (self.x.min..=self.x.max).all(|x| {
                let (min_y, max_y) = self.y_span(x);
                min_y > max_y
            })
    }
}

impl AxisRange {
    fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: i32, y: i32, z: i32) -> CubeCoordinate {
        CubeCoordinate::new(x, y, z).unwrap()
    }

    #[test]
    fn test_hexagon_from_bounds() {
        let polygon = HexConvexPolygon::from_bounds(2, -2, 2, -2, 2, -2).unwrap();
        assert_eq!(polygon.vertices().len(), 6);
        assert_eq!(polygon.area(), 19);
        assert_eq!(polygon.range().count(), 19);
        assert!(polygon.contains(coord(2, -2, 0)));
        assert!(!polygon.contains(coord(2, 1, -3)));
        for cell in polygon.range() {
            assert!(cell.magnitude() <= 2);
        }
    }

    #[test]
    fn test_triangle_half_planes() {
        let polygon = HexConvexPolygon::new(vec![
            HexHalfPlane::high(HexAxis::X, 0),
            HexHalfPlane::high(HexAxis::Y, -2),
            HexHalfPlane::high(HexAxis::Z, 0),
        ])
        .unwrap();
        let mut vertices = polygon.vertices().to_vec();
        vertices.sort_by_key(|c| (c.x(), c.y()));
        assert_eq!(
            vertices,
            vec![coord(0, -2, 2), coord(0, 0, 0), coord(2, -2, 0)]
        );
        assert_eq!(polygon.area(), 6);
    }

    #[test]
    fn test_invalid() {
        // Unbounded wedge
        assert!(matches!(
            HexConvexPolygon::new(vec![
                HexHalfPlane::high(HexAxis::X, 0),
                HexHalfPlane::low(HexAxis::Y, 0),
            ]),
            Err(HexError::InvalidConvexPolygon(_))
        ));
        // Duplicate half-plane
        assert!(HexConvexPolygon::new(vec![
            HexHalfPlane::high(HexAxis::X, 0),
            HexHalfPlane::high(HexAxis::X, 1),
            HexHalfPlane::high(HexAxis::Y, 0),
        ])
        .is_err());
        // Empty
        assert!(HexConvexPolygon::new(vec![]).is_err());
        // Single cell has zero width
        assert!(HexConvexPolygon::from_bounds(0, 0, 0, 0, 0, 0).is_err());
        // Contradictory bounds
        assert!(HexConvexPolygon::from_bounds(1, 3, 2, -2, 2, -2).is_err());
    }

    #[test]
    fn test_intersection() {
        let a = HexConvexPolygon::from_bounds(2, -2, 2, -2, 2, -2).unwrap();
        let b = HexConvexPolygon::from_bounds(4, 0, 0, -4, 2, -2).unwrap();
        let overlap = HexConvexPolygon::intersection(&[&a, &b]).unwrap();
        for cell in overlap.range() {
            assert!(a.contains(cell) && b.contains(cell));
        }
        let expected = a.range().filter(|c| b.contains(*c)).count();
        assert_eq!(overlap.area(), expected);
        assert_eq!(
            HexConvexPolygon::intersection_range(&[&a, &b]).count(),
            expected
        );

        assert!(a.overlaps(&b));

        let far = HexConvexPolygon::from_bounds(12, 8, -8, -12, 2, -2).unwrap();
        assert!(!a.overlaps(&far));
        assert_eq!(HexConvexPolygon::intersection(&[&a, &far]), None);
        assert_eq!(HexConvexPolygon::intersection_range(&[&a, &far]).count(), 0);
        assert_eq!(HexConvexPolygon::intersection(&[]), None);
    }

    #[test]
    fn test_thin_overlap() {
        // Hexagons that only share the cell (2, -2, 0)
        let a = HexConvexPolygon::from_bounds(2, -2, 2, -2, 2, -2).unwrap();
        let b = HexConvexPolygon::from_bounds(6, 2, -2, -6, 2, -2).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert_eq!(HexConvexPolygon::intersection(&[&a, &b]), None);
        assert!(a.contains(coord(2, -2, 0)) && b.contains(coord(2, -2, 0)));

        // Halves of a hexagon that share the column x=0
        let left = HexConvexPolygon::from_bounds(0, -3, 3, -3, 3, -3).unwrap();
        let right = HexConvexPolygon::from_bounds(3, 0, 3, -3, 3, -3).unwrap();
        assert!(left.overlaps(&right));
        let shared = left.range().filter(|cell| right.contains(*cell)).count();
        assert_eq!(shared, 7);
        let apart = HexConvexPolygon::from_bounds(3, 1, 2, -3, 3, -3).unwrap();
        assert!(!left.overlaps(&apart));
    }
}
