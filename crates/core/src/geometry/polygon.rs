use crate::{
    error::{HexError, HexResult},
    geometry::HexConvexPolygon,
    hex::CubeCoordinate,
};

/// A (possibly non-convex) region made of convex polygons that don't overlap
#[derive(Clone, Debug, PartialEq)]
pub struct HexPolygon {
    polygons: Vec<HexConvexPolygon>,
}

impl HexPolygon {
    pub fn new(polygons: Vec<HexConvexPolygon>) -> HexResult<Self> {
        for (i, a) in polygons.iter().enumerate() {
            for (j, b) in polygons.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    return Err(HexError::InvalidPolygon(format!(
                        "parts {} and {} overlap",
                        i, j
                    )));
                }
            }
        }
        Ok(Self { polygons })
    }

    pub fn polygons(&self) -> &[HexConvexPolygon] {
        &self.polygons
    }

    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(coord))
    }

    /// Iterate over every cell, one part at a time
    pub fn range(&self) -> impl Iterator<Item = CubeCoordinate> + '_ {
        self.polygons.iter().flat_map(|polygon| polygon.range())
    }

    pub fn area(&self) -> usize {
        self.polygons.iter().map(HexConvexPolygon::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::{HexRegularHexagon, HexShape},
        hex::CoordinateSet,
    };

    #[test]
    fn test_union() {
        let a = HexRegularHexagon::new(CubeCoordinate::ORIGIN, 2).unwrap();
        let b = HexRegularHexagon::new(CubeCoordinate::from_xy(5, -5), 2).unwrap();
        let polygon =
            HexPolygon::new(vec![a.polygon().clone(), b.polygon().clone()]).unwrap();
        assert_eq!(polygon.area(), 38);
        assert_eq!(polygon.range().count(), 38);
        assert!(polygon.contains(CubeCoordinate::from_xy(4, -4)));
        assert!(!polygon.contains(CubeCoordinate::from_xy(0, -3)));
    }

    #[test]
    fn test_overlap() {
        let a = HexRegularHexagon::new(CubeCoordinate::ORIGIN, 2).unwrap();
        let b = HexRegularHexagon::new(CubeCoordinate::from_xy(2, -2), 2).unwrap();
        assert!(matches!(
            HexPolygon::new(vec![a.polygon().clone(), b.polygon().clone()]),
            Err(HexError::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_overlap_single_cell() {
        let a = HexRegularHexagon::new(CubeCoordinate::ORIGIN, 2).unwrap();
        let b = HexRegularHexagon::new(CubeCoordinate::from_xy(4, -4), 2).unwrap();
        assert!(matches!(
            HexPolygon::new(vec![a.polygon().clone(), b.polygon().clone()]),
            Err(HexError::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_overlap_shared_column() {
        let left = HexConvexPolygon::from_bounds(0, -3, 3, -3, 3, -3).unwrap();
        let right = HexConvexPolygon::from_bounds(3, 0, 3, -3, 3, -3).unwrap();
        assert!(matches!(
            HexPolygon::new(vec![left.clone(), right]),
            Err(HexError::InvalidPolygon(_))
        ));

        // Without the shared column, the halves tile the whole hexagon
        let right = HexConvexPolygon::from_bounds(3, 1, 2, -3, 3, -3).unwrap();
        let polygon = HexPolygon::new(vec![left, right]).unwrap();
        let distinct: CoordinateSet = polygon.range().collect();
        assert_eq!(polygon.area(), 37);
        assert_eq!(distinct.len(), 37);
    }
}
