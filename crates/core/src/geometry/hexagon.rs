use crate::{
    error::HexResult,
    geometry::{HexConvexPolygon, HexShape},
    hex::CubeCoordinate,
    util,
};

/// All cells within `radius` steps of `center`
#[derive(Clone, Debug, PartialEq)]
pub struct HexRegularHexagon {
    center: CubeCoordinate,
    radius: u32,
    polygon: HexConvexPolygon,
}

impl HexRegularHexagon {
    /// A radius of 0 is a single cell, which isn't a polygon, so the
    /// smallest hexagon has radius 1.
    pub fn new(center: CubeCoordinate, radius: u32) -> HexResult<Self> {
        let r = radius as i32;
        let polygon = HexConvexPolygon::from_bounds(
            center.x() + r,
            center.x() - r,
            center.y() + r,
            center.y() - r,
            center.z() + r,
            center.z() - r,
        )?;
        Ok(Self {
            center,
            radius,
            polygon,
        })
    }

    pub fn center(&self) -> CubeCoordinate {
        self.center
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }
}

impl HexShape for HexRegularHexagon {
    fn polygon(&self) -> &HexConvexPolygon {
        &self.polygon
    }

    fn contains(&self, coord: CubeCoordinate) -> bool {
        self.center.distance(coord) <= self.radius
    }

    fn area(&self) -> usize {
        util::hexagon_area(self.radius)
    }
}
