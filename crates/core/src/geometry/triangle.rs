use crate::{
    error::{HexError, HexResult},
    geometry::{
        get_vertex, HexConvexPolygon, HexHalfPlane, HexLine, HexShape,
        HexVertexType,
    },
    hex::{CubeCoordinate, HexAxis, Orientation},
    util,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Which way a triangle points. In the Z frame on a pointy grid, an up
/// triangle has a flat bottom and a corner on top.
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
pub enum TriangleType {
    /// Inside is `x >= a`, `y >= b` and `z >= c`
    Up,
    /// Inside is `x <= a`, `y <= b` and `z <= c`
    Down,
}

/// An equilateral triangle bounded by one line on each axis
#[derive(Clone, Debug, PartialEq)]
pub struct HexTriangle {
    /// Boundary lines, ordered X, Y, Z
    lines: [HexLine; 3],
    triangle_type: TriangleType,
    polygon: HexConvexPolygon,
}

impl HexTriangle {
    /// Build a triangle from the constants of its x, y and z lines. Whether
    /// it points up or down follows from the constants: `a + b + c < 0` is up,
    /// `> 0` is down, and `0` is a single point, which is an error.
    pub fn new(a: i32, b: i32, c: i32) -> HexResult<Self> {
        let sum = a + b + c;
        if sum == 0 {
            return Err(HexError::InvalidTriangle(format!(
                "lines x={}, y={}, z={} meet at a single cell",
                a, b, c
            )));
        }
        let triangle_type = if -(a + b) > c {
            TriangleType::Up
        } else {
            TriangleType::Down
        };
        let half_plane = match triangle_type {
            TriangleType::Up => HexHalfPlane::high,
            TriangleType::Down => HexHalfPlane::low,
        };
        let polygon = HexConvexPolygon::new(vec![
            half_plane(HexAxis::X, a),
            half_plane(HexAxis::Y, b),
            half_plane(HexAxis::Z, c),
        ])
        .map_err(|err| HexError::InvalidTriangle(err.to_string()))?;

        Ok(Self {
            lines: [
                HexLine::new(HexAxis::X, a),
                HexLine::new(HexAxis::Y, b),
                HexLine::new(HexAxis::Z, c),
            ],
            triangle_type,
            polygon,
        })
    }

    /// Build a triangle from its three boundary lines, in any order. There
    /// must be exactly one line per axis.
    pub fn from_lines(lines: [HexLine; 3]) -> HexResult<Self> {
        let mut constants = [None; 3];
        for line in &lines {
            let slot = &mut constants[line.axis().index()];
            if slot.is_some() {
                return Err(HexError::InvalidTriangle(format!(
                    "more than one line on axis {}",
                    line.axis()
                )));
            }
            *slot = Some(line.constant());
        }
        match constants {
            [Some(a), Some(b), Some(c)] => Self::new(a, b, c),
            _ => Err(HexError::InvalidTriangle(
                "need one line on each axis".into(),
            )),
        }
    }

    /// Build a triangle from its three corners. Each pair of corners has to
    /// share exactly one axis value; that shared value is the line between
    /// them.
    pub fn from_vertices(vertices: [CubeCoordinate; 3]) -> HexResult<Self> {
        let mut constants = [0; 3];
        for axis in HexAxis::ALL.iter().copied() {
            let values = vertices.map(|vertex| vertex.get(axis));
            constants[axis.index()] = shared_value(values).ok_or_else(|| {
                HexError::InvalidTriangle(format!(
                    "vertices {}, {}, {} don't share exactly one line on axis {}",
                    vertices[0], vertices[1], vertices[2], axis
                ))
            })?;
        }
        let triangle = Self::new(constants[0], constants[1], constants[2])?;

        // Three corners can share a value on each axis and still not be an
        // equilateral triangle, e.g. if one is off to the side
        let mut expected = vertices.to_vec();
        let mut actual = triangle.polygon.vertices().to_vec();
        expected.sort_by_key(|c| (c.x(), c.y()));
        actual.sort_by_key(|c| (c.x(), c.y()));
        if expected != actual {
            return Err(HexError::InvalidTriangle(format!(
                "vertices {}, {}, {} don't form an equilateral triangle",
                vertices[0], vertices[1], vertices[2]
            )));
        }
        Ok(triangle)
    }

    /// Build a triangle with sides of `length` cells, with a corner at
    /// `origin`. The triangle is laid out in the frame of `axis` (see
    /// [HexVertexType]). With `spawn_upwards`, the triangle extends upwards
    /// (in that frame) from `origin`, otherwise it extends downwards.
    pub fn spawn(
        origin: CubeCoordinate,
        length: u32,
        triangle_type: TriangleType,
        orientation: Orientation,
        axis: HexAxis,
        spawn_upwards: bool,
    ) -> HexResult<Self> {
        if length < 2 {
            return Err(HexError::InvalidTriangle(format!(
                "side length must be at least 2, got {}",
                length
            )));
        }
        let vertex = |from, vertex_type| {
            get_vertex(from, length, vertex_type, orientation, axis)
        };
        // Pick the corner to build from so the rest of the shape lands on
        // the requested side of the origin
        let (anchor, second, third) = match triangle_type {
            TriangleType::Up => {
                let anchor = if spawn_upwards {
                    origin
                } else {
                    vertex(origin, HexVertexType::LowerLeft)
                };
                (anchor, HexVertexType::Right, HexVertexType::UpperRight)
            }
            TriangleType::Down => {
                let anchor = if spawn_upwards {
                    vertex(origin, HexVertexType::UpperLeft)
                } else {
                    origin
                };
                (anchor, HexVertexType::Right, HexVertexType::LowerRight)
            }
        };
        Self::from_vertices([anchor, vertex(anchor, second), vertex(anchor, third)])
    }

    /// Boundary lines, ordered X, Y, Z
    pub fn lines(&self) -> [HexLine; 3] {
        self.lines
    }

    pub fn triangle_type(&self) -> TriangleType {
        self.triangle_type
    }

    /// Number of cells along each side
    pub fn side_length(&self) -> u32 {
        let sum: i32 = self.lines.iter().map(HexLine::constant).sum();
        sum.unsigned_abs() + 1
    }
}

impl HexShape for HexTriangle {
    fn polygon(&self) -> &HexConvexPolygon {
        &self.polygon
    }

    fn contains(&self, coord: CubeCoordinate) -> bool {
        self.lines.iter().all(|line| {
            let value = coord.get(line.axis());
            match self.triangle_type {
                TriangleType::Up => value >= line.constant(),
                TriangleType::Down => value <= line.constant(),
            }
        })
    }

    fn area(&self) -> usize {
        util::triangle_area(self.side_length())
    }
}

/// If exactly two of the values are equal, return that value
fn shared_value([a, b, c]: [i32; 3]) -> Option<i32> {
    match (a == b, b == c, a == c) {
        (true, false, false) => Some(a),
        (false, true, false) => Some(b),
        (false, false, true) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn coord(x: i32, y: i32, z: i32) -> CubeCoordinate {
        CubeCoordinate::new(x, y, z).unwrap()
    }

    #[test]
    fn test_new() {
        let up = HexTriangle::new(0, -2, 0).unwrap();
        assert_eq!(up.triangle_type(), TriangleType::Up);
        assert_eq!(up.side_length(), 3);
        assert_eq!(up.area(), 6);
        assert_eq!(up.range().count(), 6);

        let down = HexTriangle::new(2, 0, 0).unwrap();
        assert_eq!(down.triangle_type(), TriangleType::Down);
        assert_eq!(down.area(), 6);
        assert!(down.contains(coord(1, 0, -1)));
        assert!(!down.contains(coord(3, -3, 0)));

        assert!(matches!(
            HexTriangle::new(1, 2, -3),
            Err(HexError::InvalidTriangle(_))
        ));
    }

    #[test]
    fn test_from_lines() {
        let triangle = HexTriangle::from_lines([
            HexLine::new(HexAxis::Z, 0),
            HexLine::new(HexAxis::X, 0),
            HexLine::new(HexAxis::Y, -2),
        ])
        .unwrap();
        assert_eq!(triangle, HexTriangle::new(0, -2, 0).unwrap());
        assert!(HexTriangle::from_lines([
            HexLine::new(HexAxis::X, 0),
            HexLine::new(HexAxis::X, 1),
            HexLine::new(HexAxis::Y, -2),
        ])
        .is_err());
    }

    #[test]
    fn test_from_vertices() {
        let triangle = HexTriangle::from_vertices([
            coord(0, 0, 0),
            coord(2, -2, 0),
            coord(0, -2, 2),
        ])
        .unwrap();
        assert_eq!(triangle.lines()[0], HexLine::new(HexAxis::X, 0));
        assert_eq!(triangle.lines()[1], HexLine::new(HexAxis::Y, -2));
        assert_eq!(triangle.lines()[2], HexLine::new(HexAxis::Z, 0));

        // Collinear
        assert!(HexTriangle::from_vertices([
            coord(0, 0, 0),
            coord(1, -1, 0),
            coord(2, -2, 0),
        ])
        .is_err());
        // Right values, wrong shape
        assert!(HexTriangle::from_vertices([
            coord(0, 0, 0),
            coord(3, -3, 0),
            coord(0, -2, 2),
        ])
        .is_err());
    }

    #[test]
    fn test_spawn() {
        let up = HexTriangle::spawn(
            CubeCoordinate::ORIGIN,
            3,
            TriangleType::Up,
            Orientation::Pointy,
            HexAxis::Z,
            true,
        )
        .unwrap();
        assert_eq!(up, HexTriangle::new(0, -2, 0).unwrap());
        let mut vertices = up.vertices().to_vec();
        vertices.sort_by_key(|c| (c.x(), c.y()));
        assert_eq!(
            vertices,
            vec![coord(0, -2, 2), coord(0, 0, 0), coord(2, -2, 0)]
        );

        for triangle_type in TriangleType::iter() {
            for axis in HexAxis::ALL.iter().copied() {
                for spawn_upwards in [true, false] {
                    let triangle = HexTriangle::spawn(
                        coord(3, -1, -2),
                        4,
                        triangle_type,
                        Orientation::Flat,
                        axis,
                        spawn_upwards,
                    )
                    .unwrap();
                    assert_eq!(triangle.triangle_type(), triangle_type);
                    assert_eq!(triangle.side_length(), 4);
                    assert_eq!(triangle.area(), 10);
                    assert!(triangle.vertices().contains(&coord(3, -1, -2)));
                }
            }
        }

        assert!(HexTriangle::spawn(
            CubeCoordinate::ORIGIN,
            1,
            TriangleType::Up,
            Orientation::Pointy,
            HexAxis::Z,
            true,
        )
        .is_err());
    }
}
