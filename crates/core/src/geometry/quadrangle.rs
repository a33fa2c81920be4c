use crate::{
    error::{HexError, HexResult},
    geometry::{
        get_vertex, HexConvexPolygon, HexHalfPlane, HexLine, HexShape,
        HexVertexType,
    },
    hex::{CubeCoordinate, HexAxis, Orientation},
};
use derive_more::Display;
use log::trace;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// The nine kinds of four-sided shapes a hex grid allows. Six are trapezoids
/// (two parallel sides plus two legs that would meet at an apex), named for
/// where that apex points. Three are parallelograms, named for the axis they
/// don't use.
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
pub enum QuadrangleType {
    Up,
    Down,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
    /// Parallelogram on the X and Z axes
    Forward,
    /// Parallelogram on the Y and Z axes
    Backward,
    /// Parallelogram on the X and Y axes
    Rhomboid,
}

impl QuadrangleType {
    /// Classify a trapezoid by the axis of its parallel sides and whether the
    /// legs meet beyond the high end of that axis (apex high) or the low end
    fn trapezoid(base_axis: HexAxis, apex_high: bool) -> Self {
        match (base_axis, apex_high) {
            (HexAxis::Z, true) => Self::Up,
            (HexAxis::Z, false) => Self::Down,
            (HexAxis::X, true) => Self::DownRight,
            (HexAxis::X, false) => Self::UpLeft,
            (HexAxis::Y, true) => Self::DownLeft,
            (HexAxis::Y, false) => Self::UpRight,
        }
    }

    /// Classify a parallelogram by the axis its sides don't run along
    fn parallelogram(missing_axis: HexAxis) -> Self {
        match missing_axis {
            HexAxis::Y => Self::Forward,
            HexAxis::X => Self::Backward,
            HexAxis::Z => Self::Rhomboid,
        }
    }

    /// How to walk the outline of this shape from its spawn origin: the frame
    /// axis, plus three (vertex type, multiple of `length - 1`) steps. Each
    /// step starts from the corner the previous one reached.
    fn spawn_steps(self, spawn_upwards: bool) -> (HexAxis, [(HexVertexType, u32); 3]) {
        use HexVertexType::*;

        let up = if spawn_upwards {
            [(Right, 2), (UpperLeft, 1), (Left, 1)]
        } else {
            [(LowerLeft, 1), (Right, 2), (UpperLeft, 1)]
        };
        let down = if spawn_upwards {
            [(UpperLeft, 1), (Right, 2), (LowerLeft, 1)]
        } else {
            [(Right, 2), (LowerLeft, 1), (Left, 1)]
        };

        match self {
            Self::Up => (HexAxis::Z, up),
            Self::Down => (HexAxis::Z, down),
            // The slanted trapezoids are the same walks in rotated frames
            Self::DownRight => (HexAxis::X, up),
            Self::DownLeft => (HexAxis::Y, up),
            Self::UpLeft => (HexAxis::X, down),
            Self::UpRight => (HexAxis::Y, down),
            Self::Forward if spawn_upwards => {
                (HexAxis::Z, [(Right, 1), (UpperRight, 1), (Left, 1)])
            }
            Self::Forward => {
                (HexAxis::Z, [(LowerLeft, 1), (Right, 1), (UpperRight, 1)])
            }
            Self::Backward if spawn_upwards => {
                (HexAxis::Z, [(Right, 1), (UpperLeft, 1), (Left, 1)])
            }
            Self::Backward => {
                (HexAxis::Z, [(LowerRight, 1), (Right, 1), (UpperLeft, 1)])
            }
            Self::Rhomboid if spawn_upwards => {
                (HexAxis::Z, [(UpperRight, 1), (UpperLeft, 1), (LowerLeft, 1)])
            }
            Self::Rhomboid => {
                (HexAxis::Z, [(LowerRight, 1), (LowerLeft, 1), (UpperLeft, 1)])
            }
        }
    }
}

/// A four-sided shape: either a trapezoid (lines on all three axes, two of
/// them parallel) or a parallelogram (two pairs of parallel lines)
#[derive(Clone, Debug, PartialEq)]
pub struct HexQuadrangle {
    lines: [HexLine; 4],
    quadrangle_type: QuadrangleType,
    polygon: HexConvexPolygon,
}

impl HexQuadrangle {
    /// Build a quadrangle from its four boundary lines, in any order. The
    /// lines have to split 2-1-1 (trapezoid) or 2-2-0 (parallelogram) across
    /// the axes, and parallel lines can't coincide.
    pub fn from_lines(lines: [HexLine; 4]) -> HexResult<Self> {
        let mut by_axis: [Vec<i32>; 3] = Default::default();
        for line in &lines {
            let constants = &mut by_axis[line.axis().index()];
            if constants.contains(&line.constant()) {
                return Err(HexError::InvalidQuadrangle(format!(
                    "line {} appears twice",
                    line
                )));
            }
            constants.push(line.constant());
        }
        for constants in &mut by_axis {
            constants.sort_unstable();
        }

        let axes_with = |count: usize| {
            HexAxis::ALL
                .iter()
                .copied()
                .filter(|axis| by_axis[axis.index()].len() == count)
                .collect::<Vec<_>>()
        };
        let pairs = axes_with(2);
        let singles = axes_with(1);

        let (half_planes, quadrangle_type) = match (pairs.as_slice(), singles.as_slice()) {
            ([base], [_, _]) => {
                let base = *base;
                let (k1, k2) = (by_axis[base.index()][0], by_axis[base.index()][1]);
                let (axis_b, axis_c) = base.others();
                let b = by_axis[axis_b.index()][0];
                let c = by_axis[axis_c.index()][0];
                // Value on the base axis where the two legs cross
                let apex = -b - c;
                let apex_high = if apex > k2 {
                    true
                } else if apex < k1 {
                    false
                } else {
                    return Err(HexError::InvalidQuadrangle(format!(
                        "legs {}={} and {}={} cross between the parallel sides",
                        axis_b, b, axis_c, c
                    )));
                };
                let leg = if apex_high {
                    HexHalfPlane::high
                } else {
                    HexHalfPlane::low
                };
                (
                    vec![
                        HexHalfPlane::high(base, k1),
                        HexHalfPlane::low(base, k2),
                        leg(axis_b, b),
                        leg(axis_c, c),
                    ],
                    QuadrangleType::trapezoid(base, apex_high),
                )
            }
            ([first, second], []) => {
                let (next, after) = first.others();
                let missing = if *second == next { after } else { next };
                let sides = |axis: HexAxis| {
                    let constants = &by_axis[axis.index()];
                    [
                        HexHalfPlane::high(axis, constants[0]),
                        HexHalfPlane::low(axis, constants[1]),
                    ]
                };
                let mut half_planes = sides(*first).to_vec();
                half_planes.extend_from_slice(&sides(*second));
                (half_planes, QuadrangleType::parallelogram(missing))
            }
            _ => {
                return Err(HexError::InvalidQuadrangle(format!(
                    "lines {}, {}, {}, {} aren't split 2-1-1 or 2-2-0 across the axes",
                    lines[0], lines[1], lines[2], lines[3]
                )))
            }
        };

        let polygon = HexConvexPolygon::new(half_planes)
            .map_err(|err| HexError::InvalidQuadrangle(err.to_string()))?;
        Ok(Self {
            lines,
            quadrangle_type,
            polygon,
        })
    }

    /// Build a quadrangle from its four corners. On each axis, an extreme
    /// value shared by exactly two corners is a side of the shape.
    pub fn from_vertices(vertices: [CubeCoordinate; 4]) -> HexResult<Self> {
        for (i, vertex) in vertices.iter().enumerate() {
            if vertices[i + 1..].contains(vertex) {
                return Err(HexError::InvalidQuadrangle(format!(
                    "vertex {} appears twice",
                    vertex
                )));
            }
        }

        let mut lines = Vec::with_capacity(4);
        for axis in HexAxis::ALL.iter().copied() {
            let values = vertices.map(|vertex| vertex.get(axis));
            let min = values.iter().copied().min().unwrap_or_default();
            let max = values.iter().copied().max().unwrap_or_default();
            let extremes = if min == max { vec![min] } else { vec![min, max] };
            for extreme in extremes {
                if values.iter().filter(|value| **value == extreme).count() == 2 {
                    lines.push(HexLine::new(axis, extreme));
                }
            }
        }
        let lines: [HexLine; 4] = match lines.as_slice() {
            [a, b, c, d] => [*a, *b, *c, *d],
            _ => {
                return Err(HexError::InvalidQuadrangle(format!(
                    "vertices {}, {}, {}, {} define {} sides, expected 4",
                    vertices[0],
                    vertices[1],
                    vertices[2],
                    vertices[3],
                    lines.len()
                )))
            }
        };

        let quadrangle = Self::from_lines(lines)?;
        let mut expected = vertices.to_vec();
        let mut actual = quadrangle.polygon.vertices().to_vec();
        expected.sort_by_key(|c| (c.x(), c.y()));
        actual.sort_by_key(|c| (c.x(), c.y()));
        if expected != actual {
            return Err(HexError::InvalidQuadrangle(format!(
                "vertices {}, {}, {}, {} aren't the corners of a quadrangle",
                vertices[0], vertices[1], vertices[2], vertices[3]
            )));
        }
        Ok(quadrangle)
    }

    /// Build a quadrangle of the given type with a corner at `origin`. Sides
    /// are `length` cells long, except the long base of a trapezoid, which
    /// is `2 * length - 1`. With `spawn_upwards`, the shape extends upwards
    /// (in its frame) from `origin`, otherwise downwards.
    pub fn spawn(
        origin: CubeCoordinate,
        length: u32,
        quadrangle_type: QuadrangleType,
        orientation: Orientation,
        spawn_upwards: bool,
    ) -> HexResult<Self> {
        if length < 2 {
            return Err(HexError::InvalidQuadrangle(format!(
                "side length must be at least 2, got {}",
                length
            )));
        }
        let (axis, steps) = quadrangle_type.spawn_steps(spawn_upwards);
        let mut vertices = [origin; 4];
        for (i, (vertex_type, multiple)) in steps.iter().enumerate() {
            // A side spanning `n` steps covers `n + 1` cells
            let side = multiple * (length - 1) + 1;
            vertices[i + 1] =
                get_vertex(vertices[i], side, *vertex_type, orientation, axis);
        }
        trace!(
            "Spawning {} quadrangle with vertices {:?}",
            quadrangle_type,
            vertices
        );
        Self::from_vertices(vertices)
    }

    pub fn lines(&self) -> [HexLine; 4] {
        self.lines
    }

    pub fn quadrangle_type(&self) -> QuadrangleType {
        self.quadrangle_type
    }
}

impl HexShape for HexQuadrangle {
    fn polygon(&self) -> &HexConvexPolygon {
        &self.polygon
    }
}
