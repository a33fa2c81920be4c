use crate::hex::{
    CubeCoordinate, FlatDirection, HexAxis, HexDirection, Orientation,
    PointyDirection,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// The corners of a shape as seen in a local frame. In the frame of the Z
/// axis, "right" runs along a line of constant z (east on a pointy grid), and
/// "upper right"/"upper left" run along the other two axes. The X and Y frames
/// are the same picture rotated by 120 and 240 degrees.
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
pub enum HexVertexType {
    Left,
    UpperLeft,
    LowerLeft,
    Right,
    UpperRight,
    LowerRight,
}

/// Step direction for each vertex type (rows, declaration order) in the frame
/// of each axis (columns, X Y Z)
const POINTY_VERTEX_DIRECTIONS: [[PointyDirection; 3]; 6] = {
    use PointyDirection::*;
    [
        [NorthEast, SouthEast, West],
        [East, SouthWest, NorthWest],
        [NorthWest, East, SouthWest],
        [SouthWest, NorthWest, East],
        [SouthEast, West, NorthEast],
        [West, NorthEast, SouthEast],
    ]
};

/// Same as [POINTY_VERTEX_DIRECTIONS], under flat names. Each entry is the
/// same cube vector as its pointy counterpart.
const FLAT_VERTEX_DIRECTIONS: [[FlatDirection; 3]; 6] = {
    use FlatDirection::*;
    [
        [North, SouthEast, SouthWest],
        [NorthEast, South, NorthWest],
        [NorthWest, NorthEast, South],
        [South, NorthWest, NorthEast],
        [SouthEast, SouthWest, North],
        [SouthWest, North, SouthEast],
    ]
};

impl HexVertexType {
    /// The direction you travel from a shape's reference corner to reach this
    /// vertex, in the frame of the given axis
    pub fn direction(self, orientation: Orientation, axis: HexAxis) -> HexDirection {
        let row = self as usize;
        let col = axis.index();
        match orientation {
            Orientation::Pointy => POINTY_VERTEX_DIRECTIONS[row][col].into(),
            Orientation::Flat => FLAT_VERTEX_DIRECTIONS[row][col].into(),
        }
    }
}

/// Get the far corner of a side of `length` cells that starts at `coord` and
/// runs towards `vertex_type`. A side of length `n` covers `n` cells, so the
/// corner is `n - 1` steps away.
pub fn get_vertex(
    coord: CubeCoordinate,
    length: u32,
    vertex_type: HexVertexType,
    orientation: Orientation,
    axis: HexAxis,
) -> CubeCoordinate {
    let steps = length.saturating_sub(1) as i32;
    coord.neighbor(vertex_type.direction(orientation, axis), steps)
}
