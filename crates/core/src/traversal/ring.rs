use crate::{
    hex::{CubeCoordinate, HexDirection, Rotation},
    util,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Which end of a spiral to start from
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
pub enum SpiralDirection {
    /// Center first, then rings of increasing radius
    Outwards,
    /// Outermost ring first, center last
    Inwards,
}

/// Walk the ring of cells exactly `radius` steps from `center`. The walk
/// starts at `center + start_direction * radius` and goes around in the given
/// rotation. Cells failing `exists` are skipped, but the walk itself carries
/// on through them.
///
/// A full ring has `6 * radius` cells. Radius 0 yields nothing; if you want
/// the center, use [spiral].
pub fn ring<F>(
    center: CubeCoordinate,
    radius: u32,
    start_direction: HexDirection,
    rotation: Rotation,
    exists: F,
) -> impl Iterator<Item = CubeCoordinate>
where
    F: Fn(CubeCoordinate) -> bool,
{
    let r = radius as i32;
    let start = start_direction.index();
    (0..6)
        .flat_map(move |side| {
            // Side `s` starts at the corner in direction `start + s` (in the
            // rotation's sense) and walks two directions further around
            let corner = center.neighbor_at(rotation.turn(start, side), r);
            let walk = rotation.turn(start, side + 2);
            (0..r).map(move |step| corner.neighbor_at(walk, step))
        })
        .filter(move |coord| exists(*coord))
}

/// Get every cell within `radius` of `center`, ring by ring. There are
/// `3r^2 + 3r + 1` cells when nothing is filtered out.
pub fn spiral<F>(
    center: CubeCoordinate,
    radius: u32,
    direction: SpiralDirection,
    start_direction: HexDirection,
    rotation: Rotation,
    exists: F,
) -> Vec<CubeCoordinate>
where
    F: Fn(CubeCoordinate) -> bool,
{
    let radii: Box<dyn Iterator<Item = u32>> = match direction {
        SpiralDirection::Outwards => Box::new(1..=radius),
        SpiralDirection::Inwards => Box::new((1..=radius).rev()),
    };
    let mut cells = Vec::with_capacity(util::hexagon_area(radius));
    if direction == SpiralDirection::Outwards && exists(center) {
        cells.push(center);
    }
    for r in radii {
        cells.extend(ring(center, r, start_direction, rotation, &exists));
    }
    if direction == SpiralDirection::Inwards && exists(center) {
        cells.push(center);
    }
    cells
}
