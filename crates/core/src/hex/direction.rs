//! Compass directions on a hex grid. The names of the six directions depend on
//! whether the grid is [Orientation::Pointy] or [Orientation::Flat], but the
//! underlying unit vectors are shared. Both orientations index into the same
//! clockwise vector table, so index `i` always means the same cube vector,
//! just under a different name.

use crate::{
    error::{HexError, HexResult},
    hex::CubeCoordinate,
};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};
use strum::{Display, EnumIter, EnumString};

/// Unit vectors for the six neighbors, clockwise. Pointy names these NE, E,
/// SE, SW, W, NW. Flat names them N, NE, SE, S, SW, NW.
pub(crate) const DIRECTION_VECTORS: [CubeCoordinate; 6] = [
    CubeCoordinate::from_xz(0, 1),
    CubeCoordinate::from_xz(1, 0),
    CubeCoordinate::from_xz(1, -1),
    CubeCoordinate::from_xz(0, -1),
    CubeCoordinate::from_xz(-1, 0),
    CubeCoordinate::from_xz(-1, 1),
];

/// Diagonal `i` is the sum of direction `i` and direction `i + 1`, i.e. it
/// points across the vertex shared by those two sides.
pub(crate) const DIAGONAL_VECTORS: [CubeCoordinate; 6] = [
    CubeCoordinate::from_xz(1, 1),
    CubeCoordinate::from_xz(2, -1),
    CubeCoordinate::from_xz(1, -2),
    CubeCoordinate::from_xz(-1, -1),
    CubeCoordinate::from_xz(-2, 1),
    CubeCoordinate::from_xz(-1, 2),
];

/// Inclusive bearing ranges (degrees, counterclockwise from east) that map to
/// each pointy direction. West straddles the ±180 seam so it gets two.
const POINTY_SECTORS: [&[(f64, f64)]; 6] = [
    &[(30.0, 90.0)],
    &[(-30.0, 30.0)],
    &[(-90.0, -30.0)],
    &[(-150.0, -90.0)],
    &[(150.0, 180.0), (-180.0, -150.0)],
    &[(90.0, 150.0)],
];

const FLAT_SECTORS: [&[(f64, f64)]; 6] = [
    &[(60.0, 120.0)],
    &[(0.0, 60.0)],
    &[(-60.0, 0.0)],
    &[(-120.0, -60.0)],
    &[(-180.0, -120.0)],
    &[(120.0, 180.0)],
];

/// Which way the cells of a grid are turned. Pointy cells have a vertex at the
/// top and are laid out in rows, flat cells have a side at the top and are
/// laid out in columns.
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
pub enum Orientation {
    Pointy,
    Flat,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Pointy
    }
}

/// A class of directions that has exactly six members, listed clockwise.
/// Every member's opposite is in the same class.
pub trait CompassDirection: 'static + Copy + Eq + Sized {
    /// All directions in the class, in clockwise order. The position of a
    /// direction in this list is its index into the shared vector tables.
    const CLOCKWISE: &'static [Self; 6];

    /// The grid orientation these names belong to
    const ORIENTATION: Orientation;

    /// Get the index of the given direction within the clockwise ordering of
    /// this class
    fn clockwise_index(self) -> usize;

    /// Get the direction at a clockwise index. The index wraps mod 6.
    fn from_clockwise_index(index: usize) -> Self {
        Self::CLOCKWISE[index % 6]
    }

    /// Get the direction that is directly opposite this one
    fn opposite(self) -> Self {
        Self::from_clockwise_index(self.clockwise_index() + 3)
    }

    /// The next direction going clockwise
    fn next(self) -> Self {
        Self::from_clockwise_index(self.clockwise_index() + 1)
    }

    /// The next direction going counterclockwise
    fn previous(self) -> Self {
        Self::from_clockwise_index(self.clockwise_index() + 5)
    }

    /// Convert this direction into a cube vector
    fn to_vector(self) -> CubeCoordinate;
}

/// Side directions for a grid of pointy-topped cells
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
pub enum PointyDirection {
    #[strum(to_string = "NE")]
    NorthEast,
    #[strum(to_string = "E")]
    East,
    #[strum(to_string = "SE")]
    SouthEast,
    #[strum(to_string = "SW")]
    SouthWest,
    #[strum(to_string = "W")]
    West,
    #[strum(to_string = "NW")]
    NorthWest,
}

impl CompassDirection for PointyDirection {
    const CLOCKWISE: &'static [Self; 6] = &[
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];
    const ORIENTATION: Orientation = Orientation::Pointy;

    fn clockwise_index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> CubeCoordinate {
        DIRECTION_VECTORS[self.clockwise_index()]
    }
}

/// Side directions for a grid of flat-topped cells
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
pub enum FlatDirection {
    #[strum(to_string = "N")]
    North,
    #[strum(to_string = "NE")]
    NorthEast,
    #[strum(to_string = "SE")]
    SouthEast,
    #[strum(to_string = "S")]
    South,
    #[strum(to_string = "SW")]
    SouthWest,
    #[strum(to_string = "NW")]
    NorthWest,
}

impl CompassDirection for FlatDirection {
    const CLOCKWISE: &'static [Self; 6] = &[
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];
    const ORIENTATION: Orientation = Orientation::Flat;

    fn clockwise_index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> CubeCoordinate {
        DIRECTION_VECTORS[self.clockwise_index()]
    }
}

/// Vertex (diagonal) directions for a grid of pointy-topped cells
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
pub enum PointyDiagonal {
    #[strum(to_string = "NE")]
    NorthEast,
    #[strum(to_string = "SE")]
    SouthEast,
    #[strum(to_string = "S")]
    South,
    #[strum(to_string = "SW")]
    SouthWest,
    #[strum(to_string = "NW")]
    NorthWest,
    #[strum(to_string = "N")]
    North,
}

impl CompassDirection for PointyDiagonal {
    const CLOCKWISE: &'static [Self; 6] = &[
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
        Self::North,
    ];
    const ORIENTATION: Orientation = Orientation::Pointy;

    fn clockwise_index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> CubeCoordinate {
        DIAGONAL_VECTORS[self.clockwise_index()]
    }
}

/// Vertex (diagonal) directions for a grid of flat-topped cells
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
pub enum FlatDiagonal {
    #[strum(to_string = "NE")]
    NorthEast,
    #[strum(to_string = "E")]
    East,
    #[strum(to_string = "SE")]
    SouthEast,
    #[strum(to_string = "SW")]
    SouthWest,
    #[strum(to_string = "W")]
    West,
    #[strum(to_string = "NW")]
    NorthWest,
}

impl CompassDirection for FlatDiagonal {
    const CLOCKWISE: &'static [Self; 6] = &[
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];
    const ORIENTATION: Orientation = Orientation::Flat;

    fn clockwise_index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> CubeCoordinate {
        DIAGONAL_VECTORS[self.clockwise_index()]
    }
}

/// A side direction that isn't tied to one orientation's enum at compile time.
/// This is what most of the crate takes, since grid orientation is usually a
/// runtime setting. Convert from [PointyDirection] or [FlatDirection] with
/// `into()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexDirection {
    orientation: Orientation,
    index: usize,
}

impl HexDirection {
    /// Get the direction at a clockwise index (mod 6) for an orientation
    pub fn new(orientation: Orientation, index: usize) -> Self {
        Self {
            orientation,
            index: index % 6,
        }
    }

    /// All six directions for an orientation, clockwise
    pub fn all(orientation: Orientation) -> impl Iterator<Item = Self> {
        (0..6).map(move |index| Self::new(orientation, index))
    }

    /// Map a bearing in degrees (counterclockwise from east, as returned by
    /// `atan2`) to the direction whose sector contains it. Sector bounds are
    /// inclusive and the first match in clockwise order wins, so a bearing on
    /// a boundary belongs to the earlier direction.
    pub fn from_bearing(orientation: Orientation, angle: f64) -> HexResult<Self> {
        Self::all(orientation)
            .find(|direction| direction.contains_bearing(angle))
            .ok_or(HexError::NoDirectionFound { angle })
    }

    /// Get the direction that most closely points from `origin` to `point`,
    /// in world space
    pub fn from_points(
        orientation: Orientation,
        origin: Point2<f64>,
        point: Point2<f64>,
    ) -> HexResult<Self> {
        let delta = point - origin;
        Self::from_bearing(orientation, delta.y.atan2(delta.x).to_degrees())
    }

    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn vector(self) -> CubeCoordinate {
        DIRECTION_VECTORS[self.index]
    }

    pub fn opposite(self) -> Self {
        Self::new(self.orientation, self.index + 3)
    }

    pub fn next(self) -> Self {
        Self::new(self.orientation, self.index + 1)
    }

    pub fn previous(self) -> Self {
        Self::new(self.orientation, self.index + 5)
    }

    /// The bearing ranges (inclusive, degrees) covered by this direction
    pub fn sectors(self) -> &'static [(f64, f64)] {
        match self.orientation {
            Orientation::Pointy => POINTY_SECTORS[self.index],
            Orientation::Flat => FLAT_SECTORS[self.index],
        }
    }

    /// Does this direction's sector contain the given bearing? NaN is never
    /// contained anywhere.
    pub fn contains_bearing(self, angle: f64) -> bool {
        self.sectors()
            .iter()
            .any(|(min, max)| *min <= angle && angle <= *max)
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Pointy => write!(
                f,
                "{}",
                PointyDirection::from_clockwise_index(self.index)
            ),
            Orientation::Flat => {
                write!(f, "{}", FlatDirection::from_clockwise_index(self.index))
            }
        }
    }
}

impl From<PointyDirection> for HexDirection {
    fn from(direction: PointyDirection) -> Self {
        Self::new(PointyDirection::ORIENTATION, direction.clockwise_index())
    }
}

impl From<FlatDirection> for HexDirection {
    fn from(direction: FlatDirection) -> Self {
        Self::new(FlatDirection::ORIENTATION, direction.clockwise_index())
    }
}

/// Orientation-agnostic counterpart of [PointyDiagonal] and [FlatDiagonal]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexDiagonal {
    orientation: Orientation,
    index: usize,
}

impl HexDiagonal {
    pub fn new(orientation: Orientation, index: usize) -> Self {
        Self {
            orientation,
            index: index % 6,
        }
    }

    pub fn all(orientation: Orientation) -> impl Iterator<Item = Self> {
        (0..6).map(move |index| Self::new(orientation, index))
    }

    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn vector(self) -> CubeCoordinate {
        DIAGONAL_VECTORS[self.index]
    }

    pub fn opposite(self) -> Self {
        Self::new(self.orientation, self.index + 3)
    }

    /// The two side directions whose shared vertex this diagonal crosses
    pub fn adjacent_directions(self) -> (HexDirection, HexDirection) {
        (
            HexDirection::new(self.orientation, self.index),
            HexDirection::new(self.orientation, self.index + 1),
        )
    }
}

impl fmt::Display for HexDiagonal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Pointy => write!(
                f,
                "{}",
                PointyDiagonal::from_clockwise_index(self.index)
            ),
            Orientation::Flat => {
                write!(f, "{}", FlatDiagonal::from_clockwise_index(self.index))
            }
        }
    }
}

impl From<PointyDiagonal> for HexDiagonal {
    fn from(diagonal: PointyDiagonal) -> Self {
        Self::new(PointyDiagonal::ORIENTATION, diagonal.clockwise_index())
    }
}

impl From<FlatDiagonal> for HexDiagonal {
    fn from(diagonal: FlatDiagonal) -> Self {
        Self::new(FlatDiagonal::ORIENTATION, diagonal.clockwise_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_clockwise_order() {
        for (i, direction) in PointyDirection::iter().enumerate() {
            assert_eq!(PointyDirection::CLOCKWISE[i], direction);
            assert_eq!(direction.clockwise_index(), i);
        }
        for (i, direction) in FlatDirection::iter().enumerate() {
            assert_eq!(FlatDirection::CLOCKWISE[i], direction);
        }
        for (i, diagonal) in PointyDiagonal::iter().enumerate() {
            assert_eq!(PointyDiagonal::CLOCKWISE[i], diagonal);
        }
        for (i, diagonal) in FlatDiagonal::iter().enumerate() {
            assert_eq!(FlatDiagonal::CLOCKWISE[i], diagonal);
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(PointyDirection::NorthEast.opposite(), PointyDirection::SouthWest);
        assert_eq!(PointyDirection::West.opposite(), PointyDirection::East);
        assert_eq!(FlatDirection::North.opposite(), FlatDirection::South);
        assert_eq!(PointyDiagonal::North.opposite(), PointyDiagonal::South);
        assert_eq!(FlatDiagonal::East.opposite(), FlatDiagonal::West);

        for direction in HexDirection::all(Orientation::Pointy) {
            assert_eq!(direction.opposite().vector(), -direction.vector());
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_next_previous() {
        assert_eq!(PointyDirection::NorthWest.next(), PointyDirection::NorthEast);
        assert_eq!(PointyDirection::NorthEast.previous(), PointyDirection::NorthWest);
        assert_eq!(FlatDirection::South.next(), FlatDirection::SouthWest);
        let direction = HexDirection::from(FlatDirection::SouthEast);
        assert_eq!(direction.next().previous(), direction);
    }

    #[test]
    fn test_vectors() {
        for i in 0..6 {
            let vector = DIRECTION_VECTORS[i];
            assert_eq!(vector.magnitude(), 1);
            assert_eq!(
                DIAGONAL_VECTORS[i],
                vector + DIRECTION_VECTORS[(i + 1) % 6]
            );
        }
        // Same vector, different names
        assert_eq!(
            PointyDirection::East.to_vector(),
            FlatDirection::NorthEast.to_vector()
        );
        assert_eq!(
            PointyDiagonal::South.to_vector(),
            CubeCoordinate::new(1, 1, -2).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            HexDirection::from(PointyDirection::SouthWest).to_string(),
            "SW"
        );
        assert_eq!(HexDirection::new(Orientation::Flat, 0).to_string(), "N");
        assert_eq!(HexDiagonal::new(Orientation::Pointy, 5).to_string(), "N");
        assert_eq!(HexDiagonal::new(Orientation::Flat, 1).to_string(), "E");
        assert_eq!("W".parse::<PointyDirection>().unwrap(), PointyDirection::West);
    }

    #[test]
    fn test_from_bearing() {
        let pointy = |angle| {
            HexDirection::from_bearing(Orientation::Pointy, angle)
                .unwrap()
                .to_string()
        };
        assert_eq!(pointy(0.0), "E");
        assert_eq!(pointy(60.0), "NE");
        // Boundaries go to the first direction in clockwise order
        assert_eq!(pointy(30.0), "NE");
        assert_eq!(pointy(90.0), "NE");
        assert_eq!(pointy(180.0), "W");
        assert_eq!(pointy(-180.0), "W");
        assert_eq!(pointy(-120.0), "SW");

        let flat = |angle| {
            HexDirection::from_bearing(Orientation::Flat, angle)
                .unwrap()
                .to_string()
        };
        assert_eq!(flat(90.0), "N");
        assert_eq!(flat(0.0), "NE");
        assert_eq!(flat(-90.0), "S");
        assert_eq!(flat(180.0), "NW");
        assert_eq!(flat(-180.0), "SW");

        assert!(matches!(
            HexDirection::from_bearing(Orientation::Pointy, f64::NAN),
            Err(HexError::NoDirectionFound { .. })
        ));
    }

    #[test]
    fn test_from_points() {
        let origin = Point2::new(1.0, 1.0);
        assert_eq!(
            HexDirection::from_points(
                Orientation::Pointy,
                origin,
                Point2::new(1.0, 5.0)
            )
            .unwrap(),
            PointyDirection::NorthEast.into()
        );
        assert_eq!(
            HexDirection::from_points(
                Orientation::Flat,
                origin,
                Point2::new(-3.0, 1.5)
            )
            .unwrap(),
            FlatDirection::NorthWest.into()
        );
    }

    #[test]
    fn test_diagonal_adjacent_directions() {
        let diagonal = HexDiagonal::from(PointyDiagonal::SouthWest);
        let (a, b) = diagonal.adjacent_directions();
        assert_eq!(a, PointyDirection::SouthWest.into());
        assert_eq!(b, PointyDirection::West.into());
        assert_eq!(diagonal.vector(), a.vector() + b.vector());
    }
}
