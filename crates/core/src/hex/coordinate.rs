//! The cube coordinate type and the algebra defined on it. See the parent
//! module documentation for a description of the coordinate system.

use crate::{
    error::{HexError, HexResult},
    geometry::HexLine,
    hex::{
        direction::{DIAGONAL_VECTORS, DIRECTION_VECTORS},
        HexDirection,
    },
};
use derive_more::{
    Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign,
};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};
use strum::{EnumIter, EnumString};

/// The 3 axes in the cube coordinate system.
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
pub enum HexAxis {
    X,
    Y,
    Z,
}

impl HexAxis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// The two other axes, in cyclic order. E.g. for `Y` this gives
    /// `(Z, X)`. A lot of the per-axis math in this crate is written once in
    /// terms of an axis and its two cyclic successors.
    pub fn others(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::Z, Self::X),
            Self::Z => (Self::X, Self::Y),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Sense of a rotation, as seen on screen (north up).
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
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Move `steps` positions around a 6-entry clockwise table, starting at
    /// `index`, in this rotation's sense.
    pub(crate) fn turn(self, index: usize, steps: usize) -> usize {
        match self {
            Self::Clockwise => (index + steps) % 6,
            Self::CounterClockwise => (index + 6 - steps % 6) % 6,
        }
    }
}

/// A single cell in a hexagon grid, identified by its cube coordinates.
/// **For every cell, `x + y + z = 0`.**
///
/// Since the third component can always be derived from the other two, this
/// struct only stores `x` and `y`, and `z` is computed on demand. That makes
/// the invariant unbreakable once a value exists: the only fallible
/// constructor is [Self::new], which takes all three components.
///
/// The same type doubles as a displacement vector (e.g. the unit vector of a
/// direction), since the difference of two cells also sums to zero.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
#[serde(into = "[i32; 3]", try_from = "[i32; 3]")]
pub struct CubeCoordinate {
    x: i32,
    y: i32,
}

impl CubeCoordinate {
    pub const ORIGIN: Self = Self::from_xy(0, 0);

    /// Construct a coordinate from all three components. Returns an error if
    /// the components don't fall on the plane `x + y + z = 0`.
    pub fn new(x: i32, y: i32, z: i32) -> HexResult<Self> {
        // Summed in i64 so off-plane input can't overflow
        if i64::from(x) + i64::from(y) + i64::from(z) != 0 {
            Err(HexError::InvalidCoordinate { x, y, z })
        } else {
            Ok(Self::from_xy(x, y))
        }
    }

    /// Construct a new coordinate with the given x and y. Since x+y+z=0 for
    /// all cells, we can derive z from x & y.
    pub const fn from_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new coordinate with the given x and z. Since x+y+z=0 for
    /// all cells, we can derive y from x & z.
    pub const fn from_xz(x: i32, z: i32) -> Self {
        Self::from_xy(x, -x - z)
    }

    /// Construct a new coordinate with the given y and z. Since x+y+z=0 for
    /// all cells, we can derive x from y & z.
    pub const fn from_yz(y: i32, z: i32) -> Self {
        Self::from_xy(-y - z, y)
    }

    /// Construct a coordinate from the values of two distinct axes. Returns
    /// `None` if both axes are the same, since then the third component is
    /// undetermined.
    pub fn from_axes(
        axis_a: HexAxis,
        a: i32,
        axis_b: HexAxis,
        b: i32,
    ) -> Option<Self> {
        match (axis_a, axis_b) {
            (HexAxis::X, HexAxis::Y) => Some(Self::from_xy(a, b)),
            (HexAxis::Y, HexAxis::X) => Some(Self::from_xy(b, a)),
            (HexAxis::X, HexAxis::Z) => Some(Self::from_xz(a, b)),
            (HexAxis::Z, HexAxis::X) => Some(Self::from_xz(b, a)),
            (HexAxis::Y, HexAxis::Z) => Some(Self::from_yz(a, b)),
            (HexAxis::Z, HexAxis::Y) => Some(Self::from_yz(b, a)),
            _ => None,
        }
    }

    /// Construct a coordinate from its value `a` on `axis` and `b` on the
    /// cyclic successor of `axis` (see [HexAxis::others])
    pub(crate) fn from_axis_and_successor(axis: HexAxis, a: i32, b: i32) -> Self {
        match axis {
            HexAxis::X => Self::from_xy(a, b),
            HexAxis::Y => Self::from_yz(a, b),
            HexAxis::Z => Self::from_xz(b, a),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -(self.x + self.y)
    }

    /// Get the component of this coordinate on a particular axis
    pub fn get(&self, axis: HexAxis) -> i32 {
        match axis {
            HexAxis::X => self.x(),
            HexAxis::Y => self.y(),
            HexAxis::Z => self.z(),
        }
    }

    /// Snap a fractional cube position to the cell containing it. Each axis
    /// is rounded independently; if the rounded values no longer sum to zero,
    /// the axis that moved the furthest during rounding is recomputed from
    /// the other two.
    ///
    /// The checks go X first, then Z, and Y is the fallthrough. At a boundary
    /// where two residuals tie, that order decides which cell wins, so don't
    /// reshuffle these branches.
    pub fn round(fractional: Vector3<f64>) -> Self {
        let rx = fractional.x.round();
        let ry = fractional.y.round();
        let rz = fractional.z.round();

        if rx + ry + rz == 0.0 {
            return Self::from_xy(rx as i32, ry as i32);
        }

        let dx = (rx - fractional.x).abs();
        let dy = (ry - fractional.y).abs();
        let dz = (rz - fractional.z).abs();

        if dx > dy && dx > dz {
            Self::from_yz(ry as i32, rz as i32)
        } else if dz > dy {
            Self::from_xy(rx as i32, ry as i32)
        } else {
            Self::from_xz(rx as i32, rz as i32)
        }
    }

    /// Convert to a floating point vector, e.g. for interpolation
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x() as f64, self.y() as f64, self.z() as f64)
    }

    /// Number of single steps it takes to get from the origin to this cell
    pub fn magnitude(&self) -> u32 {
        // IMPORTANT: We divide by 2 here because two adjacent cell centers are
        // always separated by two cube edges
        (self.x().unsigned_abs() + self.y().unsigned_abs() + self.z().unsigned_abs())
            / 2
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the cells are equal,
    /// 1 if they're adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance(self, other: Self) -> u32 {
        (self - other).magnitude()
    }

    /// Divide each component by a scalar, truncating towards zero. Truncation
    /// can knock the components off the plane, in which case this fails. E.g.
    /// `(2, -1, -1) / 2` would be `(1, 0, 0)`.
    pub fn checked_div(self, divisor: i32) -> HexResult<Self> {
        if divisor == 0 {
            return Err(HexError::DivideByZero);
        }
        Self::new(self.x() / divisor, self.y() / divisor, self.z() / divisor)
    }

    /// Rotate this cell around `center`. `degrees` must be a multiple of 60,
    /// since a hex grid is only symmetric in 60 degree increments.
    pub fn rotate(
        self,
        center: Self,
        degrees: u32,
        rotation: Rotation,
    ) -> HexResult<Self> {
        if degrees % 60 != 0 {
            return Err(HexError::InvalidRotation(degrees));
        }

        let mut vector = self - center;
        for _ in 0..(degrees / 60) % 6 {
            // Each 60 degree turn is a cyclic permutation plus a sign flip
            vector = match rotation {
                Rotation::Clockwise => Self::from_xy(-vector.y(), -vector.z()),
                Rotation::CounterClockwise => {
                    Self::from_xy(-vector.z(), -vector.x())
                }
            };
        }
        Ok(center + vector)
    }

    /// Mirror this cell across a line. Cells on the line map to themselves.
    pub fn reflect(self, line: HexLine) -> Self {
        let k = line.constant();
        let axis = line.axis();
        let (_, axis_c) = axis.others();
        // The mirrored axis folds around the line's constant, and the other
        // two swap places (negated, and shifted back by the constant)
        let a = 2 * k - self.get(axis);
        let b = -self.get(axis_c) - k;
        Self::from_axis_and_successor(axis, a, b)
    }

    /// Get the cell `scale` steps away in the given direction
    pub fn neighbor(self, direction: HexDirection, scale: i32) -> Self {
        self + direction.vector() * scale
    }

    /// Same as [Self::neighbor], but the direction is given by its position
    /// in the shared clockwise direction table. The index wraps mod 6.
    pub fn neighbor_at(self, index: usize, scale: i32) -> Self {
        self + DIRECTION_VECTORS[index % 6] * scale
    }

    /// Get all the cells directly adjacent to this one, in clockwise table
    /// order
    pub fn neighbors(self) -> [Self; 6] {
        DIRECTION_VECTORS.map(|vector| self + vector)
    }

    /// Get the 6 cells that sit across each vertex of this one. Each is two
    /// steps away, one in each of two adjacent directions.
    pub fn diagonal_neighbors(self) -> [Self; 6] {
        DIAGONAL_VECTORS.map(|vector| self + vector)
    }
}

impl From<CubeCoordinate> for [i32; 3] {
    fn from(coord: CubeCoordinate) -> Self {
        [coord.x(), coord.y(), coord.z()]
    }
}

impl TryFrom<[i32; 3]> for CubeCoordinate {
    type Error = HexError;

    fn try_from([x, y, z]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(x, y, z)
    }
}

/// Parse from `x,y,z`, optionally wrapped in parentheses (so the `Display`
/// output can be parsed back).
impl FromStr for CubeCoordinate {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let components = inner
            .split(',')
            .map(|component| component.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| HexError::ParseCoordinate(s.to_owned()))?;
        match components.as_slice() {
            [x, y, z] => Self::new(*x, *y, *z),
            _ => Err(HexError::ParseCoordinate(s.to_owned())),
        }
    }
}
