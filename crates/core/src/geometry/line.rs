use crate::hex::{CubeCoordinate, HexAxis, HexLayout};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// An infinite straight row of cells: every cell whose component on `axis`
/// equals `constant`.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{}={}", axis, constant)]
pub struct HexLine {
    axis: HexAxis,
    constant: i32,
}

impl HexLine {
    pub const fn new(axis: HexAxis, constant: i32) -> Self {
        Self { axis, constant }
    }

    pub fn axis(&self) -> HexAxis {
        self.axis
    }

    pub fn constant(&self) -> i32 {
        self.constant
    }

    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        coord.get(self.axis) == self.constant
    }

    /// The unit vector that walks along this line. For an axis `A` with
    /// cyclic successors `B` and `C`, this adds one to `B` and takes one from
    /// `C`.
    pub fn step(&self) -> CubeCoordinate {
        CubeCoordinate::from_axis_and_successor(self.axis, 0, 1)
    }

    /// The cell where two lines cross, if there is exactly one. Lines on the
    /// same axis are parallel (or identical) and give `None`.
    pub fn intersection(&self, other: &Self) -> Option<CubeCoordinate> {
        CubeCoordinate::from_axes(
            self.axis,
            self.constant,
            other.axis,
            other.constant,
        )
    }

    /// Slide a cell along one of the other axes until it lands on this line.
    /// Cells already on the line come back unchanged.
    pub fn project(&self, coord: CubeCoordinate) -> CubeCoordinate {
        let (axis_b, _) = self.axis.others();
        CubeCoordinate::from_axis_and_successor(
            self.axis,
            self.constant,
            coord.get(axis_b),
        )
    }

    /// Mirror a cell across this line. See [CubeCoordinate::reflect].
    pub fn reflect(&self, coord: CubeCoordinate) -> CubeCoordinate {
        coord.reflect(*self)
    }

    /// Walk the line outwards from `start` (projected onto the line first),
    /// alternating sides: `start`, `+1`, `-1`, `+2`, `-2`, ... Only cells that
    /// pass `exists` are yielded.
    ///
    /// With `stop_on_bounds`, the walk ends at the first distance where
    /// neither side exists. Otherwise it skips over gaps, and only ends when
    /// the step count hits `i32::MAX`, so don't collect it without a `take`.
    pub fn range<F>(
        &self,
        start: CubeCoordinate,
        exists: F,
        stop_on_bounds: bool,
    ) -> HexLineRange<F>
    where
        F: Fn(CubeCoordinate) -> bool,
    {
        HexLineRange {
            origin: self.project(start),
            step: self.step(),
            exists,
            stop_on_bounds,
            distance: 0,
            pending: None,
            done: false,
        }
    }
}

/// Iterator returned by [HexLine::range]
#[derive(Clone, Debug)]
pub struct HexLineRange<F> {
    origin: CubeCoordinate,
    step: CubeCoordinate,
    exists: F,
    stop_on_bounds: bool,
    /// Distance of the next pair of cells to check
    distance: i32,
    /// The negative side of the current pair, if it still needs to be yielded
    pending: Option<CubeCoordinate>,
    done: bool,
}

impl<F: Fn(CubeCoordinate) -> bool> Iterator for HexLineRange<F> {
    type Item = CubeCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(coord) = self.pending.take() {
                return Some(coord);
            }
            if self.done {
                return None;
            }
            if self.distance == 0 {
                self.distance = 1;
                if (self.exists)(self.origin) {
                    return Some(self.origin);
                }
                continue;
            }
            if self.distance == i32::MAX {
                self.done = true;
                return None;
            }

            let forward = self.origin + self.step * self.distance;
            let backward = self.origin - self.step * self.distance;
            self.distance += 1;
            match ((self.exists)(forward), (self.exists)(backward)) {
                (true, true) => {
                    self.pending = Some(backward);
                    return Some(forward);
                }
                (true, false) => return Some(forward),
                (false, true) => return Some(backward),
                (false, false) if self.stop_on_bounds => {
                    self.done = true;
                    return None;
                }
                (false, false) => {}
            }
        }
    }
}

/// Which side of its boundary line a [HexHalfPlane] keeps
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
pub enum HalfPlaneType {
    /// Keep `component >= constant`
    High,
    /// Keep `component <= constant`
    Low,
}

/// A line plus everything on one side of it. The line itself is included.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{}{}{}", "self.line.axis()", "self.operator()", "self.line.constant()")]
pub struct HexHalfPlane {
    line: HexLine,
    half_plane_type: HalfPlaneType,
}

impl HexHalfPlane {
    pub fn new(axis: HexAxis, half_plane_type: HalfPlaneType, constant: i32) -> Self {
        Self {
            line: HexLine::new(axis, constant),
            half_plane_type,
        }
    }

    /// Shorthand for `axis >= constant`
    pub fn high(axis: HexAxis, constant: i32) -> Self {
        Self::new(axis, HalfPlaneType::High, constant)
    }

    /// Shorthand for `axis <= constant`
    pub fn low(axis: HexAxis, constant: i32) -> Self {
        Self::new(axis, HalfPlaneType::Low, constant)
    }

    pub fn line(&self) -> HexLine {
        self.line
    }

    pub fn axis(&self) -> HexAxis {
        self.line.axis()
    }

    pub fn constant(&self) -> i32 {
        self.line.constant()
    }

    pub fn half_plane_type(&self) -> HalfPlaneType {
        self.half_plane_type
    }

    pub fn contains(&self, coord: CubeCoordinate) -> bool {
        let value = coord.get(self.axis());
        match self.half_plane_type {
            HalfPlaneType::High => value >= self.constant(),
            HalfPlaneType::Low => value <= self.constant(),
        }
    }

    fn operator(&self) -> &'static str {
        match self.half_plane_type {
            HalfPlaneType::High => ">=",
            HalfPlaneType::Low => "<=",
        }
    }
}

/// Straight lines between arbitrary cells, drawn by sampling the segment
/// between their world positions
pub struct HexInterpolatedLine;

impl HexInterpolatedLine {
    /// Get the cells along the segment from `a` to `b`, inclusive of both
    /// ends. There are `distance(a, b) + 1` samples; each one is snapped to a
    /// cell and dropped if it fails `exists`. Neighboring samples can snap to
    /// the same cell, and that cell is yielded each time.
    pub fn range<F>(
        a: CubeCoordinate,
        b: CubeCoordinate,
        layout: &HexLayout,
        exists: F,
    ) -> impl Iterator<Item = CubeCoordinate>
    where
        F: Fn(CubeCoordinate) -> bool,
    {
        let layout = *layout;
        let samples = a.distance(b);
        let start = layout.to_position(a);
        let end = layout.to_position(b);
        (0..=samples)
            .map(move |i| {
                let t = if samples == 0 {
                    0.0
                } else {
                    i as f64 / samples as f64
                };
                layout.from_position(start + (end - start) * t)
            })
            .filter(move |coord| exists(*coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::{OffsetType, Orientation};

    fn coord(x: i32, y: i32, z: i32) -> CubeCoordinate {
        CubeCoordinate::new(x, y, z).unwrap()
    }

    #[test]
    fn test_intersection() {
        let x = HexLine::new(HexAxis::X, 2);
        let y = HexLine::new(HexAxis::Y, -3);
        let z = HexLine::new(HexAxis::Z, 4);
        assert_eq!(x.intersection(&y), Some(coord(2, -3, 1)));
        assert_eq!(y.intersection(&x), Some(coord(2, -3, 1)));
        assert_eq!(x.intersection(&z), Some(coord(2, -6, 4)));
        assert_eq!(y.intersection(&z), Some(coord(-1, -3, 4)));
        assert_eq!(x.intersection(&HexLine::new(HexAxis::X, 5)), None);
        assert_eq!(x.intersection(&x), None);
    }

    #[test]
    fn test_step_and_project() {
        for axis in HexAxis::ALL.iter().copied() {
            let line = HexLine::new(axis, 3);
            assert_eq!(line.step().magnitude(), 1);
            assert_eq!(line.step().get(axis), 0);
            let projected = line.project(coord(-2, 7, -5));
            assert!(line.contains(projected));
            assert!(line.contains(projected + line.step() * 4));
        }

        assert_eq!(HexLine::new(HexAxis::X, 0).step(), coord(0, 1, -1));
        assert_eq!(HexLine::new(HexAxis::Y, 0).step(), coord(-1, 0, 1));
        assert_eq!(HexLine::new(HexAxis::Z, 0).step(), coord(1, -1, 0));
        let cell = coord(0, 1, -1);
        assert_eq!(HexLine::new(HexAxis::X, 2).project(cell), coord(2, 1, -3));
        assert_eq!(HexLine::new(HexAxis::Y, 3).project(cell), coord(-2, 3, -1));
        assert_eq!(HexLine::new(HexAxis::Z, -1).project(cell), cell);
    }

    #[test]
    fn test_range_alternates() {
        let line = HexLine::new(HexAxis::Z, 0);
        let cells: Vec<_> = line.range(coord(0, 0, 0), |_| true, true).take(5).collect();
        assert_eq!(
            cells,
            vec![
                coord(0, 0, 0),
                coord(1, -1, 0),
                coord(-1, 1, 0),
                coord(2, -2, 0),
                coord(-2, 2, 0),
            ]
        );
    }

    #[test]
    fn test_range_bounds() {
        let line = HexLine::new(HexAxis::Z, 0);
        // Only x in [-1, 3] exists
        let exists = |c: CubeCoordinate| (-1..=3).contains(&c.x());
        let cells: Vec<_> = line.range(coord(0, 0, 0), exists, true).collect();
        assert_eq!(
            cells,
            vec![
                coord(0, 0, 0),
                coord(1, -1, 0),
                coord(-1, 1, 0),
                coord(2, -2, 0),
                coord(3, -3, 0),
            ]
        );

        // A gap stops a bounded walk, but not an unbounded one
        let gappy = |c: CubeCoordinate| c.x() != 1 && c.x() != -1;
        let bounded: Vec<_> = line.range(coord(0, 0, 0), gappy, true).collect();
        assert_eq!(bounded, vec![coord(0, 0, 0)]);
        let unbounded: Vec<_> =
            line.range(coord(0, 0, 0), gappy, false).take(3).collect();
        assert_eq!(
            unbounded,
            vec![coord(0, 0, 0), coord(2, -2, 0), coord(-2, 2, 0)]
        );
    }

    #[test]
    fn test_half_plane() {
        let high = HexHalfPlane::high(HexAxis::Y, -1);
        assert!(high.contains(coord(0, -1, 1)));
        assert!(high.contains(coord(0, 3, -3)));
        assert!(!high.contains(coord(0, -2, 2)));
        let low = HexHalfPlane::low(HexAxis::Y, -1);
        assert!(low.contains(coord(0, -1, 1)));
        assert!(!low.contains(coord(0, 3, -3)));
        assert_eq!(high.to_string(), "Y>=-1");
    }

    #[test]
    fn test_interpolated_line() {
        let layout =
            HexLayout::new(1.0, Orientation::Pointy, OffsetType::Odd).unwrap();
        let a = coord(0, 0, 0);
        let b = coord(3, -3, 0);
        let cells: Vec<_> = HexInterpolatedLine::range(a, b, &layout, |_| true).collect();
        assert_eq!(
            cells,
            vec![a, coord(1, -1, 0), coord(2, -2, 0), b]
        );

        // Every sample is within one step of the previous
        let b = coord(-2, 5, -3);
        let cells: Vec<_> = HexInterpolatedLine::range(a, b, &layout, |_| true).collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells.first(), Some(&a));
        assert_eq!(cells.last(), Some(&b));
        for pair in cells.windows(2) {
            assert!(pair[0].distance(pair[1]) <= 1);
        }

        let single: Vec<_> = HexInterpolatedLine::range(a, a, &layout, |_| true).collect();
        assert_eq!(single, vec![a]);

        let filtered: Vec<_> =
            HexInterpolatedLine::range(a, coord(3, -3, 0), &layout, |c| c.x() != 1)
                .collect();
        assert_eq!(filtered.len(), 3);
    }
}
