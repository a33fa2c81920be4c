//! Horizontal and vertical wrap-around for finite offset grids, e.g. a world
//! map where walking off the east edge puts you on the west edge.

use crate::{
    error::{HexError, HexResult},
    hex::{CubeCoordinate, HexLayout, HexMetrics, OffsetCoordinate, OffsetType, Orientation},
};
use log::trace;
use nalgebra::Point2;

/// Folds cells and world positions back into a `width` x `height` rectangle
/// of offset coordinates, `[0, width) x [0, height)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexWrapAround {
    width: u32,
    height: u32,
    offset_type: OffsetType,
    orientation: Orientation,
}

impl HexWrapAround {
    /// Both dimensions must fit in an `i32`, since offset coordinates are
    /// `i32`s. The dimension along which lines are staggered (height for
    /// pointy, width for flat) must be even, otherwise a shifted line would
    /// wrap onto an unshifted one.
    pub fn new(
        width: u32,
        height: u32,
        offset_type: OffsetType,
        orientation: Orientation,
    ) -> HexResult<Self> {
        let staggered = match orientation {
            Orientation::Pointy => height,
            Orientation::Flat => width,
        };
        let fits = |value: u32| (1..=i32::MAX as u32).contains(&value);
        if !fits(width) || !fits(height) || staggered % 2 != 0 {
            return Err(HexError::InvalidWrapConfiguration {
                width,
                height,
                orientation,
            });
        }
        Ok(Self {
            width,
            height,
            offset_type,
            orientation,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Map a cell to its equivalent inside the wrapped rectangle. Cells that
    /// are already inside come back unchanged.
    pub fn transform_hex(&self, coord: CubeCoordinate) -> CubeCoordinate {
        let offset = self.offset_type.from_cube(self.orientation, coord);
        let wrapped = OffsetCoordinate::new(
            offset.col.rem_euclid(self.width as i32),
            offset.row.rem_euclid(self.height as i32),
        );
        self.offset_type.to_cube(self.orientation, wrapped)
    }

    /// Map a world position to its equivalent inside the wrapped rectangle,
    /// keeping its position relative to the center of its cell
    pub fn transform_position(
        &self,
        position: Point2<f64>,
        metrics: HexMetrics,
    ) -> Point2<f64> {
        let layout = HexLayout {
            metrics,
            orientation: self.orientation,
            offset_type: self.offset_type,
        };
        let coord = layout.from_position(position);
        let wrapped = self.transform_hex(coord);
        if wrapped == coord {
            return position;
        }
        trace!("Wrapped {} to {}", coord, wrapped);
        layout.to_position(wrapped) + (position - layout.to_position(coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::Vector2;

    #[test]
    fn test_new() {
        assert!(HexWrapAround::new(5, 4, OffsetType::Odd, Orientation::Pointy).is_ok());
        assert!(HexWrapAround::new(4, 5, OffsetType::Odd, Orientation::Flat).is_ok());
        assert!(matches!(
            HexWrapAround::new(4, 5, OffsetType::Odd, Orientation::Pointy),
            Err(HexError::InvalidWrapConfiguration { width: 4, height: 5, .. })
        ));
        assert!(matches!(
            HexWrapAround::new(5, 4, OffsetType::Even, Orientation::Flat),
            Err(HexError::InvalidWrapConfiguration { .. })
        ));
        assert!(HexWrapAround::new(0, 4, OffsetType::Odd, Orientation::Pointy).is_err());
        // Too big for offset coordinates
        let too_big = i32::MAX as u32 + 1;
        assert!(matches!(
            HexWrapAround::new(too_big, 4, OffsetType::Odd, Orientation::Pointy),
            Err(HexError::InvalidWrapConfiguration { .. })
        ));
        assert!(
            HexWrapAround::new(5, u32::MAX - 1, OffsetType::Odd, Orientation::Pointy)
                .is_err()
        );
        let widest =
            HexWrapAround::new(i32::MAX as u32, 4, OffsetType::Odd, Orientation::Pointy)
                .unwrap();
        let wrapped = widest.transform_hex(CubeCoordinate::from_xy(-3, 0));
        assert_eq!(
            OffsetType::Odd.from_cube(Orientation::Pointy, wrapped),
            OffsetCoordinate::new(i32::MAX - 2, 3)
        );
    }

    #[test]
    fn test_transform_hex() {
        let wrap =
            HexWrapAround::new(10, 6, OffsetType::Odd, Orientation::Pointy).unwrap();
        let to_cube = |col, row| {
            OffsetType::Odd.to_cube(Orientation::Pointy, OffsetCoordinate::new(col, row))
        };

        // Inside stays inside
        assert_eq!(wrap.transform_hex(to_cube(3, 2)), to_cube(3, 2));
        assert_eq!(wrap.transform_hex(to_cube(-1, 0)), to_cube(9, 0));
        assert_eq!(wrap.transform_hex(to_cube(10, 5)), to_cube(0, 5));
        assert_eq!(wrap.transform_hex(to_cube(4, -1)), to_cube(4, 5));
        assert_eq!(wrap.transform_hex(to_cube(-21, 13)), to_cube(9, 1));
    }

    #[test]
    fn test_transform_position() {
        let metrics = HexMetrics::new(1.0).unwrap();
        let wrap =
            HexWrapAround::new(4, 4, OffsetType::Even, Orientation::Flat).unwrap();
        let layout = HexLayout {
            metrics,
            orientation: Orientation::Flat,
            offset_type: OffsetType::Even,
        };
        let inside = layout.from_offset(OffsetCoordinate::new(1, 1));
        let outside = layout.from_offset(OffsetCoordinate::new(5, 1));
        let nudge = Vector2::new(0.2, -0.3);

        let position = layout.to_position(inside) + nudge;
        assert_eq!(wrap.transform_position(position, metrics), position);

        let wrapped =
            wrap.transform_position(layout.to_position(outside) + nudge, metrics);
        assert_approx_eq!(wrapped.x, position.x);
        assert_approx_eq!(wrapped.y, position.y);
    }
}
