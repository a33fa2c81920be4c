use crate::{
    geometry::HexInterpolatedLine,
    hex::{CubeCoordinate, HexDirection, HexLayout, Rotation},
    traversal::{spiral, SpiralDirection},
};

/// Can `to` be seen from `from`? Both ends, and every cell on the straight
/// line between them, have to pass `exists`. A cell can always see itself.
///
/// Pass `|_| true` if nothing blocks sight.
pub fn visible<F>(
    from: CubeCoordinate,
    to: CubeCoordinate,
    layout: &HexLayout,
    exists: F,
) -> bool
where
    F: Fn(CubeCoordinate) -> bool,
{
    if from == to {
        return true;
    }
    if !exists(from) || !exists(to) {
        return false;
    }
    HexInterpolatedLine::range(from, to, layout, |_| true).all(exists)
}

/// Get every cell within `radius` of `center` that's visible from `center`,
/// in outward spiral order
pub fn field_of_view<F>(
    center: CubeCoordinate,
    radius: u32,
    layout: &HexLayout,
    exists: F,
) -> Vec<CubeCoordinate>
where
    F: Fn(CubeCoordinate) -> bool,
{
    let start_direction = HexDirection::new(layout.orientation, 0);
    spiral(
        center,
        radius,
        SpiralDirection::Outwards,
        start_direction,
        Rotation::Clockwise,
        &exists,
    )
    .into_iter()
    .filter(|cell| visible(center, *cell, layout, &exists))
    .collect()
}
