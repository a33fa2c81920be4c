//! 2D rendering of cells as SVG. Each cell is drawn as a hexagon at its world
//! position. World space is y-up while SVG is y-down, so everything gets
//! flipped vertically on the way out.

use crate::hex::{CubeCoordinate, HexLayout};
use derive_more::Display;
use nalgebra::Point2;
use svg::{
    node::{
        element::{Group, Polygon},
        Comment,
    },
    Document,
};

/// An RGB color
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
#[display(fmt = "#{:02x}{:02x}{:02x}", red, green, blue)]
pub struct Color3 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color3 {
    pub const GRID: Self = Self::new(224, 224, 224);
    pub const HIGHLIGHT: Self = Self::new(72, 192, 240);
    pub const BLOCKED: Self = Self::new(64, 64, 64);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Format as `#rrggbb`
    pub fn to_html(self) -> String {
        self.to_string()
    }
}

/// A group of cells drawn in the same color. Later layers are drawn on top of
/// earlier ones.
#[derive(Clone, Debug)]
pub struct CellLayer {
    /// Shows up as a comment in the output, for readability
    pub label: String,
    pub color: Color3,
    pub cells: Vec<CubeCoordinate>,
}

impl CellLayer {
    pub fn new(
        label: impl Into<String>,
        color: Color3,
        cells: impl IntoIterator<Item = CubeCoordinate>,
    ) -> Self {
        Self {
            label: label.into(),
            color,
            cells: cells.into_iter().collect(),
        }
    }
}

/// Render layers of cells into an SVG document. The view box is sized to fit
/// every cell in every layer.
pub fn cells_to_svg(layout: &HexLayout, layers: &[CellLayer]) -> Document {
    let outer_radius = layout.metrics.outer_radius();
    let positions = layers
        .iter()
        .flat_map(|layer| layer.cells.iter())
        .map(|cell| to_screen(layout.to_position(*cell)));
    let (min, max) = positions.fold(
        (
            Point2::new(f64::INFINITY, f64::INFINITY),
            Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(min, max), pos| {
            (
                Point2::new(min.x.min(pos.x), min.y.min(pos.y)),
                Point2::new(max.x.max(pos.x), max.y.max(pos.y)),
            )
        },
    );
    let view_box = if min.x.is_finite() {
        (
            min.x - outer_radius,
            min.y - outer_radius,
            max.x - min.x + outer_radius * 2.0,
            max.y - min.y + outer_radius * 2.0,
        )
    } else {
        (-outer_radius, -outer_radius, outer_radius * 2.0, outer_radius * 2.0)
    };

    // Same for every cell, so only compute it once
    let points: Vec<(f64, f64)> = layout
        .metrics
        .corners(layout.orientation)
        .iter()
        .map(|corner| (corner.x, -corner.y))
        .collect();

    let mut document = Document::new()
        .set("viewBox", view_box)
        .set("shape-rendering", "crispEdges");
    for layer in layers {
        let mut group = Group::new()
            .set("fill", layer.color.to_html())
            .set("stroke", "#000000")
            .set("stroke-width", outer_radius * 0.05)
            .add(Comment::new(layer.label.as_str()));
        for cell in &layer.cells {
            group = group.add(draw_cell(layout, *cell, &points));
        }
        document = document.add(group);
    }
    document
}

/// Generate an SVG polygon for a single cell
fn draw_cell(
    layout: &HexLayout,
    cell: CubeCoordinate,
    points: &[(f64, f64)],
) -> Polygon {
    let pos = to_screen(layout.to_position(cell));
    Polygon::new()
        .set("transform", format!("translate({} {})", pos.x, pos.y))
        .set("points", points.to_vec())
}

/// Flip from y-up world space to y-down screen space
fn to_screen(position: Point2<f64>) -> Point2<f64> {
    Point2::new(position.x, -position.y)
}
