use anyhow::Context;
use log::{debug, warn};
use physhex::{
    CoordinateSet, CubeCoordinate, GridConfig, HexLayout, HexWrapAround,
    OffsetCoordinate,
};

/// A rectangular grid of cells, `width` columns by `height` rows in offset
/// coordinates, with some of them blocked off. Queries can only walk over,
/// and see through, cells that are on the grid and not blocked.
#[derive(Clone, Debug)]
pub struct Grid {
    layout: HexLayout,
    wrap_around: Option<HexWrapAround>,
    cells: CoordinateSet,
    blocked: CoordinateSet,
}

impl Grid {
    pub fn new(
        config: &GridConfig,
        blocked: impl IntoIterator<Item = CubeCoordinate>,
    ) -> anyhow::Result<Self> {
        let layout = config.layout().context("invalid grid config")?;
        let wrap_around = config.wrap_around().context("invalid grid config")?;

        let cells: CoordinateSet = (0..config.height as i32)
            .flat_map(|row| {
                (0..config.width as i32)
                    .map(move |col| OffsetCoordinate::new(col, row))
            })
            .map(|offset| layout.from_offset(offset))
            .collect();
        let blocked: CoordinateSet = blocked.into_iter().collect();
        for cell in &blocked {
            if !cells.contains(cell) {
                warn!("Blocked cell {} is not on the grid", cell);
            }
        }
        debug!(
            "Built {}x{} grid with {} blocked cells",
            config.width,
            config.height,
            blocked.len()
        );

        Ok(Self {
            layout,
            wrap_around,
            cells,
            blocked,
        })
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn wrap_around(&self) -> Option<&HexWrapAround> {
        self.wrap_around.as_ref()
    }

    /// Is the cell on the grid and open?
    pub fn exists(&self, cell: CubeCoordinate) -> bool {
        self.cells.contains(&cell) && !self.blocked.contains(&cell)
    }

    /// Every open cell
    pub fn open_cells(&self) -> impl Iterator<Item = CubeCoordinate> + '_ {
        self.cells
            .iter()
            .copied()
            .filter(move |cell| !self.blocked.contains(cell))
    }

    /// Every blocked cell that's on the grid
    pub fn blocked_cells(&self) -> impl Iterator<Item = CubeCoordinate> + '_ {
        self.blocked
            .iter()
            .copied()
            .filter(move |cell| self.cells.contains(cell))
    }
}
