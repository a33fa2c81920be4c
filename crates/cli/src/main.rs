mod grid;

use crate::grid::Grid;
use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use physhex::{
    cells_to_svg, field_of_view, find_path, flood, ring, spiral, timed,
    CellLayer, Color3, CubeCoordinate, GridConfig, HexAxis, HexDirection,
    HexInterpolatedLine, HexQuadrangle, HexRegularHexagon, HexShape,
    HexTriangle, QuadrangleType, Rotation, SpiralDirection, TriangleType,
};
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for running geometry and traversal queries on a hexagon grid.
///
/// Cells are given as cube coordinates in the form `x,y,z`, e.g. `2,-1,-1`.
#[derive(Debug, StructOpt)]
#[structopt(name = "physhex")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. If not given, a 20x20 pointy grid is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// A cell that can't be walked over or seen through. Can be given
    /// multiple times
    #[structopt(
        short,
        long,
        number_of_values = 1,
        allow_hyphen_values = true
    )]
    blocked: Vec<CubeCoordinate>,

    /// The format to print results in. Supported formats:
    ///
    /// text - One cell per line, with its offset coordinate
    ///
    /// json - An array of `[x, y, z]` triples
    ///
    /// svg - 2D rendering of the grid with the results highlighted
    #[structopt(short = "f", long, default_value = "text")]
    format: OutputFormat,

    /// Write results to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    query: Query,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    Text,
    Json,
    Svg,
}

#[derive(Debug, StructOpt)]
enum Query {
    /// Cells exactly `radius` steps from a center cell
    Ring {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinate,
        radius: u32,
        #[structopt(flatten)]
        walk: WalkOptions,
    },
    /// Cells within `radius` steps of a center cell, ring by ring
    Spiral {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinate,
        radius: u32,
        /// Start from the outermost ring and end at the center
        #[structopt(long)]
        inwards: bool,
        #[structopt(flatten)]
        walk: WalkOptions,
    },
    /// Cells reachable from a start cell within some number of moves
    Flood {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinate,
        movement: u32,
    },
    /// Cells within `radius` of a center cell that it can see
    Fov {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinate,
        radius: u32,
    },
    /// Shortest path between two cells, excluding the start
    Path {
        #[structopt(allow_hyphen_values = true)]
        start: CubeCoordinate,
        #[structopt(allow_hyphen_values = true)]
        end: CubeCoordinate,
    },
    /// Straight line between two cells
    Line {
        #[structopt(allow_hyphen_values = true)]
        start: CubeCoordinate,
        #[structopt(allow_hyphen_values = true)]
        end: CubeCoordinate,
    },
    /// Regular hexagon around a center cell
    Hexagon {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinate,
        radius: u32,
    },
    /// Equilateral triangle with a corner at `origin`
    Triangle {
        #[structopt(allow_hyphen_values = true)]
        origin: CubeCoordinate,
        length: u32,
        /// up or down
        #[structopt(long = "type", default_value = "up")]
        triangle_type: TriangleType,
        /// The frame to lay the triangle out in: x, y or z
        #[structopt(long, default_value = "z")]
        axis: HexAxis,
        /// Grow the shape downwards from the origin instead of upwards
        #[structopt(long)]
        downwards: bool,
    },
    /// Trapezoid or parallelogram with a corner at `origin`
    Quadrangle {
        #[structopt(allow_hyphen_values = true)]
        origin: CubeCoordinate,
        length: u32,
        /// up, down, up_right, up_left, down_right, down_left, forward,
        /// backward or rhomboid
        #[structopt(long = "type", default_value = "up")]
        quadrangle_type: QuadrangleType,
        /// Grow the shape downwards from the origin instead of upwards
        #[structopt(long)]
        downwards: bool,
    },
    /// Fold a cell back onto the grid. Requires `wrap` in the grid config
    Wrap {
        #[structopt(allow_hyphen_values = true)]
        cell: CubeCoordinate,
    },
}

/// Options for queries that walk around a center cell
#[derive(Debug, StructOpt)]
struct WalkOptions {
    /// Index of the direction to start walking from, 0-5 clockwise
    #[structopt(long, default_value = "0")]
    start: usize,
    /// Walk counterclockwise instead of clockwise
    #[structopt(long)]
    counter_clockwise: bool,
}

impl WalkOptions {
    fn start_direction(&self, grid: &Grid) -> anyhow::Result<HexDirection> {
        if self.start >= 6 {
            bail!("start direction must be in 0-5, got {}", self.start);
        }
        Ok(HexDirection::new(grid.layout().orientation, self.start))
    }

    fn rotation(&self) -> Rotation {
        if self.counter_clockwise {
            Rotation::CounterClockwise
        } else {
            Rotation::Clockwise
        }
    }
}

impl Query {
    /// Run the query against the grid. `None` means there's no result at
    /// all, which is different from an empty result (e.g. no path exists).
    fn run(&self, grid: &Grid) -> anyhow::Result<Option<Vec<CubeCoordinate>>> {
        let exists = |cell| grid.exists(cell);
        let cells = match self {
            Self::Ring {
                center,
                radius,
                walk,
            } => ring(
                *center,
                *radius,
                walk.start_direction(grid)?,
                walk.rotation(),
                exists,
            )
            .collect(),
            Self::Spiral {
                center,
                radius,
                inwards,
                walk,
            } => {
                let direction = if *inwards {
                    SpiralDirection::Inwards
                } else {
                    SpiralDirection::Outwards
                };
                spiral(
                    *center,
                    *radius,
                    direction,
                    walk.start_direction(grid)?,
                    walk.rotation(),
                    exists,
                )
            }
            Self::Flood { center, movement } => {
                flood(*center, *movement, exists).into_iter().collect()
            }
            Self::Fov { center, radius } => {
                field_of_view(*center, *radius, grid.layout(), exists)
            }
            Self::Path { start, end } => {
                return Ok(find_path(*start, *end, exists));
            }
            Self::Line { start, end } => {
                HexInterpolatedLine::range(*start, *end, grid.layout(), |_| true)
                    .collect()
            }
            Self::Hexagon { center, radius } => {
                HexRegularHexagon::new(*center, *radius)?.range().collect()
            }
            Self::Triangle {
                origin,
                length,
                triangle_type,
                axis,
                downwards,
            } => HexTriangle::spawn(
                *origin,
                *length,
                *triangle_type,
                grid.layout().orientation,
                *axis,
                !downwards,
            )?
            .range()
            .collect(),
            Self::Quadrangle {
                origin,
                length,
                quadrangle_type,
                downwards,
            } => HexQuadrangle::spawn(
                *origin,
                *length,
                *quadrangle_type,
                grid.layout().orientation,
                !downwards,
            )?
            .range()
            .collect(),
            Self::Wrap { cell } => {
                let wrap_around = grid.wrap_around().ok_or_else(|| {
                    anyhow!("wrap query requires `wrap = true` in the grid config")
                })?;
                vec![wrap_around.transform_hex(*cell)]
            }
        };
        Ok(Some(cells))
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Serialize query results in the given format
fn generate_bytes(
    output_format: OutputFormat,
    grid: &Grid,
    cells: Option<&[CubeCoordinate]>,
) -> anyhow::Result<Vec<u8>> {
    let bytes = match output_format {
        OutputFormat::Text => match cells {
            Some(cells) => cells
                .iter()
                .map(|cell| {
                    format!("{} {}\n", cell, grid.layout().to_offset(*cell))
                })
                .collect::<String>()
                .into_bytes(),
            None => b"No result\n".to_vec(),
        },
        OutputFormat::Json => serde_json::to_vec(&cells)
            .context("error serializing results")?,
        OutputFormat::Svg => {
            let layers = [
                CellLayer::new("grid", Color3::GRID, grid.open_cells()),
                CellLayer::new("blocked", Color3::BLOCKED, grid.blocked_cells()),
                CellLayer::new(
                    "results",
                    Color3::HIGHLIGHT,
                    cells.unwrap_or_default().iter().copied(),
                ),
            ];
            cells_to_svg(grid.layout(), &layers).to_string().into_bytes()
        }
    };
    Ok(bytes)
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .with_context(|| {
                    format!("error opening output file {:?}", path)
                })?;
            file.write_all(bytes)
                .with_context(|| format!("error writing to file {:?}", path))?;
            info!("Wrote output to {:?}", path);
        }
        None => io::stdout()
            .write_all(bytes)
            .context("error writing to stdout")?,
    }
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    let grid = Grid::new(&config, opt.blocked.iter().copied())?;

    let cells = timed!(
        format!("Running {:?}", opt.query),
        log::Level::Info,
        opt.query.run(&grid)?
    );
    if let Some(cells) = &cells {
        info!("Query produced {} cells", cells.len());
    }

    let bytes = generate_bytes(opt.format, &grid, cells.as_deref())?;
    write_output(opt.output.as_deref(), &bytes)
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
