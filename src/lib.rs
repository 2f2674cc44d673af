//! Perfect maze generation by randomized depth first backtracking, plus a double resolution
//! tile painter and a couple of renderers for hosts to consume.

pub mod error;
pub mod generators;
pub mod grids;
pub mod model;
pub mod renderer;
pub mod shuffle;

pub use error::MazeError;
pub use generators::backtracker::RecursiveBacktracker;
pub use generators::Generator;
pub use grids::cell_grid::CellGrid;
pub use grids::tile_grid::{TileGrid, TilePainter};
pub use grids::{Dimensions, Direction};
pub use model::{MazeConfig, MazeModel};
pub use renderer::{AsciiRenderer, Renderer, VertexRenderer};
