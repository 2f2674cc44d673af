use crate::error::MazeError;
use crate::generators::backtracker::RecursiveBacktracker;
use crate::generators::Generator;
use crate::grids::cell_grid::CellGrid;
use crate::grids::tile_grid::{TileGrid, TilePainter};
use crate::grids::Dimensions;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Seed value meaning "draw a fresh one on the next generation".
pub const UNSET_SEED: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    /// non-positive requests a random seed, which is then stored here
    pub seed: i64,
    pub chests: usize,
    pub keys: usize,
    pub door: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: UNSET_SEED,
            chests: 3,
            keys: 0,
            door: true,
        }
    }
}

impl MazeConfig {
    pub fn dims(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Rejects sizes whose painted tile grid would not fit in `usize`.
    pub fn validate(&self) -> Result<(), MazeError> {
        match self.dims().tile_dims() {
            Some(_) => Ok(()),
            None => Err(MazeError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn painter(&self) -> TilePainter {
        TilePainter {
            chests: self.chests,
            keys: self.keys,
            door: self.door,
        }
    }
}

/// Owns the maze between generations: configuration, seed, carved grid and painted tiles.
///
/// A positive seed survives `generate` so that regenerating reproduces the same maze. Only
/// `clear` forgets it.
#[derive(Debug)]
pub struct MazeModel {
    pub config: MazeConfig,

    grid: Option<CellGrid>,
    tiles: Option<TileGrid>,
    // continues the generation stream so decorations are reproducible too
    rng: Option<StdRng>,
}

impl MazeModel {
    pub fn new(config: MazeConfig) -> Self {
        Self {
            config,
            grid: None,
            tiles: None,
            rng: None,
        }
    }

    /// Clears prior output, resolves the seed and carves a fresh maze.
    pub fn generate(&mut self) -> &CellGrid {
        self.grid = None;
        self.tiles = None;

        let seed = self.resolve_seed();
        log::info!(
            "generating {}x{} maze with seed {}",
            self.config.width,
            self.config.height,
            seed
        );

        let dims = match self.config.validate() {
            Ok(()) => self.config.dims(),
            Err(err) => {
                log::warn!("{}, carving an empty maze", err);
                Dimensions::new(0, 0)
            }
        };

        let rng = StdRng::seed_from_u64(seed as u64);
        let mut generator = RecursiveBacktracker::new(dims, rng);
        generator.generate_maze();
        let (grid, rng) = generator.into_parts();

        log::debug!("carved {} passages", grid.passage_count());
        self.rng = Some(rng);
        self.grid.get_or_insert(grid)
    }

    fn resolve_seed(&mut self) -> i64 {
        if self.config.seed < 1 {
            self.config.seed = thread_rng().gen_range(1, i64::from(i32::MAX) + 1);
            log::debug!("drew fresh seed {}", self.config.seed);
        }

        self.config.seed
    }

    /// Paints the last generated grid. Returns `None` if nothing has been generated.
    pub fn paint(&mut self, painter: &TilePainter) -> Option<&TileGrid> {
        let (grid, rng) = match (self.grid.as_ref(), self.rng.as_mut()) {
            (Some(grid), Some(rng)) => (grid, rng),
            _ => {
                log::warn!("paint requested before a maze was generated");
                return None;
            }
        };

        let tiles = painter.paint(grid, rng);
        self.tiles = Some(tiles);
        self.tiles.as_ref()
    }

    /// Drops the grid and any painted tiles and forgets the seed.
    pub fn clear(&mut self) {
        self.grid = None;
        self.tiles = None;
        self.rng = None;
        self.config.seed = UNSET_SEED;
    }

    pub fn grid(&self) -> Option<&CellGrid> {
        self.grid.as_ref()
    }

    pub fn tiles(&self) -> Option<&TileGrid> {
        self.tiles.as_ref()
    }

    pub fn tiles_mut(&mut self) -> Option<&mut TileGrid> {
        self.tiles.as_mut()
    }
}
