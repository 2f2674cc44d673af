use crate::error::MazeError;
use crate::grids::cell_grid::CellGrid;
use crate::grids::{Dimensions, Object, ObjectKind, TileKind};
use rand::Rng;

/// Physical maze at double resolution: cell (x, y) lives on tile (2x+1, 2y+1), the tiles in
/// between are walls or the opened passages.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    pub dims: Dimensions,

    pub tiles: Vec<TileKind>,
    pub objects: Vec<Option<Object>>,

    pub entrance: Option<(usize, usize)>,
    pub exit: Option<(usize, usize)>,
}

impl TileGrid {
    pub fn with_dims(width: usize, height: usize) -> Self {
        let dims = Dimensions::new(width, height);
        Self {
            tiles: vec![TileKind::Wall; dims.cell_count()],
            objects: vec![None; dims.cell_count()],
            dims,
            entrance: None,
            exit: None,
        }
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        (self.dims.width * y) + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, MazeError> {
        if x < self.dims.width && y < self.dims.height {
            Ok(self.index_of(x, y))
        } else {
            Err(MazeError::TileOutOfBounds {
                x,
                y,
                width: self.dims.width,
                height: self.dims.height,
            })
        }
    }

    #[inline]
    pub fn get_tile(&self, x: usize, y: usize) -> TileKind {
        debug_assert!(x < self.dims.width && y < self.dims.height);
        self.tiles[self.index_of(x, y)]
    }

    #[inline]
    pub fn get_object(&self, x: usize, y: usize) -> Option<Object> {
        debug_assert!(x < self.dims.width && y < self.dims.height);
        self.objects[self.index_of(x, y)]
    }

    /// Replaces a base tile, returning the previous one.
    pub fn set_tile(&mut self, x: usize, y: usize, kind: TileKind) -> Result<TileKind, MazeError> {
        let index = self.checked_index(x, y)?;
        let prev_kind = self.tiles[index];
        self.tiles[index] = kind;

        Ok(prev_kind)
    }

    pub fn place_object(
        &mut self,
        x: usize,
        y: usize,
        object: Object,
    ) -> Result<Option<Object>, MazeError> {
        let index = self.checked_index(x, y)?;
        Ok(self.objects[index].replace(object))
    }

    /// Removes whatever object sits on the tile.
    pub fn clear_tile(&mut self, x: usize, y: usize) -> Result<Option<Object>, MazeError> {
        let index = self.checked_index(x, y)?;
        Ok(self.objects[index].take())
    }

    /// Switches the object on the tile to its opened state.
    pub fn open_object(&mut self, x: usize, y: usize) -> Result<Object, MazeError> {
        let index = self.checked_index(x, y)?;
        match self.objects[index].as_mut() {
            Some(object) => {
                object.opened = true;
                Ok(*object)
            }
            None => Err(MazeError::NoObject { x, y }),
        }
    }

    pub fn count_tiles(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    pub fn count_objects(&self, kind: ObjectKind) -> usize {
        self.objects
            .iter()
            .flatten()
            .filter(|object| object.kind == kind)
            .count()
    }
}

/// Turns a carved `CellGrid` into a decorated `TileGrid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePainter {
    pub chests: usize,
    pub keys: usize,
    pub door: bool,
}

impl Default for TilePainter {
    fn default() -> Self {
        Self {
            chests: 3,
            keys: 0,
            door: true,
        }
    }
}

impl TilePainter {
    pub fn paint<R: Rng>(&self, grid: &CellGrid, rng: &mut R) -> TileGrid {
        if grid.dims.is_degenerate() {
            log::warn!("nothing to paint for an empty maze");
            return TileGrid::with_dims(0, 0);
        }

        let tile_dims = match grid.dims.tile_dims() {
            Some(dims) => dims,
            None => {
                log::warn!(
                    "{}x{} maze is too large to paint",
                    grid.dims.width,
                    grid.dims.height
                );
                return TileGrid::with_dims(0, 0);
            }
        };

        let width = grid.dims.width;
        let height = grid.dims.height;
        let mut tiles = TileGrid::with_dims(tile_dims.width, tile_dims.height);

        // cell centers, candidates for decorations
        let mut path_tiles = Vec::with_capacity(grid.dims.cell_count());

        for y in 0..height {
            for x in 0..width {
                let base = (x * 2 + 1, y * 2 + 1);
                let index = tiles.index_of(base.0, base.1);
                tiles.tiles[index] = TileKind::Path;
                path_tiles.push(base);

                for (direction, _) in grid.passages_of((x, y)) {
                    let (dx, dy) = direction.offset();
                    let mx = (base.0 as isize + dx) as usize;
                    let my = (base.1 as isize + dy) as usize;
                    let index = tiles.index_of(mx, my);
                    tiles.tiles[index] = TileKind::Path;
                }
            }
        }

        let entrance = (1, height * 2);
        let exit = (width * 2 - 1, 0);
        let index = tiles.index_of(entrance.0, entrance.1);
        tiles.tiles[index] = TileKind::Entrance;
        let index = tiles.index_of(exit.0, exit.1);
        tiles.tiles[index] = TileKind::Exit;
        tiles.entrance = Some(entrance);
        tiles.exit = Some(exit);

        if self.door {
            let index = tiles.index_of(exit.0, exit.1);
            tiles.objects[index] = Some(Object::closed(ObjectKind::Door));
        }

        self.scatter(&mut tiles, &mut path_tiles, ObjectKind::Chest, self.chests, rng);
        self.scatter(&mut tiles, &mut path_tiles, ObjectKind::Key, self.keys, rng);

        log::debug!(
            "painted {}x{} tiles, {} chests, {} keys",
            tiles.dims.width,
            tiles.dims.height,
            tiles.count_objects(ObjectKind::Chest),
            tiles.count_objects(ObjectKind::Key)
        );

        tiles
    }

    // sampling without replacement, candidates are consumed
    fn scatter<R: Rng>(
        &self,
        tiles: &mut TileGrid,
        candidates: &mut Vec<(usize, usize)>,
        kind: ObjectKind,
        count: usize,
        rng: &mut R,
    ) {
        if count == 0 {
            return;
        }

        if candidates.len() <= count {
            log::debug!(
                "skipping {} {:?} objects, only {} free path tiles",
                count,
                kind,
                candidates.len()
            );
            return;
        }

        for _ in 0..count {
            let pick = rng.gen_range(0, candidates.len());
            let (x, y) = candidates.remove(pick);
            let index = tiles.index_of(x, y);
            tiles.objects[index] = Some(Object::closed(kind));
        }
    }
}
