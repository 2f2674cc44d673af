use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("tile ({x}, {y}) is outside the {width}x{height} tile grid")]
    TileOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("no object at tile ({x}, {y})")]
    NoObject { x: usize, y: usize },

    #[error("a {width}x{height} maze is too large to paint")]
    DimensionsTooLarge { width: usize, height: usize },
}
