pub mod cell_grid;
pub mod tile_grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// a grid with no cells along either axis
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Size of the painted tile grid, `(2w+1) x (2h+1)`, or `None` if it overflows.
    pub fn tile_dims(&self) -> Option<Dimensions> {
        let width = self.width.checked_mul(2)?.checked_add(1)?;
        let height = self.height.checked_mul(2)?.checked_add(1)?;
        width.checked_mul(height)?;

        Some(Dimensions::new(width, height))
    }
}

/// Cardinal direction, discriminant doubles as the passage bit in a cell mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 1,
    South = 2,
    East = 4,
    West = 8,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[inline]
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Unit offset as (dx, dy). North points towards +y.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        -self
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Base layer of a painted maze.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TileKind {
    Wall,
    Path,
    Entrance,
    Exit,
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        self != TileKind::Wall
    }
}

impl From<TileKind> for [f32; 4] {
    fn from(kind: TileKind) -> Self {
        match kind {
            TileKind::Wall => [0.0, 0.0, 0.0, 1.0],
            TileKind::Path => [1.0, 1.0, 1.0, 1.0],
            TileKind::Entrance => [1.0, 0.0, 0.0, 1.0],
            TileKind::Exit => [1.0, 1.0, 0.0, 1.0],
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ObjectKind {
    Door,
    Chest,
    Key,
}

/// Decoration sitting on top of a tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Object {
    pub kind: ObjectKind,
    pub opened: bool,
}

impl Object {
    pub fn closed(kind: ObjectKind) -> Self {
        Self {
            kind,
            opened: false,
        }
    }
}

impl From<Object> for [f32; 4] {
    fn from(object: Object) -> Self {
        match (object.kind, object.opened) {
            (ObjectKind::Door, false) => [0.45, 0.25, 0.1, 1.0],
            (ObjectKind::Door, true) => [0.7, 0.5, 0.3, 1.0],
            (ObjectKind::Chest, false) => [0.8, 0.6, 0.0, 1.0],
            (ObjectKind::Chest, true) => [0.5, 0.4, 0.2, 1.0],
            (ObjectKind::Key, _) => [0.2, 0.6, 0.9, 1.0],
        }
    }
}

#[cfg(test)]
mod test_direction {
    use super::*;

    #[test]
    fn tile_dims_double_and_pad() {
        assert_eq!(
            Dimensions::new(10, 7).tile_dims(),
            Some(Dimensions::new(21, 15))
        );
        assert_eq!(Dimensions::new(0, 0).tile_dims(), Some(Dimensions::new(1, 1)));
    }

    #[test]
    fn tile_dims_overflow_is_none() {
        assert_eq!(Dimensions::new(usize::MAX, 1).tile_dims(), None);
        assert_eq!(Dimensions::new(usize::MAX / 2, 1).tile_dims(), None);
        assert_eq!(Dimensions::new(usize::MAX / 4, usize::MAX / 4).tile_dims(), None);
    }

    #[test]
    fn opposites_pair_up() {
        for dir in Direction::ALL.iter() {
            assert_eq!(-(-*dir), *dir);
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn bits_are_distinct() {
        let mask = Direction::ALL.iter().fold(0u8, |acc, dir| {
            assert_eq!(acc & dir.bit(), 0);
            acc | dir.bit()
        });
        assert_eq!(mask, 0b1111);
    }
}
