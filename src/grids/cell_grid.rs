use crate::grids::{Dimensions, Direction};

/// Logical maze: one passage bitmask per cell, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    pub dims: Dimensions,

    /// zero means unvisited, otherwise the OR of the carved `Direction` bits
    pub cells: Vec<u8>,
}

impl CellGrid {
    pub fn with_dims(width: usize, height: usize) -> Self {
        let dims = Dimensions::new(width, height);
        Self {
            cells: vec![0; dims.cell_count()],
            dims,
        }
    }

    pub fn empty() -> Self {
        Self::with_dims(0, 0)
    }

    #[inline]
    fn index_of(&self, x: usize, y: usize) -> usize {
        (self.dims.width * y) + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.dims.width && y < self.dims.height
    }

    #[inline]
    pub fn get_cell(&self, x: usize, y: usize) -> u8 {
        self.cells[self.index_of(x, y)]
    }

    #[inline]
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        self.get_cell(x, y) != 0
    }

    #[inline]
    pub fn has_passage(&self, x: usize, y: usize, direction: Direction) -> bool {
        self.get_cell(x, y) & direction.bit() != 0
    }

    // returns coords of neighbor, None when it would fall off the grid
    pub fn neighbor_of(
        &self,
        coords: (usize, usize),
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let x = coords.0 as isize + dx;
        let y = coords.1 as isize + dy;

        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if self.in_bounds(x, y) {
            Some((x, y))
        } else {
            None
        }
    }

    /// Opens the passage in `direction` on both sides. Returns the neighbor's coords.
    pub fn carve_between(
        &mut self,
        coords: (usize, usize),
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let neighbor = self.neighbor_of(coords, direction)?;

        let from = self.index_of(coords.0, coords.1);
        let to = self.index_of(neighbor.0, neighbor.1);
        self.cells[from] |= direction.bit();
        self.cells[to] |= direction.opposite().bit();

        Some(neighbor)
    }

    /// Iterates the passages leaving a cell as (direction, neighbor).
    pub fn passages_of(
        &self,
        coords: (usize, usize),
    ) -> impl Iterator<Item = (Direction, (usize, usize))> + '_ {
        let mask = self.get_cell(coords.0, coords.1);
        Direction::ALL
            .iter()
            .copied()
            .filter(move |dir| mask & dir.bit() != 0)
            .filter_map(move |dir| self.neighbor_of(coords, dir).map(|n| (dir, n)))
    }

    /// Number of carved edges, counting each bidirectional passage once.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|mask| {
                // each edge is counted from its west or south end
                (mask & (Direction::East.bit() | Direction::North.bit())).count_ones() as usize
            })
            .sum()
    }

    /// Number of cells reachable from `start` through carved passages.
    pub fn reachable_from(&self, start: (usize, usize)) -> usize {
        if !self.in_bounds(start.0, start.1) {
            return 0;
        }

        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![start];
        seen[self.index_of(start.0, start.1)] = true;
        let mut count = 0;

        while let Some(cell) = stack.pop() {
            count += 1;
            for (_, neighbor) in self.passages_of(cell) {
                let index = self.index_of(neighbor.0, neighbor.1);
                if !seen[index] {
                    seen[index] = true;
                    stack.push(neighbor);
                }
            }
        }

        count
    }

    pub fn clear(&mut self) {
        self.cells = vec![0; self.cells.len()];
    }
}

#[cfg(test)]
mod test_grid {
    use super::*;

    #[test]
    fn it_works() {
        let mut grid = CellGrid::with_dims(4, 3);

        assert_eq!(grid.carve_between((0, 0), Direction::East), Some((1, 0)));
        assert_eq!(grid.carve_between((1, 0), Direction::North), Some((1, 1)));

        assert!(grid.has_passage(0, 0, Direction::East));
        assert!(grid.has_passage(1, 0, Direction::West));
        assert!(grid.has_passage(1, 0, Direction::North));
        assert!(grid.has_passage(1, 1, Direction::South));
        assert!(!grid.is_visited(3, 2));

        assert_eq!(grid.passage_count(), 2);
        assert_eq!(grid.reachable_from((0, 0)), 3);

        grid.clear();
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.cells.iter().all(|&mask| mask == 0));
    }

    #[test]
    fn carving_off_the_edge_is_refused() {
        let mut grid = CellGrid::with_dims(2, 2);

        assert_eq!(grid.carve_between((0, 0), Direction::West), None);
        assert_eq!(grid.carve_between((0, 0), Direction::South), None);
        assert_eq!(grid.carve_between((1, 1), Direction::East), None);
        assert_eq!(grid.carve_between((1, 1), Direction::North), None);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn empty_grid_has_nothing_reachable() {
        let grid = CellGrid::empty();
        assert!(grid.dims.is_degenerate());
        assert_eq!(grid.reachable_from((0, 0)), 0);
        assert_eq!(grid.passage_count(), 0);
    }
}
