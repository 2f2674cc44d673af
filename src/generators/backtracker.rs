use crate::generators::Generator;
use crate::grids::cell_grid::CellGrid;
use crate::grids::{Dimensions, Direction};
use crate::shuffle::shuffle;
use rand::Rng;

/// One level of what would be the recursive descent: the cell, its shuffled directions, and how
/// many of those have been tried already.
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: (usize, usize),
    directions: [Direction; 4],
    next: usize,
}

/// Randomized depth first carver, run on an explicit stack.
///
/// Produces a perfect maze (a spanning tree over every cell) starting from (0, 0). Each step
/// either carves one passage into an unvisited neighbor or backtracks one cell.
pub struct RecursiveBacktracker<R: Rng> {
    grid: CellGrid,
    stack: Vec<Frame>,
    rng: R,
    pub done: bool,
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn new(dims: Dimensions, rng: R) -> Self {
        let mut generator = Self {
            grid: CellGrid::with_dims(dims.width, dims.height),
            stack: Vec::new(),
            rng,
            done: false,
        };

        if dims.is_degenerate() {
            log::warn!(
                "degenerate maze dimensions {}x{}, nothing to carve",
                dims.width,
                dims.height
            );
            generator.done = true;
        } else {
            generator.enter((0, 0));
        }

        generator
    }

    fn enter(&mut self, cell: (usize, usize)) {
        let mut directions = Direction::ALL;
        shuffle(&mut directions, &mut self.rng);
        self.stack.push(Frame {
            cell,
            directions,
            next: 0,
        });
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Hands back the carved grid and the random source, which continues where carving left off.
    pub fn into_parts(self) -> (CellGrid, R) {
        (self.grid, self.rng)
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self) {
        // loop until a passage is carved or a frame is exhausted
        loop {
            let frame = match self.stack.last_mut() {
                Some(frame) => frame,
                None => {
                    self.done = true;
                    return;
                }
            };

            if frame.next >= frame.directions.len() {
                let finished = frame.cell;
                self.stack.pop();
                log::trace!("backtrack from {:?}", finished);
                if self.stack.is_empty() {
                    self.done = true;
                }
                return;
            }

            let cell = frame.cell;
            let direction = frame.directions[frame.next];
            frame.next += 1;

            let neighbor = match self.grid.neighbor_of(cell, direction) {
                Some(neighbor) if !self.grid.is_visited(neighbor.0, neighbor.1) => neighbor,
                _ => continue,
            };

            self.grid.carve_between(cell, direction);
            log::trace!("carve {:?} {:?} -> {:?}", cell, direction, neighbor);
            self.enter(neighbor);
            return;
        }
    }

    fn next_step(&mut self) -> &CellGrid {
        self.step_generation();
        &self.grid
    }

    fn generate_maze(&mut self) -> &CellGrid {
        while !self.done {
            self.step_generation();
        }

        &self.grid
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
