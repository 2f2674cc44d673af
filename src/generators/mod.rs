pub mod backtracker;

use crate::grids::cell_grid::CellGrid;

pub trait Generator {
    fn step_generation(&mut self);
    fn next_step(&mut self) -> &CellGrid;
    fn generate_maze(&mut self) -> &CellGrid;
    fn is_done(&self) -> bool;
}
