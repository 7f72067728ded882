//! Falling-sand simulation engine for a terminal powder toy.
//!
//! The crate owns the grid, the element rules and the tick loop; the
//! renderer, input handling and outer frame timing live in the host.
//! A host drives the engine with [`Grid::place`] and [`Grid::tick`] and
//! reads cells back with [`Grid::get`] (or [`Grid::cells`] for a whole
//! frame).

mod api;
mod brush;
pub mod cell;
mod elements;
mod explosion;
mod rng;

pub use cell::{Cell, Element};

use log::debug;
use rng::Dice;

/// The simulation world: a dense width×height matrix of cells indexed
/// (x, y) with y = 0 at the top, plus the engine's random stream.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    dice: Dice,
}

impl Grid {
    /// Create a grid of empty cells with a random seed.
    pub fn new(width: usize, height: usize) -> Self {
        Grid::build(width, height, Dice::from_entropy())
    }

    /// Create a grid of empty cells with a fixed seed. Two grids built
    /// with the same seed and driven identically stay identical.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Grid::build(width, height, Dice::seeded(seed))
    }

    fn build(width: usize, height: usize, dice: Dice) -> Self {
        debug!("allocating {width}x{height} grid");
        Grid {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
            dice,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The whole cell buffer in row-major order, for renderers.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    pub(crate) fn idx(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Read one cell. Out of bounds is `None`, with no side effect.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.idx(x, y)])
        } else {
            None
        }
    }

    /// Overwrite one cell. Out of bounds is a no-op.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            let i = self.idx(x, y);
            self.cells[i] = cell;
        }
    }

    /// Reallocate for a new size, resetting every cell to empty.
    pub fn resize(&mut self, width: usize, height: usize) {
        debug!("resizing grid to {width}x{height}");
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::empty(); width * height];
    }

    /// Reset every cell to empty, keeping the size and the random stream.
    pub fn clear(&mut self) {
        debug!("clearing grid");
        self.cells.fill(Cell::empty());
    }

    /// Advance the simulation one tick.
    ///
    /// One bottom-up, left-to-right sweep over the grid. Each cell is
    /// visited at most once: a fresh mask tracks cells that were already
    /// processed this tick, and a rule that moves its element claims the
    /// destination in the mask so it is not processed again. Lower rows
    /// run first, so material that just fell is settled before the rows
    /// above it are visited.
    pub fn tick(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let mut updated = vec![false; self.width * self.height];
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                let i = self.idx(x, y);
                if updated[i] {
                    continue;
                }
                updated[i] = true;
                let kind = self.cells[i].kind;
                if kind == Element::Empty || kind == Element::Wall {
                    continue;
                }
                let mut api = api::RuleApi::new(self, &mut updated, x, y);
                elements::update_cell(kind, &mut api);
            }
        }
    }
}
