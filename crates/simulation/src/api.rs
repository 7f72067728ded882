//! The cursor a rule sees while its cell is being updated.
//!
//! All reads and writes are relative to the cell under the cursor.
//! Moving is always a swap: the destination is claimed in the tick's
//! updated mask so it is not processed a second time, and the cursor
//! follows the element so the rest of the rule sees the neighborhood
//! around its new position.

use crate::cell::{Cell, Element};
use crate::Grid;

pub(crate) struct RuleApi<'a> {
    grid: &'a mut Grid,
    updated: &'a mut [bool],
    x: i32,
    y: i32,
}

impl<'a> RuleApi<'a> {
    pub(crate) fn new(grid: &'a mut Grid, updated: &'a mut [bool], x: i32, y: i32) -> Self {
        RuleApi { grid, updated, x, y }
    }

    /// The cell under the cursor.
    pub(crate) fn cell(&self) -> Cell {
        self.get(0, 0)
    }

    /// Read at a relative offset. Out of bounds reads as wall, so rules
    /// treat the border as solid ground.
    pub(crate) fn get(&self, dx: i32, dy: i32) -> Cell {
        let (nx, ny) = (self.x + dx, self.y + dy);
        if self.grid.in_bounds(nx, ny) {
            self.grid.cells[self.grid.idx(nx, ny)]
        } else {
            Cell::new(Element::Wall)
        }
    }

    /// Write at a relative offset. Out of bounds is a no-op.
    pub(crate) fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        let (nx, ny) = (self.x + dx, self.y + dy);
        if self.grid.in_bounds(nx, ny) {
            let i = self.grid.idx(nx, ny);
            self.grid.cells[i] = cell;
        }
    }

    /// Transform a neighbor into something else and claim it for this
    /// tick, so reaction products settle for one tick before they act.
    /// Life-only writes (charge spread) use [`RuleApi::set`] instead and
    /// stay live within the tick.
    pub(crate) fn transmute(&mut self, dx: i32, dy: i32, cell: Cell) {
        let (nx, ny) = (self.x + dx, self.y + dy);
        if self.grid.in_bounds(nx, ny) {
            let i = self.grid.idx(nx, ny);
            self.grid.cells[i] = cell;
            self.updated[i] = true;
        }
    }

    /// Swap the cell under the cursor with a neighbor, claiming the
    /// destination for this tick and moving the cursor with the element.
    pub(crate) fn swap(&mut self, dx: i32, dy: i32) {
        let (nx, ny) = (self.x + dx, self.y + dy);
        if !self.grid.in_bounds(nx, ny) {
            return;
        }
        let from = self.grid.idx(self.x, self.y);
        let to = self.grid.idx(nx, ny);
        self.grid.cells.swap(from, to);
        self.updated[to] = true;
        self.x = nx;
        self.y = ny;
    }

    /// Detonate centered on a relative offset. Cells the blast converts
    /// are claimed for this tick so the debris settles before moving.
    pub(crate) fn explode(&mut self, dx: i32, dy: i32, r: i32) {
        self.grid
            .explode_claiming(self.x + dx, self.y + dy, r, Some(&mut *self.updated));
    }

    pub(crate) fn chance(&mut self, pct: u16) -> bool {
        self.grid.dice.chance(pct)
    }

    pub(crate) fn range(&mut self, lo: u16, hi: u16) -> u16 {
        self.grid.dice.range(lo, hi)
    }

    pub(crate) fn flip(&mut self) -> i32 {
        self.grid.dice.flip()
    }
}
