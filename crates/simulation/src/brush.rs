//! Brush placement: a disk stamp for every element, with lightning as
//! the one special case (a bolt that strikes straight down).

use log::trace;

use crate::cell::{Cell, Element};
use crate::Grid;

impl Grid {
    /// Stamp a disk of `kind` with the given radius centered at
    /// (cx, cy), clipped to the grid. Gases start with a 25-tick
    /// lifetime and fire with 20; everything else starts at zero.
    ///
    /// Placing [`Element::Lightning`] ignores the radius: the bolt
    /// drops from the anchor point instead.
    pub fn place(&mut self, cx: i32, cy: i32, radius: i32, kind: Element) {
        if kind == Element::Lightning {
            self.strike_lightning(cx, cy);
            return;
        }
        trace!("brush {} r={radius} at ({cx}, {cy})", kind.name());
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if !self.in_bounds(x, y) {
                    continue;
                }
                let life = match kind {
                    Element::Fire => 20,
                    k if k.is_gas() => 25,
                    _ => 0,
                };
                let i = self.idx(x, y);
                self.cells[i] = Cell::with_life(kind, life);
            }
        }
    }

    /// Extend a bolt downward from (cx, cy) through air and gas until
    /// it meets a surface. Each traversed cell becomes a short-lived
    /// bolt segment; water the bolt lands on is electrified.
    fn strike_lightning(&mut self, cx: i32, cy: i32) {
        if !self.in_bounds(cx, cy) {
            return;
        }
        trace!("lightning strike at ({cx}, {cy})");
        let mut y = cy;
        while self.in_bounds(cx, y + 1) {
            let below = self.cells[self.idx(cx, y + 1)].kind;
            if below != Element::Empty && !below.is_gas() {
                break;
            }
            y += 1;
        }
        for yy in cy..=y {
            let i = self.idx(cx, yy);
            self.cells[i] = Cell::with_life(Element::Lightning, 2);
        }
        if self.in_bounds(cx, y + 1) {
            let i = self.idx(cx, y + 1);
            let below = &mut self.cells[i];
            if below.kind == Element::Water || below.kind == Element::SaltWater {
                below.life = below.life.max(8);
            }
        }
    }
}
