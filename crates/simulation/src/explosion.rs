//! Blast primitive shared by gunpowder, hydrogen and gas pockets.

use log::trace;

use crate::cell::{Cell, Element};
use crate::Grid;

/// Hard solids a blast cannot convert.
fn blast_proof(kind: Element) -> bool {
    matches!(
        kind,
        Element::Wall
            | Element::Stone
            | Element::Glass
            | Element::Metal
            | Element::Wire
            | Element::Ice
    )
}

impl Grid {
    /// Convert the disk of radius `r` around (cx, cy) into a mix of
    /// fire, smoke and gas. Blast-proof solids are skipped and the disk
    /// is clipped to the grid.
    pub fn explode(&mut self, cx: i32, cy: i32, r: i32) {
        self.explode_claiming(cx, cy, r, None);
    }

    /// Blast that also claims converted cells in the tick's updated
    /// mask, so debris created mid-tick stays put until the next tick.
    pub(crate) fn explode_claiming(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        mut claimed: Option<&mut [bool]>,
    ) {
        trace!("explosion at ({cx}, {cy}) r={r}");
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if !self.in_bounds(x, y) {
                    continue;
                }
                let i = self.idx(x, y);
                if blast_proof(self.cells[i].kind) {
                    continue;
                }
                let roll = self.dice.range(1, 100);
                self.cells[i] = if roll <= 50 {
                    let life = 15 + self.dice.range(0, 10);
                    Cell::with_life(Element::Fire, life)
                } else if roll <= 80 {
                    Cell::with_life(Element::Smoke, 20)
                } else {
                    Cell::with_life(Element::Gas, 20)
                };
                if let Some(mask) = claimed.as_deref_mut() {
                    mask[i] = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_becomes_fire_smoke_or_gas() {
        let mut grid = Grid::with_seed(21, 21, 5);
        grid.explode(10, 10, 5);
        for y in 0..21 {
            for x in 0..21 {
                let d2 = (x - 10) * (x - 10) + (y - 10) * (y - 10);
                let cell = grid.get(x, y).unwrap();
                if d2 <= 25 {
                    assert!(
                        matches!(cell.kind, Element::Fire | Element::Smoke | Element::Gas),
                        "({x}, {y}) is {:?}",
                        cell.kind
                    );
                    match cell.kind {
                        Element::Fire => assert!((15..=25).contains(&cell.life)),
                        _ => assert_eq!(cell.life, 20),
                    }
                } else {
                    assert_eq!(cell.kind, Element::Empty);
                }
            }
        }
    }

    #[test]
    fn blast_proof_solids_survive() {
        let shielded = [
            Element::Wall,
            Element::Stone,
            Element::Glass,
            Element::Metal,
            Element::Wire,
            Element::Ice,
        ];
        let mut grid = Grid::with_seed(11, 11, 3);
        for (i, kind) in shielded.iter().enumerate() {
            grid.set(i as i32, 5, Cell::new(*kind));
        }
        grid.set(7, 5, Cell::new(Element::Wood));
        grid.explode(5, 5, 5);
        for (i, kind) in shielded.iter().enumerate() {
            assert_eq!(grid.get(i as i32, 5).unwrap().kind, *kind);
        }
        assert!(matches!(
            grid.get(7, 5).unwrap().kind,
            Element::Fire | Element::Smoke | Element::Gas
        ));
    }

    #[test]
    fn oversized_radius_clips_to_grid() {
        let mut grid = Grid::with_seed(5, 5, 1);
        grid.explode(2, 2, 50);
        for cell in grid.cells() {
            assert!(matches!(
                cell.kind,
                Element::Fire | Element::Smoke | Element::Gas
            ));
        }
    }

    #[test]
    fn off_grid_center_is_harmless() {
        let mut grid = Grid::with_seed(5, 5, 1);
        grid.explode(-100, -100, 3);
        for cell in grid.cells() {
            assert_eq!(cell.kind, Element::Empty);
        }
    }
}
