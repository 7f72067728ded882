//! Lightning: a short-lived bolt segment. It charges conductors and
//! water across a 5×5 ring, ignites or detonates what it reaches, and
//! vanishes without residue.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

pub fn update_lightning(api: &mut RuleApi) {
    for dy in -2..=2 {
        for dx in -2..=2 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let mut n = api.get(dx, dy);
            match n.kind {
                Element::Wire | Element::Metal => {
                    if n.life < 12 {
                        n.life = 12;
                        api.set(dx, dy, n);
                    }
                }
                Element::Water | Element::SaltWater => {
                    if n.life < 8 {
                        n.life = 8;
                        api.set(dx, dy, n);
                    }
                }
                Element::Gunpowder => api.explode(dx, dy, 6),
                k if k.is_flammable() => {
                    let life = 20 + api.range(0, 10);
                    api.transmute(dx, dy, Cell::with_life(Element::Fire, life));
                }
                Element::Hydrogen | Element::Gas => api.explode(dx, dy, 4),
                _ => {}
            }
            if api.cell().kind != Element::Lightning {
                // consumed by a blast it set off
                return;
            }
        }
    }

    let mut me = api.cell();
    me.life = me.life.saturating_sub(1);
    if me.life == 0 {
        // spent bolts leave nothing behind
        api.set(0, 0, Cell::empty());
    } else {
        api.set(0, 0, me);
    }
}
