//! Wire and metal: inert until charged. Charge hops to adjacent
//! conductors and water one quantum lower per step, occasionally
//! arcing into fuel and gas pockets, and bleeds off by one per tick.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

pub fn update_conductor(api: &mut RuleApi) {
    let mut me = api.cell();
    if me.life == 0 {
        return;
    }
    let q = me.life;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let mut n = api.get(dx, dy);
            match n.kind {
                Element::Wire | Element::Metal | Element::Water | Element::SaltWater => {
                    if n.life < q - 1 {
                        n.life = q - 1;
                        api.set(dx, dy, n);
                    }
                }
                k if k.is_flammable() => {
                    if api.chance(15) {
                        if n.kind == Element::Gunpowder {
                            api.explode(dx, dy, 5);
                        } else {
                            let life = 15 + api.range(0, 10);
                            api.transmute(dx, dy, Cell::with_life(Element::Fire, life));
                        }
                    }
                }
                Element::Hydrogen | Element::Gas => {
                    if api.chance(35) {
                        api.explode(dx, dy, 4);
                    }
                }
                _ => {}
            }
        }
    }
    me.life -= 1;
    api.set(0, 0, me);
}
