//! Fire: flickers upward, ignites what it touches, seeds charge into
//! conductors, is quenched by water, and burns down to smoke.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

pub fn update_fire(api: &mut RuleApi) {
    let above = api.get(0, -1);
    if (above.kind == Element::Empty || above.kind.is_gas()) && api.chance(50) {
        api.swap(0, -1);
    }

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let n = api.get(dx, dy);
            if n.kind.is_flammable() && api.chance(40) {
                if n.kind == Element::Gunpowder {
                    api.explode(dx, dy, 5);
                } else {
                    let life = 15 + api.range(0, 10);
                    api.transmute(dx, dy, Cell::with_life(Element::Fire, life));
                }
            }
            if n.kind == Element::Water || n.kind == Element::SaltWater {
                api.set(0, 0, Cell::with_life(Element::Smoke, 15));
            }
            if matches!(n.kind, Element::Wire | Element::Metal) && api.chance(5) {
                let mut seeded = n;
                seeded.life = seeded.life.max(5);
                api.set(dx, dy, seeded);
            }
            if api.cell().kind != Element::Fire {
                // doused, or caught in a blast it set off
                return;
            }
        }
    }

    let mut me = api.cell();
    me.life = me.life.saturating_sub(1);
    if me.life == 0 {
        me = Cell::with_life(Element::Smoke, 15);
    }
    api.set(0, 0, me);
}
