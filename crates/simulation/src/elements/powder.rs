//! Powders: fall straight down, else slide to a random diagonal, and
//! sink through liquids. Snow melts near heat, sand under standing
//! water seeds seaweed, gunpowder detonates before it can move.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

/// Ticks of water cover before soaked sand tries to sprout seaweed.
const SEAWEED_SOAK: u16 = 220;

pub fn update_powder(api: &mut RuleApi) {
    let kind = api.cell().kind;

    if kind == Element::Gunpowder && super::heat_adjacent(api) {
        api.explode(0, 0, 5);
        return;
    }

    let below = api.get(0, 1);
    if below.kind == Element::Empty || below.kind.is_liquid() {
        api.swap(0, 1);
    } else {
        let dir = api.flip();
        for side in [dir, -dir] {
            let diag = api.get(side, 1);
            if diag.kind == Element::Empty || diag.kind.is_liquid() {
                api.swap(side, 1);
                break;
            }
        }
    }

    match kind {
        Element::Snow => {
            if super::heat_adjacent(api) {
                api.set(0, 0, Cell::new(Element::Water));
            }
        }
        Element::Sand => seaweed_timer(api),
        _ => {}
    }
}

/// Sand directly beneath water accumulates soak time; once soaked long
/// enough, and with no seaweed already in the surrounding 5×5, it
/// plants one seaweed in the water above and starts over.
fn seaweed_timer(api: &mut RuleApi) {
    let mut me = api.cell();
    if api.get(0, -1).kind != Element::Water {
        if me.life != 0 {
            me.life = 0;
            api.set(0, 0, me);
        }
        return;
    }
    me.life += 1;
    if me.life > SEAWEED_SOAK {
        if !seaweed_nearby(api) {
            api.transmute(0, -1, Cell::new(Element::Seaweed));
        }
        me.life = 0;
    }
    api.set(0, 0, me);
}

fn seaweed_nearby(api: &RuleApi) -> bool {
    for dy in -2..=2 {
        for dx in -2..=2 {
            if api.get(dx, dy).kind == Element::Seaweed {
                return true;
            }
        }
    }
    false
}
