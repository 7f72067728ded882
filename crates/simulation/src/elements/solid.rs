//! Stationary reactive solids: ice melts near heat, wet dirt dries out,
//! wood and coal catch fire from adjacent heat.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

pub fn update_ice(api: &mut RuleApi) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let k = api.get(dx, dy).kind;
            if matches!(k, Element::Fire | Element::Lava | Element::Steam) && api.chance(25) {
                api.set(0, 0, Cell::new(Element::Water));
                return;
            }
        }
    }
}

pub fn update_wet_dirt(api: &mut RuleApi) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let k = api.get(dx, dy).kind;
            if k == Element::Water || k == Element::SaltWater {
                // still soaked; the water rule keeps hydration topped up
                return;
            }
        }
    }
    let mut me = api.cell();
    me.life = me.life.saturating_sub(1);
    if me.life == 0 {
        me = Cell::new(Element::Dirt);
    }
    api.set(0, 0, me);
}

/// Wood and coal are passive fuel; coal burns longer once lit.
pub fn update_kindling(api: &mut RuleApi) {
    if super::heat_adjacent(api) {
        let life = if api.cell().kind == Element::Coal { 35 } else { 25 };
        api.set(0, 0, Cell::with_life(Element::Fire, life));
    }
}
