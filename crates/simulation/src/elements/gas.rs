//! Gases: rise, drift sideways, and expire after a bounded lifetime.
//! Hydrogen is light enough to climb two cells a tick and detonates
//! near heat; plain gas ignites in place; chlorine withers plants.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

pub fn update_gas(api: &mut RuleApi) {
    let kind = api.cell().kind;

    let climbs = if kind == Element::Hydrogen { 2 } else { 1 };
    let mut rose = false;
    for _ in 0..climbs {
        if api.get(0, -1).kind != Element::Empty {
            break;
        }
        api.swap(0, -1);
        rose = true;
    }
    if !rose {
        let dir = api.flip();
        for side in [dir, -dir] {
            let dy = if api.chance(50) { -1 } else { 0 };
            if api.get(side, dy).kind == Element::Empty {
                api.swap(side, dy);
                break;
            }
        }
    }

    match kind {
        Element::Hydrogen => {
            if super::heat_adjacent(api) {
                api.explode(0, 0, 4);
                return;
            }
        }
        Element::Gas => {
            if super::heat_adjacent(api) {
                api.set(0, 0, Cell::with_life(Element::Fire, 12));
                return;
            }
        }
        Element::Chlorine => {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if api.get(dx, dy).kind == Element::Plant && api.chance(35) {
                        api.transmute(dx, dy, Cell::with_life(Element::ToxicGas, 25));
                    }
                }
            }
        }
        _ => {}
    }

    let mut me = api.cell();
    me.life = me.life.saturating_sub(1);
    if me.life > 0 {
        api.set(0, 0, me);
        return;
    }
    let expired = match kind {
        Element::Steam if api.chance(15) => Cell::new(Element::Water),
        Element::Smoke if api.chance(8) => Cell::new(Element::Ash),
        _ => Cell::empty(),
    };
    api.set(0, 0, expired);
}
