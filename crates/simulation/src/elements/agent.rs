//! Humans and zombies. Both die to hazards and live current; humans
//! flee zombies and fight back when cornered, zombies chase humans and
//! infect them. Both walk, hop single-tile obstacles, and fall through
//! air and gas (but stand on liquids).

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

/// Half-width of the box in which agents notice each other.
const SIGHT: i32 = 6;

/// Animation period: renderers alternate the glyph every six ticks.
const ANIM_PERIOD: u16 = 12;

pub fn update_agent(api: &mut RuleApi) {
    let kind = api.cell().kind;

    if threatened(api) {
        let remains = match kind {
            Element::Human => Cell::new(Element::Ash),
            _ => Cell::with_life(Element::Fire, 15),
        };
        api.set(0, 0, remains);
        return;
    }

    let mut me = api.cell();
    me.life = (me.life + 1) % ANIM_PERIOD;
    api.set(0, 0, me);

    let below = api.get(0, 1);
    if below.kind == Element::Empty || below.kind.is_gas() {
        api.swap(0, 1);
        return;
    }

    let quarry = match kind {
        Element::Human => Element::Zombie,
        _ => Element::Human,
    };

    let mut dir = api.flip();
    'scan: for ry in -SIGHT..=SIGHT {
        for rx in -SIGHT..=SIGHT {
            if api.get(rx, ry).kind != quarry {
                continue;
            }
            dir = match kind {
                // humans run away, zombies close in
                Element::Human => {
                    if rx < 0 {
                        1
                    } else {
                        -1
                    }
                }
                _ => {
                    if rx > 0 {
                        1
                    } else {
                        -1
                    }
                }
            };
            break 'scan;
        }
    }

    engage(api, kind, quarry);

    if !walk(api, dir) {
        let hop_clear =
            api.get(0, -1).kind == Element::Empty && api.get(dir, -1).kind == Element::Empty;
        if hop_clear && api.chance(70) {
            api.swap(dir, -1);
        } else {
            let fallback = api.flip();
            walk(api, fallback);
        }
    }
}

/// Anything in the 3×3 ring that kills on contact: the hazard kinds,
/// or water carrying charge.
fn threatened(api: &RuleApi) -> bool {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let n = api.get(dx, dy);
            if n.kind.is_hazard() {
                return true;
            }
            if matches!(n.kind, Element::Water | Element::SaltWater) && n.life > 0 {
                return true;
            }
        }
    }
    false
}

/// Close-quarters combat against every adjacent enemy.
fn engage(api: &mut RuleApi, kind: Element, quarry: Element) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if api.get(dx, dy).kind != quarry {
                continue;
            }
            match kind {
                Element::Human => {
                    // torch it, or batter it to ash
                    if api.chance(35) {
                        if api.chance(60) {
                            let life = 10 + api.range(0, 10);
                            api.transmute(dx, dy, Cell::with_life(Element::Fire, life));
                        } else {
                            api.transmute(dx, dy, Cell::new(Element::Ash));
                        }
                    }
                }
                _ => {
                    // bite: usually turns, sometimes mauls
                    if api.chance(70) {
                        api.transmute(dx, dy, Cell::new(Element::Zombie));
                    } else {
                        api.transmute(dx, dy, Cell::with_life(Element::Fire, 10));
                    }
                }
            }
        }
    }
}

/// One step sideways through air or gas.
fn walk(api: &mut RuleApi, dir: i32) -> bool {
    let target = api.get(dir, 0);
    if target.kind == Element::Empty || target.kind.is_gas() {
        api.swap(dir, 0);
        true
    } else {
        false
    }
}
