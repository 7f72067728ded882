//! Liquids: gravity first, then a randomized sideways spread, with
//! heavier liquids sinking through lighter ones. After moving, each
//! kind reacts with its 3×3 neighborhood — water quenches and is
//! boiled by lava, oil and ethanol ignite, acid dissolves, lava melts
//! and vitrifies — and water carries electric charge as a hazard.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

/// Hydration granted to dirt touching water.
const HYDRATION: u16 = 300;

/// Age at which lava cools to stone on its own.
const LAVA_COOL_AGE: u16 = 200;

pub fn update_liquid(api: &mut RuleApi) {
    let kind = api.cell().kind;

    let below = api.get(0, 1);
    let sinks = below.kind == Element::Empty
        || below.kind.is_gas()
        || (below.kind.is_liquid() && kind.density() > below.kind.density());
    if sinks {
        api.swap(0, 1);
    } else {
        let dir = api.flip();
        for side in [dir, -dir] {
            let n = api.get(side, 0);
            if n.kind == Element::Empty || n.kind.is_gas() {
                api.swap(side, 0);
                break;
            }
            if n.kind.is_liquid() && kind.density() > n.kind.density() && api.chance(50) {
                api.swap(side, 0);
                break;
            }
        }
    }

    react(api, kind);

    match kind {
        Element::Lava if api.cell().kind == Element::Lava => {
            let mut me = api.cell();
            me.life += 1;
            if me.life > LAVA_COOL_AGE {
                me = Cell::new(Element::Stone);
            }
            api.set(0, 0, me);
        }
        Element::Water | Element::SaltWater if api.cell().kind == kind => {
            hydrate_dirt(api);
            discharge(api);
        }
        _ => {}
    }
}

/// Per-kind neighborhood reactions. Stops as soon as the liquid itself
/// transforms; the new kind picks up its own rule next tick.
fn react(api: &mut RuleApi, kind: Element) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let n = api.get(dx, dy);
            match kind {
                Element::Water | Element::SaltWater => match n.kind {
                    Element::Fire => api.transmute(dx, dy, Cell::with_life(Element::Smoke, 15)),
                    Element::Lava => quench_lava(api, dx, dy),
                    _ => {}
                },
                Element::Oil | Element::Ethanol => {
                    if n.kind == Element::Fire || n.kind == Element::Lava {
                        api.set(0, 0, Cell::with_life(Element::Fire, 25));
                    }
                }
                Element::Acid => acid_neighbor(api, dx, dy, n),
                Element::Lava => lava_neighbor(api, dx, dy, n),
                _ => {}
            }
            if api.cell().kind != kind {
                return;
            }
        }
    }
}

/// Water meeting lava: the lava is always cooled to stone; the water
/// flashes to steam half the time and is itself entombed otherwise.
/// Applied from both sides of the pair, so the lava rule has the
/// mirror image.
fn quench_lava(api: &mut RuleApi, dx: i32, dy: i32) {
    api.transmute(dx, dy, Cell::new(Element::Stone));
    let me = if api.chance(50) {
        Cell::with_life(Element::Steam, 20)
    } else {
        Cell::new(Element::Stone)
    };
    api.set(0, 0, me);
}

fn acid_neighbor(api: &mut RuleApi, dx: i32, dy: i32, n: Cell) {
    if n.kind.is_dissolvable() {
        if api.chance(30) {
            api.transmute(dx, dy, Cell::with_life(Element::ToxicGas, 25));
        } else {
            api.transmute(dx, dy, Cell::empty());
        }
        // dissolving is corrosive both ways
        if api.chance(25) {
            api.set(0, 0, Cell::empty());
        }
    }
    if n.kind == Element::Water && api.chance(30) {
        api.set(0, 0, Cell::new(Element::SaltWater));
        if api.chance(30) {
            api.transmute(dx, dy, Cell::with_life(Element::Steam, 20));
        }
    }
}

fn lava_neighbor(api: &mut RuleApi, dx: i32, dy: i32, n: Cell) {
    match n.kind {
        k if k.is_flammable() => api.transmute(dx, dy, Cell::with_life(Element::Fire, 25)),
        Element::Sand | Element::Snow => api.transmute(dx, dy, Cell::new(Element::Glass)),
        Element::Water | Element::SaltWater => {
            api.transmute(dx, dy, Cell::new(Element::Stone));
            let me = if api.chance(50) {
                Cell::with_life(Element::Steam, 20)
            } else {
                Cell::new(Element::Stone)
            };
            api.set(0, 0, me);
        }
        Element::Ice => api.transmute(dx, dy, Cell::new(Element::Water)),
        _ => {}
    }
}

fn hydrate_dirt(api: &mut RuleApi) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let k = api.get(dx, dy).kind;
            if k == Element::Dirt || k == Element::WetDirt {
                api.transmute(dx, dy, Cell::with_life(Element::WetDirt, HYDRATION));
            }
        }
    }
}

/// Electrified water: charge spreads to adjacent water one quantum
/// lower per hop, fries agents on contact, and bleeds off by one each
/// tick. The charge writes stay live, so a front can race along the
/// sweep through a connected body in a single tick.
fn discharge(api: &mut RuleApi) {
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
                Element::Water | Element::SaltWater => {
                    if n.life < q - 1 {
                        n.life = q - 1;
                        api.set(dx, dy, n);
                    }
                }
                Element::Human | Element::Zombie => {
                    api.transmute(dx, dy, Cell::new(Element::Ash));
                }
                _ => {}
            }
        }
    }
    me.life -= 1;
    api.set(0, 0, me);
}
