//! Per-element update rules dispatched from the tick loop.

mod agent;
mod conductor;
mod fire;
mod gas;
mod lightning;
mod liquid;
mod plant;
mod powder;
#[cfg(test)]
mod scenarios;
mod solid;

use crate::api::RuleApi;
use crate::cell::Element;

/// Dispatch the rule for `kind`.
///
/// Empty and Wall are skipped by the orchestrator before this is
/// called; stone, glass and dirt have no behavior and fall through.
pub(crate) fn update_cell(kind: Element, api: &mut RuleApi) {
    match kind {
        k if k.is_powder() => powder::update_powder(api),
        k if k.is_liquid() => liquid::update_liquid(api),
        k if k.is_gas() => gas::update_gas(api),
        Element::Fire => fire::update_fire(api),
        Element::Lightning => lightning::update_lightning(api),
        Element::Wire | Element::Metal => conductor::update_conductor(api),
        Element::Plant | Element::Seaweed => plant::update_plant(api),
        Element::Wood | Element::Coal => solid::update_kindling(api),
        Element::Ice => solid::update_ice(api),
        Element::WetDirt => solid::update_wet_dirt(api),
        Element::Human | Element::Zombie => agent::update_agent(api),
        _ => {}
    }
}

/// True when any cell in the 3×3 ring is fire or lava.
pub(crate) fn heat_adjacent(api: &RuleApi) -> bool {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let kind = api.get(dx, dy).kind;
            if kind == Element::Fire || kind == Element::Lava {
                return true;
            }
        }
    }
    false
}
