//! Plant and seaweed: both burn eagerly. Plants creep upward out of
//! wet dirt; seaweed grows toward the surface of the water above it.

use crate::api::RuleApi;
use crate::cell::{Cell, Element};

/// Growth chance per tick, in percent.
const GROWTH_PCT: u16 = 2;

pub fn update_plant(api: &mut RuleApi) {
    if super::heat_adjacent(api) {
        api.set(0, 0, Cell::with_life(Element::Fire, 20));
        return;
    }

    if api.cell().kind == Element::Plant {
        let rooted = api.get(0, 1).kind == Element::WetDirt;
        if rooted && api.chance(GROWTH_PCT) && api.get(0, -1).kind == Element::Empty {
            api.transmute(0, -1, Cell::new(Element::Plant));
        }
    } else {
        // only the topmost frond, the one still under open water, grows
        let above = api.get(0, -1).kind;
        if (above == Element::Water || above == Element::SaltWater) && api.chance(GROWTH_PCT) {
            api.transmute(0, -1, Cell::new(Element::Seaweed));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn plant_burns_near_fire() {
        let mut grid = Grid::with_seed(2, 1, 0);
        grid.set(0, 0, Cell::new(Element::Plant));
        grid.set(1, 0, Cell::with_life(Element::Fire, 50));
        grid.tick();
        assert_eq!(grid.get(0, 0).unwrap(), Cell::with_life(Element::Fire, 20));
    }

    #[test]
    fn seaweed_burns_near_lava() {
        let mut grid = Grid::with_seed(2, 1, 0);
        grid.set(0, 0, Cell::new(Element::Seaweed));
        grid.set(1, 0, Cell::with_life(Element::Lava, 1));
        grid.tick();
        assert_eq!(grid.get(0, 0).unwrap().kind, Element::Fire);
    }

    #[test]
    fn plant_on_wet_dirt_eventually_grows_up() {
        let mut grid = Grid::with_seed(3, 4, 5);
        grid.set(1, 3, Cell::with_life(Element::WetDirt, 300));
        grid.set(1, 2, Cell::new(Element::Plant));
        let mut grew = false;
        for _ in 0..600 {
            grid.tick();
            // keep the soil wet so growth stays possible
            grid.set(1, 3, Cell::with_life(Element::WetDirt, 300));
            if grid.get(1, 1).unwrap().kind == Element::Plant {
                grew = true;
                break;
            }
        }
        assert!(grew, "plant never grew in 600 ticks");
        assert_eq!(grid.get(1, 2).unwrap().kind, Element::Plant);
    }

    #[test]
    fn plant_without_soil_never_grows() {
        let mut grid = Grid::with_seed(3, 4, 5);
        grid.set(1, 3, Cell::new(Element::Stone));
        grid.set(1, 2, Cell::new(Element::Plant));
        for _ in 0..600 {
            grid.tick();
        }
        assert_eq!(grid.get(1, 1).unwrap().kind, Element::Empty);
    }

    #[test]
    fn seaweed_grows_toward_the_surface() {
        let mut grid = Grid::with_seed(3, 5, 5);
        // a walled column of water with seaweed at the bottom
        for y in 0..5 {
            grid.set(0, y, Cell::new(Element::Wall));
            grid.set(2, y, Cell::new(Element::Wall));
        }
        grid.set(1, 0, Cell::new(Element::Wall));
        for y in 1..4 {
            grid.set(1, y, Cell::new(Element::Water));
        }
        grid.set(1, 4, Cell::new(Element::Seaweed));
        let mut grew = false;
        for _ in 0..600 {
            grid.tick();
            if grid.get(1, 3).unwrap().kind == Element::Seaweed {
                grew = true;
                break;
            }
        }
        assert!(grew, "seaweed never grew in 600 ticks");
    }

    #[test]
    fn submerged_seaweed_with_seaweed_above_stays_put() {
        let mut grid = Grid::with_seed(1, 3, 5);
        grid.set(0, 0, Cell::new(Element::Wall));
        grid.set(0, 1, Cell::new(Element::Seaweed));
        grid.set(0, 2, Cell::new(Element::Seaweed));
        for _ in 0..200 {
            grid.tick();
        }
        assert_eq!(grid.get(0, 0).unwrap().kind, Element::Wall);
        assert_eq!(grid.get(0, 1).unwrap().kind, Element::Seaweed);
        assert_eq!(grid.get(0, 2).unwrap().kind, Element::Seaweed);
    }
}
