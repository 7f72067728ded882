//! Element taxonomy and the per-cell state.
//!
//! A cell is an element kind plus one `life` scalar whose meaning depends
//! on the kind: remaining ticks for gases, fire and lightning; electric
//! charge for water and conductors; hydration for wet dirt; age for lava;
//! the seaweed-seeding timer for sand; an animation tick for agents.

/// Every element the engine simulates, grouped by category.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Element {
    Empty,
    // powders
    Sand,
    Gunpowder,
    Ash,
    Snow,
    // liquids
    Water,
    SaltWater,
    Oil,
    Ethanol,
    Acid,
    Lava,
    Mercury,
    // solids / terrain
    Stone,
    Glass,
    Wall,
    Wood,
    Plant,
    Seaweed,
    Metal,
    Wire,
    Ice,
    Coal,
    Dirt,
    WetDirt,
    // gases
    Smoke,
    Steam,
    Gas,
    ToxicGas,
    Hydrogen,
    Chlorine,
    // actors / special
    Fire,
    Lightning,
    Human,
    Zombie,
}

impl Element {
    /// Every kind, in display order. Hosts iterate this for element
    /// browsers; tests use it to sample arbitrary kinds.
    pub const ALL: [Element; 34] = [
        Element::Empty,
        Element::Sand,
        Element::Gunpowder,
        Element::Ash,
        Element::Snow,
        Element::Water,
        Element::SaltWater,
        Element::Oil,
        Element::Ethanol,
        Element::Acid,
        Element::Lava,
        Element::Mercury,
        Element::Stone,
        Element::Glass,
        Element::Wall,
        Element::Wood,
        Element::Plant,
        Element::Seaweed,
        Element::Metal,
        Element::Wire,
        Element::Ice,
        Element::Coal,
        Element::Dirt,
        Element::WetDirt,
        Element::Smoke,
        Element::Steam,
        Element::Gas,
        Element::ToxicGas,
        Element::Hydrogen,
        Element::Chlorine,
        Element::Fire,
        Element::Lightning,
        Element::Human,
        Element::Zombie,
    ];

    /// Granular solids that fall and slide diagonally.
    pub fn is_powder(self) -> bool {
        matches!(
            self,
            Element::Sand | Element::Gunpowder | Element::Ash | Element::Snow
        )
    }

    /// Fluids that fall, spread sideways and stratify by density.
    pub fn is_liquid(self) -> bool {
        matches!(
            self,
            Element::Water
                | Element::SaltWater
                | Element::Oil
                | Element::Ethanol
                | Element::Acid
                | Element::Lava
                | Element::Mercury
        )
    }

    /// Stationary terrain.
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            Element::Stone
                | Element::Glass
                | Element::Wall
                | Element::Wood
                | Element::Plant
                | Element::Seaweed
                | Element::Metal
                | Element::Wire
                | Element::Ice
                | Element::Coal
                | Element::Dirt
                | Element::WetDirt
        )
    }

    /// Fluids that rise and decay after a bounded lifetime.
    pub fn is_gas(self) -> bool {
        matches!(
            self,
            Element::Smoke
                | Element::Steam
                | Element::Gas
                | Element::ToxicGas
                | Element::Hydrogen
                | Element::Chlorine
        )
    }

    /// Ignitable by fire, lava, lightning or a charged conductor.
    pub fn is_flammable(self) -> bool {
        matches!(
            self,
            Element::Wood
                | Element::Plant
                | Element::Oil
                | Element::Ethanol
                | Element::Gunpowder
                | Element::Coal
                | Element::Seaweed
        )
    }

    /// Carries electric charge in its `life` field.
    pub fn is_conductor(self) -> bool {
        matches!(
            self,
            Element::Metal | Element::Wire | Element::Mercury | Element::SaltWater
        )
    }

    /// Destroyed by acid.
    pub fn is_dissolvable(self) -> bool {
        matches!(
            self,
            Element::Sand
                | Element::Stone
                | Element::Glass
                | Element::Wood
                | Element::Plant
                | Element::Metal
                | Element::Wire
                | Element::Ash
                | Element::Coal
                | Element::Seaweed
                | Element::Dirt
                | Element::WetDirt
        )
    }

    /// Kills humans and burns zombies on contact.
    pub fn is_hazard(self) -> bool {
        matches!(
            self,
            Element::Fire
                | Element::Lava
                | Element::Acid
                | Element::ToxicGas
                | Element::Chlorine
                | Element::Lightning
        )
    }

    /// Relative density for fluid stratification. Heavier fluids sink
    /// through lighter ones; everything non-fluid compares as infinitely
    /// heavy and never takes part in a density swap.
    pub fn density(self) -> u16 {
        match self {
            Element::Gas | Element::Hydrogen => 1,
            Element::Steam => 2,
            Element::Smoke => 3,
            Element::Chlorine => 5,
            Element::Ethanol => 85,
            Element::Oil => 90,
            Element::Water => 100,
            Element::SaltWater => 103,
            Element::Acid => 110,
            Element::Lava => 160,
            Element::Mercury => 200,
            _ => u16::MAX,
        }
    }

    /// Canonical single-character glyph for terminal renderers.
    pub fn glyph(self) -> char {
        match self {
            Element::Empty => ' ',
            Element::Sand => '.',
            Element::Gunpowder => '%',
            Element::Ash => ';',
            Element::Snow => ',',
            Element::Water => '~',
            Element::SaltWater => ':',
            Element::Oil => 'o',
            Element::Ethanol => 'e',
            Element::Acid => 'a',
            Element::Lava => 'L',
            Element::Mercury => 'm',
            Element::Stone => '#',
            Element::Glass => '=',
            Element::Wall => '@',
            Element::Wood => 'w',
            Element::Plant => 'p',
            Element::Seaweed => 'v',
            Element::Metal => 'M',
            Element::Wire => '-',
            Element::Ice => 'I',
            Element::Coal => 'c',
            Element::Dirt => 'd',
            Element::WetDirt => 'D',
            Element::Smoke => '^',
            Element::Steam => '"',
            Element::Gas => '`',
            Element::ToxicGas => 'x',
            Element::Hydrogen => '\'',
            Element::Chlorine => 'X',
            Element::Fire => '*',
            Element::Lightning => '|',
            Element::Human => 'Y',
            Element::Zombie => 'T',
        }
    }

    /// Human-readable label for status bars and element browsers.
    pub fn name(self) -> &'static str {
        match self {
            Element::Empty => "Empty",
            Element::Sand => "Sand",
            Element::Gunpowder => "Gunpowder",
            Element::Ash => "Ash",
            Element::Snow => "Snow",
            Element::Water => "Water",
            Element::SaltWater => "Salt Water",
            Element::Oil => "Oil",
            Element::Ethanol => "Ethanol",
            Element::Acid => "Acid",
            Element::Lava => "Lava",
            Element::Mercury => "Mercury",
            Element::Stone => "Stone",
            Element::Glass => "Glass",
            Element::Wall => "Wall",
            Element::Wood => "Wood",
            Element::Plant => "Plant",
            Element::Seaweed => "Seaweed",
            Element::Metal => "Metal",
            Element::Wire => "Wire",
            Element::Ice => "Ice",
            Element::Coal => "Coal",
            Element::Dirt => "Dirt",
            Element::WetDirt => "Wet Dirt",
            Element::Smoke => "Smoke",
            Element::Steam => "Steam",
            Element::Gas => "Gas",
            Element::ToxicGas => "Toxic Gas",
            Element::Hydrogen => "Hydrogen",
            Element::Chlorine => "Chlorine",
            Element::Fire => "Fire",
            Element::Lightning => "Lightning",
            Element::Human => "Human",
            Element::Zombie => "Zombie",
        }
    }
}

/// One grid cell: an element kind and its polymorphic `life` scalar.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub kind: Element,
    pub life: u16,
}

impl Cell {
    pub fn new(kind: Element) -> Self {
        Cell { kind, life: 0 }
    }

    pub fn with_life(kind: Element, life: u16) -> Self {
        Cell { kind, life }
    }

    pub fn empty() -> Self {
        Cell::new(Element::Empty)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}
