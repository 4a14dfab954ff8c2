//! Built-in game tables

use super::{
    Boost, CatalogTables, Category, CategoryHeading, CivPower, Epoch, MapCategory, MapInfo, Phase,
    SynergyRule,
};
use crate::settings::MapType;
use smallvec::SmallVec;

use Phase::{Early, Late, Mid};

const EPOCH_NAMES: [&str; 15] = [
    "Stone Age",
    "Tool Age",
    "Copper Age",
    "Bronze Age",
    "Dark Age",
    "Middle Ages",
    "Renaissance",
    "Imperial Age",
    "Enlightenment Age",
    "Industrial Age",
    "Atomic Age",
    "Information Age",
    "Nano Age",
    "Space Age",
    "Digital Age",
];

fn map(
    id: MapType,
    description: &str,
    category: MapCategory,
    naval_support: bool,
    min_epoch: Option<u8>,
) -> MapInfo {
    MapInfo {
        id,
        label: id.as_str().to_string(),
        description: description.to_string(),
        category,
        naval_support,
        min_epoch,
    }
}

fn heading(category: Category, bonus_cost: u32, min_epoch: u8) -> CategoryHeading {
    CategoryHeading {
        category,
        bonus_cost,
        min_epoch,
    }
}

fn boost(name: &str, base_cost: u32, category: Category, tags: &[Phase]) -> Boost {
    Boost {
        name: name.to_string(),
        base_cost,
        category,
        tags: SmallVec::from_slice(tags),
    }
}

fn power(
    name: &str,
    cost: u32,
    epochs: (u8, u8),
    tags: &[Phase],
    conditional: bool,
    description: &str,
) -> CivPower {
    CivPower {
        name: name.to_string(),
        cost,
        min_epoch: epochs.0,
        max_epoch: epochs.1,
        tags: SmallVec::from_slice(tags),
        description: description.to_string(),
        conditional,
    }
}

fn synergy(name: &str, items: [&str; 2], description: &str) -> SynergyRule {
    SynergyRule {
        name: name.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
    }
}

fn epochs() -> Vec<Epoch> {
    EPOCH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Epoch {
            id: (i + 1) as u8,
            name: name.to_string(),
        })
        .collect()
}

fn maps() -> Vec<MapInfo> {
    use MapCategory::{Land, Mixed, Space, Water};

    vec![
        map(MapType::Continental, "Large landmasses separated by oceans.", Land, false, None),
        map(MapType::Mediterranean, "Inland sea surrounded by land.", Mixed, true, None),
        map(MapType::Highlands, "Mountainous terrain with chokepoints.", Land, false, None),
        map(MapType::Plains, "Open flatlands ideal for cavalry.", Land, false, None),
        map(MapType::LargeIslands, "Multiple large islands.", Mixed, true, None),
        map(MapType::SmallIslands, "Archipelago of small islands.", Water, true, None),
        map(MapType::TournamentIslands, "Balanced islands for competitive play.", Water, true, None),
        map(MapType::PlanetsEarth, "The homeworld.", Space, false, Some(14)),
        map(MapType::PlanetsLarge, "A massive alien world.", Space, false, Some(14)),
        map(MapType::PlanetsSmall, "A small rocky planetoid.", Space, false, Some(14)),
        map(MapType::PlanetsMars, "The red planet.", Space, false, Some(14)),
        map(MapType::PlanetsSatellite, "Orbital station warfare.", Space, false, Some(14)),
    ]
}

fn headings() -> Vec<CategoryHeading> {
    vec![
        heading(Category::Economy, 6, 1),
        heading(Category::Buildings, 3, 1),
        heading(Category::General, 0, 1),
        heading(Category::Citizens, 2, 1),
        heading(Category::InfantryRanged, 5, 1),
        heading(Category::InfantryMelee, 3, 1),
        heading(Category::CavalryRanged, 4, 3),
        heading(Category::CavalryMelee, 4, 3),
        heading(Category::Siege, 2, 3),
        heading(Category::Ships, 4, 2),
        heading(Category::Tanks, 5, 10),
        heading(Category::Aircraft, 5, 10),
        heading(Category::Cyber, 6, 13),
        heading(Category::Religion, 2, 3),
    ]
}

fn boosts() -> Vec<Boost> {
    use Category::*;

    vec![
        boost("20% Farming", 9, Economy, &[Early]),
        boost("20% Fishing", 9, Economy, &[Early]),
        boost("15% Gold Mining", 11, Economy, &[Early, Mid]),
        boost("20% Hunting & Foraging", 11, Economy, &[Early]),
        boost("15% Iron Mining", 11, Economy, &[Mid, Late]),
        boost("20% Stone Mining", 9, Economy, &[Early, Mid]),
        boost("15% Wood Cutting", 13, Economy, &[Early]),
        boost("20% Attack (Buildings)", 3, Buildings, &[Early]),
        boost("30% Build Time Decrease (Buildings)", 4, Buildings, &[Early]),
        boost("15% Cost Reduction (Buildings)", 11, Buildings, &[Early, Mid]),
        boost("50% Hit Points (Buildings)", 11, Buildings, &[Mid]),
        boost("20% Range (Buildings)", 4, Buildings, &[Mid]),
        boost("50% Conversion Resistance", 10, General, &[Mid, Late]),
        boost("20% Mountain Combat Bonus", 4, General, &[Mid]),
        boost("15% Population Cap", 9, General, &[Late]),
        boost("30% Attack (Citizens)", 1, Citizens, &[Early]),
        boost("10% Build Time Decrease (Citizens)", 20, Citizens, &[Early]),
        boost("20% Cost Reduction (Citizens)", 25, Citizens, &[Early]),
        boost("30% Hit Points (Citizens)", 3, Citizens, &[Early]),
        boost("35% Range (Citizens)", 2, Citizens, &[Early]),
        boost("20% Speed (Citizens)", 4, Citizens, &[Early]),
        boost("20% Armor (Ranged Inf)", 3, InfantryRanged, &[Mid]),
        boost("20% Attack (Ranged Inf)", 5, InfantryRanged, &[Early, Mid]),
        boost("30% Build Time (Ranged Inf)", 4, InfantryRanged, &[Early]),
        boost("20% Cost Reduction (Ranged Inf)", 9, InfantryRanged, &[Early]),
        boost("25% Hit Points (Ranged Inf)", 5, InfantryRanged, &[Mid]),
        boost("20% Range (Ranged Inf)", 6, InfantryRanged, &[Mid, Late]),
        boost("20% Speed (Ranged Inf)", 5, InfantryRanged, &[Mid]),
        boost("20% Armor (Melee Inf)", 2, InfantryMelee, &[Mid]),
        boost("20% Attack (Melee Inf)", 3, InfantryMelee, &[Early, Mid]),
        boost("30% Build Time (Melee Inf)", 2, InfantryMelee, &[Early]),
        boost("20% Cost Reduction (Melee Inf)", 7, InfantryMelee, &[Early]),
        boost("25% Hit Points (Melee Inf)", 3, InfantryMelee, &[Mid]),
        boost("20% Range (Melee Inf)", 3, InfantryMelee, &[Mid]),
        boost("20% Speed (Melee Inf)", 3, InfantryMelee, &[Mid]),
        boost("20% Armor (Cav Ranged)", 2, CavalryRanged, &[Mid]),
        boost("20% Attack (Cav Ranged)", 4, CavalryRanged, &[Mid]),
        boost("30% Build Time (Cav Ranged)", 3, CavalryRanged, &[Mid]),
        boost("20% Cost Reduction (Cav Ranged)", 8, CavalryRanged, &[Mid]),
        boost("25% Hit Points (Cav Ranged)", 4, CavalryRanged, &[Mid]),
        boost("20% Range (Cav Ranged)", 5, CavalryRanged, &[Mid]),
        boost("20% Speed (Cav Ranged)", 4, CavalryRanged, &[Mid]),
        boost("20% Area Effect (Siege)", 5, Siege, &[Late]),
        boost("20% Armor (Siege)", 1, Siege, &[Late]),
        boost("20% Attack (Siege)", 2, Siege, &[Late]),
        boost("30% Build Time (Siege)", 1, Siege, &[Mid]),
        boost("20% Cost Reduction (Siege)", 3, Siege, &[Mid]),
        boost("25% Hit Points (Siege)", 2, Siege, &[Late]),
        boost("20% Range (Siege)", 2, Siege, &[Late]),
        boost("25% Rate of Fire (Siege)", 2, Siege, &[Late]),
        boost("20% Speed (Siege)", 2, Siege, &[Late]),
        boost("20% Armor (Tanks)", 3, Tanks, &[Late]),
        boost("20% Attack (Tanks)", 5, Tanks, &[Late]),
        boost("20% Cost Reduction (Tanks)", 9, Tanks, &[Late]),
        boost("25% Hit Points (Tanks)", 5, Tanks, &[Late]),
        boost("20% Attack (Bombers)", 5, Aircraft, &[Late]),
        boost("20% Attack (Fighters)", 5, Aircraft, &[Late]),
        boost("30% Build Time (Fighters)", 4, Aircraft, &[Late]),
        boost("25% Hit Points (Bombers)", 5, Aircraft, &[Late]),
        boost("20% Speed (Ships)", 4, Ships, &[Mid]),
        boost("20% Attack (Ships)", 5, Ships, &[Mid]),
        boost("20% Range (Ships)", 6, Ships, &[Mid]),
        boost("25% Hit Points (Ships)", 5, Ships, &[Mid]),
        boost("20% Cost Reduction (Ships)", 9, Ships, &[Early]),
        boost("20% Attack (Cyber)", 5, Cyber, &[Late]),
        boost("20% Hit Points (Cyber)", 5, Cyber, &[Late]),
        boost("20% Range (Priests)", 4, Religion, &[Mid]),
        boost("30% Hit Points (Priests)", 4, Religion, &[Mid]),
        boost("50% Conversion Area", 10, Religion, &[Mid]),
    ]
}

fn powers() -> Vec<CivPower> {
    vec![
        power("Expansionism", 30, (1, 15), &[Early], false,
            "Grants a second starting settler and reduced colony costs."),
        power("Advanced Mining", 25, (1, 15), &[Early, Mid], false,
            "Deep-crust extraction increases all ore income by 25%."),
        power("Just-In-Time Manufacturing", 20, (1, 15), &[Mid], false,
            "Global 30% reduction in all unit training times."),
        power("Market", 20, (10, 15), &[Late], false,
            "Enables global resource trading and 15% luxury tax income."),
        power("Missile Base", 15, (13, 15), &[Late], true,
            "Strategic long-range strike capability with high collateral damage."),
        power("Adaptation", 15, (3, 15), &[Mid], true,
            "Switches production focus instantly based on enemy unit types."),
        power("Slavery", 10, (1, 15), &[Early], false,
            "Extreme labor efficiency at the cost of global stability."),
        power("Priest Tower", 30, (1, 15), &[Mid], true,
            "Radiates a conversion aura that periodically claims nearby units."),
        power("Pathfinding", 25, (1, 15), &[Early], false,
            "All units ignore terrain penalties and move 15% faster."),
        power("SAS Commando", 15, (10, 15), &[Late], true,
            "Specialized elite infantry with stealth and sabotage abilities."),
    ]
}

fn synergies() -> Vec<SynergyRule> {
    vec![
        synergy("Agrarian Empire", ["20% Farming", "Expansionism"],
            "Massive population boom enabled by cheap land and high food yields."),
        synergy("Iron Fortress", ["15% Iron Mining", "50% Hit Points (Buildings)"],
            "Indestructible structures fueled by massive iron reserves."),
        synergy("Hussar Rush", ["20% Speed (Cavalry)", "30% Build Time (Cavalry)"],
            "Lightning-fast raids that overwhelm opponents before they can react."),
        synergy("Siege Master", ["20% Area Effect (Siege)", "20% Range (Siege)"],
            "Demolish entire bases from a safe distance with devastating accuracy."),
        synergy("Naval Supremacy", ["20% Range (Ships)", "20% Attack (Ships)"],
            "Total control of the seas with superior firepower and reach."),
        synergy("Blitzkrieg", ["20% Attack (Tanks)", "20% Speed (Citizens)"],
            "Rapid industrial mobilization paired with overwhelming armored force."),
        synergy("Divine Protection", ["Priest Tower", "50% Conversion Resistance"],
            "A holy sanctuary that is almost impossible to subvert."),
        synergy("Resource Monopoly", ["Advanced Mining", "Slavery"],
            "Hyper-efficient extraction that outpaces any conventional economy."),
    ]
}

/// The game's own tables
pub fn builtin_tables() -> CatalogTables {
    CatalogTables {
        epochs: epochs(),
        maps: maps(),
        headings: headings(),
        boosts: boosts(),
        powers: powers(),
        synergies: synergies(),
    }
}
