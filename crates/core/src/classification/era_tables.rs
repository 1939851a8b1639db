//! Set-name and keyword tables for era classification.
//!
//! Tables are consulted in the order they appear in [`ERA_SET_TABLES`] and
//! [`ERA_KEYWORD_TABLES`]; the first era with a hit wins, so reordering them
//! changes results for ambiguous names.

use lazy_static::lazy_static;

use super::Era;

const VINTAGE_SETS: &[&str] = &[
    "Base Set",
    "Jungle",
    "Fossil",
    "Team Rocket",
    "Gym Heroes",
    "Gym Challenge",
    "Neo Genesis",
    "Neo Discovery",
    "Neo Revelation",
    "Neo Destiny",
    "Legendary Collection",
    "Expedition",
    "Aquapolis",
    "Skyridge",
    "Southern Islands",
    "Wizards Black Star Promos",
];

const CLASSIC_SETS: &[&str] = &[
    "Ruby & Sapphire",
    "Sandstorm",
    "EX Dragon",
    "Team Magma vs Team Aqua",
    "Hidden Legends",
    "FireRed & LeafGreen",
    "Deoxys",
    "Emerald",
    "Unseen Forces",
    "Delta Species",
    "Legend Maker",
    "Holon Phantoms",
    "Crystal Guardians",
    "Dragon Frontiers",
    "Power Keepers",
    "Diamond & Pearl",
    "Mysterious Treasures",
    "Secret Wonders",
    "Great Encounters",
    "Majestic Dawn",
    "Legends Awakened",
    "Stormfront",
    "Platinum",
    "Rising Rivals",
    "Supreme Victors",
    "Arceus",
    "HeartGold & SoulSilver",
    "Unleashed",
    "Undaunted",
    "Triumphant",
    "Call of Legends",
];

const MODERN_SETS: &[&str] = &[
    "Black & White",
    "Emerging Powers",
    "Noble Victories",
    "Next Destinies",
    "Dark Explorers",
    "Dragons Exalted",
    "Boundaries Crossed",
    "Plasma Storm",
    "Plasma Freeze",
    "Plasma Blast",
    "Legendary Treasures",
    "Flashfire",
    "Furious Fists",
    "Phantom Forces",
    "Primal Clash",
    "Roaring Skies",
    "Ancient Origins",
    "BREAKthrough",
    "BREAKpoint",
    "Fates Collide",
    "Steam Siege",
    "Generations",
    "Sun & Moon",
    "Guardians Rising",
    "Burning Shadows",
    "Shining Legends",
    "Crimson Invasion",
    "Ultra Prism",
    "Forbidden Light",
    "Celestial Storm",
    "Dragon Majesty",
    "Lost Thunder",
    "Team Up",
    "Detective Pikachu",
    "Unbroken Bonds",
    "Unified Minds",
    "Hidden Fates",
    "Cosmic Eclipse",
];

const ULTRA_MODERN_SETS: &[&str] = &[
    "Sword & Shield",
    "Rebel Clash",
    "Darkness Ablaze",
    "Champion's Path",
    "Vivid Voltage",
    "Shining Fates",
    "Battle Styles",
    "Chilling Reign",
    "Evolving Skies",
    "Celebrations",
    "Fusion Strike",
    "Brilliant Stars",
    "Astral Radiance",
    "Lost Origin",
    "Silver Tempest",
    "Crown Zenith",
    "Scarlet & Violet",
    "Paldea Evolved",
    "Obsidian Flames",
    "151",
    "Paradox Rift",
    "Paldean Fates",
    "Temporal Forces",
    "Twilight Masquerade",
    "Shrouded Fable",
    "Stellar Crown",
    "Surging Sparks",
    "Prismatic Evolutions",
    "Journey Together",
    "Destined Rivals",
];

const VINTAGE_KEYWORDS: &[&str] = &[
    "wotc",
    "wizards of the coast",
    "1st edition",
    "first edition",
    "shadowless",
    "e-reader",
    "e-card",
    "1999",
    "2000",
    "2001",
    "2002",
];

const CLASSIC_KEYWORDS: &[&str] = &[
    "ex series",
    "pop series",
    "lv.x",
    "lv. x",
    "gold star",
    "diamond and pearl",
    "heartgold",
    "soulsilver",
    "hgss",
    "prime",
    "legend",
    "2004",
    "2005",
    "2006",
    "2007",
    "2008",
    "2009",
    "2010",
];

const MODERN_KEYWORDS: &[&str] = &[
    "black and white",
    "sun and moon",
    "xy",
    "gx",
    "tag team",
    "break",
    "2011",
    "2012",
    "2013",
    "2014",
    "2015",
    "2016",
    "2017",
    "2018",
    "2019",
];

const ULTRA_MODERN_KEYWORDS: &[&str] = &[
    "sword and shield",
    "scarlet and violet",
    "swsh",
    "vmax",
    "vstar",
    "v-union",
    "tera",
    "pokemon go",
    "2020",
    "2021",
    "2022",
    "2023",
    "2024",
];

fn lowercase_table(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_lowercase()).collect()
}

lazy_static! {
    /// Known set names per era, lowercased. `Era::Current` has no set list.
    pub static ref ERA_SET_TABLES: Vec<(Era, Vec<String>)> = vec![
        (Era::Vintage, lowercase_table(VINTAGE_SETS)),
        (Era::Classic, lowercase_table(CLASSIC_SETS)),
        (Era::Modern, lowercase_table(MODERN_SETS)),
        (Era::UltraModern, lowercase_table(ULTRA_MODERN_SETS)),
    ];

    /// Fallback keywords per era, checked vintage first.
    pub static ref ERA_KEYWORD_TABLES: Vec<(Era, Vec<String>)> = vec![
        (Era::Vintage, lowercase_table(VINTAGE_KEYWORDS)),
        (Era::Classic, lowercase_table(CLASSIC_KEYWORDS)),
        (Era::Modern, lowercase_table(MODERN_KEYWORDS)),
        (Era::UltraModern, lowercase_table(ULTRA_MODERN_KEYWORDS)),
    ];
}
