use lazy_static::lazy_static;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::collections::HashMap;
use strum_macros::EnumIter;

/// The position a hero is most commonly played in. Numbered 1-5 to match
/// the usual position naming.
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum Role {
    HardCarry = 1,
    Core = 2,
    Offlane = 3,
    SoftSupport = 4,
    HardSupport = 5
}

impl Role {
    /// Baseline KDA considered typical for the role. Supports run
    /// structurally lower KDA than carries; dividing a player's raw KDA by
    /// this baseline puts all roles on the same scale.
    pub fn expected_kda(&self) -> f64 {
        match self {
            Role::HardCarry => 4.0,
            Role::Core => 3.5,
            Role::Offlane => 3.0,
            Role::SoftSupport => 2.0,
            Role::HardSupport => 1.5
        }
    }
}

/// Most-played role per hero id. Built once at process start, never
/// mutated. Heroes missing from the table fall back to [`Role::Core`].
#[rustfmt::skip]
const HERO_ROLES: &[(u32, Role)] = &[
    (1, Role::HardCarry),     // Anti-Mage
    (2, Role::Offlane),       // Axe
    (3, Role::HardSupport),   // Bane
    (4, Role::Core),          // Bloodseeker
    (5, Role::HardSupport),   // Crystal Maiden
    (6, Role::HardCarry),     // Drow Ranger
    (7, Role::SoftSupport),   // Earthshaker
    (8, Role::HardCarry),     // Juggernaut
    (9, Role::SoftSupport),   // Mirana
    (10, Role::HardCarry),    // Morphling
    (11, Role::Core),         // Shadow Fiend
    (12, Role::HardCarry),    // Phantom Lancer
    (13, Role::Core),         // Puck
    (14, Role::SoftSupport),  // Pudge
    (15, Role::Core),         // Razor
    (16, Role::Offlane),      // Sand King
    (17, Role::Core),         // Storm Spirit
    (18, Role::Core),         // Sven
    (19, Role::Offlane),      // Tiny
    (20, Role::HardSupport),  // Vengeful Spirit
    (21, Role::Core),         // Windranger
    (22, Role::Core),         // Zeus
    (23, Role::Offlane),      // Kunkka
    (25, Role::Core),         // Lina
    (26, Role::HardSupport),  // Lion
    (27, Role::HardSupport),  // Shadow Shaman
    (28, Role::Offlane),      // Slardar
    (29, Role::Offlane),      // Tidehunter
    (30, Role::HardSupport),  // Witch Doctor
    (31, Role::HardSupport),  // Lich
    (32, Role::HardCarry),    // Riki
    (33, Role::SoftSupport),  // Enigma
    (34, Role::Core),         // Tinker
    (35, Role::HardCarry),    // Sniper
    (36, Role::Core),         // Necrophos
    (37, Role::HardSupport),  // Warlock
    (38, Role::Offlane),      // Beastmaster
    (39, Role::Core),         // Queen of Pain
    (40, Role::SoftSupport),  // Venomancer
    (41, Role::HardCarry),    // Faceless Void
    (42, Role::HardCarry),    // Wraith King
    (43, Role::Core),         // Death Prophet
    (44, Role::HardCarry),    // Phantom Assassin
    (45, Role::SoftSupport),  // Pugna
    (46, Role::Core),         // Templar Assassin
    (47, Role::Core),         // Viper
    (48, Role::HardCarry),    // Luna
    (49, Role::Offlane),      // Dragon Knight
    (50, Role::HardSupport),  // Dazzle
    (51, Role::Offlane),      // Clockwerk
    (52, Role::Core),         // Leshrac
    (53, Role::Core),         // Nature's Prophet
    (54, Role::HardCarry),    // Lifestealer
    (55, Role::Offlane),      // Dark Seer
    (56, Role::HardCarry),    // Clinkz
    (57, Role::HardSupport),  // Omniknight
    (58, Role::SoftSupport),  // Enchantress
    (59, Role::Core),         // Huskar
    (60, Role::Offlane),      // Night Stalker
    (61, Role::Offlane),      // Broodmother
    (62, Role::SoftSupport),  // Bounty Hunter
    (63, Role::HardCarry),    // Weaver
    (64, Role::HardSupport),  // Jakiro
    (65, Role::Offlane),      // Batrider
    (66, Role::HardSupport),  // Chen
    (67, Role::HardCarry),    // Spectre
    (68, Role::HardSupport),  // Ancient Apparition
    (69, Role::Offlane),      // Doom
    (70, Role::HardCarry),    // Ursa
    (71, Role::SoftSupport),  // Spirit Breaker
    (72, Role::HardCarry),    // Gyrocopter
    (73, Role::HardCarry),    // Alchemist
    (74, Role::Core),         // Invoker
    (75, Role::HardSupport),  // Silencer
    (76, Role::Core),         // Outworld Destroyer
    (77, Role::HardCarry),    // Lycan
    (78, Role::Offlane),      // Brewmaster
    (79, Role::HardSupport),  // Shadow Demon
    (80, Role::HardCarry),    // Lone Druid
    (81, Role::HardCarry),    // Chaos Knight
    (82, Role::HardCarry),    // Meepo
    (83, Role::HardSupport),  // Treant Protector
    (84, Role::HardSupport),  // Ogre Magi
    (85, Role::HardSupport),  // Undying
    (86, Role::SoftSupport),  // Rubick
    (87, Role::HardSupport),  // Disruptor
    (88, Role::SoftSupport),  // Nyx Assassin
    (89, Role::HardCarry),    // Naga Siren
    (90, Role::HardSupport),  // Keeper of the Light
    (91, Role::HardSupport),  // Io
    (92, Role::Offlane),      // Visage
    (93, Role::HardCarry),    // Slark
    (94, Role::HardCarry),    // Medusa
    (95, Role::HardCarry),    // Troll Warlord
    (96, Role::Offlane),      // Centaur Warrunner
    (97, Role::Offlane),      // Magnus
    (98, Role::Offlane),      // Timbersaw
    (99, Role::Offlane),      // Bristleback
    (100, Role::SoftSupport), // Tusk
    (101, Role::SoftSupport), // Skywrath Mage
    (102, Role::Offlane),     // Abaddon
    (103, Role::SoftSupport), // Elder Titan
    (104, Role::Offlane),     // Legion Commander
    (105, Role::SoftSupport), // Techies
    (106, Role::Core),        // Ember Spirit
    (107, Role::SoftSupport), // Earth Spirit
    (108, Role::Offlane),     // Underlord
    (109, Role::HardCarry),   // Terrorblade
    (110, Role::HardSupport), // Phoenix
    (111, Role::HardSupport), // Oracle
    (112, Role::HardSupport), // Winter Wyvern
    (113, Role::HardCarry),   // Arc Warden
    (114, Role::HardCarry),   // Monkey King
    (119, Role::SoftSupport), // Dark Willow
    (120, Role::Offlane),     // Pangolier
    (121, Role::HardSupport), // Grimstroke
    (123, Role::SoftSupport), // Hoodwink
    (126, Role::Core),        // Void Spirit
    (128, Role::SoftSupport), // Snapfire
    (129, Role::Offlane),     // Mars
    (131, Role::SoftSupport), // Ringmaster
    (135, Role::Offlane),     // Dawnbreaker
    (136, Role::HardSupport), // Marci
    (137, Role::Offlane),     // Primal Beast
    (138, Role::HardCarry)    // Muerta
];

lazy_static! {
    static ref HERO_ROLE_TABLE: HashMap<u32, Role> = HERO_ROLES.iter().copied().collect();
}

/// Role played on the given hero; unknown heroes default to Core so the
/// lookup never fails.
pub fn hero_role(hero_id: u32) -> Role {
    HERO_ROLE_TABLE.get(&hero_id).copied().unwrap_or(Role::Core)
}

/// Baseline KDA expected for the given hero's role.
pub fn expected_kda(hero_id: u32) -> f64 {
    hero_role(hero_id).expected_kda()
}
