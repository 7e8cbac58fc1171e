//! The card catalog: a dense identifier enum and one static data table.
//!
//! `Card` is the opaque identifier the rest of the crate passes around;
//! `Card::data()` is a total lookup into `CATALOG`. The enum and the table
//! are kept in the same order (spells first, then minions by cost), which
//! `catalog_order_matches_enum` pins.
//!
//! The deck-legal list - every card eligible for constructed decks and for
//! hidden-zone resampling - is built once at startup by filtering on
//! `deck_legal`.

use enum_iterator::{all, Sequence};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::abilities::Abilities;
use super::data::{CardData, EffectDef, Race, TargetType};

/// Number of cards in the catalog.
pub const NUM_CARDS: usize = 52;

/// Identifier of a card in the catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sequence,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Card {
    // Spells
    TheCoin,
    HolySmite,
    Whirlwind,

    // 1-mana minions
    AbusiveSergeant,
    ArgentSquire,
    ElvenArcher,
    GoldshireFootman,
    LeperGnome,
    MurlocRaider,
    Shieldbearer,
    StonetuskBoar,
    VoodooDoctor,
    WorgenInfiltrator,
    YoungDragonhawk,
    ZombieChow,

    // 2-mana minions
    AncientWatcher,
    BloodfenRaptor,
    BluegillWarrior,
    FaerieDragon,
    FrostwolfGrunt,
    KoboldGeomancer,
    NoviceEngineer,
    RiverCrocolisk,
    UnstableGhoul,

    // 3-mana minions
    IronfurGrizzly,
    JunglePanther,
    MagmaRager,
    ScarletCrusader,
    ThrallmarFarseer,
    Wolfrider,

    // 4-mana minions
    ChillwindYeti,
    DarkIronDwarf,
    MogushanWarden,
    OasisSnapjaw,
    SenjinShieldmasta,
    StormwindKnight,

    // 5-mana minions
    Abomination,
    AzureDrake,
    Nightblade,
    SpitefulSmith,
    StranglethornTiger,

    // 6-mana minions
    ArgentCommander,
    BoulderfistOgre,
    LordOfTheArena,
    PriestessOfElune,
    RecklessRocketeer,
    Sunwalker,
    WindfuryHarpy,

    // 7-mana minions
    CoreHound,
    RavenholdtAssassin,
    WarGolem,

    // 8-mana minions
    RagnarosTheFirelord,
}

impl Card {
    /// Look up this card's static data. Total: every identifier resolves.
    #[inline]
    #[must_use]
    pub fn data(self) -> &'static CardData {
        &CATALOG[self as usize]
    }

    /// The card's display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static CATALOG: [CardData; NUM_CARDS] = [
    // Spells
    CardData::spell("The Coin", 0, EffectDef::gain_mana(1)).uncollectible(),
    CardData::spell("Holy Smite", 1, EffectDef::damage(2, TargetType::AnyCharacter)),
    CardData::spell("Whirlwind", 1, EffectDef::damage(1, TargetType::AllMinions)),
    // 1-mana minions
    CardData::minion("Abusive Sergeant", 1, 2, 1).with_battlecry(EffectDef::attack_aura(2)),
    CardData::minion("Argent Squire", 1, 1, 1).with_abilities(Abilities::DIVINE_SHIELD),
    CardData::minion("Elven Archer", 1, 1, 1)
        .with_battlecry(EffectDef::damage(1, TargetType::AnyCharacter)),
    CardData::minion("Goldshire Footman", 1, 1, 2).with_abilities(Abilities::TAUNT),
    CardData::minion("Leper Gnome", 1, 2, 1)
        .with_deathrattle(EffectDef::damage(2, TargetType::EnemyHero)),
    CardData::minion("Murloc Raider", 1, 2, 1).with_race(Race::Murloc),
    CardData::minion("Shieldbearer", 1, 0, 4).with_abilities(Abilities::TAUNT),
    CardData::minion("Stonetusk Boar", 1, 1, 1)
        .with_abilities(Abilities::CHARGE)
        .with_race(Race::Beast),
    CardData::minion("Voodoo Doctor", 1, 2, 1)
        .with_battlecry(EffectDef::heal(2, TargetType::AnyCharacter)),
    CardData::minion("Worgen Infiltrator", 1, 2, 1).with_abilities(Abilities::STEALTH),
    CardData::minion("Young Dragonhawk", 1, 1, 1)
        .with_abilities(Abilities::WINDFURY)
        .with_race(Race::Beast),
    CardData::minion("Zombie Chow", 1, 2, 3)
        .with_deathrattle(EffectDef::heal(5, TargetType::EnemyHero)),
    // 2-mana minions
    CardData::minion("Ancient Watcher", 2, 4, 5).with_abilities(Abilities::CANNOT_ATTACK),
    CardData::minion("Bloodfen Raptor", 2, 3, 2).with_race(Race::Beast),
    CardData::minion("Bluegill Warrior", 2, 2, 1)
        .with_abilities(Abilities::CHARGE)
        .with_race(Race::Murloc),
    CardData::minion("Faerie Dragon", 2, 3, 2)
        .with_abilities(Abilities::CANNOT_BE_TARGETED)
        .with_race(Race::Dragon),
    CardData::minion("Frostwolf Grunt", 2, 2, 2).with_abilities(Abilities::TAUNT),
    CardData::minion("Kobold Geomancer", 2, 2, 2).with_spell_damage(1),
    CardData::minion("Novice Engineer", 2, 1, 1).with_battlecry(EffectDef::draw(1)),
    CardData::minion("River Crocolisk", 2, 2, 3).with_race(Race::Beast),
    CardData::minion("Unstable Ghoul", 2, 1, 3)
        .with_abilities(Abilities::TAUNT)
        .with_deathrattle(EffectDef::damage(1, TargetType::AllMinions)),
    // 3-mana minions
    CardData::minion("Ironfur Grizzly", 3, 3, 3)
        .with_abilities(Abilities::TAUNT)
        .with_race(Race::Beast),
    CardData::minion("Jungle Panther", 3, 4, 2)
        .with_abilities(Abilities::STEALTH)
        .with_race(Race::Beast),
    CardData::minion("Magma Rager", 3, 5, 1),
    CardData::minion("Scarlet Crusader", 3, 3, 1).with_abilities(Abilities::DIVINE_SHIELD),
    CardData::minion("Thrallmar Farseer", 3, 2, 3).with_abilities(Abilities::WINDFURY),
    CardData::minion("Wolfrider", 3, 3, 1).with_abilities(Abilities::CHARGE),
    // 4-mana minions
    CardData::minion("Chillwind Yeti", 4, 4, 5),
    CardData::minion("Dark Iron Dwarf", 4, 4, 4).with_battlecry(EffectDef::attack_aura(2)),
    CardData::minion("Mogu'shan Warden", 4, 1, 7).with_abilities(Abilities::TAUNT),
    CardData::minion("Oasis Snapjaw", 4, 2, 7).with_race(Race::Beast),
    CardData::minion("Sen'jin Shieldmasta", 4, 3, 5).with_abilities(Abilities::TAUNT),
    CardData::minion("Stormwind Knight", 4, 2, 5).with_abilities(Abilities::CHARGE),
    // 5-mana minions
    CardData::minion("Abomination", 5, 4, 4)
        .with_abilities(Abilities::TAUNT)
        .with_deathrattle(EffectDef::damage(2, TargetType::AllCharacters)),
    CardData::minion("Azure Drake", 5, 4, 4)
        .with_spell_damage(1)
        .with_battlecry(EffectDef::draw(1))
        .with_race(Race::Dragon),
    CardData::minion("Nightblade", 5, 4, 4)
        .with_battlecry(EffectDef::damage(3, TargetType::EnemyHero)),
    CardData::minion("Spiteful Smith", 5, 4, 6),
    CardData::minion("Stranglethorn Tiger", 5, 5, 5)
        .with_abilities(Abilities::STEALTH)
        .with_race(Race::Beast),
    // 6-mana minions
    CardData::minion("Argent Commander", 6, 4, 2)
        .with_abilities(Abilities::CHARGE.union(Abilities::DIVINE_SHIELD)),
    CardData::minion("Boulderfist Ogre", 6, 6, 7),
    CardData::minion("Lord of the Arena", 6, 6, 5).with_abilities(Abilities::TAUNT),
    CardData::minion("Priestess of Elune", 6, 5, 4)
        .with_battlecry(EffectDef::heal(4, TargetType::OwnHero)),
    CardData::minion("Reckless Rocketeer", 6, 5, 2).with_abilities(Abilities::CHARGE),
    CardData::minion("Sunwalker", 6, 4, 5)
        .with_abilities(Abilities::TAUNT.union(Abilities::DIVINE_SHIELD)),
    CardData::minion("Windfury Harpy", 6, 4, 5).with_abilities(Abilities::WINDFURY),
    // 7-mana minions
    CardData::minion("Core Hound", 7, 9, 5).with_race(Race::Beast),
    CardData::minion("Ravenholdt Assassin", 7, 7, 5).with_abilities(Abilities::STEALTH),
    CardData::minion("War Golem", 7, 7, 7),
    // 8-mana minions
    CardData::minion("Ragnaros the Firelord", 8, 8, 8).with_abilities(Abilities::CANNOT_ATTACK),
];

static DECK_LEGAL: Lazy<Vec<Card>> = Lazy::new(|| {
    all::<Card>().filter(|card| card.data().deck_legal).collect()
});

/// Cards eligible for random decks and hidden-zone sampling.
#[must_use]
pub fn deck_legal_cards() -> &'static [Card] {
    &DECK_LEGAL
}
