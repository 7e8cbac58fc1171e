//! Static card data.
//!
//! `CardData` is the immutable description of a card: cost, stats, ability
//! flags, and effect descriptors for its battlecry, deathrattle, or spell
//! text. Runtime state (a minion's current health, consumed shields) lives
//! on `Minion`; this module never changes after startup.
//!
//! Effects are plain data dispatched by exhaustive `match` in the state
//! machine, so adding an `EffectKind` variant fails to compile until every
//! resolution site handles it.

use serde::{Deserialize, Serialize};

use super::abilities::Abilities;

/// Whether a card summons a minion or resolves as a one-shot spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Minion,
    Spell,
}

/// Minion tribe tag. Not consulted by any current effect, but part of the
/// card data so tribal cards slot in without a schema change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    #[default]
    None,
    Beast,
    Murloc,
    Dragon,
}

/// What an effect may aim at, and therefore which moves get enumerated
/// when the card is playable.
///
/// `EnemyHero` and `OwnHero` enumerate exactly one move each; `AllMinions`
/// and `AllCharacters` (like `None`) enumerate a single untargeted move. A
/// card whose effect wants `AnyMinion` contributes no move at all when no
/// legal minion target exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetType {
    None,
    AnyCharacter,
    AnyMinion,
    EnemyHero,
    OwnHero,
    AllMinions,
    AllCharacters,
}

/// The curated set of effect primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Add mana crystals this turn (may exceed the refill cap transiently).
    GainMana,
    /// Draw cards; silently a no-op on an empty deck.
    DrawCards,
    /// Deal damage. Spell damage boosts this for spells only.
    Damage,
    /// Restore health, capped at the target's maximum.
    Heal,
    /// Attach an until-end-of-turn attack bonus to a minion.
    AttackAura,
}

/// One effect: kind, magnitude, and targeting requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDef {
    pub kind: EffectKind,
    pub magnitude: u8,
    pub target: TargetType,
}

impl EffectDef {
    /// Deal `amount` damage subject to `target`.
    #[must_use]
    pub const fn damage(amount: u8, target: TargetType) -> Self {
        Self {
            kind: EffectKind::Damage,
            magnitude: amount,
            target,
        }
    }

    /// Restore `amount` health subject to `target`.
    #[must_use]
    pub const fn heal(amount: u8, target: TargetType) -> Self {
        Self {
            kind: EffectKind::Heal,
            magnitude: amount,
            target,
        }
    }

    /// Draw `count` cards for the acting player.
    #[must_use]
    pub const fn draw(count: u8) -> Self {
        Self {
            kind: EffectKind::DrawCards,
            magnitude: count,
            target: TargetType::OwnHero,
        }
    }

    /// Gain `amount` mana this turn.
    #[must_use]
    pub const fn gain_mana(amount: u8) -> Self {
        Self {
            kind: EffectKind::GainMana,
            magnitude: amount,
            target: TargetType::OwnHero,
        }
    }

    /// Give a minion `+amount` attack until end of turn.
    #[must_use]
    pub const fn attack_aura(amount: u8) -> Self {
        Self {
            kind: EffectKind::AttackAura,
            magnitude: amount,
            target: TargetType::AnyMinion,
        }
    }
}

/// Immutable description of one card.
#[derive(Clone, Copy, Debug)]
pub struct CardData {
    pub name: &'static str,
    pub kind: CardKind,
    pub cost: u8,
    pub attack: u8,
    pub health: u8,
    pub abilities: Abilities,
    pub race: Race,
    /// Contribution to the owner's spell-damage rating while on the board.
    pub spell_damage: u8,
    /// Resolved when the minion is played from hand.
    pub battlecry: Option<EffectDef>,
    /// Queued when the minion dies, resolved after the triggering action.
    pub deathrattle: Option<EffectDef>,
    /// The effect of a spell card.
    pub spell_effect: Option<EffectDef>,
    /// Eligible for constructed decks and hidden-zone sampling.
    pub deck_legal: bool,
}

impl CardData {
    /// A vanilla minion; refine with the `with_*` builders.
    #[must_use]
    pub const fn minion(name: &'static str, cost: u8, attack: u8, health: u8) -> Self {
        Self {
            name,
            kind: CardKind::Minion,
            cost,
            attack,
            health,
            abilities: Abilities::NONE,
            race: Race::None,
            spell_damage: 0,
            battlecry: None,
            deathrattle: None,
            spell_effect: None,
            deck_legal: true,
        }
    }

    /// A spell card.
    #[must_use]
    pub const fn spell(name: &'static str, cost: u8, effect: EffectDef) -> Self {
        Self {
            name,
            kind: CardKind::Spell,
            cost,
            attack: 0,
            health: 0,
            abilities: Abilities::NONE,
            race: Race::None,
            spell_damage: 0,
            battlecry: None,
            deathrattle: None,
            spell_effect: Some(effect),
            deck_legal: true,
        }
    }

    #[must_use]
    pub const fn with_abilities(mut self, abilities: Abilities) -> Self {
        self.abilities = abilities;
        self
    }

    #[must_use]
    pub const fn with_race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    #[must_use]
    pub const fn with_spell_damage(mut self, amount: u8) -> Self {
        self.spell_damage = amount;
        self
    }

    #[must_use]
    pub const fn with_battlecry(mut self, effect: EffectDef) -> Self {
        self.battlecry = Some(effect);
        self
    }

    #[must_use]
    pub const fn with_deathrattle(mut self, effect: EffectDef) -> Self {
        self.deathrattle = Some(effect);
        self
    }

    /// Exclude from constructed decks (e.g. The Coin).
    #[must_use]
    pub const fn uncollectible(mut self) -> Self {
        self.deck_legal = false;
        self
    }

    /// The targeting requirement that governs move enumeration for this
    /// card: the spell effect's for spells, the battlecry's for minions.
    #[must_use]
    pub fn target_type(&self) -> TargetType {
        let effect = match self.kind {
            CardKind::Spell => self.spell_effect,
            CardKind::Minion => self.battlecry,
        };
        effect.map_or(TargetType::None, |e| e.target)
    }
}
