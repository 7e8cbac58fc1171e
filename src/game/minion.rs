//! Minions on the board: stats, per-turn flags, capability flags, auras.

use crate::cards::{Abilities, CardData};
use crate::core::BoundedVec;

/// Auras a single minion can carry at once.
pub const MAX_AURAS: usize = 4;

/// How long an attached aura lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuraDuration {
    /// Reversed during the next end-of-turn processing.
    EndOfTurn,
    /// Never expires on its own.
    Permanent,
}

/// What an aura modifies, and by how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuraEffect {
    /// Bonus attack, applied on attach and reversed on expiry.
    Attack(u8),
}

/// A timed stat modifier attached to a minion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aura {
    pub effect: AuraEffect,
    pub duration: AuraDuration,
}

/// A minion in play.
///
/// Created when its card is played or summoned by an effect; removed from
/// the board when health drops to zero or below, at which point its
/// deathrattle is queued for resolution.
#[derive(Clone, Debug)]
pub struct Minion {
    pub attack: u8,
    pub health: i8,
    pub max_health: i8,
    pub spell_damage: u8,
    /// Capability flags, copied from the card and mutable afterwards:
    /// divine shield and stealth are consumed by events.
    abilities: Abilities,
    pub attacked_this_turn: bool,
    pub windfury_attack_used: bool,
    pub summoned_this_turn: bool,
    auras: BoundedVec<Aura, MAX_AURAS>,
    source: &'static CardData,
}

impl Minion {
    /// Summon a fresh minion from its card.
    #[must_use]
    pub fn from_card(card: &'static CardData) -> Self {
        Self {
            attack: card.attack,
            health: card.health as i8,
            max_health: card.health as i8,
            spell_damage: card.spell_damage,
            abilities: card.abilities,
            attacked_this_turn: false,
            windfury_attack_used: false,
            summoned_this_turn: true,
            auras: BoundedVec::new(),
            source: card,
        }
    }

    /// The card this minion was summoned from (shared, read-only).
    #[inline]
    #[must_use]
    pub fn source(&self) -> &'static CardData {
        self.source
    }

    /// The minion's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.source.name
    }

    /// True when every flag in `flags` is set.
    #[inline]
    #[must_use]
    pub fn has(&self, flags: Abilities) -> bool {
        self.abilities.contains(flags)
    }

    /// Grant abilities (used by temporary effects and test setups).
    pub fn add_abilities(&mut self, flags: Abilities) {
        self.abilities.insert(flags);
    }

    /// Strip abilities.
    pub fn remove_abilities(&mut self, flags: Abilities) {
        self.abilities.remove(flags);
    }

    /// Whether this minion may declare an attack right now.
    ///
    /// Summoning sickness yields to charge; windfury grants one bonus
    /// attack per turn.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        if self.has(Abilities::CANNOT_ATTACK) {
            return false;
        }
        if self.summoned_this_turn && !self.has(Abilities::CHARGE) {
            return false;
        }
        if !self.attacked_this_turn {
            return true;
        }
        self.has(Abilities::WINDFURY) && !self.windfury_attack_used
    }

    /// Record that an attack was declared: consumes the attack budget and
    /// breaks stealth.
    pub fn note_attacked(&mut self) {
        if self.attacked_this_turn {
            self.windfury_attack_used = true;
        } else {
            self.attacked_this_turn = true;
        }
        self.abilities.remove(Abilities::STEALTH);
    }

    /// Apply one instance of damage. Divine shield absorbs it entirely and
    /// is consumed instead of reducing health.
    pub fn take_damage(&mut self, amount: u8) {
        if self.has(Abilities::DIVINE_SHIELD) {
            self.abilities.remove(Abilities::DIVINE_SHIELD);
        } else {
            self.health = self.health.saturating_sub(amount as i8);
        }
    }

    /// Restore health, never beyond the recorded maximum.
    pub fn heal(&mut self, amount: u8) {
        self.health = self.max_health.min(self.health.saturating_add(amount as i8));
    }

    /// Dead minions are removed from the board by the owning state machine.
    #[inline]
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Reset the per-turn flags at the start of the owner's turn.
    pub fn begin_turn(&mut self) {
        self.attacked_this_turn = false;
        self.windfury_attack_used = false;
        self.summoned_this_turn = false;
    }

    /// Attach an aura and apply its effect.
    ///
    /// The aura list saturates like every other zone; an aura that cannot
    /// be recorded is not applied, so expiry stays consistent.
    pub fn attach_aura(&mut self, aura: Aura) {
        if !self.auras.push(aura) {
            return;
        }
        match aura.effect {
            AuraEffect::Attack(bonus) => self.attack += bonus,
        }
    }

    /// Reverse and remove every end-of-turn aura.
    pub fn expire_end_of_turn_auras(&mut self) {
        let mut i = 0;
        while i < self.auras.len() {
            if self.auras[i].duration == AuraDuration::EndOfTurn {
                let aura = self.auras.remove(i);
                match aura.effect {
                    AuraEffect::Attack(bonus) => self.attack -= bonus,
                }
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn ready(card: Card) -> Minion {
        let mut minion = Minion::from_card(card.data());
        minion.begin_turn();
        minion
    }

    #[test]
    fn test_summoning_sickness() {
        let fresh = Minion::from_card(Card::BloodfenRaptor.data());
        assert!(!fresh.can_attack());

        let charger = Minion::from_card(Card::BluegillWarrior.data());
        assert!(charger.can_attack());

        let mut rested = fresh;
        rested.begin_turn();
        assert!(rested.can_attack());
    }

    #[test]
    fn test_attack_budget() {
        let mut minion = ready(Card::BloodfenRaptor);
        minion.note_attacked();
        assert!(!minion.can_attack());
    }

    #[test]
    fn test_windfury_allows_one_bonus_attack() {
        let mut minion = ready(Card::ThrallmarFarseer);

        minion.note_attacked();
        assert!(minion.can_attack());

        minion.note_attacked();
        assert!(!minion.can_attack());

        minion.begin_turn();
        assert!(minion.can_attack());
    }

    #[test]
    fn test_cannot_attack_flag() {
        let minion = ready(Card::RagnarosTheFirelord);
        assert!(!minion.can_attack());
    }

    #[test]
    fn test_divine_shield_absorbs_first_hit() {
        let mut minion = Minion::from_card(Card::ArgentSquire.data());

        minion.take_damage(3);
        assert_eq!(minion.health, 1);
        assert!(!minion.has(Abilities::DIVINE_SHIELD));

        minion.take_damage(3);
        assert!(minion.is_dead());
    }

    #[test]
    fn test_attacking_breaks_stealth() {
        let mut minion = ready(Card::WorgenInfiltrator);
        assert!(minion.has(Abilities::STEALTH));

        minion.note_attacked();
        assert!(!minion.has(Abilities::STEALTH));
    }

    #[test]
    fn test_heal_caps_at_max_health() {
        let mut minion = Minion::from_card(Card::SenjinShieldmasta.data());
        minion.health = 1;

        minion.heal(2);
        assert_eq!(minion.health, 3);

        minion.heal(50);
        assert_eq!(minion.health, minion.max_health);
    }

    #[test]
    fn test_end_of_turn_aura_expires() {
        let mut minion = ready(Card::BloodfenRaptor);
        minion.attach_aura(Aura {
            effect: AuraEffect::Attack(2),
            duration: AuraDuration::EndOfTurn,
        });
        assert_eq!(minion.attack, 5);

        minion.expire_end_of_turn_auras();
        assert_eq!(minion.attack, 3);
    }

    #[test]
    fn test_permanent_aura_survives_expiry() {
        let mut minion = ready(Card::BloodfenRaptor);
        minion.attach_aura(Aura {
            effect: AuraEffect::Attack(1),
            duration: AuraDuration::Permanent,
        });

        minion.expire_end_of_turn_auras();
        assert_eq!(minion.attack, 4);
    }

    #[test]
    fn test_aura_list_saturates_consistently() {
        let mut minion = ready(Card::BloodfenRaptor);
        for _ in 0..MAX_AURAS + 2 {
            minion.attach_aura(Aura {
                effect: AuraEffect::Attack(1),
                duration: AuraDuration::EndOfTurn,
            });
        }
        assert_eq!(minion.attack, 3 + MAX_AURAS as u8);

        minion.expire_end_of_turn_auras();
        assert_eq!(minion.attack, 3);
    }
}
