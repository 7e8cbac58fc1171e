//! Players: hero health, mana, and the three zones (hand, deck, board).

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::BoundedVec;

use super::minion::Minion;

/// Board slots per player.
pub const MAX_BOARD_MINIONS: usize = 7;
/// Hand size; cards drawn into a full hand are burned.
pub const MAX_HAND_CARDS: usize = 10;
/// Constructed deck size.
pub const MAX_DECK_CARDS: usize = 30;
/// Mana crystal ceiling reached by the refill at end of turn.
pub const MAX_MANA: u8 = 10;

/// One of the two seats in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(0);
    pub const TWO: PlayerId = PlayerId(1);

    /// Zero-based seat index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player game state.
///
/// Health may go negative transiently; every health-modifying code path in
/// the state machine runs a victory check immediately afterwards.
#[derive(Clone, Debug)]
pub struct Player {
    pub health: i8,
    pub mana: u8,
    pub max_mana: u8,
    pub hand: BoundedVec<Card, MAX_HAND_CARDS>,
    pub deck: BoundedVec<Card, MAX_DECK_CARDS>,
    pub board: BoundedVec<Minion, MAX_BOARD_MINIONS>,
}

impl Player {
    /// A fresh player: full health, no mana, empty zones.
    #[must_use]
    pub fn new(starting_health: i8) -> Self {
        Self {
            health: starting_health,
            mana: 0,
            max_mana: 0,
            hand: BoundedVec::new(),
            deck: BoundedVec::new(),
            board: BoundedVec::new(),
        }
    }

    /// Draw the top (back) card of the deck into the hand.
    ///
    /// A no-op on an empty deck - fatigue damage is deliberately not
    /// modeled. A full hand burns the card via the hand's saturating push.
    pub fn draw_one(&mut self) {
        if let Some(card) = self.deck.pop() {
            self.hand.push(card);
        }
    }

    /// Total spell-damage rating: the sum over this player's board.
    #[must_use]
    pub fn spell_damage(&self) -> u8 {
        self.board.iter().map(|m| m.spell_damage).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_opponent() {
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 0");
    }

    #[test]
    fn test_draw_from_back_of_deck() {
        let mut player = Player::new(30);
        player.deck.push(Card::MurlocRaider);
        player.deck.push(Card::WarGolem);

        player.draw_one();
        assert_eq!(player.hand.as_slice(), &[Card::WarGolem]);
        assert_eq!(player.deck.as_slice(), &[Card::MurlocRaider]);
    }

    #[test]
    fn test_draw_from_empty_deck_is_noop() {
        let mut player = Player::new(30);
        player.draw_one();

        assert!(player.hand.is_empty());
    }

    #[test]
    fn test_draw_into_full_hand_burns_card() {
        let mut player = Player::new(30);
        for _ in 0..MAX_HAND_CARDS {
            player.hand.push(Card::MurlocRaider);
        }
        player.deck.push(Card::WarGolem);

        player.draw_one();

        assert_eq!(player.hand.len(), MAX_HAND_CARDS);
        assert!(!player.hand.contains(&Card::WarGolem));
        assert!(player.deck.is_empty());
    }

    #[test]
    fn test_spell_damage_sums_board() {
        let mut player = Player::new(30);
        player.board.push(Minion::from_card(Card::AzureDrake.data()));
        player.board.push(Minion::from_card(Card::KoboldGeomancer.data()));
        player.board.push(Minion::from_card(Card::ChillwindYeti.data()));

        assert_eq!(player.spell_damage(), 2);
    }
}
