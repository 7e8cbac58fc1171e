//! The move vocabulary.
//!
//! `Move` carries everything needed to apply it: attacks name board
//! indices, card plays name the `Card` value (resolution locates it in
//! hand) plus a packed `Target`. The derived total order backs per-node
//! move de-duplication in search and deterministic tie-breaking in tests.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::BoundedVec;

use super::player::{PlayerId, MAX_BOARD_MINIONS, MAX_HAND_CARDS};

/// Upper bound on simultaneously legal moves: one end-turn, every minion
/// attacking every opposing character, every hand card aimed at every
/// character.
pub const MAX_MOVES: usize =
    1 + MAX_BOARD_MINIONS * (MAX_BOARD_MINIONS + 1) + MAX_HAND_CARDS * (2 + 2 * MAX_BOARD_MINIONS);

/// The legal-move set of a state.
pub type MoveList = BoundedVec<Move, MAX_MOVES>;

/// Packed effect target: nothing, a hero, or a minion by board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Target {
    None,
    Hero(PlayerId),
    Minion { owner: PlayerId, index: u8 },
}

/// One action available to the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    EndTurn,
    AttackHero { attacker: u8 },
    AttackMinion { attacker: u8, defender: u8 },
    PlayCard { card: Card, target: Target },
}

impl Move {
    /// Attack the opposing hero with the minion at `attacker`.
    #[must_use]
    pub const fn attack_hero(attacker: u8) -> Self {
        Move::AttackHero { attacker }
    }

    /// Attack the opposing minion at `defender` with the minion at
    /// `attacker`.
    #[must_use]
    pub const fn attack_minion(attacker: u8, defender: u8) -> Self {
        Move::AttackMinion { attacker, defender }
    }

    /// Play `card` without a target.
    #[must_use]
    pub const fn play(card: Card) -> Self {
        Move::PlayCard {
            card,
            target: Target::None,
        }
    }

    /// Play `card` at the given target.
    #[must_use]
    pub const fn play_at(card: Card, target: Target) -> Self {
        Move::PlayCard { card, target }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::EndTurn => write!(f, "end turn"),
            Move::AttackHero { attacker } => write!(f, "attack hero with minion {attacker}"),
            Move::AttackMinion { attacker, defender } => {
                write!(f, "attack minion {defender} with minion {attacker}")
            }
            Move::PlayCard { card, target } => match target {
                Target::None => write!(f, "play {card}"),
                Target::Hero(player) => write!(f, "play {card} on {player}'s hero"),
                Target::Minion { owner, index } => {
                    write!(f, "play {card} on {owner}'s minion {index}")
                }
            },
        }
    }
}
