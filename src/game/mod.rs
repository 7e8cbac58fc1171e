//! The game state machine: players, minions, moves, and the rules that
//! connect them.
//!
//! `GameState` is the public surface: construct one, seed the legal-move
//! set, then alternate `process_move` calls until `winner` is decided.

pub mod minion;
pub mod moves;
pub mod player;
pub mod state;

pub use minion::{Aura, AuraDuration, AuraEffect, Minion, MAX_AURAS};
pub use moves::{Move, MoveList, Target, MAX_MOVES};
pub use player::{
    Player, PlayerId, MAX_BOARD_MINIONS, MAX_DECK_CARDS, MAX_HAND_CARDS, MAX_MANA,
};
pub use state::{GameState, Winner};
