//! # hearthsim
//!
//! A two-player, turn-based, imperfect-information card game simulator
//! with Monte Carlo Tree Search agents.
//!
//! ## Architecture
//!
//! - **Fixed-capacity zones**: boards, hands, decks, and move lists are
//!   `BoundedVec`s with saturating insertion; gameplay never allocates.
//!
//! - **One legality oracle**: `GameState::update_possible_moves` is the
//!   only code that decides what is playable; `process_move` trusts its
//!   caller and recomputes the set after every move.
//!
//! - **Explicit randomness**: every randomized operation takes a
//!   `&mut GameRng`; seeds only enter at the process boundary.
//!
//! - **Three search engines** over one arena tree: a perfect-information
//!   baseline, determinization sampling, and single-observer
//!   information-set MCTS with availability counts.
//!
//! ## Modules
//!
//! - `core`: `BoundedVec`, `GameRng`
//! - `cards`: catalog, ability flags, effect descriptors
//! - `game`: players, minions, moves, the state machine
//! - `search`: the MCTS family and the `Strategy` seam
//! - `driver`: tournament loop and result aggregation

pub mod cards;
pub mod core;
pub mod driver;
pub mod game;
pub mod search;

pub use crate::core::{BoundedVec, GameRng};

pub use crate::cards::{
    deck_legal_cards, Abilities, Card, CardData, CardKind, EffectDef, EffectKind, Race,
    TargetType,
};

pub use crate::game::{
    GameState, Minion, Move, MoveList, Player, PlayerId, Target, Winner, MAX_BOARD_MINIONS,
    MAX_DECK_CARDS, MAX_HAND_CARDS, MAX_MANA,
};

pub use crate::search::{
    determinize, CheatingMcts, DeterminizedMcts, RandomStrategy, SearchTree, SoIsMcts, Strategy,
};

pub use crate::driver::{
    play_game, run_rounds, run_rounds_parallel, setup_game, AiKind, PairingResults, PlayResults,
    SearchBudget, TournamentConfig,
};
