//! Tournament driver: repeatedly plays games between strategy pairings
//! and aggregates win/loss/draw tallies.
//!
//! Each round plays the full pairing grid (every strategy as player one
//! against every strategy as player two) on a shared random deck that is
//! refreshed every ten rounds. The parallel variant hands each worker a
//! batch of rounds, its own forked RNG, and a private results grid;
//! merging the grids after the workers join is the only synchronization.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cards::{deck_legal_cards, Card};
use crate::core::GameRng;
use crate::game::{GameState, PlayerId, Winner, MAX_DECK_CARDS};
use crate::search::{CheatingMcts, DeterminizedMcts, RandomStrategy, SoIsMcts, Strategy};

/// Rounds played on one random deck before drawing a new one.
const ROUNDS_PER_DECK: u32 = 10;

/// The strategies competing in a tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiKind {
    Random,
    Cheating,
    Determinized,
    SoIsMcts,
}

impl AiKind {
    /// Every competitor, in grid order.
    pub const ALL: [AiKind; 4] = [
        AiKind::Random,
        AiKind::Cheating,
        AiKind::Determinized,
        AiKind::SoIsMcts,
    ];

    /// Short display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AiKind::Random => "Random",
            AiKind::Cheating => "CheatingMCTS",
            AiKind::Determinized => "DetMCTS",
            AiKind::SoIsMcts => "SO-IS-MCTS",
        }
    }

    fn index(self) -> usize {
        match self {
            AiKind::Random => 0,
            AiKind::Cheating => 1,
            AiKind::Determinized => 2,
            AiKind::SoIsMcts => 3,
        }
    }
}

/// Search budgets handed to the engines.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SearchBudget {
    /// Iterations for Cheating MCTS and SO-ISMCTS.
    pub iterations: u32,
    /// Determinization count for Determinized MCTS.
    pub determinizations: u32,
    /// Iterations per determinization for Determinized MCTS.
    pub determinized_iterations: u32,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            iterations: 1000,
            determinizations: 10,
            determinized_iterations: 100,
        }
    }
}

/// Tournament parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub rounds: u32,
    pub seed: u64,
    pub budget: SearchBudget,
}

/// Tallies for one (player one, player two) pairing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingResults {
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub draws: u32,
}

/// The full pairing grid of tallies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResults {
    grid: [[PairingResults; AiKind::ALL.len()]; AiKind::ALL.len()],
}

impl PlayResults {
    /// Record one game outcome.
    pub fn record(&mut self, player_one: AiKind, player_two: AiKind, winner: Winner) {
        let cell = &mut self.grid[player_one.index()][player_two.index()];
        match winner {
            Winner::PlayerOne => cell.player_one_wins += 1,
            Winner::PlayerTwo => cell.player_two_wins += 1,
            Winner::Draw => cell.draws += 1,
            Winner::Undetermined => {}
        }
    }

    /// Tallies for one pairing.
    #[must_use]
    pub fn pairing(&self, player_one: AiKind, player_two: AiKind) -> &PairingResults {
        &self.grid[player_one.index()][player_two.index()]
    }

    /// Sum another grid into this one, field by field.
    pub fn merge(&mut self, other: &PlayResults) {
        for (row, other_row) in self.grid.iter_mut().zip(other.grid.iter()) {
            for (cell, other_cell) in row.iter_mut().zip(other_row.iter()) {
                cell.player_one_wins += other_cell.player_one_wins;
                cell.player_two_wins += other_cell.player_two_wins;
                cell.draws += other_cell.draws;
            }
        }
    }

    /// Iterate over every pairing with at least one recorded game.
    pub fn played_pairings(&self) -> impl Iterator<Item = (AiKind, AiKind, &PairingResults)> {
        AiKind::ALL.into_iter().flat_map(move |one| {
            AiKind::ALL.into_iter().filter_map(move |two| {
                let cell = self.pairing(one, two);
                let total = cell.player_one_wins + cell.player_two_wins + cell.draws;
                (total > 0).then_some((one, two, cell))
            })
        })
    }

    /// Total games recorded.
    #[must_use]
    pub fn total_games(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .map(|c| c.player_one_wins + c.player_two_wins + c.draws)
            .sum()
    }
}

/// Draw a random 30-card deck from the deck-legal list.
#[must_use]
pub fn random_deck(rng: &mut GameRng) -> [Card; MAX_DECK_CARDS] {
    let legal = deck_legal_cards();
    let mut deck = [legal[0]; MAX_DECK_CARDS];
    for slot in &mut deck {
        *slot = legal[rng.gen_range_usize(0..legal.len())];
    }
    deck
}

/// Deal the opening position: both players on `deck`, four cards drawn
/// each, player one starting with one mana, player two compensated with
/// The Coin.
#[must_use]
pub fn setup_game(deck: &[Card; MAX_DECK_CARDS], rng: &mut GameRng) -> GameState {
    let mut game = GameState::new();

    for player in &mut game.players {
        player.deck.assign(deck);
        player.deck.shuffle(rng);
        for _ in 0..4 {
            player.draw_one();
        }
    }
    game.players[0].mana = 1;
    game.players[0].max_mana = 1;
    game.players[1].hand.push(Card::TheCoin);

    game.update_possible_moves();
    game
}

fn make_strategy(kind: AiKind, budget: SearchBudget, rng: &mut GameRng) -> Box<dyn Strategy> {
    let seed = rng.fork().seed();
    match kind {
        AiKind::Random => Box::new(RandomStrategy::new(seed)),
        AiKind::Cheating => Box::new(CheatingMcts::new(budget.iterations, seed)),
        AiKind::Determinized => Box::new(DeterminizedMcts::new(
            budget.determinizations,
            budget.determinized_iterations,
            seed,
        )),
        AiKind::SoIsMcts => Box::new(SoIsMcts::new(budget.iterations, seed)),
    }
}

/// Play one game between two strategies, returning the outcome.
#[must_use]
pub fn play_game(
    player_one: AiKind,
    player_two: AiKind,
    deck: &[Card; MAX_DECK_CARDS],
    budget: SearchBudget,
    rng: &mut GameRng,
) -> Winner {
    let mut game = setup_game(deck, rng);
    let mut one = make_strategy(player_one, budget, rng);
    let mut two = make_strategy(player_two, budget, rng);

    while !game.winner.is_decided() {
        let mv = if game.active_player == PlayerId::ONE {
            one.choose_move(&game)
        } else {
            two.choose_move(&game)
        };
        game.process_move(mv);
    }

    game.winner
}

/// Run `config.rounds` rounds serially, each round playing the full
/// pairing grid.
#[must_use]
pub fn run_rounds(config: TournamentConfig) -> PlayResults {
    let mut rng = GameRng::new(config.seed);
    let mut results = PlayResults::default();
    let mut deck = random_deck(&mut rng);

    for round in 0..config.rounds {
        if round > 0 && round % ROUNDS_PER_DECK == 0 {
            deck = random_deck(&mut rng);
        }
        for player_one in AiKind::ALL {
            for player_two in AiKind::ALL {
                let winner = play_game(player_one, player_two, &deck, config.budget, &mut rng);
                results.record(player_one, player_two, winner);
            }
        }
    }

    results
}

/// Run the same tournament across rayon workers.
///
/// Rounds are split into deck-aligned batches; every batch owns a forked
/// RNG and a private grid, and the grids are summed after the join.
#[must_use]
pub fn run_rounds_parallel(config: TournamentConfig) -> PlayResults {
    let mut rng = GameRng::new(config.seed);

    let mut batches = Vec::new();
    let mut remaining = config.rounds;
    while remaining > 0 {
        let rounds = remaining.min(ROUNDS_PER_DECK);
        batches.push(TournamentConfig {
            rounds,
            seed: rng.fork().seed(),
            budget: config.budget,
        });
        remaining -= rounds;
    }

    batches
        .into_par_iter()
        .map(run_rounds)
        .reduce(PlayResults::default, |mut total, batch| {
            total.merge(&batch);
            total
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_budget() -> SearchBudget {
        SearchBudget {
            iterations: 4,
            determinizations: 1,
            determinized_iterations: 4,
        }
    }

    #[test]
    fn test_setup_deals_four_cards_and_the_coin() {
        let mut rng = GameRng::new(1);
        let deck = random_deck(&mut rng);
        let game = setup_game(&deck, &mut rng);

        assert_eq!(game.players[0].hand.len(), 4);
        assert_eq!(game.players[0].deck.len(), 26);
        assert_eq!(game.players[0].mana, 1);
        assert_eq!(game.players[1].hand.len(), 5);
        assert!(game.players[1].hand.contains(&Card::TheCoin));
        assert_eq!(game.players[1].mana, 0);
    }

    #[test]
    fn test_record_and_merge() {
        let mut a = PlayResults::default();
        a.record(AiKind::Random, AiKind::Cheating, Winner::PlayerOne);
        a.record(AiKind::Random, AiKind::Cheating, Winner::Draw);

        let mut b = PlayResults::default();
        b.record(AiKind::Random, AiKind::Cheating, Winner::PlayerTwo);

        a.merge(&b);
        let cell = a.pairing(AiKind::Random, AiKind::Cheating);

        assert_eq!(cell.player_one_wins, 1);
        assert_eq!(cell.player_two_wins, 1);
        assert_eq!(cell.draws, 1);
        assert_eq!(a.total_games(), 3);
    }

    #[test]
    fn test_random_pairing_completes() {
        let mut rng = GameRng::new(5);
        let deck = random_deck(&mut rng);

        let winner = play_game(AiKind::Random, AiKind::Random, &deck, tiny_budget(), &mut rng);

        assert_ne!(winner, Winner::Undetermined);
    }

    #[test]
    fn test_parallel_matches_serial_batch_sum() {
        let config = TournamentConfig {
            rounds: 1,
            seed: 99,
            budget: tiny_budget(),
        };

        // The parallel split forks one batch seed per deck-aligned chunk;
        // with fewer rounds than a chunk there is exactly one batch, so
        // the grids must agree exactly.
        let mut rng = GameRng::new(config.seed);
        let serial = run_rounds(TournamentConfig {
            rounds: 1,
            seed: rng.fork().seed(),
            budget: config.budget,
        });
        let parallel = run_rounds_parallel(config);

        assert_eq!(serial, parallel);
        assert_eq!(parallel.total_games(), 16);
    }
}
