//! Hidden-zone resampling.
//!
//! From the active player's point of view the opponent's hand and deck are
//! hidden. Determinization replaces every hidden card with a uniform draw
//! from the deck-legal list and shuffles the active player's own deck
//! (its contents are known, only the order is not), yielding a
//! self-consistent fully-observable state for perfect-information search.

use crate::cards::deck_legal_cards;
use crate::core::GameRng;
use crate::game::GameState;

/// Sample a fully-observable state consistent with what the active player
/// can see. Each call resamples independently.
#[must_use]
pub fn determinize(state: &GameState, rng: &mut GameRng) -> GameState {
    let mut sampled = state.clone();
    let opponent = sampled.active_player.opponent();
    let legal = deck_legal_cards();

    let hand = &mut sampled.player_mut(opponent).hand;
    for i in 0..hand.len() {
        hand[i] = legal[rng.gen_range_usize(0..legal.len())];
    }

    let own = sampled.active_player;
    sampled.player_mut(own).deck.shuffle(rng);

    let deck = &mut sampled.player_mut(opponent).deck;
    for i in 0..deck.len() {
        deck[i] = legal[rng.gen_range_usize(0..legal.len())];
    }

    // The move set cannot depend on hidden zones today; recompute anyway so
    // a future rule coupling legality to them cannot go stale here.
    sampled.update_possible_moves();
    sampled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hidden_state() -> GameState {
        let mut state = GameState::new();
        for _ in 0..4 {
            state.players[1].hand.push(Card::TheCoin);
        }
        for _ in 0..10 {
            state.players[0].deck.push(Card::WarGolem);
            state.players[1].deck.push(Card::TheCoin);
        }
        state.update_possible_moves();
        state
    }

    #[test]
    fn test_cardinalities_are_preserved() {
        let state = hidden_state();
        let sampled = determinize(&state, &mut GameRng::new(1));

        assert_eq!(sampled.players[1].hand.len(), 4);
        assert_eq!(sampled.players[1].deck.len(), 10);
        assert_eq!(sampled.players[0].deck.len(), 10);
    }

    #[test]
    fn test_opponent_zones_are_resampled_from_legal_list() {
        let state = hidden_state();
        let sampled = determinize(&state, &mut GameRng::new(1));

        let legal = deck_legal_cards();
        for card in sampled.players[1].hand.iter().chain(sampled.players[1].deck.iter()) {
            assert!(legal.contains(card));
            assert_ne!(*card, Card::TheCoin);
        }
    }

    #[test]
    fn test_own_deck_is_a_permutation() {
        let mut state = hidden_state();
        state.players[0].deck.clear();
        let original = [
            Card::WarGolem,
            Card::MurlocRaider,
            Card::ChillwindYeti,
            Card::OasisSnapjaw,
            Card::BoulderfistOgre,
        ];
        for card in original {
            state.players[0].deck.push(card);
        }
        state.update_possible_moves();

        let sampled = determinize(&state, &mut GameRng::new(3));

        let mut expected: Vec<Card> = original.to_vec();
        let mut actual: Vec<Card> = sampled.players[0].deck.iter().copied().collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_different_seeds_generally_differ() {
        let state = hidden_state();
        let a = determinize(&state, &mut GameRng::new(1));
        let b = determinize(&state, &mut GameRng::new(2));

        assert_ne!(
            a.players[1].deck.as_slice(),
            b.players[1].deck.as_slice()
        );
    }
}
