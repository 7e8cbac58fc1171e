//! Property checks over randomized games and zones.

use proptest::prelude::*;

use hearthsim::{
    deck_legal_cards, determinize, BoundedVec, Card, GameRng, GameState, Minion, Move,
};

/// Walk a random game for up to `steps` moves, checking the legal-move
/// invariants after every step.
fn check_move_invariants(seed: u64, steps: usize) {
    let mut rng = GameRng::new(seed);
    let legal = deck_legal_cards();

    let mut state = GameState::new();
    for player in &mut state.players {
        for _ in 0..8 {
            player
                .deck
                .push(legal[rng.gen_range_usize(0..legal.len())]);
        }
        for _ in 0..3 {
            player.draw_one();
        }
    }
    state.players[0].mana = 1;
    state.players[0].max_mana = 1;
    state.update_possible_moves();

    for _ in 0..steps {
        if state.winner.is_decided() {
            break;
        }

        let moves = state.possible_moves();
        let end_turns = moves.iter().filter(|&&m| m == Move::EndTurn).count();
        assert_eq!(end_turns, 1, "exactly one EndTurn must be enumerated");

        let mana = state.player(state.active_player).mana;
        for mv in moves.iter() {
            if let Move::PlayCard { card, .. } = mv {
                assert!(
                    card.data().cost <= mana,
                    "unaffordable card enumerated: {card}"
                );
            }
        }

        let pick = rng.gen_range_usize(0..moves.len());
        let mv = moves[pick];
        state.process_move(mv);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn possible_moves_invariants_hold_through_random_games(seed in any::<u64>()) {
        check_move_invariants(seed, 120);
    }

    #[test]
    fn healing_never_exceeds_max_health(
        damage in 1u8..6,
        heals in proptest::collection::vec(1u8..8, 1..6),
    ) {
        let mut minion = Minion::from_card(Card::SenjinShieldmasta.data());
        minion.take_damage(damage);

        for amount in heals {
            minion.heal(amount);
            prop_assert!(minion.health <= minion.max_health);
        }
    }

    #[test]
    fn determinization_preserves_shapes_and_own_deck(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let legal = deck_legal_cards();

        let mut state = GameState::new();
        for player in &mut state.players {
            for _ in 0..10 {
                player.deck.push(legal[rng.gen_range_usize(0..legal.len())]);
            }
            for _ in 0..4 {
                player.draw_one();
            }
        }
        state.update_possible_moves();

        let sampled = determinize(&state, &mut rng);

        prop_assert_eq!(sampled.players[1].hand.len(), state.players[1].hand.len());
        prop_assert_eq!(sampled.players[1].deck.len(), state.players[1].deck.len());

        for card in sampled.players[1].hand.iter().chain(sampled.players[1].deck.iter()) {
            prop_assert!(legal.contains(card));
        }

        let mut original: Vec<Card> = state.players[0].deck.iter().copied().collect();
        let mut shuffled: Vec<Card> = sampled.players[0].deck.iter().copied().collect();
        original.sort();
        shuffled.sort();
        prop_assert_eq!(original, shuffled);
    }

    #[test]
    fn bounded_vec_never_exceeds_capacity(values in proptest::collection::vec(any::<u8>(), 0..40)) {
        let mut v: BoundedVec<u8, 10> = BoundedVec::new();
        for value in &values {
            v.push(*value);
            prop_assert!(v.len() <= 10);
        }

        let expected: Vec<u8> = values.iter().copied().take(10).collect();
        prop_assert_eq!(v.as_slice(), expected.as_slice());
    }
}
