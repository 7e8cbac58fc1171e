//! The authoritative state of one game in progress.
//!
//! `GameState` owns both players, the turn, the winner, and the current
//! legal-move set. `update_possible_moves` is the single source of truth
//! for legality: `process_move` assumes its argument is a member of
//! `possible_moves` and recomputes the set after every successful move.
//! Submitting a move that is not in the set is a caller bug; the core does
//! not validate beyond a `debug_assert!`.
//!
//! Deathrattles triggered mid-resolution go onto a pending queue and are
//! applied FIFO after the triggering action completes, before the move set
//! is rebuilt. Effects queued while draining join the same pass.

use smallvec::SmallVec;

use serde::{Deserialize, Serialize};

use crate::cards::{Abilities, Card, CardKind, EffectDef, EffectKind, TargetType};
use crate::core::GameRng;

use super::minion::{Aura, AuraDuration, AuraEffect, Minion};
use super::moves::{Move, MoveList, Target};
use super::player::{Player, PlayerId, MAX_MANA};

/// Outcome of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Undetermined,
    PlayerOne,
    PlayerTwo,
    Draw,
}

impl Winner {
    /// The winner value for the given seat.
    #[must_use]
    pub const fn for_player(player: PlayerId) -> Winner {
        match player.0 {
            0 => Winner::PlayerOne,
            _ => Winner::PlayerTwo,
        }
    }

    /// True once the game is over (win or draw).
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Winner::Undetermined)
    }
}

/// A deathrattle waiting to resolve, with the seat that owned the minion.
#[derive(Clone, Copy, Debug)]
struct PendingEffect {
    owner: PlayerId,
    effect: EffectDef,
}

/// One game in progress. A plain value: determinization and search clone
/// it freely.
#[derive(Clone, Debug)]
pub struct GameState {
    pub players: [Player; 2],
    pub active_player: PlayerId,
    pub winner: Winner,
    possible_moves: MoveList,
    pending: SmallVec<[PendingEffect; 8]>,
}

impl GameState {
    /// Hero starting (and maximum) health.
    pub const STARTING_HEALTH: i8 = 30;

    /// A fresh game: both heroes at full health, player one to act, empty
    /// zones, and `possible_moves == {EndTurn}`.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            players: [
                Player::new(Self::STARTING_HEALTH),
                Player::new(Self::STARTING_HEALTH),
            ],
            active_player: PlayerId::ONE,
            winner: Winner::Undetermined,
            possible_moves: MoveList::new(),
            pending: SmallVec::new(),
        };
        state.update_possible_moves();
        state
    }

    /// The player in the given seat.
    #[inline]
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to the player in the given seat.
    #[inline]
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The current legal-move set.
    #[inline]
    #[must_use]
    pub fn possible_moves(&self) -> &MoveList {
        &self.possible_moves
    }

    /// Membership test against the current legal-move set.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.possible_moves.contains(&mv)
    }

    /// Rebuild the legal-move set from scratch.
    ///
    /// Attack moves honor taunt-gating and stealth; card plays enumerate
    /// targets per the card's targeting requirement; exactly one `EndTurn`
    /// is always present.
    pub fn update_possible_moves(&mut self) {
        let attacker_id = self.active_player;
        let defender_id = attacker_id.opponent();
        let attacker = self.player(attacker_id);
        let defender = self.player(defender_id);

        let mut moves = MoveList::new();

        // A visible taunt minion restricts attacks to taunt minions only
        // and shields the hero. Stealthed taunts gate nothing.
        let taunt_gate = defender
            .board
            .iter()
            .any(|m| m.has(Abilities::TAUNT) && !m.has(Abilities::STEALTH));

        for (i, minion) in attacker.board.iter().enumerate() {
            if !minion.can_attack() {
                continue;
            }
            for (j, target) in defender.board.iter().enumerate() {
                if target.has(Abilities::STEALTH) {
                    continue;
                }
                if taunt_gate && !target.has(Abilities::TAUNT) {
                    continue;
                }
                moves.push(Move::attack_minion(i as u8, j as u8));
            }
            if !taunt_gate {
                moves.push(Move::attack_hero(i as u8));
            }
        }

        for &card in attacker.hand.iter() {
            let data = card.data();
            if data.cost > attacker.mana {
                continue;
            }
            match data.target_type() {
                TargetType::None | TargetType::AllMinions | TargetType::AllCharacters => {
                    push_unique(&mut moves, Move::play(card));
                }
                TargetType::EnemyHero => {
                    push_unique(&mut moves, Move::play_at(card, Target::Hero(defender_id)));
                }
                TargetType::OwnHero => {
                    push_unique(&mut moves, Move::play_at(card, Target::Hero(attacker_id)));
                }
                TargetType::AnyCharacter => {
                    push_unique(&mut moves, Move::play_at(card, Target::Hero(attacker_id)));
                    push_unique(&mut moves, Move::play_at(card, Target::Hero(defender_id)));
                    push_minion_targets(&mut moves, card, attacker_id, self);
                }
                TargetType::AnyMinion => {
                    // Zero legal targets: the card contributes no move.
                    push_minion_targets(&mut moves, card, attacker_id, self);
                }
            }
        }

        moves.push(Move::EndTurn);
        self.possible_moves = moves;
    }

    /// Apply a move the caller has verified is legal, drain any queued
    /// deathrattles, and rebuild the legal-move set.
    pub fn process_move(&mut self, mv: Move) {
        debug_assert!(self.is_legal(mv), "illegal move submitted: {mv}");

        match mv {
            Move::EndTurn => self.end_turn(),
            Move::AttackHero { attacker } => self.attack_hero(attacker),
            Move::AttackMinion { attacker, defender } => self.attack_minion(attacker, defender),
            Move::PlayCard { card, target } => self.play_card(card, target),
        }

        self.drain_pending_effects();
        self.update_possible_moves();
    }

    /// Play uniformly random legal moves until the game is decided.
    pub fn play_out_randomly(&mut self, rng: &mut GameRng) {
        while !self.winner.is_decided() {
            let index = rng.gen_range_usize(0..self.possible_moves.len());
            let mv = self.possible_moves[index];
            self.process_move(mv);
        }
    }

    fn end_turn(&mut self) {
        // Buffs granted this turn must be gone once the opponent acts, so
        // end-of-turn auras expire across both boards before the swap.
        for player in &mut self.players {
            for minion in player.board.iter_mut() {
                minion.expire_end_of_turn_auras();
            }
        }

        self.active_player = self.active_player.opponent();
        let active = &mut self.players[self.active_player.index()];
        active.draw_one();
        active.max_mana = MAX_MANA.min(active.max_mana + 1);
        active.mana = active.max_mana;
        for minion in active.board.iter_mut() {
            minion.begin_turn();
        }

        // Stand-in for fatigue: simultaneous exhaustion is a draw.
        if self.players[0].deck.is_empty() && self.players[1].deck.is_empty() {
            self.winner = Winner::Draw;
        }
    }

    fn attack_hero(&mut self, attacker: u8) {
        let attacker_seat = self.active_player.index();
        let defender_seat = self.active_player.opponent().index();
        let attacker = attacker as usize;

        self.players[attacker_seat].board[attacker].note_attacked();
        let damage = self.players[attacker_seat].board[attacker].attack;
        let health = &mut self.players[defender_seat].health;
        *health = health.saturating_sub(damage as i8);

        // Hero attacks decide the game inline: only the defender can die.
        if self.players[defender_seat].health <= 0 {
            self.winner = Winner::for_player(self.active_player);
        }
    }

    fn attack_minion(&mut self, attacker: u8, defender: u8) {
        let attacker_seat = self.active_player.index();
        let defender_seat = self.active_player.opponent().index();
        let attacker = attacker as usize;
        let defender = defender as usize;

        // Both minions strike simultaneously.
        let attack_power = self.players[attacker_seat].board[attacker].attack;
        let counter_power = self.players[defender_seat].board[defender].attack;
        self.players[attacker_seat].board[attacker].take_damage(counter_power);
        self.players[defender_seat].board[defender].take_damage(attack_power);
        self.players[attacker_seat].board[attacker].note_attacked();

        // Death checks run attacker first, then defender: when both die in
        // the trade, the attacker's deathrattle is queued first.
        if self.players[attacker_seat].board[attacker].is_dead() {
            let dead = self.players[attacker_seat].board.remove(attacker);
            self.queue_deathrattle(self.active_player, &dead);
        }
        if self.players[defender_seat].board[defender].is_dead() {
            let dead = self.players[defender_seat].board.remove(defender);
            self.queue_deathrattle(self.active_player.opponent(), &dead);
        }
    }

    fn play_card(&mut self, card: Card, target: Target) {
        let data = card.data();
        let seat = self.active_player.index();

        let Some(index) = self.players[seat].hand.position(&card) else {
            debug_assert!(false, "played card not in hand: {card}");
            return;
        };
        self.players[seat].hand.swap_remove(index);
        self.players[seat].mana -= data.cost;

        match data.kind {
            CardKind::Minion => {
                self.players[seat].board.push(Minion::from_card(data));
                if let Some(battlecry) = data.battlecry {
                    // Battlecries are never boosted by spell damage.
                    self.resolve_effect(self.active_player, battlecry, target, 0);
                }
            }
            CardKind::Spell => {
                let boost = self.players[seat].spell_damage();
                if let Some(effect) = data.spell_effect {
                    self.resolve_effect(self.active_player, effect, target, boost);
                }
            }
        }
    }

    /// Apply one effect for `source` at the given resolved target.
    ///
    /// `spell_boost` is non-zero only when a spell is the source; it raises
    /// damage magnitudes and nothing else.
    fn resolve_effect(
        &mut self,
        source: PlayerId,
        effect: EffectDef,
        target: Target,
        spell_boost: u8,
    ) {
        match effect.kind {
            EffectKind::GainMana => {
                let seat = self.recipient_player(source, effect.target, target);
                // A plain add: The Coin may exceed the refill cap this turn.
                self.players[seat.index()].mana += effect.magnitude;
            }
            EffectKind::DrawCards => {
                let seat = self.recipient_player(source, effect.target, target);
                for _ in 0..effect.magnitude {
                    self.players[seat.index()].draw_one();
                }
            }
            EffectKind::AttackAura => {
                if let Target::Minion { owner, index } = target {
                    if let Some(minion) =
                        self.players[owner.index()].board.get_mut(index as usize)
                    {
                        minion.attach_aura(Aura {
                            effect: AuraEffect::Attack(effect.magnitude),
                            duration: AuraDuration::EndOfTurn,
                        });
                    }
                }
            }
            EffectKind::Damage => {
                let amount = effect.magnitude + spell_boost;
                match effect.target {
                    TargetType::AllMinions => {
                        for player in &mut self.players {
                            for minion in player.board.iter_mut() {
                                minion.take_damage(amount);
                            }
                        }
                    }
                    TargetType::AllCharacters => {
                        for player in &mut self.players {
                            player.health = player.health.saturating_sub(amount as i8);
                            for minion in player.board.iter_mut() {
                                minion.take_damage(amount);
                            }
                        }
                    }
                    _ => match self.resolve_target(source, effect.target, target) {
                        Target::Hero(id) => {
                            let health = &mut self.players[id.index()].health;
                            *health = health.saturating_sub(amount as i8);
                        }
                        Target::Minion { owner, index } => {
                            if let Some(minion) =
                                self.players[owner.index()].board.get_mut(index as usize)
                            {
                                minion.take_damage(amount);
                            }
                        }
                        Target::None => {}
                    },
                }
                self.check_victory();
                self.sweep_dead_minions();
            }
            EffectKind::Heal => match self.resolve_target(source, effect.target, target) {
                Target::Hero(id) => {
                    let health = &mut self.players[id.index()].health;
                    *health = Self::STARTING_HEALTH.min(health.saturating_add(effect.magnitude as i8));
                }
                Target::Minion { owner, index } => {
                    if let Some(minion) = self.players[owner.index()].board.get_mut(index as usize)
                    {
                        minion.heal(effect.magnitude);
                    }
                }
                Target::None => {}
            },
        }
    }

    /// Fixed-hero target types resolve against `source`; everything else
    /// uses the target the move carried.
    fn resolve_target(&self, source: PlayerId, requirement: TargetType, provided: Target) -> Target {
        match requirement {
            TargetType::EnemyHero => Target::Hero(source.opponent()),
            TargetType::OwnHero => Target::Hero(source),
            _ => provided,
        }
    }

    /// The seat receiving a player-scoped effect (mana, draws).
    fn recipient_player(&self, source: PlayerId, requirement: TargetType, provided: Target) -> PlayerId {
        match self.resolve_target(source, requirement, provided) {
            Target::Hero(id) => id,
            _ => source,
        }
    }

    /// Remove dead minions (active side first), queueing deathrattles in
    /// board order.
    fn sweep_dead_minions(&mut self) {
        for id in [self.active_player, self.active_player.opponent()] {
            let seat = id.index();
            let mut i = 0;
            while i < self.players[seat].board.len() {
                if self.players[seat].board[i].is_dead() {
                    let dead = self.players[seat].board.remove(i);
                    self.queue_deathrattle(id, &dead);
                } else {
                    i += 1;
                }
            }
        }
    }

    fn queue_deathrattle(&mut self, owner: PlayerId, minion: &Minion) {
        if let Some(effect) = minion.source().deathrattle {
            self.pending.push(PendingEffect { owner, effect });
        }
    }

    /// Resolve queued deathrattles in FIFO order. Deaths caused here queue
    /// further effects onto the same pass.
    fn drain_pending_effects(&mut self) {
        while !self.pending.is_empty() {
            let queued = self.pending.remove(0);
            // Deathrattles carry no enumerated target and no spell boost.
            self.resolve_effect(queued.owner, queued.effect, Target::None, 0);
        }
    }

    /// General victory sweep, run after every health-modifying event other
    /// than hero attacks (which decide inline). A later check in the same
    /// resolution pass may upgrade a win to a draw when the second hero
    /// falls too.
    fn check_victory(&mut self) {
        let one_dead = self.players[0].health <= 0;
        let two_dead = self.players[1].health <= 0;
        if one_dead && two_dead {
            self.winner = Winner::Draw;
        } else if one_dead {
            self.winner = Winner::PlayerTwo;
        } else if two_dead {
            self.winner = Winner::PlayerOne;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a card-play move unless an identical one exists (duplicate cards
/// in hand would otherwise enumerate duplicate moves).
fn push_unique(moves: &mut MoveList, mv: Move) {
    if !moves.contains(&mv) {
        moves.push(mv);
    }
}

/// Enumerate `card` against every targetable minion on either board.
fn push_minion_targets(moves: &mut MoveList, card: Card, by: PlayerId, state: &GameState) {
    for owner in [by, by.opponent()] {
        for (index, minion) in state.player(owner).board.iter().enumerate() {
            if minion.has(Abilities::CANNOT_BE_TARGETED) {
                continue;
            }
            // Stealth hides a minion from the opponent only.
            if owner != by && minion.has(Abilities::STEALTH) {
                continue;
            }
            push_unique(
                moves,
                Move::play_at(
                    card,
                    Target::Minion {
                        owner,
                        index: index as u8,
                    },
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_state() {
        let state = GameState::new();

        assert_eq!(state.players[0].health, 30);
        assert_eq!(state.players[1].health, 30);
        assert_eq!(state.active_player, PlayerId::ONE);
        assert_eq!(state.winner, Winner::Undetermined);
        assert!(state.players[0].board.is_empty());
        assert!(state.players[0].hand.is_empty());
        assert_eq!(state.possible_moves().as_slice(), &[Move::EndTurn]);
    }

    #[test]
    fn test_end_turn_swaps_and_refills_mana() {
        let mut state = GameState::new();
        state.players[0].deck.push(Card::MurlocRaider);
        state.players[1].deck.push(Card::MurlocRaider);

        state.process_move(Move::EndTurn);

        assert_eq!(state.active_player, PlayerId::TWO);
        assert_eq!(state.players[1].mana, 1);
        assert_eq!(state.players[1].max_mana, 1);
        assert_eq!(state.players[1].hand.len(), 1);
    }

    #[test]
    fn test_mana_caps_at_ten() {
        let mut state = GameState::new();
        state.players[1].max_mana = 10;
        // Keep decks non-empty so end-turn never declares a draw.
        for _ in 0..2 {
            state.players[0].deck.push(Card::MurlocRaider);
            state.players[1].deck.push(Card::MurlocRaider);
        }
        state.update_possible_moves();

        state.process_move(Move::EndTurn);

        assert_eq!(state.players[1].max_mana, 10);
        assert_eq!(state.players[1].mana, 10);
    }

    #[test]
    fn test_both_decks_empty_is_a_draw() {
        let mut state = GameState::new();

        state.process_move(Move::EndTurn);

        assert_eq!(state.winner, Winner::Draw);
    }

    #[test]
    fn test_check_victory_upgrades_to_draw() {
        let mut state = GameState::new();
        state.players[1].health = -1;
        state.check_victory();
        assert_eq!(state.winner, Winner::PlayerOne);

        state.players[0].health = 0;
        state.check_victory();
        assert_eq!(state.winner, Winner::Draw);
    }

    #[test]
    fn test_random_playout_terminates() {
        let mut rng = GameRng::new(9);
        let mut state = GameState::new();
        for _ in 0..5 {
            state.players[0].deck.push(Card::BloodfenRaptor);
            state.players[1].deck.push(Card::RiverCrocolisk);
        }
        state.update_possible_moves();

        state.play_out_randomly(&mut rng);

        assert!(state.winner.is_decided());
    }

    #[test]
    fn test_possible_moves_deduplicates_card_plays() {
        let mut state = GameState::new();
        state.players[0].hand.push(Card::ChillwindYeti);
        state.players[0].hand.push(Card::ChillwindYeti);
        state.players[0].mana = 10;
        state.update_possible_moves();

        let plays = state
            .possible_moves()
            .iter()
            .filter(|m| matches!(m, Move::PlayCard { .. }))
            .count();
        assert_eq!(plays, 1);
    }
}
