use crate::*;
use ismcts_core::Player;
use ismcts_core::Utility;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// Seat that reveals prizes. It has exactly one legal move at a time.
pub const DEALER: Player = 2;

/// Two-player Goofspiel with the prize deck played by a dealer seat.
///
/// Both players hold cards `1..=cards`. Each round the dealer turns over
/// the next prize from a shuffled deck, then player 0 and player 1 bid one
/// card each. The higher bid takes the prize's value; equal bids discard
/// it. Bids are simultaneous in spirit: player 1 never sees the pending
/// bid of player 0, and neither player knows the deck order.
///
/// Turn order is dealer, player 0, player 1. The round is settled by
/// player 1's bid. The game ends when the dealer has nothing left to
/// reveal. Payoffs are 1 for the higher total, 0.5 each on a tie, and a
/// constant 1 for the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goofspiel {
    deck: Vec<u8>,
    prize: Option<u8>,
    hands: [Vec<u8>; 2],
    bids: [Option<u8>; 2],
    scores: [u32; 2],
    player: Player,
}

impl Goofspiel {
    /// A fresh game with `cards` per suit and a shuffled prize deck.
    pub fn new<R>(cards: u8, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        assert!(cards > 0, "suits must hold cards");
        let mut deck = (1..=cards).collect::<Vec<_>>();
        deck.shuffle(rng);
        Self::with_deck(deck)
    }
    /// A fresh game revealing prizes from the back of `deck`.
    pub fn with_deck(deck: Vec<u8>) -> Self {
        let mut hand = deck.clone();
        hand.sort_unstable();
        Self {
            deck,
            prize: None,
            hands: [hand.clone(), hand],
            bids: [None; 2],
            scores: [0; 2],
            player: DEALER,
        }
    }
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }
    pub fn prize(&self) -> Option<u8> {
        self.prize
    }
    pub fn hand(&self, player: Player) -> &[u8] {
        &self.hands[player]
    }
    fn bid(&mut self, player: Player, card: u8) {
        let index = self.hands[player]
            .iter()
            .position(|c| *c == card)
            .unwrap_or_else(|| panic!("player {} cannot bid {}", player, card));
        self.hands[player].remove(index);
        self.bids[player] = Some(card);
    }
    fn settle(&mut self) {
        let prize = self.prize.take().expect("bids without a prize") as u32;
        match (self.bids[0].take(), self.bids[1].take()) {
            (Some(a), Some(b)) if a > b => self.scores[0] += prize,
            (Some(a), Some(b)) if a < b => self.scores[1] += prize,
            (Some(_), Some(_)) => {}
            _ => unreachable!("settled before both bids"),
        }
    }
}

impl Game for Goofspiel {
    type M = u8;
    fn current_player(&self) -> Player {
        self.player
    }
    fn valid_moves(&self) -> Vec<u8> {
        match self.player {
            DEALER => self.deck.last().copied().into_iter().collect(),
            player => self.hands[player].clone(),
        }
    }
    fn do_move(&mut self, card: u8) {
        match self.player {
            DEALER => {
                assert!(self.deck.last() == Some(&card), "dealer cannot reveal {}", card);
                self.deck.pop();
                self.prize = Some(card);
                self.player = 0;
            }
            0 => {
                self.bid(0, card);
                self.player = 1;
            }
            1 => {
                self.bid(1, card);
                self.settle();
                self.player = DEALER;
            }
            _ => unreachable!("no seat {}", self.player),
        }
    }
    fn determinize<R>(&self, observer: Player, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        let mut clone = self.clone();
        if observer != DEALER {
            clone.deck.shuffle(rng);
        }
        if observer == 1 {
            if let Some(bid) = clone.bids[0].take() {
                clone.hands[0].push(bid);
                clone.hands[0].sort_unstable();
                let card = *clone.hands[0]
                    .choose(rng)
                    .expect("a pending bid leaves a card in hand");
                clone.bid(0, card);
            }
        }
        clone
    }
    fn payoff(&self, player: Player) -> Utility {
        if player == DEALER {
            return 1.;
        }
        let (own, other) = (self.scores[player], self.scores[1 - player]);
        match own.cmp(&other) {
            std::cmp::Ordering::Greater => 1.,
            std::cmp::Ordering::Equal => 0.5,
            std::cmp::Ordering::Less => 0.,
        }
    }
}

impl PomGame for Goofspiel {
    fn players(&self) -> usize {
        3
    }
}
