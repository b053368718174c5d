use crate::*;
use ismcts_core::Player;
use ismcts_core::Utility;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// Attempts at re-placing hidden stones before giving up on a resample.
const RESAMPLES: usize = 64;

/// Phantom m,n,k-game: the m,n,k-game where a player cannot see the
/// opponent's stones.
///
/// Each player keeps the cells it has not yet tried. Trying an empty cell
/// places a stone and passes the turn. Trying a cell holding an opponent
/// stone reveals it and the same player moves again. Legal moves are the
/// untried cells of the player to move.
///
/// Determinization for an observer lifts every opponent stone the
/// observer has not discovered and re-places the same number uniformly on
/// cells the observer has not tried, rejecting placements that would end
/// the game. When rejection keeps failing, stones are dropped one by one
/// on random cells that do not complete a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phantom {
    board: Mnk,
    untried: [Vec<usize>; 2],
}

impl Phantom {
    pub fn new(m: usize, n: usize, k: usize) -> Self {
        let board = Mnk::new(m, n, k);
        let cells = (0..board.cells()).collect::<Vec<_>>();
        Self {
            board,
            untried: [cells.clone(), cells],
        }
    }
    pub fn tictactoe() -> Self {
        Self::new(3, 3, 3)
    }
    /// The true board, as nobody sees it.
    pub fn board(&self) -> &Mnk {
        &self.board
    }
    pub fn untried(&self, player: Player) -> &[usize] {
        &self.untried[player]
    }
    /// Opponent stones on cells `observer` has not tried.
    fn hidden(&self, observer: Player) -> Vec<usize> {
        let opponent = 1 - observer;
        self.untried[observer]
            .iter()
            .copied()
            .filter(|c| self.board.cell(*c) == Some(opponent))
            .collect()
    }
    /// Place `count` stones for `opponent` uniformly on `free`, or None if
    /// the placement finishes the game.
    fn sample<R>(&self, free: &[usize], count: usize, opponent: Player, rng: &mut R) -> Option<Self>
    where
        R: rand::Rng + ?Sized,
    {
        let mut trial = self.clone();
        for cell in free.choose_multiple(rng, count).copied() {
            trial.board.place(cell, opponent);
            trial.untried[opponent].retain(|c| *c != cell);
        }
        match trial.board.winner() {
            Some(_) => None,
            None => Some(trial.settled(opponent)),
        }
    }
    /// Place `count` stones for `opponent` one at a time in random order,
    /// skipping any cell that would complete a line. None if `free` runs out.
    fn scatter<R>(&self, free: &[usize], count: usize, opponent: Player, rng: &mut R) -> Option<Self>
    where
        R: rand::Rng + ?Sized,
    {
        let mut trial = self.clone();
        let mut cells = free.to_vec();
        cells.shuffle(rng);
        let mut placed = 0;
        for cell in cells {
            if placed == count {
                break;
            }
            trial.board.place(cell, opponent);
            if trial.board.wins(cell, opponent) {
                trial.board.clear(cell);
            } else {
                trial.untried[opponent].retain(|c| *c != cell);
                placed += 1;
            }
        }
        (placed == count).then(|| trial.settled(opponent))
    }
    fn settled(mut self, opponent: Player) -> Self {
        self.untried[opponent].sort_unstable();
        self
    }
}

impl Game for Phantom {
    type M = usize;
    fn current_player(&self) -> Player {
        self.board.current_player()
    }
    fn valid_moves(&self) -> Vec<usize> {
        match self.board.outcome() {
            Some(_) => vec![],
            None => self.untried[self.current_player()].clone(),
        }
    }
    fn do_move(&mut self, cell: usize) {
        let player = self.current_player();
        let index = self.untried[player]
            .iter()
            .position(|c| *c == cell)
            .unwrap_or_else(|| panic!("illegal move {}", cell));
        assert!(self.board.outcome().is_none(), "move {} after the game ended", cell);
        self.untried[player].remove(index);
        if self.board.cell(cell).is_none() {
            self.board.do_move(cell);
        }
    }
    fn determinize<R>(&self, observer: Player, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        let hidden = self.hidden(observer);
        if hidden.is_empty() || self.is_terminal() {
            return self.clone();
        }
        let opponent = 1 - observer;
        let mut lifted = self.clone();
        for cell in hidden.iter().copied() {
            lifted.board.clear(cell);
            lifted.untried[opponent].push(cell);
        }
        let free = lifted.untried[observer]
            .iter()
            .copied()
            .filter(|c| lifted.board.cell(*c).is_none())
            .collect::<Vec<_>>();
        let count = hidden.len();
        (0..RESAMPLES)
            .find_map(|_| lifted.sample(&free, count, opponent, rng))
            .or_else(|| (0..RESAMPLES).find_map(|_| lifted.scatter(&free, count, opponent, rng)))
            .unwrap_or_else(|| {
                log::trace!("no quiet placement of {} hidden stones", count);
                self.clone()
            })
    }
    fn payoff(&self, player: Player) -> Utility {
        self.board.payoff(player)
    }
}

impl PomGame for Phantom {
    fn players(&self) -> usize {
        2
    }
}
