use crate::*;
use ismcts_core::Player;
use ismcts_core::Utility;

/// A game state that can be searched by ISMCTS.
///
/// The state behaves as a finite state machine: after each `do_move` it is
/// ready to accept the next move from whoever `current_player` names.
///
/// # Required Methods
///
/// - `current_player()` — Seat making the next decision
/// - `valid_moves()` — Legal moves, empty once the game is finished
/// - `do_move(m)` — Apply a legal move in place
/// - `determinize(observer, rng)` — Clone with hidden information resampled
/// - `payoff(player)` — Terminal result for a seat
///
/// # Contract
///
/// `do_move` with an illegal move is a programming error and should panic.
/// `determinize` must resample everything hidden from `observer` uniformly
/// among the possibilities consistent with what `observer` has seen, and
/// must never mutate `self`. The engine only ever mutates clones.
pub trait Game: Clone + Send + Sync {
    type M: Move;
    fn current_player(&self) -> Player;
    fn valid_moves(&self) -> Vec<Self::M>;
    fn do_move(&mut self, m: Self::M);
    fn determinize<R>(&self, observer: Player, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized;
    /// Preferably on [0, 1]: 0 for a loss, 0.5 for a draw, 1 for a win.
    /// Only called on finished states.
    fn payoff(&self, player: Player) -> Utility;

    /// A state without legal moves is finished.
    fn is_terminal(&self) -> bool {
        self.valid_moves().is_empty()
    }
}
