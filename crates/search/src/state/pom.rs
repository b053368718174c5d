use crate::*;

/// A game with partially observable moves.
///
/// The multi-observer solver keeps one tree per seat, so it needs to know
/// how many seats exist. Seats are indexed `0..players()` and every value
/// returned by [`Game::current_player`] must fall in that range.
pub trait PomGame: Game {
    fn players(&self) -> usize;
}
