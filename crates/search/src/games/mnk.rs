use crate::*;
use ismcts_core::Player;
use ismcts_core::Utility;

/// Finished state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// The m,n,k-game: two players alternately place stones on an `m` wide by
/// `n` tall board, and the first to line up `k` in a row, column or
/// diagonal wins. Tic-tac-toe is the 3,3,3-game.
///
/// Moves are cell indices `row * m + column`. Player 0 moves first.
/// Everything is public, so determinization is a plain clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnk {
    m: usize,
    n: usize,
    k: usize,
    board: Vec<Option<Player>>,
    player: Player,
    outcome: Option<Outcome>,
}

impl Mnk {
    pub fn new(m: usize, n: usize, k: usize) -> Self {
        Self::with_board(m, n, k, vec![None; m * n], 0)
    }
    pub fn tictactoe() -> Self {
        Self::new(3, 3, 3)
    }
    /// A position from an arbitrary board, with `player` to move.
    pub fn with_board(m: usize, n: usize, k: usize, board: Vec<Option<Player>>, player: Player) -> Self {
        assert!(m * n > 0, "board must have cells");
        assert!(k > 0, "line length must be positive");
        assert!(board.len() == m * n, "board has {} cells, expected {}", board.len(), m * n);
        assert!(player < 2, "no seat {}", player);
        let mut game = Self {
            m,
            n,
            k,
            board,
            player,
            outcome: None,
        };
        game.outcome = game.score();
        game
    }
    pub fn width(&self) -> usize {
        self.m
    }
    pub fn height(&self) -> usize {
        self.n
    }
    pub fn cells(&self) -> usize {
        self.board.len()
    }
    pub fn cell(&self, cell: usize) -> Option<Player> {
        self.board[cell]
    }
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
    pub fn is_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }
    pub fn empty(&self) -> impl Iterator<Item = usize> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    /// Set a cell without touching turn or outcome.
    pub(crate) fn place(&mut self, cell: usize, player: Player) {
        self.board[cell] = Some(player);
    }
    pub(crate) fn clear(&mut self, cell: usize) {
        self.board[cell] = None;
    }
    /// Whether `player` owns a line of at least `k` through `cell`.
    pub fn wins(&self, cell: usize, player: Player) -> bool {
        const STRIDES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];
        let (r0, c0) = ((cell / self.m) as isize, (cell % self.m) as isize);
        STRIDES.iter().any(|&(dr, dc)| {
            let mut count = 1;
            for sign in [-1, 1] {
                let (mut r, mut c) = (r0, c0);
                loop {
                    r += sign * dr;
                    c += sign * dc;
                    match self.owner(r, c) {
                        Some(p) if p == player => count += 1,
                        _ => break,
                    }
                }
            }
            count >= self.k
        })
    }
    /// Any player with a line anywhere on the board.
    pub fn winner(&self) -> Option<Player> {
        (0..self.cells()).find_map(|cell| match self.board[cell] {
            Some(p) if self.wins(cell, p) => Some(p),
            _ => None,
        })
    }
    fn owner(&self, r: isize, c: isize) -> Option<Player> {
        if r < 0 || c < 0 || r >= self.n as isize || c >= self.m as isize {
            None
        } else {
            self.board[r as usize * self.m + c as usize]
        }
    }
    fn score(&self) -> Option<Outcome> {
        match self.winner() {
            Some(p) => Some(Outcome::Win(p)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}

impl Game for Mnk {
    type M = usize;
    fn current_player(&self) -> Player {
        self.player
    }
    fn valid_moves(&self) -> Vec<usize> {
        match self.outcome {
            Some(_) => vec![],
            None => self.empty().collect(),
        }
    }
    fn do_move(&mut self, cell: usize) {
        assert!(self.outcome.is_none(), "move {} after the game ended", cell);
        assert!(
            self.board.get(cell).is_some_and(Option::is_none),
            "illegal move {}",
            cell
        );
        self.place(cell, self.player);
        if self.wins(cell, self.player) {
            self.outcome = Some(Outcome::Win(self.player));
        } else if self.is_full() {
            self.outcome = Some(Outcome::Draw);
        } else {
            self.player = 1 - self.player;
        }
    }
    fn determinize<R>(&self, _: Player, _: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        self.clone()
    }
    fn payoff(&self, player: Player) -> Utility {
        match self.outcome {
            Some(Outcome::Win(p)) if p == player => 1.,
            Some(Outcome::Win(_)) => 0.,
            Some(Outcome::Draw) => 0.5,
            None => unreachable!("payoff of an unfinished game"),
        }
    }
}

impl PomGame for Mnk {
    fn players(&self) -> usize {
        2
    }
}

impl std::fmt::Display for Mnk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.board.chunks(self.m) {
            for cell in row {
                match cell {
                    Some(0) => write!(f, " X")?,
                    Some(_) => write!(f, " O")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> Mnk {
        let mut game = Mnk::tictactoe();
        for m in moves {
            game.do_move(*m);
        }
        game
    }

    #[test]
    fn fresh_board() {
        let game = Mnk::tictactoe();
        assert_eq!(game.current_player(), 0);
        assert_eq!(game.valid_moves(), (0..9).collect::<Vec<_>>());
        assert!(!game.is_terminal());
    }

    #[test]
    fn players_alternate() {
        let game = play(&[4]);
        assert_eq!(game.current_player(), 1);
        assert!(!game.valid_moves().contains(&4));
    }

    #[test]
    fn row_column_diagonal_wins() {
        for moves in [
            vec![0, 3, 1, 4, 2],
            vec![0, 1, 3, 2, 6],
            vec![0, 1, 4, 2, 8],
            vec![2, 0, 4, 1, 6],
        ] {
            let game = play(&moves);
            assert_eq!(game.outcome(), Some(Outcome::Win(0)), "{:?}", moves);
            assert!(game.valid_moves().is_empty());
            assert_eq!(game.payoff(0), 1.);
            assert_eq!(game.payoff(1), 0.);
        }
    }

    #[test]
    fn full_board_draws() {
        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
        assert_eq!(game.payoff(0), 0.5);
        assert_eq!(game.payoff(1), 0.5);
    }

    #[test]
    fn longer_boards() {
        let mut game = Mnk::new(5, 4, 4);
        for m in [0, 5, 1, 6, 2, 7] {
            game.do_move(m);
        }
        assert!(!game.is_terminal());
        game.do_move(3);
        assert_eq!(game.outcome(), Some(Outcome::Win(0)));
    }

    #[test]
    fn board_positions_scored() {
        let x = Some(0);
        let o = Some(1);
        let game = Mnk::with_board(3, 3, 3, vec![x, x, x, o, o, None, None, None, None], 1);
        assert_eq!(game.outcome(), Some(Outcome::Win(0)));
        let game = Mnk::with_board(3, 3, 3, vec![None, o, None, o, x, x, x, x, o], 1);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.valid_moves(), vec![0, 2]);
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn occupied_cell_rejected() {
        play(&[4, 4]);
    }

    #[test]
    #[should_panic(expected = "after the game ended")]
    fn finished_game_rejects_moves() {
        play(&[0, 3, 1, 4, 2, 5]);
    }
}
