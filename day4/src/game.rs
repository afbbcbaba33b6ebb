use common::{Error, Result};
use itertools::Itertools;

use crate::{
    board::{Board, BoardState, Id},
    drawer::{NumberDrawer, TextNumberDrawer},
    player::Player,
};

pub const DEFAULT_BOARD_SIZE: usize = 5;

#[derive(Clone, Copy, Debug)]
pub struct Winner<'a> {
    pub number: u32,
    pub board: &'a Board,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Goal {
    FirstWinner,
    LastWinner,
}

/// A loaded set of draws and boards, one player per board.
#[derive(Clone, Debug)]
pub struct Game<D = TextNumberDrawer> {
    board_size: usize,
    drawer: D,
    players: Vec<Player>,
    loaded: bool,

    // (winning number, index into `players`)
    winner: Option<(u32, usize)>,
}

impl Game {
    pub fn new() -> Self {
        Self::with_board_size(DEFAULT_BOARD_SIZE)
    }

    pub fn with_board_size(board_size: usize) -> Self {
        Self::with_drawer(TextNumberDrawer::default(), board_size)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: NumberDrawer> Game<D> {
    pub fn with_drawer(drawer: D, board_size: usize) -> Self {
        Self {
            board_size,
            drawer,
            players: Vec::new(),
            loaded: false,
            winner: None,
        }
    }

    /// Reads the draw line followed by blank-line-separated boards, numbered from 0.
    ///
    /// On failure the game is left unloaded.
    pub fn load(&mut self, data: &str) -> Result<&mut Self> {
        self.clear();

        let mut lines = data.lines().skip_while(|line| line.trim().is_empty());
        let draw_line = lines
            .next()
            .ok_or_else(|| Error::malformed("the game has no draw line"))?;

        let mut drawer = D::default();
        drawer.load(draw_line)?;

        let mut players = Vec::new();
        for (is_blank, mut block) in &lines.group_by(|line| line.trim().is_empty()) {
            if is_blank {
                continue;
            }

            let id: Id = players.len();
            let board = Board::parse(id, self.board_size, &block.join("\n"))?;
            players.push(Player::default().assign_board(board));
        }

        tracing::debug!(
            draws = drawer.draws().len(),
            boards = players.len(),
            "loaded bingo game"
        );

        self.drawer = drawer;
        self.players = players;
        self.loaded = true;
        Ok(self)
    }

    fn clear(&mut self) {
        self.drawer = D::default();
        self.players.clear();
        self.loaded = false;
        self.winner = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Plays until the first board wins.
    pub fn play_to_win(&mut self) -> &mut Self {
        self.play(Goal::FirstWinner)
    }

    /// Plays until every board has won, keeping the board that won last.
    pub fn play_to_lose(&mut self) -> &mut Self {
        self.play(Goal::LastWinner)
    }

    fn play(&mut self, goal: Goal) -> &mut Self {
        self.winner = None;
        for player in self.players.iter_mut() {
            player.reset();
        }

        let mut has_won = vec![false; self.players.len()];
        let mut remaining = self.players.len();

        for &number in self.drawer.draws() {
            tracing::trace!(number, "drawing");

            for (index, player) in self.players.iter_mut().enumerate() {
                if has_won[index] {
                    continue;
                }

                // `load` gives every player a board, so `NoBoardAssigned` cannot occur here.
                match player.play_number(number) {
                    Ok(BoardState::Win) => {}
                    Ok(BoardState::NoWin) | Err(_) => continue,
                }

                has_won[index] = true;
                remaining -= 1;
                tracing::trace!(number, board = index, "board completed a line");

                let record = match goal {
                    Goal::FirstWinner => self.winner.is_none(),
                    Goal::LastWinner => remaining == 0,
                };
                if record {
                    self.winner = Some((number, index));
                }
            }

            if self.winner.is_some() {
                break;
            }
        }

        match self.winner {
            Some((number, index)) => {
                tracing::debug!(?goal, number, board = index, "winner recorded")
            }
            None => tracing::debug!(?goal, "draws ran out without a winner"),
        }

        self
    }

    pub fn get_winner(&self) -> Option<Winner<'_>> {
        let (number, index) = self.winner?;
        let board = self.players.get(index)?.board()?;

        Some(Winner { number, board })
    }

    /// Sum of the winning board's unmarked numbers times the number that completed it.
    ///
    /// `None` without a winner, or when the product does not fit in a `u64`.
    pub fn score(&self) -> Option<u64> {
        let winner = self.get_winner()?;
        let score = winner
            .board
            .unmarked_sum()
            .checked_mul(u64::from(winner.number));
        if score.is_none() {
            tracing::warn!(board = winner.board.id(), number = winner.number, "score overflows u64");
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use common::Error;
    use itertools::Itertools;

    use super::Game;

    const EXAMPLE: &str = "7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn test_load_game() {
        let mut game = Game::new();
        game.load(EXAMPLE).unwrap();

        assert!(game.is_loaded());
        assert_eq!(game.players().len(), 3);
        let ids: Vec<_> = game
            .players()
            .iter()
            .filter_map(|player| player.board())
            .map(|board| board.id())
            .collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(game.players().iter().all(|player| player.board().is_some()));
        assert!(game.get_winner().is_none());
        assert!(game.score().is_none());
    }

    #[test]
    fn test_play_to_win_detects_row_win() {
        let mut game = Game::new();
        let winner = game.load(EXAMPLE).unwrap().play_to_win().get_winner().unwrap();

        assert_eq!(winner.number, 24);
        assert_eq!(winner.board.id(), 2);
        assert_eq!(winner.board.unmarked_sum(), 188);
        assert_eq!(game.score(), Some(4512));
    }

    #[test]
    fn test_play_to_win_detects_column_win() {
        let data = "1, 2, 3, 4, 5, 6, 7

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 8  1  0 30 22
 9  2 13 17 21
19  3  7 25 23
20  4 10 24 11
14  5 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

        let mut game = Game::new();
        let winner = game.load(data).unwrap().play_to_win().get_winner().unwrap();

        assert_eq!(winner.number, 5);
        assert_eq!(winner.board.id(), 1);
    }

    #[test]
    fn test_play_to_lose() {
        let mut game = Game::new();
        let winner = game.load(EXAMPLE).unwrap().play_to_lose().get_winner().unwrap();

        assert_eq!(winner.number, 13);
        assert_eq!(winner.board.id(), 1);
        assert_eq!(game.score(), Some(1924));
    }

    #[test]
    fn test_modes_can_be_replayed_on_one_game() {
        let mut game = Game::new();
        game.load(EXAMPLE).unwrap();

        assert_eq!(game.play_to_lose().score(), Some(1924));
        assert_eq!(game.play_to_win().score(), Some(4512));
        assert_eq!(game.play_to_lose().score(), Some(1924));
    }

    #[test]
    fn test_single_board_wins_both_ways() {
        let data = "5,1,9,2,3,4\n\n1 2 3\n4 5 6\n7 8 9\n";
        let mut game = Game::with_board_size(3);
        game.load(data).unwrap();

        let to_win = game.play_to_win().get_winner().map(|w| (w.number, w.board.id()));
        let to_lose = game.play_to_lose().get_winner().map(|w| (w.number, w.board.id()));
        assert_eq!(to_win, Some((3, 0)));
        assert_eq!(to_win, to_lose);
        assert_eq!(game.score(), Some((4 + 6 + 7 + 8) * 3));
    }

    #[test]
    fn test_score_with_large_numbers() {
        let mut game = Game::with_board_size(2);
        game.load("3,100000\n\n100000 200000\n3 4").unwrap();

        let winner = game.play_to_win().get_winner().map(|w| (w.number, w.board.id()));
        assert_eq!(winner, Some((100000, 0)));
        assert_eq!(game.score(), Some(200_004 * 100_000));
    }

    #[test]
    fn test_score_beyond_u64_is_not_reported() {
        let rows = (0..4u32)
            .map(|row| (0..4u32).map(|col| u32::MAX - row * 4 - col).join(" "))
            .join("\n");
        // The bottom row holds u32::MAX - 12 down to u32::MAX - 15.
        let draws = (12..16).map(|offset| (u32::MAX - offset).to_string()).join(",");
        let data = format!("{}\n\n{}", draws, rows);

        let mut game = Game::with_board_size(4);
        game.load(&data).unwrap();

        let winner = game.play_to_win().get_winner().map(|w| w.number);
        assert_eq!(winner, Some(u32::MAX - 15));
        assert_eq!(game.score(), None);
    }

    #[test]
    fn test_no_winner_when_draws_run_out() {
        let mut game = Game::new();
        game.load("7,4,9\n\n22 13 17 11  0\n 8  2 23  4 24\n21  9 14 16  7\n 6 10  3 18  5\n 1 12 20 15 19")
            .unwrap();

        assert!(game.play_to_win().get_winner().is_none());
        assert!(game.play_to_lose().score().is_none());
    }

    #[test]
    fn test_unplayed_or_empty_game_has_no_winner() {
        let mut game = Game::new();
        assert!(!game.is_loaded());
        assert!(game.play_to_win().get_winner().is_none());

        game.load("1,2,3\n").unwrap();
        assert!(game.players().is_empty());
        assert!(game.play_to_lose().get_winner().is_none());
    }

    #[test]
    fn test_malformed_game_is_left_unloaded() {
        let mut game = Game::new();
        game.load(EXAMPLE).unwrap();
        game.play_to_win();

        let truncated = EXAMPLE.replacen(" 6 10  3 18  5\n", "", 1);
        assert!(matches!(game.load(&truncated), Err(Error::MalformedInput(_))));
        assert!(!game.is_loaded());
        assert!(game.players().is_empty());
        assert!(game.get_winner().is_none());

        assert!(game.load("7,x,9\n\n1 2 3 4 5").is_err());
        assert!(game.load("").is_err());
        assert!(!game.is_loaded());
    }
}
