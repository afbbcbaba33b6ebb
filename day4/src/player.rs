use common::{Error, Result};

use crate::board::{Board, BoardState};

#[derive(Clone, Debug, Default)]
pub struct Player {
    board: Option<Board>,
}

impl Player {
    pub fn assign_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn play_number(&mut self, number: u32) -> Result<BoardState> {
        let board = self.board.as_mut().ok_or(Error::NoBoardAssigned)?;
        Ok(board.mark(number))
    }

    pub(crate) fn reset(&mut self) {
        if let Some(board) = self.board.as_mut() {
            board.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use common::Error;

    use crate::board::{Board, BoardState};

    use super::Player;

    #[test]
    fn test_playing_without_a_board_fails() {
        let mut player = Player::default();
        assert!(matches!(player.play_number(10), Err(Error::NoBoardAssigned)));
    }

    #[test]
    fn test_player_reports_board_win() {
        let board = Board::parse(0, 3, "22 13 17\n 8  2 23\n21  9 14").unwrap();
        let mut player = Player::default().assign_board(board);

        assert_eq!(player.play_number(22).unwrap(), BoardState::NoWin);
        assert_eq!(player.play_number(13).unwrap(), BoardState::NoWin);
        assert_eq!(player.play_number(17).unwrap(), BoardState::Win);
        assert_eq!(player.board().map(Board::id), Some(0));
    }
}
