//! Bingo against the giant squid: boards are loaded from the puzzle text and the draws are played
//! until either the first or the last board wins.

mod board;
mod drawer;
mod game;
mod player;

pub use board::{Board, BoardState, Cell, Id};
pub use drawer::{NumberDrawer, TextNumberDrawer};
pub use game::{Game, Winner, DEFAULT_BOARD_SIZE};
pub use player::Player;
