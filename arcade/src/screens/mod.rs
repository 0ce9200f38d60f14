
pub mod hangman;
pub mod pong;
pub mod rps;
pub mod tictactoe;
pub mod wordle;

pub use hangman::HangmanScreen;
pub use pong::PongScreen;
pub use rps::RpsScreen;
pub use tictactoe::{Classic, Infinite, TicTacToe};
pub use wordle::WordleScreen;
