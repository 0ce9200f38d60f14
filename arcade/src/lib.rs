
pub mod board;
pub mod colour;
pub mod game;
pub mod geometry;
pub mod hangman;
pub mod input;
pub mod mark;
pub mod phase;
pub mod pong;
pub mod render;
pub mod rps;
pub mod screen;
pub mod screens;
pub mod setup;
pub mod turn;
pub mod widget;
pub mod wordle;

pub use board::Board;
pub use colour::Colour;
pub use game::{Game, MoveError, Placement, Variant};
pub use geometry::{Point, Rect};
pub use hangman::Hangman;
pub use input::{InputSource, Key, MouseButton, Press, Snapshot};
pub use mark::Mark;
pub use phase::Phase;
pub use pong::Pong;
pub use render::Renderer;
pub use rps::{Choice, Tally, Verdict};
pub use screen::Screen;
pub use setup::{Options, Setup};
pub use turn::{MoveQueue, TurnTracker};
pub use widget::{Button, Style};
pub use wordle::{Feedback, Word, Wordle};
