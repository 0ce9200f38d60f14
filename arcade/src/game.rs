
use thiserror::Error;

use super::board::Board;
use super::mark::Mark;
use super::phase::Phase;
use super::turn::{MoveQueue, TurnTracker};

///
/// The rule set of a tic-tac-toe game.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant 
{
    ///
    /// Marks stay until the game ends; a full board without a line is a draw.
    ///
    Classic,

    ///
    /// Each player keeps at most three marks; placing a fourth clears that player's oldest.
    ///
    Infinite
}

///
/// Reasons a placement is refused. Screens ignore all of them.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError 
{
    #[error("cell {0} is off the board")]
    OutOfRange(usize),

    #[error("cell {0} is already marked")]
    Occupied(usize),

    #[error("the game is already over")]
    GameOver
}

///
/// The effect of an accepted placement.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement 
{
    pub mark: Mark,
    pub index: usize,
    pub evicted: Option<usize>
}

///
/// A tic-tac-toe game: the board, whose turn it is and, in the infinite variant, 
/// the sliding window of each player's most recent marks.
///
/// The phase is always evaluated from the board, never cached.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game 
{
    variant: Variant,
    board: Board,
    turns: TurnTracker,
    queues: [MoveQueue; 2]
}

impl Game 
{
    ///
    /// Returns the board.
    ///
    pub fn board (& self) -> & Board 
    {
        & self.board
    }

    ///
    /// Returns the index of the mark that the next placement will clear, if any; 
    /// only the infinite variant ever expires marks.
    ///
    pub fn expiring (& self) -> Option<usize>
    {
        let queue = self.queue(self.to_move())?;
        match self.variant == Variant::Infinite && queue.is_full()
        {
            true  => queue.oldest(),
            false => None
        }
    }

    ///
    /// Returns the number of placements since the last reset.
    ///
    pub fn moves (& self) -> usize 
    {
        self.turns.moves()
    }

    ///
    /// Returns a fresh game of the given variant.
    ///
    pub fn new (variant: Variant) -> Game 
    {
        Game 
        {
            variant,
            board: Board::blank(),
            turns: TurnTracker::new(),
            queues: [MoveQueue::new(); 2]
        }
    }

    ///
    /// Returns the current phase, evaluated from the board.
    ///
    pub fn phase (& self) -> Phase 
    {
        self.board.evaluate()
    }

    ///
    /// Places the mark of the player to move at the index.
    ///
    /// In the infinite variant the index joins that player's queue; if the queue was 
    /// already holding three marks, the oldest is cleared from the board before the 
    /// board is evaluated again.
    ///
    pub fn place (& mut self, index: usize) -> Result<Placement, MoveError>
    {
        if self.phase().is_over()
        {
            return Err(MoveError::GameOver);
        }

        match self.board.get(index)
        {
            None              => return Err(MoveError::OutOfRange(index)),
            Some(Mark::Empty) => {},
            Some(_)           => return Err(MoveError::Occupied(index))
        };

        let mark = self.turns.to_move();
        self.board.set(index, mark);

        let evicted = match self.variant 
        {
            Variant::Classic  => None,
            Variant::Infinite => 
            {
                let evicted = self.queues[Game::slot(mark)].push(index);
                if let Some(old) = evicted 
                {
                    self.board.clear(old);
                }
                evicted
            }
        };

        self.turns.advance();
        Ok(Placement { mark, index, evicted })
    }

    ///
    /// Returns the move queue of a player; Empty has none.
    ///
    pub fn queue (& self, mark: Mark) -> Option<& MoveQueue>
    {
        mark.index().map(|i| & self.queues[i])
    }

    ///
    /// Restores the starting position: an empty board, the counter at zero and 
    /// both queues empty.
    ///
    pub fn reset (& mut self)
    {
        self.board = Board::blank();
        self.turns.reset();
        self.queues.iter_mut().for_each(|q| q.clear());
    }

    ///
    /// Returns the player to move.
    ///
    pub fn to_move (& self) -> Mark 
    {
        self.turns.to_move()
    }

    ///
    /// Returns the rule set.
    ///
    pub fn variant (& self) -> Variant 
    {
        self.variant 
    }

    fn slot (mark: Mark) -> usize 
    {
        // Only X and O are ever to move.
        mark.index().unwrap_or(0)
    }
}

