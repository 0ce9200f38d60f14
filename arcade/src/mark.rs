
use utils::*;

///
/// The state of a tic-tac-toe cell, and the identity of the two players.
///
/// Player X always moves first; Empty is never a player.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mark 
{
    X,
    O,
    #[default]
    Empty
}

impl std::fmt::Display for Mark 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let token = match self 
        {
            Mark::X     => "❌",
            Mark::O     => "⭕",
            Mark::Empty => "⬛"
        };
        write!(f, "{}", token)
    }
}

impl notate::Notate for Mark 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            Mark::X     => "X".to_string(),
            Mark::O     => "O".to_string(),
            Mark::Empty => "_".to_string()
        }
    }

    fn parse (s: & str) -> Result<Mark>
    {
        match s 
        {
            "X" | "x"                   => Ok(Mark::X),
            "O" | "o"                   => Ok(Mark::O),
            "_" | "-" | "." | "," | " " => Ok(Mark::Empty),
            _                           => Err(error::error!("Invalid notation '{}' for mark.", s))
        }
    }
}

impl Mark 
{
    ///
    /// Returns the slot of this player in per-player arrays, in XO order.
    ///
    pub fn index (& self) -> Option<usize>
    {
        match self 
        {
            Mark::X     => Some(0),
            Mark::O     => Some(1),
            Mark::Empty => None
        }
    }

    ///
    /// Determines whether this is a player's mark.
    ///
    pub fn is_player (& self) -> bool 
    {
        * self != Mark::Empty
    }

    ///
    /// Returns the glyph drawn inside a cell.
    ///
    pub fn label (& self) -> & 'static str 
    {
        match self 
        {
            Mark::X     => "X",
            Mark::O     => "O",
            Mark::Empty => ""
        }
    }

    ///
    /// Returns the player opposite this one; Empty has no opponent.
    ///
    pub fn opponent (& self) -> Mark 
    {
        match self 
        {
            Mark::X     => Mark::O,
            Mark::O     => Mark::X,
            Mark::Empty => Mark::Empty
        }
    }
}
