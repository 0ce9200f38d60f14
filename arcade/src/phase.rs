
use super::mark::Mark;

///
/// The phase of a tic-tac-toe game, derived from the board on demand and never 
/// stored alongside it.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase 
{
    InProgress,
    Won(Mark),
    Draw
}

impl std::fmt::Display for Phase 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Phase::InProgress => write!(f, "The game is in progress."),
            Phase::Won(mark)  => write!(f, "{} wins.", mark.label()),
            Phase::Draw       => write!(f, "The game is a draw.")
        }
    }
}

impl Phase 
{
    ///
    /// Determines whether the game has finished.
    ///
    pub fn is_over (& self) -> bool 
    {
        * self != Phase::InProgress
    }

    ///
    /// Returns the winner, if there is one.
    ///
    pub fn winner (& self) -> Option<Mark>
    {
        match self 
        {
            Phase::Won(mark) => Some(* mark),
            _                => None
        }
    }
}
