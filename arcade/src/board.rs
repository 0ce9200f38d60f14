
use super::mark::Mark;
use super::phase::Phase;

use utils::*;

///
/// The number of cells on a board.
///
pub const CELLS : usize = 9;

///
/// The eight winning lines of a 3x3 board in row-major indices: 
/// three rows, three columns and two diagonals.
///
pub const LINES : [[usize; 3]; 8] = 
[
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6]
];

///
/// A 3x3 tic-tac-toe board stored as a flat, zero-indexed, row-major array.
///
/// The board is the single source of truth for win and draw evaluation.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board 
{
    cells: [Mark; CELLS]
}

impl notate::Notate for Board 
{
    fn notate (& self) -> String 
    {
        notate::notate_all(& self.cells)
    }

    fn parse (s: & str) -> Result<Board>
    {
        let context = format!("Invalid notation '{}' for board.", s);

        let marks = notate::parse_chars::<Mark>(s).context(context.clone())?;
        let cells : [Mark; CELLS] = marks.try_into()
            .map_err(|m : Vec<Mark>| error::error!("Expected {} cells, found {}.", CELLS, m.len()))
            .context(context.clone())?;

        Ok(Board { cells })
    }
}

impl std::fmt::Display for Board 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        for row in self.cells.chunks(3)
        {
            for mark in row 
            {
                write!(f, "{}", mark)?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

impl Board 
{
    ///
    /// Returns an empty board.
    ///
    pub fn blank () -> Board 
    {
        Board { cells: [Mark::Empty; CELLS] }
    }

    ///
    /// Returns the cells in row-major order.
    ///
    pub fn cells (& self) -> & [Mark; CELLS]
    {
        & self.cells
    }

    ///
    /// Empties the cell at the index; out-of-range indices are ignored.
    ///
    pub fn clear (& mut self, index: usize)
    {
        if let Some(cell) = self.cells.get_mut(index)
        {
            * cell = Mark::Empty;
        }
    }

    ///
    /// Counts the cells holding the given mark.
    ///
    pub fn count (& self, mark: Mark) -> usize 
    {
        self.cells.iter().filter(|& & m| m == mark).count()
    }

    ///
    /// Evaluates the board: a win for either player, a draw when no empty cell 
    /// remains, and in progress otherwise.
    ///
    pub fn evaluate (& self) -> Phase 
    {
        for mark in [Mark::X, Mark::O]
        {
            if self.has_line(mark)
            {
                return Phase::Won(mark);
            }
        }

        match self.is_full()
        {
            true  => Phase::Draw,
            false => Phase::InProgress
        }
    }

    ///
    /// Returns the mark at the index, or None when the index is off the board.
    ///
    pub fn get (& self, index: usize) -> Option<Mark>
    {
        self.cells.get(index).copied()
    }

    ///
    /// Determines whether the player owns all three cells of some line.
    ///
    pub fn has_line (& self, mark: Mark) -> bool 
    {
        self.winning_line(mark).is_some()
    }

    ///
    /// Determines whether no empty cell remains.
    ///
    pub fn is_full (& self) -> bool 
    {
        self.count(Mark::Empty) == 0
    }

    ///
    /// Writes a mark into the cell at the index; out-of-range indices are ignored.
    ///
    pub fn set (& mut self, index: usize, mark: Mark)
    {
        if let Some(cell) = self.cells.get_mut(index)
        {
            * cell = mark;
        }
    }

    ///
    /// Returns the first line completed by the player, if any. Empty never completes a line.
    ///
    pub fn winning_line (& self, mark: Mark) -> Option<[usize; 3]>
    {
        if ! mark.is_player()
        {
            return None;
        }

        LINES.iter()
            .find(|line| line.iter().all(|& i| self.cells[i] == mark))
            .copied()
    }
}
