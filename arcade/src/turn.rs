
use super::mark::Mark;

///
/// The number of marks a player may hold in the infinite variant.
///
pub const QUEUE_CAPACITY : usize = 3;

///
/// Selects the player to move by the parity of a monotonically increasing move counter.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TurnTracker 
{
    moves: usize
}

impl TurnTracker 
{
    ///
    /// Records a placement, passing the turn to the other player.
    ///
    pub fn advance (& mut self)
    {
        self.moves += 1;
    }

    ///
    /// Returns the number of placements made since the last reset.
    ///
    pub fn moves (& self) -> usize 
    {
        self.moves 
    }

    ///
    /// Returns a tracker with no moves made; X is to move.
    ///
    pub fn new () -> TurnTracker 
    {
        TurnTracker { moves: 0 }
    }

    ///
    /// Returns the counter to zero.
    ///
    pub fn reset (& mut self)
    {
        self.moves = 0;
    }

    ///
    /// Returns the player whose turn it is.
    ///
    pub fn to_move (& self) -> Mark 
    {
        match self.moves % 2 
        {
            0 => Mark::X,
            _ => Mark::O
        }
    }
}

///
/// A sliding window over the cell indices a player has marked, oldest first.
///
/// The queue is a fixed-capacity ring buffer: pushing onto a full queue evicts and 
/// returns the oldest index, so the length never exceeds the capacity.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveQueue 
{
    slots: [usize; QUEUE_CAPACITY],
    head: usize,
    len: usize
}

impl MoveQueue 
{
    ///
    /// Empties the queue.
    ///
    pub fn clear (& mut self)
    {
        self.head = 0;
        self.len = 0;
    }

    ///
    /// Determines whether the index is currently held.
    ///
    pub fn contains (& self, index: usize) -> bool 
    {
        self.iter().any(|i| i == index)
    }

    ///
    /// Determines whether the next push will evict.
    ///
    pub fn is_full (& self) -> bool 
    {
        self.len == QUEUE_CAPACITY
    }

    ///
    /// Determines whether the queue holds nothing.
    ///
    pub fn is_empty (& self) -> bool 
    {
        self.len == 0
    }

    ///
    /// Iterates the held indices from oldest to newest.
    ///
    pub fn iter (& self) -> impl Iterator<Item = usize> + '_
    {
        (0 .. self.len).map(move |k| self.slots[(self.head + k) % QUEUE_CAPACITY])
    }

    ///
    /// Returns the number of held indices.
    ///
    pub fn len (& self) -> usize 
    {
        self.len
    }

    ///
    /// Returns an empty queue.
    ///
    pub fn new () -> MoveQueue 
    {
        MoveQueue { slots: [0; QUEUE_CAPACITY], head: 0, len: 0 }
    }

    ///
    /// Returns the oldest held index, which is the next to be evicted.
    ///
    pub fn oldest (& self) -> Option<usize>
    {
        match self.is_empty()
        {
            true  => None,
            false => Some(self.slots[self.head])
        }
    }

    ///
    /// Appends an index, evicting and returning the oldest one if the queue was full.
    ///
    pub fn push (& mut self, index: usize) -> Option<usize>
    {
        if self.is_full()
        {
            let evicted = self.slots[self.head];
            self.slots[self.head] = index;
            self.head = (self.head + 1) % QUEUE_CAPACITY;
            return Some(evicted);
        }

        self.slots[(self.head + self.len) % QUEUE_CAPACITY] = index;
        self.len += 1;
        None
    }
}
