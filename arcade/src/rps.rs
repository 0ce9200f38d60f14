
use rand::Rng;

///
/// A hand in Rock-Paper-Scissors.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Choice 
{
    Rock,
    Paper,
    Scissors
}

impl std::fmt::Display for Choice 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        let name = match self 
        {
            Choice::Rock     => "Rock",
            Choice::Paper    => "Paper",
            Choice::Scissors => "Scissors"
        };
        write!(f, "{}", name)
    }
}

impl Choice 
{
    pub const ALL : [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    ///
    /// Returns the hand that defeats this one.
    ///
    pub fn beaten_by (& self) -> Choice 
    {
        match self 
        {
            Choice::Rock     => Choice::Paper,
            Choice::Paper    => Choice::Scissors,
            Choice::Scissors => Choice::Rock
        }
    }

    ///
    /// Picks a hand uniformly at random.
    ///
    pub fn random<R: Rng + ?Sized> (rng: & mut R) -> Choice 
    {
        Choice::ALL[rng.gen_range(0 .. Choice::ALL.len())]
    }
}

///
/// The result of one round, from the player's side of the table.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict 
{
    PlayerWins,
    ComputerWins,
    Draw
}

impl std::fmt::Display for Verdict 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Verdict::PlayerWins   => write!(f, "Player Wins!"),
            Verdict::ComputerWins => write!(f, "Comp Wins!"),
            Verdict::Draw         => write!(f, "It's a Draw!")
        }
    }
}

///
/// Decides a round.
///
pub fn judge (player: Choice, computer: Choice) -> Verdict 
{
    if player == computer 
    {
        Verdict::Draw
    }
    else if player.beaten_by() == computer 
    {
        Verdict::ComputerWins
    }
    else 
    {
        Verdict::PlayerWins
    }
}

///
/// A record of the last round and the running tally.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally 
{
    pub last: Option<(Choice, Choice, Verdict)>,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32
}

impl Tally 
{
    ///
    /// Plays one round against the given computer hand and records it.
    ///
    pub fn play (& mut self, player: Choice, computer: Choice) -> Verdict 
    {
        let verdict = judge(player, computer);
        match verdict 
        {
            Verdict::PlayerWins   => self.wins += 1,
            Verdict::ComputerWins => self.losses += 1,
            Verdict::Draw         => self.draws += 1
        };
        self.last = Some((player, computer, verdict));
        verdict
    }
}
