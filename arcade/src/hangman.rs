
use thiserror::Error;

///
/// The number of misses allowed before the game is lost.
///
pub const LIVES : u32 = 7;

///
/// The words used when the configuration does not name any.
///
pub const DEFAULT_WORDS : [& str; 16] = 
[
    "CRISTIANO", "MESSI", "RONALDO", "VINICIUS", "NEYMAR", "SALAH", "MBAPPE", "DEBRUYNE", 
    "RAMOS", "BENZEMA", "GARETH", "MARCELO", "ZIDANE", "ANCELOTTI", "YAMAL", "MODRIC"
];

///
/// The effect of an accepted guess.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guess 
{
    ///
    /// The letter occurs in the word this many times; all occurrences are revealed.
    ///
    Hit(usize),

    ///
    /// The letter does not occur; a life is lost.
    ///
    Miss
}

///
/// Reasons a guess is refused.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GuessError 
{
    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("'{0}' was already guessed")]
    AlreadyGuessed(char),

    #[error("the game is already over")]
    GameOver
}

///
/// The progress of a Hangman game.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Standing 
{
    Playing,
    Won,
    Lost
}

///
/// A game of Hangman over an uppercase ASCII word.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hangman 
{
    word: Vec<u8>,
    revealed: Vec<bool>,
    guessed: [bool; 26],
    lives: u32
}

impl Hangman 
{
    ///
    /// Guesses a letter, revealing every occurrence or costing a life.
    ///
    pub fn guess (& mut self, letter: char) -> Result<Guess, GuessError>
    {
        if self.standing() != Standing::Playing 
        {
            return Err(GuessError::GameOver);
        }
        if ! letter.is_ascii_alphabetic()
        {
            return Err(GuessError::NotALetter(letter));
        }

        let letter = letter.to_ascii_uppercase();
        let slot = (letter as u8 - b'A') as usize;
        if self.guessed[slot]
        {
            return Err(GuessError::AlreadyGuessed(letter));
        }
        self.guessed[slot] = true;

        let mut hits = 0;
        for (i, & c) in self.word.iter().enumerate()
        {
            if c == letter as u8 
            {
                self.revealed[i] = true;
                hits += 1;
            }
        }

        match hits 
        {
            0 => 
            {
                self.lives -= 1;
                Ok(Guess::Miss)
            },
            n => Ok(Guess::Hit(n))
        }
    }

    ///
    /// Determines whether the letter has been guessed already.
    ///
    pub fn is_guessed (& self, letter: char) -> bool 
    {
        let letter = letter.to_ascii_uppercase();
        letter.is_ascii_uppercase() && self.guessed[(letter as u8 - b'A') as usize]
    }

    ///
    /// Returns the remaining lives.
    ///
    pub fn lives (& self) -> u32 
    {
        self.lives
    }

    ///
    /// Returns the word with unrevealed letters replaced by underscores, space separated.
    ///
    pub fn masked (& self) -> String 
    {
        self.word.iter().zip(& self.revealed)
            .map(|(& c, & shown)| if shown { (c as char).to_string() } else { "_".to_owned() })
            .collect::<Vec<String>>()
            .join(" ")
    }

    ///
    /// Returns the number of misses so far.
    ///
    pub fn misses (& self) -> u32 
    {
        LIVES - self.lives
    }

    ///
    /// Returns a fresh game over the word; non-letters are dropped and letters uppercased.
    ///
    pub fn new (word: & str) -> Hangman 
    {
        let word = word.bytes()
            .filter(|b| b.is_ascii_alphabetic())
            .map(|b| b.to_ascii_uppercase())
            .collect::<Vec<u8>>();
        let revealed = vec![false; word.len()];

        Hangman { word, revealed, guessed: [false; 26], lives: LIVES }
    }

    ///
    /// Starts over with a new word and full lives.
    ///
    pub fn reset (& mut self, word: & str)
    {
        * self = Hangman::new(word);
    }

    ///
    /// Returns whether the game is won, lost or still being played.
    ///
    pub fn standing (& self) -> Standing 
    {
        if self.lives == 0 
        {
            Standing::Lost
        }
        else if self.revealed.iter().all(|& shown| shown)
        {
            Standing::Won
        }
        else 
        {
            Standing::Playing
        }
    }

    ///
    /// Returns the secret word.
    ///
    pub fn word (& self) -> String 
    {
        String::from_utf8_lossy(& self.word).into_owned()
    }
}
