
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use utils::*;

///
/// The length of every secret and guess.
///
pub const WORD_LENGTH : usize = 5;

///
/// The number of guesses before the game is lost.
///
pub const MAX_GUESSES : usize = 6;

///
/// The classification of one guessed letter. Ordered from worst to best, so the 
/// keyboard can keep the maximum seen.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feedback 
{
    Absent,
    Present,
    Correct
}

///
/// A five-letter uppercase ASCII word.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl std::fmt::Display for Word 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        for & b in & self.0 
        {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl notate::Notate for Word 
{
    fn notate (& self) -> String 
    {
        self.to_string()
    }

    fn parse (s: & str) -> Result<Word>
    {
        lazy_static!
        {
            static ref WORD_RE : Regex = Regex::new(r"^[A-Za-z]{5}$").unwrap();
        }

        match WORD_RE.is_match(s)
        {
            true  => Ok(Word::from_letters(s.as_bytes())),
            false => Err(error::error!("Invalid notation '{}' for word; expected five letters.", s))
        }
    }
}

impl Word 
{
    ///
    /// Determines whether the letter occurs anywhere in the word.
    ///
    pub fn contains (& self, letter: u8) -> bool 
    {
        self.0.contains(& letter.to_ascii_uppercase())
    }

    ///
    /// Builds a word from five ASCII letters, uppercasing them; callers guarantee 
    /// the letters are alphabetic.
    ///
    pub(crate) fn from_letters (letters: & [u8]) -> Word 
    {
        let mut word = [b'A'; WORD_LENGTH];
        for (slot, letter) in word.iter_mut().zip(letters)
        {
            * slot = letter.to_ascii_uppercase();
        }
        Word(word)
    }

    ///
    /// Returns the letters.
    ///
    pub fn letters (& self) -> & [u8; WORD_LENGTH]
    {
        & self.0
    }
}

///
/// Classifies every position of the guess against the secret in two passes.
///
/// The first pass marks exact matches Correct. The second marks every remaining 
/// position Present when its letter occurs anywhere in the secret. Repeated letters 
/// are not deduplicated against the secret's letter counts, so a guess may report 
/// more Present letters than the secret holds.
///
pub fn score (secret: & Word, guess: & Word) -> [Feedback; WORD_LENGTH]
{
    let mut feedback = [Feedback::Absent; WORD_LENGTH];

    for i in 0 .. WORD_LENGTH 
    {
        if guess.0[i] == secret.0[i]
        {
            feedback[i] = Feedback::Correct;
        }
    }

    for i in 0 .. WORD_LENGTH 
    {
        if feedback[i] != Feedback::Correct && secret.contains(guess.0[i])
        {
            feedback[i] = Feedback::Present;
        }
    }

    feedback
}

///
/// The best feedback seen so far for each letter of the alphabet.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keyboard 
{
    keys: [Option<Feedback>; 26]
}

impl Keyboard 
{
    ///
    /// Forgets every letter.
    ///
    pub fn clear (& mut self)
    {
        self.keys = [None; 26];
    }

    ///
    /// Folds a scored guess into the keyboard, keeping the best status per letter.
    ///
    pub fn record (& mut self, guess: & Word, feedback: & [Feedback; WORD_LENGTH])
    {
        for (& letter, & status) in guess.0.iter().zip(feedback)
        {
            if let Some(slot) = Keyboard::slot(letter)
            {
                let key = & mut self.keys[slot];
                * key = Some(key.map_or(status, |seen| seen.max(status)));
            }
        }
    }

    ///
    /// Returns the best status seen for the letter, or None if it was never guessed.
    ///
    pub fn status (& self, letter: char) -> Option<Feedback>
    {
        match letter.is_ascii_alphabetic()
        {
            true  => Keyboard::slot(letter as u8).and_then(|slot| self.keys[slot]),
            false => None
        }
    }

    fn slot (letter: u8) -> Option<usize>
    {
        let letter = letter.to_ascii_uppercase();
        match letter.is_ascii_uppercase()
        {
            true  => Some((letter - b'A') as usize),
            false => None
        }
    }
}

///
/// Reasons a keystroke or submission is refused.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GuessError 
{
    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("the current row is full")]
    RowFull,

    #[error("the current row is incomplete")]
    RowIncomplete,

    #[error("the current row is empty")]
    RowEmpty,

    #[error("the game is already over")]
    GameOver
}

///
/// The progress of a Wordle game.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Standing 
{
    Playing,
    Won,
    Lost
}

///
/// A game of Wordle: the secret, the scored guesses so far, the row being typed and 
/// the keyboard colouring.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wordle 
{
    secret: Word,
    guesses: Vec<(Word, [Feedback; WORD_LENGTH])>,
    pending: Vec<u8>,
    keyboard: Keyboard
}

impl Wordle 
{
    ///
    /// Removes the last letter of the row being typed.
    ///
    pub fn backspace (& mut self) -> std::result::Result<(), GuessError>
    {
        self.ensure_playing()?;
        self.pending.pop().map(|_| ()).ok_or(GuessError::RowEmpty)
    }

    ///
    /// Returns the scored guesses, oldest first.
    ///
    pub fn guesses (& self) -> & [(Word, [Feedback; WORD_LENGTH])]
    {
        & self.guesses
    }

    ///
    /// Returns the keyboard colouring.
    ///
    pub fn keyboard (& self) -> & Keyboard 
    {
        & self.keyboard
    }

    ///
    /// Returns a fresh game with the given secret.
    ///
    pub fn new (secret: Word) -> Wordle 
    {
        Wordle { secret, guesses: Vec::new(), pending: Vec::new(), keyboard: Keyboard::default() }
    }

    ///
    /// Returns the letters typed into the current row.
    ///
    pub fn pending (& self) -> & [u8]
    {
        & self.pending
    }

    ///
    /// Starts over with a new secret.
    ///
    pub fn reset (& mut self, secret: Word)
    {
        self.secret = secret;
        self.guesses.clear();
        self.pending.clear();
        self.keyboard.clear();
    }

    ///
    /// Returns the secret.
    ///
    pub fn secret (& self) -> & Word 
    {
        & self.secret
    }

    ///
    /// Returns whether the game is won, lost or still being played.
    ///
    pub fn standing (& self) -> Standing 
    {
        let solved = self.guesses.last()
            .map_or(false, |(_, feedback)| feedback.iter().all(|& f| f == Feedback::Correct));

        if solved 
        {
            Standing::Won
        }
        else if self.guesses.len() >= MAX_GUESSES 
        {
            Standing::Lost
        }
        else 
        {
            Standing::Playing
        }
    }

    ///
    /// Scores the full current row, colours the keyboard and starts the next row.
    ///
    pub fn submit (& mut self) -> std::result::Result<[Feedback; WORD_LENGTH], GuessError>
    {
        self.ensure_playing()?;

        if self.pending.len() < WORD_LENGTH 
        {
            return Err(GuessError::RowIncomplete);
        }

        let guess = Word::from_letters(& self.pending);
        let feedback = score(& self.secret, & guess);

        self.keyboard.record(& guess, & feedback);
        self.guesses.push((guess, feedback));
        self.pending.clear();

        Ok(feedback)
    }

    ///
    /// Appends a letter to the row being typed.
    ///
    pub fn type_letter (& mut self, letter: char) -> std::result::Result<(), GuessError>
    {
        self.ensure_playing()?;

        if ! letter.is_ascii_alphabetic()
        {
            return Err(GuessError::NotALetter(letter));
        }
        if self.pending.len() >= WORD_LENGTH 
        {
            return Err(GuessError::RowFull);
        }

        self.pending.push(letter.to_ascii_uppercase() as u8);
        Ok(())
    }

    fn ensure_playing (& self) -> std::result::Result<(), GuessError>
    {
        match self.standing()
        {
            Standing::Playing => Ok(()),
            _                 => Err(GuessError::GameOver)
        }
    }
}
