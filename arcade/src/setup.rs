
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hangman;
use super::wordle::Word;

use utils::notate::Notate;
use utils::*;

///
/// The game options as written in the configuration file.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Options 
{
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "wordle_words")]
    pub wordle_words: Vec<String>,

    #[serde(default = "hangman_words")]
    pub hangman_words: Vec<String>
}

impl Default for Options 
{
    fn default () -> Options 
    {
        Options 
        {
            seed: None,
            wordle_words: wordle_words(),
            hangman_words: hangman_words()
        }
    }
}

fn wordle_words () -> Vec<String>
{
    ["SPEED", "CRANE", "PLANT", "GHOST", "BRICK", "FLAME", "SHORE", "TRAIN", "QUEEN", "MOUSE"]
        .iter().map(|w| w.to_string()).collect()
}

fn hangman_words () -> Vec<String>
{
    hangman::DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

impl Options 
{
    ///
    /// Validates the options into a setup the games can rely on.
    ///
    pub fn compile (& self) -> Result<Setup>
    {
        let context = "Invalid game options.";

        let mut wordle = Vec::new();
        for word in & self.wordle_words 
        {
            wordle.push(Word::parse(word).context(context)?);
        }
        if wordle.is_empty()
        {
            return Err(error::error!("The Wordle word list is empty.")).context(context);
        }

        let mut hangman = Vec::new();
        for word in & self.hangman_words 
        {
            if word.is_empty() || ! word.chars().all(|c| c.is_ascii_alphabetic())
            {
                return Err(error::error!("Invalid Hangman word '{}'; expected letters only.", word)).context(context);
            }
            hangman.push(word.to_ascii_uppercase());
        }
        if hangman.is_empty()
        {
            return Err(error::error!("The Hangman word list is empty.")).context(context);
        }

        Ok(Setup { seed: self.seed, wordle, hangman })
    }
}

///
/// Validated game options: non-empty word lists of well-formed words.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup 
{
    seed: Option<u64>,
    wordle: Vec<Word>,
    hangman: Vec<String>
}

impl Default for Setup 
{
    fn default () -> Setup 
    {
        Setup 
        {
            seed: None,
            wordle: wordle_words().iter().map(|w| Word::from_letters(w.as_bytes())).collect(),
            hangman: hangman_words()
        }
    }
}

impl Setup 
{
    ///
    /// Picks a Hangman word.
    ///
    pub fn pick_hangman<R: Rng + ?Sized> (& self, rng: & mut R) -> & str 
    {
        & self.hangman[rng.gen_range(0 .. self.hangman.len())]
    }

    ///
    /// Picks a Wordle secret.
    ///
    pub fn pick_wordle<R: Rng + ?Sized> (& self, rng: & mut R) -> Word 
    {
        self.wordle[rng.gen_range(0 .. self.wordle.len())]
    }

    ///
    /// Returns a generator seeded from the options, or from entropy when no seed is set.
    ///
    pub fn rng (& self) -> StdRng 
    {
        match self.seed 
        {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy()
        }
    }

    ///
    /// Returns the Wordle secrets.
    ///
    pub fn wordle_words (& self) -> & [Word]
    {
        & self.wordle
    }
}
