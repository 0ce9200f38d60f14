
use arcade::hangman::{Guess, GuessError, Standing, LIVES};
use arcade::Hangman;

#[test]
fn hit_reveals_every_occurrence ()
{
    let mut hangman = Hangman::new("Messi");

    assert_eq!(hangman.masked(), "_ _ _ _ _");
    assert_eq!(hangman.guess('s'), Ok(Guess::Hit(2)));
    assert_eq!(hangman.masked(), "_ _ S S _");
    assert_eq!(hangman.lives(), LIVES);
}

#[test]
fn miss_costs_a_life_and_repeats_are_refused ()
{
    let mut hangman = Hangman::new("MESSI");

    assert_eq!(hangman.guess('Z'), Ok(Guess::Miss));
    assert_eq!(hangman.lives(), LIVES - 1);
    assert_eq!(hangman.misses(), 1);

    assert_eq!(hangman.guess('z'), Err(GuessError::AlreadyGuessed('Z')));
    assert_eq!(hangman.guess('?'), Err(GuessError::NotALetter('?')));
    assert_eq!(hangman.lives(), LIVES - 1);
    assert!(hangman.is_guessed('Z'));
}

#[test]
fn revealing_the_word_wins ()
{
    let mut hangman = Hangman::new("MESSI");
    for letter in ['Q', 'M', 'E', 'S', 'I']
    {
        hangman.guess(letter).unwrap();
    }

    assert_eq!(hangman.standing(), Standing::Won);
    assert_eq!(hangman.guess('A'), Err(GuessError::GameOver));
}

#[test]
fn seventh_miss_loses ()
{
    let mut hangman = Hangman::new("MESSI");
    for letter in "ABCDFGH".chars()
    {
        assert_eq!(hangman.standing(), Standing::Playing);
        hangman.guess(letter).unwrap();
    }

    assert_eq!(hangman.lives(), 0);
    assert_eq!(hangman.standing(), Standing::Lost);
    assert_eq!(hangman.word(), "MESSI");
}

#[test]
fn reset_restores_lives_and_letters ()
{
    let mut hangman = Hangman::new("MESSI");
    hangman.guess('A').unwrap();
    hangman.guess('M').unwrap();

    hangman.reset("Salah");

    assert_eq!(hangman.lives(), LIVES);
    assert_eq!(hangman.word(), "SALAH");
    assert!(! hangman.is_guessed('A'));
    assert_eq!(hangman.masked(), "_ _ _ _ _");
}
