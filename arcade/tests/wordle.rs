
use arcade::wordle::{score, GuessError, Standing, MAX_GUESSES};
use arcade::{Feedback, Word, Wordle};
use utils::notate::Notate;

use Feedback::*;

fn word (s: & str) -> Word 
{
    Word::parse(s).unwrap()
}

fn enter (wordle: & mut Wordle, guess: & str) -> [Feedback; 5]
{
    for letter in guess.chars()
    {
        wordle.type_letter(letter).unwrap();
    }
    wordle.submit().unwrap()
}

#[test]
fn repeated_letters_are_not_deduplicated ()
{
    assert_eq!(score(& word("SPEED"), & word("ERASE")), [Present, Absent, Absent, Present, Present]);
}

#[test]
fn exact_matches_take_priority ()
{
    assert_eq!(score(& word("CRANE"), & word("CRANE")), [Correct; 5]);
    assert_eq!(score(& word("CRANE"), & word("NACRE")), [Present, Present, Present, Present, Correct]);
    assert_eq!(score(& word("SPEED"), & word("EERIE")), [Present, Present, Absent, Absent, Present]);
}

#[test]
fn words_are_uppercased_and_validated ()
{
    assert_eq!(word("crane").notate(), "CRANE");
    assert!(Word::parse("CRAN").is_err());
    assert!(Word::parse("CRANES").is_err());
    assert!(Word::parse("CR4NE").is_err());
}

#[test]
fn keyboard_keeps_the_best_status ()
{
    let mut wordle = Wordle::new(word("SPEED"));

    enter(& mut wordle, "ERASE");
    assert_eq!(wordle.keyboard().status('E'), Some(Present));
    enter(& mut wordle, "SPEND");
    assert_eq!(wordle.keyboard().status('E'), Some(Correct));

    // A later Present must not downgrade a Correct key.
    enter(& mut wordle, "ELBOW");
    assert_eq!(wordle.keyboard().status('E'), Some(Correct));
    assert_eq!(wordle.keyboard().status('L'), Some(Absent));
    assert_eq!(wordle.keyboard().status('Z'), None);
}

#[test]
fn keyboard_has_no_status_for_non_ascii_letters ()
{
    let mut wordle = Wordle::new(word("SPEED"));
    enter(& mut wordle, "CRANE");

    assert_eq!(wordle.keyboard().status('A'), Some(Absent));
    assert_eq!(wordle.keyboard().status('a'), Some(Absent));

    // 'Ł' truncates to the byte of 'A'.
    assert_eq!(wordle.keyboard().status('Ł'), None);
    assert_eq!(wordle.keyboard().status('é'), None);
}

#[test]
fn rows_only_accept_five_letters ()
{
    let mut wordle = Wordle::new(word("SPEED"));

    assert_eq!(wordle.backspace(), Err(GuessError::RowEmpty));
    assert_eq!(wordle.type_letter('1'), Err(GuessError::NotALetter('1')));

    for letter in "CRAN".chars()
    {
        wordle.type_letter(letter).unwrap();
    }
    assert_eq!(wordle.submit(), Err(GuessError::RowIncomplete));

    wordle.type_letter('e').unwrap();
    assert_eq!(wordle.type_letter('S'), Err(GuessError::RowFull));
    assert_eq!(wordle.pending(), b"CRANE");

    wordle.submit().unwrap();

    // Backspace never reaches into a submitted row.
    assert_eq!(wordle.backspace(), Err(GuessError::RowEmpty));
    assert_eq!(wordle.guesses()[0].0, word("CRANE"));
}

#[test]
fn solving_wins_and_ends_the_game ()
{
    let mut wordle = Wordle::new(word("SPEED"));
    enter(& mut wordle, "CRANE");
    enter(& mut wordle, "SPEED");

    assert_eq!(wordle.standing(), Standing::Won);
    assert_eq!(wordle.type_letter('A'), Err(GuessError::GameOver));
}

#[test]
fn six_misses_lose ()
{
    let mut wordle = Wordle::new(word("SPEED"));
    for _ in 0 .. MAX_GUESSES - 1 
    {
        enter(& mut wordle, "CRANE");
        assert_eq!(wordle.standing(), Standing::Playing);
    }
    enter(& mut wordle, "CRANE");

    assert_eq!(wordle.standing(), Standing::Lost);
    assert_eq!(wordle.submit(), Err(GuessError::GameOver));
}

#[test]
fn reset_clears_board_and_keyboard ()
{
    let mut wordle = Wordle::new(word("SPEED"));
    enter(& mut wordle, "CRANE");
    wordle.type_letter('Q').unwrap();

    wordle.reset(word("GHOST"));

    assert!(wordle.guesses().is_empty());
    assert!(wordle.pending().is_empty());
    assert_eq!(wordle.keyboard().status('C'), None);
    assert_eq!(wordle.secret(), & word("GHOST"));
}
