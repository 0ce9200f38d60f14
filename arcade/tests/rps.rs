
use rand::rngs::StdRng;
use rand::SeedableRng;

use arcade::rps::judge;
use arcade::{Choice, Tally, Verdict};

#[test]
fn each_hand_loses_to_exactly_one ()
{
    for player in Choice::ALL 
    {
        for computer in Choice::ALL 
        {
            let expected = if player == computer 
            {
                Verdict::Draw
            }
            else if computer.beaten_by() == player 
            {
                Verdict::PlayerWins
            }
            else 
            {
                Verdict::ComputerWins
            };
            assert_eq!(judge(player, computer), expected);
        }
    }

    assert_eq!(judge(Choice::Paper, Choice::Rock), Verdict::PlayerWins);
    assert_eq!(judge(Choice::Rock, Choice::Paper), Verdict::ComputerWins);
    assert_eq!(judge(Choice::Scissors, Choice::Paper), Verdict::PlayerWins);
}

#[test]
fn verdicts_read_like_the_scoreboard ()
{
    assert_eq!(Verdict::PlayerWins.to_string(), "Player Wins!");
    assert_eq!(Verdict::ComputerWins.to_string(), "Comp Wins!");
    assert_eq!(Verdict::Draw.to_string(), "It's a Draw!");
}

#[test]
fn tally_counts_every_round ()
{
    let mut tally = Tally::default();
    tally.play(Choice::Rock, Choice::Scissors);
    tally.play(Choice::Rock, Choice::Paper);
    tally.play(Choice::Rock, Choice::Rock);
    tally.play(Choice::Paper, Choice::Rock);

    assert_eq!((tally.wins, tally.losses, tally.draws), (2, 1, 1));
    assert_eq!(tally.last, Some((Choice::Paper, Choice::Rock, Verdict::PlayerWins)));
}

#[test]
fn random_choices_cover_every_hand ()
{
    let mut rng = StdRng::seed_from_u64(3);
    let picks : Vec<Choice> = (0 .. 300).map(|_| Choice::random(& mut rng)).collect();

    for choice in Choice::ALL 
    {
        assert!(picks.contains(& choice));
    }
}
