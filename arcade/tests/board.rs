
use arcade::board::LINES;
use arcade::{Board, Mark, Phase};
use utils::notate::Notate;

fn board (s: & str) -> Board 
{
    Board::parse(s).unwrap()
}

#[test]
fn every_line_wins_for_either_mark ()
{
    for mark in [Mark::X, Mark::O]
    {
        for line in LINES 
        {
            let mut board = Board::blank();
            line.iter().for_each(|& i| board.set(i, mark));

            assert_eq!(board.evaluate(), Phase::Won(mark), "line {:?}", line);
            assert_eq!(board.winning_line(mark), Some(line));
        }
    }
}

#[test]
fn full_board_without_line_is_draw ()
{
    let board = board("XOXXOOOXX");

    assert!(board.is_full());
    assert_eq!(board.evaluate(), Phase::Draw);
}

#[test]
fn open_board_without_line_is_in_progress ()
{
    assert_eq!(Board::blank().evaluate(), Phase::InProgress);
    assert_eq!(board("XOXXOOOX_").evaluate(), Phase::InProgress);
}

#[test]
fn fewer_than_five_marks_never_win ()
{
    for s in ["XX_OO____", "X_O_X_O__", "XO_______", "XXO_O____"]
    {
        assert_eq!(board(s).evaluate(), Phase::InProgress, "{}", s);
    }
}

#[test]
fn win_on_the_last_cell_is_not_a_draw ()
{
    let board = board("XOXOXOOXX");

    assert!(board.is_full());
    assert_eq!(board.evaluate(), Phase::Won(Mark::X));
}

#[test]
fn notation_reads_back ()
{
    let board = board("x.o-_oX,x");

    assert_eq!(board.notate(), "X_O__OX_X");
    assert_eq!(board.count(Mark::X), 3);
    assert_eq!(board.count(Mark::O), 2);
    assert!(Board::parse("XO").is_err());
    assert!(Board::parse("XOXOXOXOQ").is_err());
}
