
use std::marker::PhantomData;

use crate::board::CELLS;
use crate::colour::Colour;
use crate::game::{Game, Variant};
use crate::geometry::{hit_index, Rect};
use crate::input::InputSource;
use crate::mark::Mark;
use crate::phase::Phase;
use crate::render::Renderer;
use crate::screen::Screen;
use crate::setup::Setup;
use crate::widget::{Button, Style};

use utils::notate::Notate;
use utils::*;

const CELL_SIZE : f32 = 150.0;

const EXPIRING : Colour = Colour::from_rgb_u32(0x707070);

///
/// The per-variant layout and wording of a tic-tac-toe screen.
///
pub trait Rules 
{
    const VARIANT : Variant;
    const TITLE : & 'static str;
    const SIZE : (u32, u32);

    ///
    /// The top-left corner of the 3x3 grid.
    ///
    const ORIGIN : (f32, f32);

    ///
    /// Where the reset button appears once the game is over.
    ///
    const RESET : Rect;

    const MARK_SIZE : f32;
    const STATUS_SIZE : f32;

    ///
    /// The line shown above the board while the game is running.
    ///
    fn turn_message (to_move: Mark) -> String;
}

///
/// Marks stay for the whole game.
///
pub struct ClassicRules;

impl Rules for ClassicRules 
{
    const VARIANT : Variant = Variant::Classic;
    const TITLE : & 'static str = "Tic-Tac-Toe";
    const SIZE : (u32, u32) = (600, 600);
    const ORIGIN : (f32, f32) = (75.0, 75.0);
    const RESET : Rect = Rect::new(225.0, 530.0, 150.0, 50.0);
    const MARK_SIZE : f32 = 60.0;
    const STATUS_SIZE : f32 = 20.0;

    fn turn_message (to_move: Mark) -> String 
    {
        format!("Player with {} plays next", to_move.label())
    }
}

///
/// Each player keeps only their three most recent marks.
///
pub struct InfiniteRules;

impl Rules for InfiniteRules 
{
    const VARIANT : Variant = Variant::Infinite;
    const TITLE : & 'static str = "Infinite Tic-Tac-Toe";
    const SIZE : (u32, u32) = (800, 600);
    const ORIGIN : (f32, f32) = (175.0, 75.0);
    const RESET : Rect = Rect::new(300.0, 535.0, 200.0, 55.0);
    const MARK_SIZE : f32 = 75.0;
    const STATUS_SIZE : f32 = 50.0;

    fn turn_message (to_move: Mark) -> String 
    {
        format!("It's {}'s Turn!", to_move.label())
    }
}

pub type Classic = TicTacToe<ClassicRules>;
pub type Infinite = TicTacToe<InfiniteRules>;

///
/// A tic-tac-toe screen: nine clickable cells over a game, a status line, and a reset 
/// button shown once the game is won or drawn.
///
pub struct TicTacToe<R: Rules>
{
    game: Game,
    cells: [Rect; CELLS],
    reset: Button,
    rules: PhantomData<R>
}

impl<R: Rules> TicTacToe<R>
{
    ///
    /// Returns the underlying game.
    ///
    pub fn game (& self) -> & Game 
    {
        & self.game
    }

    ///
    /// Returns the cell rectangles in row-major order.
    ///
    pub fn cells (& self) -> & [Rect; CELLS]
    {
        & self.cells
    }

    ///
    /// Returns the reset button.
    ///
    pub fn reset_button (& self) -> & Button 
    {
        & self.reset
    }

    fn status (& self) -> String 
    {
        match self.game.phase()
        {
            Phase::InProgress => R::turn_message(self.game.to_move()),
            Phase::Won(mark)  => format!("Player with {} Wins!", mark.label()),
            Phase::Draw       => "It's a Draw!".to_owned()
        }
    }

    fn try_place (& mut self, index: usize)
    {
        // Clicks on filled cells are ignored.

        if let Ok(placement) = self.game.place(index)
        {
            log::debug!(
                "{} placed at {}{}; board '{}'.", 
                placement.mark.label(), 
                placement.index, 
                placement.evicted.map_or(String::new(), |e| format!(", expiring {}", e)),
                self.game.board().notate()
            );

            let phase = self.game.phase();
            if phase.is_over()
            {
                log::info!("{}\n{}", phase, self.game.board());
            }
        }
    }
}

impl<R: Rules> Screen for TicTacToe<R>
{
    const TITLE : & 'static str = R::TITLE;
    const SIZE : (u32, u32) = R::SIZE;

    fn new (_setup: & Setup) -> TicTacToe<R>
    {
        let (x, y) = R::ORIGIN;
        let cells = std::array::from_fn(|i| 
        {
            let (row, col) = ((i / 3) as f32, (i % 3) as f32);
            Rect::new(x + col * CELL_SIZE, y + row * CELL_SIZE, CELL_SIZE, CELL_SIZE)
        });

        let mut reset = Button::new(R::RESET, "Reset");
        reset.set_visible(false);

        TicTacToe { game: Game::new(R::VARIANT), cells, reset, rules: PhantomData }
    }

    fn update (& mut self, input: & dyn InputSource)
    {
        for point in input.clicks()
        {
            if self.game.phase().is_over()
            {
                if self.reset.hit(point)
                {
                    self.game.reset();
                    log::info!("The board was reset.");
                }
            }
            else if let Some(index) = hit_index(point, & self.cells)
            {
                self.try_place(index);
            }

            self.reset.set_visible(self.game.phase().is_over());
        }
    }

    fn draw (& self, renderer: & mut dyn Renderer)
    {
        let width = R::SIZE.0 as f32;
        renderer.draw_text_centred(& self.status(), R::STATUS_SIZE, width / 2.0, 10.0, Colour::WHITE);

        let expiring = self.game.expiring();

        for (i, cell) in self.cells.iter().enumerate()
        {
            renderer.frame_rect(* cell, 2.0, Colour::WHITE, Colour::BLACK);

            let mark = self.game.board().get(i).unwrap_or_default();
            if mark.is_player()
            {
                let colour = match expiring == Some(i)
                {
                    true  => EXPIRING,
                    false => Colour::WHITE
                };
                renderer.draw_text_in(mark.label(), R::MARK_SIZE, cell, colour);
            }
        }

        self.reset.draw(renderer, & Style 
        {
            border: Colour::WHITE,
            fill: Colour::BLACK,
            text: Colour::WHITE,
            text_size: R::STATUS_SIZE.min(30.0),
            thickness: 2.0
        });
    }
}
