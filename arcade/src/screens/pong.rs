
use crate::colour::Colour;
use crate::geometry::Point;
use crate::input::{InputSource, Key};
use crate::pong::{Controls, Drive, Pong};
use crate::render::Renderer;
use crate::screen::Screen;
use crate::setup::Setup;

use utils::*;

const SCORE      : Colour = Colour::from_rgb_u32(0x64C8FA);
const HIGH_SCORE : Colour = Colour::from_rgb_u32(0x96C8C8);

///
/// The Pong screen. W/S drive the left paddle and Up/Down drive the right one, for 
/// as long as they are held.
///
pub struct PongScreen 
{
    pong: Pong
}

impl PongScreen 
{
    ///
    /// Returns the underlying game.
    ///
    pub fn pong (& self) -> & Pong 
    {
        & self.pong
    }

    fn drive (input: & dyn InputSource, up: Key, down: Key) -> Drive 
    {
        match (input.is_key_down(up), input.is_key_down(down))
        {
            (true, false) => Drive::Up,
            (false, true) => Drive::Down,
            _             => Drive::Still
        }
    }
}

impl Screen for PongScreen 
{
    const TITLE : & 'static str = "Pong";
    const SIZE : (u32, u32) = (640, 480);

    fn new (_: & Setup) -> PongScreen 
    {
        PongScreen { pong: Pong::new() }
    }

    fn update (& mut self, input: & dyn InputSource)
    {
        let controls = Controls 
        {
            left: PongScreen::drive(input, Key::Letter('W'), Key::Letter('S')),
            right: PongScreen::drive(input, Key::Up, Key::Down)
        };

        let (score, high_score) = (self.pong.score(), self.pong.high_score());
        self.pong.step(controls);

        if self.pong.score() < score 
        {
            log::debug!("Rally ended at {}.", score);
        }
        if self.pong.high_score() > high_score 
        {
            log::debug!("New high score: {}.", self.pong.high_score());
        }
    }

    fn draw (& self, renderer: & mut dyn Renderer)
    {
        renderer.fill_rect(* self.pong.left(), Colour::WHITE);
        renderer.fill_rect(* self.pong.right(), Colour::WHITE);
        renderer.fill_rect(* self.pong.ball(), Colour::WHITE);

        renderer.draw_text(& format!("Score: {}", self.pong.score()), 14.0, Point::new(10.0, 4.0), SCORE);
        renderer.draw_text(& format!("High Score: {}", self.pong.high_score()), 14.0, Point::new(10.0, 24.0), HIGH_SCORE);
    }
}
