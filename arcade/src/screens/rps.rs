
use rand::rngs::StdRng;

use crate::colour::Colour;
use crate::geometry::{Point, Rect};
use crate::input::InputSource;
use crate::render::Renderer;
use crate::rps::{Choice, Tally};
use crate::screen::Screen;
use crate::setup::Setup;
use crate::widget::{Button, Style};

use utils::*;

const BUTTON : Style = Style { border: Colour::WHITE, fill: Colour::WHITE, text: Colour::BLACK, text_size: 22.0, thickness: 0.0 };

///
/// The Rock-Paper-Scissors screen: three buttons against a random opponent.
///
pub struct RpsScreen 
{
    tally: Tally,
    rng: StdRng,
    buttons: [Button; 3]
}

impl RpsScreen 
{
    ///
    /// Returns the choice buttons, in the order rock, paper, scissors.
    ///
    pub fn buttons (& self) -> & [Button; 3]
    {
        & self.buttons
    }

    ///
    /// Returns the results so far.
    ///
    pub fn tally (& self) -> & Tally 
    {
        & self.tally
    }
}

impl Screen for RpsScreen 
{
    const TITLE : & 'static str = "Rock Paper Scissors";
    const SIZE : (u32, u32) = (640, 480);

    fn new (setup: & Setup) -> RpsScreen 
    {
        let buttons = std::array::from_fn(|i| 
        {
            Button::new(Rect::new(10.0 + 210.0 * i as f32, 40.0, 200.0, 40.0), & Choice::ALL[i].to_string())
        });

        RpsScreen { tally: Tally::default(), rng: setup.rng(), buttons }
    }

    fn update (& mut self, input: & dyn InputSource)
    {
        for point in input.clicks()
        {
            let i = match self.buttons.iter().position(|button| button.hit(point))
            {
                Some(i) => i,
                None    => continue
            };

            let player = Choice::ALL[i];
            let computer = Choice::random(& mut self.rng);
            let verdict = self.tally.play(player, computer);

            log::debug!("{} against {}: {} ({}-{}-{}).", player, computer, verdict, self.tally.wins, self.tally.losses, self.tally.draws);
        }
    }

    fn draw (& self, renderer: & mut dyn Renderer)
    {
        for button in & self.buttons 
        {
            button.draw(renderer, & BUTTON);
        }

        let (player, computer, verdict) = match self.tally.last 
        {
            Some((player, computer, verdict)) => (player.to_string(), computer.to_string(), verdict.to_string()),
            None                              => (String::new(), String::new(), String::new())
        };

        renderer.draw_text(& format!("User's Choice: {}", player), 24.0, Point::new(10.0, 105.0), Colour::WHITE);
        renderer.draw_text(& format!("Comp's Choice: {}", computer), 24.0, Point::new(10.0, 155.0), Colour::WHITE);
        renderer.draw_text(& format!("Result: {}", verdict), 24.0, Point::new(10.0, 205.0), Colour::WHITE);
        renderer.draw_text(
            & format!("Wins: {}  Losses: {}  Draws: {}", self.tally.wins, self.tally.losses, self.tally.draws), 
            24.0, 
            Point::new(10.0, 255.0), 
            Colour::WHITE
        );
    }
}
