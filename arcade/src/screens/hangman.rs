
use rand::rngs::StdRng;

use crate::colour::Colour;
use crate::geometry::{Point, Rect};
use crate::hangman::{Guess, Hangman, Standing};
use crate::input::{InputSource, Key, MouseButton, Press};
use crate::render::Renderer;
use crate::screen::Screen;
use crate::setup::Setup;
use crate::widget::{Button, Style};

use utils::*;

const PADDING : f32 = 16.0;

///
/// The gallows, one group of rectangles per miss.
///
const GALLOWS : [& [Rect]; 7] = 
[
    & [Rect::new(560.0, 590.0, 200.0, 10.0)],
    & [Rect::new(600.0, 320.0, 10.0, 270.0)],
    & [Rect::new(600.0, 320.0, 120.0, 10.0), Rect::new(710.0, 320.0, 4.0, 40.0)],
    & [Rect::new(692.0, 360.0, 40.0, 40.0)],
    & [Rect::new(707.0, 400.0, 10.0, 80.0)],
    & [Rect::new(677.0, 420.0, 70.0, 8.0)],
    & [Rect::new(690.0, 480.0, 8.0, 60.0), Rect::new(726.0, 480.0, 8.0, 60.0)]
];

const BUTTON : Style = Style { border: Colour::BLACK, fill: Colour::WHITE, text: Colour::BLACK, text_size: 24.0, thickness: 2.0 };

///
/// The Hangman screen.
///
pub struct HangmanScreen 
{
    hangman: Hangman,
    setup: Setup,
    rng: StdRng,

    keys: Vec<Button>,
    reset: Button
}

impl HangmanScreen 
{
    ///
    /// Returns the underlying game.
    ///
    pub fn hangman (& self) -> & Hangman 
    {
        & self.hangman
    }

    ///
    /// Returns the letter buttons, A to Z.
    ///
    pub fn keys (& self) -> & [Button]
    {
        & self.keys
    }

    ///
    /// Returns the reset button.
    ///
    pub fn reset_button (& self) -> & Button 
    {
        & self.reset
    }

    fn click (& mut self, point: Point)
    {
        if self.reset.hit(point)
        {
            let word = self.setup.pick_hangman(& mut self.rng).to_owned();
            self.hangman.reset(& word);
            self.keys.iter_mut().for_each(|key| key.set_visible(true));
            log::info!("The game was reset.");
            return;
        }

        let letter = self.keys.iter()
            .find(|key| key.hit(point))
            .and_then(|key| key.label().chars().next());
        if let Some(letter) = letter 
        {
            self.guess(letter);
        }
    }

    fn guess (& mut self, letter: char)
    {
        match self.hangman.guess(letter)
        {
            Ok(Guess::Hit(n)) => log::debug!("'{}' occurs {} time(s): {}.", letter, n, self.hangman.masked()),
            Ok(Guess::Miss)   => log::debug!("'{}' missed; {} lives remain.", letter, self.hangman.lives()),
            Err(_)            => return
        };

        let slot = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        if let Some(key) = self.keys.get_mut(slot)
        {
            key.set_visible(false);
        }

        match self.hangman.standing()
        {
            Standing::Won     => log::info!("Guessed '{}' with {} lives left.", self.hangman.word(), self.hangman.lives()),
            Standing::Lost    => log::info!("Hanged; the word was '{}'.", self.hangman.word()),
            Standing::Playing => {}
        };
    }
}

impl Screen for HangmanScreen 
{
    const TITLE : & 'static str = "Hangman";
    const SIZE : (u32, u32) = (800, 800);

    fn new (setup: & Setup) -> HangmanScreen 
    {
        let mut rng = setup.rng();
        let word = setup.pick_hangman(& mut rng).to_owned();

        let keys = ('A' ..= 'Z').enumerate()
            .map(|(i, letter)| 
            {
                let rect = match i < 14 
                {
                    true  => Rect::new(PADDING + 56.0 * i as f32, 680.0, 40.0, 50.0),
                    false => Rect::new(56.0 + 56.0 * (i - 14) as f32, 740.0, 40.0, 50.0)
                };
                Button::new(rect, & letter.to_string())
            })
            .collect();

        let mut reset = Button::new(Rect::new(325.0, 640.0, 150.0, 30.0), "RESET");
        reset.set_visible(false);

        HangmanScreen 
        {
            hangman: Hangman::new(& word),
            setup: setup.clone(),
            rng,
            keys,
            reset
        }
    }

    fn update (& mut self, input: & dyn InputSource)
    {
        for press in input.presses()
        {
            match * press 
            {
                Press::Key(Key::Letter(letter))         => self.guess(letter),
                Press::Button(MouseButton::Left, point) => self.click(point),
                _                                       => {}
            };
            self.reset.set_visible(self.hangman.standing() != Standing::Playing);
        }
    }

    fn draw (& self, renderer: & mut dyn Renderer)
    {
        for key in & self.keys 
        {
            key.draw(renderer, & BUTTON);
        }

        renderer.draw_text(& format!("Your Word is: {}", self.hangman.masked()), 36.0, Point::new(10.0, 70.0), Colour::BLACK);
        renderer.draw_text(& format!("You have {} lives remaining", self.hangman.lives()), 36.0, Point::new(10.0, 130.0), Colour::BLACK);

        match self.hangman.standing()
        {
            Standing::Won     => renderer.draw_text_centred("You have correctly Guessed the Word!", 36.0, 400.0, 240.0, Colour::BLACK),
            Standing::Lost    => renderer.draw_text_centred(& format!("The Correct Word was: {}", self.hangman.word()), 30.0, 400.0, 240.0, Colour::BLACK),
            Standing::Playing => {}
        };

        for stage in GALLOWS.iter().take(self.hangman.misses() as usize)
        {
            for & rect in stage.iter()
            {
                renderer.fill_rect(rect, Colour::BLACK);
            }
        }

        self.reset.draw(renderer, & BUTTON);
    }

    fn background (& self) -> Colour 
    {
        Colour::WHITE
    }
}
