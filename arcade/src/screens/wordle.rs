
use rand::rngs::StdRng;

use crate::colour::Colour;
use crate::geometry::{Point, Rect};
use crate::input::{InputSource, Key, MouseButton, Press};
use crate::render::Renderer;
use crate::screen::Screen;
use crate::setup::Setup;
use crate::widget::{Button, Style};
use crate::wordle::{Feedback, Standing, Wordle, MAX_GUESSES, WORD_LENGTH};

use utils::notate::Notate;
use utils::*;

const CELL_SIZE : f32 = 80.0;
const CELL_GAP  : f32 = 10.0;

const CORRECT : Colour = Colour::from_rgb_u32(0x16F816);
const PRESENT : Colour = Colour::from_rgb_u32(0xF3F527);
const ABSENT  : Colour = Colour::from_rgb_u32(0x3A3A3C);
const UNUSED  : Colour = Colour::from_rgb_u32(0x444142);
const SPENT   : Colour = Colour::from_rgb_u32(0x1E1E20);

///
/// The Wordle screen: a 6x5 grid of guesses, an on-screen keyboard coloured by the 
/// best feedback per letter, ENTER and BACK, and a NEW WORD button once the game ends.
///
/// The physical keyboard works as well: letters, Return and Backspace.
///
pub struct WordleScreen 
{
    wordle: Wordle,
    setup: Setup,
    rng: StdRng,

    keys: Vec<Button>,
    enter: Button,
    back: Button,
    new_word: Button
}

impl WordleScreen 
{
    ///
    /// Returns the on-screen letter keys, A to Z.
    ///
    pub fn keys (& self) -> & [Button]
    {
        & self.keys
    }

    ///
    /// Returns the underlying game.
    ///
    pub fn wordle (& self) -> & Wordle 
    {
        & self.wordle
    }

    fn cell (row: usize, col: usize) -> Rect 
    {
        Rect::new(
            CELL_GAP + (CELL_SIZE + CELL_GAP) * col as f32,
            CELL_GAP + (CELL_SIZE + CELL_GAP) * row as f32,
            CELL_SIZE,
            CELL_SIZE
        )
    }

    fn fill (feedback: Feedback) -> Colour 
    {
        match feedback 
        {
            Feedback::Correct => CORRECT,
            Feedback::Present => PRESENT,
            Feedback::Absent  => ABSENT
        }
    }

    fn apply (& mut self, key: Key)
    {
        // Rejected keystrokes (full row, empty row, finished game) are ignored.

        match key 
        {
            Key::Letter(letter) => { let _ = self.wordle.type_letter(letter); },
            Key::Backspace      => { let _ = self.wordle.backspace(); },
            Key::Enter          => self.submit(),
            _                   => {}
        };
    }

    fn click (& mut self, point: Point)
    {
        if self.new_word.hit(point)
        {
            let secret = self.setup.pick_wordle(& mut self.rng);
            self.wordle.reset(secret);
            log::info!("A new word was drawn.");
            return;
        }

        let key = if self.enter.hit(point)
        {
            Some(Key::Enter)
        }
        else if self.back.hit(point)
        {
            Some(Key::Backspace)
        }
        else 
        {
            self.keys.iter()
                .find(|key| key.hit(point))
                .and_then(|key| key.label().chars().next())
                .map(Key::Letter)
        };

        if let Some(key) = key 
        {
            self.apply(key);
        }
    }

    fn submit (& mut self)
    {
        let guess = String::from_utf8_lossy(self.wordle.pending()).into_owned();
        if let Ok(feedback) = self.wordle.submit()
        {
            log::debug!("Guess {} scored {:?}.", guess, feedback);

            match self.wordle.standing()
            {
                Standing::Won     => log::info!("{} in {} guesses.", notate!("Solved '{}'", self.wordle.secret()), self.wordle.guesses().len()),
                Standing::Lost    => log::info!("{}", notate!("Out of guesses; the word was '{}'.", self.wordle.secret())),
                Standing::Playing => {}
            };
        }
    }
}

impl Screen for WordleScreen 
{
    const TITLE : & 'static str = "Wordle";
    const SIZE : (u32, u32) = (460, 800);

    fn new (setup: & Setup) -> WordleScreen 
    {
        let mut rng = setup.rng();
        let secret = setup.pick_wordle(& mut rng);

        // Two keyboard rows: A to N, then O to Z.

        let keys = ('A' ..= 'Z').enumerate()
            .map(|(i, letter)| 
            {
                let rect = match i < 14 
                {
                    true  => Rect::new(12.0 + 32.0 * i as f32, 600.0, 20.0, 40.0),
                    false => Rect::new(44.0 + 32.0 * (i - 14) as f32, 650.0, 20.0, 40.0)
                };
                Button::new(rect, & letter.to_string())
            })
            .collect();

        let mut new_word = Button::new(Rect::new(170.0, 755.0, 120.0, 30.0), "NEW WORD");
        new_word.set_visible(false);

        WordleScreen 
        {
            wordle: Wordle::new(secret),
            setup: setup.clone(),
            rng,
            keys,
            enter: Button::new(Rect::new(40.0, 710.0, 120.0, 30.0), "ENTER"),
            back: Button::new(Rect::new(300.0, 710.0, 120.0, 30.0), "BACK"),
            new_word
        }
    }

    fn update (& mut self, input: & dyn InputSource)
    {
        for press in input.presses()
        {
            match * press 
            {
                Press::Key(key)                         => self.apply(key),
                Press::Button(MouseButton::Left, point) => self.click(point),
                Press::Button(..)                       => {}
            };
            self.new_word.set_visible(self.wordle.standing() != Standing::Playing);
        }
    }

    fn draw (& self, renderer: & mut dyn Renderer)
    {
        let guesses = self.wordle.guesses();

        for row in 0 .. MAX_GUESSES 
        {
            for col in 0 .. WORD_LENGTH 
            {
                let rect = WordleScreen::cell(row, col);

                let (letter, fill) = if let Some((word, feedback)) = guesses.get(row)
                {
                    (Some(word.letters()[col]), WordleScreen::fill(feedback[col]))
                }
                else if row == guesses.len()
                {
                    (self.wordle.pending().get(col).copied(), Colour::BLACK)
                }
                else 
                {
                    (None, Colour::BLACK)
                };

                renderer.frame_rect(rect, 1.0, Colour::WHITE, fill);
                if let Some(letter) = letter 
                {
                    renderer.draw_text_in(& (letter as char).to_string(), 45.0, & rect, Colour::WHITE);
                }
            }
        }

        match self.wordle.standing()
        {
            Standing::Won     => renderer.draw_text_centred("You have Guessed the Word!", 25.0, 230.0, 555.0, CORRECT),
            Standing::Lost    => renderer.draw_text_centred(& format!("The word was {}", self.wordle.secret()), 25.0, 230.0, 555.0, PRESENT),
            Standing::Playing => {}
        };

        let keyboard = self.wordle.keyboard();
        for key in & self.keys 
        {
            let letter = key.label().chars().next().unwrap_or('?');
            let fill = match keyboard.status(letter)
            {
                Some(Feedback::Absent) => SPENT,
                Some(feedback)         => WordleScreen::fill(feedback),
                None                   => UNUSED
            };
            key.draw(renderer, & Style { border: fill, fill, text: Colour::WHITE, text_size: 16.0, thickness: 0.0 });
        }

        let utility = Style { border: UNUSED, fill: UNUSED, text: Colour::WHITE, text_size: 20.0, thickness: 0.0 };
        self.enter.draw(renderer, & utility);
        self.back.draw(renderer, & utility);
        self.new_word.draw(renderer, & utility);
    }
}
