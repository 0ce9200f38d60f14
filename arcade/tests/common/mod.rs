
#![allow(dead_code)]

use arcade::*;

///
/// One recorded draw call.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Call 
{
    Fill(Rect, Colour),
    Text(String, Point, Colour)
}

///
/// A renderer that remembers what it was asked to draw. Every glyph is half as wide 
/// as the text is tall.
///
#[derive(Debug, Default)]
pub struct Recorder 
{
    pub calls: Vec<Call>
}

impl Recorder 
{
    pub fn texts (& self) -> Vec<& str>
    {
        self.calls.iter()
            .filter_map(|call| match call 
            {
                Call::Text(text, _, _) => Some(text.as_str()),
                _                      => None
            })
            .collect()
    }

    pub fn text_colour (& self, wanted: & str) -> Option<Colour>
    {
        self.calls.iter().find_map(|call| match call 
        {
            Call::Text(text, _, colour) if text == wanted => Some(* colour),
            _                                             => None
        })
    }
}

impl Renderer for Recorder 
{
    fn fill_rect (& mut self, rect: Rect, colour: Colour)
    {
        self.calls.push(Call::Fill(rect, colour));
    }

    fn draw_text (& mut self, text: & str, _size: f32, position: Point, colour: Colour)
    {
        self.calls.push(Call::Text(text.to_owned(), position, colour));
    }

    fn text_width (& mut self, text: & str, size: f32) -> f32 
    {
        text.len() as f32 * size / 2.0
    }
}

///
/// Drives a screen one tick at a time through a persistent input snapshot.
///
pub struct Driver<S: Screen>
{
    pub screen: S,
    pub input: Snapshot
}

impl<S: Screen> Driver<S>
{
    pub fn new (setup: & Setup) -> Driver<S>
    {
        Driver { screen: S::new(setup), input: Snapshot::new() }
    }

    /// Runs one update, then forgets the presses it consumed.
    pub fn tick (& mut self)
    {
        self.screen.update(& self.input);
        self.input.settle();
    }

    /// A full click: press at the point, tick, release.
    pub fn click (& mut self, x: f32, y: f32)
    {
        self.input.move_cursor(x, y);
        self.input.press_button(MouseButton::Left);
        self.tick();
        self.input.release_button(MouseButton::Left);
    }

    /// A full keystroke: press, tick, release.
    pub fn tap (& mut self, key: Key)
    {
        self.input.press_key(key);
        self.tick();
        self.input.release_key(key);
    }

    /// Several keystrokes that all land before the next tick.
    pub fn tap_all (& mut self, keys: & [Key])
    {
        for & key in keys 
        {
            self.input.press_key(key);
            self.input.release_key(key);
        }
        self.tick();
    }

    /// Several clicks that all land before the next tick.
    pub fn click_all (& mut self, points: & [(f32, f32)])
    {
        for & (x, y) in points 
        {
            self.input.move_cursor(x, y);
            self.input.press_button(MouseButton::Left);
            self.input.release_button(MouseButton::Left);
        }
        self.tick();
    }

    pub fn type_word (& mut self, word: & str)
    {
        for letter in word.chars()
        {
            self.tap(Key::Letter(letter.to_ascii_uppercase()));
        }
    }

    pub fn render (& self) -> Recorder 
    {
        let mut recorder = Recorder::default();
        self.screen.draw(& mut recorder);
        recorder
    }
}

///
/// A setup with single-word lists, so every pick is known in advance.
///
pub fn setup (wordle: & str, hangman: & str) -> Setup 
{
    Options 
    {
        seed: Some(17),
        wordle_words: vec![wordle.to_owned()],
        hangman_words: vec![hangman.to_owned()]
    }
    .compile()
    .unwrap()
}
