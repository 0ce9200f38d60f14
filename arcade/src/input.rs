
use std::collections::HashSet;

use super::geometry::Point;

///
/// The mouse buttons the games respond to.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton 
{
    Left,
    Right
}

///
/// The keys the games respond to.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key 
{
    ///
    /// An uppercase ASCII letter.
    ///
    Letter(char),
    Enter,
    Backspace,
    Up,
    Down
}

///
/// One press that went down since the previous update.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Press 
{
    ///
    /// A key went down.
    ///
    Key(Key),

    ///
    /// A mouse button went down with the cursor at the given point.
    ///
    Button(MouseButton, Point)
}

///
/// The input consumed by a game once per update.
///
/// "Just pressed" is edge-triggered: it holds only on the update following the 
/// transition from released to pressed, however long the button stays down. Every 
/// physical press is reported once, in the order it happened, even when several 
/// land within the same update.
///
pub trait InputSource 
{
    ///
    /// Returns the cursor position in window coordinates.
    ///
    fn cursor_position (& self) -> Point;

    ///
    /// Determines whether the key is currently held.
    ///
    fn is_key_down (& self, key: Key) -> bool;

    ///
    /// Returns the presses since the previous update, oldest first.
    ///
    fn presses (& self) -> & [Press];

    ///
    /// Returns the position of the first left click since the previous update.
    ///
    fn click (& self) -> Option<Point>
    {
        self.clicks().first().copied()
    }

    ///
    /// Returns the positions of every left click since the previous update, in order.
    ///
    fn clicks (& self) -> Vec<Point>
    {
        self.presses().iter()
            .filter_map(|press| match press 
            {
                Press::Button(MouseButton::Left, point) => Some(* point),
                _                                       => None
            })
            .collect()
    }

    ///
    /// Determines whether the button went down since the previous update.
    ///
    fn is_button_just_pressed (& self, button: MouseButton) -> bool 
    {
        self.presses().iter().any(|press| matches!(press, Press::Button(b, _) if * b == button))
    }

    ///
    /// Determines whether the key went down since the previous update.
    ///
    fn is_key_just_pressed (& self, key: Key) -> bool 
    {
        self.presses().contains(& Press::Key(key))
    }

    ///
    /// Returns the letters typed since the previous update, in the order they were typed.
    ///
    fn letters_just_pressed (& self) -> Vec<char>
    {
        self.presses().iter()
            .filter_map(|press| match press 
            {
                Press::Key(Key::Letter(c)) => Some(* c),
                _                          => None
            })
            .collect()
    }
}

///
/// An accumulated view of input events that tracks both held state and the 
/// presses that happened since the last update.
///
/// Repeated press events for a held key or button (e.g. keyboard auto-repeat) do 
/// not produce a second press; releasing and pressing again does.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot 
{
    cursor: Point,
    buttons_down: HashSet<MouseButton>,
    keys_down: HashSet<Key>,
    presses: Vec<Press>
}

impl Snapshot 
{
    ///
    /// Folds a later snapshot into this one: held state and cursor are replaced, 
    /// presses queue up behind the ones already held until the next settle().
    ///
    pub fn absorb (& mut self, later: & Snapshot)
    {
        self.cursor = later.cursor;
        self.buttons_down = later.buttons_down.clone();
        self.keys_down = later.keys_down.clone();
        self.presses.extend(later.presses.iter().copied());
    }

    ///
    /// Moves the cursor.
    ///
    pub fn move_cursor (& mut self, x: f32, y: f32)
    {
        self.cursor = Point::new(x, y);
    }

    ///
    /// Returns an empty snapshot with the cursor at the origin.
    ///
    pub fn new () -> Snapshot 
    {
        Snapshot::default()
    }

    ///
    /// Records a button going down at the current cursor position.
    ///
    pub fn press_button (& mut self, button: MouseButton)
    {
        if self.buttons_down.insert(button)
        {
            self.presses.push(Press::Button(button, self.cursor));
        }
    }

    ///
    /// Records a key going down.
    ///
    pub fn press_key (& mut self, key: Key)
    {
        if self.keys_down.insert(key)
        {
            self.presses.push(Press::Key(key));
        }
    }

    ///
    /// Records a button going up.
    ///
    pub fn release_button (& mut self, button: MouseButton)
    {
        self.buttons_down.remove(& button);
    }

    ///
    /// Records a key going up.
    ///
    pub fn release_key (& mut self, key: Key)
    {
        self.keys_down.remove(& key);
    }

    ///
    /// Forgets the presses once an update has consumed them.
    ///
    pub fn settle (& mut self)
    {
        self.presses.clear();
    }
}

impl InputSource for Snapshot 
{
    fn cursor_position (& self) -> Point 
    {
        self.cursor 
    }

    fn is_key_down (& self, key: Key) -> bool 
    {
        self.keys_down.contains(& key)
    }

    fn presses (& self) -> & [Press]
    {
        & self.presses
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    fn tap (snapshot: & mut Snapshot, key: Key)
    {
        snapshot.press_key(key);
        snapshot.release_key(key);
    }

    #[test]
    fn presses_keep_their_order_and_count ()
    {
        let mut snapshot = Snapshot::new();
        for letter in ['S', 'A', 'E', 'E']
        {
            tap(& mut snapshot, Key::Letter(letter));
        }
        tap(& mut snapshot, Key::Backspace);

        assert_eq!(snapshot.letters_just_pressed(), vec!['S', 'A', 'E', 'E']);
        assert_eq!(snapshot.presses().last(), Some(& Press::Key(Key::Backspace)));
    }

    #[test]
    fn auto_repeat_is_not_a_press ()
    {
        let mut snapshot = Snapshot::new();
        snapshot.press_key(Key::Enter);
        snapshot.press_key(Key::Enter);
        assert_eq!(snapshot.presses().len(), 1);

        snapshot.settle();
        assert!(! snapshot.is_key_just_pressed(Key::Enter));
        assert!(snapshot.is_key_down(Key::Enter));
    }

    #[test]
    fn clicks_remember_where_they_landed ()
    {
        let mut snapshot = Snapshot::new();
        snapshot.move_cursor(1.0, 2.0);
        snapshot.press_button(MouseButton::Left);
        snapshot.release_button(MouseButton::Left);
        snapshot.move_cursor(3.0, 4.0);
        snapshot.press_button(MouseButton::Left);

        assert_eq!(snapshot.clicks(), vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(snapshot.click(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn absorbing_queues_later_presses_behind_earlier_ones ()
    {
        let mut pending = Snapshot::new();
        let mut frame = Snapshot::new();

        tap(& mut frame, Key::Letter('S'));
        pending.absorb(& frame);
        frame.settle();
        tap(& mut frame, Key::Letter('A'));
        pending.absorb(& frame);

        assert_eq!(pending.letters_just_pressed(), vec!['S', 'A']);
    }
}
