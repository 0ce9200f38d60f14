
use coffee::input::{ButtonState, Event, Input, keyboard, mouse};

use arcade::{InputSource, Key, MouseButton, Point, Press, Snapshot};

///
/// The window's input for one frame, folded into a snapshot of held keys and fresh 
/// presses. Clearing at the end of the frame forgets the presses but not what is held.
///
#[derive(Clone, Debug)]
pub struct InputState
{
    snapshot: Snapshot
}

impl InputState 
{
    ///
    /// Returns the accumulated snapshot.
    ///
    pub fn snapshot (& self) -> & Snapshot 
    {
        & self.snapshot
    }
}

impl Input for InputState 
{
    fn clear (& mut self)
    {
        self.snapshot.settle();
    }

    fn new () -> InputState 
    {
        InputState { snapshot: Snapshot::new() }
    }

    fn update (& mut self, event: Event)
    {
        match event 
        {
            Event::Mouse(mouse_event) => match mouse_event 
            {
                mouse::Event::CursorMoved { x, y } => 
                {
                    self.snapshot.move_cursor(x, y);
                },
                mouse::Event::Input { state, button } => 
                {
                    if let Some(button) = mouse_button(button)
                    {
                        match state 
                        {
                            ButtonState::Pressed  => self.snapshot.press_button(button),
                            ButtonState::Released => self.snapshot.release_button(button)
                        };
                    }
                },
                _ => {}
            },
            Event::Keyboard(keyboard_event) => match keyboard_event 
            {
                keyboard::Event::Input { key_code, state } => 
                {
                    if let Some(key) = key(key_code)
                    {
                        match state 
                        {
                            ButtonState::Pressed  => self.snapshot.press_key(key),
                            ButtonState::Released => self.snapshot.release_key(key)
                        };
                    }
                },
                _ => {}
            },
            _ => {}
        }
    }
}

impl InputSource for InputState 
{
    fn cursor_position (& self) -> Point 
    {
        self.snapshot.cursor_position()
    }

    fn is_key_down (& self, key: Key) -> bool 
    {
        self.snapshot.is_key_down(key)
    }

    fn presses (& self) -> & [Press]
    {
        self.snapshot.presses()
    }
}

fn mouse_button (button: mouse::Button) -> Option<MouseButton>
{
    match button 
    {
        mouse::Button::Left  => Some(MouseButton::Left),
        mouse::Button::Right => Some(MouseButton::Right),
        _                    => None
    }
}

fn key (key_code: keyboard::KeyCode) -> Option<Key>
{
    use keyboard::KeyCode as Code;

    const LETTERS : [Code; 26] = 
    [
        Code::A, Code::B, Code::C, Code::D, Code::E, Code::F, Code::G, Code::H, Code::I, 
        Code::J, Code::K, Code::L, Code::M, Code::N, Code::O, Code::P, Code::Q, Code::R, 
        Code::S, Code::T, Code::U, Code::V, Code::W, Code::X, Code::Y, Code::Z
    ];

    match key_code 
    {
        Code::Return => Some(Key::Enter),
        Code::Back   => Some(Key::Backspace),
        Code::Up     => Some(Key::Up),
        Code::Down   => Some(Key::Down),
        _            => LETTERS.iter()
            .position(|& code| code == key_code)
            .map(|i| Key::Letter((b'A' + i as u8) as char))
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    fn press (state: & mut InputState, key_code: keyboard::KeyCode)
    {
        state.update(Event::Keyboard(keyboard::Event::Input { key_code, state: ButtonState::Pressed }));
    }

    fn release (state: & mut InputState, key_code: keyboard::KeyCode)
    {
        state.update(Event::Keyboard(keyboard::Event::Input { key_code, state: ButtonState::Released }));
    }

    #[test]
    fn held_key_fires_once ()
    {
        let mut state = InputState::new();

        press(& mut state, keyboard::KeyCode::Q);
        assert!(state.is_key_just_pressed(Key::Letter('Q')));

        state.clear();
        press(& mut state, keyboard::KeyCode::Q);
        assert!(! state.is_key_just_pressed(Key::Letter('Q')));
        assert!(state.is_key_down(Key::Letter('Q')));

        release(& mut state, keyboard::KeyCode::Q);
        press(& mut state, keyboard::KeyCode::Q);
        assert!(state.is_key_just_pressed(Key::Letter('Q')));
    }

    #[test]
    fn click_lands_at_cursor_until_cleared ()
    {
        let mut state = InputState::new();

        state.update(Event::Mouse(mouse::Event::CursorMoved { x: 12.0, y: 34.0 }));
        state.update(Event::Mouse(mouse::Event::Input { state: ButtonState::Pressed, button: mouse::Button::Left }));
        assert_eq!(state.click(), Some(Point::new(12.0, 34.0)));

        state.clear();
        assert_eq!(state.click(), None);
        assert_eq!(state.cursor_position(), Point::new(12.0, 34.0));
    }

    #[test]
    fn keystrokes_within_one_frame_keep_order_and_count ()
    {
        let mut state = InputState::new();
        for code in [keyboard::KeyCode::S, keyboard::KeyCode::A, keyboard::KeyCode::E, keyboard::KeyCode::E]
        {
            press(& mut state, code);
            release(& mut state, code);
        }

        assert_eq!(state.letters_just_pressed(), vec!['S', 'A', 'E', 'E']);
    }

    #[test]
    fn unmapped_keys_are_ignored ()
    {
        let mut state = InputState::new();
        press(& mut state, keyboard::KeyCode::Escape);

        assert!(state.snapshot().letters_just_pressed().is_empty());
        assert_eq!(key(keyboard::KeyCode::Back), Some(Key::Backspace));
    }
}
