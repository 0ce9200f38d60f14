
use super::colour::Colour;
use super::input::InputSource;
use super::render::Renderer;
use super::setup::Setup;

///
/// A single-screen game driven by a frame loop: one update, then one draw, per tick.
///
/// The screen owns all of its state; the loop owns the window, the input source and 
/// the renderer.
///
pub trait Screen 
    where Self: Sized
{
    ///
    /// The window title.
    ///
    const TITLE : & 'static str;

    ///
    /// The fixed window size in pixels.
    ///
    const SIZE : (u32, u32);

    ///
    /// Builds the starting state.
    ///
    fn new (setup: & Setup) -> Self;

    ///
    /// Consumes this tick's input; must not block.
    ///
    fn update (& mut self, input: & dyn InputSource);

    ///
    /// Paints the current state.
    ///
    fn draw (& self, renderer: & mut dyn Renderer);

    ///
    /// The colour the frame is cleared to before drawing.
    ///
    fn background (& self) -> Colour 
    {
        Colour::BLACK
    }
}
