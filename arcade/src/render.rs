
use super::colour::Colour;
use super::geometry::{Point, Rect};

///
/// The drawing surface a game paints onto once per frame.
///
/// Positions are window coordinates; text is positioned by its top-left corner and 
/// sized in pixels.
///
pub trait Renderer 
{
    ///
    /// Fills a rectangle.
    ///
    fn fill_rect (& mut self, rect: Rect, colour: Colour);

    ///
    /// Draws a single line of text.
    ///
    fn draw_text (& mut self, text: & str, size: f32, position: Point, colour: Colour);

    ///
    /// Measures the advance width of a line of text at the given size.
    ///
    fn text_width (& mut self, text: & str, size: f32) -> f32;

    ///
    /// Draws text horizontally centred on `centre_x`, with its top at `y`.
    ///
    fn draw_text_centred (& mut self, text: & str, size: f32, centre_x: f32, y: f32, colour: Colour)
    {
        let width = self.text_width(text, size);
        self.draw_text(text, size, Point::new(centre_x - width / 2.0, y), colour);
    }

    ///
    /// Draws text centred both ways inside a rectangle.
    ///
    fn draw_text_in (& mut self, text: & str, size: f32, rect: & Rect, colour: Colour)
    {
        let y = rect.y() + (rect.height() - size) / 2.0;
        self.draw_text_centred(text, size, rect.centre().x(), y, colour);
    }

    ///
    /// Fills a rectangle with a border of the given thickness.
    ///
    fn frame_rect (& mut self, rect: Rect, thickness: f32, border: Colour, fill: Colour)
    {
        self.fill_rect(rect, border);
        self.fill_rect(rect.inset(thickness), fill);
    }
}
