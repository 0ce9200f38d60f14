
use coffee::graphics::{Color, Font, Mesh, Rectangle, Shape, Target, Text};

use arcade::{Colour, Point, Rect, Renderer};

///
/// A renderer that batches rectangles into one mesh and text into one font pass; 
/// text is always painted over the rectangles.
///
pub struct Canvas<'a>
{
    mesh: Mesh,
    font: & 'a mut Font
}

impl<'a> Canvas<'a>
{
    ///
    /// Paints everything batched so far onto the target.
    ///
    pub fn finish (self, target: & mut Target)
    {
        self.mesh.draw(target);
        self.font.draw(target);
    }

    ///
    /// Returns an empty canvas that writes with the given font.
    ///
    pub fn new (font: & 'a mut Font) -> Canvas<'a>
    {
        Canvas { mesh: Mesh::new(), font }
    }
}

impl<'a> Renderer for Canvas<'a>
{
    fn fill_rect (& mut self, rect: Rect, colour: Colour)
    {
        if rect.width() <= 0.0 || rect.height() <= 0.0 
        {
            return;
        }

        self.mesh.fill(
            Shape::Rectangle(
                Rectangle 
                {
                    x: rect.x(),
                    y: rect.y(),
                    width: rect.width(),
                    height: rect.height()
                }
            ),
            color(colour)
        );
    }

    fn draw_text (& mut self, text: & str, size: f32, position: Point, colour: Colour)
    {
        self.font.add(
            Text 
            {
                content: text,
                position: coffee::graphics::Point::new(position.x(), position.y()),
                size,
                color: color(colour),
                ..Text::default()
            }
        );
    }

    fn text_width (& mut self, text: & str, size: f32) -> f32 
    {
        let (width, _) = self.font.measure(Text { content: text, size, ..Text::default() });
        width 
    }
}

///
/// Converts a colour to coffee's floating-point representation.
///
pub fn color (colour: Colour) -> Color 
{
    Color::new(
        colour.r() as f32 / 255.0,
        colour.g() as f32 / 255.0,
        colour.b() as f32 / 255.0,
        colour.a() as f32 / 255.0
    )
}
