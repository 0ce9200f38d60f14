
use super::colour::Colour;
use super::geometry::{hit_test, Point, Rect};
use super::render::Renderer;

///
/// How a button is painted.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style 
{
    pub border: Colour,
    pub fill: Colour,
    pub text: Colour,
    pub text_size: f32,
    pub thickness: f32
}

///
/// A clickable, labelled rectangle.
///
/// A hidden button is neither drawn nor clickable.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Button 
{
    rect: Rect,
    label: String,
    visible: bool
}

impl Button 
{
    ///
    /// Paints the button if it is visible.
    ///
    pub fn draw (& self, renderer: & mut dyn Renderer, style: & Style)
    {
        if ! self.visible 
        {
            return;
        }
        renderer.frame_rect(self.rect, style.thickness, style.border, style.fill);
        renderer.draw_text_in(& self.label, style.text_size, & self.rect, style.text);
    }

    ///
    /// Determines whether a click at the point lands on this button.
    ///
    pub fn hit (& self, point: Point) -> bool 
    {
        self.visible && hit_test(point, & self.rect)
    }

    ///
    /// Determines whether the button is shown.
    ///
    pub fn is_visible (& self) -> bool 
    {
        self.visible 
    }

    ///
    /// Returns the label.
    ///
    pub fn label (& self) -> & str 
    {
        & self.label
    }

    ///
    /// Returns a visible button.
    ///
    pub fn new (rect: Rect, label: & str) -> Button 
    {
        Button { rect, label: label.to_owned(), visible: true }
    }

    ///
    /// Returns the rectangle.
    ///
    pub fn rect (& self) -> & Rect 
    {
        & self.rect
    }

    ///
    /// Shows or hides the button.
    ///
    pub fn set_visible (& mut self, visible: bool)
    {
        self.visible = visible;
    }
}
