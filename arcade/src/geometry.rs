
use utils::*;

///
/// A point in screen space, in pixels, with the origin at the top-left of the window.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Point 
{
    x: f32,
    y: f32
}

impl std::fmt::Display for Point 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl std::ops::Add for Point 
{
    type Output = Point;

    fn add (self, rhs: Point) -> Point 
    {
        Point { x: self.x + rhs.x, y: self.y + rhs.y } 
    }
}

impl Point 
{
    ///
    /// Returns a new point.
    ///
    pub const fn new (x: f32, y: f32) -> Point
    {
        Point { x, y }
    }

    ///
    /// Returns x.
    ///
    pub fn x (& self) -> f32
    {
        self.x
    }

    ///
    /// Returns y.
    ///
    pub fn y (& self) -> f32
    {
        self.y
    }
}

///
/// An axis-aligned rectangle in screen space.
///
/// Containment is inclusive on every edge, so a point lying exactly on the border 
/// belongs to the rectangle.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Rect 
{
    x: f32,
    y: f32,
    width: f32,
    height: f32
}

impl std::fmt::Display for Rect 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "[{} {}x{}]", self.origin(), self.width, self.height)
    }
}

impl Rect 
{
    ///
    /// Returns the bottom edge.
    ///
    pub fn bottom (& self) -> f32 
    {
        self.y + self.height
    }

    ///
    /// Returns the centre of this rectangle.
    ///
    pub fn centre (& self) -> Point 
    {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    ///
    /// Determines whether the point lies inside this rectangle or on its border.
    ///
    pub fn contains (& self, point: Point) -> bool 
    {
        self.x <= point.x() && point.x() <= self.right()
            && self.y <= point.y() && point.y() <= self.bottom()
    }

    ///
    /// Returns the height.
    ///
    pub fn height (& self) -> f32 
    {
        self.height
    }

    ///
    /// Returns a rectangle shrunk by the given margin on every side.
    ///
    pub fn inset (& self, margin: f32) -> Rect 
    {
        Rect::new(self.x + margin, self.y + margin, self.width - 2.0 * margin, self.height - 2.0 * margin)
    }

    ///
    /// Determines whether two rectangles touch or overlap; touching edges count.
    ///
    pub fn intersects (& self, other: & Rect) -> bool 
    {
        self.x <= other.right() && other.x <= self.right()
            && self.y <= other.bottom() && other.y <= self.bottom()
    }

    ///
    /// Returns a new rectangle.
    ///
    pub const fn new (x: f32, y: f32, width: f32, height: f32) -> Rect 
    {
        Rect { x, y, width, height }
    }

    ///
    /// Returns the top-left corner.
    ///
    pub fn origin (& self) -> Point 
    {
        Point::new(self.x, self.y)
    }

    ///
    /// Returns the right edge.
    ///
    pub fn right (& self) -> f32 
    {
        self.x + self.width
    }

    ///
    /// Moves the top-left corner to the given position, keeping the size.
    ///
    pub fn set_origin (& mut self, x: f32, y: f32)
    {
        self.x = x;
        self.y = y;
    }

    ///
    /// Returns the width.
    ///
    pub fn width (& self) -> f32 
    {
        self.width
    }

    ///
    /// Returns x.
    ///
    pub fn x (& self) -> f32 
    {
        self.x
    }

    ///
    /// Returns y.
    ///
    pub fn y (& self) -> f32 
    {
        self.y
    }
}

///
/// Inclusive-bounds containment test of a point against a widget rectangle.
///
pub fn hit_test (point: Point, rect: & Rect) -> bool 
{
    rect.contains(point)
}

///
/// Returns the index of the first rectangle containing the point, if any.
///
/// Neighbouring widgets may share an edge; the earliest one wins so that a single 
/// click never maps to two widgets.
///
pub fn hit_index (point: Point, rects: & [Rect]) -> Option<usize>
{
    rects.iter().position(|rect| hit_test(point, rect))
}
