
use utils::*;

///
/// An 8-bit RGBA colour, independent of the rendering backend.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour 
{
    r: u8,
    g: u8,
    b: u8,
    a: u8
}

impl std::fmt::Display for Colour 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl Colour 
{
    pub const BLACK : Colour = Colour::from_rgb_u32(0x000000);
    pub const WHITE : Colour = Colour::from_rgb_u32(0xFFFFFF);

    ///
    /// Returns the alpha channel.
    ///
    pub fn a (& self) -> u8 
    {
        self.a
    }

    ///
    /// Returns the blue channel.
    ///
    pub fn b (& self) -> u8 
    {
        self.b
    }

    ///
    /// Returns an opaque colour from a 0xRRGGBB literal.
    ///
    pub const fn from_rgb_u32 (rgb: u32) -> Colour 
    {
        Colour 
        {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 0xFF
        }
    }

    ///
    /// Returns the green channel.
    ///
    pub fn g (& self) -> u8 
    {
        self.g
    }

    ///
    /// Returns the red channel.
    ///
    pub fn r (& self) -> u8 
    {
        self.r
    }

    ///
    /// Returns the same colour with a new alpha.
    ///
    pub const fn with_alpha (self, a: u8) -> Colour 
    {
        Colour { a, ..self }
    }
}
