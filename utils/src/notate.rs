
use super::error::*;

#[macro_export]
///
/// A format! enhancement for building notational strings where all subcomponents 
/// are implementors of the Notate trait.
///
macro_rules! notate 
{
    ($fmt:expr, $($args:expr),*) => 
    {
        format!($fmt, $($args.notate()),*)
    };
}

///
/// A trait representing the concept of canonical notation.
///
/// An implementor provides a canonical notation by way of notate(),
/// and recognizes potentially non-canonical notation by way of parse().
///
pub trait Notate 
    where Self: Sized
{
    ///
    /// Returns the canonical notational string for this object.
    ///
    fn notate (& self) -> String;

    ///
    /// Constructs a new object from the given notational string, provided
    /// that the notation is valid.
    ///
    fn parse (s: & str) -> Result<Self>;
}

///
/// Parses a string in which every character is the notation of one object, 
/// e.g. a board written out cell by cell.
///
pub fn parse_chars<T: Notate> (s: & str) -> Result<Vec<T>>
{
    let mut result = Vec::with_capacity(s.len());
    for (i, c) in s.chars().enumerate()
    {
        let item = T::parse(& c.to_string()).context(format!("Invalid notation at character {}.", i))?;
        result.push(item);
    }
    Ok(result)
}

///
/// Notates a sequence of objects back to back.
///
pub fn notate_all<'a, T: Notate + 'a> (items: impl IntoIterator<Item = & 'a T>) -> String 
{
    items.into_iter().map(|item| item.notate()).collect::<String>()
}

#[cfg(test)]
mod tests 
{
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Bit(bool);

    impl Notate for Bit 
    {
        fn notate (& self) -> String 
        {
            if self.0 { "1".to_owned() } else { "0".to_owned() }
        }

        fn parse (s: & str) -> Result<Bit>
        {
            match s 
            {
                "1" => Ok(Bit(true)),
                "0" => Ok(Bit(false)),
                _   => Err(crate::error!("Invalid bit '{}'.", s))
            }
        }
    }

    #[test]
    fn parses_every_character ()
    {
        let bits = parse_chars::<Bit>("101").unwrap();
        assert_eq!(bits, vec![Bit(true), Bit(false), Bit(true)]);
        assert_eq!(notate_all(& bits), "101");
    }

    #[test]
    fn macro_notates_every_argument ()
    {
        let line = crate::notate!("{} then {}", Bit(true), Bit(false));
        assert_eq!(line, "1 then 0");
    }

    #[test]
    fn reports_the_offending_character ()
    {
        let err = parse_chars::<Bit>("10x1").unwrap_err();
        assert!(format!("{:#}", err).contains("character 2"));
    }
}
