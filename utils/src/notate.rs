
use super::error::*;

#[macro_export]
///
/// A format! enhancement for building notational strings where every argument
/// implements the Notate trait.
///
macro_rules! notate
{
    ($fmt:expr, $($args:expr),*) =>
    {
        format!($fmt, $($args.notate()),*)
    };
}

///
/// A trait for values with a canonical, human-typeable text form.
///
/// notate() must always produce text that parse() accepts; parse() may also
/// accept looser spellings of the same value.
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
/// Notates each item and joins the results with the given separator.
///
pub fn notate_seq<T: Notate> (items: & [T], separator: & str) -> String
{
    items.iter().map(|item| item.notate()).collect::<Vec<String>>().join(separator)
}

///
/// Parses a separated sequence of notations; empty segments are skipped.
///
pub fn parse_seq<T: Notate> (s: & str, separator: & str) -> Result<Vec<T>>
{
    s.split(separator)
        .map(|part| part.trim())
        .filter(|part| ! part.is_empty())
        .enumerate()
        .map(|(i, part)| T::parse(part).context(format!("Invalid notation in entry {}.", i + 1)))
        .collect()
}
