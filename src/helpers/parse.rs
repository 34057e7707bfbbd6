use std::fmt::Display;
use std::str::FromStr;

use combine::{
    easy,
    error::StreamError,
    optional,
    parser::char::{char, digit, spaces},
    stream::StreamErrorFor,
    many1, EasyParser, ParseError, Parser, Stream,
};
use num_traits::PrimInt;

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`, failing if any input is left over.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Parses every non-empty line of `s` with the parser built by `make_parser`.
pub fn lines<'a, P, F>(s: &'a str, mut make_parser: F) -> Result<'a, Vec<P::Output>>
where
    P: Parser<easy::Stream<&'a str>>,
    F: FnMut() -> P,
{
    s.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| from_str(line, make_parser()))
        .collect()
}

/// A base-10 integer with an optional leading `-`.
pub fn decimal_integer<Input, T>() -> impl Parser<Input, Output = T>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    T: PrimInt + FromStr,
    T::Err: Display,
{
    (optional(char('-')), many1::<String, _, _>(digit())).and_then(|(sign, digits)| {
        let literal = match sign {
            Some(_) => format!("-{digits}"),
            None => digits,
        };
        literal
            .parse::<T>()
            .map_err(StreamErrorFor::<Input>::message_format)
    })
}

/// Like [`decimal_integer`], skipping any whitespace in front of it.
pub fn padded_integer<Input, T>() -> impl Parser<Input, Output = T>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    T: PrimInt + FromStr,
    T::Err: Display,
{
    spaces().with(decimal_integer())
}

#[cfg(test)]
mod tests {
    use super::*;

    use combine::parser::char::string;

    #[test]
    fn integers() {
        assert_eq!(from_str("42", decimal_integer::<_, u32>()), Ok(42));
        assert_eq!(from_str("-42", decimal_integer::<_, i64>()), Ok(-42));
        assert!(from_str("-42", decimal_integer::<_, u8>()).is_err());
        assert!(from_str("4x", decimal_integer::<_, i32>()).is_err());
    }

    #[test]
    fn padded() {
        let pair = (
            string("<"),
            padded_integer::<_, i32>(),
            string(","),
            padded_integer::<_, i32>(),
            string(">"),
        )
            .map(|(_, x, _, y, _)| (x, y));
        assert_eq!(from_str("< 3, -11>", pair), Ok((3, -11)));
    }

    #[test]
    fn every_line() {
        let parsed = lines("1\n-2\n\n3\n", || decimal_integer::<_, i16>());
        assert_eq!(parsed, Ok(vec![1, -2, 3]));
    }
}
