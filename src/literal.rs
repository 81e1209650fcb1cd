// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Range Literals
//!
//! The textual form used by relational databases to render range-typed
//! values, and its bidirectional mapping onto [`Range<T>`].
//!
//! The grammar this module parses and emits (sentinels are case-sensitive):
//!
//! ```raw
//! literal  := "empty" | open interior close
//! open     := "[" (inclusive) | "(" (exclusive)
//! close    := "]" (inclusive) | ")" (exclusive)
//! interior := element "," element        (exactly one unquoted comma)
//! element  := ""                         (unbounded side)
//!           | [+-]? "infinity"           (unbounded side)
//!           | quoted                     (decoded, then transformed)
//!           | raw text                   (trimmed, transformed verbatim)
//! quoted   := '"' (escape | '""' | any)* '"'
//! escape   := '\' any                    (decodes to the escaped character)
//! ```
//!
//! Quoting is what lets a bound element carry characters that would
//! otherwise be read as structure: commas, brackets, parentheses, quotes,
//! backslashes, surrounding whitespace, or a value that happens to spell an
//! infinity sentinel. The serializer quotes exactly those elements, so
//! every value the parser can produce survives a serialize/parse round
//! trip, and literals already in canonical unquoted form round-trip byte
//! for byte.
//!
//! Both directions are pure, synchronous functions. Element conversion is
//! the caller's business: the parser hands each decoded element to a
//! `transform` closure and carries its error untouched, and the serializer
//! asks a `format` closure for the textual form of each bound.

use crate::{flags::RangeFlags, range::Range};
use std::{borrow::Cow, convert::Infallible, fmt};

/// Literal spelled by the distinguished empty range.
const EMPTY: &str = "empty";

/// Sentinel word marking an unbounded side, optionally signed.
const INFINITY: &str = "infinity";

const QUOTE: char = '"';
const ESCAPE: char = '\\';
const SEPARATOR: char = ',';

/// The error type for parsing a range literal.
///
/// The syntax variants cover every way a literal can be malformed; the
/// `Conversion` variant carries a failure of the caller-supplied element
/// transform without modification. The default type parameter keeps the
/// plain [`parse`] signature free of a conversion error that cannot occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError<E = Infallible> {
    /// The literal does not start with `[` or `(` or does not end with
    /// `]` or `)`.
    InvalidDelimiters,
    /// No unquoted comma separates the lower and upper bound.
    MissingSeparator,
    /// More than one unquoted comma appears between the delimiters.
    UnexpectedSeparator,
    /// A quoted bound element is malformed or never closed.
    UnterminatedQuote,
    /// The caller-supplied transform rejected a bound element.
    Conversion(E),
}

impl<E> fmt::Display for ParseError<E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDelimiters => {
                write!(f, "range literal must start with '[' or '(' and end with ']' or ')'")
            }
            Self::MissingSeparator => {
                write!(f, "no separator between the lower and upper bound")
            }
            Self::UnexpectedSeparator => {
                write!(f, "more than one separator between the bounds")
            }
            Self::UnterminatedQuote => write!(f, "unterminated quoted bound element"),
            Self::Conversion(e) => write!(f, "conversion error: {e}"),
        }
    }
}

impl<E> std::error::Error for ParseError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

/// Parses a range literal, keeping each bound element as the raw `String`
/// the literal spelled.
///
/// This is the identity-transform variant of [`parse_with`].
///
/// # Examples
///
/// ```rust
/// # use rangelit::{parse, RangeFlags};
///
/// let range = parse("[a,z)").unwrap();
/// assert_eq!(range.lower.as_deref(), Some("a"));
/// assert_eq!(range.upper.as_deref(), Some("z"));
/// assert_eq!(range.flags, RangeFlags::LOWER_INCLUSIVE);
/// ```
#[inline]
pub fn parse(literal: &str) -> Result<Range<String>, ParseError> {
    parse_with(literal, |raw| Ok::<_, Infallible>(raw.to_owned()))
}

/// Parses a range literal, converting each bound element with `transform`.
///
/// `transform` receives the decoded element text: outer quotes stripped and
/// escapes resolved for quoted elements, the trimmed raw text otherwise. It
/// is never invoked for an unbounded side. A failure of `transform` is
/// returned as [`ParseError::Conversion`] with the original error inside;
/// malformed literals are reported through the syntax variants.
///
/// # Examples
///
/// ```rust
/// # use rangelit::parse_with;
///
/// let range = parse_with("[1,10)", |raw| raw.parse::<i32>()).unwrap();
/// assert_eq!(range.lower, Some(1));
/// assert_eq!(range.upper, Some(10));
/// assert!(range.contains_point(&5));
/// ```
pub fn parse_with<T, E, F>(literal: &str, mut transform: F) -> Result<Range<T>, ParseError<E>>
where
    F: FnMut(&str) -> Result<T, E>,
{
    if literal == EMPTY {
        return Ok(Range::empty());
    }

    let lower_closed = match literal.chars().next() {
        Some('[') => true,
        Some('(') => false,
        _ => return Err(ParseError::InvalidDelimiters),
    };
    let upper_closed = match literal.chars().next_back() {
        Some(']') => true,
        Some(')') => false,
        _ => return Err(ParseError::InvalidDelimiters),
    };

    // The delimiters are ASCII, so the interior slice is on char boundaries.
    let interior = &literal[1..literal.len() - 1];
    let separator = find_separator(interior)?;

    let mut flags = RangeFlags::empty();

    let lower = match decode_element(interior[..separator].trim())? {
        Some(element) => {
            if lower_closed {
                flags |= RangeFlags::LOWER_INCLUSIVE;
            }
            Some(transform(&element).map_err(ParseError::Conversion)?)
        }
        None => {
            // An unbounded side has no boundary value to include, so the
            // inclusive facet is dropped rather than recorded.
            flags |= RangeFlags::LOWER_UNBOUNDED;
            None
        }
    };

    let upper = match decode_element(interior[separator + 1..].trim())? {
        Some(element) => {
            if upper_closed {
                flags |= RangeFlags::UPPER_INCLUSIVE;
            }
            Some(transform(&element).map_err(ParseError::Conversion)?)
        }
        None => {
            flags |= RangeFlags::UPPER_UNBOUNDED;
            None
        }
    };

    Ok(Range::new(lower, upper, flags))
}

/// Locates the single separator comma in the literal interior.
///
/// Runs the quote-aware scan: a backslash shields the following character
/// wherever it appears, a doubled quote stays inside a quoted element, and
/// only a comma at quote depth zero separates the bounds.
fn find_separator<E>(interior: &str) -> Result<usize, ParseError<E>> {
    let mut separator = None;
    let mut in_quotes = false;
    let mut chars = interior.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            ESCAPE => {
                // An escaped character is never structural. A trailing
                // backslash escapes nothing and falls through to the
                // element decoder.
                chars.next();
            }
            QUOTE if in_quotes => {
                if chars.peek().is_some_and(|&(_, next)| next == QUOTE) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            QUOTE => in_quotes = true,
            SEPARATOR if !in_quotes => {
                if separator.is_some() {
                    return Err(ParseError::UnexpectedSeparator);
                }
                separator = Some(index);
            }
            _ => {}
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    separator.ok_or(ParseError::MissingSeparator)
}

/// Decodes one trimmed bound element.
///
/// Returns `None` for an unbounded side (empty text or an infinity
/// sentinel), the unescaped interior for a quoted element, and the text
/// itself otherwise.
fn decode_element<E>(element: &str) -> Result<Option<Cow<'_, str>>, ParseError<E>> {
    if element.is_empty() || is_infinity(element) {
        return Ok(None);
    }
    if element.starts_with(QUOTE) {
        return unescape_quoted(element).map(|decoded| Some(Cow::Owned(decoded)));
    }
    Ok(Some(Cow::Borrowed(element)))
}

/// Returns `true` if `element` spells the infinity sentinel, optionally
/// signed. Quoted elements never reach this check, so a literal value that
/// happens to spell `infinity` stays representable.
fn is_infinity(element: &str) -> bool {
    element.strip_prefix(['-', '+']).unwrap_or(element) == INFINITY
}

/// Unescapes a quoted element, the leading quote already verified.
///
/// A doubled quote decodes to one quote; a backslash decodes to the
/// character that follows it. The closing quote must be the final
/// character of the element: anything after it, a missing closing quote,
/// or a dangling escape is a malformed quoted element.
fn unescape_quoted<E>(element: &str) -> Result<String, ParseError<E>> {
    debug_assert!(element.starts_with(QUOTE));

    let mut decoded = String::with_capacity(element.len().saturating_sub(2));
    let mut chars = element[QUOTE.len_utf8()..].chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(escaped) => decoded.push(escaped),
                None => return Err(ParseError::UnterminatedQuote),
            },
            QUOTE => {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    decoded.push(QUOTE);
                } else if chars.next().is_some() {
                    return Err(ParseError::UnterminatedQuote);
                } else {
                    return Ok(decoded);
                }
            }
            other => decoded.push(other),
        }
    }

    Err(ParseError::UnterminatedQuote)
}

/// Serializes a range whose bound elements are already strings.
///
/// This is the identity-format variant of [`serialize_with`].
///
/// # Examples
///
/// ```rust
/// # use rangelit::{parse, serialize};
///
/// let range = parse("[0,1)").unwrap();
/// assert_eq!(serialize(&range), "[0,1)");
/// ```
#[inline]
pub fn serialize<T>(range: &Range<T>) -> String
where
    T: AsRef<str>,
{
    serialize_with(range, |value| value.as_ref().to_owned())
}

/// Serializes a range, rendering each bound element with `format`.
///
/// The empty range serializes as the `empty` sentinel regardless of its
/// other fields. Otherwise each finite bound is rendered by `format` and
/// quoted whenever the result could be misread as structure; an unbounded
/// side is rendered as nothing. `format` is never invoked for a side that
/// holds no value.
///
/// # Examples
///
/// ```rust
/// # use rangelit::{serialize_with, Range};
///
/// let range: Range<i32> = (1..10).into();
/// assert_eq!(serialize_with(&range, i32::to_string), "[1,10)");
/// ```
pub fn serialize_with<T, F>(range: &Range<T>, mut format: F) -> String
where
    F: FnMut(&T) -> String,
{
    if range.is_empty() {
        return EMPTY.to_owned();
    }

    let mut literal = String::new();

    literal.push(if range.is_lower_bound_closed() { '[' } else { '(' });
    if range.has_lower_bound() {
        if let Some(lower) = &range.lower {
            push_element(&mut literal, &format(lower));
        }
    }
    literal.push(SEPARATOR);
    if range.has_upper_bound() {
        if let Some(upper) = &range.upper {
            push_element(&mut literal, &format(upper));
        }
    }
    literal.push(if range.is_upper_bound_closed() { ']' } else { ')' });

    literal
}

/// Appends one formatted element, quoting it when required.
///
/// Inside quotes only the quote and the escape character themselves need
/// escaping; every other structural character is neutralized by the quotes
/// alone.
fn push_element(literal: &mut String, element: &str) {
    if !needs_quoting(element) {
        literal.push_str(element);
        return;
    }

    literal.push(QUOTE);
    for c in element.chars() {
        if c == QUOTE || c == ESCAPE {
            literal.push(ESCAPE);
        }
        literal.push(c);
    }
    literal.push(QUOTE);
}

/// Returns `true` if `element` would be misread by the parser unless
/// quoted: it is empty (indistinguishable from an unbounded side), spells
/// an infinity sentinel, carries surrounding whitespace the parser would
/// trim away, or contains a structural character.
fn needs_quoting(element: &str) -> bool {
    element.is_empty()
        || element.starts_with(char::is_whitespace)
        || element.ends_with(char::is_whitespace)
        || element.contains([SEPARATOR, QUOTE, ESCAPE, '(', ')', '[', ']'])
        || is_infinity(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_range(
        lower: Option<&str>,
        upper: Option<&str>,
        flags: RangeFlags,
    ) -> Range<String> {
        Range::new(
            lower.map(str::to_owned),
            upper.map(str::to_owned),
            flags,
        )
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(EMPTY).unwrap(), Range::empty());
    }

    #[test]
    fn test_parse_unbounded() {
        let both = RangeFlags::LOWER_UNBOUNDED | RangeFlags::UPPER_UNBOUNDED;
        assert_eq!(parse("(,)").unwrap(), string_range(None, None, both));
        assert_eq!(
            parse("(-infinity,infinity)").unwrap(),
            string_range(None, None, both)
        );
        assert_eq!(parse("(,)").unwrap(), parse("(-infinity,infinity)").unwrap());
        assert_eq!(
            parse("(5,+infinity)").unwrap(),
            string_range(Some("5"), None, RangeFlags::UPPER_UNBOUNDED)
        );
    }

    #[test]
    fn test_parse_strings() {
        let check = |literal, expected: Range<String>| {
            assert_eq!(parse(literal).unwrap(), expected, "{literal}");
        };

        check(
            "(0,)",
            string_range(Some("0"), None, RangeFlags::UPPER_UNBOUNDED),
        );
        check("(0,10)", string_range(Some("0"), Some("10"), RangeFlags::empty()));
        check(
            "(,10)",
            string_range(None, Some("10"), RangeFlags::LOWER_UNBOUNDED),
        );
        check(
            "(0,1]",
            string_range(Some("0"), Some("1"), RangeFlags::UPPER_INCLUSIVE),
        );
        check(
            "[0,1]",
            string_range(
                Some("0"),
                Some("1"),
                RangeFlags::LOWER_INCLUSIVE | RangeFlags::UPPER_INCLUSIVE,
            ),
        );
        check(
            "[0,1)",
            string_range(Some("0"), Some("1"), RangeFlags::LOWER_INCLUSIVE),
        );
    }

    #[test]
    fn test_parse_integers() {
        let integer = |literal| parse_with(literal, |raw| raw.parse::<i32>()).unwrap();

        assert_eq!(integer(EMPTY), Range::empty());
        assert_eq!(
            integer("(,)"),
            Range::new(
                None,
                None,
                RangeFlags::LOWER_UNBOUNDED | RangeFlags::UPPER_UNBOUNDED
            )
        );
        assert_eq!(
            integer("(0,)"),
            Range::new(Some(0), None, RangeFlags::UPPER_UNBOUNDED)
        );
        assert_eq!(
            integer("(0,10)"),
            Range::new(Some(0), Some(10), RangeFlags::empty())
        );
        assert_eq!(
            integer("(,10)"),
            Range::new(None, Some(10), RangeFlags::LOWER_UNBOUNDED)
        );
        assert_eq!(
            integer("[0,1]"),
            Range::new(
                Some(0),
                Some(1),
                RangeFlags::LOWER_INCLUSIVE | RangeFlags::UPPER_INCLUSIVE
            )
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let range = parse_with("[1, 10)", |raw| raw.parse::<i32>()).unwrap();
        assert_eq!(
            range,
            Range::new(Some(1), Some(10), RangeFlags::LOWER_INCLUSIVE)
        );
    }

    #[test]
    fn test_parse_quoted_elements() {
        let check = |literal, expected: Range<String>| {
            assert_eq!(parse(literal).unwrap(), expected, "{literal}");
        };

        check(
            r#"(,"")"#,
            string_range(None, Some(""), RangeFlags::LOWER_UNBOUNDED),
        );
        check(
            r#"("",)"#,
            string_range(Some(""), None, RangeFlags::UPPER_UNBOUNDED),
        );
        check("(A,Z)", string_range(Some("A"), Some("Z"), RangeFlags::empty()));
        check(
            r#"("A","Z")"#,
            string_range(Some("A"), Some("Z"), RangeFlags::empty()),
        );
        check(
            r#"("""A""","""Z""")"#,
            string_range(Some("\"A\""), Some("\"Z\""), RangeFlags::empty()),
        );
        check(
            r#"("\"A\"","\"Z\"")"#,
            string_range(Some("\"A\""), Some("\"Z\""), RangeFlags::empty()),
        );
        check(
            r#"("\(A\)","\(Z\)")"#,
            string_range(Some("(A)"), Some("(Z)"), RangeFlags::empty()),
        );
        check(
            r#"("\[A\]","\[Z\]")"#,
            string_range(Some("[A]"), Some("[Z]"), RangeFlags::empty()),
        );
    }

    #[test]
    fn test_parse_comma_inside_quotes_is_not_a_separator() {
        let range = parse(r#"("a,b","c,d")"#).unwrap();
        assert_eq!(range.lower.as_deref(), Some("a,b"));
        assert_eq!(range.upper.as_deref(), Some("c,d"));
    }

    #[test]
    fn test_parse_escaped_comma_outside_quotes_is_not_a_separator() {
        // The escape shields the comma from the separator scan, but an
        // unquoted element is still handed to the transform verbatim.
        let range = parse(r"(a\,b,c)").unwrap();
        assert_eq!(range.lower.as_deref(), Some(r"a\,b"));
        assert_eq!(range.upper.as_deref(), Some("c"));
    }

    #[test]
    fn test_parse_sentinels_are_case_sensitive() {
        assert_eq!(parse("Empty"), Err(ParseError::InvalidDelimiters));

        let range = parse("(Infinity,)").unwrap();
        assert_eq!(range.lower.as_deref(), Some("Infinity"));
        assert!(range.has_lower_bound());
    }

    #[test]
    fn test_parse_quoted_infinity_is_a_value() {
        let range = parse(r#"("infinity",)"#).unwrap();
        assert_eq!(range.lower.as_deref(), Some("infinity"));
        assert!(range.has_lower_bound());
    }

    #[test]
    fn test_parse_normalizes_inclusive_on_unbounded_sides() {
        let range = parse("[,5]").unwrap();
        assert_eq!(
            range.flags,
            RangeFlags::LOWER_UNBOUNDED | RangeFlags::UPPER_INCLUSIVE
        );
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(parse("[0 1]"), Err(ParseError::MissingSeparator));
        assert_eq!(parse("[]"), Err(ParseError::MissingSeparator));
        // The only comma is inside a quoted element, so no separator exists.
        assert_eq!(parse(r#"(",")"#), Err(ParseError::MissingSeparator));
    }

    #[test]
    fn test_parse_unexpected_separator() {
        assert_eq!(parse("(1,2,3)"), Err(ParseError::UnexpectedSeparator));
    }

    #[test]
    fn test_parse_invalid_delimiters() {
        assert_eq!(parse(""), Err(ParseError::InvalidDelimiters));
        assert_eq!(parse("1,10)"), Err(ParseError::InvalidDelimiters));
        assert_eq!(parse("[1,10"), Err(ParseError::InvalidDelimiters));
        assert_eq!(parse("{1,10}"), Err(ParseError::InvalidDelimiters));
        assert_eq!(parse("["), Err(ParseError::InvalidDelimiters));
    }

    #[test]
    fn test_parse_unterminated_quote() {
        assert_eq!(parse(r#"("a,b)"#), Err(ParseError::UnterminatedQuote));
        assert_eq!(parse(r#"("a"x,b)"#), Err(ParseError::UnterminatedQuote));
        assert_eq!(parse("(\",\\\",)"), Err(ParseError::UnterminatedQuote));
    }

    #[test]
    fn test_parse_conversion_error_is_carried_untouched() {
        let result = parse_with("(a,b)", |raw| raw.parse::<i32>());
        let expected = "a".parse::<i32>().unwrap_err();

        match result {
            Err(ParseError::Conversion(e)) => assert_eq!(e, expected),
            other => panic!("expected a conversion error, got {other:?}"),
        }
    }

    #[test]
    fn test_serialize_empty_ignores_other_fields() {
        assert_eq!(serialize(&Range::<String>::empty()), EMPTY);

        let junk = string_range(
            Some("x"),
            Some("y"),
            RangeFlags::EMPTY | RangeFlags::LOWER_INCLUSIVE,
        );
        assert_eq!(serialize(&junk), EMPTY);
    }

    #[test]
    fn test_serialize_strings() {
        let check = |expected, range: Range<String>| {
            assert_eq!(serialize(&range), expected, "{expected}");
        };

        check(
            r#"(,"")"#,
            string_range(None, Some(""), RangeFlags::LOWER_UNBOUNDED),
        );
        check(
            r#"("",)"#,
            string_range(Some(""), None, RangeFlags::UPPER_UNBOUNDED),
        );
        check(
            r#"("\"A\"","\"Z\"")"#,
            string_range(Some("\"A\""), Some("\"Z\""), RangeFlags::empty()),
        );
        check(
            r#"("\\A\\","\\Z\\")"#,
            string_range(Some(r"\A\"), Some(r"\Z\"), RangeFlags::empty()),
        );
        check(
            r#"("(A)","(Z)")"#,
            string_range(Some("(A)"), Some("(Z)"), RangeFlags::empty()),
        );
        check(
            r#"("[A]","[Z]")"#,
            string_range(Some("[A]"), Some("[Z]"), RangeFlags::empty()),
        );
    }

    #[test]
    fn test_serialize_quotes_whitespace_and_sentinels() {
        let check = |expected, range: Range<String>| {
            assert_eq!(serialize(&range), expected, "{expected}");
        };

        check(
            r#"(" A ",)"#,
            string_range(Some(" A "), None, RangeFlags::UPPER_UNBOUNDED),
        );
        check(
            r#"("infinity",)"#,
            string_range(Some("infinity"), None, RangeFlags::UPPER_UNBOUNDED),
        );
        check(
            r#"(,"-infinity")"#,
            string_range(None, Some("-infinity"), RangeFlags::LOWER_UNBOUNDED),
        );
    }

    #[test]
    fn test_serialize_numbers() {
        let range = Range::new(None, Some(0), RangeFlags::LOWER_UNBOUNDED);
        assert_eq!(serialize_with(&range, i32::to_string), "(,0)");

        let range = Range::new(Some(0), None, RangeFlags::UPPER_UNBOUNDED);
        assert_eq!(serialize_with(&range, i32::to_string), "(0,)");

        let range = Range::new(Some(1.1), Some(9.9), RangeFlags::empty());
        assert_eq!(serialize_with(&range, f64::to_string), "(1.1,9.9)");
    }

    #[test]
    fn test_serialize_unbounded_side_is_never_closed() {
        // A stray inclusive facet on an unbounded side must not surface as
        // a closed delimiter.
        let range = string_range(
            None,
            Some("5"),
            RangeFlags::LOWER_UNBOUNDED | RangeFlags::LOWER_INCLUSIVE,
        );
        assert_eq!(serialize(&range), "(,5)");
    }

    #[test]
    fn test_roundtrip_canonical_literals() {
        let trip = |raw: &str| assert_eq!(serialize(&parse(raw).unwrap()), raw, "{raw}");

        trip(EMPTY);
        trip("(,)");
        trip("(0,)");
        trip("(0,10)");
        trip("(,10)");
        trip("(0,1]");
        trip("[0,1]");
        trip("[0,1)");
    }

    #[test]
    fn test_roundtrip_embedded_comma() {
        let range = string_range(Some("A,B"), None, RangeFlags::UPPER_UNBOUNDED);
        let literal = serialize(&range);

        assert_eq!(literal, r#"("A,B",)"#);
        assert_eq!(parse(&literal).unwrap(), range);
    }

    #[test]
    fn test_roundtrip_every_parser_producible_value() {
        // Weak round trip: serializing a parsed range must yield a literal
        // that parses back to the identical range, even when the original
        // spelling was not canonical.
        let literals = [
            r#"("""A""","""Z""")"#,
            r#"("\"A\"","\"Z\"")"#,
            r#"("\\A\\","\\Z\\")"#,
            r#"("\(A\)","\[Z\]")"#,
            r#"("a,b","infinity")"#,
            r#"(" padded ","")"#,
            "[ 0 , 1 ]",
            "[,5]",
        ];

        for literal in literals {
            let range = parse(literal).unwrap();
            let reserialized = serialize(&range);
            assert_eq!(parse(&reserialized).unwrap(), range, "{literal}");
        }
    }
}
