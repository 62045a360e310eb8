use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_until};
use nom::character::complete::{char, crlf, space0, space1};
use nom::combinator::{eof, map, opt, value};
use nom::sequence::{delimited, pair, preceded, terminated};

use crate::constants::{MULTI_LINE_COMMENT_END, MULTI_LINE_COMMENT_START, SINGLE_LINE_COMMENT};

/// From `nom` recipe.
/// Recognize a multiline comment and return the number of lines.
/// It could be preceded by spaces and followed by a single line comment.
///
/// Multiline comments :
/// ```norust
/// /*
/// ...
/// ...
/// */
/// ```
pub fn multiline_comment<'a>(
) -> impl nom::Parser<&'a str, Output = usize, Error = nom::error::Error<&'a str>> {
    terminated(
        preceded(
            space0,
            map(
                (
                    tag(MULTI_LINE_COMMENT_START),
                    take_until(MULTI_LINE_COMMENT_END),
                    tag(MULTI_LINE_COMMENT_END),
                ),
                |(_, comment, _): (_, &str, _)| comment.split('\n').count(),
            ),
        ),
        end_of_line(),
    )
}

/// From `nom` recipe.
/// Recognize a single line comment and discard it
///
/// Single line comment :
/// ```norust
/// // ...
/// ```
fn eol_comment<'a>() -> impl nom::Parser<&'a str, Output = (), Error = nom::error::Error<&'a str>> {
    value(
        (), // Output is thrown away.
        pair(tag(SINGLE_LINE_COMMENT), opt(is_not("\n"))),
    )
}

/// Recognize the end of line.
/// This might be a single line comment or spaces,
/// followed by a `\n`, end of file or `\r\n`.
///
/// When used at the start of a line, if it matches, the line could be considered as empty.
pub fn end_of_line<'a>(
) -> impl nom::Parser<&'a str, Output = (Option<&'a str>, Option<()>), Error = nom::error::Error<&'a str>>
{
    terminated(
        (opt(space1), opt(eol_comment())),
        alt((eof, tag("\n"), crlf)),
    )
}

/// Recognize something between two double quote (`"..."`). It can be empty.
fn part<'a>() -> impl nom::Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    delimited(char('"'), take_until("\""), char('"'))
}

/// Recognize a character rule (`"character" "first letter code" "subsequent code"`).
/// It could be preceded by spaces and followed by a single line comment.
///
/// Codes might be empty (`""`) when the character has no code at that position.
pub fn triplet<'a>(
) -> impl nom::Parser<&'a str, Output = (&'a str, &'a str, &'a str), Error = nom::error::Error<&'a str>>
{
    (
        delimited(space0, part(), space1),
        terminated(part(), space1),
        terminated(part(), end_of_line()),
    )
}
