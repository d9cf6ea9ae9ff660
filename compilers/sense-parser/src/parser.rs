use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0, none_of, one_of},
    combinator::{all_consuming, map, value},
    multi::fold_many0,
    sequence::{delimited, preceded, tuple},
    IResult,
};
use sense_protocol::{Argument, Predicate, Relation, Span};

use crate::error::RelationParseError;

/// Word characters: Unicode letters and digits plus underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn separator(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| !is_word_char(c))(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

/// Maximal runs of word characters with their byte spans.
pub fn scan_words(original_input: &str) -> Vec<(Span, &str)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip separators (whitespace, punctuation, symbols)
        let (next_input, _) = match separator(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Take the word; `input` is a suffix of `original_input`
        match word(input) {
            Ok((next_input, text)) => {
                let start = original_input.len() - input.len();
                result.push((Span::new(start, start + text.len()), text));
                input = next_input;
            }
            Err(_) => break,
        }
    }

    result
}

fn predicate(input: &str) -> IResult<&str, Predicate> {
    alt((
        value(Predicate::Agent, tag("agt")),
        value(Predicate::Object, tag("obj")),
        value(Predicate::Modifier, tag("mod")),
    ))(input)
}

fn quoted_char(input: &str) -> IResult<&str, char> {
    alt((preceded(char('\\'), one_of("\\\"")), none_of("\\\"")))(input)
}

/// `"..."` with `\"` and `\\` escapes. Always a word, never `Unset`.
fn quoted_word(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        fold_many0(quoted_char, String::new, |mut acc, c| {
            acc.push(c);
            acc
        }),
        char('"'),
    )(input)
}

fn bare_argument(input: &str) -> IResult<&str, Argument> {
    map(
        take_while1(|c: char| !matches!(c, ',' | '(' | ')' | '"' | '\\') && !c.is_whitespace()),
        |text: &str| {
            if text == Argument::UNSET_TEXT {
                Argument::Unset
            } else {
                Argument::word(text)
            }
        },
    )(input)
}

fn argument(input: &str) -> IResult<&str, Argument> {
    delimited(
        multispace0,
        alt((map(quoted_word, Argument::Word), bare_argument)),
        multispace0,
    )(input)
}

fn relation(input: &str) -> IResult<&str, Relation> {
    map(
        tuple((
            delimited(multispace0, predicate, multispace0),
            char('('),
            argument,
            char(','),
            argument,
            char(')'),
            multispace0,
        )),
        |(predicate, _, source, _, target, _, _)| Relation::new(predicate, source, target),
    )(input)
}

fn parse_line(line: &str, line_no: usize) -> Result<Relation, RelationParseError> {
    all_consuming(relation)(line)
        .map(|(_, rel)| rel)
        .map_err(|_| RelationParseError::Malformed {
            line: line_no,
            text: line.trim().to_string(),
        })
}

/// Parses one `pred(arg1,arg2)` relation. A bare `unknown` reads back as an
/// unset argument; quoted arguments are always words.
pub fn parse_relation(text: &str) -> Result<Relation, RelationParseError> {
    parse_line(text, 1)
}

/// Parses one relation per line, skipping blank lines and `#` comments.
pub fn parse_relations(text: &str) -> Result<Vec<Relation>, RelationParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}
