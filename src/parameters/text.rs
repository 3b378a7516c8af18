//! Textual value entry
//!
//! Hosts often hand values over as the text a user typed. This module reads such
//! text according to a specification: `true`/`false`/`1`/`0` for booleans,
//! integer and real literals, raw strings for options, and bracketed,
//! comma-separated lists for arrays (`[1, 2, 3]`, `[[0.1, 0.2], [0.3, 0.4]]`,
//! `["TP", PH]`).

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{consumed, map, value},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, pair},
    IResult, Parser,
};
use thiserror::Error;

use crate::parameters::spec::KindSpec;
use crate::parameters::value::{ParamValue, ParameterKind};

/// Error that can occur while reading a value from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Cannot read '{text}' as a {kind} value")]
    Syntax { kind: ParameterKind, text: String },

    #[error("Expected {expected} array elements, found {found}")]
    ArraySize { expected: usize, found: usize },
}

/// Syntax tree of a bracketed list, before the specification is applied
#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Quoted(&'a str),
    Bare(&'a str),
    List { source: &'a str, items: Vec<Token<'a>> },
}

/// Read `input` as a value of the shape described by `spec`
///
/// # Arguments
///
/// * `spec` - The specification the value is read for
/// * `input` - The text; surrounding whitespace is ignored
///
/// # Returns
///
/// The value, not yet validated against bounds or option lists.
///
/// # Examples
///
/// ```
/// use capeparam_rs::parameters::{parse_value, ArraySpec, IntegerSpec, KindSpec, ParamValue};
///
/// let spec = KindSpec::from(ArraySpec::uniform(IntegerSpec::unbounded(0), 2));
/// let value = parse_value(&spec, "[4, 5]").unwrap();
/// assert_eq!(value, ParamValue::Array(vec![ParamValue::Int(4), ParamValue::Int(5)]));
/// ```
pub fn parse_value(spec: &KindSpec, input: &str) -> Result<ParamValue, ParseError> {
    let text = input.trim();
    match spec {
        KindSpec::Array(_) => match list(text) {
            Ok(("", token)) => convert(spec, &token),
            _ => Err(ParseError::Syntax {
                kind: ParameterKind::Array,
                text: text.to_string(),
            }),
        },
        _ => scalar(spec, text),
    }
}

fn convert(spec: &KindSpec, token: &Token<'_>) -> Result<ParamValue, ParseError> {
    match (spec, token) {
        (KindSpec::Array(array), Token::List { items, .. }) => {
            if items.len() != array.len() {
                return Err(ParseError::ArraySize {
                    expected: array.len(),
                    found: items.len(),
                });
            }
            array
                .items
                .iter()
                .zip(items)
                .map(|(item, token)| convert(item, token))
                .collect::<Result<Vec<_>, _>>()
                .map(ParamValue::Array)
        }
        (_, Token::List { source, .. }) => Err(ParseError::Syntax {
            kind: spec.kind(),
            text: source.to_string(),
        }),
        (_, Token::Quoted(text) | Token::Bare(text)) => scalar(spec, text),
    }
}

fn scalar(spec: &KindSpec, text: &str) -> Result<ParamValue, ParseError> {
    let kind = spec.kind();
    match spec {
        KindSpec::Boolean(_) => complete(boolean, kind, text).map(ParamValue::Bool),
        KindSpec::Integer(_) => complete(integer, kind, text).map(ParamValue::Int),
        KindSpec::Real(_) => complete(real, kind, text).map(ParamValue::Real),
        KindSpec::Option(_) => Ok(ParamValue::Option(text.to_string())),
        KindSpec::Array(_) => Err(ParseError::Syntax {
            kind,
            text: text.to_string(),
        }),
    }
}

/// Run `parser` and require it to consume the whole text
fn complete<'a, O, P>(mut parser: P, kind: ParameterKind, text: &'a str) -> Result<O, ParseError>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(text) {
        Ok(("", output)) => Ok(output),
        _ => Err(ParseError::Syntax {
            kind,
            text: text.to_string(),
        }),
    }
}

// Scalar parsers

fn boolean(input: &str) -> IResult<&str, bool> {
    alt((
        value(true, tag_no_case("true")),
        value(false, tag_no_case("false")),
        value(true, char('1')),
        value(false, char('0')),
    ))
    .parse(input)
}

fn integer(input: &str) -> IResult<&str, i64> {
    nom::character::complete::i64(input)
}

/// Real literal, including `nan` and `inf`
fn real(input: &str) -> IResult<&str, f64> {
    double(input)
}

// List syntax

fn list(input: &str) -> IResult<&str, Token<'_>> {
    map(
        consumed(delimited(
            pair(char('['), multispace0),
            separated_list0(delimited(multispace0, char(','), multispace0), token),
            pair(multispace0, char(']')),
        )),
        |(source, items)| Token::List { source, items },
    )
    .parse(input)
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((list, map(quoted, Token::Quoted), map(bare, Token::Bare))).parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"')).parse(input)
}

fn bare(input: &str) -> IResult<&str, &str> {
    map(
        take_while1(|c: char| !matches!(c, ',' | '[' | ']' | '"')),
        str::trim_end,
    )
    .parse(input)
}
