//! Lexical scanner for the two declaration forms a binding cares about.
//!
//! The scan is deliberately shallow: it walks the raw text looking for the
//! `uniform` and `layout` keywords and tries the declaration grammar at each
//! hit. Comments, preprocessor branches and braces are not understood, so a
//! declaration that is commented out is still reported.

use nom::{
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{map_res, opt},
    sequence::{delimited, tuple},
    IResult,
};
use tracing::debug;

use crate::schema::{UniformDecl, VertexAttributeDecl};

const UNIFORM_KEYWORD: &str = "uniform";
const LAYOUT_KEYWORD: &str = "layout";

/// Everything the scanner found, each kind in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub uniforms: Vec<UniformDecl>,
    pub attributes: Vec<VertexAttributeDecl>,
}

impl Declarations {
    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty() && self.attributes.is_empty()
    }
}

/// Scans combined vertex + fragment source for uniform and vertex attribute
/// declarations. Never fails: text that doesn't match is skipped.
pub fn scan(source: &str) -> Declarations {
    let uniforms = scan_all(source, UNIFORM_KEYWORD, uniform_decl);
    let attributes = scan_all(source, LAYOUT_KEYWORD, attribute_decl);
    debug!(
        uniforms = uniforms.len(),
        attributes = attributes.len(),
        "scanned shader source"
    );
    Declarations {
        uniforms,
        attributes,
    }
}

// Keywords never overlap themselves, so a failed attempt can skip the whole
// keyword without missing a later match.
fn scan_all<'a, O, F>(source: &'a str, keyword: &str, mut decl: F) -> Vec<O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    let mut found = Vec::new();
    let mut rest = source;
    while let Some(start) = rest.find(keyword) {
        rest = &rest[start..];
        match decl(rest) {
            Ok((remaining, item)) => {
                found.push(item);
                rest = remaining;
            }
            Err(_) => rest = &rest[keyword.len()..],
        }
    }
    found
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

fn ws0(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

fn ws1(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace())(input)
}

fn location(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>())(input)
}

/// `uniform <type> <name>;`, `uniform <type> <name>[];` or
/// `uniform <type> <name>[<size>];`. The size token is dropped.
pub fn uniform_decl(input: &str) -> IResult<&str, UniformDecl> {
    let (input, _) = tuple((tag(UNIFORM_KEYWORD), ws1))(input)?;
    let (input, (type_token, _, name)) = tuple((word, ws1, word))(input)?;
    let (input, size) = opt(delimited(char('['), take_while(is_word_char), char(']')))(input)?;
    let (input, _) = char(';')(input)?;

    debug!(type_token, name, is_array = size.is_some(), "uniform");
    Ok((
        input,
        UniformDecl {
            type_token: type_token.to_string(),
            name: name.to_string(),
            is_array: size.is_some(),
        },
    ))
}

/// `layout(location = <n>) in <type> <name>;` with any spacing inside the
/// parentheses.
pub fn attribute_decl(input: &str) -> IResult<&str, VertexAttributeDecl> {
    let (input, _) = tuple((
        tag(LAYOUT_KEYWORD),
        ws0,
        char('('),
        ws0,
        tag("location"),
        ws0,
        char('='),
        ws0,
    ))(input)?;
    let (input, location) = location(input)?;
    let (input, _) = tuple((ws0, char(')'), ws1, tag("in"), ws1))(input)?;
    let (input, (type_token, _, name)) = tuple((word, ws1, word))(input)?;
    let (input, _) = char(';')(input)?;

    debug!(location, type_token, name, "vertex attribute");
    Ok((
        input,
        VertexAttributeDecl {
            location,
            type_token: type_token.to_string(),
            name: name.to_string(),
        },
    ))
}
