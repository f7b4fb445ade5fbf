//! Segment count and the constants derived from it

use std::ffi::OsStr;
use std::fmt;

use num_bigint::BigInt;

use crate::error::ParseError;

/// Number of angular subdivisions the generated shader sweeps through.
///
/// Unbounded in both directions. Zero and negative counts are not rejected;
/// they are substituted into the template like any other value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segments(BigInt);

impl Segments {
    pub fn new(count: impl Into<BigInt>) -> Self {
        Self(count.into())
    }

    pub fn get(&self) -> &BigInt {
        &self.0
    }

    /// Parse a base-10 integer.
    ///
    /// Accepts surrounding whitespace, an optional sign, and single
    /// underscores between digits (`1_000`).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let invalid = || ParseError::InvalidDigit(trimmed.to_string());

        let (negative, body) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut digits = String::with_capacity(body.len() + 1);
        if negative {
            digits.push('-');
        }
        for group in body.split('_') {
            if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.push_str(group);
        }

        digits.parse::<BigInt>().map(Self).map_err(|_| invalid())
    }

    /// Parse a raw command-line argument
    pub fn parse_os(arg: &OsStr) -> Result<Self, ParseError> {
        match arg.to_str() {
            Some(text) => Self::parse(text),
            None => Err(ParseError::NotUnicode(arg.to_string_lossy().into_owned())),
        }
    }
}

impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values substituted into the shader template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderParams {
    /// `max_vertices` of the triangle strip output layout
    pub max_vertices: BigInt,
    /// Divisor of the sweep angle and the closing comparison
    pub max_segments: BigInt,
}

impl ShaderParams {
    /// Two vertices per segment plus the pair that closes the strip
    pub fn from_segments(segments: &Segments) -> Self {
        let count = segments.get();
        Self {
            max_vertices: count * 2u32 + 2u32,
            max_segments: count.clone(),
        }
    }
}
