//! Textual formatting and parsing.
//!
//! Output walks the tracked exponents from highest to lowest and prints
//! only non-zero terms: `" +3x^2"` for positive coefficients, the native
//! `-` sign for negative ones, `x` from exponent 1 up and `^<exp>` from
//! exponent 2 up. An all-zero polynomial prints nothing.
//!
//! Input is a whitespace-separated stream of `coefficient power` integer
//! pairs, terminated by the sentinel pair `-1 -1` or end of input. Each
//! pair goes through [`Polynomial::set_coeff`], so the negative-exponent
//! coercion policy applies to parsed input too. A malformed token halts
//! consumption and surfaces as a [`ParseError`].

use core::fmt;
use std::io::{self, BufRead, Read};
use std::str::FromStr;

use crate::dense::Polynomial;

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No allocated slots means there is no degree range to walk.
        if self.coeffs.is_empty() {
            return write!(f, " 0");
        }

        for power in (0..=self.degree).rev() {
            let coeff = self.coeffs.get(power);
            if coeff == 0 {
                continue;
            }
            if coeff > 0 {
                write!(f, " +")?;
            }
            write!(f, "{coeff}")?;
            if power > 0 {
                write!(f, "x")?;
            }
            if power > 1 {
                write!(f, "^{power}")?;
            }
        }
        Ok(())
    }
}

/// Failure while parsing a coefficient/power pair stream.
#[derive(Debug)]
pub enum ParseError {
    /// A token was not a valid `i64`.
    InvalidToken(String),
    /// The input ended after a coefficient, with no matching power.
    MissingPower,
    /// Reading from the underlying stream failed.
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidToken(tok) => write!(f, "invalid integer token `{tok}`"),
            ParseError::MissingPower => write!(f, "coefficient without a matching power"),
            ParseError::Io(err) => write!(f, "read failed: {err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err)
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    /// Parse whitespace-separated `coefficient power` pairs.
    ///
    /// The sentinel pair `-1 -1` (or the end of the string) stops
    /// consumption; anything after the sentinel is ignored.
    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut out = Polynomial::new();
        let mut tokens = s.split_whitespace();

        while let Some(tok) = tokens.next() {
            let coefficient = parse_int(tok)?;
            let power = match tokens.next() {
                Some(tok) => parse_int(tok)?,
                None => return Err(ParseError::MissingPower),
            };
            if coefficient == -1 && power == -1 {
                break;
            }
            out.set_coeff(coefficient, power);
        }

        Ok(out)
    }
}

impl Polynomial {
    /// Parse a pair stream from a reader; same grammar as [`FromStr`].
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, ParseError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }
}

fn parse_int(tok: &str) -> Result<i64, ParseError> {
    tok.parse()
        .map_err(|_| ParseError::InvalidToken(tok.to_string()))
}
