//! Pitch parsing and rendering for MMML note headers

use std::fmt;

use serde::Serialize;

use crate::error::MmmlError;
use crate::language::Fraction;

/// A pitch written either in western notation (`c`, `ds3`, `bf2`) or as a
/// just intonation frequency ratio (`3/2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Pitch {
    Western {
        class: char,
        /// Zero or more `s` (sharp) or `f` (flat) marks.
        accidentals: String,
        octave: i8,
    },
    Ratio(Fraction),
}

/// Parse a single pitch token. Tokens starting with a digit are frequency
/// ratios; everything else is western notation with an optional octave
/// number (default 4).
pub fn parse_pitch(token: &str) -> Result<Pitch, MmmlError> {
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        let ratio =
            Fraction::parse(token).ok_or_else(|| MmmlError::InvalidPitch(token.to_string()))?;
        return Ok(Pitch::Ratio(ratio));
    }

    let mut characters = token.chars();
    let class = characters
        .next()
        .filter(|c| ('a'..='g').contains(c))
        .ok_or_else(|| MmmlError::InvalidPitch(token.to_string()))?;

    let rest = characters.as_str();
    let marks = rest
        .find(|c| c != 's' && c != 'f')
        .unwrap_or(rest.len());
    let accidentals = rest[..marks].to_string();

    let octave = if marks == rest.len() {
        4
    } else {
        rest[marks..]
            .parse()
            .map_err(|_| MmmlError::InvalidPitch(token.to_string()))?
    };

    Ok(Pitch::Western {
        class,
        accidentals,
        octave,
    })
}

/// Parse a comma-separated pitch list (`c4,ds3`). Commas separate chord
/// members because spaces already separate header arguments.
pub fn parse_pitch_list(token: &str) -> Result<Vec<Pitch>, MmmlError> {
    if token.is_empty() {
        return Ok(Vec::new());
    }
    token
        .split(',')
        .map(parse_pitch)
        .collect()
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pitch::Western {
                class,
                accidentals,
                octave,
            } => write!(f, "{}{}{}", class, accidentals, octave),
            // A ratio always renders with its slash: 1/1 written as "1"
            // would re-decode as a duration-shaped token of a different
            // pitch.
            Pitch::Ratio(ratio) => write!(f, "{}/{}", ratio.numerator(), ratio.denominator()),
        }
    }
}
