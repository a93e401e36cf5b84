//! Rational durations as written in MMML note headers

use std::fmt;

use serde::Serialize;

/// A duration as a reduced fraction of a whole note. `1/4` is a quarter
/// note, `2` is two whole notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Construct a fraction in lowest terms. The denominator must be
    /// non-zero; its sign is normalized into the numerator.
    pub fn new(numerator: i64, denominator: i64) -> Fraction {
        assert!(denominator != 0, "a fraction needs a non-zero denominator");

        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs()) as i64;
        let sign = if denominator < 0 { -1 } else { 1 };

        Fraction {
            numerator: sign * numerator / divisor,
            denominator: sign * denominator / divisor,
        }
    }

    /// Parse a duration token: either `"3/4"` or a plain integer `"2"`.
    pub fn parse(token: &str) -> Option<Fraction> {
        match token.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = numerator
                    .parse()
                    .ok()?;
                let denominator: i64 = denominator
                    .parse()
                    .ok()?;
                if denominator == 0 {
                    return None;
                }
                Some(Fraction::new(numerator, denominator))
            }
            None => {
                let numerator = token
                    .parse()
                    .ok()?;
                Some(Fraction::new(numerator, 1))
            }
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
