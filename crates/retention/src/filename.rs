//! Save filename grammar
//!
//! ```text
//! filename  = stem [ "." extension ]
//! stem      = category "_" integer "_" integer
//! ```
//!
//! The extension is whatever follows the last `.`. Integers are base-10,
//! optionally signed, and of any length: values past the `i64` range
//! saturate, which still places them outside every region.

use std::num::IntErrorKind;

/// Why a stem did not match `<category>_<x>_<y>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
    NotEnoughSegments,
    TooManySegments,
    NonNumberSegment,
}

impl std::fmt::Display for Unmatched {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEnoughSegments => write!(f, "fewer than three segments"),
            Self::TooManySegments => write!(f, "more than three segments"),
            Self::NonNumberSegment => write!(f, "coordinate is not an integer"),
        }
    }
}

/// A save filename split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedFilename<'a> {
    Matched {
        category: &'a str,
        x: i64,
        y: i64,
    },
    Unmatched {
        category: &'a str,
        reason: Unmatched,
    },
}

impl<'a> ParsedFilename<'a> {
    #[must_use]
    pub fn parse(file_name: &'a str) -> Self {
        let mut segments = stem(file_name).split('_');
        // split always yields at least one item
        let category = segments.next().unwrap_or_default();

        let (Some(x), Some(y)) = (segments.next(), segments.next()) else {
            return Self::Unmatched {
                category,
                reason: Unmatched::NotEnoughSegments,
            };
        };
        if segments.next().is_some() {
            return Self::Unmatched {
                category,
                reason: Unmatched::TooManySegments,
            };
        }

        match (parse_coordinate(x), parse_coordinate(y)) {
            (Some(x), Some(y)) => Self::Matched { category, x, y },
            _ => Self::Unmatched {
                category,
                reason: Unmatched::NonNumberSegment,
            },
        }
    }

    /// Leading token of the stem, present whether or not the rest matched
    #[must_use]
    pub fn category(&self) -> &'a str {
        match *self {
            Self::Matched { category, .. } | Self::Unmatched { category, .. } => category,
        }
    }
}

fn parse_coordinate(segment: &str) -> Option<i64> {
    match segment.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Filename with everything from the last `.` removed
#[must_use]
pub fn stem(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _extension)| stem)
}
