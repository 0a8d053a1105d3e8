use std::error::Error;
use std::fmt;

pub type DynResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GamutError {
    /// The three vertices don't span a triangle
    Degenerate,
}

impl fmt::Display for GamutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamutError::Degenerate => write!(f, "Undefined gamut, vertices are collinear"),
        }
    }
}

impl Error for GamutError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ColorParseError {
    BadLength(usize),
    BadDigit(char),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::BadLength(l) => {
                write!(f, "Expected 6 hex digits for color, got {}", l)
            }
            ColorParseError::BadDigit(c) => write!(f, "Invalid hex digit '{}' in color", c),
        }
    }
}

impl Error for ColorParseError {}
