//! Range expression parser
//!
//! Parses numeric bound expressions like:
//! - `5`
//! - `1..5`
//! - `[0..1)`
//! - `<=64`, `>10`

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric types a range can be parsed over
pub trait RangeNumber: Copy + PartialOrd + fmt::Debug + fmt::Display + FromStr {
    /// Name used in error messages
    const TYPE_NAME: &'static str;
}

impl RangeNumber for i64 {
    const TYPE_NAME: &'static str = "long";
}

impl RangeNumber for f64 {
    const TYPE_NAME: &'static str = "double";
}

impl RangeNumber for f32 {
    const TYPE_NAME: &'static str = "float";
}

/// One end of a range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBound<T> {
    pub value: T,
    pub inclusive: bool,
}

impl<T> RangeBound<T> {
    pub fn inclusive(value: T) -> Self {
        Self { value, inclusive: true }
    }

    pub fn exclusive(value: T) -> Self {
        Self { value, inclusive: false }
    }
}

/// An interval over an ordered numeric type; a missing bound is unbounded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    lower: Option<RangeBound<T>>,
    upper: Option<RangeBound<T>>,
}

impl<T: RangeNumber> Range<T> {
    /// Create a range, rejecting inverted or incomparable bounds
    ///
    /// `(a..a)` is rejected as well since it cannot hold anything and cannot
    /// be written any other way.
    pub fn new(lower: Option<RangeBound<T>>, upper: Option<RangeBound<T>>) -> Option<Self> {
        for bound in lower.iter().chain(upper.iter()) {
            bound.value.partial_cmp(&bound.value)?;
        }
        if let (Some(l), Some(u)) = (lower, upper) {
            match l.value.partial_cmp(&u.value)? {
                std::cmp::Ordering::Greater => return None,
                std::cmp::Ordering::Equal if !l.inclusive && !u.inclusive => return None,
                _ => {}
            }
        }
        Some(Self { lower, upper })
    }

    /// `(-inf..value]`
    pub fn at_most(value: T) -> Self {
        Self {
            lower: None,
            upper: Some(RangeBound::inclusive(value)),
        }
    }

    /// `(-inf..value)`
    pub fn less_than(value: T) -> Self {
        Self {
            lower: None,
            upper: Some(RangeBound::exclusive(value)),
        }
    }

    /// `[value..inf)`
    pub fn at_least(value: T) -> Self {
        Self {
            lower: Some(RangeBound::inclusive(value)),
            upper: None,
        }
    }

    /// `[lower..upper]`
    pub fn closed(lower: T, upper: T) -> Option<Self> {
        Self::new(Some(RangeBound::inclusive(lower)), Some(RangeBound::inclusive(upper)))
    }

    /// `[value..value]`
    pub fn singleton(value: T) -> Self {
        Self {
            lower: Some(RangeBound::inclusive(value)),
            upper: Some(RangeBound::inclusive(value)),
        }
    }

    pub fn lower(&self) -> Option<RangeBound<T>> {
        self.lower
    }

    pub fn upper(&self) -> Option<RangeBound<T>> {
        self.upper
    }

    /// Interval membership honoring each bound's inclusivity
    pub fn contains(&self, value: T) -> bool {
        let lower_ok = match self.lower {
            None => true,
            Some(b) if b.inclusive => value >= b.value,
            Some(b) => value > b.value,
        };
        let upper_ok = match self.upper {
            None => true,
            Some(b) if b.inclusive => value <= b.value,
            Some(b) => value < b.value,
        };
        lower_ok && upper_ok
    }
}

impl<T: RangeNumber> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(b) => write!(f, "{}{}", if b.inclusive { '[' } else { '(' }, b.value)?,
            None => write!(f, "(-inf")?,
        }
        write!(f, "..")?;
        match self.upper {
            Some(b) => write!(f, "{}{}", b.value, if b.inclusive { ']' } else { ')' }),
            None => write!(f, "+inf)"),
        }
    }
}

/// Range parse error
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to parse range '{input}': {message}")]
pub struct RangeParseError {
    pub message: String,
    pub input: String,
}

impl RangeParseError {
    fn new(message: impl Into<String>, input: &str) -> Self {
        Self {
            message: message.into(),
            input: input.to_string(),
        }
    }
}

/// Parse a range expression over `T`
///
/// Callers evaluating a predicate treat an error as "does not match".
pub fn parse_range<T: RangeNumber>(text: &str) -> Result<Range<T>, RangeParseError> {
    let s = text.trim();

    // Prefix operators, longer first to avoid partial matches
    if let Some(rest) = s.strip_prefix("<=") {
        return Ok(Range::at_most(parse_number(rest, text)?));
    }
    if let Some(rest) = s.strip_prefix('<') {
        return Ok(Range::less_than(parse_number(rest, text)?));
    }
    if let Some(rest) = s.strip_prefix(">=") {
        return Ok(Range::at_least(parse_number(rest, text)?));
    }
    if let Some(rest) = s.strip_prefix('>') {
        // Inclusive like `>=`; content in the wild relies on this.
        return Ok(Range::at_least(parse_number(rest, text)?));
    }

    if s.starts_with('[') || s.starts_with('(') {
        if !(s.ends_with(']') || s.ends_with(')')) {
            return Err(RangeParseError::new("Unterminated interval", text));
        }
        let (lower, upper) = split_bounds(s, text)?;
        let lower = RangeBound {
            value: parse_number(&lower[1..], text)?,
            inclusive: s.starts_with('['),
        };
        let upper = RangeBound {
            value: parse_number(&upper[..upper.len() - 1], text)?,
            inclusive: s.ends_with(']'),
        };
        return Range::new(Some(lower), Some(upper))
            .ok_or_else(|| RangeParseError::new("Lower bound exceeds upper bound", text));
    }

    if s.contains("..") {
        let (lower, upper) = split_bounds(s, text)?;
        let lower = parse_number(lower, text)?;
        let upper = parse_number(upper, text)?;
        return Range::closed(lower, upper)
            .ok_or_else(|| RangeParseError::new("Lower bound exceeds upper bound", text));
    }

    Ok(Range::singleton(parse_number(s, text)?))
}

fn split_bounds<'a>(s: &'a str, input: &str) -> Result<(&'a str, &'a str), RangeParseError> {
    let parts: Vec<&str> = s.split("..").collect();
    match parts.as_slice() {
        [lower, upper] => Ok((lower, upper)),
        _ => Err(RangeParseError::new(
            format!("Expected two bounds separated by '..', found {}", parts.len()),
            input,
        )),
    }
}

fn parse_number<T: RangeNumber>(s: &str, input: &str) -> Result<T, RangeParseError> {
    s.parse::<T>()
        .map_err(|_| RangeParseError::new(format!("'{}' is not a valid {}", s, T::TYPE_NAME), input))
}
