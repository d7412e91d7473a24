//! Dot-separated attribute patterns.
//!
//! A pattern such as `users.*.email` is a sequence of segments. A segment is
//! the wildcard only when it is exactly `*`; `a*b` or `*x` are literal keys.

use std::fmt;

/// The wildcard marker. Matches any integer index of a sequence-like node.
pub const WILDCARD: &str = "*";

/// One segment of a [`Pattern`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Wildcard,
}

impl Segment {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Segment::Key(k) => k,
            Segment::Wildcard => WILDCARD,
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        if s == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Key(s.to_string())
        }
    }
}

/// A parsed attribute pattern.
///
/// Parsing never fails: the empty string is a single empty key, mirroring how
/// an empty attribute name addresses the empty key of a map.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(pattern: &str) -> Self {
        Pattern {
            segments: pattern.split('.').map(Segment::from).collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    pub fn wildcard_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_wildcard()).count()
    }

    /// True when the last segment is the wildcard (`roles.*`).
    ///
    /// Drives plural selection in messages.
    pub fn ends_with_wildcard(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_wildcard)
    }

    /// The first `len` segments.
    pub fn prefix(&self, len: usize) -> Pattern {
        Pattern {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(seg.as_str())?;
        }
        Ok(())
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::parse(s)
    }
}
