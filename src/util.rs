/*!
This module contains all utils types and functions used across the whole
project, and in particular across the builder/parser/simulator split.
Matching is byte-oriented rather than UTF-8 scalar-oriented: `Input`'s
subject is `&[u8]`, not `&str`.
*/

use std::ops::Range;

/// Defines the input paramter to most matching methods on a [`crate::regex::Regex`].
/// Since all values other than subject have a default value it's always
/// sufficient to only provide the subject bytes to all matching methods,
/// but for cases where we need more control (when finding all matches for instance)
/// this types come handy.
#[derive(Clone)]
pub struct Input<'s> {
    /// The subject bytes against which the regex is matched
    pub subject: &'s [u8],
    /// Perform the match within that span (but take the surroundings into accounts:
    /// `^`/`$` still refer to the start/end of `subject`, not of the span)
    /// Default: 0..subject.len()
    pub span: Span,
    /// Whenever the match should be anchored at the start of span.
    /// Default: false
    pub anchored: bool,
    /// Whenever the search should return the first match, or the left-most one.
    /// Default: false
    pub first_match: bool,
}

impl<'s> Input<'s> {
    pub fn new(subject: &'s [u8]) -> Self {
        Self {
            subject,
            span: (0..subject.len()).into(),
            anchored: false,
            first_match: false,
        }
    }

    pub fn anchored(mut self, value: bool) -> Self {
        self.anchored = value;
        self
    }

    pub fn first_match(mut self, value: bool) -> Self {
        self.first_match = value;
        self
    }

    pub fn valid(&self) -> bool {
        self.span.valid() && self.span.to <= self.subject.len()
    }
}

impl<'s> From<&'s [u8]> for Input<'s> {
    fn from(subject: &'s [u8]) -> Self {
        Self::new(subject)
    }
}

impl<'s> From<&'s str> for Input<'s> {
    fn from(subject: &'s str) -> Self {
        Self::new(subject.as_bytes())
    }
}

/// A span in a `&[u8]`. Similar to [`std::ops::Range`], but implements
/// `Copy`.
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub fn empty(&self) -> bool {
        self.from == self.to
    }

    pub fn valid(&self) -> bool {
        self.from <= self.to
    }

    pub fn invalid() -> Span {
        Span { from: 1, to: 0 }
    }
}

impl From<Range<usize>> for Span {
    fn from(value: Range<usize>) -> Self {
        Self {
            from: value.start,
            to: value.end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(val: Span) -> Self {
        val.from..val.to
    }
}

/// Successful non-capturing match. Contains only the bounds of the
/// overall match.
#[derive(Copy, Debug, Clone)]
pub struct Match<'s> {
    pub subject: &'s [u8],
    pub span: Span,
}

impl<'s> Match<'s> {
    pub fn new(subject: &'s [u8], span: impl Into<Span>) -> Self {
        let span = span.into();
        Self { subject, span }
    }

    pub fn slice(&self) -> &'s [u8] {
        &self.subject[self.span.from..self.span.to]
    }

    /// Returns the byte-index where the next non-overlapping match could
    /// start. This takes empty matches into account: an empty match must
    /// advance by at least one byte, or `find_all` would return the same
    /// empty match forever.
    pub fn next_match_start(&self) -> usize {
        if self.span.empty() && self.span.from < self.subject.len() {
            self.span.from + 1
        } else {
            self.span.to
        }
    }
}

/// Successful capturing match. Contains the bounds (if any) of all capture groups
/// defined in the pattern. In particular this include the implicit capture-group
/// 0.
#[derive(Debug, Clone)]
pub struct Captures<'s> {
    subject: &'s [u8],
    spans: Box<[Span]>,
}

impl<'s> Captures<'s> {
    pub fn get(&self, group_index: usize) -> Option<Match<'s>> {
        let span = *self.spans.get(group_index)?;
        if !span.valid() {
            return None;
        }

        Some(Match {
            subject: self.subject,
            span,
        })
    }

    pub fn group0(&self) -> Match<'s> {
        // Must always be set
        self.get(0).unwrap()
    }

    pub fn new(subject: &'s [u8], spans: Box<[Span]>) -> Self {
        Self { subject, spans }
    }

    pub fn group_len(&self) -> usize {
        self.spans.len()
    }
}
