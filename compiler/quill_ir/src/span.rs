//! Source offset spans for IR elements.
//!
//! Every element carries a start/end pair. Elements synthesized by lowering
//! passes have no source position and use [`Span::UNDEFINED`]; a span is
//! either fully defined or fully undefined, never half of each.

use std::fmt;

/// Raw offset value marking "no source position".
pub const UNDEFINED_OFFSET: u32 = u32::MAX;

/// Error when constructing a span from raw offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Span start position exceeds the representable range.
    #[error("span start {0} (0x{0:X}) exceeds the offset range")]
    StartTooLarge(usize),
    /// Span end position exceeds the representable range.
    #[error("span end {0} (0x{0:X}) exceeds the offset range")]
    EndTooLarge(usize),
    /// Exactly one of the two offsets is the undefined sentinel.
    #[error("span offsets must both be defined or both undefined (start {start}, end {end})")]
    MixedUndefined { start: u32, end: u32 },
    /// End lies before start.
    #[error("span end {end} precedes start {start}")]
    Inverted { start: u32, end: u32 },
}

/// Source location span.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from file start
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    /// Span for synthetic elements without a source position.
    pub const UNDEFINED: Span = Span {
        start: UNDEFINED_OFFSET,
        end: UNDEFINED_OFFSET,
    };

    /// Try to create a span from two offsets.
    #[inline]
    pub const fn try_new(start: u32, end: u32) -> Result<Self, SpanError> {
        let start_undefined = start == UNDEFINED_OFFSET;
        let end_undefined = end == UNDEFINED_OFFSET;
        if start_undefined != end_undefined {
            return Err(SpanError::MixedUndefined { start, end });
        }
        if !start_undefined && end < start {
            return Err(SpanError::Inverted { start, end });
        }
        Ok(Span { start, end })
    }

    /// Create a span.
    ///
    /// # Panics
    /// Panics if the offsets mix defined and undefined values or are
    /// inverted. Use `try_new` when the offsets come from outside the IR.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        Self::try_new(start, end).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Try to create a span from a byte range.
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        if start == UNDEFINED_OFFSET {
            return Err(SpanError::StartTooLarge(range.start));
        }
        if end == UNDEFINED_OFFSET {
            return Err(SpanError::EndTooLarge(range.end));
        }
        Self::try_new(start, end)
    }

    /// Create a point span (zero-length).
    #[inline]
    pub fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    /// Whether this span has a source position.
    #[inline]
    pub const fn is_defined(self) -> bool {
        self.start != UNDEFINED_OFFSET
    }

    /// Start offset, `None` for undefined spans.
    #[inline]
    pub const fn start(self) -> Option<u32> {
        if self.is_defined() {
            Some(self.start)
        } else {
            None
        }
    }

    /// End offset, `None` for undefined spans.
    #[inline]
    pub const fn end(self) -> Option<u32> {
        if self.is_defined() {
            Some(self.end)
        } else {
            None
        }
    }

    /// Length of the span in bytes (0 for undefined spans).
    #[inline]
    pub const fn len(self) -> u32 {
        if self.is_defined() {
            self.end - self.start
        } else {
            0
        }
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Check if another span is fully contained within this span.
    ///
    /// Undefined spans neither contain nor are contained by anything.
    #[inline]
    pub fn contains_span(self, other: Span) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.start <= other.start
            && other.end <= self.end
    }

    /// Merge two spans to create one covering both.
    ///
    /// An undefined side is ignored.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        match (self.is_defined(), other.is_defined()) {
            (true, true) => Span {
                start: self.start.min(other.start),
                end: self.end.max(other.end),
            },
            (true, false) => self,
            (false, _) => other,
        }
    }

    /// Convert to a `std::ops::Range`, `None` for undefined spans.
    pub fn to_range(self) -> Option<std::ops::Range<usize>> {
        if self.is_defined() {
            Some(self.start as usize..self.end as usize)
        } else {
            None
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "{}..{}", self.start, self.end)
        } else {
            write!(f, "<undefined>")
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
