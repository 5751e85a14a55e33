//! Source positions attached to declarations and diagnostics.

use std::fmt;

/// Where a node starts in its source file, and how many bytes it covers.
///
/// Members generated by synthesis borrow the position of the class they were
/// generated for, so errors about them still point at user-written code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// 1-based line.
    pub line: u32,
    /// 1-based byte column.
    pub col: u32,
    /// Covered bytes.
    pub len: u32,
}

impl Span {
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self { line, col, len }
    }

    /// A position with no extent.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self::new(line, col, 0)
    }

    /// This span's starting position, without extent.
    ///
    /// Generated statements use this, since they have no text of their own.
    #[inline]
    pub fn start(self) -> Span {
        Span::point(self.line, self.col)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
