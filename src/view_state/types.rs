//! Core view-state newtypes

/// Height of a row in lines. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowHeight(u16);

/// Error returned when attempting to create a RowHeight of zero via the smart constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("RowHeight must be >= 1 (got {0})")]
pub struct InvalidRowHeight(pub u16);

impl RowHeight {
    /// A single line; the height of every collapsed row.
    pub const ONE: Self = Self(1);

    /// Smart constructor that validates height is >= 1.
    pub fn new(height: u16) -> Result<Self, InvalidRowHeight> {
        if height == 0 {
            Err(InvalidRowHeight(height))
        } else {
            Ok(Self(height))
        }
    }

    /// Height of `lines` lines, clamped into `1..=u16::MAX`.
    pub fn saturating_from(lines: usize) -> Self {
        Self(lines.clamp(1, u16::MAX as usize) as u16)
    }

    /// Get the raw u16 value.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::ONE
    }
}

/// Absolute line offset from the top of the timeline. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LineOffset(usize);

impl LineOffset {
    /// Create a new LineOffset from a raw value.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Position of a row in the timeline. 0-indexed.
///
/// Stable for the lifetime of a history context because the row sequence is append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Create a new RowIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Get the next row index.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
