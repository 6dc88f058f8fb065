//! RowHeightIndex - O(log n) row offsets and offset lookup via Fenwick tree
//!
//! The virtualization layer asks two questions of the timeline: where does row
//! `i` start, and which row covers line `y`. Both are answered from prefix sums
//! of row heights, which stay cheap to update when a folded group expands.
//!
//! # Complexity
//!
//! - `push`: O(log n) amortized
//! - `set`: O(log n)
//! - `offset_of`: O(log n)
//! - `row_at_offset`: O(log² n)
//! - `total`: O(log n)
//! - `clear`: O(n)

use crate::view_state::types::{LineOffset, RowHeight, RowIndex};

/// Cumulative row heights backed by a Fenwick tree.
#[derive(Debug, Clone, Default)]
pub struct RowHeightIndex {
    /// Fenwick tree backing storage (1-indexed internally, 0-indexed API).
    /// Its length is the capacity; only the first `heights.len()` slots are live.
    tree: Vec<isize>,
    /// Plain per-row heights, used to compute deltas and to rebuild on growth.
    heights: Vec<RowHeight>,
}

impl RowHeightIndex {
    /// Creates an empty index with room for `capacity` rows before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use history_timeline::view_state::height_index::RowHeightIndex;
    /// let index = RowHeightIndex::with_capacity(100);
    /// assert_eq!(index.len(), 0);
    /// assert_eq!(index.total(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            heights: Vec::with_capacity(capacity),
        }
    }

    /// Appends a row with the given height.
    ///
    /// # Examples
    ///
    /// ```
    /// # use history_timeline::view_state::height_index::RowHeightIndex;
    /// # use history_timeline::view_state::types::RowHeight;
    /// let mut index = RowHeightIndex::default();
    /// index.push(RowHeight::ONE);
    /// index.push(RowHeight::new(4).unwrap());
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.total(), 5);
    /// ```
    pub fn push(&mut self, height: RowHeight) {
        if self.heights.len() >= self.tree.len() {
            self.grow();
        }
        let idx = self.heights.len();
        self.heights.push(height);
        fenwick::array::update(&mut self.tree, idx, height.get() as isize);
    }

    /// Replaces the height of row `index`, returning the previous height.
    ///
    /// Returns `None` if the row does not exist.
    pub fn set(&mut self, index: RowIndex, height: RowHeight) -> Option<RowHeight> {
        let slot = self.heights.get_mut(index.get())?;
        let previous = *slot;
        *slot = height;

        let delta = height.get() as isize - previous.get() as isize;
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index.get(), delta);
        }
        Some(previous)
    }

    /// Height of row `index`.
    pub fn height(&self, index: RowIndex) -> Option<RowHeight> {
        self.heights.get(index.get()).copied()
    }

    /// Line offset at which row `index` starts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use history_timeline::view_state::height_index::RowHeightIndex;
    /// # use history_timeline::view_state::types::{RowHeight, RowIndex};
    /// let mut index = RowHeightIndex::default();
    /// index.push(RowHeight::new(3).unwrap());
    /// index.push(RowHeight::new(4).unwrap());
    /// assert_eq!(index.offset_of(RowIndex::new(0)).map(|o| o.get()), Some(0));
    /// assert_eq!(index.offset_of(RowIndex::new(1)).map(|o| o.get()), Some(3));
    /// assert_eq!(index.offset_of(RowIndex::new(2)), None);
    /// ```
    pub fn offset_of(&self, index: RowIndex) -> Option<LineOffset> {
        match index.get() {
            i if i >= self.len() => None,
            0 => Some(LineOffset::new(0)),
            i => Some(LineOffset::new(self.prefix_sum(i - 1))),
        }
    }

    /// The row covering line `offset`, or `None` past the end.
    ///
    /// Row `i` covers `[offset_of(i), offset_of(i) + height(i))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use history_timeline::view_state::height_index::RowHeightIndex;
    /// # use history_timeline::view_state::types::{LineOffset, RowHeight, RowIndex};
    /// let mut index = RowHeightIndex::default();
    /// index.push(RowHeight::new(10).unwrap()); // [0..10)
    /// index.push(RowHeight::new(20).unwrap()); // [10..30)
    ///
    /// assert_eq!(index.row_at_offset(LineOffset::new(9)), Some(RowIndex::new(0)));
    /// assert_eq!(index.row_at_offset(LineOffset::new(10)), Some(RowIndex::new(1)));
    /// assert_eq!(index.row_at_offset(LineOffset::new(30)), None);
    /// ```
    pub fn row_at_offset(&self, offset: LineOffset) -> Option<RowIndex> {
        let value = offset.get();
        let mut left = 0;
        let mut right = self.len();

        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > value {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        (left < self.len()).then(|| RowIndex::new(left))
    }

    /// Total height of all rows, i.e. the scroll extent.
    pub fn total(&self) -> usize {
        match self.len() {
            0 => 0,
            len => self.prefix_sum(len - 1),
        }
    }

    /// Number of rows indexed.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// True when no rows are indexed.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Removes all rows, retaining allocated capacity.
    pub fn clear(&mut self) {
        self.tree.iter_mut().for_each(|node| *node = 0);
        self.heights.clear();
    }

    /// Cumulative height of rows `0..=index`. Caller guarantees `index < len()`.
    fn prefix_sum(&self, index: usize) -> usize {
        fenwick::array::prefix_sum(&self.tree, index).max(0) as usize
    }

    /// Doubles capacity. Fenwick nodes past the old end summarize earlier rows,
    /// so the tree is rebuilt rather than zero-extended.
    fn grow(&mut self) {
        let capacity = self.tree.len().max(1) * 2;
        self.tree = vec![0; capacity];
        for (i, height) in self.heights.iter().enumerate() {
            fenwick::array::update(&mut self.tree, i, height.get() as isize);
        }
    }
}
