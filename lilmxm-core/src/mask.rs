//! Merge-join cursor over a structural mask row

/// Monotonic membership cursor over one sorted row
///
/// Answers "is column `j` stored in this row?" for a strictly increasing
/// sequence of `j`, in amortized O(1) per query. Stored values are never
/// inspected. A cursor is bound to a single row and must be rebuilt for the
/// next one; it has no reset.
#[derive(Debug, Clone)]
pub struct MaskCursor<'a, T> {
    row: &'a [(usize, T)],
    pos: usize,
    last: Option<usize>,
}

impl<'a, T> MaskCursor<'a, T> {
    /// Start a cursor at the beginning of `row`
    pub fn new(row: &'a [(usize, T)]) -> Self {
        Self {
            row,
            pos: 0,
            last: None,
        }
    }

    /// Advance past every stored column `< j` and report whether `j` is stored
    ///
    /// Calls on one cursor must use strictly increasing `j`.
    pub fn advance_and_check(&mut self, j: usize) -> bool {
        debug_assert!(
            self.last.map_or(true, |last| last < j),
            "mask cursor queried out of order: {j} after {:?}",
            self.last
        );
        self.last = Some(j);

        while self.pos < self.row.len() && self.row[self.pos].0 < j {
            self.pos += 1;
        }
        self.pos < self.row.len() && self.row[self.pos].0 == j
    }

    /// Same as `advance_and_check`, negated when `complement` is set
    pub fn selects(&mut self, j: usize, complement: bool) -> bool {
        self.advance_and_check(j) != complement
    }
}
