/// Two-key sort specification and the row comparator.
///
/// A list is sorted by a dominant column plus an optional tie-break
/// column, each with its own direction. The secondary key only
/// applies when it names a different column than the primary.
use serde::{Deserialize, Serialize};

use crate::row::RowItem;

/// Primary + secondary column/direction pair governing row order.
///
/// `column1` is the dominant key. `column2` acts as a tie-break only
/// when it differs from `column1`; pointing both at the same column
/// leaves the secondary key inert. Column indices are not validated
/// here — out-of-range indices are a caller error.
///
/// The spec is never persisted: restoring a sort order the user did
/// not choose (and cannot explain) makes for a confusing session
/// start, so every session begins with the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Dominant sort column.
    pub column1: usize,
    /// `true` = ascending order on the dominant column.
    pub ascending1: bool,
    /// Tie-break column; inert when equal to `column1`.
    pub column2: usize,
    /// `true` = ascending order on the tie-break column.
    pub ascending2: bool,
}

impl Default for SortSpec {
    /// Column 0 ascending, with the secondary key inert.
    fn default() -> Self {
        Self {
            column1: 0,
            ascending1: true,
            column2: 0,
            ascending2: true,
        }
    }
}

impl SortSpec {
    /// Full two-key specification.
    pub fn new(column1: usize, ascending1: bool, column2: usize, ascending2: bool) -> Self {
        Self {
            column1,
            ascending1,
            column2,
            ascending2,
        }
    }

    /// Make `column` the dominant key, demoting the previous dominant
    /// key (with its direction) into the tie-break slot.
    pub fn promote(&mut self, column: usize, ascending: bool) {
        self.column2 = self.column1;
        self.ascending2 = self.ascending1;
        self.column1 = column;
        self.ascending1 = ascending;
    }
}

/// Two-level row comparison under `spec`.
///
/// The descending sign-flip only applies when the column comparator
/// returns a small-magnitude signal (|r| < 2, the canonical -1/0/1
/// case). A comparator that returns a raw numeric difference passes
/// through unflipped — descending order on such a column does not
/// reverse. This asymmetry is long-observed behaviour that concrete
/// lists rely on; changing it would be a behaviour change for every
/// comparator returning raw differences, not a local fix.
///
/// Equality on the primary key falls through to the secondary key
/// only when the two configured columns differ. Ties on both keys are
/// left to the stability of the caller's sort.
pub fn compare_rows(a: &dyn RowItem, b: &dyn RowItem, spec: &SortSpec) -> i64 {
    let mut r = a.compare(b, spec.column1);
    if r.abs() < 2 && !spec.ascending1 {
        r = -r;
    }

    if r == 0 && spec.column2 != spec.column1 {
        r = a.compare(b, spec.column2);
        if r.abs() < 2 && !spec.ascending2 {
            r = -r;
        }
    }
    r
}
