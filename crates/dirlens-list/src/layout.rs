/// Column layout — display order and pixel widths.
///
/// Layout is the one piece of list state that survives across
/// sessions. Persisted values are advisory: they come from an
/// external store that may hold stale or corrupted data, so
/// everything read back is validated or clamped before it touches
/// the hosting widget.
use serde::{Deserialize, Serialize};

/// Persisted widths are capped at this multiple of the fresh default
/// width, rejecting "insane" values from a corrupted store.
pub const MAX_WIDTH_FACTOR: u32 = 2;

/// Snapshot of column display order plus per-column pixel widths.
///
/// serde-derived so embedding hosts can persist snapshots with their
/// own settings format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Column indices in display order.
    pub order: Vec<usize>,
    /// Pixel width per column, indexed by column (not display slot).
    pub widths: Vec<u32>,
}

/// Clamp a persisted width against the fresh-default width for the
/// same column.
pub(crate) fn clamp_width(saved: u32, default: u32) -> u32 {
    saved.min(default.saturating_mul(MAX_WIDTH_FACTOR))
}

/// `true` if `order` is a permutation of `0..count`.
///
/// A persisted order that is not a valid permutation (wrong length,
/// out-of-range index, duplicate) would scramble the header if
/// applied, so it is rejected wholesale rather than repaired.
pub(crate) fn is_permutation(order: &[usize], count: usize) -> bool {
    if order.len() != count {
        return false;
    }
    let mut seen = vec![false; count];
    for &column in order {
        if column >= count || seen[column] {
            return false;
        }
        seen[column] = true;
    }
    true
}
