/// Row capability — the interface every displayable row implements.
///
/// The list engine never owns row data. It holds shared handles
/// (`Rc<dyn RowItem>`) and calls back into them on demand for cell
/// text, icons, and per-column comparisons. Text is produced lazily
/// per call and never cached by the engine, so arbitrarily large row
/// counts work without pre-materialising formatted strings.
use std::any::Any;

/// Capability trait for a row displayed in a [`SortingList`].
///
/// `text` and `image` must be pure functions of the row's current
/// state. `compare` must be a valid weak ordering for the row's
/// natural key on that column, but its result is *not* restricted to
/// {-1, 0, 1}: a size column may legitimately return a raw numeric
/// difference. See [`compare_rows`] for how magnitude interacts with
/// descending order.
///
/// The `Any` supertrait lets a typed comparator downcast `other` to
/// its own concrete type:
///
/// ```ignore
/// fn compare(&self, other: &dyn RowItem, column: usize) -> i64 {
///     let Some(other) = (other as &dyn Any).downcast_ref::<Self>() else {
///         return 0;
///     };
///     self.size as i64 - other.size as i64
/// }
/// ```
///
/// [`SortingList`]: crate::SortingList
/// [`compare_rows`]: crate::compare_rows
pub trait RowItem: Any {
    /// Display text for the given column.
    fn text(&self, column: usize) -> String;

    /// Icon index for this row, if any.
    ///
    /// Only consulted when the hosting list was declared with images;
    /// the default implementation returns `None`.
    fn image(&self) -> Option<usize> {
        None
    }

    /// Three-way comparison against `other` for the given column.
    ///
    /// The default implementation compares display text
    /// case-insensitively, yielding strictly -1/0/1.
    fn compare(&self, other: &dyn RowItem, column: usize) -> i64 {
        default_text_compare(self.text(column).as_str(), other.text(column).as_str())
    }
}

/// Case-insensitive textual comparison yielding strictly -1/0/1.
///
/// Case folding is Unicode `to_lowercase`; no locale tables are
/// consulted. Lists that need locale-aware collation supply their own
/// `compare` with an explicitly configured collator rather than
/// relying on process-wide state.
pub fn default_text_compare(a: &str, b: &str) -> i64 {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_compare_is_case_insensitive() {
        assert_eq!(default_text_compare("readme.md", "README.MD"), 0);
        assert_eq!(default_text_compare("Alpha", "beta"), -1);
        assert_eq!(default_text_compare("gamma", "BETA"), 1);
    }

    #[test]
    fn test_text_compare_is_clamped() {
        // Far-apart strings still compare to exactly -1/1.
        assert_eq!(default_text_compare("a", "zzzz"), -1);
        assert_eq!(default_text_compare("zzzz", "a"), 1);
    }

    #[test]
    fn test_default_compare_uses_text() {
        struct Named(&'static str);
        impl RowItem for Named {
            fn text(&self, _column: usize) -> String {
                self.0.to_string()
            }
        }

        let a = Named("apple");
        let b = Named("Banana");
        assert_eq!(a.compare(&b, 0), -1);
        assert_eq!(b.compare(&a, 0), 1);
        assert_eq!(a.compare(&Named("APPLE"), 0), 0);
    }
}
