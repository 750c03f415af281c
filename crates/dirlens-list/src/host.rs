/// Hosting list widget collaborator.
///
/// The engine is toolkit-agnostic: it never draws. The hosting
/// widget supplies column primitives and header labels through this
/// trait, and the engine mutates order, widths, and label text
/// through it — nothing else.

/// Column and header primitives of the widget hosting a
/// [`SortingList`].
///
/// The host delivers header-click and cell-paint events *to* the
/// engine (via [`SortingList::header_clicked`] and the `cell_*`
/// accessors); this trait is the channel back in the other direction.
///
/// [`SortingList`]: crate::SortingList
/// [`SortingList::header_clicked`]: crate::SortingList::header_clicked
pub trait ListHost {
    /// Number of columns the widget currently shows.
    fn column_count(&self) -> usize;

    /// Column indices in current display order.
    fn column_order(&self) -> Vec<usize>;

    /// Reorder the displayed columns. `order` is a permutation of
    /// `0..column_count()`.
    fn set_column_order(&mut self, order: &[usize]);

    /// Current pixel width of a column.
    fn column_width(&self, column: usize) -> u32;

    /// Resize a column.
    fn set_column_width(&mut self, column: usize, width: u32);

    /// Current header label of a column, including any indicator
    /// glyph the engine has applied.
    fn header_text(&self, column: usize) -> String;

    /// Replace a column's header label.
    fn set_header_text(&mut self, column: usize, text: &str);
}
