/// The sortable list engine.
///
/// `SortingList` sits between a hosting list widget and the rows it
/// displays. It owns the two-key sort specification, the header
/// indicator, and the persistence identity; it owns neither the row
/// data (shared handles only) nor the pixels (everything visual goes
/// through the [`ListHost`] trait).
///
/// All operations run synchronously on the UI event thread in
/// response to discrete events — header click, cell paint, teardown.
/// Nothing here blocks, suspends, or spawns.
use std::rc::Rc;

use crate::header::{apply_glyph, strip_glyph};
use crate::host::ListHost;
use crate::layout::{clamp_width, is_permutation, ColumnLayout};
use crate::persistence::LayoutStore;
use crate::row::RowItem;
use crate::sorting::{compare_rows, SortSpec};

/// Per-column default sort direction hook.
///
/// The base policy is ascending for every column; a concrete list
/// overrides it where another default reads better (a size column
/// usually wants descending first).
pub type AscendingDefaultFn = Box<dyn Fn(usize) -> bool>;

/// Sortable, virtualized columnar list engine.
///
/// Rows are registered as `Rc<dyn RowItem>` handles; their data stays
/// with the owner, and cell text/icons are fetched through the handle
/// on demand, never cached. Layout (column order and widths — not
/// the sort spec) round-trips through a [`LayoutStore`] under this
/// list's persistence identity: loaded at construction, saved at
/// [`destroy`].
///
/// Callers must not re-enter `set_sorting`/`sort` from within a
/// [`RowItem`] callback: `header_clicked` sorts synchronously before
/// returning, and the active spec is read throughout the sort.
///
/// [`destroy`]: SortingList::destroy
pub struct SortingList<H: ListHost> {
    /// Persistence identity — key into the layout store, constant for
    /// this instance's lifetime.
    name: String,
    host: H,
    store: Box<dyn LayoutStore>,
    rows: Vec<Rc<dyn RowItem>>,
    sorting: SortSpec,
    /// Column whose header currently carries the indicator glyph.
    indicated_column: Option<usize>,
    has_images: bool,
    ascending_default: AscendingDefaultFn,
}

impl<H: ListHost> SortingList<H> {
    /// Create the engine for `host`, identified as `name` in `store`.
    ///
    /// The column layout is seeded from whatever the host reports and
    /// immediately overlaid with any persisted values found under
    /// `name` (load-on-init). Sorting and the indicator start unset.
    pub fn new(name: impl Into<String>, host: H, store: Box<dyn LayoutStore>) -> Self {
        let mut list = Self {
            name: name.into(),
            host,
            store,
            rows: Vec::new(),
            sorting: SortSpec::default(),
            indicated_column: None,
            has_images: false,
            ascending_default: Box::new(|_| true),
        };
        list.load_layout();
        list
    }

    /// Declare that rows supply icons; [`cell_image`] yields `None`
    /// until this is set.
    ///
    /// [`cell_image`]: SortingList::cell_image
    pub fn with_images(mut self, has_images: bool) -> Self {
        self.has_images = has_images;
        self
    }

    /// Override the per-column default sort direction used when a
    /// header click promotes a new primary column.
    pub fn with_ascending_default(mut self, f: impl Fn(usize) -> bool + 'static) -> Self {
        self.ascending_default = Box::new(f);
        self
    }

    /// This list's persistence identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hosting widget.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the hosting widget.
    ///
    /// The indicated column's header label carries the glyph prefix;
    /// callers rewriting header text themselves must preserve it.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // ── Sorting ─────────────────────────────────────────────────────

    /// The active sort specification.
    pub fn sorting(&self) -> SortSpec {
        self.sorting
    }

    /// Replace the sort specification wholesale.
    ///
    /// Does not re-sort; call [`sort`](SortingList::sort) after.
    /// Column indices are not validated — out-of-range indices are a
    /// caller error.
    pub fn set_sorting(&mut self, sorting: SortSpec) {
        self.sorting = sorting;
    }

    /// Single-key convenience: make `column` the primary key and
    /// demote the old primary (with its direction) to the tie-break.
    pub fn set_sort_column(&mut self, column: usize, ascending: bool) {
        self.sorting.promote(column, ascending);
    }

    /// Reorder all rows by the active spec, then move the header
    /// indicator to the primary column.
    ///
    /// The underlying sort is stable, so rows tying on both keys keep
    /// their prior relative order. Repeating the call with the same
    /// spec yields the same order and does not stack glyphs.
    pub fn sort(&mut self) {
        let sorting = self.sorting;
        self.rows
            .sort_by(|a, b| compare_rows(a.as_ref(), b.as_ref(), &sorting).cmp(&0));
        self.update_indicator();
    }

    /// Header-click state machine.
    ///
    /// Clicking the current primary column flips its direction and
    /// leaves the tie-break untouched; clicking any other column
    /// promotes it with its default direction and demotes the old
    /// primary. Either way the list re-sorts synchronously.
    pub fn header_clicked(&mut self, column: usize) {
        debug_assert!(column < self.host.column_count(), "column out of range");
        if column >= self.host.column_count() {
            return;
        }

        if column == self.sorting.column1 {
            self.sorting.ascending1 = !self.sorting.ascending1;
        } else {
            let ascending = (self.ascending_default)(column);
            self.sorting.promote(column, ascending);
        }
        self.sort();
    }

    /// Header double-clicks behave exactly like single clicks.
    pub fn header_double_clicked(&mut self, column: usize) {
        self.header_clicked(column);
    }

    /// Move the indicator glyph to the current primary column.
    ///
    /// Strips the previous glyph first so the label underneath stays
    /// recoverable and glyphs never accumulate.
    fn update_indicator(&mut self) {
        if let Some(previous) = self.indicated_column {
            let label = self.host.header_text(previous);
            self.host.set_header_text(previous, &strip_glyph(&label));
            self.indicated_column = None;
        }

        let column = self.sorting.column1;
        debug_assert!(column < self.host.column_count(), "column out of range");
        if column >= self.host.column_count() {
            return;
        }
        let label = self.host.header_text(column);
        self.host
            .set_header_text(column, &apply_glyph(&label, self.sorting.ascending1));
        self.indicated_column = Some(column);
    }

    // ── Rows ────────────────────────────────────────────────────────

    /// Register a row handle at the end of the list.
    pub fn push_row(&mut self, row: Rc<dyn RowItem>) {
        self.rows.push(row);
    }

    /// Register a row handle at `index`.
    pub fn insert_row(&mut self, index: usize, row: Rc<dyn RowItem>) {
        debug_assert!(index <= self.rows.len(), "row index out of range");
        let index = index.min(self.rows.len());
        self.rows.insert(index, row);
    }

    /// The row handle currently displayed at `index`.
    pub fn row(&self, index: usize) -> Option<&Rc<dyn RowItem>> {
        self.rows.get(index)
    }

    /// Number of registered rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Drop all row handles (the owners keep the data).
    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Cell text for an on-demand paint request — forwarded to the
    /// row handle, never cached.
    pub fn cell_text(&self, row: usize, column: usize) -> Option<String> {
        self.rows.get(row).map(|r| r.text(column))
    }

    /// Icon index for an on-demand paint request.
    ///
    /// `None` unless the list was declared [`with_images`].
    ///
    /// [`with_images`]: SortingList::with_images
    pub fn cell_image(&self, row: usize) -> Option<usize> {
        if !self.has_images {
            return None;
        }
        self.rows.get(row).and_then(|r| r.image())
    }

    // ── Layout persistence ──────────────────────────────────────────

    /// Snapshot of the host's current column order and widths.
    pub fn layout(&self) -> ColumnLayout {
        let count = self.host.column_count();
        ColumnLayout {
            order: self.host.column_order(),
            widths: (0..count).map(|c| self.host.column_width(c)).collect(),
        }
    }

    /// Overlay persisted layout onto the host's defaults.
    ///
    /// Persisted data is advisory: an order that is not a permutation
    /// of the current columns is ignored, widths are clamped to at
    /// most [`MAX_WIDTH_FACTOR`] times the default, extra entries are
    /// ignored, and missing entries leave the default untouched. Any
    /// read failure means "use defaults" — never fatal.
    ///
    /// [`MAX_WIDTH_FACTOR`]: crate::layout::MAX_WIDTH_FACTOR
    fn load_layout(&mut self) {
        let count = self.host.column_count();

        match self.store.column_order(&self.name) {
            Ok(order) if is_permutation(&order, count) => {
                self.host.set_column_order(&order);
            }
            Ok(order) => {
                tracing::warn!(
                    name = %self.name,
                    ?order,
                    count,
                    "ignoring saved column order: not a permutation of current columns"
                );
            }
            Err(e) => {
                tracing::debug!(name = %self.name, error = %e, "no saved column order");
            }
        }

        match self.store.column_widths(&self.name) {
            Ok(widths) => {
                for (column, &saved) in widths.iter().take(count).enumerate() {
                    let default = self.host.column_width(column);
                    self.host.set_column_width(column, clamp_width(saved, default));
                }
            }
            Err(e) => {
                tracing::debug!(name = %self.name, error = %e, "no saved column widths");
            }
        }
    }

    /// Write the current column order and widths to the store.
    ///
    /// Sort order is deliberately not saved: restoring a sort the
    /// user did not choose makes for a baffling session start.
    /// Write failures are logged and swallowed.
    pub fn save_layout(&mut self) {
        let layout = self.layout();
        if let Err(e) = self.store.set_column_order(&self.name, &layout.order) {
            tracing::warn!(name = %self.name, error = %e, "failed to save column order");
        }
        if let Err(e) = self.store.set_column_widths(&self.name, &layout.widths) {
            tracing::warn!(name = %self.name, error = %e, "failed to save column widths");
        }
    }

    /// Tear down: save the layout, then hand the host back for the
    /// widget's own destruction.
    ///
    /// Consumes the engine — no further events are accepted after
    /// destroy, by construction.
    pub fn destroy(mut self) -> H {
        self.save_layout();
        self.host
    }
}
