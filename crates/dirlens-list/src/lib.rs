/// Dirlens List — sortable columnar list engine.
///
/// The UI-independent core of the Dirlens directory-statistics
/// viewer's list views: two-key sorting with per-key direction, a
/// header indicator kept consistent with the sort state, on-demand
/// (virtualized) cell content, and column layout persisted across
/// sessions. Rendering, scanning, and number formatting live in other
/// crates; this one owns the invariants.
///
/// # Modules
///
/// - [`row`] — the capability trait displayable rows implement.
/// - [`sorting`] — two-key sort specification and row comparator.
/// - [`header`] — indicator glyph helpers.
/// - [`layout`] — column order/width snapshot and validation.
/// - [`host`] — the hosting-widget collaborator trait.
/// - [`persistence`] — the external layout store collaborator.
/// - [`list`] — the engine tying the above together.
pub mod header;
pub mod host;
pub mod layout;
pub mod list;
pub mod persistence;
pub mod row;
pub mod sorting;

pub use host::ListHost;
pub use layout::ColumnLayout;
pub use list::SortingList;
pub use persistence::{LayoutStore, MemoryStore, StoreError};
pub use row::{default_text_compare, RowItem};
pub use sorting::{compare_rows, SortSpec};
