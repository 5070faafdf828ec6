//! Comparator-driven sorted insertion on top of [`RowModel`].
//!
//! `SortedRowModel<T>` is used for menu-like and picklist-like structures
//! that must always render sorted without re-sorting on every mutation:
//! the comparator decides every insertion position, and positional insert
//! requests are deliberately not honored.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::MappedRwLockReadGuard;

use super::error::{ModelError, Result};
use super::item::ListItem;
use super::row_model::RowModel;
use super::traits::{ModelSignals, ObservableRows};

/// Type alias for a partial comparator function.
///
/// `None` means the two elements are incomparable; see
/// [`SortedRowModel::insert`] for how incomparable pairs are placed.
pub type PartialCompareFn<T> = Arc<dyn Fn(&T, &T) -> Option<Ordering> + Send + Sync>;

/// A row model that enforces a comparator-defined order on insertion.
///
/// Every element is placed by scanning from the front for the first
/// existing element the new one sorts before. Elements comparing equal
/// retain their relative insertion order (stable insertion), and a freshly
/// inserted equal-keyed element lands after all previously inserted equal
/// ones. The scan is O(n), which is fine at UI scale.
///
/// The inner [`RowModel`] and its signals are the notification surface;
/// raw positional mutators are *not* re-exposed, so the sequence can never
/// desynchronize from its sort order.
///
/// # Example
///
/// ```
/// use horizon_trellis::model::SortedRowModel;
///
/// let menu = SortedRowModel::<String>::new();
/// menu.insert("banana".to_string()).unwrap();
/// menu.insert("apple".to_string()).unwrap();
/// menu.insert("cherry".to_string()).unwrap();
///
/// assert_eq!(*menu.rows(), vec!["apple", "banana", "cherry"]);
/// ```
pub struct SortedRowModel<T> {
    inner: RowModel<T>,
    compare: PartialCompareFn<T>,
    reject_incomparable: bool,
}

impl<T: ListItem + 'static> Default for SortedRowModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ListItem + 'static> SortedRowModel<T> {
    /// Creates a sorted model ordering items by their display label.
    ///
    /// Labels are compared lexically and case-sensitively.
    pub fn new() -> Self {
        Self::with_compare(|a: &T, b: &T| a.display().cmp(&b.display()))
    }
}

impl<T: Send + Sync + 'static> SortedRowModel<T> {
    /// Creates a sorted model with a total-order comparator.
    pub fn with_compare<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        let compare: PartialCompareFn<T> = Arc::new(move |a: &T, b: &T| Some(compare(a, b)));
        Self {
            inner: RowModel::empty(),
            compare,
            reject_incomparable: false,
        }
    }

    /// Creates a sorted model with a partial-order comparator.
    ///
    /// Returning `None` marks a pair as incomparable; see
    /// [`insert`](Self::insert).
    pub fn with_partial_compare<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Option<Ordering> + Send + Sync + 'static,
    {
        Self {
            inner: RowModel::empty(),
            compare: Arc::new(compare),
            reject_incomparable: false,
        }
    }

    /// Makes `insert` fail with [`ModelError::Incomparable`] when the
    /// comparator returns `None`, instead of treating the pair as
    /// unordered.
    pub fn reject_incomparable(mut self) -> Self {
        self.reject_incomparable = true;
        self
    }

    /// Inserts an element at its comparator-derived position and returns
    /// the row it landed on.
    ///
    /// Scans from the front for the first existing element `e` with
    /// `compare(item, e) == Some(Less)` and inserts before it; if there is
    /// none, appends at the end. An element that is incomparable with every
    /// existing element therefore ends up at the end of the sequence;
    /// separator-like content never interrupts the ordered run.
    ///
    /// With [`reject_incomparable`](Self::reject_incomparable) set, the
    /// first `None` comparison aborts with [`ModelError::Incomparable`].
    /// The scan completes before any mutation, so a failed insert leaves
    /// the model in its pre-call state and emits nothing.
    pub fn insert(&self, item: T) -> Result<usize> {
        let row = {
            let rows = self.inner.rows();
            let mut row = rows.len();
            for (i, existing) in rows.iter().enumerate() {
                match (self.compare)(&item, existing) {
                    Some(Ordering::Less) => {
                        row = i;
                        break;
                    }
                    Some(_) => {}
                    None if self.reject_incomparable => {
                        return Err(ModelError::incomparable(i));
                    }
                    None => {}
                }
            }
            row
        };
        self.inner.insert(row, item)?;
        Ok(row)
    }

    /// Inserts an element, ignoring the requested row.
    ///
    /// The caller-supplied `row` is **not honored**: the comparator-derived
    /// position is always used, exactly as [`insert`](Self::insert) would.
    /// Honoring a raw index could desynchronize the sequence from its sort
    /// order, so ordered containers exposed through a generic positional
    /// interface substitute their own position instead. The returned row is
    /// where the element actually landed.
    pub fn insert_at(&self, _row: usize, item: T) -> Result<usize> {
        self.insert(item)
    }

    /// Removes and returns the element at `row`.
    ///
    /// Removal cannot break the order invariant, so it is delegated as-is.
    pub fn remove(&self, row: usize) -> Result<T> {
        self.inner.remove(row)
    }

    /// Removes all elements.
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a read guard over the live ordered sequence.
    pub fn rows(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.inner.rows()
    }

    /// Returns a read guard for the element at `row`.
    pub fn get(&self, row: usize) -> Result<MappedRwLockReadGuard<'_, T>> {
        self.inner.get(row)
    }

    /// Returns the signals of the underlying row model.
    pub fn signals(&self) -> &ModelSignals {
        self.inner.signals()
    }
}

impl<T: Send + Sync + 'static> ObservableRows for SortedRowModel<T> {
    fn len(&self) -> usize {
        SortedRowModel::len(self)
    }

    fn signals(&self) -> &ModelSignals {
        self.inner.signals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_labels_sort_on_insertion() {
        let model = SortedRowModel::<String>::new();
        model.insert("banana".to_string()).unwrap();
        model.insert("apple".to_string()).unwrap();
        model.insert("cherry".to_string()).unwrap();

        assert_eq!(*model.rows(), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_insert_returns_landing_row() {
        let model = SortedRowModel::<String>::new();
        assert_eq!(model.insert("banana".to_string()).unwrap(), 0);
        assert_eq!(model.insert("apple".to_string()).unwrap(), 0);
        assert_eq!(model.insert("cherry".to_string()).unwrap(), 2);
    }

    #[test]
    fn test_adjacent_pairs_are_ordered() {
        let model = SortedRowModel::<String>::new();
        for label in ["delta", "alpha", "echo", "bravo", "charlie", "alpha"] {
            model.insert(label.to_string()).unwrap();
        }

        let rows = model.rows();
        for pair in rows.windows(2) {
            assert!(pair[0] <= pair[1], "{:?} > {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        #[derive(Debug, PartialEq)]
        struct Entry {
            label: &'static str,
            serial: u32,
        }

        let model =
            SortedRowModel::with_compare(|a: &Entry, b: &Entry| a.label.cmp(b.label));

        model.insert(Entry { label: "dup", serial: 1 }).unwrap();
        model.insert(Entry { label: "aaa", serial: 2 }).unwrap();
        model.insert(Entry { label: "dup", serial: 3 }).unwrap();
        model.insert(Entry { label: "dup", serial: 4 }).unwrap();

        let serials: Vec<u32> = model.rows().iter().map(|e| e.serial).collect();
        // Equal-keyed entries 1, 3, 4 stay in the order they arrived.
        assert_eq!(serials, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_insert_at_ignores_requested_row() {
        let model = SortedRowModel::<String>::new();
        model.insert("apple".to_string()).unwrap();
        model.insert("cherry".to_string()).unwrap();

        // Caller asks for row 0; the comparator says row 1.
        let row = model.insert_at(0, "banana".to_string()).unwrap();
        assert_eq!(row, 1);
        assert_eq!(*model.rows(), vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_insertion_emits_rows_inserted() {
        let model = SortedRowModel::<String>::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let recv = events.clone();
        model.signals().rows_inserted.connect(move |&(first, last)| {
            recv.lock().push((first, last));
        });

        model.insert("banana".to_string()).unwrap();
        model.insert("apple".to_string()).unwrap();

        // "apple" sorts before "banana", so the second insert lands at 0.
        assert_eq!(*events.lock(), vec![(0, 0), (0, 0)]);
    }

    /// Menu-style content: labeled entries sort, separators do not.
    #[derive(Debug, PartialEq)]
    enum MenuEntry {
        Item(String),
        Separator,
    }

    fn menu_compare(a: &MenuEntry, b: &MenuEntry) -> Option<Ordering> {
        match (a, b) {
            (MenuEntry::Item(la), MenuEntry::Item(lb)) => Some(la.cmp(lb)),
            _ => None,
        }
    }

    #[test]
    fn test_incomparable_content_appends_at_end() {
        let model = SortedRowModel::with_partial_compare(menu_compare);

        model.insert(MenuEntry::Item("cut".to_string())).unwrap();
        model.insert(MenuEntry::Separator).unwrap();
        let row = model.insert(MenuEntry::Item("copy".to_string())).unwrap();

        // The separator stays at the end; "copy" sorts among the items.
        assert_eq!(row, 0);
        assert_eq!(
            *model.rows(),
            vec![
                MenuEntry::Item("copy".to_string()),
                MenuEntry::Item("cut".to_string()),
                MenuEntry::Separator,
            ]
        );
    }

    #[test]
    fn test_reject_incomparable_leaves_model_untouched() {
        let model =
            SortedRowModel::with_partial_compare(menu_compare).reject_incomparable();

        model.insert(MenuEntry::Item("cut".to_string())).unwrap();
        let err = model.insert(MenuEntry::Separator).unwrap_err();

        assert_eq!(err, ModelError::incomparable(0));
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_shared_observable_seam() {
        let model = SortedRowModel::<String>::new();
        model.insert("only".to_string()).unwrap();

        let observable: &dyn ObservableRows = &model;
        assert_eq!(observable.len(), 1);
        assert!(!observable.is_empty());
    }
}
