//! Generic observable row model.
//!
//! `RowModel<T>` owns a mutable ordered sequence of rows and emits a signal
//! for every structural change, so list- and table-style views can stay in
//! sync without polling.

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};

use super::error::{ModelError, Result};
use super::traits::{ModelSignals, ObservableRows};

/// A mutable ordered sequence of rows with change notification.
///
/// The backing storage is owned exclusively by the model: callers read rows
/// through guards ([`rows`](Self::rows), [`get`](Self::get)) and mutate only
/// through the model's methods, so a change notification can never be
/// bypassed.
///
/// Row indices are dense and zero-based; after any mutation, index `i`
/// refers to the `i`-th row in current order. Duplicates are permitted.
///
/// # Threading
///
/// The model is `Send + Sync` so it can be stored in shared framework
/// structures, but the change-notification contract is single-writer:
/// mutating the model from a second thread while a slot is running is out
/// of contract and must be serialized by the caller.
///
/// # Example
///
/// ```
/// use horizon_trellis::model::RowModel;
///
/// let model = RowModel::new(vec!["alpha".to_string(), "beta".to_string()]);
///
/// model.signals().rows_inserted.connect(|&(first, last)| {
///     println!("rows {first}..={last} inserted");
/// });
///
/// model.push("gamma".to_string());
/// assert_eq!(model.len(), 3);
/// ```
pub struct RowModel<T> {
    rows: RwLock<Vec<T>>,
    signals: ModelSignals,
}

impl<T: Send + Sync + 'static> Default for RowModel<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Send + Sync + 'static> RowModel<T> {
    /// Creates a row model from an initial vector of rows.
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
            signals: ModelSignals::new(),
        }
    }

    /// Creates an empty row model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns the number of rows in the model.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Returns a read guard over the live row sequence.
    ///
    /// The guard dereferences to the backing `Vec<T>`; it must be dropped
    /// before calling any mutating method on the same thread.
    pub fn rows(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.rows.read()
    }

    /// Returns a read guard for the row at `row`.
    ///
    /// Fails with [`ModelError::RowOutOfRange`] if `row >= len()`.
    pub fn get(&self, row: usize) -> Result<MappedRwLockReadGuard<'_, T>> {
        let guard = self.rows.read();
        let len = guard.len();
        RwLockReadGuard::try_map(guard, |rows| rows.get(row))
            .map_err(|_| ModelError::row_out_of_range(row, len))
    }

    /// Appends a row at the end of the sequence.
    ///
    /// Emits the rows-inserted pair for the single new index.
    pub fn push(&self, item: T) {
        let row = self.rows.read().len();
        self.signals.emit_rows_inserted(row, row, || {
            self.rows.write().push(item);
        });
    }

    /// Inserts a row at the specified index, shifting subsequent rows up.
    ///
    /// Fails with [`ModelError::RowOutOfRange`] if `row > len()`; the model
    /// is unchanged and nothing is emitted on error.
    pub fn insert(&self, row: usize, item: T) -> Result<()> {
        let len = self.rows.read().len();
        if row > len {
            return Err(ModelError::row_out_of_range(row, len));
        }
        self.signals.emit_rows_inserted(row, row, || {
            self.rows.write().insert(row, item);
        });
        Ok(())
    }

    /// Overwrites the row at `row`, returning the previous value.
    ///
    /// Emits rows-updated for `row`. Fails with
    /// [`ModelError::RowOutOfRange`] if `row >= len()`.
    pub fn replace(&self, row: usize, item: T) -> Result<T> {
        let old = {
            let mut rows = self.rows.write();
            let len = rows.len();
            if row >= len {
                return Err(ModelError::row_out_of_range(row, len));
            }
            std::mem::replace(&mut rows[row], item)
        };
        self.signals.emit_row_updated(row);
        Ok(old)
    }

    /// Removes and returns the row at `row`, shifting subsequent rows down.
    ///
    /// Emits the rows-removed pair for `row`. Fails with
    /// [`ModelError::RowOutOfRange`] if `row >= len()`.
    pub fn remove(&self, row: usize) -> Result<T> {
        let len = self.rows.read().len();
        if row >= len {
            return Err(ModelError::row_out_of_range(row, len));
        }
        let mut removed = None;
        self.signals.emit_rows_removed(row, row, || {
            removed = Some(self.rows.write().remove(row));
        });
        Ok(removed.unwrap())
    }

    /// Removes all rows from the model.
    ///
    /// Always emits the reset pair, even when the model is already empty:
    /// consumers use reset as a "re-read everything" cue.
    pub fn clear(&self) {
        self.signals.emit_reset(|| {
            self.rows.write().clear();
        });
    }

    /// Replaces all rows in the model.
    ///
    /// Emits the reset pair.
    pub fn set_rows(&self, rows: Vec<T>) {
        self.signals.emit_reset(|| {
            *self.rows.write() = rows;
        });
    }

    /// Provides mutable access to a row via a closure.
    ///
    /// Emits rows-updated after the closure returns. Fails with
    /// [`ModelError::RowOutOfRange`] if `row >= len()`; the closure is not
    /// called on error.
    pub fn modify<F, R>(&self, row: usize, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut rows = self.rows.write();
            let len = rows.len();
            if row >= len {
                return Err(ModelError::row_out_of_range(row, len));
            }
            f(&mut rows[row])
        };
        self.signals.emit_row_updated(row);
        Ok(result)
    }

    /// Swaps two rows.
    ///
    /// Emits rows-updated for both positions.
    pub fn swap(&self, a: usize, b: usize) -> Result<()> {
        {
            let mut rows = self.rows.write();
            let len = rows.len();
            if a >= len {
                return Err(ModelError::row_out_of_range(a, len));
            }
            if b >= len {
                return Err(ModelError::row_out_of_range(b, len));
            }
            rows.swap(a, b);
        }
        self.signals.emit_row_updated(a);
        self.signals.emit_row_updated(b);
        Ok(())
    }

    /// Sorts the rows using the provided comparator.
    ///
    /// Emits the layout-changed pair.
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.signals.emit_layout_changed(|| {
            self.rows.write().sort_by(compare);
        });
    }

    /// Returns the signals for this model.
    pub fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

impl<T: Send + Sync + 'static> ObservableRows for RowModel<T> {
    fn len(&self) -> usize {
        RowModel::len(self)
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

static_assertions::assert_impl_all!(RowModel<String>: Send, Sync);
