//! Core traits and signal bundle for the model layer.
//!
//! This module defines [`ModelSignals`], the set of structural change
//! signals every model owns, and [`ObservableRows`], the minimal interface
//! a view needs to observe a row-oriented model.

use horizon_trellis_core::Signal;

/// Collection of signals emitted by row models.
///
/// Views connect to these signals to stay synchronized with the model.
/// Models emit the appropriate signals when their data changes.
///
/// # Signal Usage
///
/// - **Before modifications**: `rows_about_to_be_*`, `model_about_to_reset`
///   or `layout_about_to_change` fire while the old state is still readable
/// - **After modifications**: the matching `rows_*`, `model_reset` or
///   `layout_changed` signal fires once the new state is in place
/// - **Value changes**: `rows_updated` fires for in-place element updates
///   (there is no before-signal for a pure value change)
///
/// All row-range arguments are inclusive `(first, last)` pairs of current
/// row indices.
pub struct ModelSignals {
    /// Emitted just before rows are inserted. Args: (first row, last row).
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been inserted. Args: (first row, last row).
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted just before rows are removed. Args: (first row, last row).
    pub rows_about_to_be_removed: Signal<(usize, usize)>,

    /// Emitted after rows have been removed. Args: (first row, last row).
    pub rows_removed: Signal<(usize, usize)>,

    /// Emitted when existing rows change in place. Args: (first row, last row).
    pub rows_updated: Signal<(usize, usize)>,

    /// Emitted before a layout change (e.g., sorting).
    pub layout_about_to_change: Signal<()>,

    /// Emitted after a layout change.
    pub layout_changed: Signal<()>,

    /// Emitted before the model is reset.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the model has been reset.
    pub model_reset: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            rows_updated: Signal::new(),
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Convenience methods for emitting signals
    // -------------------------------------------------------------------------

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about_to_be_inserted and
    /// inserted signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Emits signals for row removal.
    ///
    /// Calls the provided function between the about_to_be_removed and
    /// removed signals.
    pub fn emit_rows_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_removed.emit((first, last));
        remove_fn();
        self.rows_removed.emit((first, last));
    }

    /// Emits the rows_updated signal for a single row.
    pub fn emit_row_updated(&self, row: usize) {
        self.rows_updated.emit((row, row));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset
    /// signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }

    /// Emits signals for a layout change.
    ///
    /// Calls the provided function between the about_to_change and changed
    /// signals.
    pub fn emit_layout_changed<F>(&self, change_fn: F)
    where
        F: FnOnce(),
    {
        self.layout_about_to_change.emit(());
        change_fn();
        self.layout_changed.emit(());
    }
}

/// The minimal interface a view needs to observe a row-oriented model.
///
/// Both [`RowModel`](super::RowModel) and
/// [`SortedRowModel`](super::SortedRowModel) implement this, so view code
/// can subscribe to structural changes without caring which concrete model
/// backs the rows.
pub trait ObservableRows {
    /// Returns the number of rows in the model.
    fn len(&self) -> usize;

    /// Returns `true` if the model has no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the signals for this model.
    ///
    /// Views connect to these signals to receive notifications about
    /// insertions, removals, updates, and resets.
    fn signals(&self) -> &ModelSignals;
}
