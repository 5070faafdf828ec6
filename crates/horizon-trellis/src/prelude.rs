//! Convenience re-exports for the common Trellis surface.
//!
//! ```
//! use horizon_trellis::prelude::*;
//!
//! let model = RowModel::new(vec!["Apple".to_string()]);
//! assert_eq!(model.len(), 1);
//! ```

pub use crate::model::{
    Criterion, FnCriterion, ListItem, ModelError, ModelSignals, NodeKind, ObservableRows,
    RowModel, SortedRowModel, TreeFilter,
};

pub use horizon_trellis_core::{ConnectionGuard, ConnectionId, Signal};
