//! Horizon Trellis: observable view-model core in the Horizon Lattice style.
//!
//! Trellis is the standalone model layer for tooling UIs: observable row
//! models backing editable list/table views, comparator-driven sorted
//! insertion for menu-like structures, and scope-gated predicate filtering
//! for tree views. It contains no rendering, no event loop and no I/O:
//! the only boundary is the signal set a consumer connects to and the
//! per-node `matches` query a tree view issues.
//!
//! # Quick Start
//!
//! ```
//! use horizon_trellis::prelude::*;
//!
//! // An observable list of strings.
//! let model = RowModel::new(vec!["Banana".to_string()]);
//! model.signals().rows_inserted.connect(|&(first, _)| {
//!     println!("row {first} arrived");
//! });
//! model.push("Cherry".to_string());
//!
//! // A sorted picklist: insertion position is always comparator-derived.
//! let picklist = SortedRowModel::<String>::new();
//! picklist.insert("banana".to_string()).unwrap();
//! picklist.insert("apple".to_string()).unwrap();
//! assert_eq!(*picklist.rows(), vec!["apple", "banana"]);
//! ```

pub mod model;
pub mod prelude;

pub use model::{ModelError, ModelSignals, ObservableRows, Result, RowModel, SortedRowModel, TreeFilter};
