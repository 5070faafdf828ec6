//! Model layer for Horizon Trellis.
//!
//! This module provides the ordered/filterable view-model core used by
//! list-, table-, menu- and tree-style consumers:
//!
//! - Observable ordered storage with change notifications
//! - Comparator-driven sorted insertion for always-sorted structures
//! - Scope-gated predicate filtering over hierarchical nodes
//!
//! # Core Types
//!
//! - [`RowModel`]: a mutable ordered sequence emitting a signal per
//!   structural change
//! - [`SortedRowModel`]: sorted insertion on top of `RowModel`
//! - [`TreeFilter`]: the display filter a tree view consults per node
//! - [`ModelSignals`]: the bundle of change signals every model owns
//! - [`ModelError`]: range and comparability errors
//!
//! # Example
//!
//! ```
//! use horizon_trellis::model::RowModel;
//!
//! let model = RowModel::new(vec!["Apple".to_string(), "Banana".to_string()]);
//!
//! // Connect to change notifications
//! model.signals().rows_inserted.connect(|&(first, last)| {
//!     println!("rows {first}..={last} inserted");
//! });
//!
//! model.push("Cherry".to_string());
//! assert_eq!(&*model.get(2).unwrap(), "Cherry");
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────┐     ┌──────────┐
//! │    RowModel     │────>│ ModelSignals │────>│   View   │
//! │ SortedRowModel  │     │              │     │          │
//! └─────────────────┘     └──────────────┘     └──────────┘
//!                                                    │
//!                         ┌──────────────┐           │
//!                         │  TreeFilter  │<──────────┘ per-node
//!                         │  Criterion   │             matches()
//!                         └──────────────┘
//! ```
//!
//! Models emit signals when data changes, which views listen to for
//! updates; tree views additionally consult the filter for each node.

mod error;
mod item;
mod row_model;
mod sorted_model;
mod traits;
mod tree_filter;

pub use error::{ModelError, Result};
pub use item::ListItem;
pub use row_model::RowModel;
pub use sorted_model::{PartialCompareFn, SortedRowModel};
pub use traits::{ModelSignals, ObservableRows};
pub use tree_filter::{Criterion, FnCriterion, NodeKind, TreeFilter};
