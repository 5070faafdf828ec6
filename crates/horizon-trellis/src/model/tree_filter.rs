//! Scope-gated predicate filtering for hierarchical tree views.
//!
//! A tree view asks its [`TreeFilter`] "does this node currently qualify
//! for display?" on every structural change of the tree. The filter
//! combines a membership gate (restrict to in-scope nodes) with an optional
//! delegate [`Criterion`] evaluated against the node's associated record.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A predicate over a node's associated record.
///
/// Criteria are supplied at filter construction and are expected to be
/// cheap, reusable, and free of interior state: evaluation may happen for
/// every node of the tree on every refresh.
pub trait Criterion<R>: Send + Sync {
    /// Returns `true` if the record satisfies this criterion.
    fn matches(&self, record: &R) -> bool;

    /// A one-line rendering of this criterion, for toolbars and titles.
    fn short_desc(&self) -> String {
        String::new()
    }

    /// A detailed rendering of this criterion, for tooltips and dialogs.
    fn long_desc(&self) -> String {
        self.short_desc()
    }
}

/// Closure-based [`Criterion`] for ad-hoc predicates.
///
/// # Example
///
/// ```
/// use horizon_trellis::model::FnCriterion;
///
/// let only_errors = FnCriterion::new("status >= 400", |status: &u16| *status >= 400);
/// ```
pub struct FnCriterion<R> {
    name: String,
    predicate: Box<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R> FnCriterion<R> {
    /// Creates a criterion from a display name and a predicate closure.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<R> Criterion<R> for FnCriterion<R> {
    fn matches(&self, record: &R) -> bool {
        (self.predicate)(record)
    }

    fn short_desc(&self) -> String {
        self.name.clone()
    }
}

/// A tree node as seen by the filter.
///
/// The root is its own variant rather than a flag on a general node: the
/// root of a tree view must never be hidden (it anchors every visible
/// path), and making it a distinct case keeps that rule structural.
pub enum NodeKind<'a, R> {
    /// The root of the tree. Always passes the filter.
    Root,
    /// Any non-root node.
    Node {
        /// Whether the node belongs to the current working set.
        in_scope: bool,
        /// The record the delegate criterion evaluates. A node without a
        /// record is not evaluable and is hidden whenever a criterion is
        /// configured.
        record: Option<&'a R>,
    },
}

impl<R> NodeKind<'_, R> {
    /// Returns `true` for the root variant.
    pub fn is_root(&self) -> bool {
        matches!(self, NodeKind::Root)
    }
}

/// A composable display filter over hierarchical tree nodes.
///
/// Evaluation of [`matches`](Self::matches) is a pure function of the
/// current flag, the construction-time criterion, and the node passed in;
/// nothing is cached, and the owning view re-queries after any state
/// change it cares about.
///
/// The delegate criterion is fixed at construction (there is no setter),
/// so the filter's identity cannot change mid-use. The in-scope gate is
/// the one mutable toggle.
///
/// With no criterion configured the filter is restrictive, not permissive:
/// a non-root node only qualifies through an accepting criterion, so
/// "filter attached, nothing configured" shows the root alone.
///
/// # Example
///
/// ```
/// use horizon_trellis::model::{FnCriterion, NodeKind, TreeFilter};
///
/// let filter = TreeFilter::with_criterion(FnCriterion::new(
///     "status >= 400",
///     |status: &u16| *status >= 400,
/// ));
///
/// assert!(filter.matches(NodeKind::Root));
/// assert!(filter.matches(NodeKind::Node { in_scope: false, record: Some(&404) }));
/// assert!(!filter.matches(NodeKind::Node { in_scope: false, record: Some(&200) }));
/// ```
pub struct TreeFilter<R> {
    criterion: Option<Arc<dyn Criterion<R>>>,
    in_scope_only: AtomicBool,
}

impl<R> Default for TreeFilter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> TreeFilter<R> {
    /// Creates a filter with no delegate criterion.
    pub fn new() -> Self {
        Self {
            criterion: None,
            in_scope_only: AtomicBool::new(false),
        }
    }

    /// Creates a filter with the given delegate criterion.
    pub fn with_criterion(criterion: impl Criterion<R> + 'static) -> Self {
        Self {
            criterion: Some(Arc::new(criterion)),
            in_scope_only: AtomicBool::new(false),
        }
    }

    /// Restricts (or stops restricting) the filter to in-scope nodes.
    pub fn set_in_scope_only(&self, restrict: bool) {
        self.in_scope_only.store(restrict, Ordering::SeqCst);
    }

    /// Returns `true` if the filter is restricted to in-scope nodes.
    pub fn in_scope_only(&self) -> bool {
        self.in_scope_only.load(Ordering::SeqCst)
    }

    /// Returns `true` if a delegate criterion is configured.
    pub fn has_criterion(&self) -> bool {
        self.criterion.is_some()
    }

    /// Returns whether the node currently qualifies for display.
    ///
    /// The root always qualifies. A non-root node must pass the in-scope
    /// gate (when enabled) and then the delegate criterion, evaluated
    /// against its record; a node without a record, or a filter without a
    /// criterion, does not qualify.
    pub fn matches(&self, node: NodeKind<'_, R>) -> bool {
        let (in_scope, record) = match node {
            NodeKind::Root => return true,
            NodeKind::Node { in_scope, record } => (in_scope, record),
        };

        if self.in_scope_only() && !in_scope {
            return false;
        }

        match (&self.criterion, record) {
            (Some(criterion), Some(record)) => criterion.matches(record),
            _ => false,
        }
    }

    /// A one-line rendering of the delegate criterion.
    ///
    /// Empty when no criterion is configured. The in-scope gate is not part
    /// of this summary; callers display scope state separately.
    pub fn short_desc(&self) -> String {
        self.criterion
            .as_ref()
            .map(|c| c.short_desc())
            .unwrap_or_default()
    }

    /// A detailed rendering of the delegate criterion.
    ///
    /// Empty when no criterion is configured.
    pub fn long_desc(&self) -> String {
        self.criterion
            .as_ref()
            .map(|c| c.long_desc())
            .unwrap_or_default()
    }
}
