//! Display-label trait for model items.

use std::borrow::Cow;

/// Trait for items that can provide their own display label.
///
/// Implement this trait for types that should be directly usable in a
/// [`SortedRowModel`](super::SortedRowModel) without supplying an explicit
/// comparator: the default comparator orders items by their display label.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use horizon_trellis::model::ListItem;
///
/// struct Target {
///     host: String,
///     port: u16,
/// }
///
/// impl ListItem for Target {
///     fn display(&self) -> Cow<'_, str> {
///         Cow::Owned(format!("{}:{}", self.host, self.port))
///     }
/// }
/// ```
pub trait ListItem: Send + Sync {
    /// Returns the primary display text for this item.
    fn display(&self) -> Cow<'_, str>;

    /// Returns the tooltip text for this item.
    fn tooltip(&self) -> Option<Cow<'_, str>> {
        None
    }
}

/// Implement ListItem for String for convenience.
impl ListItem for String {
    fn display(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl ListItem for &'static str {
    fn display(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}
