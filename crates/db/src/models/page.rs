use serde::Serialize;

/// One window of a filtered list: `total` matching rows, `items` on this page.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Replace the page items, keeping the pre-pagination total.
    pub fn with_items<U>(self, items: Vec<U>) -> Page<U> {
        Page {
            total: self.total,
            items,
        }
    }
}
