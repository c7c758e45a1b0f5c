// Case-insensitive substring search over configured entity fields.
//
// Each searchable entity declares which of its fields participate in
// matching; the UI shell decides when to narrow a visible set. There is no
// ranking, only a membership test, and result order follows input order.

/// Implemented by entities that can be narrowed by a search query
pub trait Searchable {
    /// The field values a query is matched against
    fn search_fields(&self) -> Vec<&str>;
}

/// Filter a collection by a case-insensitive substring query
///
/// An empty (or all-whitespace) query returns the full collection
/// unchanged. Otherwise returns the order-preserving subsequence where at
/// least one configured field contains the query.
pub fn filter<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let query = query.trim();
    if query.is_empty() {
        return items.to_vec();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
