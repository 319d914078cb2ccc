//! In-memory pagination over upstream ID lists

use serde_json::Value;

/// Compute the half-open slice bounds for a page
pub fn page_bounds(page: usize, limit: usize) -> (usize, usize) {
    let start = page.saturating_mul(limit);
    let end = start.saturating_add(limit);
    (start, end)
}

/// Slice one page out of the full ID list, clamped to its length
pub fn slice_page(ids: &[Value], page: usize, limit: usize) -> &[Value] {
    let (start, end) = page_bounds(page, limit);
    let start = start.min(ids.len());
    let end = end.min(ids.len());
    &ids[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!(i)).collect()
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(0, 3), (0, 3));
        assert_eq!(page_bounds(2, 3), (6, 9));
        // saturates instead of overflowing
        assert_eq!(page_bounds(usize::MAX, 3).1, usize::MAX);
    }

    #[test]
    fn test_slice_in_order() {
        let ids = ids(10);
        let page = slice_page(&ids, 1, 3);
        assert_eq!(page, &[json!(3), json!(4), json!(5)]);
    }

    #[test]
    fn test_partial_last_page() {
        let ids = ids(5);
        let page = slice_page(&ids, 1, 3);
        assert_eq!(page, &[json!(3), json!(4)]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let ids = ids(5);
        assert!(slice_page(&ids, 7, 3).is_empty());
        assert!(slice_page(&[], 0, 3).is_empty());
    }
}
