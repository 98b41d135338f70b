//! Paging and search helpers shared by the invoice queries.

/// Rows per page of the invoices table.
pub const ITEMS_PER_PAGE: i64 = 6;

/// Row offset of a 1-based page. Page 0 is read as page 1.
pub fn page_offset(page: u32) -> i64 {
    (i64::from(page.max(1)) - 1) * ITEMS_PER_PAGE
}

/// Number of pages needed for `matching` rows; zero when nothing matches.
pub fn total_pages(matching: i64) -> i64 {
    if matching <= 0 {
        return 0;
    }
    (matching + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE
}

/// The `ILIKE` pattern for a free-text search. An empty query matches every row.
pub fn search_pattern(query: &str) -> String {
    format!("%{query}%")
}
