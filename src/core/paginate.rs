//! Result Pagination
//!
//! Slices an ordered result set into fixed-size, 1-indexed pages. Page
//! numbers below 1 are clamped; pages beyond the end yield an empty slice.
//! The total unfiltered count travels with the page for display.

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number after clamping.
    pub number: u32,
    /// Total result count before slicing.
    pub total: usize,
}

/// Slice `items` into the requested page.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: usize) -> Page<T> {
    let number = page.max(1);
    let total = items.len();
    let start = (number as usize - 1).saturating_mul(per_page);

    let items = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(per_page).collect()
    };

    Page {
        items,
        number,
        total,
    }
}

/// Parse a raw page argument; non-numeric or non-positive input yields 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}
