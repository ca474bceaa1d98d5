//! Fixed-size pagination over a fully materialized, ordered sequence.

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Parse the raw `page` query parameter.
///
/// Missing, unparseable, zero, and negative values all fall back to page 1;
/// a bad page number is never a client error on its own.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<i64>().ok())
        .and_then(|page| usize::try_from(page).ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// The 1-indexed `page` window of `items`, `QUESTIONS_PER_PAGE` wide.
///
/// Pages past the end of the data are empty; callers turn that into their
/// not-found condition.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
