/// Rows returned per page across every list endpoint.
pub const ROWS_PER_PAGE: usize = 12;

/// paginate
///
/// Slices an ordered result into the 1-indexed page requested by the client.
/// Page `p` covers indices `[(p-1)*12, p*12)`. A page past the end of the
/// collection yields an empty slice, not an error; page numbers below 1 are
/// clamped to the first page.
pub fn paginate<T>(rows: &[T], page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(ROWS_PER_PAGE);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + ROWS_PER_PAGE).min(rows.len());
    &rows[start..end]
}
