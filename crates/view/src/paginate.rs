use serde::{Deserialize, Serialize};

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Clamped 1-based page number actually served.
    pub page: usize,
    pub per_page: usize,
    /// Number of items across all pages.
    pub total: usize,
    /// Always at least 1, even for an empty collection.
    pub total_pages: usize,
    pub data: Vec<T>,
}
impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first item on this page within the whole
    /// collection (what a serial-number column starts counting from).
    pub fn first_position(&self) -> usize {
        (self.page - 1) * self.per_page + 1
    }
}

/// Serve page `page` of `items`, `per_page` at a time.
///
/// Never fails: the requested page is clamped into `1..=total_pages` and a
/// `per_page` of zero is treated as one.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * per_page).min(total);
    let end = (start + per_page).min(total);
    Page { page, per_page, total, total_pages, data: items[start..end].to_vec() }
}

/// Up to `width` consecutive page numbers around `page`, kept inside
/// `1..=total_pages`.
pub fn page_window(page: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let width = width.clamp(1, total_pages);
    let start = page.saturating_sub(width / 2).clamp(1, total_pages + 1 - width);
    (start..start + width).collect()
}
