//! Fixed-size pagination
//!
//! Pages are numbered from 1. A requested page outside
//! `[1, total_pages]` is clamped into it; an empty collection has a single,
//! empty page 1.

use serde::Serialize;

/// Items per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Splits collections into pages of a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// A zero page size is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(count / page_size)`
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Clamp `page` into the displayable range for `count` items
    pub fn clamp(&self, page: usize, count: usize) -> usize {
        page.clamp(1, self.total_pages(count).max(1))
    }

    /// The (clamped) `page` of `items`
    pub fn page<T: Clone>(&self, items: &[T], page: usize) -> Page<T> {
        let page = self.clamp(page, items.len());
        let start = ((page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        Page {
            items: items[start..end].to_vec(),
            page,
            total_pages: self.total_pages(items.len()),
            total_items: items.len(),
        }
    }

    /// Every page of `items` in order
    pub fn pages<T: Clone>(&self, items: &[T]) -> Vec<Page<T>> {
        (1..=self.total_pages(items.len()))
            .map(|page| self.page(items, page))
            .collect()
    }
}

/// One page of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Current page of a view whose contents can change underneath it
///
/// The stored page is only clamped when the view is read, so it survives
/// the collection shrinking and growing back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.page
    }

    /// Back to page 1, used whenever the filter or search term changes
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, count: usize, paginator: &Paginator) -> usize {
        self.page = paginator.clamp(page, count);
        self.page
    }

    pub fn next(&mut self, count: usize, paginator: &Paginator) -> usize {
        let current = paginator.clamp(self.page, count);
        self.go_to(current + 1, count, paginator)
    }

    pub fn prev(&mut self, count: usize, paginator: &Paginator) -> usize {
        let current = paginator.clamp(self.page, count);
        self.go_to(current.saturating_sub(1), count, paginator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let paginator = Paginator::new(6);
        assert_eq!(paginator.total_pages(0), 0);
        assert_eq!(paginator.total_pages(1), 1);
        assert_eq!(paginator.total_pages(6), 1);
        assert_eq!(paginator.total_pages(7), 2);
        assert_eq!(paginator.total_pages(100), 17);
    }

    #[test]
    fn test_clamp() {
        let paginator = Paginator::new(6);
        assert_eq!(paginator.clamp(0, 10), 1);
        assert_eq!(paginator.clamp(2, 10), 2);
        assert_eq!(paginator.clamp(9, 10), 2);
        assert_eq!(paginator.clamp(5, 0), 1);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<u32> = (1..=10).collect();
        let page = Paginator::new(6).page(&items, 2);

        assert_eq!(page.items, vec![7, 8, 9, 10]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 10);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let items: Vec<u32> = (1..=10).collect();
        let page = Paginator::new(6).page(&items, 40);
        assert_eq!(page.page, 2);
        assert_eq!(page.items, vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_empty_collection_has_empty_first_page() {
        let page = Paginator::default().page::<u32>(&[], 3);
        assert_eq!(page.page, 1);
        assert!(page.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_pages_concatenate_to_collection() {
        for page_size in 1..=8 {
            let paginator = Paginator::new(page_size);
            for len in 0..=20 {
                let items: Vec<usize> = (0..len).collect();
                let joined: Vec<usize> = paginator
                    .pages(&items)
                    .into_iter()
                    .flat_map(|p| p.items)
                    .collect();
                assert_eq!(joined, items, "page_size={} len={}", page_size, len);
            }
        }
    }

    #[test]
    fn test_zero_page_size() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }

    #[test]
    fn test_cursor_moves_within_range() {
        let paginator = Paginator::new(6);
        let mut cursor = PageCursor::new();

        assert_eq!(cursor.prev(20, &paginator), 1);
        assert_eq!(cursor.next(20, &paginator), 2);
        assert_eq!(cursor.next(20, &paginator), 3);
        assert_eq!(cursor.next(20, &paginator), 4);
        assert_eq!(cursor.next(20, &paginator), 4);
        assert_eq!(cursor.go_to(2, 20, &paginator), 2);

        cursor.reset();
        assert_eq!(cursor.get(), 1);
    }

    #[test]
    fn test_cursor_steps_from_displayed_page() {
        let paginator = Paginator::new(6);
        let mut cursor = PageCursor::new();
        cursor.go_to(4, 20, &paginator);

        // Collection shrank to two pages: page 2 is displayed, so prev is 1
        assert_eq!(cursor.prev(10, &paginator), 1);
    }
}
