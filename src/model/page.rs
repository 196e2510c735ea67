//! Pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: usize = 100;

/// A 1-based page request. Out-of-range values are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn first(size: usize) -> Self {
        Self::new(1, size)
    }

    pub fn next(&self) -> Self {
        Self::new(self.page.saturating_add(1), self.size)
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.size)
    }
}

/// One page of results plus enough metadata to fetch the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total: usize,
}

impl<T> Page<T> {
    /// Cuts the requested page out of an already filtered, ordered result set.
    pub fn paginate(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.size)
            .collect();
        Self {
            items,
            page: request.page,
            size: request.size,
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.size)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_requests() {
        assert_eq!(PageRequest::new(0, 0), PageRequest { page: 1, size: 1 });
        assert_eq!(PageRequest::new(3, 1000).size, MAX_PAGE_SIZE);
    }

    #[test]
    fn slices_pages() {
        let first = Page::paginate((1..=5).collect(), PageRequest::first(2));
        assert_eq!(first.items, vec![1, 2]);
        assert_eq!(first.total_pages(), 3);
        assert!(first.has_next());

        let last = Page::paginate((1..=5).collect(), PageRequest::first(2).next().next());
        assert_eq!(last.items, vec![5]);
        assert!(!last.has_next());

        let beyond = Page::paginate((1..=5).collect::<Vec<u32>>(), PageRequest::new(9, 2));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 5);
    }
}
