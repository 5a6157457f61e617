use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PageError {
    #[error("Page numbers start at 1")]
    PageZero,
    #[error("Page {requested} is past the last page ({page_count})")]
    PastEnd { requested: u32, page_count: u32 },
}

/// Fixed-size pages over an ordered listing. Page numbers are 1-based, to
/// match what ends up in listing URLs.
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: u32,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: u32) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        Paginator { items, page_size }
    }

    pub fn page_count(&self) -> u32 {
        let len = self.items.len() as u32;
        len.div_ceil(self.page_size)
    }

    pub fn page(&self, number: u32) -> Result<&'a [T], PageError> {
        if number == 0 {
            return Err(PageError::PageZero);
        }
        let page_count = self.page_count();
        if number > page_count {
            return Err(PageError::PastEnd { requested: number, page_count });
        }

        let start = ((number - 1) * self.page_size) as usize;
        let end = usize::min(start + self.page_size as usize, self.items.len());
        Ok(&self.items[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slicing() {
        let items = vec![1, 2, 3, 4, 5, 6, 7];
        let paginator = Paginator::new(&items, 3);
        assert_eq!(paginator.page_count(), 3);
        assert_eq!(paginator.page(1), Ok([1, 2, 3].as_slice()));
        assert_eq!(paginator.page(2), Ok([4, 5, 6].as_slice()));
        // Final page is partial
        assert_eq!(paginator.page(3), Ok([7].as_slice()));
    }

    #[test]
    fn test_out_of_range_pages() {
        let items = vec![1, 2, 3];
        let paginator = Paginator::new(&items, 2);
        assert_eq!(paginator.page(0), Err(PageError::PageZero));
        assert_eq!(
            paginator.page(3),
            Err(PageError::PastEnd { requested: 3, page_count: 2 })
        );
    }

    #[test]
    fn test_empty_listing() {
        let items: Vec<u32> = vec![];
        let paginator = Paginator::new(&items, 3);
        assert_eq!(paginator.page_count(), 0);
        assert_eq!(
            paginator.page(1),
            Err(PageError::PastEnd { requested: 1, page_count: 0 })
        );
    }

    #[test]
    fn test_exact_multiple() {
        let items = vec![1, 2, 3, 4];
        let paginator = Paginator::new(&items, 2);
        assert_eq!(paginator.page_count(), 2);
        assert_eq!(paginator.page(2), Ok([3, 4].as_slice()));
    }
}
