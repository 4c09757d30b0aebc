use std::iter::{Skip, Take};

/// What a data layer needs to know to fetch one page of records
pub trait Paginator {
    /// Limit value meaning every record lands on a single page
    const NO_LIMIT: i64 = -1;

    /// Maximum amount of records, `NO_LIMIT` when unbounded
    fn limit(&self) -> i64;

    /// Index of the first record to return
    fn offset(&self) -> i64;

    /// Whether a maximum amount of records applies
    fn has_limit(&self) -> bool {
        self.limit() != Self::NO_LIMIT
    }

    /// Offset and limit as unsigned values, `None` limit when unbounded
    #[must_use]
    fn window(&self) -> (usize, Option<usize>) {
        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = self
            .has_limit()
            .then(|| usize::try_from(self.limit()).unwrap_or(usize::MAX));
        (offset, limit)
    }

    /// Restrict `iter` to the records of the current page
    fn paginate<I: Iterator>(&self, iter: I) -> Take<Skip<I>> {
        let (offset, limit) = self.window();
        iter.skip(offset).take(limit.unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Window(i64, i64);

    impl Paginator for Window {
        fn limit(&self) -> i64 {
            self.0
        }

        fn offset(&self) -> i64 {
            self.1
        }
    }

    #[test]
    fn unbounded_window() {
        let w = Window(Window::NO_LIMIT, 0);
        assert!(!w.has_limit());
        assert_eq!(w.window(), (0, None));
        assert_eq!(w.paginate(0..5).count(), 5);
    }

    #[test]
    fn bounded_window() {
        let w = Window(3, 4);
        assert!(w.has_limit());
        assert_eq!(w.window(), (4, Some(3)));
        assert_eq!(w.paginate(0..10).collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(w.paginate(0..5).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn unrepresentable_offset_gives_empty_page() {
        let w = Window(3, -1);
        assert_eq!(w.window(), (usize::MAX, Some(3)));
        assert_eq!(w.paginate(0..10).count(), 0);
    }
}
