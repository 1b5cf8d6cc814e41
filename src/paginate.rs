//! Pure page-window math.
//!
//! The paginator holds no state: the caller owns the page cursor and
//! re-invokes [`paginate`] whenever the filtered count changes. Resetting
//! the cursor to 1 on filter changes is the caller's responsibility, see
//! `QueryState`.

/// Derived paging values for one `(total_items, page_size, requested_page)`
/// input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of pages; 0 when there are no items.
    pub total_pages: usize,
    /// Requested page clamped into `[1, max(total_pages, 1)]`.
    pub page: usize,
    /// First item index of the window.
    pub start: usize,
    /// One past the last item index of the window.
    pub end: usize,
}

/// Compute the window for `requested_page`, clamping out-of-range requests
/// to the nearest valid page. A `page_size` of zero is treated as one.
pub fn paginate(total_items: usize, page_size: usize, requested_page: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_items.div_ceil(page_size);
    let page = requested_page.clamp(1, total_pages.max(1));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    PageWindow {
        total_pages,
        page,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_window_is_partial() {
        let window = paginate(25, 16, 2);
        assert_eq!(
            window,
            PageWindow {
                total_pages: 2,
                page: 2,
                start: 16,
                end: 25,
            }
        );
    }

    #[test]
    fn empty_set_clamps_to_page_one_with_zero_pages() {
        let window = paginate(0, 16, 5);
        assert_eq!(
            window,
            PageWindow {
                total_pages: 0,
                page: 1,
                start: 0,
                end: 0,
            }
        );
    }

    #[test]
    fn out_of_range_requests_clamp_to_valid_pages() {
        assert_eq!(paginate(48, 16, 99).page, 3);
        assert_eq!(paginate(48, 16, 0).page, 1);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let window = paginate(32, 16, 2);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.start, 16);
        assert_eq!(window.end, 32);
    }

    #[test]
    fn single_item_is_one_page() {
        let window = paginate(1, 16, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.end, 1);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let window = paginate(3, 0, 2);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.page, 2);
        assert_eq!(window.start, 1);
        assert_eq!(window.end, 2);
    }
}
