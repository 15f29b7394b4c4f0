//! Works out which links to show in the pager below the transactions table.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The maximum number of numbered pages to show in the pager, not
    /// counting the first and last pages shown after an ellipsis.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { max_pages: 5 }
    }
}

/// One element of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(u64),
    /// The page being displayed.
    CurrPage(u64),
    /// Marks pages that were left out.
    Ellipsis,
    /// A link to the following page.
    NextButton(u64),
    /// A link to the preceding page.
    BackButton(u64),
}

/// Create the pager for `curr_page` out of `page_count` pages.
///
/// Shows a window of at most `max_pages` pages centred on `curr_page` where
/// possible. When the window does not reach the first or last page, that page
/// is added with an ellipsis in between. Back and next buttons are added when
/// there is a page to go back or forward to.
///
/// Returns an empty list when there are no pages.
pub fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    if page_count == 0 {
        return Vec::new();
    }

    let max_pages = max_pages.max(1);
    let half_window = max_pages / 2;
    let (first, last) = if page_count <= max_pages {
        (1, page_count)
    } else {
        let first = curr_page
            .saturating_sub(half_window)
            .clamp(1, page_count - max_pages + 1);
        (first, first + max_pages - 1)
    };

    let mut indicators = Vec::new();

    if curr_page > 1 {
        // A page past the end goes back to the last page, not another empty one.
        let back_page = curr_page.min(page_count + 1) - 1;
        indicators.push(PaginationIndicator::BackButton(back_page));
    }

    if first > 1 {
        indicators.push(PaginationIndicator::Page(1));
        indicators.push(PaginationIndicator::Ellipsis);
    }

    indicators.extend((first..=last).map(|page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    }));

    if last < page_count {
        indicators.push(PaginationIndicator::Ellipsis);
        indicators.push(PaginationIndicator::Page(page_count));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}

#[cfg(test)]
mod tests {
    use crate::pagination::{PaginationIndicator, create_pagination_indicators};

    use PaginationIndicator::{BackButton, CurrPage, Ellipsis, NextButton, Page};

    #[test]
    fn no_pages_gives_no_indicators() {
        assert!(create_pagination_indicators(1, 0, 5).is_empty());
    }

    #[test]
    fn single_page_has_no_buttons() {
        assert_eq!(create_pagination_indicators(1, 1, 5), [CurrPage(1)]);
    }

    #[test]
    fn shows_all_pages() {
        let want = [CurrPage(1), Page(2), Page(3), NextButton(2)];

        let got = create_pagination_indicators(1, 3, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_on_left() {
        let want = [
            CurrPage(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Ellipsis,
            Page(10),
            NextButton(2),
        ];

        let got = create_pagination_indicators(1, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_both_buttons_and_trailing_ellipsis() {
        let want = [
            BackButton(2),
            Page(1),
            Page(2),
            CurrPage(3),
            Page(4),
            Page(5),
            Ellipsis,
            Page(10),
            NextButton(4),
        ];

        let got = create_pagination_indicators(3, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_in_center() {
        let want = [
            BackButton(4),
            Page(1),
            Ellipsis,
            Page(3),
            Page(4),
            CurrPage(5),
            Page(6),
            Page(7),
            Ellipsis,
            Page(10),
            NextButton(6),
        ];

        let got = create_pagination_indicators(5, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn shows_page_subset_on_right() {
        let want = [
            BackButton(9),
            Page(1),
            Ellipsis,
            Page(6),
            Page(7),
            Page(8),
            Page(9),
            CurrPage(10),
        ];

        let got = create_pagination_indicators(10, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn page_past_the_end_links_back_to_last_page() {
        let want = [BackButton(3), Page(1), Page(2), Page(3)];

        let got = create_pagination_indicators(4, 3, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn page_far_past_the_end_links_back_to_last_page() {
        let want = [BackButton(3), Page(1), Page(2), Page(3)];

        let got = create_pagination_indicators(9, 3, 5);

        assert_eq!(want, got.as_slice());
    }
}
