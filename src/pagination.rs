//! # Pagination Module
//!
//! Compact page-number list for pagination controls: always show the first and
//! last page plus a window around the current page, collapsing longer skipped
//! runs into a single gap marker.

/// One element of a compact pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A concrete page number the control links to
    Page(u32),
    /// Stands in for an unlisted run of page numbers
    Gap,
}

/// Pages within this distance of the current page are always listed
const PAGE_WINDOW: u32 = 2;

/// Compute the number of pages needed for `total` results
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    ((total + page_size as u64 - 1) / page_size as u64) as u32
}

/// Produce the compact marker sequence for a pagination control.
///
/// Includes page 1, `total_pages`, and every page within [`PAGE_WINDOW`] of
/// `current_page`. Between consecutive included pages, a gap of exactly one
/// page is filled with that page; anything wider collapses to one
/// [`PageMarker::Gap`].
///
/// `current_page` must already be clamped to `[1, total_pages]` by the caller;
/// `total_pages == 0` yields an empty sequence.
pub fn compact_page_markers(current_page: u32, total_pages: u32) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }

    let window_low = current_page.saturating_sub(PAGE_WINDOW);
    let window_high = current_page.saturating_add(PAGE_WINDOW);

    let included: Vec<u32> = (1..=total_pages)
        .filter(|&p| p == 1 || p == total_pages || (window_low <= p && p <= window_high))
        .collect();

    let mut markers = Vec::with_capacity(included.len() + 2);
    let mut previous: Option<u32> = None;
    for page in included {
        if let Some(prev) = previous {
            match page - prev {
                0 | 1 => {}
                // exactly one skipped page: cheaper to show it than a marker
                2 => markers.push(PageMarker::Page(prev + 1)),
                _ => markers.push(PageMarker::Gap),
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(markers: &[PageMarker]) -> Vec<i64> {
        markers
            .iter()
            .map(|m| match m {
                PageMarker::Page(p) => *p as i64,
                PageMarker::Gap => -1,
            })
            .collect()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(pages(&compact_page_markers(1, 1)), vec![1]);
    }

    #[test]
    fn test_no_pages() {
        assert!(compact_page_markers(1, 0).is_empty());
    }

    #[test]
    fn test_window_fills_single_page_gap() {
        // 1 and 3 are two apart, so page 2 is shown instead of a marker;
        // 7 to 10 is wider and collapses to a gap
        assert_eq!(
            pages(&compact_page_markers(5, 10)),
            vec![1, 2, 3, 4, 5, 6, 7, -1, 10]
        );
    }

    #[test]
    fn test_gaps_on_both_sides() {
        assert_eq!(
            pages(&compact_page_markers(50, 100)),
            vec![1, -1, 48, 49, 50, 51, 52, -1, 100]
        );
    }

    #[test]
    fn test_current_at_first_page() {
        assert_eq!(pages(&compact_page_markers(1, 10)), vec![1, 2, 3, -1, 10]);
    }

    #[test]
    fn test_current_at_last_page() {
        assert_eq!(pages(&compact_page_markers(10, 10)), vec![1, -1, 8, 9, 10]);
    }

    #[test]
    fn test_small_total_lists_everything() {
        assert_eq!(pages(&compact_page_markers(1, 3)), vec![1, 2, 3]);
        assert_eq!(pages(&compact_page_markers(2, 4)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_total_pages_rounding() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(0, 0), 0);
    }

    #[test]
    fn test_never_two_adjacent_gaps() {
        for total in 1..=60 {
            for current in 1..=total {
                let markers = compact_page_markers(current, total);
                for pair in markers.windows(2) {
                    assert!(
                        !(pair[0] == PageMarker::Gap && pair[1] == PageMarker::Gap),
                        "adjacent gaps at current={} total={}",
                        current,
                        total
                    );
                }
                assert_eq!(markers.first(), Some(&PageMarker::Page(1)));
                assert_eq!(markers.last(), Some(&PageMarker::Page(total)));
            }
        }
    }
}
