use serde::{Deserialize, Serialize};

/// One page of a server-side collection, exactly as the API returns it.
///
/// `total` counts the whole filtered collection, not the page; the server
/// guarantees `items.len() <= page_size`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` items, never less than 1.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        self.total.div_ceil(self.page_size).max(1)
    }
}

fn page_numbers(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page numbers for the pagination strip, with `None` marking an ellipsis.
pub fn pager_windows(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let current_page = current_page.max(1);
    page_numbers(total_pages, current_page, 2, 2, 4, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total: usize, page: usize, page_size: usize, len: usize) -> Page<u32> {
        Page {
            total,
            page,
            page_size,
            items: vec![0; len],
        }
    }

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        assert_eq!(page_of(0, 1, 20, 0).total_pages(), 1);
        assert_eq!(page_of(20, 1, 20, 20).total_pages(), 1);
        assert_eq!(page_of(21, 1, 20, 20).total_pages(), 2);
        assert_eq!(page_of(41, 2, 20, 20).total_pages(), 3);
    }

    #[test]
    fn page_never_exceeds_page_size() {
        let page = page_of(21, 2, 20, 1);
        assert!(page.items.len() <= page.page_size);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn small_collections_list_every_page() {
        assert_eq!(
            pager_windows(3, 1),
            vec![Some(1), Some(2), Some(3)],
        );
    }

    #[test]
    fn long_collections_elide_the_middle() {
        let windows = pager_windows(20, 9);
        assert_eq!(windows[0], Some(1));
        assert_eq!(windows[1], Some(2));
        assert!(windows.contains(&None));
        assert!(windows.contains(&Some(9)));
        assert_eq!(windows.last(), Some(&Some(20)));
    }

    #[test]
    fn decodes_camel_case_wire_shape() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"total":3,"page":1,"pageSize":2,"items":[1,2]}"#)
                .expect("valid page json");
        assert_eq!(page.page_size, 2);
        assert_eq!(page.items, vec![1, 2]);
    }
}
