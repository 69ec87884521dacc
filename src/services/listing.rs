//! Shared list-page state machine.
//!
//! Every collection page owns a [`ListState`]: the typed search input, the
//! applied search, the current page, and the last committed result. Fetches
//! are ticketed so a slow response for a superseded filter can never
//! overwrite the result of a newer one.

use crate::DEFAULT_PAGE_SIZE;
use crate::pagination::{Page, pager_windows};
use crate::services::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Handle for one issued fetch; only the most recently issued one commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

#[derive(Debug)]
pub struct ListState<T> {
    /// What the user has typed; fetches only see it after `apply_search`.
    pub search_input: String,
    applied_search: String,
    page: usize,
    page_size: usize,
    /// Last successfully committed page; kept visible through errors.
    pub data: Option<Page<T>>,
    pub error: Option<ServiceError>,
    status: ListStatus,
    seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_input: String::new(),
            applied_search: String::new(),
            page: 1,
            page_size,
            data: None,
            error: None,
            status: ListStatus::Idle,
            seq: 0,
        }
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The applied search term, `None` while blank.
    pub fn applied_search(&self) -> Option<&str> {
        if self.applied_search.is_empty() {
            None
        } else {
            Some(&self.applied_search)
        }
    }

    /// Applies the typed search term and resets to the first page.
    pub fn apply_search(&mut self) {
        self.applied_search = self.search_input.trim().to_string();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Non-page filters reset pagination when they change.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Marks the state loading and issues a ticket for the fetch about to
    /// run. Issuing a newer ticket supersedes every earlier one.
    pub fn begin(&mut self) -> FetchTicket {
        self.seq += 1;
        self.status = ListStatus::Loading;
        FetchTicket { seq: self.seq }
    }

    /// Commits a finished fetch. Returns `false` (and changes nothing) when
    /// the ticket has been superseded by a newer `begin` — the late result is
    /// discarded, so the last issued fetch wins regardless of completion
    /// order. Errors keep the previous data visible.
    pub fn commit(&mut self, ticket: FetchTicket, result: Result<Page<T>, ServiceError>) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        match result {
            Ok(page) => {
                self.data = Some(page);
                self.error = None;
                self.status = ListStatus::Loaded;
            }
            Err(err) => {
                self.error = Some(err);
                self.status = ListStatus::Errored;
            }
        }
        true
    }

    pub fn total_pages(&self) -> usize {
        self.data.as_ref().map_or(1, Page::total_pages)
    }

    /// Numbers for the pagination strip, `None` marking an ellipsis.
    pub fn pager(&self) -> Vec<Option<usize>> {
        pager_windows(self.total_pages(), self.page)
    }

    /// After removing a row: if it was the only one on a page past the
    /// first, step back so the user does not land on an empty page.
    /// Returns whether the page changed.
    pub fn step_back_after_removal(&mut self) -> bool {
        let emptied = self
            .data
            .as_ref()
            .is_some_and(|page| page.items.len() == 1);
        if emptied && self.page > 1 {
            self.page -= 1;
            return true;
        }
        false
    }
}
