//! Controller for the read-only owners page.

use log::error;

use crate::domain::owner::AdminOwner;
use crate::repository::{OwnerListQuery, OwnerReader};
use crate::services::ServiceError;
use crate::services::listing::ListState;

#[derive(Default)]
pub struct OwnersPage {
    pub list: ListState<AdminOwner>,
}

impl OwnersPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn query(&self) -> OwnerListQuery {
        let mut query = OwnerListQuery::new().paginate(self.list.page(), self.list.page_size());
        if let Some(search) = self.list.applied_search() {
            query = query.search(search);
        }
        query
    }

    pub async fn refresh<R>(&mut self, repo: &R)
    where
        R: OwnerReader + ?Sized,
    {
        let ticket = self.list.begin();
        let result = repo
            .list_owners(self.query())
            .await
            .map_err(ServiceError::from);
        if let Err(err) = &result {
            error!("Failed to list owners: {err}");
        }
        self.list.commit(ticket, result);
    }

    pub async fn search<R>(&mut self, repo: &R)
    where
        R: OwnerReader + ?Sized,
    {
        self.list.apply_search();
        self.refresh(repo).await;
    }

    pub async fn go_to_page<R>(&mut self, repo: &R, page: usize)
    where
        R: OwnerReader + ?Sized,
    {
        self.list.set_page(page);
        self.refresh(repo).await;
    }
}
