use async_trait::async_trait;

use crate::domain::owner::AdminOwner;
use crate::pagination::Page;
use crate::repository::api::ApiRepository;
use crate::repository::errors::RepositoryResult;
use crate::repository::{OwnerListQuery, OwnerReader};

const ENTITY: &str = "admin-owners";

#[async_trait]
impl OwnerReader for ApiRepository {
    async fn list_owners(&self, query: OwnerListQuery) -> RepositoryResult<Page<AdminOwner>> {
        self.fetch_page(ENTITY, "/admin/owners", query.query_pairs())
            .await
    }
}
