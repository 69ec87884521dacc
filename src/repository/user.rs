use async_trait::async_trait;

use crate::domain::user::AdminUser;
use crate::pagination::Page;
use crate::repository::api::{ApiRepository, expect_success};
use crate::repository::errors::RepositoryResult;
use crate::repository::{UserListQuery, UserReader, UserWriter};

const ENTITY: &str = "admin-users";

#[async_trait]
impl UserReader for ApiRepository {
    async fn list_users(&self, query: UserListQuery) -> RepositoryResult<Page<AdminUser>> {
        self.fetch_page(ENTITY, "/admin/users", query.query_pairs())
            .await
    }
}

#[async_trait]
impl UserWriter for ApiRepository {
    async fn soft_delete_user(&self, user_id: &str) -> RepositoryResult<()> {
        let value = self
            .http()
            .patch_empty(&format!("/admin/users/{user_id}/soft-delete"))
            .await?;
        self.invalidate(ENTITY);
        expect_success(&value)
    }

    async fn restore_user(&self, user_id: &str) -> RepositoryResult<()> {
        let value = self
            .http()
            .patch_empty(&format!("/admin/users/{user_id}/restore"))
            .await?;
        self.invalidate(ENTITY);
        expect_success(&value)
    }
}
