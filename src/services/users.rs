//! Controller for the users page: role/deleted filters plus the
//! soft-delete / restore actions.

use log::error;

use crate::domain::user::{AdminUser, UserRole};
use crate::repository::{UserListQuery, UserReader, UserWriter};
use crate::services::listing::ListState;
use crate::services::{Confirmation, ServiceError, ServiceResult};

#[derive(Default)]
pub struct UsersPage {
    pub list: ListState<AdminUser>,
    role: Option<UserRole>,
    include_deleted: bool,
}

impl UsersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    pub fn include_deleted(&self) -> bool {
        self.include_deleted
    }

    fn query(&self) -> UserListQuery {
        let mut query = UserListQuery::new()
            .include_deleted(self.include_deleted)
            .paginate(self.list.page(), self.list.page_size());
        if let Some(search) = self.list.applied_search() {
            query = query.search(search);
        }
        if let Some(role) = self.role {
            query = query.role(role);
        }
        query
    }

    pub async fn refresh<R>(&mut self, repo: &R)
    where
        R: UserReader + ?Sized,
    {
        let ticket = self.list.begin();
        let result = repo
            .list_users(self.query())
            .await
            .map_err(ServiceError::from);
        if let Err(err) = &result {
            error!("Failed to list users: {err}");
        }
        self.list.commit(ticket, result);
    }

    pub async fn search<R>(&mut self, repo: &R)
    where
        R: UserReader + ?Sized,
    {
        self.list.apply_search();
        self.refresh(repo).await;
    }

    pub async fn go_to_page<R>(&mut self, repo: &R, page: usize)
    where
        R: UserReader + ?Sized,
    {
        self.list.set_page(page);
        self.refresh(repo).await;
    }

    /// Changing the role filter resets to the first page.
    pub async fn set_role<R>(&mut self, repo: &R, role: Option<UserRole>)
    where
        R: UserReader + ?Sized,
    {
        self.role = role;
        self.list.reset_page();
        self.refresh(repo).await;
    }

    /// Toggling the deleted filter resets to the first page.
    pub async fn set_include_deleted<R>(&mut self, repo: &R, include_deleted: bool)
    where
        R: UserReader + ?Sized,
    {
        self.include_deleted = include_deleted;
        self.list.reset_page();
        self.refresh(repo).await;
    }

    /// Soft-deletes after explicit confirmation; declining performs no
    /// request. When the deleted row was the last one on a page past the
    /// first, the page steps back before refetching.
    pub async fn soft_delete<R>(
        &mut self,
        repo: &R,
        user_id: &str,
        confirmation: Confirmation,
    ) -> ServiceResult<bool>
    where
        R: UserReader + UserWriter + ?Sized,
    {
        if !confirmation.is_confirmed() {
            return Ok(false);
        }
        repo.soft_delete_user(user_id).await?;
        self.list.step_back_after_removal();
        self.refresh(repo).await;
        Ok(true)
    }

    pub async fn restore<R>(
        &mut self,
        repo: &R,
        user_id: &str,
        confirmation: Confirmation,
    ) -> ServiceResult<bool>
    where
        R: UserReader + UserWriter + ?Sized,
    {
        if !confirmation.is_confirmed() {
            return Ok(false);
        }
        repo.restore_user(user_id).await?;
        self.refresh(repo).await;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::pagination::Page;
    use crate::repository::mock::MockRepository;

    fn user(id: &str, deleted: bool) -> AdminUser {
        AdminUser {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            name: None,
            roles: vec![UserRole::User],
            created_at: Utc::now(),
            last_login_at: None,
            deleted_at: deleted.then(Utc::now),
            is_owner: false,
            properties_count: 0,
            leads_count: 0,
        }
    }

    fn page_of(items: Vec<AdminUser>, total: usize, page: usize) -> Page<AdminUser> {
        Page {
            total,
            page,
            page_size: 20,
            items,
        }
    }

    #[tokio::test]
    async fn declined_soft_delete_performs_no_request() {
        let mut repo = MockRepository::new();
        repo.expect_soft_delete_user().times(0);
        repo.expect_list_users().times(0);

        let mut controller = UsersPage::new();
        let deleted = controller
            .soft_delete(&repo, "u1", Confirmation::Declined)
            .await
            .expect("no-op succeeds");
        assert!(!deleted);
    }

    #[tokio::test]
    async fn soft_delete_round_trip_hides_then_restores_the_user() {
        let mut repo = MockRepository::new();

        // Initial load shows the active user.
        repo.expect_list_users()
            .times(1)
            .returning(|_| Ok(page_of(vec![user("u1", false)], 1, 1)));

        let mut controller = UsersPage::new();
        controller.refresh(&repo).await;
        assert!(controller.list.data.as_ref().expect("loaded").items[0].is_active());

        // Soft delete: with includeDeleted=false the refetch excludes u1.
        repo.expect_soft_delete_user()
            .withf(|id| id == "u1")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_list_users()
            .withf(|query| !query.include_deleted)
            .times(1)
            .returning(|_| Ok(page_of(vec![], 0, 1)));
        let deleted = controller
            .soft_delete(&repo, "u1", Confirmation::Confirmed)
            .await
            .expect("soft delete succeeds");
        assert!(deleted);
        assert_eq!(
            controller.list.data.as_ref().map(|p| p.items.len()),
            Some(0)
        );

        // Restore: the user reappears in the default listing.
        repo.expect_restore_user()
            .withf(|id| id == "u1")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_list_users()
            .times(1)
            .returning(|_| Ok(page_of(vec![user("u1", false)], 1, 1)));
        let restored = controller
            .restore(&repo, "u1", Confirmation::Confirmed)
            .await
            .expect("restore succeeds");
        assert!(restored);
        let items = &controller.list.data.as_ref().expect("loaded").items;
        assert_eq!(items.len(), 1);
        assert!(items[0].is_active());
    }

    #[tokio::test]
    async fn deleting_the_last_row_of_page_two_returns_to_page_one() {
        let mut repo = MockRepository::new();

        // 21 users, pageSize 20: page 2 holds a single row.
        repo.expect_list_users()
            .withf(|query| query.pagination.map(|p| p.page) == Some(2))
            .times(1)
            .returning(|_| Ok(page_of(vec![user("u21", false)], 21, 2)));

        let mut controller = UsersPage::new();
        controller.go_to_page(&repo, 2).await;

        repo.expect_soft_delete_user().times(1).returning(|_| Ok(()));
        // The refetch after the delete must target page 1 again.
        repo.expect_list_users()
            .withf(|query| query.pagination.map(|p| p.page) == Some(1))
            .times(1)
            .returning(|_| Ok(page_of(vec![user("u1", false)], 20, 1)));

        controller
            .soft_delete(&repo, "u21", Confirmation::Confirmed)
            .await
            .expect("soft delete succeeds");
        assert_eq!(controller.list.page(), 1);
    }

    #[tokio::test]
    async fn changing_the_role_filter_resets_to_page_one() {
        let mut repo = MockRepository::new();
        repo.expect_list_users()
            .withf(|query| {
                query.role == Some(UserRole::Owner) && query.pagination.map(|p| p.page) == Some(1)
            })
            .times(1)
            .returning(|_| Ok(page_of(vec![], 0, 1)));

        let mut controller = UsersPage::new();
        controller.list.set_page(5);
        controller.set_role(&repo, Some(UserRole::Owner)).await;
        assert_eq!(controller.list.page(), 1);
    }

    #[tokio::test]
    async fn include_deleted_is_forwarded_to_the_query() {
        let mut repo = MockRepository::new();
        repo.expect_list_users()
            .withf(|query| query.include_deleted)
            .times(1)
            .returning(|_| Ok(page_of(vec![user("u1", true)], 1, 1)));

        let mut controller = UsersPage::new();
        controller.set_include_deleted(&repo, true).await;
        assert!(controller.include_deleted());
    }
}
