//! Controller for the amenities page.

use log::error;

use crate::domain::amenity::Amenity;
use crate::forms::amenity::AmenityForm;
use crate::repository::{AmenityListQuery, AmenityReader, AmenityWriter};
use crate::services::listing::ListState;
use crate::services::{Confirmation, FormMode, ServiceError, ServiceResult};

pub struct AmenityPanel {
    pub mode: FormMode,
    pub form: AmenityForm,
    /// Submit error shown inside the panel; the draft stays editable.
    pub error: Option<String>,
}

#[derive(Default)]
pub struct AmenitiesPage {
    pub list: ListState<Amenity>,
    pub panel: Option<AmenityPanel>,
}

impl AmenitiesPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn query(&self) -> AmenityListQuery {
        let mut query =
            AmenityListQuery::new().paginate(self.list.page(), self.list.page_size());
        if let Some(search) = self.list.applied_search() {
            query = query.search(search);
        }
        query
    }

    /// Fetches the current page; a stale in-flight result never lands.
    pub async fn refresh<R>(&mut self, repo: &R)
    where
        R: AmenityReader + ?Sized,
    {
        let ticket = self.list.begin();
        let result = repo
            .list_amenities(self.query())
            .await
            .map_err(ServiceError::from);
        if let Err(err) = &result {
            error!("Failed to list amenities: {err}");
        }
        self.list.commit(ticket, result);
    }

    pub async fn search<R>(&mut self, repo: &R)
    where
        R: AmenityReader + ?Sized,
    {
        self.list.apply_search();
        self.refresh(repo).await;
    }

    pub async fn go_to_page<R>(&mut self, repo: &R, page: usize)
    where
        R: AmenityReader + ?Sized,
    {
        self.list.set_page(page);
        self.refresh(repo).await;
    }

    pub fn open_create(&mut self) {
        self.panel = Some(AmenityPanel {
            mode: FormMode::Create,
            form: AmenityForm::default(),
            error: None,
        });
    }

    pub fn open_edit(&mut self, amenity: &Amenity) {
        self.panel = Some(AmenityPanel {
            mode: FormMode::Edit,
            form: AmenityForm::from_amenity(amenity),
            error: None,
        });
    }

    pub fn close_panel(&mut self) {
        self.panel = None;
    }

    /// Submits the open panel. Local validation failures (blank fields,
    /// malformed props JSON) set the panel error without issuing a request;
    /// server failures leave the panel open so the draft is not lost.
    /// Returns whether the panel was saved and closed.
    pub async fn submit<R>(&mut self, repo: &R) -> bool
    where
        R: AmenityReader + AmenityWriter + ?Sized,
    {
        let Some(panel) = self.panel.as_mut() else {
            return false;
        };
        panel.error = None;

        let outcome = match (panel.mode, panel.form.id.clone()) {
            (FormMode::Create, _) => match panel.form.to_new_amenity() {
                Ok(new_amenity) => repo
                    .create_amenity(&new_amenity)
                    .await
                    .map(|_| ())
                    .map_err(ServiceError::from),
                Err(err) => Err(err.into()),
            },
            (FormMode::Edit, Some(id)) => match panel.form.to_update_amenity() {
                Ok(updates) => repo
                    .update_amenity(&id, &updates)
                    .await
                    .map(|_| ())
                    .map_err(ServiceError::from),
                Err(err) => Err(err.into()),
            },
            (FormMode::Edit, None) => return false,
        };

        match outcome {
            Ok(()) => {
                self.panel = None;
                self.refresh(repo).await;
                true
            }
            Err(err) => {
                if let Some(panel) = self.panel.as_mut() {
                    panel.error = Some(err.to_string());
                }
                false
            }
        }
    }

    /// Deletes after explicit confirmation; declining is a no-op.
    pub async fn delete<R>(
        &mut self,
        repo: &R,
        amenity_id: &str,
        confirmation: Confirmation,
    ) -> ServiceResult<bool>
    where
        R: AmenityReader + AmenityWriter + ?Sized,
    {
        if !confirmation.is_confirmed() {
            return Ok(false);
        }
        repo.delete_amenity(amenity_id).await?;
        self.list.step_back_after_removal();
        self.refresh(repo).await;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::pagination::Page;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn amenity(id: &str, code: &str) -> Amenity {
        Amenity {
            id: id.to_string(),
            code: code.to_string(),
            label: code.to_uppercase(),
            props: None,
        }
    }

    fn page_of(items: Vec<Amenity>, total: usize, page: usize) -> Page<Amenity> {
        Page {
            total,
            page,
            page_size: 20,
            items,
        }
    }

    #[tokio::test]
    async fn malformed_props_never_issues_a_request() {
        let mut repo = MockRepository::new();
        repo.expect_create_amenity().times(0);

        let mut controller = AmenitiesPage::new();
        controller.open_create();
        {
            let panel = controller.panel.as_mut().expect("panel open");
            panel.form.code = "sauna".to_string();
            panel.form.label = "Sauna".to_string();
            panel.form.props_json = "{bad json".to_string();
        }

        assert!(!controller.submit(&repo).await);
        let panel = controller.panel.as_ref().expect("panel stays open");
        assert!(panel.error.as_deref().unwrap_or("").contains("JSON"));
    }

    #[tokio::test]
    async fn successful_create_closes_the_panel_and_refetches() {
        let mut repo = MockRepository::new();
        repo.expect_create_amenity()
            .withf(|new_amenity| {
                new_amenity.code == "sauna" && new_amenity.props == Some(json!({}))
            })
            .times(1)
            .returning(|_| Ok(amenity("a1", "sauna")));
        repo.expect_list_amenities()
            .times(1)
            .returning(|_| Ok(page_of(vec![amenity("a1", "sauna")], 1, 1)));

        let mut controller = AmenitiesPage::new();
        controller.open_create();
        {
            let panel = controller.panel.as_mut().expect("panel open");
            panel.form.code = "sauna".to_string();
            panel.form.label = "Sauna".to_string();
            panel.form.props_json = "{}".to_string();
        }

        assert!(controller.submit(&repo).await);
        assert!(controller.panel.is_none());
        assert_eq!(
            controller.list.data.as_ref().map(|p| p.items.len()),
            Some(1)
        );
    }

    #[tokio::test]
    async fn server_rejection_keeps_the_draft_open_with_the_message() {
        let mut repo = MockRepository::new();
        repo.expect_create_amenity()
            .times(1)
            .returning(|_| Err(RepositoryError::Request("code already exists".to_string())));
        repo.expect_list_amenities().times(0);

        let mut controller = AmenitiesPage::new();
        controller.open_create();
        {
            let panel = controller.panel.as_mut().expect("panel open");
            panel.form.code = "sauna".to_string();
            panel.form.label = "Sauna".to_string();
        }

        assert!(!controller.submit(&repo).await);
        let panel = controller.panel.as_ref().expect("panel stays open");
        assert_eq!(panel.error.as_deref(), Some("code already exists"));
        assert_eq!(panel.form.code, "sauna");
    }

    #[tokio::test]
    async fn declined_delete_is_a_no_op() {
        let mut repo = MockRepository::new();
        repo.expect_delete_amenity().times(0);
        repo.expect_list_amenities().times(0);

        let mut controller = AmenitiesPage::new();
        let deleted = controller
            .delete(&repo, "a1", Confirmation::Declined)
            .await
            .expect("no-op succeeds");
        assert!(!deleted);
    }

    #[tokio::test]
    async fn confirmed_delete_mutates_then_refetches() {
        let mut repo = MockRepository::new();
        repo.expect_delete_amenity()
            .withf(|id| id == "a1")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_list_amenities()
            .times(1)
            .returning(|_| Ok(page_of(vec![], 0, 1)));

        let mut controller = AmenitiesPage::new();
        let deleted = controller
            .delete(&repo, "a1", Confirmation::Confirmed)
            .await
            .expect("delete succeeds");
        assert!(deleted);
    }

    #[tokio::test]
    async fn search_applies_the_typed_term_and_resets_the_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_amenities()
            .withf(|query| {
                query.search.as_deref() == Some("spa")
                    && query.pagination.map(|p| p.page) == Some(1)
            })
            .times(1)
            .returning(|_| Ok(page_of(vec![], 0, 1)));

        let mut controller = AmenitiesPage::new();
        controller.list.set_page(3);
        controller.list.search_input = " spa ".to_string();
        controller.search(&repo).await;
    }
}
