//! Controller for the regions page and the region save pipeline.

use log::error;

use crate::domain::region::{Region, RegionImageSlot};
use crate::forms::region::RegionForm;
use crate::repository::{RegionListQuery, RegionReader, RegionWriter};
use crate::services::listing::ListState;
use crate::services::{Confirmation, FormMode, ServiceError, ServiceResult};

/// Saves a region draft: create or update the structured record first, then
/// upload any newly selected images to their slot endpoints.
///
/// The record briefly exists without the new image paths; the upload
/// endpoints persist them server-side and list invalidation surfaces them on
/// the next fetch. No follow-up record update is needed after an upload.
pub async fn save_region<R>(repo: &R, form: &RegionForm) -> ServiceResult<Region>
where
    R: RegionWriter + ?Sized,
{
    let payload = form.to_payload()?;

    let region = match form.id.as_deref() {
        None => repo.create_region(&payload).await?,
        Some(id) => repo.update_region(id, &payload).await?,
    };

    if let Some(file) = form.cover.selection() {
        repo.upload_region_image(&region.id, RegionImageSlot::Cover, file)
            .await?;
    }
    if let Some(file) = form.hero.selection() {
        repo.upload_region_image(&region.id, RegionImageSlot::Hero, file)
            .await?;
    }

    Ok(region)
}

pub struct RegionPanel {
    pub mode: FormMode,
    pub form: RegionForm,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct RegionsPage {
    pub list: ListState<Region>,
    pub panel: Option<RegionPanel>,
}

impl RegionsPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn query(&self) -> RegionListQuery {
        let mut query = RegionListQuery::new().paginate(self.list.page(), self.list.page_size());
        if let Some(search) = self.list.applied_search() {
            query = query.search(search);
        }
        query
    }

    pub async fn refresh<R>(&mut self, repo: &R)
    where
        R: RegionReader + ?Sized,
    {
        let ticket = self.list.begin();
        let result = repo
            .list_regions(self.query())
            .await
            .map_err(ServiceError::from);
        if let Err(err) = &result {
            error!("Failed to list regions: {err}");
        }
        self.list.commit(ticket, result);
    }

    pub async fn search<R>(&mut self, repo: &R)
    where
        R: RegionReader + ?Sized,
    {
        self.list.apply_search();
        self.refresh(repo).await;
    }

    pub async fn go_to_page<R>(&mut self, repo: &R, page: usize)
    where
        R: RegionReader + ?Sized,
    {
        self.list.set_page(page);
        self.refresh(repo).await;
    }

    pub fn open_create(&mut self) {
        self.panel = Some(RegionPanel {
            mode: FormMode::Create,
            form: RegionForm::default(),
            error: None,
        });
    }

    pub fn open_edit(&mut self, region: &Region) {
        self.panel = Some(RegionPanel {
            mode: FormMode::Edit,
            form: RegionForm::from_region(region),
            error: None,
        });
    }

    pub fn close_panel(&mut self) {
        self.panel = None;
    }

    /// Runs [`save_region`] for the open panel; failures of either the
    /// record write or an upload keep the panel open with the message.
    pub async fn submit<R>(&mut self, repo: &R) -> bool
    where
        R: RegionReader + RegionWriter + ?Sized,
    {
        let Some(panel) = self.panel.as_mut() else {
            return false;
        };
        panel.error = None;

        let outcome = save_region(repo, &panel.form).await;
        match outcome {
            Ok(_) => {
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

    pub async fn delete<R>(
        &mut self,
        repo: &R,
        region_id: &str,
        confirmation: Confirmation,
    ) -> ServiceResult<bool>
    where
        R: RegionReader + RegionWriter + ?Sized,
    {
        if !confirmation.is_confirmed() {
            return Ok(false);
        }
        repo.delete_region(region_id).await?;
        self.list.step_back_after_removal();
        self.refresh(repo).await;
        Ok(true)
    }
}
