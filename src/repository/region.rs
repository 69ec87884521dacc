use async_trait::async_trait;

use crate::cache::CacheKey;
use crate::domain::region::{ImageUpload, Region, RegionImageSlot, RegionPayload, UploadedImage};
use crate::pagination::Page;
use crate::repository::api::{ApiRepository, decode};
use crate::repository::errors::RepositoryResult;
use crate::repository::{RegionListQuery, RegionReader, RegionWriter};

const ENTITY: &str = "regions";
/// Detail views cache under the singular entity name, keyed by id.
const ITEM_ENTITY: &str = "region";

#[async_trait]
impl RegionReader for ApiRepository {
    async fn list_regions(&self, query: RegionListQuery) -> RepositoryResult<Page<Region>> {
        self.fetch_page(ENTITY, "/regions", query.query_pairs())
            .await
    }
}

#[async_trait]
impl RegionWriter for ApiRepository {
    async fn create_region(&self, payload: &RegionPayload) -> RepositoryResult<Region> {
        let value = self.http().post_json("/regions", payload).await?;
        self.invalidate(ENTITY);
        decode(&value)
    }

    async fn update_region(
        &self,
        region_id: &str,
        payload: &RegionPayload,
    ) -> RepositoryResult<Region> {
        let value = self
            .http()
            .patch_json(&format!("/regions/{region_id}"), payload)
            .await?;
        self.invalidate(ENTITY);
        self.remove_item(&CacheKey::item(ITEM_ENTITY, region_id));
        decode(&value)
    }

    async fn delete_region(&self, region_id: &str) -> RepositoryResult<()> {
        self.http()
            .delete_json(&format!("/regions/{region_id}"))
            .await?;
        self.invalidate(ENTITY);
        self.remove_item(&CacheKey::item(ITEM_ENTITY, region_id));
        Ok(())
    }

    async fn upload_region_image(
        &self,
        region_id: &str,
        slot: RegionImageSlot,
        file: &ImageUpload,
    ) -> RepositoryResult<UploadedImage> {
        let path = format!("/regions/{region_id}/{}", slot.endpoint_segment());
        let value = self.http().post_multipart(&path, file).await?;
        // The stored path lands on the record server-side; the next list
        // fetch must observe it.
        self.invalidate(ENTITY);
        self.remove_item(&CacheKey::item(ITEM_ENTITY, region_id));
        decode(&value)
    }
}
