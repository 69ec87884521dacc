use async_trait::async_trait;

use crate::domain::amenity::{Amenity, NewAmenity, UpdateAmenity};
use crate::pagination::Page;
use crate::repository::api::{ApiRepository, decode, expect_success};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AmenityListQuery, AmenityReader, AmenityWriter};

const ENTITY: &str = "amenities";

#[async_trait]
impl AmenityReader for ApiRepository {
    async fn list_amenities(&self, query: AmenityListQuery) -> RepositoryResult<Page<Amenity>> {
        self.fetch_page(ENTITY, "/amenities", query.query_pairs())
            .await
    }
}

#[async_trait]
impl AmenityWriter for ApiRepository {
    async fn create_amenity(&self, new_amenity: &NewAmenity) -> RepositoryResult<Amenity> {
        let value = self.http().post_json("/amenities", new_amenity).await?;
        self.invalidate(ENTITY);
        decode(&value)
    }

    async fn update_amenity(
        &self,
        amenity_id: &str,
        updates: &UpdateAmenity,
    ) -> RepositoryResult<Amenity> {
        let value = self
            .http()
            .patch_json(&format!("/amenities/{amenity_id}"), updates)
            .await?;
        self.invalidate(ENTITY);
        decode(&value)
    }

    async fn delete_amenity(&self, amenity_id: &str) -> RepositoryResult<()> {
        let value = self
            .http()
            .delete_json(&format!("/amenities/{amenity_id}"))
            .await?;
        self.invalidate(ENTITY);
        expect_success(&value)
    }
}
