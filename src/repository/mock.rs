//! Mock repository implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::amenity::{Amenity, NewAmenity, UpdateAmenity};
use crate::domain::owner::AdminOwner;
use crate::domain::region::{ImageUpload, Region, RegionImageSlot, RegionPayload, UploadedImage};
use crate::domain::user::AdminUser;
use crate::pagination::Page;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AmenityListQuery, AmenityReader, AmenityWriter, OwnerListQuery, OwnerReader, RegionListQuery,
    RegionReader, RegionWriter, UserListQuery, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    #[async_trait]
    impl AmenityReader for Repository {
        async fn list_amenities(&self, query: AmenityListQuery) -> RepositoryResult<Page<Amenity>>;
    }

    #[async_trait]
    impl AmenityWriter for Repository {
        async fn create_amenity(&self, new_amenity: &NewAmenity) -> RepositoryResult<Amenity>;
        async fn update_amenity(
            &self,
            amenity_id: &str,
            updates: &UpdateAmenity,
        ) -> RepositoryResult<Amenity>;
        async fn delete_amenity(&self, amenity_id: &str) -> RepositoryResult<()>;
    }

    #[async_trait]
    impl RegionReader for Repository {
        async fn list_regions(&self, query: RegionListQuery) -> RepositoryResult<Page<Region>>;
    }

    #[async_trait]
    impl RegionWriter for Repository {
        async fn create_region(&self, payload: &RegionPayload) -> RepositoryResult<Region>;
        async fn update_region(
            &self,
            region_id: &str,
            payload: &RegionPayload,
        ) -> RepositoryResult<Region>;
        async fn delete_region(&self, region_id: &str) -> RepositoryResult<()>;
        async fn upload_region_image(
            &self,
            region_id: &str,
            slot: RegionImageSlot,
            file: &ImageUpload,
        ) -> RepositoryResult<UploadedImage>;
    }

    #[async_trait]
    impl OwnerReader for Repository {
        async fn list_owners(&self, query: OwnerListQuery) -> RepositoryResult<Page<AdminOwner>>;
    }

    #[async_trait]
    impl UserReader for Repository {
        async fn list_users(&self, query: UserListQuery) -> RepositoryResult<Page<AdminUser>>;
    }

    #[async_trait]
    impl UserWriter for Repository {
        async fn soft_delete_user(&self, user_id: &str) -> RepositoryResult<()>;
        async fn restore_user(&self, user_id: &str) -> RepositoryResult<()>;
    }
}
