//! Typed access to the admin REST API.
//!
//! Reader and writer traits are the seams the service layer works against;
//! [`api::ApiRepository`] is the HTTP-backed implementation and
//! [`mock::MockRepository`] the test double. List queries are builder-style
//! value objects whose `query_pairs` drive both the request query string and
//! the cache key, so the two can never drift apart.

use async_trait::async_trait;

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::amenity::{Amenity, NewAmenity, UpdateAmenity};
use crate::domain::owner::AdminOwner;
use crate::domain::region::{ImageUpload, Region, RegionImageSlot, RegionPayload, UploadedImage};
use crate::domain::user::{AdminUser, UserRole};
use crate::pagination::Page;
use crate::repository::errors::RepositoryResult;

pub mod amenity;
pub mod api;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod owner;
pub mod region;
pub mod user;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

fn pagination_pairs(pagination: Option<Pagination>) -> [(&'static str, String); 2] {
    let Pagination { page, per_page } = pagination.unwrap_or_default();
    [
        ("page", page.to_string()),
        ("pageSize", per_page.to_string()),
    ]
}

fn search_pair(search: &Option<String>) -> Option<(&'static str, String)> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| ("search", s.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct AmenityListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl AmenityListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::from(pagination_pairs(self.pagination));
        pairs.extend(search_pair(&self.search));
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegionListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl RegionListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::from(pagination_pairs(self.pagination));
        pairs.extend(search_pair(&self.search));
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct OwnerListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl OwnerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::from(pagination_pairs(self.pagination));
        pairs.extend(search_pair(&self.search));
        pairs
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub role: Option<UserRole>,
    pub include_deleted: bool,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn include_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = include_deleted;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::from(pagination_pairs(self.pagination));
        pairs.extend(search_pair(&self.search));
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_string()));
        }
        if self.include_deleted {
            pairs.push(("includeDeleted", "true".to_string()));
        }
        pairs
    }
}

#[async_trait]
pub trait AmenityReader: Send + Sync {
    async fn list_amenities(&self, query: AmenityListQuery) -> RepositoryResult<Page<Amenity>>;
}

#[async_trait]
pub trait AmenityWriter: Send + Sync {
    async fn create_amenity(&self, new_amenity: &NewAmenity) -> RepositoryResult<Amenity>;
    async fn update_amenity(
        &self,
        amenity_id: &str,
        updates: &UpdateAmenity,
    ) -> RepositoryResult<Amenity>;
    async fn delete_amenity(&self, amenity_id: &str) -> RepositoryResult<()>;
}

#[async_trait]
pub trait RegionReader: Send + Sync {
    async fn list_regions(&self, query: RegionListQuery) -> RepositoryResult<Page<Region>>;
}

#[async_trait]
pub trait RegionWriter: Send + Sync {
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
pub trait OwnerReader: Send + Sync {
    async fn list_owners(&self, query: OwnerListQuery) -> RepositoryResult<Page<AdminOwner>>;
}

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn list_users(&self, query: UserListQuery) -> RepositoryResult<Page<AdminUser>>;
}

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn soft_delete_user(&self, user_id: &str) -> RepositoryResult<()>;
    async fn restore_user(&self, user_id: &str) -> RepositoryResult<()>;
}
