use async_trait::async_trait;

use crate::error::PropertyResult;
use crate::models::{Owner, PagedResult, Property, PropertyFilter};

/// Repository trait for Property reads
///
/// This trait defines the data access interface for properties.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// One page of properties matching the filter, with the total match
    /// count across all pages. Page items carry the reduced list
    /// projection (id, name, address, price, owner id, first image).
    async fn list(&self, filter: PropertyFilter) -> PropertyResult<PagedResult<Property>>;

    /// Get a property by ID, fully populated. Absence is `Ok(None)`,
    /// never an error.
    async fn get_by_id(&self, id: &str) -> PropertyResult<Option<Property>>;
}

/// Repository trait for Owner reads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Get an owner by ID. Absence is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: &str) -> PropertyResult<Option<Owner>>;
}
