//! Property Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{PropertyError, PropertyResult};
use crate::models::{PagedResult, Property, PropertyDetail, PropertyFilter};
use crate::repository::{OwnerRepository, PropertyRepository};

/// Property service providing the read operations
///
/// The service layer validates input and orchestrates repository reads.
/// Absence of a property is a normal return value at this layer; only the
/// transport boundary turns it into a 404.
pub struct PropertyService<P: PropertyRepository, O: OwnerRepository> {
    properties: Arc<P>,
    owners: Arc<O>,
}

impl<P: PropertyRepository, O: OwnerRepository> PropertyService<P, O> {
    /// Create a new PropertyService with the given repositories
    pub fn new(properties: P, owners: O) -> Self {
        Self {
            properties: Arc::new(properties),
            owners: Arc::new(owners),
        }
    }

    /// List one page of properties matching the filter
    #[instrument(skip(self))]
    pub async fn list_properties(
        &self,
        filter: PropertyFilter,
    ) -> PropertyResult<PagedResult<Property>> {
        filter
            .validate()
            .map_err(|e| PropertyError::Validation(e.to_string()))?;

        self.properties.list(filter).await
    }

    /// Get a property by ID together with its owner
    ///
    /// Returns `Ok(None)` when no property has the given identity. A missing
    /// owner on an existing property is tolerated and logged; the association
    /// is required, so this indicates a data-integrity problem.
    #[instrument(skip(self))]
    pub async fn get_property(&self, id: &str) -> PropertyResult<Option<PropertyDetail>> {
        let Some(property) = self.properties.get_by_id(id).await? else {
            return Ok(None);
        };

        let owner = self.owners.get_by_id(&property.owner_id).await?;
        if owner.is_none() {
            tracing::warn!(
                property_id = %property.id,
                owner_id = %property.owner_id,
                "property references a missing owner"
            );
        }

        Ok(Some(PropertyDetail { property, owner }))
    }
}
