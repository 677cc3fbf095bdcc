//! Properties API routes

use axum::Router;
use domain_properties::{
    handlers, MongoOwnerRepository, MongoPropertyRepository, PropertyService,
};

use crate::state::AppState;

/// Create the properties router
pub fn router(state: &AppState) -> Router {
    let properties = MongoPropertyRepository::new(&state.db);
    let owners = MongoOwnerRepository::new(&state.db);
    let service = PropertyService::new(properties, owners);
    handlers::router(service)
}

/// Initialize property indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoPropertyRepository::new(&state.db);
    repository
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create property indexes: {}", e))?;
    tracing::info!("Property collection indexes created");
    Ok(())
}
