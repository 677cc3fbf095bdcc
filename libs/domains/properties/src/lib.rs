//! Properties Domain
//!
//! This module provides a read-only domain implementation for searching and
//! retrieving real-estate properties stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, filter, paged results, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_properties::{
//!     handlers,
//!     mongodb::{MongoOwnerRepository, MongoPropertyRepository},
//!     service::PropertyService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("realestate");
//!
//! // Create repositories and a service
//! let properties = MongoPropertyRepository::new(&db);
//! let owners = MongoOwnerRepository::new(&db);
//! let service = PropertyService::new(properties, owners);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use dto::{OwnerDto, PropertyDto, PropertyImageDto, PropertyListDto, PropertyTraceDto};
pub use error::{PropertyError, PropertyResult};
pub use handlers::ApiDoc;
pub use models::{
    Owner, PagedResult, Property, PropertyDetail, PropertyFilter, PropertyImage, PropertyTrace,
};
pub use mongodb::{MongoOwnerRepository, MongoPropertyRepository};
pub use repository::{OwnerRepository, PropertyRepository};
pub use service::PropertyService;
