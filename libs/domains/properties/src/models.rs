use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Property entity - one document in the `properties` collection.
///
/// Fields outside the list projection carry `#[serde(default)]` so a
/// projected partial document deserializes into the same type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Property {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Property name
    pub name: String,
    /// Physical address
    pub address: String,
    /// Sale price, non-negative
    pub price: f64,
    /// Internal code used for property identification
    #[serde(default)]
    pub code_internal: String,
    /// Year the property was built
    #[serde(default)]
    pub year: i32,
    /// Identity of the owning [`Owner`] document
    #[serde(default)]
    pub owner_id: String,
    /// Property images
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    /// Sale history
    #[serde(default)]
    pub traces: Vec<PropertyTrace>,
}

/// Owner entity - one document in the `owners` collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Owner {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Owner name
    pub name: String,
    /// Owner address
    pub address: String,
    /// Reference to the owner's photo
    #[serde(default)]
    pub photo: Option<String>,
    /// Birth date
    pub birthday: DateTime<Utc>,
}

/// Property image, embedded in its [`Property`] document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyImage {
    /// File name or URL of the image
    pub file: String,
    /// Whether the image is enabled/active
    pub enabled: bool,
    /// Back-reference to the owning property
    #[serde(default)]
    pub property_id: String,
}

/// Sale-history entry, embedded in its [`Property`] document.
///
/// Traces carry no stored identity; the externally exposed identifier is
/// derived at mapping time (see [`crate::dto`]).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyTrace {
    /// Date of the sale
    pub date_sale: DateTime<Utc>,
    /// Description of the sale
    pub name: String,
    /// Sale value
    pub value: f64,
    /// Tax amount
    pub tax: f64,
}

/// A property together with its resolved owner.
///
/// `owner` is `None` when the referenced owner document is missing; the
/// association is required, so a missing owner is a data-integrity problem
/// that the mapping layer tolerates rather than a valid state.
#[derive(Debug, Clone)]
pub struct PropertyDetail {
    pub property: Property,
    pub owner: Option<Owner>,
}

/// Query filters for listing properties.
///
/// All filters are optional; omitted filters impose no constraint. Present
/// filters are combined with logical AND.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFilter {
    /// Filter by property name (case-insensitive partial match)
    pub name: Option<String>,
    /// Filter by property address (case-insensitive partial match)
    pub address: Option<String>,
    /// Minimum price (inclusive)
    pub min_price: Option<f64>,
    /// Maximum price (inclusive)
    pub max_price: Option<f64>,
    /// Page number for pagination (1-based)
    #[validate(range(min = 1))]
    pub page_number: i64,
    /// Number of items per page
    #[validate(range(min = 1))]
    pub page_size: i64,
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            min_price: None,
            max_price: None,
            page_number: 1,
            page_size: 10,
        }
    }
}

/// One page of results together with pagination metadata.
///
/// `total_count` covers every matching document, not just the returned page.
/// `page_size` is validated to be at least 1 before a page is built.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T> {
    /// Items in the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total_count: u64,
    /// Current page number (1-based)
    pub page_number: i64,
    /// Number of items per page
    pub page_size: i64,
}

impl<T> PagedResult<T> {
    /// Total number of pages, as ceiling division of the total count by the
    /// page size. Computed, never stored.
    pub fn total_pages(&self) -> u64 {
        let page_size = self.page_size.max(1) as u64;
        self.total_count.div_ceil(page_size)
    }
}
