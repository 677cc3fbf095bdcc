//! Transport DTOs and entity-to-DTO mapping
//!
//! External JSON is camelCase; internal entities stay snake_case. All
//! mapping is one-way (the API is read-only).

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Owner, PagedResult, Property, PropertyDetail, PropertyImage, PropertyTrace};

/// Data transfer object for property information
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDto {
    /// Unique identifier of the property
    pub id: String,
    /// Name of the property
    pub name: String,
    /// Physical address of the property
    pub address: String,
    /// Price of the property
    pub price: f64,
    /// Internal code used for property identification
    pub code_internal: String,
    /// Year the property was built
    pub year: i32,
    /// Identity of the property owner, in its canonical string form
    pub id_owner: String,
    /// Information about the property owner, when resolved
    pub owner: Option<OwnerDto>,
    /// Collection of property images
    pub images: Vec<PropertyImageDto>,
    /// Collection of sale-history traces
    pub traces: Vec<PropertyTraceDto>,
}

/// Data transfer object for property owner information
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    /// Integer form of the owner identity, via [`owner_id_to_int`]
    pub id: i32,
    /// Name of the property owner
    pub name: String,
    /// Address of the property owner
    pub address: String,
    /// URL or reference to the owner's photo
    pub photo: Option<String>,
    /// Birth date of the property owner
    pub birthday: DateTime<Utc>,
}

/// Data transfer object for property image information
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImageDto {
    /// File name or URL of the image
    pub file: String,
    /// Indicates whether the image is enabled/active
    pub enabled: bool,
}

/// Data transfer object for a sale-history trace
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTraceDto {
    /// Stable derived identifier, see [`trace_id`]
    pub id: String,
    /// Date of the sale
    pub date_created: DateTime<Utc>,
    /// Description of the sale
    pub name: String,
    /// Sale value
    pub value: f64,
    /// Tax amount
    pub tax: f64,
}

/// Data transfer object for a paginated list of properties
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListDto {
    /// Properties in the current page
    pub items: Vec<PropertyDto>,
    /// Total number of properties across all pages
    pub total_count: u64,
    /// Current page number
    pub page_number: i64,
    /// Number of items per page
    pub page_size: i64,
    /// Total number of pages
    pub total_pages: u64,
}

/// Best-effort conversion of an owner identity to its integer form.
///
/// Owner ids are stored as strings; one DTO surface requires an integer.
/// Non-numeric ids fall back to 0 - the conversion is lossy, and 0 means
/// "no numeric id", not a real owner.
pub fn owner_id_to_int(id: &str) -> i32 {
    id.parse().unwrap_or(0)
}

/// Stable identifier for a trace, derived from the owning property id and
/// the trace fields. The same trace yields the same id on every request.
fn trace_id(property_id: &str, trace: &PropertyTrace) -> String {
    let seed = format!(
        "{}|{}|{}|{}|{}",
        property_id,
        trace.date_sale.timestamp_millis(),
        trace.name,
        trace.value,
        trace.tax
    );
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()).to_string()
}

impl OwnerDto {
    pub fn from_owner(owner: Owner) -> Self {
        Self {
            id: owner_id_to_int(&owner.id),
            name: owner.name,
            address: owner.address,
            photo: owner.photo,
            birthday: owner.birthday,
        }
    }
}

impl PropertyImageDto {
    fn from_image(image: PropertyImage) -> Self {
        Self {
            file: image.file,
            enabled: image.enabled,
        }
    }
}

impl PropertyTraceDto {
    fn from_trace(property_id: &str, trace: PropertyTrace) -> Self {
        Self {
            id: trace_id(property_id, &trace),
            date_created: trace.date_sale,
            name: trace.name,
            value: trace.value,
            tax: trace.tax,
        }
    }
}

impl PropertyDto {
    /// Map a fully populated property and its resolved owner.
    pub fn from_detail(detail: PropertyDetail) -> Self {
        let PropertyDetail { property, owner } = detail;
        let mut dto = Self::from_property(property);
        dto.owner = owner.map(OwnerDto::from_owner);
        dto
    }

    /// Map a property without owner resolution. List items use this with
    /// the reduced projection, so traces are empty and at most one image
    /// is present.
    pub fn from_property(property: Property) -> Self {
        let Property {
            id,
            name,
            address,
            price,
            code_internal,
            year,
            owner_id,
            images,
            traces,
        } = property;

        let traces = traces
            .into_iter()
            .map(|t| PropertyTraceDto::from_trace(&id, t))
            .collect();

        Self {
            id,
            name,
            address,
            price,
            code_internal,
            year,
            id_owner: owner_id,
            owner: None,
            images: images.into_iter().map(PropertyImageDto::from_image).collect(),
            traces,
        }
    }
}

impl PropertyListDto {
    /// Map a page of properties; count and page metadata are copied
    /// verbatim, total pages comes from [`PagedResult::total_pages`].
    pub fn from_page(page: PagedResult<Property>) -> Self {
        let total_pages = page.total_pages();
        Self {
            items: page.items.into_iter().map(PropertyDto::from_property).collect(),
            total_count: page.total_count,
            page_number: page.page_number,
            page_size: page.page_size,
            total_pages,
        }
    }
}
