//! HTTP handlers for the Properties API

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    ValidatedQuery,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::dto::{
    OwnerDto, PropertyDto, PropertyImageDto, PropertyListDto, PropertyTraceDto,
};
use crate::error::{PropertyError, PropertyResult};
use crate::models::PropertyFilter;
use crate::repository::{OwnerRepository, PropertyRepository};
use crate::service::PropertyService;

/// OpenAPI documentation for the Properties API
#[derive(OpenApi)]
#[openapi(
    paths(list_properties, get_property),
    components(
        schemas(
            PropertyDto,
            OwnerDto,
            PropertyImageDto,
            PropertyTraceDto,
            PropertyListDto,
            PropertyFilter
        ),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Properties", description = "Read-only property listing endpoints")
    )
)]
pub struct ApiDoc;

/// Create the properties router with all HTTP endpoints
pub fn router<P, O>(service: PropertyService<P, O>) -> Router
where
    P: PropertyRepository + 'static,
    O: OwnerRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_properties))
        .route("/{id}", get(get_property))
        .with_state(shared_service)
}

/// Get a paginated list of properties
///
/// Returns a page of properties with optional filtering by name, address
/// and price range.
#[utoipa::path(
    get,
    path = "",
    tag = "Properties",
    params(PropertyFilter),
    responses(
        (status = 200, description = "Paginated list of properties", body = PropertyListDto),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_properties<P, O>(
    State(service): State<Arc<PropertyService<P, O>>>,
    ValidatedQuery(filter): ValidatedQuery<PropertyFilter>,
) -> PropertyResult<Json<PropertyListDto>>
where
    P: PropertyRepository,
    O: OwnerRepository,
{
    let page = service.list_properties(filter).await?;
    tracing::info!(
        returned = page.items.len(),
        total = page.total_count,
        "listed properties"
    );
    Ok(Json(PropertyListDto::from_page(page)))
}

/// Get property by ID
///
/// Returns detailed information about a specific property, including its
/// owner, images and sale history.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Properties",
    params(
        ("id" = String, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property found", body = PropertyDto),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_property<P, O>(
    State(service): State<Arc<PropertyService<P, O>>>,
    Path(id): Path<String>,
) -> PropertyResult<Json<PropertyDto>>
where
    P: PropertyRepository,
    O: OwnerRepository,
{
    let detail = service
        .get_property(&id)
        .await?
        .ok_or_else(|| PropertyError::NotFound(id))?;

    Ok(Json(PropertyDto::from_detail(detail)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Owner, PagedResult, Property};
    use crate::repository::{MockOwnerRepository, MockPropertyRepository};
    use axum::{body::Body, http::Request, http::StatusCode};
    use chrono::TimeZone;
    use tower::ServiceExt;

    fn sample_property(i: usize) -> Property {
        Property {
            id: format!("prop{}", i),
            name: format!("Property {}", i),
            address: format!("{} Test Avenue", i),
            price: 200_000.0 + (i as f64) * 10_000.0,
            code_internal: format!("INT-{:03}", i),
            year: 2022,
            owner_id: "1".to_string(),
            images: vec![],
            traces: vec![],
        }
    }

    fn sample_owner() -> Owner {
        Owner {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            address: "456 Owner Street".to_string(),
            photo: Some("photo.jpg".to_string()),
            birthday: chrono::Utc.with_ymd_and_hms(1980, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn app(properties: MockPropertyRepository, owners: MockOwnerRepository) -> Router {
        router(PropertyService::new(properties, owners))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_returns_page_with_metadata() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_list().returning(|filter| {
            Ok(PagedResult {
                items: (11..=20).map(sample_property).collect(),
                total_count: 25,
                page_number: filter.page_number,
                page_size: filter.page_size,
            })
        });
        let owners = MockOwnerRepository::new();

        let response = app(properties, owners)
            .oneshot(
                Request::get("/?pageNumber=2&pageSize=10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
        assert_eq!(body["totalCount"], 25);
        assert_eq!(body["pageNumber"], 2);
        assert_eq!(body["pageSize"], 10);
        assert_eq!(body["totalPages"], 3);
    }

    #[tokio::test]
    async fn test_list_passes_filters_through() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_list()
            .withf(|filter| {
                filter.name.as_deref() == Some("Test")
                    && filter.min_price == Some(200000.0)
                    && filter.max_price == Some(500000.0)
            })
            .returning(|filter| {
                Ok(PagedResult {
                    items: vec![],
                    total_count: 0,
                    page_number: filter.page_number,
                    page_size: filter.page_size,
                })
            });
        let owners = MockOwnerRepository::new();

        let response = app(properties, owners)
            .oneshot(
                Request::get("/?name=Test&minPrice=200000&maxPrice=500000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_rejects_zero_page_size_with_400() {
        // No expectations: the repository must not be reached
        let properties = MockPropertyRepository::new();
        let owners = MockOwnerRepository::new();

        let response = app(properties, owners)
            .oneshot(
                Request::get("/?pageSize=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_get_returns_full_detail() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_get_by_id()
            .withf(|id| id == "prop1")
            .returning(|_| {
                let mut property = sample_property(1);
                property.images = vec![crate::models::PropertyImage {
                    file: "image1.jpg".to_string(),
                    enabled: true,
                    property_id: "prop1".to_string(),
                }];
                Ok(Some(property))
            });
        let mut owners = MockOwnerRepository::new();
        owners
            .expect_get_by_id()
            .returning(|_| Ok(Some(sample_owner())));

        let response = app(properties, owners)
            .oneshot(Request::get("/prop1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], "prop1");
        assert_eq!(body["name"], "Property 1");
        assert_eq!(body["idOwner"], "1");
        assert_eq!(body["owner"]["id"], 1);
        assert_eq!(body["owner"]["name"], "John Doe");
        assert_eq!(body["images"][0]["file"], "image1.jpg");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_a_404_problem() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_get_by_id().returning(|_| Ok(None));
        let owners = MockOwnerRepository::new();

        let response = app(properties, owners)
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["detail"], "Property with ID nope was not found.");
        assert_eq!(
            body["type"],
            "https://datatracker.ietf.org/doc/html/rfc7231#section-6.5.4"
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_a_generic_500_problem() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_get_by_id()
            .returning(|_| Err(PropertyError::Database("no reachable servers".to_string())));
        let owners = MockOwnerRepository::new();

        let response = app(properties, owners)
            .oneshot(Request::get("/prop1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["status"], 500);
        assert_eq!(body["title"], "Server error");
        assert_eq!(body["detail"], "An unexpected error occurred");
    }
}
