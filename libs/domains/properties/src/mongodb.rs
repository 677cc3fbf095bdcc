//! MongoDB implementations of PropertyRepository and OwnerRepository

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::PropertyResult;
use crate::models::{Owner, PagedResult, Property, PropertyFilter};
use crate::repository::{OwnerRepository, PropertyRepository};

/// MongoDB implementation of the PropertyRepository
pub struct MongoPropertyRepository {
    collection: Collection<Property>,
}

impl MongoPropertyRepository {
    /// Create a new MongoPropertyRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Property>("properties");
        Self { collection }
    }

    /// Create a new MongoPropertyRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Property>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for the list filters
    pub async fn init_indexes(&self) -> PropertyResult<()> {
        let indexes = vec![
            // Name substring filter
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_name".to_string())
                        .build(),
                )
                .build(),
            // Address substring filter
            IndexModel::builder()
                .keys(doc! { "address": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_address".to_string())
                        .build(),
                )
                .build(),
            // Price range queries
            IndexModel::builder()
                .keys(doc! { "price": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_price".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Property indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Property> {
        &self.collection
    }

    /// Build a MongoDB predicate document from a PropertyFilter.
    ///
    /// Present filters become keys of a single document (implicit AND);
    /// an empty filter yields an empty document, which matches every
    /// stored property.
    fn build_filter(filter: &PropertyFilter) -> mongodb::bson::Document {
        let mut doc = doc! {};

        if let Some(ref name) = filter.name {
            if !name.trim().is_empty() {
                doc.insert("name", doc! { "$regex": name.as_str(), "$options": "i" });
            }
        }

        if let Some(ref address) = filter.address {
            if !address.trim().is_empty() {
                doc.insert(
                    "address",
                    doc! { "$regex": address.as_str(), "$options": "i" },
                );
            }
        }

        // Price range, both bounds inclusive
        if filter.min_price.is_some() || filter.max_price.is_some() {
            let mut price_filter = doc! {};
            if let Some(min) = filter.min_price {
                price_filter.insert("$gte", min);
            }
            if let Some(max) = filter.max_price {
                price_filter.insert("$lte", max);
            }
            doc.insert("price", price_filter);
        }

        doc
    }

    /// Projection for the list view: the summary fields plus the first
    /// image. Skipped fields deserialize to their defaults.
    fn list_projection() -> mongodb::bson::Document {
        doc! {
            "_id": 1,
            "name": 1,
            "address": 1,
            "price": 1,
            "owner_id": 1,
            "images": { "$slice": 1 },
        }
    }
}

#[async_trait]
impl PropertyRepository for MongoPropertyRepository {
    #[instrument(skip(self))]
    async fn list(&self, filter: PropertyFilter) -> PropertyResult<PagedResult<Property>> {
        use futures_util::TryStreamExt;

        let predicate = Self::build_filter(&filter);

        // The count covers the whole collection, independent of paging
        let total_count = self.collection.count_documents(predicate.clone()).await?;

        let skip = ((filter.page_number - 1) * filter.page_size) as u64;

        // No sort: pages follow the collection's natural order
        let options = FindOptions::builder()
            .skip(skip)
            .limit(filter.page_size)
            .projection(Self::list_projection())
            .build();

        let cursor = self
            .collection
            .find(predicate)
            .with_options(options)
            .await?;
        let items: Vec<Property> = cursor.try_collect().await?;

        Ok(PagedResult {
            items,
            total_count,
            page_number: filter.page_number,
            page_size: filter.page_size,
        })
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> PropertyResult<Option<Property>> {
        let property = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(property)
    }
}

/// MongoDB implementation of the OwnerRepository
pub struct MongoOwnerRepository {
    collection: Collection<Owner>,
}

impl MongoOwnerRepository {
    /// Create a new MongoOwnerRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Owner>("owners");
        Self { collection }
    }

    /// Create a new MongoOwnerRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Owner>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl OwnerRepository for MongoOwnerRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> PropertyResult<Option<Owner>> {
        let owner = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let filter = PropertyFilter::default();
        let doc = MongoPropertyRepository::build_filter(&filter);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_with_name() {
        let filter = PropertyFilter {
            name: Some("Test".to_string()),
            ..Default::default()
        };
        let doc = MongoPropertyRepository::build_filter(&filter);
        let name = doc.get_document("name").unwrap();
        assert_eq!(name.get_str("$regex").unwrap(), "Test");
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_build_filter_ignores_blank_name() {
        let filter = PropertyFilter {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        let doc = MongoPropertyRepository::build_filter(&filter);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_build_filter_with_address() {
        let filter = PropertyFilter {
            address: Some("Main Street".to_string()),
            ..Default::default()
        };
        let doc = MongoPropertyRepository::build_filter(&filter);
        assert!(doc.contains_key("address"));
        assert!(!doc.contains_key("name"));
    }

    #[test]
    fn test_build_filter_with_price_range() {
        let filter = PropertyFilter {
            min_price: Some(100_000.0),
            max_price: Some(500_000.0),
            ..Default::default()
        };
        let doc = MongoPropertyRepository::build_filter(&filter);
        let price = doc.get_document("price").unwrap();
        assert_eq!(price.get_f64("$gte").unwrap(), 100_000.0);
        assert_eq!(price.get_f64("$lte").unwrap(), 500_000.0);
    }

    #[test]
    fn test_build_filter_min_price_only() {
        let filter = PropertyFilter {
            min_price: Some(100_000.0),
            ..Default::default()
        };
        let doc = MongoPropertyRepository::build_filter(&filter);
        let price = doc.get_document("price").unwrap();
        assert!(price.contains_key("$gte"));
        assert!(!price.contains_key("$lte"));
    }

    #[test]
    fn test_build_filter_combines_clauses_with_and() {
        let filter = PropertyFilter {
            name: Some("Villa".to_string()),
            address: Some("Beach".to_string()),
            min_price: Some(100_000.0),
            ..Default::default()
        };
        let doc = MongoPropertyRepository::build_filter(&filter);
        // One document, one key per clause: MongoDB ANDs top-level keys
        assert_eq!(doc.len(), 3);
        assert!(doc.contains_key("name"));
        assert!(doc.contains_key("address"));
        assert!(doc.contains_key("price"));
    }

    #[test]
    fn test_list_projection_fields() {
        let projection = MongoPropertyRepository::list_projection();
        for field in ["_id", "name", "address", "price", "owner_id", "images"] {
            assert!(projection.contains_key(field), "missing {field}");
        }
        assert!(!projection.contains_key("traces"));
        assert!(!projection.contains_key("code_internal"));
    }

    // Integration tests against a live MongoDB. Run with:
    //   MONGODB_URL=mongodb://localhost:27017 cargo test -- --ignored
    mod integration {
        use super::*;
        use crate::repository::PropertyRepository;

        async fn test_db() -> Database {
            let url = std::env::var("MONGODB_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
            let client = mongodb::Client::with_uri_str(&url).await.unwrap();
            client.database("domain_properties_test")
        }

        fn sample_property(i: usize) -> Property {
            Property {
                id: format!("prop{}", i),
                name: format!("Property {}", i),
                address: format!("{} Test Avenue", i),
                price: 200_000.0 + (i as f64) * 10_000.0,
                code_internal: format!("INT-{:03}", i),
                year: 2020 + (i as i32) % 5,
                owner_id: format!("{}", i % 3 + 1),
                images: vec![crate::models::PropertyImage {
                    file: format!("image{}.jpg", i),
                    enabled: true,
                    property_id: format!("prop{}", i),
                }],
                traces: vec![],
            }
        }

        async fn seeded_repository(collection_name: &str) -> MongoPropertyRepository {
            let db = test_db().await;
            db.collection::<Property>(collection_name)
                .drop()
                .await
                .ok();
            let repository = MongoPropertyRepository::with_collection(&db, collection_name);
            let properties: Vec<Property> = (1..=25).map(sample_property).collect();
            repository.collection().insert_many(properties).await.unwrap();
            repository
        }

        #[tokio::test]
        #[ignore] // Requires actual MongoDB
        async fn test_second_page_of_twenty_five() {
            let repository = seeded_repository("paging_test").await;

            let filter = PropertyFilter {
                page_number: 2,
                page_size: 10,
                ..Default::default()
            };
            let page = repository.list(filter).await.unwrap();

            assert_eq!(page.items.len(), 10);
            assert_eq!(page.total_count, 25);
            assert_eq!(page.total_pages(), 3);
        }

        #[tokio::test]
        #[ignore] // Requires actual MongoDB
        async fn test_page_past_the_end_is_empty_with_full_count() {
            let repository = seeded_repository("past_end_test").await;

            let filter = PropertyFilter {
                page_number: 9,
                page_size: 10,
                ..Default::default()
            };
            let page = repository.list(filter).await.unwrap();

            assert!(page.items.is_empty());
            assert_eq!(page.total_count, 25);
        }

        #[tokio::test]
        #[ignore] // Requires actual MongoDB
        async fn test_price_bounds_are_inclusive() {
            let repository = seeded_repository("price_test").await;

            let filter = PropertyFilter {
                min_price: Some(250_000.0),
                max_price: Some(300_000.0),
                page_size: 25,
                ..Default::default()
            };
            let page = repository.list(filter).await.unwrap();

            assert!(!page.items.is_empty());
            for item in &page.items {
                assert!(item.price >= 250_000.0 && item.price <= 300_000.0);
            }
        }

        #[tokio::test]
        #[ignore] // Requires actual MongoDB
        async fn test_name_filter_matches_case_insensitively() {
            let repository = seeded_repository("name_test").await;

            let filter = PropertyFilter {
                name: Some("property 1".to_string()),
                page_size: 25,
                ..Default::default()
            };
            let page = repository.list(filter).await.unwrap();

            // Property 1 and Property 10..19
            assert_eq!(page.total_count, 11);
            for item in &page.items {
                assert!(item.name.to_lowercase().contains("property 1"));
            }
        }

        #[tokio::test]
        #[ignore] // Requires actual MongoDB
        async fn test_get_by_id_roundtrip_and_absence() {
            let repository = seeded_repository("get_test").await;

            let found = repository.get_by_id("prop7").await.unwrap();
            let property = found.expect("prop7 was seeded");
            assert_eq!(property.id, "prop7");
            assert_eq!(property.code_internal, "INT-007");

            let missing = repository.get_by_id("nope").await.unwrap();
            assert!(missing.is_none());
        }
    }
}
