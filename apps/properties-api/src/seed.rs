//! Development seeding
//!
//! Fills an empty database with synthetic owners and properties so a fresh
//! local environment has something to browse. Only invoked when the
//! environment is Development; the seed is a local convenience, not part of
//! the API contract.

use chrono::TimeZone;
use domain_properties::{Owner, Property, PropertyImage, PropertyTrace};
use mongodb::Database;
use rand::RngExt;
use tracing::info;

const SEED_PROPERTY_COUNT: usize = 25;
const SEED_OWNER_COUNT: usize = 3;

const STREETS: &[&str] = &[
    "Maple Avenue",
    "Ocean Drive",
    "Hill Road",
    "Cedar Lane",
    "Sunset Boulevard",
];
const KINDS: &[&str] = &["House", "Apartment", "Villa", "Cottage", "Loft"];

/// Seed the database with synthetic data when the properties collection
/// is empty.
pub async fn seed_if_empty(db: &Database) -> eyre::Result<()> {
    let properties = db.collection::<Property>("properties");

    let existing = properties.estimated_document_count().await?;
    if existing > 0 {
        info!("Skipping seed: {} properties already present", existing);
        return Ok(());
    }

    let owners = db.collection::<Owner>("owners");
    owners.insert_many(sample_owners()).await?;
    properties.insert_many(sample_properties()).await?;

    info!(
        "Seeded {} properties and {} owners",
        SEED_PROPERTY_COUNT, SEED_OWNER_COUNT
    );
    Ok(())
}

fn sample_owners() -> Vec<Owner> {
    (1..=SEED_OWNER_COUNT)
        .map(|i| Owner {
            // Numeric string ids so the integer DTO conversion resolves them
            id: i.to_string(),
            name: format!("Owner {}", i),
            address: format!("{} Owner Road", i),
            photo: Some(format!("photo{}.jpg", i)),
            birthday: chrono::Utc
                .with_ymd_and_hms(1980, i as u32, i as u32, 0, 0, 0)
                .unwrap(),
        })
        .collect()
}

fn sample_properties() -> Vec<Property> {
    let mut rng = rand::rng();

    (1..=SEED_PROPERTY_COUNT)
        .map(|i| {
            let id = format!("prop{}", i);
            let price = rng.random_range(150_000..=900_000) as f64;

            Property {
                id: id.clone(),
                name: format!("{} {}", KINDS[i % KINDS.len()], i),
                address: format!("{} {}", i, STREETS[i % STREETS.len()]),
                price,
                code_internal: format!("INT-{:03}", i),
                year: rng.random_range(1990..=2024),
                owner_id: (i % SEED_OWNER_COUNT + 1).to_string(),
                images: vec![PropertyImage {
                    file: format!("image{}.jpg", i),
                    enabled: true,
                    property_id: id,
                }],
                traces: vec![PropertyTrace {
                    date_sale: chrono::Utc
                        .with_ymd_and_hms(2020, (i % 12 + 1) as u32, (i % 28 + 1) as u32, 0, 0, 0)
                        .unwrap(),
                    name: "Initial sale".to_string(),
                    value: price * 0.9,
                    tax: price * 0.05,
                }],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let owners = sample_owners();
        let properties = sample_properties();

        assert_eq!(owners.len(), SEED_OWNER_COUNT);
        assert_eq!(properties.len(), SEED_PROPERTY_COUNT);

        for owner in &owners {
            assert!(owner.id.parse::<i32>().is_ok());
        }

        for property in &properties {
            assert!(property.price >= 150_000.0 && property.price <= 900_000.0);
            assert!(owners.iter().any(|o| o.id == property.owner_id));
            assert_eq!(property.images.len(), 1);
            assert_eq!(property.traces.len(), 1);
        }
    }
}
