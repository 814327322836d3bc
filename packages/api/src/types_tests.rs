#![cfg(test)]

use crate::types::{NewProduct, Product};
use time::macros::datetime;
use uuid::Uuid;

fn sample_product(price: f64, sale_price: Option<f64>) -> Product {
    Product {
        id: Uuid::nil(),
        name: "Áo thun".to_string(),
        description: "Cotton".to_string(),
        thumbnail_image: "products/key_a.jpg".to_string(),
        product_images: vec![],
        price,
        sale_price,
        created_at: datetime!(2026-08-06 00:00:00 UTC),
    }
}

#[test]
fn insert_payload_matches_products_row_shape() {
    let row = serde_json::to_value(NewProduct {
        name: "Áo thun".to_string(),
        description: "Cotton".to_string(),
        thumbnail_image: "products/key_a.jpg".to_string(),
        product_images: vec!["products/key_b.jpg".to_string()],
        price: 100_000.0,
        sale_price: None,
    })
    .unwrap();

    // serde_json maps iterate alphabetically
    let keys: Vec<&str> = row
        .as_object()
        .unwrap()
        .keys()
        .map(|k| k.as_str())
        .collect();
    assert_eq!(
        keys,
        [
            "description",
            "name",
            "price",
            "product_images",
            "sale_price",
            "thumbnail_image",
        ]
    );
}

#[test]
fn effective_price_prefers_a_real_discount() {
    assert_eq!(
        sample_product(100_000.0, Some(80_000.0)).effective_price(),
        80_000.0
    );
}

#[test]
fn effective_price_ignores_missing_or_bogus_sales() {
    assert_eq!(sample_product(100_000.0, None).effective_price(), 100_000.0);
    assert_eq!(
        sample_product(100_000.0, Some(120_000.0)).effective_price(),
        100_000.0
    );
    assert_eq!(
        sample_product(100_000.0, Some(0.0)).effective_price(),
        100_000.0
    );
}
