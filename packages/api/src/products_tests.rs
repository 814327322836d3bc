#![cfg(all(test, feature = "server"))]

use crate::test_utils::TestContext;
use crate::types::NewProduct;

fn ao_thun(thumbnail_image: &str) -> NewProduct {
    NewProduct {
        name: "Áo thun".to_string(),
        description: "Cotton".to_string(),
        thumbnail_image: thumbnail_image.to_string(),
        product_images: vec![],
        price: 100_000.0,
        sale_price: None,
    }
}

#[tokio::test]
async fn create_then_list_roundtrip() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let created = crate::create_product(ao_thun("products/key_a.jpg"))
        .await
        .expect("insert should succeed");
    assert_eq!(created.name, "Áo thun");
    assert_eq!(created.thumbnail_image, "products/key_a.jpg");

    let listed = crate::list_products(10).await.expect("list should succeed");
    assert_eq!(listed, vec![created]);

    let count: i64 = sqlx::query_scalar("select count(*) from products")
        .fetch_one(&ctx.pool)
        .await
        .expect("count should succeed");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let first = crate::create_product(ao_thun("products/key_a.jpg"))
        .await
        .expect("insert should succeed");
    let mut second_draft = ao_thun("products/key_b.jpg");
    second_draft.name = "Áo khoác".to_string();
    let second = crate::create_product(second_draft)
        .await
        .expect("insert should succeed");

    let listed = crate::list_products(10).await.expect("list should succeed");
    assert_eq!(listed, vec![second, first]);
}

#[tokio::test]
async fn create_rejects_incomplete_rows() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let mut blank_name = ao_thun("products/key_a.jpg");
    blank_name.name = "   ".to_string();
    assert!(crate::create_product(blank_name).await.is_err());

    assert!(crate::create_product(ao_thun("")).await.is_err());

    let mut free_product = ao_thun("products/key_a.jpg");
    free_product.price = 0.0;
    assert!(crate::create_product(free_product).await.is_err());

    let mut bogus_sale = ao_thun("products/key_a.jpg");
    bogus_sale.sale_price = Some(-1.0);
    assert!(crate::create_product(bogus_sale).await.is_err());

    // Nothing was inserted along the way
    let listed = crate::list_products(10).await.expect("list should succeed");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn upload_then_delete_roundtrip() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let key = crate::upload_product_image(
        "ao-thun.JPG".to_string(),
        "image/jpeg".to_string(),
        vec![0xFF, 0xD8, 0xFF],
    )
    .await
    .expect("upload should succeed");

    assert!(key.starts_with("products/"));
    assert!(key.ends_with(".jpg"));
    assert!(ctx.uploads_path.join(&key).exists());

    crate::delete_product_images(vec![key.clone()])
        .await
        .expect("delete should succeed");
    assert!(!ctx.uploads_path.join(&key).exists());
}

#[tokio::test]
async fn upload_rejects_bad_payloads() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    let empty = crate::upload_product_image(
        "ao-thun.jpg".to_string(),
        "image/jpeg".to_string(),
        vec![],
    )
    .await;
    assert!(empty.is_err());

    let not_an_image = crate::upload_product_image(
        "payload.bin".to_string(),
        "application/octet-stream".to_string(),
        vec![1, 2, 3],
    )
    .await;
    assert!(not_an_image.is_err());
}

#[tokio::test]
async fn delete_is_best_effort() {
    let ctx = TestContext::new().await;
    ctx.set_global();

    // Unknown keys and keys outside the products/ namespace are both fine.
    crate::delete_product_images(vec![
        "products/never-uploaded.png".to_string(),
        "avatars/someone-else.png".to_string(),
    ])
    .await
    .expect("best-effort delete never fails");
}
