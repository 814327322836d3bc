use crate::types::{NewProduct, Product};
use dioxus::prelude::*;

/// Insert one product row into the `products` collection.
///
/// Client-side validation already ran, but the row is checked again here:
/// the endpoint is callable by anything that can reach the server.
#[dioxus::prelude::post("/api/products/create")]
pub async fn create_product(draft: NewProduct) -> Result<Product, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = draft;
        Err(ServerFnError::new("create_product is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use time::OffsetDateTime;
        use uuid::Uuid;

        let name = draft.name.trim().to_string();
        let description = draft.description.trim().to_string();
        let thumbnail_image = draft.thumbnail_image.trim().to_string();

        if name.is_empty() {
            return Err(ServerFnError::new("product name is required"));
        }
        if description.is_empty() {
            return Err(ServerFnError::new("product description is required"));
        }
        if thumbnail_image.is_empty() {
            return Err(ServerFnError::new("thumbnail image key is required"));
        }
        if !draft.price.is_finite() || draft.price <= 0.0 {
            return Err(ServerFnError::new("price must be a positive number"));
        }
        if let Some(sale) = draft.sale_price {
            if !sale.is_finite() || sale <= 0.0 {
                return Err(ServerFnError::new("sale price must be a positive number"));
            }
        }

        let id = Uuid::new_v4();
        let created_at = OffsetDateTime::now_utc();
        let images_json = serde_json::to_string(&draft.product_images)
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        tracing::debug!(
            "products.create: id={} name={:?} images={}",
            id,
            name,
            draft.product_images.len()
        );

        let state = crate::state::AppState::global();
        let pool = state.db.pool().await;

        sqlx::query(
            r#"
            insert into products
                (id, name, description, thumbnail_image, product_images, price, sale_price, created_at)
            values ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(crate::db::uuid_to_db(id))
        .bind(&name)
        .bind(&description)
        .bind(&thumbnail_image)
        .bind(&images_json)
        .bind(draft.price)
        .bind(draft.sale_price)
        .bind(crate::db::datetime_to_db(created_at)?)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

        Ok(Product {
            id,
            name,
            description,
            thumbnail_image,
            product_images: draft.product_images,
            price: draft.price,
            sale_price: draft.sale_price,
            created_at,
        })
    }
}

/// Newest products first, for the admin list page.
#[dioxus::prelude::get("/api/products/list")]
pub async fn list_products(limit: i64) -> Result<Vec<Product>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = limit;
        Err(ServerFnError::new("list_products is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use sqlx::Row;

        let limit = limit.clamp(1, 100);
        let state = crate::state::AppState::global();
        let pool = state.db.pool().await;

        let rows = sqlx::query(
            r#"
            select id, name, description, thumbnail_image, product_images,
                   price, sale_price, created_at
            from products
            order by created_at desc
            limit $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            let images: Vec<String> =
                serde_json::from_str(&row.get::<String, _>("product_images"))
                    .map_err(|e| ServerFnError::new(e.to_string()))?;
            products.push(Product {
                id: crate::db::uuid_from_db(&row.get::<String, _>("id"))?,
                name: row.get("name"),
                description: row.get("description"),
                thumbnail_image: row.get("thumbnail_image"),
                product_images: images,
                price: row.get("price"),
                sale_price: row.get("sale_price"),
                created_at: crate::db::datetime_from_db(&row.get::<String, _>("created_at"))?,
            });
        }

        Ok(products)
    }
}
