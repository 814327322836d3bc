use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Row payload for an insert into the `products` collection. Image fields
/// hold storage keys, never raw file bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub thumbnail_image: String,
    pub product_images: Vec<String>,
    pub price: f64,
    pub sale_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub thumbnail_image: String,
    pub product_images: Vec<String>,
    pub price: f64,
    pub sale_price: Option<f64>,
    pub created_at: OffsetDateTime,
}

impl Product {
    /// Price shown on the storefront: the sale price when it actually
    /// undercuts the list price.
    pub fn effective_price(&self) -> f64 {
        match self.sale_price {
            Some(sale) if sale > 0.0 && sale < self.price => sale,
            _ => self.price,
        }
    }
}

/// Runtime configuration that is safe to hand to any client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicConfig {
    pub media_base_url: Option<String>,
}
