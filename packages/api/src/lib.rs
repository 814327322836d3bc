//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;

pub mod config;
pub mod types;

#[cfg(feature = "server")]
pub mod db;

#[cfg(feature = "server")]
pub mod storage;

#[cfg(feature = "server")]
pub mod state;

mod images;
mod products;

#[cfg(test)]
mod types_tests;

#[cfg(all(test, feature = "server"))]
mod products_tests;

#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

/// Runtime configuration safe to hand to any client.
#[get("/api/config")]
pub async fn public_config() -> Result<types::PublicConfig, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("public_config is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use crate::config::StorageConfig;

        tracing::debug!("public_config");
        let state = crate::state::AppState::global();
        let media_base_url = match &state.config.storage {
            StorageConfig::Filesystem { serve_url, .. } => Some(serve_url.clone()),
            StorageConfig::S3 {
                public_base_url, ..
            } => public_base_url.clone(),
        };
        Ok(types::PublicConfig { media_base_url })
    }
}

pub use images::{delete_product_images, upload_product_image};
pub use products::{create_product, list_products};
