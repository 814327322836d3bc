use dioxus::prelude::*;

/// Store one product image and return its storage key.
#[dioxus::prelude::post("/api/images/upload")]
pub async fn upload_product_image(
    file_name: String,
    content_type: String,
    data: Vec<u8>,
) -> Result<String, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = (file_name, content_type, data);
        Err(ServerFnError::new("upload_product_image is server-only"))
    }

    #[cfg(feature = "server")]
    {
        use uuid::Uuid;

        const MAX_BYTES: usize = 10 * 1024 * 1024; // 10MB per image
        if data.is_empty() {
            return Err(ServerFnError::new("empty image payload"));
        }
        if data.len() > MAX_BYTES {
            return Err(ServerFnError::new("image too large"));
        }
        if !content_type.starts_with("image/") {
            return Err(ServerFnError::new("unsupported content type"));
        }

        let key = format!("products/{}{}", Uuid::new_v4(), key_extension(&file_name));
        tracing::debug!(
            "images.upload: file={:?} bytes={} key={}",
            file_name,
            data.len(),
            key
        );

        let state = crate::state::AppState::global();
        state
            .storage
            .upload(&key, data, &content_type)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        Ok(key)
    }
}

/// Best-effort removal of previously uploaded product images.
///
/// Rollback path after a later submission step failed; storage errors are
/// logged and swallowed so rollback never masks the original failure.
#[dioxus::prelude::post("/api/images/delete")]
pub async fn delete_product_images(keys: Vec<String>) -> Result<(), ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        let _ = keys;
        Err(ServerFnError::new("delete_product_images is server-only"))
    }

    #[cfg(feature = "server")]
    {
        let state = crate::state::AppState::global();
        for key in keys {
            if !key.starts_with("products/") {
                tracing::warn!("images.delete: refusing key outside products/: {}", key);
                continue;
            }
            if let Err(e) = state.storage.delete(&key).await {
                tracing::warn!("images.delete: {} failed: {}", key, e);
            }
        }
        Ok(())
    }
}

/// Extension for the storage key, taken from the uploaded file name.
/// Unknown extensions are dropped rather than trusted.
#[cfg(feature = "server")]
fn key_extension(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => ".jpg",
        Some("png") => ".png",
        Some("gif") => ".gif",
        Some("webp") => ".webp",
        Some("avif") => ".avif",
        _ => "",
    }
}
