//! Draft, validation, and submission workflow for the product upload
//! form, kept free of UI types so the whole flow can be exercised in
//! plain tests.

use std::collections::BTreeMap;

use api::types::{NewProduct, Product};
use async_trait::async_trait;
use futures::future::join_all;

use crate::i18n::{t, Lang};

/// A file the user picked, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Content type guessed from the file name; the file picker doesn't
    /// hand us one directly.
    pub fn from_name_and_bytes(file_name: String, bytes: Vec<u8>) -> Self {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        let content_type = match ext.as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("avif") => "image/avif",
            _ => "application/octet-stream",
        };
        Self {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        }
    }
}

/// Everything the form holds before submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub thumbnail: Option<ImageFile>,
    pub gallery: Vec<ImageFile>,
    pub price: Option<f64>,
    pub sale_price: Option<f64>,
}

/// The closed set of fields validation can complain about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProductField {
    Name,
    Description,
    Thumbnail,
    Price,
}

impl ProductField {
    pub fn message_key(self) -> &'static str {
        match self {
            ProductField::Name => "validate.name",
            ProductField::Description => "validate.description",
            ProductField::Thumbnail => "validate.thumbnail",
            ProductField::Price => "validate.price",
        }
    }
}

/// Field → human message, ordered so the banner renders stably.
pub type ValidationErrors = BTreeMap<ProductField, String>;

/// Pure check over the current draft. Recomputed on every submit attempt;
/// an empty map is the only green light.
pub fn validate(draft: &ProductDraft, lang: Lang) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(ProductField::Name, t(lang, ProductField::Name.message_key()));
    }
    if draft.description.trim().is_empty() {
        errors.insert(
            ProductField::Description,
            t(lang, ProductField::Description.message_key()),
        );
    }
    if draft.thumbnail.is_none() {
        errors.insert(
            ProductField::Thumbnail,
            t(lang, ProductField::Thumbnail.message_key()),
        );
    }
    match draft.price {
        Some(price) if price > 0.0 => {}
        _ => {
            errors.insert(
                ProductField::Price,
                t(lang, ProductField::Price.message_key()),
            );
        }
    }

    errors
}

/// Price inputs arrive as text; anything unparseable becomes `None` and
/// fails the required-price rule instead of panicking.
pub fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Submission state; the submit control is disabled while `is_busy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        self == SubmitPhase::Uploading
    }
}

/// What a finished submission attempt amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Product),
    /// An image upload came back without a key; nothing was inserted.
    UploadFailed,
    /// The insert failed and uploaded images were rolled back. The detail
    /// is for diagnostics only, never for display.
    InsertFailed(String),
}

impl SubmitOutcome {
    pub fn phase(&self) -> SubmitPhase {
        match self {
            SubmitOutcome::Created(_) => SubmitPhase::Succeeded,
            SubmitOutcome::UploadFailed | SubmitOutcome::InsertFailed(_) => SubmitPhase::Failed,
        }
    }
}

/// Backend seam for the workflow. A `None` key is the upload-failure
/// sentinel; `remove_images` is best-effort rollback.
#[async_trait(?Send)]
pub trait ProductServices {
    async fn upload_image(&self, image: &ImageFile) -> Option<String>;
    async fn insert_product(&self, row: NewProduct) -> Result<Product, String>;
    async fn remove_images(&self, keys: Vec<String>);
}

/// Result of one submit attempt, validation included.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    Rejected(ValidationErrors),
    Finished(SubmitOutcome),
}

/// Validate, then run the upload/insert workflow. Invalid drafts never
/// touch the network.
pub async fn submit_draft<S: ProductServices>(
    draft: &ProductDraft,
    lang: Lang,
    services: &S,
) -> SubmitResult {
    let errors = validate(draft, lang);
    if !errors.is_empty() {
        return SubmitResult::Rejected(errors);
    }
    SubmitResult::Finished(run_submission(draft, services).await)
}

/// The record is inserted only after every upload has returned a key; any
/// failure rolls back whatever was already uploaded.
pub async fn run_submission<S: ProductServices>(
    draft: &ProductDraft,
    services: &S,
) -> SubmitOutcome {
    let Some(thumbnail) = &draft.thumbnail else {
        return SubmitOutcome::UploadFailed;
    };
    let Some(thumbnail_key) = services.upload_image(thumbnail).await else {
        return SubmitOutcome::UploadFailed;
    };

    let mut uploaded = vec![thumbnail_key.clone()];

    // Every gallery upload settles before any result is inspected.
    let results = join_all(draft.gallery.iter().map(|image| services.upload_image(image))).await;

    let mut gallery_keys = Vec::with_capacity(results.len());
    let mut upload_failed = false;
    for key in results {
        match key {
            Some(key) => {
                uploaded.push(key.clone());
                gallery_keys.push(key);
            }
            None => upload_failed = true,
        }
    }
    if upload_failed {
        services.remove_images(uploaded).await;
        return SubmitOutcome::UploadFailed;
    }

    let row = NewProduct {
        name: draft.name.trim().to_string(),
        description: draft.description.trim().to_string(),
        thumbnail_image: thumbnail_key,
        product_images: gallery_keys,
        price: draft.price.unwrap_or_default(),
        sale_price: draft.sale_price,
    };

    match services.insert_product(row).await {
        Ok(product) => SubmitOutcome::Created(product),
        Err(detail) => {
            services.remove_images(uploaded).await;
            SubmitOutcome::InsertFailed(detail)
        }
    }
}
