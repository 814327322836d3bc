use dioxus::logger::tracing;
use dioxus::prelude::*;

use api::types::{NewProduct, Product};
use async_trait::async_trait;

use crate::form::{
    parse_price, run_submission, validate, ImageFile, ProductDraft, ProductServices, SubmitOutcome,
    SubmitPhase, ValidationErrors,
};

const FORM_CSS: Asset = asset!("/assets/styling/form.css");

/// The thumbnail selection plus its live-preview object URL.
#[derive(Clone, PartialEq)]
struct SelectedThumbnail {
    image: ImageFile,
    preview_url: Option<String>,
}

/// Live backend: the shared server functions. Failures collapse to the
/// `None` sentinel the workflow short-circuits on.
struct ServerBackend;

#[async_trait(?Send)]
impl ProductServices for ServerBackend {
    async fn upload_image(&self, image: &ImageFile) -> Option<String> {
        match api::upload_product_image(
            image.file_name.clone(),
            image.content_type.clone(),
            image.bytes.clone(),
        )
        .await
        {
            Ok(key) if !key.trim().is_empty() => Some(key),
            Ok(_) => None,
            Err(err) => {
                tracing::error!("image upload failed: {err}");
                None
            }
        }
    }

    async fn insert_product(&self, row: NewProduct) -> Result<Product, String> {
        api::create_product(row).await.map_err(|err| err.to_string())
    }

    async fn remove_images(&self, keys: Vec<String>) {
        if keys.is_empty() {
            return;
        }
        if let Err(err) = api::delete_product_images(keys).await {
            tracing::error!("image rollback failed: {err}");
        }
    }
}

#[component]
pub fn ProductUploadForm() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut thumbnail = use_signal(|| None::<SelectedThumbnail>);
    let mut gallery = use_signal(Vec::<ImageFile>::new);
    let mut price = use_signal(String::new);
    let mut sale_price = use_signal(String::new);
    let mut errors = use_signal(ValidationErrors::new);
    let mut phase = use_signal(SubmitPhase::default);

    let name_ph = crate::t(lang, "form.name_ph");
    let price_ph = crate::t(lang, "form.price_ph");

    rsx! {
        document::Link { rel: "stylesheet", href: FORM_CSS }

        if !errors().is_empty() {
            div { class: "banner banner_error", role: "alert",
                button {
                    class: "banner_close",
                    // Dismissal clears everything at once; nothing
                    // re-validates until the next submit attempt.
                    onclick: move |_| errors.set(ValidationErrors::new()),
                    {crate::t(lang, "errors.dismiss")}
                }
                strong { {crate::t(lang, "errors.title")} }
                span { " " }
                span { {crate::t(lang, "errors.intro")} }
                ul {
                    for message in errors().into_values() {
                        li { "{message}" }
                    }
                }
            }
        }

        if phase().is_busy() {
            div { class: "spinner_row",
                div { class: "spinner" }
                p { class: "hint", {crate::t(lang, "form.uploading")} }
            }
        }

        div { class: "panel",
            label { r#for: "product-name", {crate::t(lang, "form.name")} }
            input {
                id: "product-name",
                name: "product-name",
                value: "{name}",
                oninput: move |e| name.set(e.value()),
                placeholder: "{name_ph}",
            }

            label { r#for: "product-description", {crate::t(lang, "form.description")} }
            textarea {
                id: "product-description",
                name: "product-description",
                value: "{description}",
                oninput: move |e| description.set(e.value()),
                rows: 6,
            }

            label { r#for: "product-thumbnail", {crate::t(lang, "form.thumbnail")} }
            input {
                id: "product-thumbnail",
                name: "product-thumbnail",
                r#type: "file",
                accept: "image/*",
                onchange: move |evt| {
                    spawn(async move {
                        let Some(file) = evt.files().into_iter().next() else {
                            thumbnail.set(None);
                            return;
                        };
                        let Ok(bytes) = file.read_bytes().await else {
                            thumbnail.set(None);
                            return;
                        };
                        let preview_url = create_preview_url("product-thumbnail").await;
                        thumbnail.set(Some(SelectedThumbnail {
                            image: ImageFile::from_name_and_bytes(file.name(), bytes.to_vec()),
                            preview_url,
                        }));
                    });
                },
            }
            if let Some(selected) = thumbnail() {
                div { class: "preview",
                    if let Some(url) = &selected.preview_url {
                        img { class: "preview_img", src: "{url}", alt: "{selected.image.file_name}" }
                    } else {
                        p { class: "hint", "{selected.image.file_name}" }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let preview_url = thumbnail().and_then(|t| t.preview_url);
                            thumbnail.set(None);
                            spawn(async move {
                                if let Some(url) = preview_url {
                                    discard_object_url(&url).await;
                                }
                                // Clearing the input lets the same file be
                                // picked again.
                                reset_file_input("product-thumbnail").await;
                            });
                        },
                        {crate::t(lang, "form.remove_image")}
                    }
                }
            }

            label { r#for: "product-images", {crate::t(lang, "form.gallery")} }
            input {
                id: "product-images",
                name: "product-images",
                r#type: "file",
                accept: "image/*",
                multiple: true,
                onchange: move |evt| {
                    spawn(async move {
                        let mut picked = Vec::new();
                        for file in evt.files() {
                            if let Ok(bytes) = file.read_bytes().await {
                                picked.push(ImageFile::from_name_and_bytes(file.name(), bytes.to_vec()));
                            }
                        }
                        gallery.set(picked);
                    });
                },
            }
            if !gallery().is_empty() {
                p { class: "hint",
                    {format!("{} {}", gallery().len(), crate::t(lang, "form.gallery_selected"))}
                }
            }

            label { r#for: "product-price", {crate::t(lang, "form.price")} }
            input {
                id: "product-price",
                name: "product-price",
                r#type: "number",
                min: 0,
                value: "{price}",
                oninput: move |e| price.set(e.value()),
                placeholder: "{price_ph}",
            }

            label { r#for: "sale-price", {crate::t(lang, "form.sale_price")} }
            input {
                id: "sale-price",
                name: "sale-price",
                r#type: "number",
                min: 0,
                value: "{sale_price}",
                oninput: move |e| sale_price.set(e.value()),
                placeholder: "0",
            }

            div { class: "actions",
                button {
                    id: "product-submit",
                    class: if phase().is_busy() { "btn primary disabled" } else { "btn primary" },
                    disabled: phase().is_busy(),
                    onclick: move |_| {
                        if phase().is_busy() {
                            return;
                        }

                        let draft = ProductDraft {
                            name: name(),
                            description: description(),
                            thumbnail: thumbnail().map(|t| t.image),
                            gallery: gallery(),
                            price: parse_price(&price()),
                            sale_price: parse_price(&sale_price()),
                        };
                        let toasts = toasts.clone();

                        spawn(async move {
                            let found = validate(&draft, lang);
                            if !found.is_empty() {
                                errors.set(found);
                                scroll_to_top().await;
                                return;
                            }
                            errors.set(ValidationErrors::new());

                            // Declining the dialog aborts before anything
                            // is uploaded.
                            if !confirm(&crate::t(lang, "form.confirm")).await {
                                return;
                            }

                            phase.set(SubmitPhase::Uploading);
                            scroll_to_top().await;

                            let outcome = run_submission(&draft, &ServerBackend).await;
                            phase.set(outcome.phase());

                            match &outcome {
                                SubmitOutcome::Created(_) => {
                                    name.set(String::new());
                                    description.set(String::new());
                                    price.set(String::new());
                                    sale_price.set(String::new());
                                    if let Some(url) = thumbnail().and_then(|t| t.preview_url) {
                                        discard_object_url(&url).await;
                                    }
                                    thumbnail.set(None);
                                    gallery.set(Vec::new());
                                    reset_file_input("product-thumbnail").await;
                                    reset_file_input("product-images").await;
                                    toasts.success(crate::t(lang, "toast.create_ok"), None);
                                }
                                SubmitOutcome::UploadFailed => {
                                    toasts.error(crate::t(lang, "toast.upload_failed"), None);
                                }
                                SubmitOutcome::InsertFailed(detail) => {
                                    // Diagnostics only; the user gets the
                                    // generic message.
                                    tracing::error!("product insert failed: {detail}");
                                    toasts.error(crate::t(lang, "toast.create_failed"), None);
                                }
                            }

                            // The uploading flag clears whichever path ran.
                            phase.set(SubmitPhase::Idle);
                        });
                    },
                    {crate::t(lang, "form.submit")}
                }
            }
        }
    }
}

/// Object URL for the file currently selected in `input_id`, for a live
/// preview.
async fn create_preview_url(input_id: &str) -> Option<String> {
    document::eval(&format!(
        r#"(function(){{
            const el = document.getElementById("{}");
            if(!el || !el.files || !el.files[0]) return "";
            return URL.createObjectURL(el.files[0]);
        }})()"#,
        js_escape(input_id),
    ))
    .await
    .ok()
    .and_then(|v| v.as_str().map(|s| s.to_string()))
    .filter(|s| !s.is_empty())
}

async fn discard_object_url(url: &str) {
    let _ = document::eval(&format!(
        r#"(function(){{ try {{ URL.revokeObjectURL("{}"); }} catch(e) {{}} return ""; }})()"#,
        js_escape(url),
    ))
    .await;
}

/// Clear a file input so the same file can be picked again.
async fn reset_file_input(input_id: &str) {
    let _ = document::eval(&format!(
        r#"(function(){{
            const el = document.getElementById("{}");
            if(el) el.value = "";
            return "";
        }})()"#,
        js_escape(input_id),
    ))
    .await;
}

async fn confirm(message: &str) -> bool {
    document::eval(&format!(r#"window.confirm("{}")"#, js_escape(message)))
        .await
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

async fn scroll_to_top() {
    let _ = document::eval(
        r#"(function(){ window.scrollTo({ top: 0, behavior: "smooth" }); return ""; })()"#,
    )
    .await;
}

fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
