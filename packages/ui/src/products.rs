use dioxus::prelude::*;

const FEED_CSS: Asset = asset!("/assets/styling/feed.css");

#[component]
pub fn ProductListPage() -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();

    let cfg = use_resource(|| async move { api::public_config().await });
    let products = use_resource(|| async move { api::list_products(50).await });
    let mut load_error = use_signal(|| None::<String>);

    let toasts_for_load = toasts.clone();
    use_effect(move || {
        let err = products().and_then(|res| res.err()).map(|e| e.to_string());
        if err.as_ref() != load_error().as_ref() {
            if let Some(message) = &err {
                toasts_for_load.error(
                    crate::t(lang, "toast.load_products_title"),
                    Some(format!("{} {message}", crate::t(lang, "toast.details"))),
                );
            }
            load_error.set(err);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: FEED_CSS }
        div { class: "page",
            div { class: "page_header",
                h1 { {crate::t(lang, "products.title")} }
                a { class: "btn primary", href: "/products/new", {crate::t(lang, "products.new")} }
            }

            match products() {
                None => rsx! { p { class: "hint", {crate::t(lang, "common.loading")} } },
                Some(Err(_)) => rsx! { p { class: "hint", {crate::t(lang, "common.error_try_again")} } },
                Some(Ok(items)) => rsx! {
                    if items.is_empty() {
                        p { class: "hint", {crate::t(lang, "products.empty")} }
                    }
                    for p in items {
                        div { class: "card",
                            match cfg() {
                                Some(Ok(cfg)) => {
                                    let src = cfg.media_base_url.as_ref().map(|base| {
                                        format!("{}/{}", base.trim_end_matches('/'), p.thumbnail_image)
                                    });
                                    rsx! {
                                        if let Some(src) = src {
                                            img { class: "card_thumb", src: "{src}", alt: "{p.name}" }
                                        }
                                    }
                                }
                                _ => rsx! {},
                            }
                            div { class: "card_top",
                                h3 { "{p.name}" }
                                span { class: "price", {format_price(p.effective_price())} }
                            }
                            if p.sale_price.is_some_and(|sale| sale < p.price) {
                                span { class: "price_struck", {format_price(p.price)} }
                            }
                            p { class: "summary", "{p.description}" }
                        }
                    }
                }
            }
        }
    }
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}₫")
    } else {
        format!("{value:.2}₫")
    }
}
