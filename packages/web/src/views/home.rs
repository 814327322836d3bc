use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { id: "hero",
            h1 { {ui::t(lang, "app.name")} }
            p { {ui::t(lang, "home.subtitle")} }
            div { class: "cta_row",
                a { class: "btn primary", href: "/products/new", {ui::t(lang, "home.cta.new")} }
                a { class: "btn", href: "/products", {ui::t(lang, "home.cta.products")} }
            }
        }
    }
}
