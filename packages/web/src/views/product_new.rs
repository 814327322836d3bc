use dioxus::prelude::*;

#[component]
pub fn ProductNew() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "page",
            div { class: "page_header",
                h1 { {ui::t(lang, "form.title")} }
                a { class: "btn", href: "/products", {ui::t(lang, "common.back")} }
            }
            ui::ProductUploadForm {}
        }
    }
}
