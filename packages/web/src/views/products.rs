use dioxus::prelude::*;

#[component]
pub fn Products() -> Element {
    rsx! { ui::ProductListPage {} }
}
