//! This crate contains all shared UI for the workspace.

mod theme;
pub use theme::StorefrontTheme;

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};

mod toast;
pub use toast::{use_toasts, ToastProvider};

pub mod form;

mod product_form;
pub use product_form::ProductUploadForm;

mod products;
pub use products::ProductListPage;
