use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Vi,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Vi => "vi",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "vi" | "vi-vn" => Some(Lang::Vi),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to Vietnamese.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::Vi);
    use_context_provider(|| lang);

    // Best-effort: load from localStorage or browser language after mount.
    use_effect(move || {
        spawn(async move {
            let js = r#"
            (function(){
              try {
                const saved = localStorage.getItem("bazaar_lang");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              } catch(e) {}
              try { return (navigator.language || "vi"); } catch(e) {}
              return "vi";
            })()
            "#;
            if let Ok(v) = document::eval(js).await {
                if let Some(code) = v.as_str() {
                    if let Some(next) = Lang::from_code(code) {
                        lang.set(next);
                    }
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing I18nProvider context, using local Lang::Vi signal");
    use_signal(|| Lang::Vi)
}

pub fn set_lang(lang: Lang) {
    let mut s = use_lang();
    s.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("bazaar_lang","{}"); }} catch(e) {{}} return ""; }})()"#,
            lang.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to Vietnamese if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav / common
        (Lang::Vi, "app.name") => "Bazaar".to_string(),
        (Lang::En, "app.name") => "Bazaar".to_string(),
        (Lang::Vi, "nav.products") => "Sản phẩm".to_string(),
        (Lang::En, "nav.products") => "Products".to_string(),
        (Lang::Vi, "nav.new_product") => "Thêm sản phẩm".to_string(),
        (Lang::En, "nav.new_product") => "Add product".to_string(),
        (Lang::Vi, "lang.label") => "Ngôn ngữ".to_string(),
        (Lang::Vi, "common.loading") => "Đang tải…".to_string(),
        (Lang::En, "common.loading") => "Loading…".to_string(),
        (Lang::Vi, "common.back") => "Quay lại".to_string(),
        (Lang::En, "common.back") => "Back".to_string(),
        (Lang::Vi, "common.error_try_again") => {
            "Có lỗi xảy ra, vui lòng thử lại sau.".to_string()
        }
        (Lang::En, "common.error_try_again") => {
            "Something went wrong, try again later.".to_string()
        }

        // Home
        (Lang::Vi, "home.subtitle") => {
            "Thêm sản phẩm mới, tải ảnh lên kho lưu trữ và theo dõi danh mục ở một nơi."
                .to_string()
        }
        (Lang::En, "home.subtitle") => {
            "Add new products, upload their images, and keep the catalog in one place."
                .to_string()
        }
        (Lang::Vi, "home.cta.new") => "Thêm sản phẩm mới".to_string(),
        (Lang::En, "home.cta.new") => "Add a new product".to_string(),
        (Lang::Vi, "home.cta.products") => "Xem sản phẩm".to_string(),
        (Lang::En, "home.cta.products") => "Browse products".to_string(),

        // Product list
        (Lang::Vi, "products.title") => "Sản phẩm".to_string(),
        (Lang::En, "products.title") => "Products".to_string(),
        (Lang::Vi, "products.new") => "Thêm sản phẩm".to_string(),
        (Lang::En, "products.new") => "New product".to_string(),
        (Lang::Vi, "products.empty") => "Chưa có sản phẩm nào.".to_string(),
        (Lang::En, "products.empty") => "No products yet.".to_string(),

        // Upload form
        (Lang::Vi, "form.title") => "Thêm sản phẩm".to_string(),
        (Lang::En, "form.title") => "Add product".to_string(),
        (Lang::Vi, "form.name") => "Tên sản phẩm".to_string(),
        (Lang::En, "form.name") => "Product name".to_string(),
        (Lang::Vi, "form.name_ph") => "Nhập tên sản phẩm".to_string(),
        (Lang::En, "form.name_ph") => "Enter the product name".to_string(),
        (Lang::Vi, "form.description") => "Mô tả sản phẩm".to_string(),
        (Lang::En, "form.description") => "Product description".to_string(),
        (Lang::Vi, "form.thumbnail") => "Hình thumbnail".to_string(),
        (Lang::En, "form.thumbnail") => "Thumbnail image".to_string(),
        (Lang::Vi, "form.gallery") => "Hình sản phẩm minh hoạ".to_string(),
        (Lang::En, "form.gallery") => "Gallery images".to_string(),
        (Lang::Vi, "form.gallery_selected") => "ảnh đã chọn".to_string(),
        (Lang::En, "form.gallery_selected") => "image(s) selected".to_string(),
        (Lang::Vi, "form.price") => "Giá tiền".to_string(),
        (Lang::En, "form.price") => "Price".to_string(),
        (Lang::Vi, "form.price_ph") => "Nhập giá bán".to_string(),
        (Lang::En, "form.price_ph") => "Enter the selling price".to_string(),
        (Lang::Vi, "form.sale_price") => "Giá khuyến mãi (nếu có)".to_string(),
        (Lang::En, "form.sale_price") => "Sale price (optional)".to_string(),
        (Lang::Vi, "form.submit") => "Đăng sản phẩm".to_string(),
        (Lang::En, "form.submit") => "Submit".to_string(),
        (Lang::Vi, "form.uploading") => "Đang xử lý…".to_string(),
        (Lang::En, "form.uploading") => "Working…".to_string(),
        (Lang::Vi, "form.confirm") => {
            "Bạn có chắc chắn muốn thêm sản phẩm này không?".to_string()
        }
        (Lang::En, "form.confirm") => "Are you sure you want to add this product?".to_string(),
        (Lang::Vi, "form.remove_image") => "Xoá ảnh".to_string(),
        (Lang::En, "form.remove_image") => "Remove image".to_string(),

        // Validation banner
        (Lang::Vi, "errors.title") => "Đã xảy ra lỗi!".to_string(),
        (Lang::En, "errors.title") => "Something went wrong!".to_string(),
        (Lang::Vi, "errors.intro") => "Hãy sửa các lỗi dưới đây:".to_string(),
        (Lang::En, "errors.intro") => "Fix the errors below:".to_string(),
        (Lang::Vi, "errors.dismiss") => "Đóng".to_string(),
        (Lang::En, "errors.dismiss") => "Dismiss".to_string(),
        (Lang::Vi, "validate.name") => "Vui lòng nhập tên sản phẩm.".to_string(),
        (Lang::En, "validate.name") => "Please enter a product name.".to_string(),
        (Lang::Vi, "validate.description") => "Vui lòng nhập mô tả sản phẩm.".to_string(),
        (Lang::En, "validate.description") => "Please enter a product description.".to_string(),
        (Lang::Vi, "validate.thumbnail") => "Vui lòng chọn ảnh đại diện.".to_string(),
        (Lang::En, "validate.thumbnail") => "Please choose a thumbnail image.".to_string(),
        (Lang::Vi, "validate.price") => "Vui lòng nhập giá sản phẩm.".to_string(),
        (Lang::En, "validate.price") => "Please enter a product price.".to_string(),

        // Toasts
        (Lang::Vi, "toast.create_ok") => "Thêm sản phẩm thành công!".to_string(),
        (Lang::En, "toast.create_ok") => "Product added successfully!".to_string(),
        (Lang::Vi, "toast.upload_failed") => "Lỗi upload ảnh, vui lòng thử lại!".to_string(),
        (Lang::En, "toast.upload_failed") => "Image upload failed, please try again!".to_string(),
        (Lang::Vi, "toast.create_failed") => "Đã xảy ra lỗi, vui lòng thử lại!".to_string(),
        (Lang::En, "toast.create_failed") => {
            "Something went wrong, please try again!".to_string()
        }
        (Lang::Vi, "toast.load_products_title") => {
            "Không tải được danh sách sản phẩm".to_string()
        }
        (Lang::En, "toast.load_products_title") => "Could not load products".to_string(),
        (Lang::Vi, "toast.details") => "Chi tiết:".to_string(),
        (Lang::En, "toast.details") => "Details:".to_string(),

        // Fallback: use Vietnamese string if present, else show key.
        (Lang::En, k) => t(Lang::Vi, k),
        (Lang::Vi, _) => key.to_string(),
    }
}
