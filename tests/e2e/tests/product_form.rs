use e2e::{browser::Browser, test_server::TestServer};

#[tokio::test]
async fn test_upload_form_renders_all_fields() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/products/new", server.url()))
        .expect("Failed to navigate");

    assert!(page.exists("input#product-name"), "Name input should exist");
    assert!(
        page.exists("textarea#product-description"),
        "Description textarea should exist"
    );
    assert!(
        page.exists("input#product-thumbnail[type='file']"),
        "Thumbnail file input should exist"
    );
    assert!(
        page.exists("input#product-images[multiple]"),
        "Gallery file input should exist"
    );
    assert!(page.exists("input#product-price"), "Price input should exist");
    assert!(
        page.exists("button#product-submit"),
        "Submit button should exist"
    );
}

#[tokio::test]
async fn test_empty_submit_shows_validation_banner() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");

    page.goto(&format!("{}/products/new", server.url()))
        .expect("Failed to navigate");

    page.click("button#product-submit")
        .expect("Failed to click submit");

    // Every required field is missing, so the aggregate banner lists all
    // four messages.
    let banner = page
        .find_element(".banner_error")
        .expect("Validation banner should appear");
    assert!(
        banner.contains("Vui lòng nhập tên sản phẩm."),
        "Banner should list the missing-name message, got: {banner}"
    );
    assert!(
        banner.contains("Vui lòng chọn ảnh đại diện."),
        "Banner should list the missing-thumbnail message, got: {banner}"
    );
}
