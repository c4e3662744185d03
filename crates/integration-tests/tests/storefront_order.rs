//! Integration tests for the order confirmation dialog.

use bytemart_integration_tests::visitor;

#[tokio::test]
async fn test_order_opens_dialog_for_card() {
    let mut visitor = visitor();
    visitor.get("/").await;

    let page = visitor.post("/order/1").await;
    assert_eq!(page.dialogs(), 1);
    assert!(page.body.contains("Confirm Your Order"));
    assert!(page.body.contains("Dell Latitude 7490"));
    assert!(page.body.contains(r#"target="_blank""#));

    let message = page.chat_message().expect("chat link");
    assert!(message.contains("Dell Latitude 7490"));
    assert!(message.contains("UGX 1,100,000"));
    assert!(message.starts_with("Hello ByteMart+!"));
}

#[tokio::test]
async fn test_order_from_result_copy() {
    let mut visitor = visitor();
    visitor.get("/").await;
    visitor.get("/search?q=stream").await;

    let page = visitor.post("/order/3").await;
    assert_eq!(page.dialogs(), 1);
    let message = page.chat_message().expect("chat link");
    assert!(message.contains("HP Stream Phone"));
    assert!(message.contains("UGX 400,000"));
    // The filter stays active behind the dialog
    assert_eq!(page.hidden_sections(), 2);
}

#[tokio::test]
async fn test_repeated_orders_keep_one_dialog() {
    let mut visitor = visitor();
    visitor.get("/").await;

    for index in [0, 2, 4, 2] {
        let page = visitor.post(&format!("/order/{index}")).await;
        assert_eq!(page.dialogs(), 1);
    }
    let page = visitor.post("/order/4").await;
    let message = page.chat_message().expect("chat link");
    assert!(message.contains("iPhone 12"));
}

#[tokio::test]
async fn test_order_outside_catalog_uses_fallbacks() {
    let mut visitor = visitor();
    visitor.get("/").await;

    let page = visitor.post("/order/42").await;
    let message = page.chat_message().expect("chat link");
    assert!(message.contains("Unknown Product"));
    assert!(message.contains("Price Unknown"));
}

#[tokio::test]
async fn test_content_click_keeps_dialog() {
    let mut visitor = visitor();
    visitor.get("/").await;
    visitor.post("/order/0").await;

    let page = visitor.post_form("/overlay/dismiss", "target=content").await;
    assert_eq!(page.dialogs(), 1);
}

#[tokio::test]
async fn test_close_and_background_remove_dialog() {
    for target in ["close", "background"] {
        let mut visitor = visitor();
        visitor.get("/").await;
        visitor.post("/order/0").await;

        let page = visitor
            .post_form("/overlay/dismiss", &format!("target={target}"))
            .await;
        assert!(page.status.is_success());
        assert_eq!(page.dialogs(), 0, "target {target}");
    }
}

#[tokio::test]
async fn test_unknown_dismiss_target_is_rejected() {
    let mut visitor = visitor();
    visitor.get("/").await;

    let page = visitor.post_form("/overlay/dismiss", "target=elsewhere").await;
    assert!(page.status.is_client_error());
}

#[tokio::test]
async fn test_page_load_clears_dialog() {
    let mut visitor = visitor();
    visitor.get("/").await;
    visitor.post("/order/0").await;

    let page = visitor.get("/").await;
    assert_eq!(page.dialogs(), 0);
}
