//! Integration tests for the ByteMart+ storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bytemart-integration-tests
//! ```
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`.
//! A [`Visitor`] carries the session cookie between requests the way a
//! browser would.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use bytemart_core::{Catalog, CatalogSection, PageControls, ProductCard};
use bytemart_storefront::{
    AppState, app, catalog::LoadedCatalog, config::StorefrontConfig,
    middleware::session::SESSION_COOKIE_NAME,
};
use tower::ServiceExt;

/// A response reduced to what the tests inspect.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Page {
    /// Markup of the results grid, empty if the page has none.
    #[must_use]
    pub fn results_grid(&self) -> &str {
        self.body
            .split_once(r#"id="search-results-grid""#)
            .and_then(|(_, rest)| rest.split_once("</section>"))
            .map_or("", |(grid, _)| grid)
    }

    /// Whether the results container carries the `hidden` attribute.
    #[must_use]
    pub fn results_hidden(&self) -> bool {
        self.body
            .contains(r#"id="search-results-container" class="product-container" hidden"#)
    }

    /// Number of catalog sections rendered hidden.
    #[must_use]
    pub fn hidden_sections(&self) -> usize {
        self.body
            .matches(r#"<section class="product-container" hidden>"#)
            .count()
    }

    /// Number of catalog sections rendered visible.
    #[must_use]
    pub fn visible_sections(&self) -> usize {
        self.body
            .matches(r#"<section class="product-container">"#)
            .count()
    }

    /// Number of open order dialogs.
    #[must_use]
    pub fn dialogs(&self) -> usize {
        self.body.matches(r#"class="custom-modal-overlay""#).count()
    }

    /// Decoded chat message from the open dialog's link.
    #[must_use]
    pub fn chat_message(&self) -> Option<String> {
        let (_, rest) = self.body.split_once("?text=")?;
        let (encoded, _) = rest.split_once('"')?;
        urlencoding::decode(encoded).ok().map(|m| m.into_owned())
    }
}

/// A browser-like client holding the session cookie.
pub struct Visitor {
    app: Router,
    cookie: Option<String>,
}

impl Visitor {
    #[must_use]
    pub const fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    /// Send a request and remember any session cookie it sets.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn send(&mut self, method: Method, uri: &str, form: Option<&str>) -> Page {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match form {
            Some(form) => {
                builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = session_cookie(response.headers()) {
            self.cookie = Some(cookie);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        Page {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&mut self, uri: &str) -> Page {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&mut self, uri: &str) -> Page {
        self.send(Method::POST, uri, Some("")).await
    }

    pub async fn post_form(&mut self, uri: &str, form: &str) -> Page {
        self.send(Method::POST, uri, Some(form)).await
    }
}

/// `name=value` of the session cookie set by a response, if any.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .map(String::from)
}

/// A card whose searchable name is its lowercased title.
#[must_use]
pub fn card(title: &str, price: &str) -> ProductCard {
    ProductCard {
        title: Some(title.to_string()),
        price: Some(price.to_string()),
        search_name: Some(title.to_lowercase()),
        ..Default::default()
    }
}

/// Two sections, five cards:
///
/// | index | section     | title                        |
/// |-------|-------------|------------------------------|
/// | 0     | Laptops     | HP EliteBook 840             |
/// | 1     | Laptops     | Dell Latitude 7490           |
/// | 2     | Phones      | Samsung Galaxy A54           |
/// | 3     | Phones      | HP Stream Phone              |
/// | 4     | Phones      | iPhone 12                    |
#[must_use]
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogSection {
            heading: "Laptops".to_string(),
            cards: vec![
                card("HP EliteBook 840", "UGX 1,250,000"),
                card("Dell Latitude 7490", "UGX 1,100,000"),
            ],
        },
        CatalogSection {
            heading: "Phones".to_string(),
            cards: vec![
                card("Samsung Galaxy A54", "UGX 1,350,000"),
                card("HP Stream Phone", "UGX 400,000"),
                card("iPhone 12", "UGX 1,900,000"),
            ],
        },
    ])
}

/// Router over [`test_catalog`] with the given config and controls.
#[must_use]
pub fn test_app(config: StorefrontConfig, controls: PageControls) -> Router {
    app(AppState::with_catalog(
        config,
        LoadedCatalog {
            catalog: test_catalog(),
            controls,
        },
    ))
}

/// A visitor on the default test storefront.
#[must_use]
pub fn visitor() -> Visitor {
    Visitor::new(test_app(
        StorefrontConfig::default(),
        PageControls::default(),
    ))
}
