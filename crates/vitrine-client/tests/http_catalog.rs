//! HTTP catalog integration tests.
//!
//! Starts an axum server shaped like the backing catalog API and exercises
//! the real `HttpCatalog` against it.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use vitrine_client::{CatalogConfig, CatalogSource, Error, HttpCatalog};

fn sample_catalog(total: usize) -> Arc<Vec<Value>> {
    let products = (1..=total)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Product {id}"),
                "category": if id % 2 == 0 { "electronics" } else { "men's clothing" },
                "price": id as f64 * 7.5,
                "rating": { "rate": 3.5, "count": 100 + id },
                "image": format!("https://img.example.com/{id}.png"),
            })
        })
        .collect();
    Arc::new(products)
}

#[derive(Deserialize)]
struct PageParams {
    limit: usize,
    page: usize,
}

async fn list_products(
    State(catalog): State<Arc<Vec<Value>>>,
    Query(params): Query<PageParams>,
) -> Json<Vec<Value>> {
    let start = params.page.saturating_sub(1) * params.limit;
    let page: Vec<Value> = catalog.iter().skip(start).take(params.limit).cloned().collect();
    Json(page)
}

async fn get_product(
    State(catalog): State<Arc<Vec<Value>>>,
    Path(id): Path<usize>,
) -> impl IntoResponse {
    match catalog.get(id.saturating_sub(1)) {
        Some(product) => {
            let mut detail = product.clone();
            detail["description"] = json!(format!("Long description for product {id}"));
            (StatusCode::OK, Json(detail)).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Bind to port 0 and return the actual base URL.
async fn start_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_catalog_server(total: usize) -> String {
    let app = Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .with_state(sample_catalog(total));
    start_server(app).await
}

#[tokio::test]
async fn fetches_pages_in_slices() {
    let base = start_catalog_server(12).await;
    let catalog = HttpCatalog::new(CatalogConfig::new(base));

    let first = catalog.fetch_page(1).await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].id, 1);
    assert_eq!(first[0].title, "Product 1");
    assert_eq!(first[0].rating.count, 101);

    let second = catalog.fetch_page(2).await.unwrap();
    let ids: Vec<u64> = second.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![11, 12]);
}

#[tokio::test]
async fn empty_page_is_a_valid_result() {
    let base = start_catalog_server(12).await;
    let catalog = HttpCatalog::new(CatalogConfig::new(base));

    let third = catalog.fetch_page(3).await.unwrap();
    assert!(third.is_empty());
}

#[tokio::test]
async fn page_size_is_carried_in_the_query() {
    let base = start_catalog_server(12).await;
    let catalog = HttpCatalog::new(CatalogConfig::new(base).page_size(5));

    let first = catalog.fetch_page(1).await.unwrap();
    assert_eq!(first.len(), 5);
}

#[tokio::test]
async fn detail_fetch_decodes_the_description() {
    let base = start_catalog_server(12).await;
    let catalog = HttpCatalog::new(CatalogConfig::new(base));

    let detail = catalog.fetch_by_id(4).await.unwrap();
    assert_eq!(detail.id, 4);
    assert_eq!(detail.description, "Long description for product 4");
    assert_eq!(detail.summary().id, 4);
}

#[tokio::test]
async fn missing_id_surfaces_the_status_code() {
    let base = start_catalog_server(3).await;
    let catalog = HttpCatalog::new(CatalogConfig::new(base));

    let err = catalog.fetch_by_id(99).await.unwrap_err();
    match err {
        Error::Status(code) => assert_eq!(code, 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_failure_surfaces_the_status_code() {
    let app = Router::new().route(
        "/products",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = start_server(app).await;
    let catalog = HttpCatalog::new(CatalogConfig::new(base));

    let err = catalog.fetch_page(1).await.unwrap_err();
    match err {
        Error::Status(code) => assert_eq!(code, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let app = Router::new().route(
        "/products",
        get(|| async { ([("content-type", "application/json")], "not json at all") }),
    );
    let base = start_server(app).await;
    let catalog = HttpCatalog::new(CatalogConfig::new(base));

    let err = catalog.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Bind then immediately drop the listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = HttpCatalog::new(CatalogConfig::new(format!("http://{addr}")));
    let err = catalog.fetch_page(1).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}
