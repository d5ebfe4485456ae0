//! HTTP-level integration tests for the feed endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_string, get, post_json, send};
use sqlx::PgPool;

async fn seed_article(pool: &PgPool, title: &str) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/news",
        serde_json::json!({
            "title": title,
            "category": "IT",
            "excerpt": "Краткое описание",
            "image_url": "https://picsum.photos/seed/1/800/400",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// RSS
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn rss_has_content_type_and_cache_headers(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/rss.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/rss+xml; charset=utf-8"
    );
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "public, max-age=1800"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rss_lists_articles_with_escaped_titles(pool: PgPool) {
    seed_article(&pool, "Скобки <b> & «кавычки»").await;

    let response = get(common::build_test_app(pool), "/rss.xml").await;
    let body = body_string(response).await;

    assert!(body.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(body.contains("<rss version=\"2.0\""));
    assert!(body.contains("Скобки &lt;b&gt; &amp; «кавычки»"));
    assert!(!body.contains("<b> &"));
    assert!(body.contains("<enclosure url=\"https://picsum.photos/seed/1/800/400\""));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rss_rejects_non_get(pool: PgPool) {
    let response = send(common::build_test_app(pool), Method::POST, "/rss.xml").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Sitemap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sitemap_contains_home_and_article_urls(pool: PgPool) {
    seed_article(&pool, "Новость для карты").await;

    let response = get(common::build_test_app(pool), "/sitemap.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/xml"
    );
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "public, max-age=3600"
    );

    let body = body_string(response).await;
    assert!(body.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(body.contains("<changefreq>hourly</changefreq>"));
    assert!(body.contains("/news/новость-для-карты</loc>"));
    assert!(body.contains("<priority>0.8</priority>"));
}

// ---------------------------------------------------------------------------
// robots.txt
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn robots_embeds_request_host(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/robots.txt")
        .header("host", "news.example.org")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/plain");
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "public, max-age=86400"
    );

    let body = body_string(response).await;
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Sitemap: https://news.example.org/sitemap.xml"));
}
