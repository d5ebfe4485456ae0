//! SEO feed handlers: RSS, sitemap, and robots.txt.
//!
//! Pure read-and-render over the article table. Free-text fields are
//! escaped with `quick_xml::escape` so titles containing `<`, `&`, or
//! quotes cannot break the documents. Absolute URLs are built from the
//! request's Host header.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use chrono::Utc;
use quick_xml::escape::escape;

use newsgen_db::models::article::{FeedEntry, SitemapEntry};
use newsgen_db::repositories::article_repo::FEED_LIMIT;
use newsgen_db::repositories::ArticleRepo;

use crate::error::AppResult;
use crate::state::AppState;

const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";
const SITEMAP_CONTENT_TYPE: &str = "application/xml";
const ROBOTS_CONTENT_TYPE: &str = "text/plain";

const RSS_CACHE_CONTROL: &str = "public, max-age=1800";
const SITEMAP_CACHE_CONTROL: &str = "public, max-age=3600";
const ROBOTS_CACHE_CONTROL: &str = "public, max-age=86400";

const CHANNEL_TITLE: &str = "НОВОСТИ 24 - Актуальные новости России и мира";
const CHANNEL_DESCRIPTION: &str = "Последние новости дня: политика, экономика, \
    технологии, спорт, культура. Оперативные новости России и мира 24/7";
const CHANNEL_CREATOR: &str = "Редакция НОВОСТИ 24";

const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Absolute site base URL from the request's Host header.
///
/// Bare hostnames get an `https://` scheme; a missing header falls back to
/// the site's default domain.
fn base_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("poehali.dev");
    if host.starts_with("http") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

/// Canonical article URL: slug when present, numeric id otherwise.
fn article_url(base: &str, id: i64, slug: &str) -> String {
    if slug.is_empty() {
        format!("{base}/news/{id}")
    } else {
        format!("{base}/news/{slug}")
    }
}

/// GET /rss.xml
pub async fn rss(State(state): State<AppState>, headers: HeaderMap) -> AppResult<impl IntoResponse> {
    let base = base_url(&headers);
    let entries = ArticleRepo::list_for_feed(&state.pool, FEED_LIMIT).await?;
    let body = render_rss(&base, &entries);

    Ok((
        [
            (header::CONTENT_TYPE, RSS_CONTENT_TYPE),
            (header::CACHE_CONTROL, RSS_CACHE_CONTROL),
        ],
        body,
    ))
}

fn render_rss(base: &str, entries: &[FeedEntry]) -> String {
    let mut out = String::with_capacity(1024 + entries.len() * 512);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(
        "<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\n",
    );
    out.push_str("  <channel>\n");
    out.push_str(&format!("    <title>{}</title>\n", escape(CHANNEL_TITLE)));
    out.push_str(&format!("    <link>{base}</link>\n"));
    out.push_str(&format!(
        "    <description>{}</description>\n",
        escape(CHANNEL_DESCRIPTION)
    ));
    out.push_str("    <language>ru</language>\n");
    out.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        Utc::now().format(RFC822_FORMAT)
    ));
    out.push_str(&format!(
        "    <atom:link href=\"{base}/rss.xml\" rel=\"self\" type=\"application/rss+xml\"/>\n"
    ));

    for entry in entries {
        let url = article_url(base, entry.id, &entry.slug);
        out.push_str("    <item>\n");
        out.push_str(&format!("      <title>{}</title>\n", escape(&entry.title)));
        out.push_str(&format!("      <link>{url}</link>\n"));
        out.push_str(&format!(
            "      <description>{}</description>\n",
            escape(&entry.excerpt)
        ));
        out.push_str(&format!(
            "      <category>{}</category>\n",
            escape(&entry.category)
        ));
        out.push_str(&format!(
            "      <pubDate>{}</pubDate>\n",
            entry.published_at.format(RFC822_FORMAT)
        ));
        out.push_str(&format!("      <guid isPermaLink=\"true\">{url}</guid>\n"));
        out.push_str(&format!(
            "      <dc:creator>{}</dc:creator>\n",
            escape(CHANNEL_CREATOR)
        ));
        if !entry.image_url.is_empty() {
            out.push_str(&format!(
                "      <enclosure url=\"{}\" type=\"image/jpeg\"/>\n",
                escape(&entry.image_url)
            ));
        }
        out.push_str("    </item>\n");
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>");
    out
}

/// GET /sitemap.xml
pub async fn sitemap(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let base = base_url(&headers);
    let entries = ArticleRepo::list_for_sitemap(&state.pool).await?;
    let body = render_sitemap(&base, &entries);

    Ok((
        [
            (header::CONTENT_TYPE, SITEMAP_CONTENT_TYPE),
            (header::CACHE_CONTROL, SITEMAP_CACHE_CONTROL),
        ],
        body,
    ))
}

fn render_sitemap(base: &str, entries: &[SitemapEntry]) -> String {
    let mut out = String::with_capacity(256 + entries.len() * 160);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    // Home page entry.
    out.push_str("  <url>\n");
    out.push_str(&format!("    <loc>{base}/</loc>\n"));
    out.push_str(&format!(
        "    <lastmod>{}</lastmod>\n",
        Utc::now().format(DATE_FORMAT)
    ));
    out.push_str("    <changefreq>hourly</changefreq>\n");
    out.push_str("    <priority>1.0</priority>\n");
    out.push_str("  </url>\n");

    for entry in entries {
        let url = article_url(base, entry.id, &entry.slug);
        // Rows start with updated_at == published_at, so this covers
        // never-edited articles too.
        let last_mod = entry.updated_at;
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", escape(&url)));
        out.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            last_mod.format(DATE_FORMAT)
        ));
        out.push_str("    <changefreq>daily</changefreq>\n");
        out.push_str("    <priority>0.8</priority>\n");
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>");
    out
}

/// GET /robots.txt
pub async fn robots(headers: HeaderMap) -> impl IntoResponse {
    let base = base_url(&headers);
    let body = format!(
        "User-agent: *\n\
         Allow: /\n\
         \n\
         User-agent: Googlebot\n\
         Allow: /\n\
         Crawl-delay: 1\n\
         \n\
         User-agent: Yandex\n\
         Allow: /\n\
         Crawl-delay: 1\n\
         \n\
         User-agent: Bingbot\n\
         Allow: /\n\
         Crawl-delay: 1\n\
         \n\
         Sitemap: {base}/sitemap.xml\n"
    );

    (
        [
            (header::CONTENT_TYPE, ROBOTS_CONTENT_TYPE),
            (header::CACHE_CONTROL, ROBOTS_CACHE_CONTROL),
        ],
        body,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
