//! Integration tests for the generation service against a real database,
//! using a scripted content provider instead of the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;

use newsgen_db::repositories::ArticleRepo;
use newsgen_generator::provider::{ContentProvider, ImageProvider, ProviderError};
use newsgen_generator::service::{Generator, GeneratorConfig};

// ---------------------------------------------------------------------------
// Scripted providers
// ---------------------------------------------------------------------------

/// Replays a fixed sequence of completion replies.
struct ScriptedProvider {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }
}

#[async_trait]
impl ContentProvider for ScriptedProvider {
    async fn draft(&self, _category: &str) -> Result<String, ProviderError> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ProviderError::Upstream("script exhausted".into()))
    }
}

struct FixedImage;

impl ImageProvider for FixedImage {
    fn image_url(&self, _category: &str) -> String {
        "https://picsum.photos/seed/1/800/400".to_string()
    }
}

fn generator(replies: Vec<String>) -> Generator {
    Generator::new(
        Box::new(ScriptedProvider::new(replies)),
        Box::new(FixedImage),
        GeneratorConfig::default(),
    )
}

fn payload(title: &str) -> String {
    format!(
        r#"{{"title": "{title}", "excerpt": "анонс", "content": "текст",
            "meta_title": "{title}", "meta_description": "анонс", "meta_keywords": "а, б"}}"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_parseable_draft_is_published(pool: PgPool) {
    let generator = generator(vec![payload("Свежая новость")]);

    let created = generator.generate_one(&pool).await.unwrap().unwrap();
    assert_eq!(created.title, "Свежая новость");
    assert_eq!(created.slug, "свежая-новость");

    let row = ArticleRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(row.author, "Редакция");
    assert!(row.image_url.contains("picsum.photos"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unparseable_draft_burns_attempt_then_succeeds(pool: PgPool) {
    let generator = generator(vec![
        "это не JSON вообще".to_string(),
        payload("После мусора"),
    ]);

    let created = generator.generate_one(&pool).await.unwrap();
    assert_eq!(created.unwrap().title, "После мусора");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_titles_create_at_most_one_row(pool: PgPool) {
    let reply = payload("Одинаковый заголовок");

    // First cycle publishes the title.
    let generator_one = generator(vec![reply.clone()]);
    assert!(generator_one.generate_one(&pool).await.unwrap().is_some());

    // Second cycle keeps producing the same title and exhausts its attempts.
    let generator_two = generator(vec![reply.clone(), reply.clone(), reply]);
    let outcome = generator_two.generate_one(&pool).await.unwrap();
    assert!(outcome.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news WHERE title = $1")
        .bind("Одинаковый заголовок")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn exhausted_attempts_is_a_noop_not_an_error(pool: PgPool) {
    let generator = generator(vec![
        "мусор".to_string(),
        "ещё мусор".to_string(),
        "совсем мусор".to_string(),
    ]);

    let outcome = generator.generate_one(&pool).await.unwrap();
    assert!(outcome.is_none());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM news")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upstream_failure_propagates(pool: PgPool) {
    // Empty script: the provider errors immediately.
    let generator = generator(Vec::new());

    let err = generator.generate_one(&pool).await.unwrap_err();
    assert!(err.to_string().contains("script exhausted"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn colliding_titles_get_suffixed_slugs(pool: PgPool) {
    // Different titles that slugify identically.
    let first = generator(vec![payload("Новость дня")])
        .generate_one(&pool)
        .await
        .unwrap()
        .unwrap();
    let second = generator(vec![payload("Новость Дня")])
        .generate_one(&pool)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first.slug, "новость-дня");
    assert_eq!(second.slug, "новость-дня-1");
}
