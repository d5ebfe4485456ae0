//! Placeholder image providers.
//!
//! Both build seed-style URLs locally; the image host is only contacted by
//! the reader's browser. The provider is chosen by configuration.

use rand::Rng;

use crate::provider::ImageProvider;

/// `picsum.photos` seeded placeholders (the site default).
pub struct PicsumImages;

impl ImageProvider for PicsumImages {
    fn image_url(&self, _category: &str) -> String {
        let seed = rand::rng().random_range(1..=999);
        format!("https://picsum.photos/seed/{seed}/800/400")
    }
}

/// Unsplash keyword placeholders; uses the category as the search term.
pub struct UnsplashImages;

impl ImageProvider for UnsplashImages {
    fn image_url(&self, category: &str) -> String {
        format!("https://source.unsplash.com/800x400/?{category}")
    }
}

/// Resolve an image provider by its configured name.
///
/// Unknown names fall back to picsum, which needs no key or quota.
pub fn from_name(name: &str) -> Box<dyn ImageProvider> {
    match name {
        "unsplash" => Box::new(UnsplashImages),
        _ => Box::new(PicsumImages),
    }
}
