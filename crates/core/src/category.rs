//! The fixed news category set.
//!
//! Categories drive prompt selection in the generator and the listing
//! filter in the API. They are validated here, not constrained at the
//! storage layer.

/// Every category articles are generated for.
pub const CATEGORIES: &[&str] = &[
    "IT",
    "Игры",
    "Экономика",
    "Технологии",
    "Спорт",
    "Культура",
    "Мир",
    "Криптовалюта",
];

/// The front-page pseudo-category. As a listing filter it means "all".
pub const HOME_CATEGORY: &str = "Главная";

/// Whether `category` belongs to the fixed generation set.
pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}
