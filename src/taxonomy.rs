//! Open Graph base-type taxonomy.
//!
//! Groups the fine-grained `og:type` values into eight coarse categories.
//! The table is compile-time data and can be read from any thread.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Coarse category of an Open Graph object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BaseType {
    /// Activities and sports
    Activity,
    /// Bars, cafes, companies, hotels, restaurants
    Business,
    /// Causes, leagues and teams
    Group,
    /// Bands, government bodies, non-profits, schools
    Organization,
    /// Public figures and profiles
    Person,
    /// Cities, countries, landmarks
    Place,
    /// Albums, books, films, food, games and other products
    Product,
    /// Articles, blogs and websites
    Website,
}

impl BaseType {
    /// The specific `og:type` values this category subsumes.
    pub fn specific_types(&self) -> &'static [&'static str] {
        match self {
            BaseType::Activity => &["activity", "sport"],
            BaseType::Business => &["bar", "company", "cafe", "hotel", "restaurant"],
            BaseType::Group => &["cause", "sports_league", "sports_team"],
            BaseType::Organization => &["band", "government", "non_profit", "school", "university"],
            BaseType::Person => &[
                "actor",
                "athlete",
                "author",
                "director",
                "musician",
                "politician",
                "profile",
                "public_figure",
            ],
            BaseType::Place => &["city", "country", "landmark", "state_province"],
            BaseType::Product => &[
                "album", "book", "drink", "food", "game", "movie", "product", "song", "tv_show",
            ],
            BaseType::Website => &["blog", "website", "article"],
        }
    }

    /// Whether `og_type` is one of this category's specific types.
    pub fn contains(&self, og_type: &str) -> bool {
        self.specific_types().contains(&og_type)
    }

    /// Category name as used in the taxonomy (`"business"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Activity => "activity",
            BaseType::Business => "business",
            BaseType::Group => "group",
            BaseType::Organization => "organization",
            BaseType::Person => "person",
            BaseType::Place => "place",
            BaseType::Product => "product",
            BaseType::Website => "website",
        }
    }
}
