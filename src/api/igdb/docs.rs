use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{
    categories,
    endpoints::{self, Endpoint},
};

/// An IGDB entity that is served from its own endpoint.
pub trait Resource: DeserializeOwned + Send + 'static {
    const ENDPOINT: Endpoint;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbGame {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storyline: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub franchise: Option<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub franchises: Vec<u64>,

    #[serde(default)]
    pub hypes: i64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregated_rating: Option<f64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rating: Option<f64>,

    // Parent game of a DLC or expansion.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub developers: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publishers: Vec<u64>,

    #[serde(default)]
    pub category: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u64>,

    // Milliseconds since epoch.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_release_date: Option<i64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expansions: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dlcs: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<IgdbImage>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<IgdbImage>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artworks: Vec<IgdbImage>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub websites: Vec<IgdbWebsite>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esrb: Option<IgdbAgeRating>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pegi: Option<IgdbAgeRating>,

    #[serde(default)]
    pub created_at: i64,

    #[serde(default)]
    pub updated_at: i64,
}

impl IgdbGame {
    pub fn release_date(&self) -> Option<DateTime<Utc>> {
        self.first_release_date
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    pub fn category_label(&self) -> &'static str {
        categories::game_category(self.category)
    }

    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(status) => categories::game_status(status),
            None => categories::UNDEFINED,
        }
    }
}

impl Resource for IgdbGame {
    const ENDPOINT: Endpoint = endpoints::GAMES;
}

/// Image hosted on the IGDB image CDN.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbImage {
    #[serde(alias = "image_id")]
    pub cloudinary_id: String,

    #[serde(default)]
    pub height: i32,

    #[serde(default)]
    pub width: i32,
}

impl IgdbImage {
    pub fn url(&self, size: ImageSize) -> String {
        format!(
            "{IGDB_IMAGES_URL}/t_{}/{}.jpg",
            size.as_str(),
            self.cloudinary_id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    CoverSmall,
    CoverBig,
    ScreenshotMed,
    ScreenshotBig,
    ScreenshotHuge,
    LogoMed,
    Thumb,
    Micro,
    HD,
    FullHD,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::CoverSmall => "cover_small",
            ImageSize::CoverBig => "cover_big",
            ImageSize::ScreenshotMed => "screenshot_med",
            ImageSize::ScreenshotBig => "screenshot_big",
            ImageSize::ScreenshotHuge => "screenshot_huge",
            ImageSize::LogoMed => "logo_med",
            ImageSize::Thumb => "thumb",
            ImageSize::Micro => "micro",
            ImageSize::HD => "720p",
            ImageSize::FullHD => "1080p",
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbWebsite {
    pub category: u64,
    pub url: String,
}

impl IgdbWebsite {
    pub fn category_label(&self) -> &'static str {
        categories::website_category(self.category)
    }
}

/// ESRB or PEGI rating. The meaning of `rating` depends on the board.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbAgeRating {
    pub rating: u64,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub synopsis: String,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbCompany {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<i64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<IgdbImage>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub developed: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub published: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
}

impl Resource for IgdbCompany {
    const ENDPOINT: Endpoint = endpoints::COMPANIES;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbPerson {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mug_shot: Option<IgdbImage>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<i64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub characters: Vec<u64>,
}

impl Resource for IgdbPerson {
    const ENDPOINT: Endpoint = endpoints::PEOPLE;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbCharacter {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mug_shot: Option<IgdbImage>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<u64>,
}

impl Resource for IgdbCharacter {
    const ENDPOINT: Endpoint = endpoints::CHARACTERS;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbPlatform {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alternative_name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<IgdbImage>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<u64>,
}

impl Resource for IgdbPlatform {
    const ENDPOINT: Endpoint = endpoints::PLATFORMS;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbCollection {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<u64>,
}

impl Resource for IgdbCollection {
    const ENDPOINT: Endpoint = endpoints::COLLECTIONS;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbFranchise {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<u64>,
}

impl Resource for IgdbFranchise {
    const ENDPOINT: Endpoint = endpoints::FRANCHISES;
}

/// Genres, themes and keywords share the same shape.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct IgdbAnnotation {
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<u64>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct IgdbGenre(pub IgdbAnnotation);

impl Resource for IgdbGenre {
    const ENDPOINT: Endpoint = endpoints::GENRES;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct IgdbTheme(pub IgdbAnnotation);

impl Resource for IgdbTheme {
    const ENDPOINT: Endpoint = endpoints::THEMES;
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct IgdbKeyword(pub IgdbAnnotation);

impl Resource for IgdbKeyword {
    const ENDPOINT: Endpoint = endpoints::KEYWORDS;
}

#[derive(Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgdbCount {
    pub count: u64,
}

const IGDB_IMAGES_URL: &str = "https://images.igdb.com/igdb/image/upload";
