use std::fmt;

/// Path segment naming an IGDB resource collection, e.g. `games/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint(&'static str);

impl Endpoint {
    pub const fn new(name: &'static str) -> Self {
        Endpoint(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const CHARACTERS: Endpoint = Endpoint::new("characters/");
pub const COLLECTIONS: Endpoint = Endpoint::new("collections/");
pub const COMPANIES: Endpoint = Endpoint::new("companies/");
pub const FRANCHISES: Endpoint = Endpoint::new("franchises/");
pub const GAMES: Endpoint = Endpoint::new("games/");
pub const GENRES: Endpoint = Endpoint::new("genres/");
pub const KEYWORDS: Endpoint = Endpoint::new("keywords/");
pub const PEOPLE: Endpoint = Endpoint::new("people/");
pub const PLATFORMS: Endpoint = Endpoint::new("platforms/");
pub const THEMES: Endpoint = Endpoint::new("themes/");
