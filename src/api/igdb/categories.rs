//! Labels for the enumerated codes IGDB returns in place of strings.

use phf::phf_map;

/// Label returned for codes missing from a table.
pub const UNDEFINED: &str = "Undefined";

static GAME_CATEGORIES: phf::Map<u64, &'static str> = phf_map! {
    0u64 => "Main game",
    1u64 => "DLC / Addon",
    2u64 => "Expansion",
    3u64 => "Bundle",
    4u64 => "Standalone expansion",
};

static GAME_STATUSES: phf::Map<u64, &'static str> = phf_map! {
    0u64 => "Released",
    2u64 => "Alpha",
    3u64 => "Beta",
    4u64 => "Early access",
    5u64 => "Offline",
    6u64 => "Cancelled",
};

static ESRB_RATINGS: phf::Map<u64, &'static str> = phf_map! {
    1u64 => "RP",
    2u64 => "EC",
    3u64 => "E",
    4u64 => "E10+",
    5u64 => "T",
    6u64 => "M",
    7u64 => "AO",
};

static PEGI_RATINGS: phf::Map<u64, &'static str> = phf_map! {
    1u64 => "3",
    2u64 => "7",
    3u64 => "12",
    4u64 => "16",
    5u64 => "18",
};

static CREDIT_CATEGORIES: phf::Map<u64, &'static str> = phf_map! {
    1u64 => "Voice actor",
    2u64 => "Language",
    3u64 => "Company credit",
    4u64 => "Employee",
    5u64 => "Misc",
    6u64 => "Support company",
};

static WEBSITE_CATEGORIES: phf::Map<u64, &'static str> = phf_map! {
    1u64 => "Official",
    2u64 => "Wikia",
    3u64 => "Wikipedia",
    4u64 => "Facebook",
    5u64 => "Twitter",
    6u64 => "Twitch",
    8u64 => "Instagram",
    9u64 => "YouTube",
    10u64 => "iPhone",
    11u64 => "iPad",
    12u64 => "Android",
    13u64 => "Steam",
};

fn lookup(table: &phf::Map<u64, &'static str>, code: u64) -> &'static str {
    table.get(&code).copied().unwrap_or(UNDEFINED)
}

pub fn game_category(code: u64) -> &'static str {
    lookup(&GAME_CATEGORIES, code)
}

pub fn game_status(code: u64) -> &'static str {
    lookup(&GAME_STATUSES, code)
}

pub fn esrb_rating(code: u64) -> &'static str {
    lookup(&ESRB_RATINGS, code)
}

pub fn pegi_rating(code: u64) -> &'static str {
    lookup(&PEGI_RATINGS, code)
}

pub fn credit_category(code: u64) -> &'static str {
    lookup(&CREDIT_CATEGORIES, code)
}

pub fn website_category(code: u64) -> &'static str {
    lookup(&WEBSITE_CATEGORIES, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(game_category(2), "Expansion");
        assert_eq!(esrb_rating(6), "M");
        assert_eq!(pegi_rating(5), "18");
        assert_eq!(credit_category(1), "Voice actor");
        assert_eq!(website_category(13), "Steam");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(game_status(1), UNDEFINED);
        assert_eq!(esrb_rating(0), UNDEFINED);
        assert_eq!(website_category(7), UNDEFINED);
        assert_eq!(credit_category(99), UNDEFINED);
    }
}
