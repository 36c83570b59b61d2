use itertools::Itertools;
use url::Url;

use crate::Status;

use super::{
    endpoints::Endpoint,
    options::{QueryConfig, QueryOption},
};

/// Shape of the request path. Callers choose the mode explicitly; an empty id
/// list is never treated as an index listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode<'a> {
    /// `<endpoint><id>`
    Single(i64),
    /// `<endpoint><id>,<id>,...` in caller order.
    Multi(&'a [i64]),
    /// `<endpoint>?search=<text>`
    Search(&'a str),
    /// `<endpoint>` shaped only by options.
    Index,
    /// `<endpoint>count`
    Count,
    /// `<endpoint>meta`
    Meta,
}

/// Builds the request URL for `endpoint` under `root`.
///
/// Pure function of its inputs: identical arguments always produce the same
/// string. Argument and pagination checks run here, before anything is sent.
pub fn build_url(
    root: &str,
    endpoint: Endpoint,
    mode: RequestMode<'_>,
    opts: &[QueryOption],
) -> Result<String, Status> {
    if opts
        .iter()
        .any(|opt| matches!(opt, QueryOption::Search(_)))
    {
        return Err(Status::invalid_argument(format!(
            "search text for '{endpoint}' must be given with RequestMode::Search"
        )));
    }

    let mut seed = vec![];
    let suffix = match mode {
        RequestMode::Single(id) => {
            check_id(id)?;
            id.to_string()
        }
        RequestMode::Multi(ids) => {
            if ids.is_empty() {
                return Err(Status::invalid_argument(format!(
                    "empty id list for '{endpoint}'"
                )));
            }
            for id in ids {
                check_id(*id)?;
            }
            ids.iter().join(",")
        }
        RequestMode::Search(text) => {
            if text.trim().is_empty() {
                return Err(Status::invalid_argument(format!(
                    "empty search text for '{endpoint}'"
                )));
            }
            seed.push(QueryOption::search(text));
            String::new()
        }
        RequestMode::Index => String::new(),
        RequestMode::Count => "count".to_owned(),
        RequestMode::Meta => "meta".to_owned(),
    };

    let config = QueryConfig::apply(seed.iter().chain(opts));
    config.validate()?;

    let mut url = Url::parse(root)
        .and_then(|root| root.join(&format!("{endpoint}{suffix}")))
        .map_err(|e| Status::invalid_argument(format!("invalid url for '{endpoint}': {e}")))?;

    let pairs = config.query_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url.into())
}

fn check_id(id: i64) -> Result<(), Status> {
    match id < 0 {
        true => Err(Status::invalid_argument(format!(
            "id={id} must not be negative"
        ))),
        false => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::igdb::{
        endpoints::{FRANCHISES, GAMES},
        options::{Direction, Operator},
    };

    fn root() -> &'static str {
        "https://api-endpoint.igdb.com/"
    }

    #[test]
    fn single_by_id() {
        let url = build_url(root(), FRANCHISES, RequestMode::Single(596), &[]).unwrap();
        assert_eq!(url, "https://api-endpoint.igdb.com/franchises/596");
    }

    #[test]
    fn multi_preserves_caller_order() {
        let url = build_url(root(), GAMES, RequestMode::Multi(&[7, 3, 9, 3]), &[]).unwrap();
        assert_eq!(url, "https://api-endpoint.igdb.com/games/7,3,9,3");
    }

    #[test]
    fn index_has_no_suffix() {
        let url = build_url(root(), GAMES, RequestMode::Index, &[]).unwrap();
        assert_eq!(url, "https://api-endpoint.igdb.com/games/");
    }

    #[test]
    fn count_and_meta_suffixes() {
        assert_eq!(
            build_url(root(), GAMES, RequestMode::Count, &[]).unwrap(),
            "https://api-endpoint.igdb.com/games/count"
        );
        assert_eq!(
            build_url(root(), GAMES, RequestMode::Meta, &[]).unwrap(),
            "https://api-endpoint.igdb.com/games/meta"
        );
    }

    #[test]
    fn empty_id_list_is_rejected() {
        assert!(matches!(
            build_url(root(), GAMES, RequestMode::Multi(&[]), &[]),
            Err(Status::InvalidArgument(_))
        ));
    }

    #[test]
    fn negative_ids_are_rejected() {
        assert!(matches!(
            build_url(root(), GAMES, RequestMode::Single(-5), &[]),
            Err(Status::InvalidArgument(_))
        ));
        assert!(matches!(
            build_url(root(), GAMES, RequestMode::Multi(&[1, -2]), &[]),
            Err(Status::InvalidArgument(_))
        ));
    }

    #[test]
    fn blank_search_is_rejected() {
        assert!(matches!(
            build_url(root(), GAMES, RequestMode::Search("  "), &[]),
            Err(Status::InvalidArgument(_))
        ));
    }

    #[test]
    fn search_option_outside_search_mode_is_rejected() {
        assert!(matches!(
            build_url(root(), GAMES, RequestMode::Index, &[QueryOption::search("")]),
            Err(Status::InvalidArgument(_))
        ));
        assert!(matches!(
            build_url(
                root(),
                GAMES,
                RequestMode::Single(1),
                &[QueryOption::search("zelda")]
            ),
            Err(Status::InvalidArgument(_))
        ));
    }

    #[test]
    fn search_option_cannot_replace_search_text() {
        assert!(matches!(
            build_url(
                root(),
                GAMES,
                RequestMode::Search("mario"),
                &[QueryOption::search("  ")]
            ),
            Err(Status::InvalidArgument(_))
        ));
        assert!(matches!(
            build_url(
                root(),
                GAMES,
                RequestMode::Search("mario"),
                &[QueryOption::Search("zelda".to_owned())]
            ),
            Err(Status::InvalidArgument(_))
        ));
    }

    #[test]
    fn out_of_range_limit_fails_at_build() {
        assert!(matches!(
            build_url(root(), GAMES, RequestMode::Index, &[QueryOption::limit(51)]),
            Err(Status::OutOfRange(_))
        ));
    }

    fn search_opts() -> Vec<QueryOption> {
        vec![
            QueryOption::order("popularity", Direction::Descending),
            QueryOption::offset(5),
            QueryOption::limit(10),
            QueryOption::filter("popularity", Operator::GreaterOrEqual, "50"),
            QueryOption::fields(["id", "name"]),
        ]
    }

    #[test]
    fn search_with_options() {
        let url = build_url(
            root(),
            GAMES,
            RequestMode::Search("mario party"),
            &search_opts(),
        )
        .unwrap();

        assert!(url.starts_with("https://api-endpoint.igdb.com/games/?"));
        assert!(url.contains("search=mario+party"));
        assert!(url.contains("limit=10"));
        assert!(url.contains("offset=5"));

        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("search".to_owned(), "mario party".to_owned()),
                ("fields".to_owned(), "id,name".to_owned()),
                ("filter[popularity][gte]".to_owned(), "50".to_owned()),
                ("limit".to_owned(), "10".to_owned()),
                ("offset".to_owned(), "5".to_owned()),
                ("order".to_owned(), "popularity:desc".to_owned()),
            ]
        );
    }

    #[test]
    fn urls_are_deterministic() {
        let first = build_url(
            root(),
            GAMES,
            RequestMode::Search("mario party"),
            &search_opts(),
        )
        .unwrap();
        let second = build_url(
            root(),
            GAMES,
            RequestMode::Search("mario party"),
            &search_opts(),
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_root_is_rejected() {
        assert!(matches!(
            build_url("not a url", GAMES, RequestMode::Index, &[]),
            Err(Status::InvalidArgument(_))
        ));
    }

    #[test]
    fn nested_root_path() {
        let url = build_url(
            "http://127.0.0.1:8080/v1/",
            GAMES,
            RequestMode::Single(1),
            &[],
        )
        .unwrap();
        assert_eq!(url, "http://127.0.0.1:8080/v1/games/1");
    }
}
