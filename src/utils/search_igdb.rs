use clap::Parser;
use igdb_api::{
    api::igdb::{Direction, IgdbApi, IgdbGame, ImageSize, Operator, QueryOption},
    Status, Tracing,
};
use itertools::Itertools;

/// IGDB search utility.
#[derive(Parser)]
struct Opts {
    /// Game title to search for in IGDB.
    #[clap(short, long)]
    search: Option<String>,

    /// IGDB id of a game to retrieve.
    #[clap(long, conflicts_with = "search", required_unless_present = "search")]
    id: Option<i64>,

    /// Maximum number of search candidates.
    #[clap(long, default_value = "10")]
    limit: i64,

    /// Only return candidates with at least this popularity.
    #[clap(long)]
    min_popularity: Option<f64>,

    /// IGDB API key.
    #[clap(long, env = "IGDB_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Root URL of the IGDB service.
    #[clap(long, default_value = igdb_api::api::igdb::IGDB_SERVICE_URL)]
    root_url: String,
}

/// Quickly retrieve game info from IGDB based on title or id.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("utils/search_igdb")?;

    let opts: Opts = Opts::parse();
    let igdb = IgdbApi::new(&opts.api_key).with_root_url(&opts.root_url);

    let game = match opts.search {
        Some(title) => {
            let mut options = vec![
                QueryOption::fields(["*"]),
                QueryOption::limit(opts.limit),
                QueryOption::order("popularity", Direction::Descending),
            ];
            if let Some(popularity) = opts.min_popularity {
                options.push(QueryOption::filter(
                    "popularity",
                    Operator::GreaterOrEqual,
                    popularity.to_string(),
                ));
            }

            let candidates = match igdb.games().search(&title, &options).await {
                Ok(candidates) => candidates,
                Err(Status::NoResults(_)) => {
                    println!("No candidates found for '{title}'.");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            println!(
                "Found {} candidates.\n{}",
                candidates.len(),
                candidates.iter().map(|game| &game.name).join("\n")
            );
            match candidates.into_iter().next() {
                Some(game) => game,
                None => return Ok(()),
            }
        }
        None => match opts.id {
            Some(id) => {
                igdb.games()
                    .get(id, &[QueryOption::fields(["*"])])
                    .await?
            }
            None => return Err("either --search or --id is required".into()),
        },
    };

    print_game(&game)?;
    Ok(())
}

fn print_game(game: &IgdbGame) -> Result<(), serde_json::Error> {
    if let Some(cover) = &game.cover {
        println!("cover: {}", cover.url(ImageSize::CoverBig));
    }
    println!("{}", serde_json::to_string(game)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_search_or_id() {
        assert!(Opts::try_parse_from(["search_igdb", "--api-key", "k"]).is_err());
    }

    #[test]
    fn search_and_id_conflict() {
        assert!(Opts::try_parse_from([
            "search_igdb",
            "--api-key",
            "k",
            "--search",
            "zelda",
            "--id",
            "7346"
        ])
        .is_err());
    }

    #[test]
    fn id_only() {
        let opts = Opts::try_parse_from(["search_igdb", "--api-key", "k", "--id", "7346"]).unwrap();
        assert_eq!(opts.id, Some(7346));
        assert_eq!(opts.search, None);
    }
}
