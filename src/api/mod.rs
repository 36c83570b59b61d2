pub mod igdb;

pub use igdb::IgdbApi;
