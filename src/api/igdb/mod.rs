mod backend;
pub mod categories;
mod connection;
mod docs;
pub mod endpoints;
mod options;
mod request;
mod service;
mod transport;

pub use backend::{decode, decode_count, decode_one};
pub use connection::{IgdbConnection, API_KEY_HEADER, IGDB_SERVICE_URL};
pub use docs::*;
pub use endpoints::Endpoint;
pub use options::{Direction, Operator, QueryConfig, QueryOption, MAX_LIMIT};
pub use request::{build_url, RequestMode};
pub use service::{IgdbApi, ResourceApi};
pub use transport::{RawResponse, ReqwestTransport, Transport};
