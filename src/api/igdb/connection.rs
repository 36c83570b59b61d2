use std::{fmt, sync::Arc};

use super::transport::{ReqwestTransport, Transport};

/// Read-only settings shared by every request: where to send it, how to
/// authenticate and which transport carries it.
#[derive(Clone)]
pub struct IgdbConnection {
    pub root_url: String,
    pub api_key: String,
    pub transport: Arc<dyn Transport>,
}

impl IgdbConnection {
    pub fn new(api_key: &str) -> Self {
        IgdbConnection {
            root_url: IGDB_SERVICE_URL.to_owned(),
            api_key: api_key.to_owned(),
            transport: Arc::new(ReqwestTransport::default()),
        }
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> [(&str, &str); 2] {
        [
            (API_KEY_HEADER, self.api_key.as_str()),
            ("Accept", "application/json"),
        ]
    }
}

impl fmt::Debug for IgdbConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IgdbConnection")
            .field("root_url", &self.root_url)
            .finish_non_exhaustive()
    }
}

/// Appends the trailing slash endpoints are resolved against.
pub fn normalize_root(root_url: &str) -> String {
    format!("{}/", root_url.trim_end_matches('/'))
}

pub const IGDB_SERVICE_URL: &str = "https://api-endpoint.igdb.com/";
pub const API_KEY_HEADER: &str = "user-key";
