pub mod api;
pub mod logging;

mod status;
pub use status::{
    ServerError, Status, ERR_BAD_REQUEST, ERR_FORBIDDEN, ERR_INTERNAL, ERR_TOO_MANY_REQUESTS,
    ERR_UNAUTHORIZED,
};

mod tracing;
pub use crate::tracing::Tracing;
