pub mod authentication;
pub use authentication::{
    api_key_guard, get_api_key, ApiKeyGuard, ApiKeyHeaderError, API_KEY_SCHEME,
};
mod logger;
pub use logger::{setup_info_logger, setup_logger};
mod shared;
pub use shared::{common_types, unauthorized, HttpError};
pub use tracing::level_filters::LevelFilter;
