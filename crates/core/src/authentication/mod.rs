mod api_key_header;
pub use api_key_header::{get_api_key, ApiKeyHeaderError, API_KEY_SCHEME};

mod guards;
pub use guards::{api_key_guard, ApiKeyGuard};
