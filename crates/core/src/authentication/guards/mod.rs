mod api_key_guard;
pub use api_key_guard::{api_key_guard, ApiKeyGuard};
