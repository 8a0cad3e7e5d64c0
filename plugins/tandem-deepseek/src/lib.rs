//! tandem-deepseek - DeepSeek provider plugin
//!
//! Registers the DeepSeek (深度求索) model provider with tandem: a fixed
//! two-model catalog served over the OpenAI-completions dialect, plus an
//! interactive API-key auth flow.
//!
//! ## Building
//!
//! ```bash
//! cargo build --release
//! ```
//!
//! ## Installing
//!
//! ```bash
//! mkdir -p ~/.config/tandem/plugins/deepseek
//! cp target/release/libtandem_deepseek.so ~/.config/tandem/plugins/deepseek/deepseek.so
//! tandem plugin enable deepseek
//! ```

pub mod auth;
pub mod models;
pub mod plugin;

pub use auth::ApiKeyFlow;
pub use plugin::DeepseekPlugin;

/// Provider id, as the host's registry and config know it.
pub const PROVIDER_ID: &str = "deepseek";

/// Display label.
pub const PROVIDER_LABEL: &str = "DeepSeek (深度求索)";

/// Model the host selects by default after auth.
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat";

/// Base URL of the DeepSeek API.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Request/response schema the host's request layer uses for DeepSeek.
pub const API_DIALECT: &str = "openai-completions";

/// Documentation path within the host's docs site.
pub const DOCS_PATH: &str = "/providers/deepseek";

/// Environment variable the host recognizes as a credential source.
pub const ENV_VAR: &str = "DEEPSEEK_API_KEY";
