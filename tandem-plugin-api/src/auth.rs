//! Auth flow surface: prompting, credentials, and the auth outcome.
//!
//! An auth flow is a single interactive routine that collects a
//! credential from the user and hands the host everything it needs to
//! persist it: one or more profiles, a config patch, a default model
//! selection, and notes to display.
//!
//! The flow talks to the user through the [`Prompter`] capability the
//! host injects. Input validation is a contract on the prompter: the
//! flow supplies a validator, the prompter re-asks until it passes.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::PluginError;
use crate::types::{CredentialKind, ServingConfig};

// ─── Prompting ───────────────────────────────────────────────────────

/// Validation rule for a text prompt.
///
/// Returns `Some(message)` to reject the input; the prompter shows the
/// message and asks again. Returns `None` to accept.
pub type Validator = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// A request for one line of text input from the user.
#[derive(Clone)]
pub struct TextPrompt {
    /// Message shown to the user.
    pub message: String,
    validator: Option<Validator>,
}

impl TextPrompt {
    /// Create a prompt with no validation rule.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            validator: None,
        }
    }

    /// Attach a validation rule.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Run the validation rule against an input.
    ///
    /// Returns the rejection message, or `None` if the input is
    /// acceptable (or no rule is attached).
    pub fn validate(&self, input: &str) -> Option<String> {
        self.validator.as_ref().and_then(|v| v(input))
    }
}

impl std::fmt::Debug for TextPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPrompt")
            .field("message", &self.message)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

/// Text-prompt capability injected by the host.
///
/// Implementations own the re-ask loop: when the prompt's validator
/// rejects an input, the prompter displays the message and asks again
/// rather than returning. Cancellation (user escape, host abort)
/// surfaces as [`PluginError::Cancelled`].
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask the user for a line of text. Suspends until the user
    /// responds with input the prompt accepts, or the operation is
    /// cancelled.
    async fn text(&self, prompt: TextPrompt) -> Result<String, PluginError>;
}

/// Context passed to an auth flow by the host.
pub struct AuthContext {
    provider_id: String,
    prompter: Arc<dyn Prompter>,
}

impl AuthContext {
    /// Create a context for the given provider with the given prompter.
    pub fn new(provider_id: impl Into<String>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            provider_id: provider_id.into(),
            prompter,
        }
    }

    /// The provider this auth run is for.
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// The host's text-prompt capability.
    pub fn prompter(&self) -> &dyn Prompter {
        self.prompter.as_ref()
    }

    /// Log an info message (tagged with the provider id)
    pub fn log_info(&self, message: &str) {
        tracing::info!(provider = %self.provider_id, "{}", message);
    }

    /// Log a debug message
    pub fn log_debug(&self, message: &str) {
        tracing::debug!(provider = %self.provider_id, "{}", message);
    }
}

/// An interactive credential-collection routine.
#[async_trait]
pub trait AuthFlow: Send + Sync {
    /// Run the flow to completion. Errors from the prompter (including
    /// cancellation) propagate unchanged.
    async fn run(&self, ctx: &AuthContext) -> Result<AuthOutcome, PluginError>;
}

// ─── Credentials ─────────────────────────────────────────────────────

/// A secret API key that resists accidental logging.
///
/// `Debug` prints `ApiKey([REDACTED])`; the value is only reachable
/// through [`ApiKey::expose_secret`].
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Create a new API key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Expose the secret key value.
    ///
    /// Use sparingly - only when handing the key to the host for storage.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A credential bound to a provider.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Kind of credential.
    pub kind: CredentialKind,
    /// Provider this credential authenticates against.
    pub provider: String,
    /// The key material.
    pub key: ApiKey,
}

impl Credential {
    /// Create an API-key credential.
    pub fn api_key(provider: impl Into<String>, key: impl Into<ApiKey>) -> Self {
        Self {
            kind: CredentialKind::ApiKey,
            provider: provider.into(),
            key: key.into(),
        }
    }
}

/// A named credential binding the host can use to authenticate requests.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Profile identifier, `"<provider-id>:<name>"`.
    pub profile_id: String,
    /// The credential bound under this profile.
    pub credential: Credential,
}

// ─── Config patch ────────────────────────────────────────────────────

/// Alias entry for a model in the agent defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelAlias {
    /// Display alias for the model.
    pub alias: String,
}

/// `agents.defaults` fragment of a config patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentDefaults {
    /// Per-model defaults, keyed by `<provider>/<model>`.
    pub models: BTreeMap<String, ModelAlias>,
}

/// `agents` fragment of a config patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentsPatch {
    pub defaults: AgentDefaults,
}

/// `models` fragment of a config patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsPatch {
    /// Serving configs keyed by provider id.
    pub providers: BTreeMap<String, ServingConfig>,
}

/// A partial configuration fragment the host merges into its persisted
/// settings. The key paths are fixed: `models.providers.<provider-id>`
/// and `agents.defaults.models.<model>.alias`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigPatch {
    pub models: ModelsPatch,
    pub agents: AgentsPatch,
}

/// Everything a successful auth run hands back to the host.
///
/// Ownership transfers to the host, which stores the profiles and
/// merges the patch into persisted configuration.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Credential profiles to store.
    pub profiles: Vec<Profile>,
    /// Configuration fragment to merge.
    pub config_patch: ConfigPatch,
    /// Model the host should select by default, `<provider>/<model>`.
    pub default_model: String,
    /// Human-readable notes to show the user.
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-secret-key-12345");
        let debug = format!("{:?}", key);
        assert_eq!(debug, "ApiKey([REDACTED])");
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn api_key_expose_secret_returns_value() {
        let key = ApiKey::new("sk-secret-key-12345");
        assert_eq!(key.expose_secret(), "sk-secret-key-12345");
    }

    #[test]
    fn api_key_from_string() {
        let key: ApiKey = "my-key".into();
        assert_eq!(key.expose_secret(), "my-key");

        let key: ApiKey = String::from("my-key").into();
        assert_eq!(key.expose_secret(), "my-key");
    }

    #[test]
    fn credential_debug_does_not_leak_key() {
        let cred = Credential::api_key("deepseek", "sk-very-secret");
        let debug = format!("{:?}", cred);
        assert!(debug.contains("deepseek"));
        assert!(!debug.contains("sk-very-secret"));
    }

    #[test]
    fn text_prompt_without_validator_accepts_anything() {
        let prompt = TextPrompt::new("Enter something");
        assert_eq!(prompt.validate(""), None);
        assert_eq!(prompt.validate("anything"), None);
    }

    #[test]
    fn text_prompt_validator_rejects_with_message() {
        let prompt = TextPrompt::new("Enter a key").with_validator(|value| {
            if value.is_empty() {
                Some("required".to_string())
            } else {
                None
            }
        });
        assert_eq!(prompt.validate(""), Some("required".to_string()));
        assert_eq!(prompt.validate("x"), None);
    }

    #[test]
    fn config_patch_serializes_nested_key_paths() {
        let mut patch = ConfigPatch::default();
        patch.models.providers.insert(
            "acme".to_string(),
            ServingConfig {
                base_url: "https://api.acme.test/v1".to_string(),
                api: "openai-completions".to_string(),
                models: vec![],
            },
        );
        patch.agents.defaults.models.insert(
            "acme/acme-chat".to_string(),
            ModelAlias {
                alias: "Acme Chat".to_string(),
            },
        );

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json["models"]["providers"]["acme"]["baseUrl"],
            "https://api.acme.test/v1"
        );
        assert_eq!(
            json["agents"]["defaults"]["models"]["acme/acme-chat"]["alias"],
            "Acme Chat"
        );
    }

    #[tokio::test]
    async fn auth_context_exposes_prompter() {
        struct EchoPrompter;

        #[async_trait]
        impl Prompter for EchoPrompter {
            async fn text(&self, prompt: TextPrompt) -> Result<String, PluginError> {
                Ok(prompt.message)
            }
        }

        let ctx = AuthContext::new("acme", Arc::new(EchoPrompter));
        assert_eq!(ctx.provider_id(), "acme");

        let answer = ctx.prompter().text(TextPrompt::new("hello")).await.unwrap();
        assert_eq!(answer, "hello");
    }
}
