//! Provider metadata and model catalog types

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::AuthFlow;

/// Plugin manifest containing metadata about the plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Plugin name (used for identification and log tagging)
    pub name: String,
    /// Plugin version (semver)
    pub version: String,
    /// API version this plugin was built against
    pub api_version: u32,
    /// Human-readable description
    pub description: String,
    /// Plugin author
    pub author: String,
}

impl Default for PluginManifest {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "0.0.1".to_string(),
            api_version: crate::API_VERSION,
            description: String::new(),
            author: String::new(),
        }
    }
}

/// Input modality a model accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputModality {
    /// Plain text input.
    Text,
    /// Image input.
    Image,
}

/// Per-token pricing for a model, in USD per million tokens.
///
/// Providers without published pricing report all-zero cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCost {
    pub input: f64,
    pub output: f64,
    pub cache_read: f64,
    pub cache_write: f64,
}

/// Static metadata describing one callable model variant.
///
/// Serialized field names follow the host's persisted config format
/// (camelCase), so a definition can be written into a config patch as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    /// Model identifier as the provider's API knows it.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Whether this is a reasoning model.
    pub reasoning: bool,
    /// Supported input modalities.
    pub input: Vec<InputModality>,
    /// Pricing information.
    pub cost: ModelCost,
    /// Maximum context window size in tokens.
    pub context_window: u32,
    /// Maximum output tokens.
    pub max_tokens: u32,
}

impl ModelDefinition {
    /// Create a new model definition builder.
    pub fn builder(id: &str, name: &str) -> ModelDefinitionBuilder {
        ModelDefinitionBuilder::new(id, name)
    }
}

/// Builder for constructing `ModelDefinition`.
///
/// Defaults: text-only input, reasoning off, zero cost, 65536-token
/// context window, 8192 max output tokens.
#[derive(Debug)]
pub struct ModelDefinitionBuilder {
    id: String,
    name: String,
    reasoning: bool,
    input: Vec<InputModality>,
    cost: ModelCost,
    context_window: u32,
    max_tokens: u32,
}

impl ModelDefinitionBuilder {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            reasoning: false,
            input: vec![InputModality::Text],
            cost: ModelCost::default(),
            context_window: 65536,
            max_tokens: 8192,
        }
    }

    /// Set the supported input modalities.
    pub fn input(mut self, input: Vec<InputModality>) -> Self {
        self.input = input;
        self
    }

    /// Mark as a reasoning model.
    pub fn reasoning(mut self) -> Self {
        self.reasoning = true;
        self
    }

    /// Set the pricing information.
    pub fn cost(mut self, cost: ModelCost) -> Self {
        self.cost = cost;
        self
    }

    /// Set the context window size.
    pub fn context_window(mut self, tokens: u32) -> Self {
        self.context_window = tokens;
        self
    }

    /// Set the maximum output tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = tokens;
        self
    }

    /// Build the `ModelDefinition`.
    pub fn build(self) -> ModelDefinition {
        ModelDefinition {
            id: self.id,
            name: self.name,
            reasoning: self.reasoning,
            input: self.input,
            cost: self.cost,
            context_window: self.context_window,
            max_tokens: self.max_tokens,
        }
    }
}

/// Model-serving configuration for a provider: where to send requests,
/// which request schema to use, and which models are available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServingConfig {
    /// Base URL of the provider's API.
    pub base_url: String,
    /// API dialect tag understood by the host's request layer
    /// (e.g. "openai-completions").
    pub api: String,
    /// Models served at this endpoint.
    pub models: Vec<ModelDefinition>,
}

/// Kind of credential an auth method produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    /// A static API key.
    ApiKey,
}

/// One way of authenticating against a provider.
///
/// The `flow` runs when the user initiates auth for this method; the
/// remaining fields are display metadata for the host's auth picker.
#[derive(Clone)]
pub struct AuthMethod {
    /// Method identifier, unique within the provider.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Short hint shown alongside the prompt.
    pub hint: String,
    /// Kind of credential this method produces.
    pub kind: CredentialKind,
    /// The interactive flow that collects the credential.
    pub flow: Arc<dyn AuthFlow>,
}

impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthMethod")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("hint", &self.hint)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Everything the host needs to know about a provider.
///
/// Constructed once by the plugin at registration time; the host's
/// provider registry owns it afterward.
#[derive(Debug, Clone)]
pub struct ProviderRecord {
    /// Provider identifier (e.g. "deepseek").
    pub id: String,
    /// Display label.
    pub label: String,
    /// Documentation path within the host's docs site.
    pub docs_path: String,
    /// Short aliases accepted wherever the provider id is.
    pub aliases: Vec<String>,
    /// Environment variable names the host recognizes as credential
    /// sources for this provider. Declared here, read by the host.
    pub env_vars: Vec<String>,
    /// Model-serving configuration.
    pub models: ServingConfig,
    /// Available auth methods.
    pub auth: Vec<AuthMethod>,
}
