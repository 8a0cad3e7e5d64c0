//! Interactive API-key auth flow for DeepSeek.
//!
//! One prompt round-trip: ask for a key, trim it, hand the host a
//! profile plus a config patch. The key is not verified against the
//! remote service; the first real request does that.

use async_trait::async_trait;
use tandem_plugin_api::{
    AuthContext, AuthFlow, AuthOutcome, ConfigPatch, Credential, ModelAlias, PluginError, Profile,
    TextPrompt,
};

use crate::{DEFAULT_MODEL, PROVIDER_ID, models};

/// API-key collection flow for DeepSeek.
pub struct ApiKeyFlow;

/// Validation rule for the key prompt. Empty or all-whitespace input is
/// rejected and the prompter re-asks.
fn validate_api_key(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("API key is required".to_string())
    } else {
        None
    }
}

/// Build the outcome for a trimmed, non-empty API key.
///
/// Deterministic: everything except the key itself comes from the
/// provider constants and the fixed catalog.
fn outcome_for_key(api_key: &str) -> AuthOutcome {
    let mut config_patch = ConfigPatch::default();
    config_patch
        .models
        .providers
        .insert(PROVIDER_ID.to_string(), models::serving_config());
    config_patch.agents.defaults.models.insert(
        "deepseek/deepseek-chat".to_string(),
        ModelAlias {
            alias: "DeepSeek V3".to_string(),
        },
    );
    config_patch.agents.defaults.models.insert(
        "deepseek/deepseek-reasoner".to_string(),
        ModelAlias {
            alias: "DeepSeek R1".to_string(),
        },
    );

    AuthOutcome {
        profiles: vec![Profile {
            profile_id: format!("{PROVIDER_ID}:default"),
            credential: Credential::api_key(PROVIDER_ID, api_key),
        }],
        config_patch,
        default_model: DEFAULT_MODEL.to_string(),
        notes: vec![
            "DeepSeek API key configured successfully.".to_string(),
            format!("Default model set to {DEFAULT_MODEL}."),
            "Get your API key at: https://platform.deepseek.com/".to_string(),
        ],
    }
}

#[async_trait]
impl AuthFlow for ApiKeyFlow {
    async fn run(&self, ctx: &AuthContext) -> Result<AuthOutcome, PluginError> {
        let prompt =
            TextPrompt::new("Enter your DeepSeek API key").with_validator(validate_api_key);

        // Suspends until the prompter receives input the validator
        // accepts. Prompter errors and cancellation propagate unchanged.
        let key = ctx.prompter().text(prompt).await?;

        let api_key = key.trim();
        ctx.log_debug("API key collected");

        Ok(outcome_for_key(api_key))
    }
}
