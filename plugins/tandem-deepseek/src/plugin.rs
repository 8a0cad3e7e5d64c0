//! DeepSeek plugin - ProviderPlugin trait implementation.

use std::sync::Arc;

use tandem_plugin_api::{
    AuthMethod, CredentialKind, PluginError, PluginManifest, ProviderPlugin, ProviderRecord,
    RegistrarContext, export_provider_plugin,
};

use crate::auth::ApiKeyFlow;
use crate::{DOCS_PATH, ENV_VAR, PROVIDER_ID, PROVIDER_LABEL, models};

/// The DeepSeek provider plugin. Stateless: everything it registers is
/// derived from compile-time constants.
#[derive(Default)]
pub struct DeepseekPlugin;

fn provider_record() -> ProviderRecord {
    ProviderRecord {
        id: PROVIDER_ID.to_string(),
        label: PROVIDER_LABEL.to_string(),
        docs_path: DOCS_PATH.to_string(),
        aliases: vec!["ds".to_string()],
        env_vars: vec![ENV_VAR.to_string()],
        models: models::serving_config(),
        auth: vec![AuthMethod {
            id: "api-key".to_string(),
            label: "DeepSeek API Key".to_string(),
            hint: "Enter your DeepSeek API key".to_string(),
            kind: CredentialKind::ApiKey,
            flow: Arc::new(ApiKeyFlow),
        }],
    }
}

impl ProviderPlugin for DeepseekPlugin {
    fn manifest(&self) -> PluginManifest {
        PluginManifest {
            name: "deepseek-auth".to_string(),
            version: "0.1.0".to_string(),
            description: "API key authentication for DeepSeek models".to_string(),
            author: "tandem-team".to_string(),
            ..Default::default()
        }
    }

    fn register(&self, ctx: &mut RegistrarContext) -> Result<(), PluginError> {
        ctx.register_provider(provider_record())?;
        ctx.log_info("DeepSeek provider registered");
        Ok(())
    }
}

// This macro generates the C ABI entry points for dynamic loading
export_provider_plugin!(DeepseekPlugin);
